pub mod client;
pub use client::ApiGateway;
pub mod session;
pub use session::Session;
pub mod endpoints;
