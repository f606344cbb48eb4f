pub mod boards;
pub mod filters;
pub mod normalizer;
pub mod reports;
pub mod transitions;
pub use transitions::TransitionController;
