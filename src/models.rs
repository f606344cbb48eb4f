pub mod admin;
pub mod application;
pub mod booking;
pub mod confirmation;
pub mod content;
pub mod dashboard;
pub mod member;
