pub mod admins;
pub mod applications;
pub mod bookings;
pub mod content;
pub mod dashboard;
pub mod members;
