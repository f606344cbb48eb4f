pub mod booking_repo;
pub use booking_repo::BookingRepository;
pub mod application_repo;
pub use application_repo::ApplicationRepository;
pub mod member_repo;
pub use member_repo::MemberRepository;
pub mod content_repo;
pub use content_repo::ContentRepository;
pub mod admin_repo;
pub use admin_repo::AdminRepository;
