// src/gateway/endpoints.rs

// Rotas da API principal consumidas por este serviço.

pub const BOOKINGS: &str = "/api/member/bookings";
pub const BOOKINGS_TODAY: &str = "/api/member/bookings/today";
pub const APPLICATIONS: &str = "/api/applications";
pub const MEMBERS: &str = "/api/members";
pub const CONTENT: &str = "/api/content";
pub const ADMINS: &str = "/api/admins";

pub fn booking(id: &str) -> String {
    format!("/api/bookings/{}", id)
}

pub fn booking_status(id: &str) -> String {
    format!("/api/bookings/{}/status", id)
}

pub fn application(id: i64) -> String {
    format!("{}/{}", APPLICATIONS, id)
}

pub fn application_status(id: i64) -> String {
    format!("{}/{}/status", APPLICATIONS, id)
}

pub fn member_status(id: i64) -> String {
    format!("{}/{}/status", MEMBERS, id)
}

pub fn admin(id: i64) -> String {
    format!("{}/{}", ADMINS, id)
}
