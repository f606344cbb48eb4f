// src/services/reports.rs

use crate::{
    models::{
        application::{Application, MembershipType},
        booking::{Booking, SessionType},
        dashboard::{ReportSummary, Split},
        member::Member,
    },
    services::normalizer::{derive_clients, tally_applications, tally_bookings, tally_members},
};

// Percentual com uma casa decimal. Denominador zero vira 0.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = part as f64 * 100.0 / total as f64;
    (raw * 10.0).round() / 10.0
}

fn split(label: &str, count: usize, total: usize) -> Split {
    Split {
        label: label.to_string(),
        count,
        percentage: percentage(count, total),
    }
}

pub fn build_report(
    bookings: &[Booking],
    applications: &[Application],
    members: &[Member],
) -> ReportSummary {
    let booking_stats = tally_bookings(bookings);
    let application_stats = tally_applications(applications);
    let member_stats = tally_members(members);

    // Taxa de aprovação só sobre candidaturas já decididas
    let decided = application_stats.approved + application_stats.rejected;

    let online = bookings
        .iter()
        .filter(|b| b.session_type == SessionType::Online)
        .count();
    let professional = applications
        .iter()
        .filter(|a| a.membership_type == MembershipType::Professional)
        .count();

    ReportSummary {
        completion_rate: percentage(booking_stats.completed, booking_stats.total_sessions),
        cancellation_rate: percentage(booking_stats.cancelled, booking_stats.total_sessions),
        approval_rate: percentage(application_stats.approved, decided),
        session_types: vec![
            split("online", online, bookings.len()),
            split("in-person", bookings.len() - online, bookings.len()),
        ],
        membership_types: vec![
            split("professional", professional, applications.len()),
            split("student", applications.len() - professional, applications.len()),
        ],
        unique_clients: derive_clients(bookings).len(),
        bookings: booking_stats,
        applications: application_stats,
        members: member_stats,
    }
}
