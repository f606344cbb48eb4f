// src/services/normalizer.rs

// Visões derivadas das coleções já buscadas. Tudo aqui é função pura:
// mesma entrada, mesma saída, sem efeitos colaterais.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use crate::models::{
    application::{Application, ApplicationStatus},
    booking::{Booking, BookingStatus},
    dashboard::{ApplicationStats, BookingStats, Client, MemberStats},
    member::{Member, MemberStatus},
};

pub const UPCOMING_WINDOW_DAYS: i64 = 7;

// =========================================================================
//  1. CONTAGENS POR STATUS
// =========================================================================

pub fn tally_bookings(bookings: &[Booking]) -> BookingStats {
    let mut stats = BookingStats {
        total_sessions: bookings.len(),
        ..Default::default()
    };
    for booking in bookings {
        match booking.status {
            BookingStatus::Pending => stats.pending += 1,
            BookingStatus::Confirmed => stats.confirmed += 1,
            BookingStatus::Completed => stats.completed += 1,
            BookingStatus::Cancelled => stats.cancelled += 1,
            BookingStatus::Rescheduled => stats.rescheduled += 1,
        }
    }
    stats
}

pub fn tally_applications(applications: &[Application]) -> ApplicationStats {
    let mut stats = ApplicationStats {
        total: applications.len(),
        ..Default::default()
    };
    for app in applications {
        match app.application_status {
            ApplicationStatus::Pending => stats.pending += 1,
            ApplicationStatus::UnderReview => stats.under_review += 1,
            ApplicationStatus::Approved => stats.approved += 1,
            ApplicationStatus::Rejected => stats.rejected += 1,
        }
    }
    stats
}

pub fn tally_members(members: &[Member]) -> MemberStats {
    let mut stats = MemberStats {
        total: members.len(),
        ..Default::default()
    };
    for member in members {
        match member.member_status {
            MemberStatus::Active => stats.active += 1,
            MemberStatus::Pending => stats.pending += 1,
            MemberStatus::Suspended => stats.suspended += 1,
            MemberStatus::PendingPasswordSetup => stats.pending_password_setup += 1,
        }
    }
    stats
}

// =========================================================================
//  2. CLIENTES
// =========================================================================

// Agrupa por nome exato (sensível a maiúsculas), na ordem em que aparecem.
// E-mail e telefone são os do primeiro agendamento visto.
pub fn derive_clients(bookings: &[Booking]) -> Vec<Client> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut clients: Vec<Client> = Vec::new();

    for booking in bookings {
        let slot = *index
            .entry(booking.client_name.as_str())
            .or_insert_with(|| {
                clients.push(Client {
                    name: booking.client_name.clone(),
                    email: booking.client_email.clone(),
                    phone: booking.client_phone.clone(),
                    total_sessions: 0,
                    last_session: None,
                    total_bookings: 0,
                });
                clients.len() - 1
            });

        let client = &mut clients[slot];
        client.total_bookings += 1;

        if booking.status == BookingStatus::Completed {
            client.total_sessions += 1;
            if client.last_session.is_none_or(|last| booking.booking_date > last) {
                client.last_session = Some(booking.booking_date);
            }
        }
    }

    clients
}

// =========================================================================
//  3. JANELAS DE DATA
// =========================================================================

// Confirmados entre hoje e hoje + 7 dias, inclusive nas duas pontas.
pub fn upcoming_bookings(bookings: &[Booking], today: NaiveDate) -> Vec<Booking> {
    let horizon = today + Duration::days(UPCOMING_WINDOW_DAYS);
    bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed)
        .filter(|b| b.booking_date >= today && b.booking_date <= horizon)
        .cloned()
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::{booking, day};
    use super::*;
    use BookingStatus::*;

    #[test]
    fn tally_matches_example_collection() {
        let today = day(2026, 10, 18);
        let bookings = vec![
            booking("1", "A", today, Pending),
            booking("2", "B", today, Pending),
            booking("3", "C", today, Confirmed),
            booking("4", "D", today, Completed),
            booking("5", "E", today, Cancelled),
        ];

        let stats = tally_bookings(&bookings);
        assert_eq!(
            stats,
            BookingStats {
                total_sessions: 5,
                pending: 2,
                confirmed: 1,
                completed: 1,
                cancelled: 1,
                rescheduled: 0,
            }
        );
    }

    #[test]
    fn tally_buckets_sum_to_length() {
        let today = day(2026, 10, 18);
        let statuses = [Pending, Confirmed, Cancelled, Completed, Rescheduled];
        let bookings: Vec<_> = (0..23)
            .map(|i| booking(&i.to_string(), "X", today, statuses[i % statuses.len()]))
            .collect();

        let s = tally_bookings(&bookings);
        assert_eq!(
            s.pending + s.confirmed + s.completed + s.cancelled + s.rescheduled,
            bookings.len()
        );
        assert_eq!(s.total_sessions, bookings.len());
    }

    #[test]
    fn clients_count_only_completed_sessions() {
        let bookings = vec![
            booking("1", "Jane Doe", day(2026, 9, 1), Completed),
            booking("2", "Sam Lee", day(2026, 9, 2), Completed),
            booking("3", "Jane Doe", day(2026, 9, 20), Completed),
            booking("4", "Jane Doe", day(2026, 10, 30), Confirmed),
            booking("5", "jane doe", day(2026, 9, 25), Completed),
        ];

        let clients = derive_clients(&bookings);
        let names: Vec<_> = clients.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Jane Doe", "Sam Lee", "jane doe"]);

        let jane = &clients[0];
        assert_eq!(jane.total_sessions, 2);
        assert_eq!(jane.total_bookings, 3);
        assert_eq!(jane.last_session, Some(day(2026, 9, 20)));
        assert_eq!(jane.email, "jane.doe@example.com");
    }

    #[test]
    fn client_contact_is_first_seen() {
        let mut first = booking("1", "Jane Doe", day(2026, 9, 1), Pending);
        first.client_phone = Some("555-0100".into());
        let mut second = booking("2", "Jane Doe", day(2026, 9, 2), Pending);
        second.client_email = "other@example.com".into();
        second.client_phone = Some("555-0199".into());

        let clients = derive_clients(&[first, second]);
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].phone.as_deref(), Some("555-0100"));
        assert_eq!(clients[0].email, "jane.doe@example.com");
        assert_eq!(clients[0].last_session, None);
    }

    #[test]
    fn upcoming_window_is_inclusive_and_confirmed_only() {
        let today = day(2026, 10, 18);
        let bookings = vec![
            booking("today", "A", today, Confirmed),
            booking("plus7", "B", day(2026, 10, 25), Confirmed),
            booking("plus8", "C", day(2026, 10, 26), Confirmed),
            booking("yesterday", "D", day(2026, 10, 17), Confirmed),
            booking("pending", "E", day(2026, 10, 20), Pending),
        ];

        let ids: Vec<_> = upcoming_bookings(&bookings, today)
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec!["today", "plus7"]);
    }

    #[test]
    fn normalization_is_idempotent() {
        let bookings = vec![
            booking("1", "Jane Doe", day(2026, 9, 1), Completed),
            booking("2", "Sam Lee", day(2026, 10, 19), Confirmed),
        ];
        assert_eq!(derive_clients(&bookings), derive_clients(&bookings));
        assert_eq!(tally_bookings(&bookings), tally_bookings(&bookings));
    }
}
