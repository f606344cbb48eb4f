// src/models/booking.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    Rescheduled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SessionType {
    #[serde(rename = "online")]
    Online,
    #[serde(rename = "in-person")]
    InPerson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Normal,
    High,
    Urgent,
}

// As ações que o painel oferece para um agendamento.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingAction {
    Confirm,
    Cancel,
    Reschedule,
    Complete,
}

impl BookingAction {
    pub fn verb(self) -> &'static str {
        match self {
            BookingAction::Confirm => "confirm",
            BookingAction::Cancel => "cancel",
            BookingAction::Reschedule => "reschedule",
            BookingAction::Complete => "complete",
        }
    }
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Cancelled,
        BookingStatus::Completed,
        BookingStatus::Rescheduled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
            BookingStatus::Rescheduled => "rescheduled",
        }
    }

    // Espelha os botões exibidos no painel. Quem decide a legalidade é o upstream.
    pub fn allows(self, action: BookingAction) -> bool {
        use BookingAction::*;
        use BookingStatus::*;
        match (self, action) {
            (Pending | Rescheduled, Confirm) => true,
            (Pending | Confirmed | Rescheduled, Cancel) => true,
            (Confirmed, Reschedule) => true,
            (Confirmed, Complete) => true,
            _ => false,
        }
    }

    pub fn available_actions(self) -> Vec<BookingAction> {
        [
            BookingAction::Confirm,
            BookingAction::Cancel,
            BookingAction::Reschedule,
            BookingAction::Complete,
        ]
        .into_iter()
        .filter(|a| self.allows(*a))
        .collect()
    }
}

// Horários oferecidos no reagendamento: 09:00 até 18:00, de hora em hora.
pub const TIME_SLOTS: [&str; 10] = [
    "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00", "18:00",
];

// Um horário válido da grade. Só existe se estiver em TIME_SLOTS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot(&'static str);

impl TimeSlot {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        TIME_SLOTS.iter().find(|slot| **slot == value).map(|slot| TimeSlot(*slot))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

// --- Structs ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[schema(example = "b1")]
    pub id: String,

    #[schema(example = "Jane Doe")]
    pub client_name: String,

    #[schema(example = "jane@example.com")]
    pub client_email: String,

    #[serde(default)]
    pub client_phone: Option<String>,

    #[serde(alias = "date")]
    #[schema(value_type = String, format = Date, example = "2026-10-20")]
    pub booking_date: NaiveDate,

    #[serde(alias = "time")]
    #[schema(example = "10:00")]
    pub booking_time: String,

    #[schema(example = "Individual Counselling")]
    pub service: String,

    pub session_type: SessionType,

    pub status: BookingStatus,

    #[serde(default)]
    pub needs: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub urgency: Option<Urgency>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// --- Payloads recebidos do painel ---

fn validate_booking_date(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("Please select a new date.".into());
        return Err(err);
    }
    if NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").is_err() {
        let mut err = ValidationError::new("invalid_date_format");
        err.message = Some("The date must use the YYYY-MM-DD format.".into());
        return Err(err);
    }
    Ok(())
}

fn validate_time_slot(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("Please select a new time.".into());
        return Err(err);
    }
    if TimeSlot::parse(value).is_none() {
        let mut err = ValidationError::new("invalid_time_slot");
        err.message = Some("Choose one of the available time slots (09:00 to 18:00).".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReschedulePayload {
    #[serde(default)]
    #[validate(custom(function = "validate_booking_date"))]
    #[schema(example = "2026-10-22")]
    pub date: String,

    #[serde(default)]
    #[validate(custom(function = "validate_time_slot"))]
    #[schema(example = "14:00")]
    pub time: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CancelPayload {
    #[serde(default)]
    #[schema(example = "Client is unwell")]
    pub reason: Option<String>,
}

// --- Payloads enviados ao upstream ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatusUpdate {
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingReschedule {
    pub booking_date: NaiveDate,
    pub booking_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn affordances_follow_the_lifecycle() {
        assert_eq!(
            BookingStatus::Pending.available_actions(),
            vec![BookingAction::Confirm, BookingAction::Cancel]
        );
        assert_eq!(
            BookingStatus::Confirmed.available_actions(),
            vec![
                BookingAction::Cancel,
                BookingAction::Reschedule,
                BookingAction::Complete
            ]
        );
        assert_eq!(
            BookingStatus::Rescheduled.available_actions(),
            vec![BookingAction::Confirm, BookingAction::Cancel]
        );
        assert!(BookingStatus::Cancelled.available_actions().is_empty());
        assert!(BookingStatus::Completed.available_actions().is_empty());
    }

    #[test]
    fn decodes_wire_shape_with_aliases() {
        let booking: Booking = serde_json::from_value(json!({
            "id": "b7",
            "clientName": "Sam Lee",
            "clientEmail": "sam@example.com",
            "date": "2026-10-21",
            "time": "14:00",
            "service": "Couples Therapy",
            "sessionType": "in-person",
            "status": "rescheduled",
            "urgency": "high"
        }))
        .unwrap();

        assert_eq!(booking.booking_date, NaiveDate::from_ymd_opt(2026, 10, 21).unwrap());
        assert_eq!(booking.session_type, SessionType::InPerson);
        assert_eq!(booking.status, BookingStatus::Rescheduled);
        assert_eq!(booking.urgency, Some(Urgency::High));
        assert!(booking.client_phone.is_none());
    }

    #[test]
    fn rejects_unknown_status() {
        let result = serde_json::from_value::<Booking>(json!({
            "id": "b7",
            "clientName": "Sam Lee",
            "clientEmail": "sam@example.com",
            "bookingDate": "2026-10-21",
            "bookingTime": "14:00",
            "service": "Assessment",
            "sessionType": "online",
            "status": "archived"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn reschedule_payload_requires_date_and_slot() {
        let empty_date = ReschedulePayload {
            date: "".into(),
            time: "10:00".into(),
        };
        let errors = empty_date.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("date"));

        let empty_time = ReschedulePayload {
            date: "2026-10-22".into(),
            time: " ".into(),
        };
        let errors = empty_time.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("time"));

        let off_grid = ReschedulePayload {
            date: "2026-10-22".into(),
            time: "19:00".into(),
        };
        assert!(off_grid.validate().is_err());

        let ok = ReschedulePayload {
            date: "2026-10-22".into(),
            time: "18:00".into(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn time_slots_are_hourly_nine_to_six() {
        assert_eq!(TIME_SLOTS.first(), Some(&"09:00"));
        assert_eq!(TIME_SLOTS.last(), Some(&"18:00"));
        assert_eq!(TimeSlot::parse(" 13:00 ").map(|s| s.as_str()), Some("13:00"));
        assert!(TimeSlot::parse("13:30").is_none());
    }

    #[test]
    fn status_update_omits_empty_notes() {
        let body = serde_json::to_value(BookingStatusUpdate {
            status: BookingStatus::Confirmed,
            notes: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "status": "confirmed" }));
    }
}
