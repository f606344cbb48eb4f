// tests/common/mod.rs

// API principal falsa: serve as coleções em memória, aplica as mutações
// e registra cada requisição recebida.

#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use counselling_backoffice::{config::AppState, gateway::ApiGateway, gateway::Session};

pub const TOKEN: &str = "test-token";

#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
    pub auth: Option<String>,
}

#[derive(Debug, Default)]
pub struct UpstreamData {
    pub bookings: Vec<Value>,
    pub today: Vec<Value>,
    pub applications: Vec<Value>,
    pub members: Vec<Value>,
    pub content: Vec<Value>,
    pub admins: Vec<Value>,
    pub requests: Vec<Recorded>,
    // Resposta forçada para PUT/DELETE
    pub mutation_failure: Option<(StatusCode, String)>,
    // Resposta forçada para GET
    pub read_failure: Option<(StatusCode, String)>,
    // GET responde 200 com corpo que não é JSON
    pub malformed_reads: bool,
}

#[derive(Clone)]
pub struct MockUpstream {
    pub data: Arc<Mutex<UpstreamData>>,
    pub base_url: String,
}

impl MockUpstream {
    pub async fn start(data: UpstreamData) -> Self {
        let data = Arc::new(Mutex::new(data));
        let app = Router::new().fallback(handle).with_state(data.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            data,
            base_url: format!("http://{}", addr),
        }
    }

    pub fn app_state(&self) -> AppState {
        let gateway = ApiGateway::new(&self.base_url, Some(Duration::from_secs(5))).unwrap();
        AppState::from_gateway(gateway)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.data.lock().unwrap().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.data.lock().unwrap().requests.clear();
    }

    pub fn fail_mutations(&self, status: StatusCode, body: &str) {
        self.data.lock().unwrap().mutation_failure = Some((status, body.to_string()));
    }

    pub fn fail_reads(&self, status: StatusCode, body: &str) {
        self.data.lock().unwrap().read_failure = Some((status, body.to_string()));
    }

    pub fn serve_malformed(&self) {
        self.data.lock().unwrap().malformed_reads = true;
    }

    pub fn booking(&self, id: &str) -> Option<Value> {
        let data = self.data.lock().unwrap();
        data.bookings.iter().find(|b| b["id"] == id).cloned()
    }

    pub fn application(&self, id: i64) -> Option<Value> {
        let data = self.data.lock().unwrap();
        data.applications.iter().find(|a| a["id"] == id).cloned()
    }
}

pub fn session() -> Session {
    Session::new(TOKEN)
}

async fn handle(
    State(data): State<Arc<Mutex<UpstreamData>>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let mut data = data.lock().unwrap();

    let path = uri.path().to_string();
    let body: Option<Value> = serde_json::from_slice(&body).ok();
    data.requests.push(Recorded {
        method: method.to_string(),
        path: path.clone(),
        body: body.clone(),
        auth: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    let forced = if method == Method::GET {
        data.read_failure.clone()
    } else {
        data.mutation_failure.clone()
    };
    if let Some((status, text)) = forced {
        return (status, text).into_response();
    }
    if method == Method::GET && data.malformed_reads {
        return (StatusCode::OK, "<html>maintenance</html>").into_response();
    }

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    let body = body.unwrap_or(Value::Null);

    match (method.as_str(), segments.as_slice()) {
        ("GET", ["api", "member", "bookings"]) => Json(data.bookings.clone()).into_response(),
        ("GET", ["api", "member", "bookings", "today"]) => Json(data.today.clone()).into_response(),
        ("GET", ["api", "applications"]) => Json(data.applications.clone()).into_response(),
        ("GET", ["api", "members"]) => Json(data.members.clone()).into_response(),
        ("GET", ["api", "content"]) => Json(data.content.clone()).into_response(),
        ("GET", ["api", "admins"]) => Json(data.admins.clone()).into_response(),

        ("PUT", ["api", "bookings", id, "status"]) => {
            match data.bookings.iter_mut().find(|b| b["id"] == *id) {
                Some(booking) => {
                    booking["status"] = body["status"].clone();
                    if let Some(notes) = body.get("notes") {
                        booking["notes"] = notes.clone();
                    }
                    Json(booking.clone()).into_response()
                }
                None => not_found(),
            }
        }
        ("PUT", ["api", "bookings", id]) => {
            match data.bookings.iter_mut().find(|b| b["id"] == *id) {
                Some(booking) => {
                    booking["bookingDate"] = body["bookingDate"].clone();
                    booking["bookingTime"] = body["bookingTime"].clone();
                    booking["status"] = json!("rescheduled");
                    Json(booking.clone()).into_response()
                }
                None => not_found(),
            }
        }
        ("PUT", ["api", "applications", id, "status"]) => {
            let id: i64 = id.parse().unwrap_or_default();
            match data.applications.iter_mut().find(|a| a["id"] == id) {
                Some(application) => {
                    application["application_status"] = body["status"].clone();
                    application["review_comment"] = body["reviewComment"].clone();
                    Json(application.clone()).into_response()
                }
                None => not_found(),
            }
        }
        ("DELETE", ["api", "applications", id]) => {
            let id: i64 = id.parse().unwrap_or_default();
            data.applications.retain(|a| a["id"] != id);
            StatusCode::NO_CONTENT.into_response()
        }
        ("PUT", ["api", "members", id, "status"]) => {
            let id: i64 = id.parse().unwrap_or_default();
            match data.members.iter_mut().find(|m| m["id"] == id) {
                Some(member) => {
                    member["member_status"] = body["status"].clone();
                    Json(member.clone()).into_response()
                }
                None => not_found(),
            }
        }
        ("DELETE", ["api", "admins", id]) => {
            let id: i64 = id.parse().unwrap_or_default();
            data.admins.retain(|a| a["id"] != id);
            StatusCode::NO_CONTENT.into_response()
        }
        _ => not_found(),
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}

// --- Fixtures no formato do upstream ---

pub fn booking_json(id: &str, client: &str, date: &str, time: &str, status: &str) -> Value {
    json!({
        "id": id,
        "clientName": client,
        "clientEmail": format!("{}@example.com", client.to_lowercase().replace(' ', ".")),
        "clientPhone": "+233 20 000 0000",
        "bookingDate": date,
        "bookingTime": time,
        "service": "Individual Counselling",
        "sessionType": "online",
        "status": status,
        "createdAt": "2026-10-01T09:00:00Z"
    })
}

pub fn application_json(id: i64, first: &str, last: &str, membership: &str, status: &str) -> Value {
    json!({
        "id": id,
        "first_name": first,
        "last_name": last,
        "email": format!("{}@example.com", first.to_lowercase()),
        "membership_type": membership,
        "qualification": "MA Counselling Psychology",
        "organization": "Accra Wellness Centre",
        "documents": [
            { "name": "Proof of qualification", "uploaded": true, "url": "https://files.example.com/q.pdf" },
            { "name": "ID document", "uploaded": false }
        ],
        "application_status": status,
        "review_comment": null,
        "created_at": "2026-09-15T12:00:00Z"
    })
}

pub fn member_json(id: i64, first: &str, last: &str, status: &str) -> Value {
    json!({
        "id": id,
        "first_name": first,
        "last_name": last,
        "email": format!("{}@example.com", first.to_lowercase()),
        "membership_type": "professional",
        "member_status": status,
        "created_at": "2026-08-01T08:00:00Z"
    })
}

pub fn content_json(id: &str, kind: &str, title: &str, category: &str, tags: &[&str]) -> Value {
    json!({
        "id": id,
        "kind": kind,
        "title": title,
        "summary": format!("{} summary", title),
        "category": category,
        "tags": tags,
        "publishedAt": "2026-10-01T09:00:00Z"
    })
}

pub fn admin_json(id: i64, name: &str, role: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "role": role
    })
}

// Conjunto padrão usado pela maioria dos testes
pub fn seeded() -> UpstreamData {
    UpstreamData {
        bookings: vec![
            booking_json("b1", "Jane Doe", "2026-10-20", "10:00", "pending"),
            booking_json("b2", "Kofi Mensah", "2026-10-21", "14:00", "confirmed"),
            booking_json("b3", "Jane Doe", "2026-10-02", "09:00", "completed"),
            booking_json("b4", "Ama Boateng", "2026-10-03", "11:00", "cancelled"),
        ],
        today: vec![booking_json("b1", "Jane Doe", "2026-10-20", "10:00", "pending")],
        applications: vec![
            application_json(41, "Ada", "Mensah", "professional", "pending"),
            application_json(42, "Yaw", "Asante", "student", "rejected"),
            application_json(43, "Efua", "Owusu", "professional", "approved"),
        ],
        members: vec![
            member_json(7, "Nana", "Adjei", "pending_password_setup"),
            member_json(8, "Abena", "Frimpong", "active"),
        ],
        content: vec![
            content_json("n-1", "news", "New Board Elected", "Announcements", &["governance"]),
            content_json("e-1", "event", "Annual Conference 2026", "Events", &["conference", "cpd"]),
            content_json("r-1", "resource", "Ethics Handbook", "Guides", &["ethics", "cpd"]),
        ],
        admins: vec![
            admin_json(1, "Grace Owusu", "super_admin"),
            admin_json(2, "Kwame Darko", "editor"),
        ],
        ..Default::default()
    }
}
