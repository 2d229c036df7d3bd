#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Once;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Duration, Local};
use diesel::{Connection, PgConnection};
use diesel_migrations::MigrationHarness;
use rocket::http::{ContentType, Header, Status};
use rocket::local::blocking::{Client, LocalResponse};
use serde_json::{json, Value};
use shareit::api::user_management::sharer::SHARER_HEADER;
use shareit::settings::Settings;

static MIGRATE: Once = Once::new();
static COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn client() -> Client {
    let url = std::env::var("SHAREIT_TEST_DATABASE_URL")
        .expect("SHAREIT_TEST_DATABASE_URL must point at a test database");

    MIGRATE.call_once(|| {
        let mut conn = PgConnection::establish(&url).expect("test database reachable");
        conn.run_pending_migrations(shareit::db::MIGRATIONS)
            .expect("migrations apply");
    });

    let mut settings = Settings::for_database(url);
    settings.run_migrations = false;
    settings.pool_size = 2;

    Client::tracked(shareit::build(&settings)).expect("valid rocket instance")
}

/// Suffix that keeps emails and search terms apart between runs.
pub fn unique() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}x{}", nanos, COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Local timestamp `days` away from now, as the API expects it.
pub fn days_from_now(days: i64) -> String {
    (Local::now().naive_local() + Duration::days(days))
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

pub fn sharer(user_id: i64) -> Header<'static> {
    Header::new(SHARER_HEADER, user_id.to_string())
}

pub fn post<'c>(
    client: &'c Client,
    path: &str,
    user_id: Option<i64>,
    body: Value,
) -> LocalResponse<'c> {
    let mut request = client
        .post(path.to_string())
        .header(ContentType::JSON)
        .body(body.to_string());
    if let Some(user_id) = user_id {
        request = request.header(sharer(user_id));
    }
    request.dispatch()
}

pub fn patch<'c>(
    client: &'c Client,
    path: &str,
    user_id: Option<i64>,
    body: Value,
) -> LocalResponse<'c> {
    let mut request = client
        .patch(path.to_string())
        .header(ContentType::JSON)
        .body(body.to_string());
    if let Some(user_id) = user_id {
        request = request.header(sharer(user_id));
    }
    request.dispatch()
}

pub fn get<'c>(client: &'c Client, path: &str, user_id: Option<i64>) -> LocalResponse<'c> {
    let mut request = client.get(path.to_string());
    if let Some(user_id) = user_id {
        request = request.header(sharer(user_id));
    }
    request.dispatch()
}

pub fn json_ok(response: LocalResponse<'_>) -> Value {
    assert_eq!(response.status(), Status::Ok);
    response.into_json().expect("json body")
}

pub fn create_user(client: &Client, name: &str) -> i64 {
    let email = format!("{}-{}@example.com", name.to_lowercase(), unique());
    let user = json_ok(post(
        client,
        "/users",
        None,
        json!({ "name": name, "email": email }),
    ));
    user["id"].as_i64().unwrap()
}

pub fn create_item(client: &Client, owner: i64, name: &str, available: bool) -> i64 {
    let item = json_ok(post(
        client,
        "/items",
        Some(owner),
        json!({
            "name": name,
            "description": format!("{} for rent", name),
            "available": available
        }),
    ));
    item["id"].as_i64().unwrap()
}

pub fn create_booking(client: &Client, booker: i64, item: i64, start: i64, end: i64) -> Value {
    json_ok(post(
        client,
        "/bookings",
        Some(booker),
        json!({ "itemId": item, "start": days_from_now(start), "end": days_from_now(end) }),
    ))
}

pub fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .expect("json array")
        .iter()
        .map(|entry| entry["id"].as_i64().unwrap())
        .collect()
}
