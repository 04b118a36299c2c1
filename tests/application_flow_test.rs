use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

fn unique_email(tag: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}_{}@example.com", tag, nanos)
}

async fn setup() -> Option<Router> {
    dotenvy::dotenv().ok();
    if env::var("DATABASE_URL").is_err() {
        eprintln!("skipping: DATABASE_URL is not set");
        return None;
    }
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("API_RPS", "1000");
    let _ = jobmarket_backend::config::init_config();

    let pool = jobmarket_backend::database::pool::create_pool()
        .await
        .expect("pool");
    sqlx::migrate!("./migrations").run(&pool).await.expect("migrations");

    let state = jobmarket_backend::AppState::new(pool);
    Some(jobmarket_backend::api_router().with_state(state))
}

async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn register(app: &Router, role: &str, tag: &str) -> i64 {
    let (status, body) = request(
        app,
        "POST",
        "/users",
        Some(json!({
            "first_name": "Flow",
            "surname": tag,
            "email": unique_email(tag),
            "phone_number": "5550002222",
            "role": role,
            "experiences": if role == "worker" { Some("warehouse shifts") } else { None },
            "description": null
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register {}: {:?}", tag, body);
    body["user_id"].as_i64().unwrap()
}

fn statuses_by_offer(applications: &JsonValue, job_offer_id: i64) -> Vec<String> {
    applications["applications"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|a| a["job_offer_id"].as_i64() == Some(job_offer_id))
        .map(|a| a["status"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn application_state_machine_end_to_end() {
    let Some(app) = setup().await else { return };

    let employer = register(&app, "employer", "owner").await;
    let outsider = register(&app, "employer", "outsider").await;
    let first_worker = register(&app, "worker", "w1").await;
    let second_worker = register(&app, "worker", "w2").await;
    let late_worker = register(&app, "worker", "w3").await;

    let (status, body) = request(
        &app,
        "POST",
        &format!("/employers/{}/companies", employer),
        Some(json!({"name": "Green Energy Systems", "location": "Austin, TX"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let company = body["company_id"].as_i64().unwrap();

    let (status, body) = request(
        &app,
        "POST",
        &format!("/companies/{}/locations", company),
        Some(json!({"street": "Market St.", "number": "789", "city": "Austin"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let location = body["location_id"].as_i64().unwrap();

    let offer_payload = json!({
        "location_id": location,
        "date": "2026-09-01",
        "start_time": "09:00:00",
        "end_time": "17:00:00",
        "max_wage": 50.0,
        "working_days": 5,
        "hours": 8
    });

    // Only members of the owning company may post at its locations.
    let (status, _) = request(
        &app,
        "POST",
        &format!("/employers/{}/joboffers", outsider),
        Some(offer_payload.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Workers are not employers.
    let (status, _) = request(
        &app,
        "POST",
        &format!("/employers/{}/joboffers", first_worker),
        Some(offer_payload.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = request(
        &app,
        "POST",
        &format!("/employers/{}/joboffers", employer),
        Some(offer_payload),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{:?}", body);
    let offer = body["job_offer_id"].as_i64().unwrap();

    // Listings carry the joined display fields and the wire formats.
    let (status, body) = request(
        &app,
        "GET",
        &format!("/employers/{}/joboffers", employer),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let listed = body["job_offers"]
        .as_array()
        .unwrap()
        .iter()
        .find(|o| o["job_offer_id"].as_i64() == Some(offer))
        .expect("created offer listed")
        .clone();
    assert_eq!(listed["status"], "Open");
    assert_eq!(listed["date"], "2026-09-01");
    assert_eq!(listed["start_time"], "09:00:00");
    assert_eq!(listed["city"], "Austin");
    assert_eq!(listed["company_name"], "Green Energy Systems");

    let (status, body) = request(
        &app,
        "GET",
        &format!("/employers/{}/joboffers?status=Completed", employer),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["job_offers"]
        .as_array()
        .unwrap()
        .iter()
        .all(|o| o["job_offer_id"].as_i64() != Some(offer)));

    let (status, _) = request(
        &app,
        "GET",
        &format!("/employers/{}/joboffers?status=Expired", employer),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = request(&app, "GET", "/joboffers/available", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["jobs"]
        .as_array()
        .unwrap()
        .iter()
        .any(|o| o["job_offer_id"].as_i64() == Some(offer)));

    let (status, body) = request(
        &app,
        "GET",
        &format!("/joboffers/{}/employer", offer),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employer"]["user_id"].as_i64(), Some(employer));
    assert_eq!(body["company"]["name"], "Green Energy Systems");

    let (status, _) = request(&app, "GET", "/joboffers/999999999/employer", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // A location with offers attached cannot be deleted even when it is
    // not the last one.
    let (status, _) = request(
        &app,
        "POST",
        &format!("/companies/{}/locations", company),
        Some(json!({"street": "Congress Ave.", "number": "11", "city": "Austin"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = request(
        &app,
        "DELETE",
        &format!("/companies/{}/locations", company),
        Some(json!({"location_id": location})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("job offers"));

    // Wage ceiling is enforced before any row is written.
    let (status, body) = request(
        &app,
        "POST",
        &format!("/joboffers/{}/apply", offer),
        Some(json!({"worker_id": first_worker, "wage_offer": 60.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("maximum wage"));

    let (status, body) = request(
        &app,
        "GET",
        &format!("/workers/{}/applications", first_worker),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(statuses_by_offer(&body, offer).is_empty());

    // Valid bids from two workers.
    let (status, body) = request(
        &app,
        "POST",
        &format!("/joboffers/{}/apply", offer),
        Some(json!({"worker_id": first_worker, "wage_offer": 42.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["application_date"].as_str().is_some());

    let (status, _) = request(
        &app,
        "POST",
        &format!("/joboffers/{}/apply", offer),
        Some(json!({"worker_id": first_worker, "wage_offer": 40.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = request(
        &app,
        "POST",
        &format!("/joboffers/{}/apply", offer),
        Some(json!({"worker_id": second_worker, "wage_offer": 45.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Employers cannot bid, and unknown offers 404.
    let (status, _) = request(
        &app,
        "POST",
        &format!("/joboffers/{}/apply", offer),
        Some(json!({"worker_id": employer, "wage_offer": 30.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(
        &app,
        "POST",
        "/joboffers/999999999/apply",
        Some(json!({"worker_id": first_worker, "wage_offer": 30.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Decisions must be Accepted or Refused.
    let (status, _) = request(
        &app,
        "PUT",
        "/applications/status",
        Some(json!({
            "job_offer_id": offer,
            "worker_id": first_worker,
            "new_status": "Waiting"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = request(
        &app,
        "PUT",
        "/applications/status",
        Some(json!({
            "job_offer_id": offer,
            "worker_id": first_worker,
            "new_status": "Pending"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = request(
        &app,
        "PUT",
        "/applications/status",
        Some(json!({
            "job_offer_id": offer,
            "worker_id": late_worker,
            "new_status": "Accepted"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Accept the first worker: single winner, siblings refused, offer done.
    let (status, _) = request(
        &app,
        "PUT",
        "/applications/status",
        Some(json!({
            "job_offer_id": offer,
            "worker_id": first_worker,
            "new_status": "Accepted"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = request(
        &app,
        "GET",
        &format!("/workers/{}/applications", first_worker),
        None,
    )
    .await;
    assert_eq!(statuses_by_offer(&body, offer), vec!["Accepted"]);

    let (_, body) = request(
        &app,
        "GET",
        &format!("/workers/{}/applications", second_worker),
        None,
    )
    .await;
    assert_eq!(statuses_by_offer(&body, offer), vec!["Refused"]);

    let (_, body) = request(
        &app,
        "GET",
        &format!("/workers/{}/applications?status=Refused", second_worker),
        None,
    )
    .await;
    assert_eq!(statuses_by_offer(&body, offer), vec!["Refused"]);

    let (_, body) = request(&app, "GET", "/joboffers/available", None).await;
    assert!(body["jobs"]
        .as_array()
        .unwrap()
        .iter()
        .all(|o| o["job_offer_id"].as_i64() != Some(offer)));

    let (_, body) = request(
        &app,
        "GET",
        &format!("/employers/{}/joboffers?status=Completed", employer),
        None,
    )
    .await;
    assert!(body["job_offers"]
        .as_array()
        .unwrap()
        .iter()
        .any(|o| o["job_offer_id"].as_i64() == Some(offer)));

    // No second winner: the refused sibling cannot be accepted.
    let (status, body) = request(
        &app,
        "PUT",
        "/applications/status",
        Some(json!({
            "job_offer_id": offer,
            "worker_id": second_worker,
            "new_status": "Accepted"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("already been refused"));

    // The completed offer takes no further applications.
    let (status, body) = request(
        &app,
        "POST",
        &format!("/joboffers/{}/apply", offer),
        Some(json!({"worker_id": late_worker, "wage_offer": 35.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("not open"));

    // Worker discovery.
    let (status, body) = request(&app, "GET", "/workers", None).await;
    assert_eq!(status, StatusCode::OK);
    let workers = body["workers"].as_array().unwrap();
    assert!(workers
        .iter()
        .any(|w| w["user_id"].as_i64() == Some(first_worker)));

    let (status, _) = request(&app, "GET", "/workers/999999999/applications", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
