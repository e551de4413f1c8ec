use actix_web::{test, web, App};
use scoredash::models::{ScoreRecord, Variant};
use scoredash::server::configure;
use scoredash::{AppState, ScoreTable};
use serde_json::Value;

fn rec(user: &str, test: &str, country: &str, version: &str, skill: &str, score: f64) -> ScoreRecord {
    ScoreRecord {
        username: user.into(),
        test: test.into(),
        country: country.into(),
        version: version.into(),
        skill_or_passage: skill.into(),
        average_score: score,
    }
}

fn state() -> web::Data<AppState> {
    let table = ScoreTable::from_records(vec![
        rec("amira", "EST I", "Egypt", "1", "A-SK-Reading", 0.5),
        rec("amira", "EST I", "Egypt", "1", "Passage 1", 0.9),
        rec("omar", "EST II", "Jordan", "2", "B-SK-Reading", 0.3),
    ]);
    web::Data::new(AppState::new(table, Variant::default()))
}

#[actix_web::test]
async fn test_dashboard_json_filters_by_query() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
    let req = test::TestRequest::get()
        .uri("/api/dashboard?student=&tests=EST%20I&versions=ALL")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["row_count"], 2);
    assert_eq!(body["sections"][0]["test"], "EST I");
    assert_eq!(body["sections"][0]["gauges"][0]["label"], "Reading");
    assert_eq!(body["sections"][0]["gauges"][0]["color"], "blue");
    assert_eq!(body["non_skill_totals"][0]["title"], "Passage 1");
    assert_eq!(body["non_skill_totals"][0]["color"], "green");
}

#[actix_web::test]
async fn test_repeated_list_params() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
    let req = test::TestRequest::get()
        .uri("/api/dashboard?countries=Egypt&countries=Jordan&tests=EST%20I&tests=EST%20II")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["row_count"], 3);
    // both Reading labels collapse into one skill total
    assert_eq!(body["skill_totals"].as_array().map(|a| a.len()), Some(1));
    assert_eq!(body["skill_totals"][0]["count"], 2);
}

#[actix_web::test]
async fn test_comma_in_value_round_trips() {
    let table = ScoreTable::from_records(vec![
        rec("amira", "EST I", "Egypt", "1", "A-SK-Reading", 0.5),
        rec("jiwoo", "EST I", "Korea, Republic of", "1", "A-SK-Reading", 0.7),
    ]);
    let state = web::Data::new(AppState::new(table, Variant::default()));
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;

    let req = test::TestRequest::get()
        .uri("/api/dashboard?countries=Korea%2C%20Republic%20of")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["row_count"], 1);
    assert_eq!(body["skill_totals"][0]["count"], 1);

    let req = test::TestRequest::get()
        .uri("/?countries=Korea%2C%20Republic%20of")
        .to_request();
    let html = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();
    assert!(html.contains(r#"<option value="Korea, Republic of" selected>Korea, Republic of</option>"#));
    assert!(html.contains(r#"<option value="Egypt">Egypt</option>"#));
    assert!(!html.contains("No scores match the current selection."));
}

#[actix_web::test]
async fn test_options_and_health() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let req = test::TestRequest::get().uri("/api/options").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["students"], serde_json::json!(["amira", "omar"]));
    assert_eq!(body["versions"], serde_json::json!(["1", "2"]));

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["rows"], 3);
}

#[actix_web::test]
async fn test_page_renders_and_handles_empty_selection() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let req = test::TestRequest::get().uri("/?student=omar").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("Student Performance Dashboard"));
    assert!(html.contains("<svg"));
    assert!(html.contains("EST II"));

    let req = test::TestRequest::get().uri("/?countries=Peru").to_request();
    let html = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();
    assert!(html.contains("No scores match the current selection."));
}

#[actix_web::test]
async fn test_gauge_svg_endpoint() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let req = test::TestRequest::get()
        .uri("/gauge.svg?value=85&label=A-SK-Reading")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get("content-type").and_then(|v| v.to_str().ok()),
        Some("image/svg+xml")
    );

    let req = test::TestRequest::get().uri("/gauge.svg?value=abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap_or_default().contains("value"));
}
