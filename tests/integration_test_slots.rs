mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use live_booking::config::Config;

#[tokio::test]
async fn test_evening_live_schedule() {
    let app = TestApp::new();

    let res = app.get("/api/v1/lives/1/slots").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    assert_eq!(body["live_id"], "1");
    assert_eq!(body["selectable"], true);
    assert_eq!(body["slot_duration_min"], 18);
    assert_eq!(body["buffer_min"], 2);

    let slots = body["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 9);
    assert_eq!(slots[0]["id"], "slot-1");
    assert_eq!(slots[0]["start_time"], "19:00");
    assert_eq!(slots[0]["end_time"], "19:18");
    assert_eq!(slots[8]["start_time"], "21:40");
    assert_eq!(slots[8]["number"], 9);

    assert_eq!(slots[2]["status"], "occupied");
    assert_eq!(slots[6]["status"], "occupied");
    assert_eq!(slots[0]["status"], "available");
}

#[tokio::test]
async fn test_schedule_is_stable_across_loads() {
    let app = TestApp::new();

    let first = parse_body(app.get("/api/v1/lives/2/slots").await).await;
    let second = parse_body(app.get("/api/v1/lives/2/slots").await).await;
    assert_eq!(first, second);

    let reloaded = parse_body(app.post_empty("/api/v1/lives/2/slots/reload").await).await;
    assert_eq!(first["slots"], reloaded["slots"]);
}

#[tokio::test]
async fn test_full_live_has_no_selectable_slots() {
    let app = TestApp::new();

    let body = parse_body(app.get("/api/v1/lives/3/slots").await).await;
    assert_eq!(body["selectable"], false);
    let slots = body["slots"].as_array().unwrap();
    assert!(!slots.is_empty());
    assert!(slots.iter().all(|s| s["status"] != "available"));

    let detail = parse_body(app.get("/api/v1/lives/3").await).await;
    assert_eq!(detail["slot_selection_enabled"], false);
    assert_eq!(detail["waiting_list_enabled"], true);
    assert_eq!(detail["open_slots"], 0);
}

#[tokio::test]
async fn test_live_detail_counts_open_slots() {
    let app = TestApp::new();

    let res = app.get("/api/v1/lives/1").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    assert_eq!(body["live"]["title"], "THE BOX CLUB Live – Artisan Products");
    assert_eq!(body["live"]["status"], "available");
    assert_eq!(body["live"]["start_time"], "19:00");
    assert_eq!(body["duration_min"], 180);
    assert_eq!(body["generated_slots"], 9);
    assert_eq!(body["open_slots"], 7);
    assert_eq!(body["slot_selection_enabled"], true);
    assert_eq!(body["waiting_list_enabled"], false);
}

#[tokio::test]
async fn test_unknown_live_links_back_to_agenda() {
    let app = TestApp::new();

    for uri in ["/api/v1/lives/99", "/api/v1/lives/99/slots"] {
        let res = app.get(uri).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = parse_body(res).await;
        assert_eq!(body["back_link"], "/agenda");
        assert!(body["error"].as_str().unwrap().contains("99"));
    }
}

#[tokio::test]
async fn test_configured_slot_duration() {
    let app = TestApp::with_config(Config {
        slot_duration_min: 28,
        ..Config::default()
    });

    let body = parse_body(app.get("/api/v1/lives/1/slots").await).await;
    let slots = body["slots"].as_array().unwrap();
    // 180 minutes in 30 minute steps.
    assert_eq!(slots.len(), 6);
    assert_eq!(slots[1]["start_time"], "19:30");
    assert_eq!(slots[1]["end_time"], "19:58");
    assert_eq!(body["slot_duration_min"], 28);
}
