//! Integration tests for the /videos resource.

mod helpers;

use http::StatusCode;
use serde_json::json;

use videohub_core::config::AppConfig;
use videohub_core::config::validation::ValidationConfig;

#[tokio::test]
async fn test_list_empty() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/videos", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_create_minimal_video() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/videos",
            Some(json!({ "title": "kek", "author": "shrek" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let video = &response.body;
    assert_eq!(video["id"], 1);
    assert_eq!(video["title"], "kek");
    assert_eq!(video["author"], "shrek");
    assert_eq!(video["availableResolutions"], json!([]));
    assert_eq!(video["canBeDownloaded"], false);
    assert!(video["minAgeRestriction"].is_null());
    assert!(video["createdAt"].is_string());
    assert!(video["publicationDate"].is_string());

    let list = app.request("GET", "/videos", None).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body, json!([video]));
}

#[tokio::test]
async fn test_create_preserves_resolution_order() {
    let app = helpers::TestApp::new();

    let created = app
        .request(
            "POST",
            "/videos",
            Some(json!({
                "title": "asdfads",
                "author": "asdfas",
                "availableResolutions": ["P1080", "P360", "P720"],
            })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let path = format!("/videos/{}", created.body["id"]);
    let fetched = app.request("GET", &path, None).await;

    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(
        fetched.body["availableResolutions"],
        json!(["P1080", "P360", "P720"])
    );
}

#[tokio::test]
async fn test_create_missing_fields() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/videos", Some(json!({ "title": "asdfasd" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({ "errorsMessages": [{ "field": "author", "message": "author is incorrect" }] })
    );

    let response = app
        .request("POST", "/videos", Some(json!({ "author": "asdfasd" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({ "errorsMessages": [{ "field": "title", "message": "title is incorrect" }] })
    );
}

#[tokio::test]
async fn test_create_unknown_resolution() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/videos",
            Some(json!({
                "title": "asdfasd",
                "author": "asdfasd",
                "availableResolutions": ["P143"],
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({
            "errorsMessages": [
                { "field": "availableResolutions", "message": "availableResolutions is incorrect" }
            ]
        })
    );
    assert_eq!(app.store.count().await, 0);
}

#[tokio::test]
async fn test_create_malformed_json() {
    let app = helpers::TestApp::new();

    let response = app.request_raw("POST", "/videos", "{\"title\": ").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_by_id() {
    let app = helpers::TestApp::new();
    let video = app.create_video("kek", "shrek").await;

    let response = app
        .request("GET", &format!("/videos/{}", video["id"]), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, video);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let app = helpers::TestApp::new();
    app.create_video("kek", "shrek").await;

    for method in ["GET", "PUT", "DELETE"] {
        let response = app.request_raw(method, "/videos/234524352345", "").await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{method}");
        assert!(response.raw.is_empty(), "{method} body: {}", response.raw);
    }

    let response = app.request("GET", "/videos/not-a-number", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_not_found_precedes_validation() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "PUT",
            "/videos/234524352345",
            Some(json!({ "title": 12341325, "canBeDownloaded": {} })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_wrong_types() {
    let app = helpers::TestApp::new();
    let video = app.create_video("kek", "shrek").await;
    let path = format!("/videos/{}", video["id"]);

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({ "title": 12341325, "author": 3412345 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({
            "errorsMessages": [
                { "field": "title", "message": "title is incorrect" },
                { "field": "author", "message": "author is incorrect" }
            ]
        })
    );

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({
                "author": "asdfasd",
                "title": "asdfasd",
                "availableResolutions": ["P144"],
                "createdAt": 123465366,
                "publicationDate": 42534523,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({
            "errorsMessages": [
                { "field": "createdAt", "message": "createdAt is incorrect" },
                { "field": "publicationDate", "message": "publicationDate is incorrect" }
            ]
        })
    );
}

#[tokio::test]
async fn test_update_min_age_bounds() {
    let app = helpers::TestApp::new();
    let video = app.create_video("kek", "shrek").await;
    let path = format!("/videos/{}", video["id"]);

    for bad in [json!(0), json!(19), json!(25), json!(18.5)] {
        let response = app
            .request("PUT", &path, Some(json!({ "minAgeRestriction": bad })))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{bad}");
        assert_eq!(
            response.body["errorsMessages"][0]["field"],
            "minAgeRestriction"
        );
    }

    for ok in [json!(18), json!(18.0), json!(null)] {
        let response = app
            .request("PUT", &path, Some(json!({ "minAgeRestriction": ok })))
            .await;
        assert_eq!(response.status, StatusCode::NO_CONTENT, "{ok}");
    }

    let fetched = app.request("GET", &path, None).await;
    assert!(fetched.body["minAgeRestriction"].is_null());

    app.request("PUT", &path, Some(json!({ "minAgeRestriction": 18.0 })))
        .await;
    let fetched = app.request("GET", &path, None).await;
    assert_eq!(fetched.body["minAgeRestriction"], 18);
}

#[tokio::test]
async fn test_rejected_update_leaves_video_unchanged() {
    let app = helpers::TestApp::new();
    let video = app.create_video("kek", "shrek").await;
    let path = format!("/videos/{}", video["id"]);

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({
                "author": "asdfasd",
                "title": "asdfasd",
                "availableResolutions": ["P1440"],
                "minAgeRestriction": 18,
                "canBeDownloaded": {},
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({
            "errorsMessages": [
                { "field": "canBeDownloaded", "message": "canBeDownloaded is incorrect" }
            ]
        })
    );

    let fetched = app.request("GET", &path, None).await;
    assert_eq!(fetched.body, video);
}

#[tokio::test]
async fn test_full_update() {
    let app = helpers::TestApp::new();
    let video = app.create_video("kek", "shrek").await;
    let path = format!("/videos/{}", video["id"]);

    let payload = json!({
        "author": "asdfasd",
        "title": "asdfasd",
        "availableResolutions": ["P144", "P360", "P480", "P720", "P1080", "P1440", "P2160"],
        "createdAt": "2024-05-01T10:00:00.000Z",
        "publicationDate": "2024-05-02T10:00:00.000Z",
        "minAgeRestriction": 16,
        "canBeDownloaded": true,
    });

    let response = app.request("PUT", &path, Some(payload.clone())).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.raw.is_empty());

    let fetched = app.request("GET", &path, None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    let mut expected = payload;
    expected["id"] = video["id"].clone();
    assert_eq!(fetched.body, expected);

    let response = app.request("DELETE", &path, None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let response = app.request("GET", &path, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_partial_update_merges() {
    let app = helpers::TestApp::new();
    let video = app.create_video("kek", "shrek").await;
    let path = format!("/videos/{}", video["id"]);

    let response = app
        .request("PUT", &path, Some(json!({ "canBeDownloaded": true })))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let fetched = app.request("GET", &path, None).await;
    let mut expected = video.clone();
    expected["canBeDownloaded"] = json!(true);
    assert_eq!(fetched.body, expected);
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let app = helpers::TestApp::new();
    let first = app.create_video("one", "a").await;
    let path = format!("/videos/{}", first["id"]);

    let response = app.request("DELETE", &path, None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let second = app.create_video("two", "b").await;
    assert!(second["id"].as_u64() > first["id"].as_u64());
}

#[tokio::test]
async fn test_length_limits_follow_policy() {
    let long = json!({ "title": "t".repeat(41), "author": "a".repeat(21) });

    let app = helpers::TestApp::new();
    let response = app.request("POST", "/videos", Some(long.clone())).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errorsMessages"][0]["field"], "title");
    assert_eq!(response.body["errorsMessages"][1]["field"], "author");

    let lenient = helpers::TestApp::with_config(AppConfig {
        validation: ValidationConfig::lenient(),
        ..AppConfig::default()
    });
    let response = lenient.request("POST", "/videos", Some(long)).await;
    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_seeded_store() {
    let mut config = AppConfig::default();
    config.seed.enabled = true;
    let app = helpers::TestApp::with_config(config);

    let response = app.request("GET", "/videos", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body[0]["title"], "Mock video");
    assert_eq!(
        response.body[0]["availableResolutions"],
        json!(["P144", "P360", "P1080"])
    );

    let created = app.create_video("kek", "shrek").await;
    assert_eq!(created["id"], 2);
}
