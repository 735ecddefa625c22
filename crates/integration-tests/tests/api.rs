//! End-to-end HTTP scenarios.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//!   (`cargo run -p crewbase-cli -- migrate`)
//! - The server running (`cargo run -p crewbase-server`)
//! - `CREWBASE_BASE_URL` if the server is not on localhost:8000
//!
//! Run with: `cargo test -p crewbase-integration-tests -- --ignored`

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use serde_json::Value;

use crewbase_integration_tests::{base_url, client};

/// Create an employee and return its id from the envelope.
async fn create_employee(form: &[(&str, &str)]) -> i64 {
    let resp = client()
        .post(format!("{}/manage/create", base_url()))
        .form(form)
        .send()
        .await
        .expect("Failed to create employee");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["status"], 201);
    body["response"]["employee_id"]
        .as_i64()
        .expect("employee_id missing from response")
}

/// Fetch an employee by id and return the envelope body.
async fn lookup(id: i64) -> (StatusCode, Value) {
    let resp = client()
        .get(format!("{}/search/id/{id}", base_url()))
        .send()
        .await
        .expect("Failed to look up employee");
    let status = resp.status();
    let body: Value = resp.json().await.expect("Failed to read response");
    (status, body)
}

fn john_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("first_name", "John"),
        ("position", "employee"),
        ("department", "sales"),
        ("phone_number", "1234567890"),
        ("email", "john@example.com"),
    ]
}

// ============================================================================
// Creation
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_create_and_lookup_roundtrip() {
    let id = create_employee(&john_form()).await;
    assert!(id > 0, "store-assigned id must be positive");

    let (status, body) = lookup(id).await;
    assert_eq!(status, StatusCode::OK);

    let employee = &body["response"];
    assert_eq!(employee["first_name"], "John");
    assert_eq!(employee["surname"], "");
    assert_eq!(employee["position"], "Employee");
    assert_eq!(employee["department"], "sales");
    assert_eq!(employee["phone_number"], "1234567890");
    assert_eq!(employee["email"], "john@example.com");
    assert_eq!(employee["status"], "active");
    // Absent birth date surfaces as the sentinel.
    assert_eq!(employee["birth_date"], "0000-00-00");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_create_with_admin_label_reads_back_as_director() {
    let mut form = john_form();
    form.retain(|(k, _)| *k != "position");
    form.push(("position", "admin"));
    form.push(("birth_date", "1988-03-02"));

    let id = create_employee(&form).await;
    let (_, body) = lookup(id).await;
    assert_eq!(body["response"]["position"], "Director");
    assert_eq!(body["response"]["birth_date"], "1988-03-02");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_create_empty_form_names_all_required_fields() {
    let resp = client()
        .post(format!("{}/manage/create", base_url()))
        .form(&Vec::<(&str, &str)>::new())
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["status"], 400);
    let description = body["response"]["error"]["description"]
        .as_str()
        .expect("error description missing");
    assert!(description.contains("Missing fields"));
    for field in ["first_name", "position", "department", "phone_number", "email"] {
        assert!(description.contains(field), "description must name {field}");
    }
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_create_rejects_bad_values() {
    for (field, value, expected) in [
        ("position", "intern", "Invalid position"),
        ("department", "finance", "Invalid department"),
        ("email", "john.example.com", "Invalid email"),
        ("birth_date", "2024/01/01", "Invalid birth date"),
    ] {
        let mut form = john_form();
        form.retain(|(k, _)| *k != field);
        form.push((field, value));

        let resp = client()
            .post(format!("{}/manage/create", base_url()))
            .form(&form)
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "field {field}");

        let body: Value = resp.json().await.expect("Failed to read response");
        let description = body["response"]["error"]["description"].as_str().unwrap();
        assert!(
            description.contains(expected),
            "{field}: got {description:?}"
        );
    }
}

// ============================================================================
// Point mutations
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_inactivate_employee() {
    let id = create_employee(&john_form()).await;

    let resp = client()
        .post(format!("{}/manage/inactivate/{id}", base_url()))
        .send()
        .await
        .expect("Failed to inactivate");
    assert_eq!(resp.status(), StatusCode::OK);

    let (_, body) = lookup(id).await;
    assert_eq!(body["response"]["status"], "inactive");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_promote_and_transfer() {
    let id = create_employee(&john_form()).await;

    let resp = client()
        .post(format!("{}/manage/position/{id}/manager", base_url()))
        .send()
        .await
        .expect("Failed to promote");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client()
        .post(format!("{}/manage/department/{id}/it", base_url()))
        .send()
        .await
        .expect("Failed to transfer");
    assert_eq!(resp.status(), StatusCode::OK);

    let (_, body) = lookup(id).await;
    assert_eq!(body["response"]["position"], "Manager");
    assert_eq!(body["response"]["department"], "it");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_bogus_position_label_rejected_without_update() {
    let id = create_employee(&john_form()).await;

    let resp = client()
        .post(format!("{}/manage/position/{id}/bogus", base_url()))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Failed to read response");
    let description = body["response"]["error"]["description"].as_str().unwrap();
    assert!(description.contains("Invalid position"));

    // No update was performed.
    let (_, body) = lookup(id).await;
    assert_eq!(body["response"]["position"], "Employee");
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_search_by_id_not_found() {
    let (status, body) = lookup(999_999).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert_eq!(body["response"]["error"]["code"], 404);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_search_by_position_returns_list() {
    // Make sure at least one row matches.
    create_employee(&john_form()).await;

    let resp = client()
        .get(format!("{}/search/position/0", base_url()))
        .send()
        .await
        .expect("Failed to search");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to read response");
    let employees = body["response"]["employees"].as_array().unwrap();
    assert!(!employees.is_empty());
    assert!(employees.iter().all(|e| e["position"] == "Employee"));
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_search_by_out_of_range_code_is_empty_list() {
    // Codes outside the vocabulary are passed through to the filter.
    let resp = client()
        .get(format!("{}/search/department/9", base_url()))
        .send()
        .await
        .expect("Failed to search");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["response"]["employees"], serde_json::json!([]));
}

// ============================================================================
// Paginated listings
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_employee_list_page_size() {
    let resp = client()
        .get(format!("{}/data/employee/0", base_url()))
        .send()
        .await
        .expect("Failed to list employees");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to read response");
    let employees = body["response"].as_array().unwrap();
    assert!(employees.len() <= 10);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_document_list_show_next_flag() {
    let resp = client()
        .get(format!("{}/data/documents/0", base_url()))
        .send()
        .await
        .expect("Failed to list documents");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to read response");
    let documents = body["response"]["documents"].as_array().unwrap();
    assert!(documents.len() <= 10);
    assert_eq!(body["response"]["offset"], 0);

    let show_next = body["response"]["show_next_button"]
        .as_bool()
        .expect("show_next_button must be a boolean");
    // A short page is the last page.
    if documents.len() < 10 {
        assert!(!show_next);
    }
}
