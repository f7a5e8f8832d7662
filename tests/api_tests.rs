//! API integration tests
//!
//! These tests run against a live server with a migrated database.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to create an asset and return its JSON body
async fn create_asset(client: &Client, name: &str) -> Value {
    let response = client
        .post(format!("{}/assets", BASE_URL))
        .json(&json!({
            "name": name,
            "type": "Laptop",
            "division": "IT"
        }))
        .send()
        .await
        .expect("Failed to send create asset request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse asset")
}

async fn delete_asset(client: &Client, id: &str) {
    let response = client
        .delete(format!("{}/assets/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send delete request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_probes_the_database() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_asset_crud_round_trip() {
    let client = Client::new();

    let created = create_asset(&client, "Dell XPS 15").await;
    let id = created["id"].as_str().expect("No id in response");

    // The inventory number is generated server-side
    let inventory_number = created["inventoryNumber"]
        .as_str()
        .expect("No inventory number");
    assert!(inventory_number.starts_with("IT-FA/KPTM/LAPTOP/"));
    assert_eq!(created["status"], "Active");

    // Read it back
    let response = client
        .get(format!("{}/assets/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // Update the location
    let response = client
        .put(format!("{}/assets/{}", BASE_URL, id))
        .json(&json!({ "location": "Lab B" }))
        .send()
        .await
        .expect("Failed to send update request");
    assert!(response.status().is_success());

    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["location"], "Lab B");
    // Untouched fields survive a partial update
    assert_eq!(updated["inventoryNumber"], inventory_number);

    delete_asset(&client, id).await;

    // Gone after delete
    let response = client
        .get(format!("{}/assets/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_component_defaults_empty_specifications() {
    let client = Client::new();

    let response = client
        .post(format!("{}/components", BASE_URL))
        .json(&json!({
            "name": "Kingston Fury 16GB",
            "type": "RAM"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let created: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(created["specifications"]["type"], "Ram");

    let id = created["id"].as_str().expect("No id in response");
    let response = client
        .delete(format!("{}/components/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send delete request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_assembly_full_replace() {
    let client = Client::new();

    let first = create_asset(&client, "Assembly member 1").await;
    let second = create_asset(&client, "Assembly member 2").await;
    let first_id = first["id"].as_str().unwrap();
    let second_id = second["id"].as_str().unwrap();

    // Create with one member
    let response = client
        .post(format!("{}/assemblies", BASE_URL))
        .json(&json!({
            "name": "Lab workstation",
            "assetIds": [first_id]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let assembly: Value = response.json().await.expect("Failed to parse response");
    let assembly_id = assembly["id"].as_str().unwrap();
    assert_eq!(assembly["components"].as_array().unwrap().len(), 1);

    // Update replaces the whole member set
    let response = client
        .put(format!("{}/assemblies/{}", BASE_URL, assembly_id))
        .json(&json!({ "assetIds": [second_id] }))
        .send()
        .await
        .expect("Failed to send update request");
    assert!(response.status().is_success());

    let updated: Value = response.json().await.expect("Failed to parse response");
    let components = updated["components"].as_array().unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0]["id"], second_id);

    // Replaying the same replace leaves the resolved list identical
    let response = client
        .put(format!("{}/assemblies/{}", BASE_URL, assembly_id))
        .json(&json!({ "assetIds": [second_id] }))
        .send()
        .await
        .expect("Failed to send repeat update request");
    assert!(response.status().is_success());

    let replayed: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(replayed["components"], updated["components"]);

    let response = client
        .delete(format!("{}/assemblies/{}", BASE_URL, assembly_id))
        .send()
        .await
        .expect("Failed to send delete request");
    assert_eq!(response.status(), 204);

    delete_asset(&client, first_id).await;
    delete_asset(&client, second_id).await;
}

#[tokio::test]
#[ignore]
async fn test_task_complete_flow() {
    let client = Client::new();

    let asset = create_asset(&client, "Task target").await;
    let asset_id = asset["id"].as_str().unwrap();

    let response = client
        .post(format!("{}/tasks", BASE_URL))
        .json(&json!({
            "title": "Replace thermal paste",
            "asset": asset_id,
            "scheduledDate": "2026-09-15"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let task: Value = response.json().await.expect("Failed to parse response");
    let task_id = task["id"].as_str().unwrap();
    assert_eq!(task["status"], "Scheduled");
    assert!(task["completedDate"].is_null());

    let response = client
        .post(format!("{}/tasks/{}/complete", BASE_URL, task_id))
        .send()
        .await
        .expect("Failed to send complete request");
    assert!(response.status().is_success());

    let completed: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(completed["status"], "Completed");
    assert!(completed["completedDate"].is_string());

    // Completing again keeps the status and restamps the date with today
    let response = client
        .post(format!("{}/tasks/{}/complete", BASE_URL, task_id))
        .send()
        .await
        .expect("Failed to send repeat complete request");
    assert!(response.status().is_success());

    let recompleted: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(recompleted["status"], "Completed");
    assert_eq!(recompleted["completedDate"], completed["completedDate"]);

    let response = client
        .delete(format!("{}/tasks/{}", BASE_URL, task_id))
        .send()
        .await
        .expect("Failed to send delete request");
    assert_eq!(response.status(), 204);

    delete_asset(&client, asset_id).await;
}

#[tokio::test]
#[ignore]
async fn test_task_from_scan_resolves_legacy_id_by_inventory_number() {
    let client = Client::new();

    let asset = create_asset(&client, "Scanned legacy asset").await;
    let asset_id = asset["id"].as_str().unwrap();
    let inventory_number = asset["inventoryNumber"].as_str().unwrap();

    // Old printed codes carry a short id, not a UUID; the inventory number
    // is the durable key.
    let response = client
        .post(format!("{}/tasks/from-scan", BASE_URL))
        .json(&json!({
            "id": "A1004",
            "name": "Scanned legacy asset",
            "type": "Laptop",
            "assetId": "A1004",
            "inventoryNumber": inventory_number
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let task: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(task["asset"], asset_id);

    let task_id = task["id"].as_str().unwrap();
    let response = client
        .delete(format!("{}/tasks/{}", BASE_URL, task_id))
        .send()
        .await
        .expect("Failed to send delete request");
    assert_eq!(response.status(), 204);

    delete_asset(&client, asset_id).await;
}

#[tokio::test]
#[ignore]
async fn test_task_rejects_both_targets() {
    let client = Client::new();

    let response = client
        .post(format!("{}/tasks", BASE_URL))
        .json(&json!({
            "title": "Impossible task",
            "asset": "6b8ef5a1-7e5b-4a77-9c24-111111111111",
            "assembly": "6b8ef5a1-7e5b-4a77-9c24-222222222222",
            "scheduledDate": "2026-09-15"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_qr_encode_decode_round_trip() {
    let client = Client::new();

    let asset = create_asset(&client, "QR target").await;
    let asset_id = asset["id"].as_str().unwrap();

    let response = client
        .get(format!("{}/qr/assets/{}", BASE_URL, asset_id))
        .send()
        .await
        .expect("Failed to send encode request");
    assert!(response.status().is_success());

    let payload: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(payload["assetId"], asset_id);
    assert!(payload["inventoryNumber"].is_string());

    let response = client
        .post(format!("{}/qr/decode", BASE_URL))
        .json(&json!({ "payload": payload.to_string() }))
        .send()
        .await
        .expect("Failed to send decode request");
    assert!(response.status().is_success());

    let scanned: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(scanned["assetId"], asset_id);
    assert_eq!(scanned["inventoryNumber"], payload["inventoryNumber"]);

    delete_asset(&client, asset_id).await;
}

#[tokio::test]
#[ignore]
async fn test_qr_decode_rejects_garbage() {
    let client = Client::new();

    let response = client
        .post(format!("{}/qr/decode", BASE_URL))
        .json(&json!({ "payload": "not a qr payload" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_report_tables() {
    let client = Client::new();

    for report in ["status", "types", "maintenance", "assemblies", "warranty", "inventory"] {
        let response = client
            .get(format!("{}/reports/{}", BASE_URL, report))
            .send()
            .await
            .expect("Failed to send request");
        assert!(response.status().is_success(), "report {} failed", report);

        let body: Value = response.json().await.expect("Failed to parse response");
        assert!(body["headers"].is_array());
        assert!(body["rows"].is_array());
    }
}

#[tokio::test]
#[ignore]
async fn test_unknown_report_is_rejected() {
    let client = Client::new();

    let response = client
        .get(format!("{}/reports/nonsense", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_csv_export_headers() {
    let client = Client::new();

    let response = client
        .get(format!("{}/reports/inventory/csv", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let disposition = response
        .headers()
        .get("content-disposition")
        .expect("No content-disposition header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"inventory-"));
    assert!(disposition.ends_with(".csv\""));

    let body = response.text().await.expect("Failed to read body");
    assert!(body.starts_with("Inventory Number,Name,Type,Status,Location,Assigned To"));
}

#[tokio::test]
#[ignore]
async fn test_dashboard_stats() {
    let client = Client::new();

    let response = client
        .get(format!("{}/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["assetsTotal"].is_number());
    assert!(body["tasksOverdue"].is_number());
    assert!(body["assetsByStatus"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_department_crud() {
    let client = Client::new();

    let response = client
        .post(format!("{}/departments", BASE_URL))
        .json(&json!({
            "name": "Information Technology",
            "code": "IT"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let created: Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_str().unwrap();

    let response = client
        .delete(format!("{}/departments/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send delete request");
    assert_eq!(response.status(), 204);
}
