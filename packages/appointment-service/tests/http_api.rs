//! HTTP API integration tests for the appointment service.
//!
//! Each test starts the real server on its own port and drives it with an
//! HTTP client, asserting on the raw JSON envelopes.

mod fixtures;
use fixtures::TestServer;

use serde_json::json;

fn full_body() -> serde_json::Value {
    json!({
        "patientId": "p1",
        "doctorName": "Dr. X",
        "appointmentDate": "2024-01-01",
        "appointmentTime": "10:00"
    })
}

#[tokio::test]
async fn test_health_endpoint() {
    // テスト項目: /health エンドポイントが正常に動作する
    // given (前提条件):
    let server = TestServer::start(19080);
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/health", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "appointment-service");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_create_appointment_success() {
    // テスト項目: 予約作成が 201 を返し、デフォルト値が適用される
    // given (前提条件):
    let server = TestServer::start(19081);
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .post(format!("{}/api/appointments", server.base_url()))
        .json(&full_body())
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 201);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Appointment created successfully");

    let data = &body["data"];
    assert_eq!(data["patientId"], "p1");
    assert_eq!(data["status"], "scheduled");
    assert!(data["reason"].is_null());
    assert_eq!(data["createdAt"], data["updatedAt"]);
    assert!(data["id"].is_string());
}

#[tokio::test]
async fn test_create_appointment_missing_fields() {
    // テスト項目: 必須フィールドが欠けた作成は 400 を返し、ストアは変化しない
    // given (前提条件):
    let server = TestServer::start(19082);
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .post(format!("{}/api/appointments", server.base_url()))
        .json(&json!({"patientId": "p1", "doctorName": "Dr. X"}))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "PatientId, doctorName, appointmentDate, and appointmentTime are required"
    );

    // ストアが変化していないことを一覧で確認
    let list: serde_json::Value = client
        .get(format!("{}/api/appointments", server.base_url()))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(list["count"], 0);
}

#[tokio::test]
async fn test_list_appointments_in_insertion_order() {
    // テスト項目: 一覧は挿入順のレコードと件数を返す
    // given (前提条件):
    let server = TestServer::start(19083);
    let client = reqwest::Client::new();
    for doctor in ["Dr. A", "Dr. B"] {
        let mut body = full_body();
        body["doctorName"] = json!(doctor);
        client
            .post(format!("{}/api/appointments", server.base_url()))
            .json(&body)
            .send()
            .await
            .expect("Failed to send request");
    }

    // when (操作):
    let response = client
        .get(format!("{}/api/appointments", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 2);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data[0]["doctorName"], "Dr. A");
    assert_eq!(data[1]["doctorName"], "Dr. B");
}

#[tokio::test]
async fn test_get_appointment_by_id() {
    // テスト項目: id 指定の取得が 200、存在しない id が 404 を返す
    // given (前提条件):
    let server = TestServer::start(19084);
    let client = reqwest::Client::new();
    let created: serde_json::Value = client
        .post(format!("{}/api/appointments", server.base_url()))
        .json(&full_body())
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let id = created["data"]["id"].as_str().unwrap();

    // when (操作):
    let found = client
        .get(format!("{}/api/appointments/{}", server.base_url(), id))
        .send()
        .await
        .expect("Failed to send request");
    let missing = client
        .get(format!("{}/api/appointments/unknown", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(found.status(), 200);
    let body: serde_json::Value = found.json().await.expect("Failed to parse JSON");
    assert_eq!(body["data"]["id"], id);

    assert_eq!(missing.status(), 404);
    let body: serde_json::Value = missing.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Appointment not found");
}

#[tokio::test]
async fn test_update_appointment_merges_truthy_fields() {
    // テスト項目: 更新は空でないフィールドだけを上書きし updatedAt を更新する
    // given (前提条件):
    let server = TestServer::start(19085);
    let client = reqwest::Client::new();
    let created: serde_json::Value = client
        .post(format!("{}/api/appointments", server.base_url()))
        .json(&full_body())
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let id = created["data"]["id"].as_str().unwrap();

    // when (操作):
    let response = client
        .put(format!("{}/api/appointments/{}", server.base_url(), id))
        .json(&json!({"status": "completed", "doctorName": ""}))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Appointment updated successfully");

    let data = &body["data"];
    assert_eq!(data["status"], "completed");
    assert_eq!(data["doctorName"], "Dr. X"); // 空文字列では上書きされない
    assert_eq!(data["createdAt"], created["data"]["createdAt"]);
    assert!(data["updatedAt"].as_str().unwrap() >= created["data"]["updatedAt"].as_str().unwrap());
}

#[tokio::test]
async fn test_update_appointment_not_found() {
    // テスト項目: 存在しない id の更新は 404 を返し、レコードは作成されない
    // given (前提条件):
    let server = TestServer::start(19086);
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .put(format!("{}/api/appointments/unknown", server.base_url()))
        .json(&json!({"status": "completed"}))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 404);

    let list: serde_json::Value = client
        .get(format!("{}/api/appointments", server.base_url()))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(list["count"], 0);
}

#[tokio::test]
async fn test_delete_appointment() {
    // テスト項目: 削除後の取得と二重削除はどちらも 404 を返す
    // given (前提条件):
    let server = TestServer::start(19087);
    let client = reqwest::Client::new();
    let created: serde_json::Value = client
        .post(format!("{}/api/appointments", server.base_url()))
        .json(&full_body())
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let id = created["data"]["id"].as_str().unwrap();

    // when (操作):
    let deleted = client
        .delete(format!("{}/api/appointments/{}", server.base_url(), id))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(deleted.status(), 200);
    let body: serde_json::Value = deleted.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Appointment deleted successfully");
    assert!(!body.as_object().unwrap().contains_key("data"));

    let lookup = client
        .get(format!("{}/api/appointments/{}", server.base_url(), id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(lookup.status(), 404);

    let second = client
        .delete(format!("{}/api/appointments/{}", server.base_url(), id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(second.status(), 404);
}

#[tokio::test]
async fn test_appointments_by_patient_filter() {
    // テスト項目: 患者 id での絞り込みは一致するレコードだけを返し、未知の id でも 200 を返す
    // given (前提条件):
    let server = TestServer::start(19088);
    let client = reqwest::Client::new();
    for patient in ["p1", "p2", "p1"] {
        let mut body = full_body();
        body["patientId"] = json!(patient);
        client
            .post(format!("{}/api/appointments", server.base_url()))
            .json(&body)
            .send()
            .await
            .expect("Failed to send request");
    }

    // when (操作):
    let matched = client
        .get(format!("{}/api/appointments/patient/p1", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");
    let unknown = client
        .get(format!(
            "{}/api/appointments/patient/unknown-id",
            server.base_url()
        ))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(matched.status(), 200);
    let body: serde_json::Value = matched.json().await.expect("Failed to parse JSON");
    assert_eq!(body["count"], 2);
    for appointment in body["data"].as_array().unwrap() {
        assert_eq!(appointment["patientId"], "p1");
    }

    assert_eq!(unknown.status(), 200);
    let body: serde_json::Value = unknown.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_unmatched_route_returns_not_found() {
    // テスト項目: 未定義のルートは 404 の汎用エンベロープを返す
    // given (前提条件):
    let server = TestServer::start(19089);
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/unknown", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 404);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Route not found");
}
