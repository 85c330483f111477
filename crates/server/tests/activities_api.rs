mod support;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use server::routes::activities::{ASSIGNED, ASSIGN_FAILED, DONE, DO_FAILED};
use support::*;

#[tokio::test]
async fn list_returns_activities_with_201() {
    let (app, _) = app();
    let (status, body) = send(&app, get("/activities")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "activities": [] }));

    create_activity(&app, "Plantio").await;
    let (status, body) = send(&app, get("/activities")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["activities"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_echoes_record_under_result() {
    let (app, _) = app();
    let (status, body) = send(&app, json_req("POST", "/activities", activity_body("Mutirão"))).await;
    assert_eq!(status, StatusCode::OK);
    let result = &body["result"];
    assert_eq!(result["name"], "Mutirão");
    assert_eq!(result["mainImg"], "feira.png");
    assert_eq!(result["ongId"], 1);
    assert_eq!(result["status"], "open");
    assert!(result["userId"].is_null());
}

#[tokio::test]
async fn create_with_bad_body_fails_with_envelope() {
    let (app, _) = app();
    let (status, body) = send(&app, json_req("POST", "/activities", json!({ "name": "", "points": 1, "mainImg": "a.png", "ongId": 1 }))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["erro"], true);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn update_missing_activity_still_204() {
    let (app, _) = app();
    let (status, body) = send(&app, json_req("PUT", "/activities", json!({ "activityId": 999, "activity": { "name": "Nada" } }))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());
}

#[tokio::test]
async fn update_then_fetch() {
    let (app, _) = app();
    let id = create_activity(&app, "Antes").await;
    let (status, _) = send(&app, json_req("PUT", "/activities", json!({ "activityId": id, "activity": { "name": "Depois", "points": 30 } }))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, body) = send(&app, get(&format!("/activities/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["name"], "Depois");
    assert_eq!(body["result"]["points"], 30);
    assert_eq!(body["result"]["mainImg"], "feira.png");
}

#[tokio::test]
async fn delete_then_fetch_fails() {
    let (app, _) = app();
    let id = create_activity(&app, "Temporária").await;
    let req = Request::builder().method("DELETE").uri(format!("/activities/{id}")).body(Body::empty()).unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, body) = send(&app, get(&format!("/activities/{id}"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["erro"], true);
}

#[tokio::test]
async fn assign_without_authorization_uses_fixed_message() {
    let (app, _) = app();
    let id = create_activity(&app, "Sem token").await;
    let (status, body) = send(&app, json_req("POST", &format!("/activities/{id}/assign"), json!({}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "erro": true, "message": ASSIGN_FAILED }));
}

#[tokio::test]
async fn do_without_authorization_uses_fixed_message() {
    let (app, _) = app();
    let id = create_activity(&app, "Sem token").await;
    let (status, body) = send(&app, json_req("POST", &format!("/activities/{id}/do"), json!({ "realizationField": "ok" }))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "erro": true, "message": DO_FAILED }));
}

#[tokio::test]
async fn assign_and_do_flow() {
    let (app, state) = app();
    state.users.create("maria@example.org", "Maria").await.unwrap();
    let tok = token("maria@example.org", "any-secret-at-all");
    let id = create_activity(&app, "Leitura").await;

    let req = with_token(json_req("POST", &format!("/activities/{id}/assign"), json!({})), &tok);
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], ASSIGNED);
    assert_eq!(body["activity"]["status"], "in_progress");
    assert!(body["activity"]["userId"].is_number());

    let payload = json!({ "realizationField": { "photo": "feito.png", "notes": "concluído" } });
    let req = with_token(json_req("POST", &format!("/activities/{id}/do"), payload), &tok);
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], DONE);
    assert_eq!(body["activity"]["status"], "done");
    assert_eq!(body["activity"]["realizationField"]["photo"], "feito.png");
}

#[tokio::test]
async fn assign_to_second_user_conflicts() {
    let (app, state) = app_with(false, false);
    state.users.create("a@example.org", "A").await.unwrap();
    state.users.create("b@example.org", "B").await.unwrap();
    let id = create_activity(&app, "Disputada").await;

    let first = with_token(json_req("POST", &format!("/activities/{id}/assign"), json!({})), &token("a@example.org", "x"));
    assert_eq!(send(&app, first).await.0, StatusCode::OK);
    let second = with_token(json_req("POST", &format!("/activities/{id}/assign"), json!({})), &token("b@example.org", "x"));
    let (status, body) = send(&app, second).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["erro"], true);
}

#[tokio::test]
async fn unknown_email_fails() {
    let (app, _) = app_with(false, false);
    let id = create_activity(&app, "Ninguém").await;
    let req = with_token(json_req("POST", &format!("/activities/{id}/assign"), json!({})), &token("ghost@example.org", "x"));
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn typed_statuses_when_not_uniform() {
    let (app, _) = app_with(false, false);
    assert_eq!(send(&app, get("/activities/41")).await.0, StatusCode::NOT_FOUND);
    assert_eq!(send(&app, get("/activities/abc")).await.0, StatusCode::BAD_REQUEST);
    let bad = json_req("POST", "/activities", json!({ "name": "x" }));
    assert_eq!(send(&app, bad).await.0, StatusCode::BAD_REQUEST);
    let (status, body) = send(&app, json_req("POST", "/activities/1/assign", json!({}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], ASSIGN_FAILED);
}

#[tokio::test]
async fn verified_tokens_reject_foreign_signature() {
    let (app, state) = app_with(false, true);
    state.users.create("maria@example.org", "Maria").await.unwrap();
    let id = create_activity(&app, "Assinada").await;

    let forged = with_token(json_req("POST", &format!("/activities/{id}/assign"), json!({})), &token("maria@example.org", "other-secret"));
    assert_eq!(send(&app, forged).await.0, StatusCode::UNAUTHORIZED);

    let genuine = with_token(json_req("POST", &format!("/activities/{id}/assign"), json!({})), &token("maria@example.org", SECRET));
    assert_eq!(send(&app, genuine).await.0, StatusCode::OK);
}

#[tokio::test]
async fn do_without_body_completes_with_no_payload() {
    let (app, state) = app();
    state.users.create("rui@example.org", "Rui").await.unwrap();
    let tok = token("rui@example.org", "x");
    let id = create_activity(&app, "Sem corpo").await;

    let assign = with_token(json_req("POST", &format!("/activities/{id}/assign"), json!({})), &tok);
    assert_eq!(send(&app, assign).await.0, StatusCode::OK);

    let bare = Request::builder().method("POST").uri(format!("/activities/{id}/do")).body(Body::empty()).unwrap();
    let (status, body) = send(&app, with_token(bare, &tok)).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], DONE);
    assert_eq!(body["activity"]["status"], "done");
    assert!(body["activity"]["realizationField"].is_null());
}

#[tokio::test]
async fn do_with_malformed_body_is_rejected() {
    let (app, state) = app_with(false, false);
    state.users.create("rui@example.org", "Rui").await.unwrap();
    let id = create_activity(&app, "Corpo ruim").await;
    let req = Request::builder()
        .method("POST")
        .uri(format!("/activities/{id}/do"))
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, with_token(req, &token("rui@example.org", "x"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["erro"], true);
}
