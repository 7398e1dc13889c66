use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::{routes, AppState};

async fn build_app() -> anyhow::Result<Router> {
    let db = models::db::connect_memory().await?;
    Ok(routes::build_router(AppState::new(db)))
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&v)?)
        }
        None => Body::empty(),
    };
    let resp = app.clone().oneshot(req.body(body)?).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, json))
}

async fn call_raw(app: &Router, method: &str, uri: &str, body: &str) -> anyhow::Result<(StatusCode, String)> {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))?;
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    Ok((status, String::from_utf8(bytes.to_vec())?))
}

async fn create_client(app: &Router, name: &str, email: &str) -> anyhow::Result<i64> {
    let (status, body) = call(app, "POST", "/clients", Some(json!({"name": name, "email": email}))).await?;
    assert_eq!(status, StatusCode::OK, "{body}");
    Ok(body["data"]["client"]["id"].as_i64().unwrap_or_default())
}

async fn create_service(app: &Router, name: &str, price: i64) -> anyhow::Result<i64> {
    let (status, body) = call(app, "POST", "/services", Some(json!({"name": name, "price": price}))).await?;
    assert_eq!(status, StatusCode::OK, "{body}");
    Ok(body["data"]["service"]["id"].as_i64().unwrap_or_default())
}

#[tokio::test]
async fn health_is_ok() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = call(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
    Ok(())
}

#[tokio::test]
async fn openapi_document_lists_routes() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = call(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/clients/{id}"].is_object());
    assert!(body["paths"]["/services"].is_object());
    Ok(())
}

#[tokio::test]
async fn create_haircut_service() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = call(&app, "POST", "/services", Some(json!({"name": "Haircut", "price": 20}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Service created successfully");
    let service = &body["data"]["service"];
    assert!(service["id"].as_i64().unwrap_or_default() > 0);
    assert_eq!(service["name"], "Haircut");
    assert_eq!(service["price"], 20);
    assert!(service["description"].is_null());
    assert!(body.get("validation").is_none());
    Ok(())
}

#[tokio::test]
async fn duplicate_email_is_422() -> anyhow::Result<()> {
    let app = build_app().await?;
    create_client(&app, "Ana", "ana@x.com").await?;

    let (status, body) = call(&app, "POST", "/clients", Some(json!({"name": "Beto", "email": "ana@x.com"}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Validation error");
    assert_eq!(body["validation"]["email"], json!(["The email has already been taken."]));
    assert!(body.get("data").is_none());

    let (_, list) = call(&app, "GET", "/clients", None).await?;
    assert_eq!(list["data"]["clients"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn attach_unknown_service_is_404() -> anyhow::Result<()> {
    let app = build_app().await?;
    let client_id = create_client(&app, "Ana", "ana@x.com").await?;

    let (status, body) = call(&app, "POST", "/clients/attach", Some(json!({"client_id": client_id, "service_id": 999}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"status": "error", "message": "Invalid client or service id"}));
    Ok(())
}

#[tokio::test]
async fn attach_and_detach_round_trip() -> anyhow::Result<()> {
    let app = build_app().await?;
    let client_id = create_client(&app, "Ana", "ana@x.com").await?;
    let service_id = create_service(&app, "Haircut", 20).await?;
    let pair = json!({"client_id": client_id, "service_id": service_id});

    let (status, body) = call(&app, "POST", "/clients/attach", Some(pair.clone())).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Service attached successfully");
    assert_eq!(body["data"]["client"]["services"][0]["id"], service_id);

    let (_, shown) = call(&app, "GET", &format!("/clients/{client_id}"), None).await?;
    assert_eq!(shown["message"], "Correct request");
    assert_eq!(shown["data"]["client"]["services"].as_array().map(Vec::len), Some(1));

    let (status, body) = call(&app, "POST", "/clients/detach", Some(pair)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Service detached successfully");
    assert_eq!(body["data"]["client"]["services"], json!([]));
    Ok(())
}

#[tokio::test]
async fn list_clients_includes_services_and_empty_list_is_200() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = call(&app, "GET", "/clients", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Clients retrieved successfully");
    assert_eq!(body["data"]["clients"], json!([]));

    let client_id = create_client(&app, "Ana", "ana@x.com").await?;
    let service_id = create_service(&app, "Haircut", 20).await?;
    call(&app, "POST", "/clients/attach", Some(json!({"client_id": client_id, "service_id": service_id}))).await?;

    let (_, body) = call(&app, "GET", "/clients", None).await?;
    assert_eq!(body["data"]["clients"][0]["email"], "ana@x.com");
    assert_eq!(body["data"]["clients"][0]["services"][0]["name"], "Haircut");

    let (status, body) = call(&app, "GET", "/services", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Services retrieved successfully");
    assert_eq!(body["data"]["services"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn unknown_and_non_numeric_ids_are_404() -> anyhow::Result<()> {
    let app = build_app().await?;
    for (method, uri, body) in [
        ("GET", "/clients/999", None),
        ("PUT", "/clients/999", Some(json!({}))),
        ("DELETE", "/clients/999", None),
        ("GET", "/clients/abc", None),
    ] {
        let (status, resp) = call(&app, method, uri, body).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(resp["message"], "Invalid client id");
    }
    for (method, uri) in [("GET", "/services/999"), ("PATCH", "/services/999"), ("DELETE", "/services/x")] {
        let (status, resp) = call(&app, method, uri, Some(json!({"name": "n", "price": 1}))).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(resp["message"], "Invalid service id");
    }
    Ok(())
}

#[tokio::test]
async fn update_client_allows_own_email_and_delete_twice_is_404() -> anyhow::Result<()> {
    let app = build_app().await?;
    let id = create_client(&app, "Ana", "ana@x.com").await?;

    let (status, body) = call(
        &app,
        "PUT",
        &format!("/clients/{id}"),
        Some(json!({"name": "Ana Maria", "email": "ana@x.com", "phone": "5551234"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Client updated successfully");
    assert_eq!(body["data"]["client"]["name"], "Ana Maria");
    assert_eq!(body["data"]["client"]["phone"], "5551234");

    let (status, body) = call(&app, "DELETE", &format!("/clients/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Client deleted successfully");
    assert_eq!(body["data"]["client"]["name"], "Ana Maria");

    let (status, _) = call(&app, "DELETE", &format!("/clients/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn validation_messages_use_custom_table() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = call(&app, "POST", "/clients", Some(json!({"email": "nope", "phone": "12345678901"}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["validation"]["name"], json!(["El campo nombre es obligatorio."]));
    assert_eq!(body["validation"]["email"], json!(["Debes introducir un email válido."]));
    assert_eq!(body["validation"]["phone"], json!(["The phone field must not be greater than 10 characters."]));

    let (status, body) = call(&app, "POST", "/services", Some(json!({"name": "Haircut", "price": "veinte"}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["validation"]["price"], json!(["Debes introducir un número."]));
    Ok(())
}

#[tokio::test]
async fn update_service_overwrites_fields() -> anyhow::Result<()> {
    let app = build_app().await?;
    let id = create_service(&app, "Haircut", 20).await?;
    let (status, body) = call(
        &app,
        "PATCH",
        &format!("/services/{id}"),
        Some(json!({"name": "Haircut deluxe", "description": "wash included", "price": "35"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Service updated successfully");
    assert_eq!(body["data"]["service"]["price"], 35);
    assert_eq!(body["data"]["service"]["description"], "wash included");

    let (_, shown) = call(&app, "GET", &format!("/services/{id}"), None).await?;
    assert_eq!(shown["data"]["service"]["name"], "Haircut deluxe");

    let (status, body) = call(&app, "DELETE", &format!("/services/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Service deleted successfully");
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_422_under_body() -> anyhow::Result<()> {
    let app = build_app().await?;
    let req = Request::builder()
        .method("POST")
        .uri("/clients")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))?;
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = serde_json::from_slice(&to_bytes(resp.into_body(), usize::MAX).await?)?;
    assert_eq!(body["message"], "Validation error");
    assert!(body["validation"]["body"].is_array());
    Ok(())
}

#[tokio::test]
async fn update_of_unknown_id_is_404_whatever_the_body() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = call(&app, "PUT", "/clients/999", Some(json!({"name": 5}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Invalid client id");

    for uri in ["/clients/999", "/clients/abc"] {
        let (status, text) = call_raw(&app, "PUT", uri, "{\"name\": ").await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri} {text}");
    }
    let (status, _) = call_raw(&app, "PATCH", "/services/999", "[1, 2]").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn update_of_known_id_with_unreadable_body_is_422() -> anyhow::Result<()> {
    let app = build_app().await?;
    let id = create_client(&app, "Ana", "ana@x.com").await?;
    let (status, text) = call_raw(&app, "PUT", &format!("/clients/{id}"), "{\"name\": ").await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = serde_json::from_str(&text)?;
    assert!(body["validation"]["body"].is_array());
    Ok(())
}

#[tokio::test]
async fn wrong_field_types_are_reported_per_field_in_rule_order() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, text) = call_raw(&app, "POST", "/clients", r#"{"phone": 5551234, "email": "bad"}"#).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = serde_json::from_str(&text)?;
    assert_eq!(body["validation"]["name"], json!(["El campo nombre es obligatorio."]));
    assert_eq!(body["validation"]["email"], json!(["Debes introducir un email válido."]));
    assert_eq!(body["validation"]["phone"], json!(["The phone field must be a string."]));
    assert!(body["validation"].get("body").is_none());

    let pos = |key: &str| text.find(&format!("\"{key}\":[")).unwrap_or(usize::MAX);
    assert!(pos("name") < pos("email") && pos("email") < pos("phone"), "{text}");

    let (status, body) = call(&app, "POST", "/services", Some(json!({"name": "Haircut", "description": 7, "price": 20}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["validation"]["description"], json!(["The description field must be a string."]));
    Ok(())
}
