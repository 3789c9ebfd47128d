use crate::error::ErrorKind;
use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};

fn kind_for(status: StatusCode) -> ErrorKind {
    if status.is_client_error() {
        ErrorKind::ValidationError
    } else {
        ErrorKind::ServerError
    }
}

fn failure(status: StatusCode, message: String) -> Value {
    let message = if message.trim().is_empty() {
        status.to_string()
    } else {
        message
    };
    json!({ "ok": false, "errorKind": kind_for(status), "message": message })
}

/// Puts every /api response into the `{ ok, data }` / `{ ok, errorKind, message }`
/// envelope. Bodies that already carry `ok` pass through untouched.
pub async fn wrap_response_middleware(req: Request, next: Next) -> Result<Response, StatusCode> {
    let path = req.uri().path().to_string();
    let res = next.run(req).await;

    if !path.starts_with("/api") {
        return Ok(res);
    }

    let status = res.status();
    let is_json = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .map_or(false, |ct| ct.contains("application/json"));

    let (mut parts, body) = res.into_parts();

    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => return Err(StatusCode::INTERNAL_SERVER_ERROR),
    };

    let wrapped = if is_json {
        let data: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        if data.get("ok").map_or(false, Value::is_boolean) {
            data
        } else if status.is_success() {
            json!({ "ok": true, "data": data })
        } else {
            let message = data
                .as_str()
                .or_else(|| data.get("error").and_then(|v| v.as_str()))
                .unwrap_or_default()
                .to_string();
            failure(status, message)
        }
    } else if status.is_success() {
        if bytes.is_empty() {
            json!({ "ok": true, "data": null })
        } else {
            json!({ "ok": true, "data": String::from_utf8_lossy(&bytes) })
        }
    } else {
        // axum extractor rejections arrive here as plain text
        failure(status, String::from_utf8_lossy(&bytes).to_string())
    };

    let new_bytes = serde_json::to_vec(&wrapped).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    parts.headers.insert(header::CONTENT_LENGTH, HeaderValue::from(new_bytes.len()));

    Ok(Response::from_parts(parts, Body::from(new_bytes)))
}
