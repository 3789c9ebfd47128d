#[cfg(test)]
mod tests {
    use crate::config::AppConfig;
    use crate::marketplace::SeedListings;
    use crate::middleware::session::{Claims, SESSION_HEADER};
    use crate::routes::create_app;
    use crate::services::testing::FakeServices;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    const JWT_SECRET: &[u8] = b"integration-secret";

    fn app_with(services: Arc<FakeServices>) -> Router {
        app_with_config(AppConfig::default(), services)
    }

    fn app_with_config(config: AppConfig, services: Arc<FakeServices>) -> Router {
        let listings = SeedListings::load().expect("seed listings");
        create_app(AppState::new(config, Arc::new(listings), services))
    }

    fn bearer_for(sub: &str) -> String {
        let claims = Claims {
            sub: sub.to_string(),
            user_id: Some(7),
            username: Some("Nitin".to_string()),
            exp: 4_102_444_800,
        };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(JWT_SECRET))
            .unwrap();
        format!("Bearer {}", token)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let res = app.clone().oneshot(request).await.unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str, session: &str) -> Request<Body> {
        Request::get(uri)
            .header(SESSION_HEADER, session)
            .body(Body::empty())
            .unwrap()
    }

    fn post_json(uri: &str, session: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(SESSION_HEADER, session)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_upload(content_type: &str, bytes: &[u8]) -> Request<Body> {
        let boundary = "bhoomi-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{b}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"leaf.jpg\"\r\nContent-Type: {ct}\r\n\r\n",
                b = boundary,
                ct = content_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

        Request::post("/api/insects/identify")
            .header(SESSION_HEADER, "field-7")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_listings_are_filtered_and_enveloped() {
        let app = app_with(Arc::new(FakeServices::default()));
        let (status, body) = send(
            &app,
            get("/api/marketplace/listings?crop=Rice&type=buy", "s1"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], json!(true));
        assert_eq!(body["data"]["total"], json!(30));

        let listings = body["data"]["listings"].as_array().unwrap();
        assert!(!listings.is_empty());
        assert_eq!(body["data"]["shown"], json!(listings.len()));
        for l in listings {
            assert_eq!(l["crop"], json!("Rice"));
            assert_eq!(l["listingType"], json!("buy"));
            assert_eq!(l["unit"], json!("quintals"));
        }

        let (_, body) = send(&app, get("/api/marketplace/listings?crop=Coconut", "s1")).await;
        for l in body["data"]["listings"].as_array().unwrap() {
            assert_eq!(l["unit"], json!("pieces"));
        }
    }

    #[tokio::test]
    async fn test_unknown_listing_type_is_a_validation_error() {
        let app = app_with(Arc::new(FakeServices::default()));
        let (status, body) = send(&app, get("/api/marketplace/listings?type=lease", "s1")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["ok"], json!(false));
        assert_eq!(body["errorKind"], json!("ValidationError"));
    }

    #[tokio::test]
    async fn test_marketplace_stats_and_filters() {
        let app = app_with(Arc::new(FakeServices::default()));
        let (_, stats) = send(&app, get("/api/marketplace/stats", "s1")).await;
        assert_eq!(stats["data"]["sell"], json!(26));
        assert_eq!(stats["data"]["buy"], json!(4));

        let (_, filters) = send(&app, get("/api/marketplace/filters", "s1")).await;
        assert_eq!(filters["data"]["crops"].as_array().unwrap().len(), 16);
    }

    #[tokio::test]
    async fn test_yield_prediction_flow() {
        let services = Arc::new(FakeServices::default());
        let app = app_with(services.clone());

        let (status, body) = send(
            &app,
            post_json(
                "/api/yield/predict",
                "farmer",
                json!({
                    "crop": "",
                    "state": "Punjab",
                    "district": "Ludhiana",
                    "season": "Rabi",
                    "area": 2.0
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errorKind"], json!("ValidationError"));
        assert_eq!(services.calls(), 0);

        let (status, body) = send(
            &app,
            post_json(
                "/api/yield/predict",
                "farmer",
                json!({
                    "crop": "Wheat",
                    "state": "Punjab",
                    "district": "Ludhiana",
                    "season": "Rabi",
                    "area": 2.0
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["yieldPerHectare"], json!(42.0));
        assert_eq!(body["data"]["totalProduction"], json!(84.0));
    }

    #[tokio::test]
    async fn test_weather_partial_failure_still_answers() {
        let services = Arc::new(FakeServices {
            alerts_down: true,
            ..FakeServices::default()
        });
        let app = app_with(services.clone());

        let (status, body) = send(
            &app,
            get("/api/weather?location=Karnal,%20Haryana", "kisan"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["weather"]["location"], json!("Karnal"));
        assert_eq!(body["data"]["alertsError"]["errorKind"], json!("NetworkError"));
        assert!(body["data"]["weatherError"].is_null());

        // the explicit location sticks for the session
        let (_, body) = send(&app, get("/api/weather", "kisan")).await;
        assert_eq!(body["data"]["location"], json!("Karnal, Haryana"));
        assert_eq!(services.weather_cities(), vec!["Karnal", "Karnal"]);

        let (_, views) = send(&app, get("/api/views", "kisan")).await;
        assert_eq!(views["data"]["selectedLocation"], json!("Karnal, Haryana"));
        assert_eq!(views["data"]["weather"]["loading"], json!(false));
        assert_eq!(views["data"]["weather"]["latestToken"], json!(2));
    }

    #[tokio::test]
    async fn test_weather_double_failure_is_network_error() {
        let services = Arc::new(FakeServices {
            weather_down: true,
            alerts_down: true,
            ..FakeServices::default()
        });
        let app = app_with(services);

        let (status, body) = send(&app, get("/api/weather", "s2")).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["errorKind"], json!("NetworkError"));

        let (_, views) = send(&app, get("/api/views", "s2")).await;
        assert_eq!(views["data"]["weather"]["error"]["errorKind"], json!("NetworkError"));
    }

    #[tokio::test]
    async fn test_identify_rejects_non_images() {
        let services = Arc::new(FakeServices::default());
        let app = app_with(services.clone());

        let (status, body) = send(&app, multipart_upload("text/plain", b"not a photo")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errorKind"], json!("ValidationError"));
        assert_eq!(services.calls(), 0);
    }

    #[tokio::test]
    async fn test_identify_ranks_candidates() {
        let app = app_with(Arc::new(FakeServices::default()));
        let (status, body) = send(&app, multipart_upload("image/jpeg", &[0xFF, 0xD8, 0xFF])).await;

        assert_eq!(status, StatusCode::OK);
        let suggestions = body["data"]["suggestions"].as_array().unwrap();
        assert_eq!(suggestions[0]["name"], json!("Helicoverpa armigera"));
        assert_eq!(suggestions[0]["probability"], json!(1.0));
        assert_eq!(suggestions[2]["probability"], json!(0.0));
    }

    #[tokio::test]
    async fn test_assistant_prompt_is_localized() {
        let services = Arc::new(FakeServices::default());
        let app = app_with(services.clone());

        let (status, body) = send(
            &app,
            post_json(
                "/api/assistant/ask",
                "s3",
                json!({ "prompt": "When should I sow wheat?", "language": "hi" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["language"], json!("hi"));
        assert_eq!(
            services.last_prompt().as_deref(),
            Some("Please respond in Hindi. When should I sow wheat?")
        );

        let (status, body) = send(
            &app,
            post_json("/api/assistant/ask", "s3", json!({ "prompt": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], json!("Please enter your question"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_wrapped() {
        let app = app_with(Arc::new(FakeServices::default()));
        let req = Request::post("/api/yield/predict")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ not json"))
            .unwrap();
        let (status, body) = send(&app, req).await;

        assert!(status.is_client_error());
        assert_eq!(body["ok"], json!(false));
        assert_eq!(body["errorKind"], json!("ValidationError"));
    }

    #[tokio::test]
    async fn test_locate_sets_selected_location() {
        let app = app_with(Arc::new(FakeServices::default()));
        let (status, body) = send(
            &app,
            post_json("/api/weather/locate", "gps", json!({ "lat": 28.36, "lon": 79.43 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["location"], json!("Bareilly, Uttar Pradesh"));

        let (_, dash) = send(&app, get("/api/dashboard", "gps")).await;
        assert_eq!(dash["data"]["selectedLocation"], json!("Bareilly, Uttar Pradesh"));
        assert_eq!(dash["data"]["marketplace"]["total"], json!(30));
    }

    #[tokio::test]
    async fn test_session_header_cannot_reach_token_session() {
        let config = AppConfig {
            jwt_secret: Some(JWT_SECRET.to_vec()),
            ..AppConfig::default()
        };
        let app = app_with_config(config, Arc::new(FakeServices::default()));

        let req = Request::get("/api/weather?location=Secret%20Farm,%20Punjab")
            .header(header::AUTHORIZATION, bearer_for("user-7"))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);

        let (_, views) = send(&app, get("/api/views", "user-7")).await;
        assert!(views["data"]["selectedLocation"].is_null());
        let (_, views) = send(&app, get("/api/views", "user:user-7")).await;
        assert!(views["data"]["selectedLocation"].is_null());

        let req = Request::get("/api/views")
            .header(header::AUTHORIZATION, bearer_for("user-7"))
            .body(Body::empty())
            .unwrap();
        let (_, views) = send(&app, req).await;
        assert_eq!(views["data"]["selectedLocation"], json!("Secret Farm, Punjab"));
    }

    #[tokio::test]
    async fn test_root_is_not_wrapped() {
        let app = app_with(Arc::new(FakeServices::default()));
        let res = app
            .clone()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"BhoomiMitra backend is running");
    }
}
