use actix_web::{get, post, test, web, App, HttpResponse, Responder};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use serde_json::json;

use herodex::auth::{generate_token, AuthMiddleware, AuthenticatedUserId};

const SECRET: &str = "integration-test-secret";

#[get("/whoami")]
async fn whoami(user: AuthenticatedUserId) -> impl Responder {
    HttpResponse::Ok().json(json!({ "user_id": user.0 }))
}

#[post("/auth/login")]
async fn fake_login() -> impl Responder {
    HttpResponse::Ok().json(json!({ "ok": true }))
}

async fn build_app() -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new().service(
            web::scope("/api")
                .wrap(AuthMiddleware::new(SECRET))
                .service(whoami)
                .service(fake_login),
        ),
    )
    .await
}

#[actix_rt::test]
async fn test_valid_token_is_accepted() {
    let app = build_app().await;
    let token = generate_token(42, SECRET).unwrap();

    let req = test::TestRequest::get()
        .uri("/api/whoami")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user_id"], 42);
}

#[actix_rt::test]
async fn test_issuer_and_audience_claims_do_not_matter() {
    // Tokens from any issuer/audience are accepted as long as the signature
    // matches our secret.
    #[derive(Serialize)]
    struct ForeignClaims {
        sub: i32,
        exp: usize,
        iss: String,
        aud: String,
    }

    let exp = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(1))
        .expect("valid timestamp")
        .timestamp() as usize;
    let token = encode(
        &Header::default(),
        &ForeignClaims {
            sub: 7,
            exp,
            iss: "someone-else".to_string(),
            aud: "another-api".to_string(),
        },
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    let app = build_app().await;
    let req = test::TestRequest::get()
        .uri("/api/whoami")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user_id"], 7);
}

#[actix_rt::test]
async fn test_token_signed_with_other_key_is_rejected() {
    let app = build_app().await;
    let token = generate_token(42, "a-different-secret").unwrap();

    let req = test::TestRequest::get()
        .uri("/api/whoami")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    match test::try_call_service(&app, req).await {
        Err(err) => assert_eq!(err.error_response().status(), 401),
        Ok(resp) => panic!("bad signature must be rejected, got {}", resp.status()),
    }
}

#[actix_rt::test]
async fn test_missing_token_is_rejected() {
    let app = build_app().await;

    let req = test::TestRequest::get().uri("/api/whoami").to_request();
    match test::try_call_service(&app, req).await {
        Err(err) => assert_eq!(err.error_response().status(), 401),
        Ok(resp) => panic!("missing token must be rejected, got {}", resp.status()),
    }
}

#[actix_rt::test]
async fn test_login_endpoint_skips_authentication() {
    let app = build_app().await;

    let req = test::TestRequest::post().uri("/api/auth/login").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
