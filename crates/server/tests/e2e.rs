use std::net::SocketAddr;

use configs::AppConfig;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let mut cfg = AppConfig::default();
    cfg.auth.admin_password = "e2e-password".into();
    cfg.auth.jwt_secret = "e2e-secret".into();
    cfg.normalize_and_validate()?;

    let state = server::build_state(&cfg).await?;
    let app = server::app(state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url: format!("http://{}", addr) })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_admin_creates_product_visitors_see_it() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let login: Value = client
        .post(format!("{}/auth/login", app.base_url))
        .json(&json!({"password": "e2e-password"}))
        .send()
        .await?
        .json()
        .await?;
    let token = login["data"]["token"].as_str().unwrap_or_default().to_string();
    assert!(!token.is_empty());

    let res = client
        .post(format!("{}/admin/product", app.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Pochette brodée",
            "category": "pochette",
            "price": 8000,
            "description": "Pochette brodée main",
            "images": ["https://cdn.example/pochette.jpg"]
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await?;
    let id = created["data"]["id"].as_str().unwrap_or_default().to_string();
    assert_eq!(created["data"]["slug"], "pochette-brodee");

    let listed: Value = reqwest::get(format!("{}/product?category=pochette", app.base_url)).await?.json().await?;
    let found = listed["data"].as_array().map(|a| a.iter().any(|p| p["id"] == id.as_str())).unwrap_or(false);
    assert!(found);

    let res = client.post(format!("{}/admin/product", app.base_url)).json(&json!({})).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}
