mod support;

use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::routes::activities::ASSIGNED;
use support::*;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<(TestApp, server::state::ServerState)> {
    let (app, state) = app();
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });
    Ok((TestApp { base_url }, state))
}

#[tokio::test]
async fn e2e_activity_lifecycle() -> anyhow::Result<()> {
    let (app, state) = start_server().await?;
    state.users.create("joana@example.org", "Joana").await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = client
        .post(format!("{}/activities", app.base_url))
        .json(&activity_body("Reciclagem"))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created: Value = res.json().await?;
    let id = created["result"]["id"].as_i64().unwrap_or_default();

    let res = client
        .post(format!("{}/activities/{}/assign", app.base_url, id))
        .header("Authorization", format!("Bearer {}", token("joana@example.org", "x")))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let assigned: Value = res.json().await?;
    assert_eq!(assigned["message"], ASSIGNED);

    let res = client.get(format!("{}/activities", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let listed: Value = res.json().await?;
    assert_eq!(listed["activities"][0]["status"], "in_progress");
    Ok(())
}
