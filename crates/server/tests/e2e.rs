use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestApp {
    base_url: String,
    shutdown: oneshot::Sender<()>,
    handle: tokio::task::JoinHandle<anyhow::Result<()>>,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    let (shutdown, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server::startup::serve(listener, async move {
        let _ = rx.await;
    }));

    Ok(TestApp { base_url, shutdown, handle })
}

#[tokio::test]
async fn e2e_create_then_fetch_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/api/users", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let seeded = res.json::<serde_json::Value>().await?;
    assert_eq!(seeded.as_array().map(Vec::len), Some(3));
    assert_eq!(seeded[0]["name"], "Bramble Fright");

    let res = c.post(format!("{}/api/users", app.base_url))
        .json(&json!({}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    assert_eq!(created["name"], "Anonymous");
    assert_eq!(created["emoji"], "👋");

    let id = created["id"].as_str().unwrap_or_default();
    let res = c.get(format!("{}/api/users/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, created);

    let res = c.put(format!("{}/api/users/{}", app.base_url, uuid::Uuid::new_v4()))
        .json(&json!({"name": "Ghost"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let _ = app.shutdown.send(());
    app.handle.await??;
    Ok(())
}
