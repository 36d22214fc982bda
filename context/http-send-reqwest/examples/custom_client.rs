use anyhow::Result;
use bytes::Bytes;
use logship_core::Context;
use logship_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Self-hosted collectors often run behind self-signed certificates.
    let client = Client::builder()
        .timeout(Duration::from_secs(20))
        .danger_accept_invalid_certs(true)
        .user_agent("logship-example/0.1")
        .build()?;

    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://localhost:8088/services/collector/health".to_string());
    println!("Checking collector health at {url}");

    let req = http::Request::builder()
        .method("GET")
        .uri(&url)
        .body(Bytes::new())?;

    match ctx.http_send_as_string(req).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            println!("Response body: {}", resp.body());
        }
        Err(e) => {
            eprintln!("Request failed: {e}");
        }
    }

    Ok(())
}
