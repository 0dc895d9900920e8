use httpmock::prelude::*;
use serial_test::serial;
use tokio::runtime::Builder;

use shared::config::Settings;
use shared::deepseek_client::{ChatVendor, DeepSeekClient};
use shared::error::PipelineError;

fn settings_for(base: &str) -> Settings {
    Settings {
        deepseek_api_key: "test-key".into(),
        deepseek_api_base: base.into(),
        ..Settings::default()
    }
}

#[serial]
#[test]
fn chat_returns_raw_body() -> anyhow::Result<()> {
    let rt = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(anyhow::Error::new)?;
    rt.block_on(async {
        let server = MockServer::start_async().await;
        let body =
            r#"{"choices":[{"message":{"role":"assistant","content":"{\"weeks\":[]}"}}]}"#;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .header("authorization", "Bearer test-key");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(body);
            })
            .await;

        let client = DeepSeekClient::new(settings_for(&server.base_url()))?;
        let raw = client.chat("system", "user").await?;
        // The client must hand back the untouched envelope, not the
        // assistant text: unwrapping belongs to the pipeline.
        assert_eq!(raw, body);

        mock.assert_async().await;
        Ok(())
    })
}

#[serial]
#[test]
fn chat_surfaces_http_status() -> anyhow::Result<()> {
    let rt = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(anyhow::Error::new)?;
    rt.block_on(async {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(429).body("slow down");
            })
            .await;

        let client = DeepSeekClient::new(settings_for(&server.base_url()))?;
        match client.chat("system", "user").await {
            Err(PipelineError::Http(429)) => {}
            other => panic!("expected Http(429), got {:?}", other.map(|_| ())),
        }
        Ok(())
    })
}

#[serial]
#[test]
fn chat_rejects_empty_body() -> anyhow::Result<()> {
    let rt = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(anyhow::Error::new)?;
    rt.block_on(async {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).body("  ");
            })
            .await;

        let client = DeepSeekClient::new(settings_for(&server.base_url()))?;
        match client.chat("system", "user").await {
            Err(PipelineError::EmptyResponse) => {}
            other => panic!("expected EmptyResponse, got {:?}", other.map(|_| ())),
        }
        Ok(())
    })
}
