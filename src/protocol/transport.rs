use async_trait::async_trait;
use const_format::concatcp;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

use super::command::CommandBody;


const USER_AGENT: &str = concatcp!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));


/// Delivers a command to the controller and returns its decoded JSON reply.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &Url, body: &CommandBody) -> Result<Value>;
}


/// Plain HTTP transport.
///
/// Every request goes out on a fresh client with idle pooling disabled,
/// so no connection outlives the call. No timeout is set beyond the
/// transport defaults.
#[derive(Debug, Default, Clone)]
pub struct HttpTransport;

impl HttpTransport {
    pub fn new() -> Self {
        Self
    }

    fn client() -> Result<Client> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(client)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &Url, body: &CommandBody) -> Result<Value> {
        debug!("POST {url} {body:?}");

        let response = Self::client()?
            .post(url.clone())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Status { status: status.as_u16(), message });
        }

        Ok(response.json::<Value>().await?)
    }
}


#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::*;
    use crate::protocol::modes::{FanSpeed, HorizontalSwing, VerticalSwing};

    fn body() -> CommandBody {
        CommandBody {
            temperature: 21,
            fan_speed: FanSpeed::Auto,
            vertical_mode: VerticalSwing::MiddleTop,
            horizontal_mode: HorizontalSwing::Middle,
        }
    }

    #[tokio::test]
    async fn test_post_json_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/air_pump/off/")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "temperature": 21,
                "fan_speed": "auto",
                "vertical_mode": "middle_top",
                "horizontal_mode": "middle"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":"ok"}"#)
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/air_pump/off/", server.url())).unwrap();
        let reply = HttpTransport::new().post_json(&url, &body()).await.unwrap();

        assert_eq!(reply, json!({"status": "ok"}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_json_error_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/air_pump/cool/")
            .with_status(500)
            .with_body("ir blaster offline")
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/air_pump/cool/", server.url())).unwrap();
        let err = HttpTransport::new().post_json(&url, &body()).await.unwrap_err();

        match err {
            Error::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "ir blaster offline");
            },
            other => panic!("unexpected error: {other:?}"),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_json_non_json_reply() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/air_pump/heat/")
            .with_status(200)
            .with_body("<html>ok</html>")
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/air_pump/heat/", server.url())).unwrap();
        let err = HttpTransport::new().post_json(&url, &body()).await.unwrap_err();

        assert!(matches!(err, Error::Http(_)));
    }
}
