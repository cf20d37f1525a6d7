use crate::channels::base::{NotificationChannel, Push};
use crate::config::PushbulletConfig;
use crate::errors::GymbotError;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

pub struct PushbulletChannel {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

// Keep the access token out of debug/log output.
impl fmt::Debug for PushbulletChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushbulletChannel")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct RawPush {
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    modified: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PushList {
    #[serde(default)]
    pushes: Vec<RawPush>,
}

impl PushbulletChannel {
    pub fn new(config: &PushbulletConfig) -> Result<Self, GymbotError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| GymbotError::Config("no Pushbullet API key configured".to_string()))?
            .to_string();
        Ok(Self {
            client: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn pushes_url(&self) -> String {
        format!("{}/pushes", self.base_url)
    }

    async fn fetch(&self, query: &[(&str, String)]) -> Result<Vec<Push>> {
        let response = self
            .client
            .get(self.pushes_url())
            .header("Access-Token", &self.api_key)
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            return Err(GymbotError::Channel {
                channel: "pushbullet".to_string(),
                message: format!("fetch failed ({}): {}", status, body),
            }
            .into());
        }

        let list: PushList = response.json().await?;
        debug!("fetched {} raw pushes", list.pushes.len());

        // Drop pushes with no body (dismissals, files) and normalize to
        // newest first so callers can take the head as the latest.
        let mut pushes: Vec<Push> = list
            .pushes
            .into_iter()
            .filter_map(|p| {
                let body = p.body?;
                Some(Push {
                    body,
                    timestamp: p.modified.unwrap_or(0.0),
                })
            })
            .collect();
        pushes.sort_by(|a, b| {
            b.timestamp
                .partial_cmp(&a.timestamp)
                .unwrap_or(Ordering::Equal)
        });
        Ok(pushes)
    }
}

#[async_trait]
impl NotificationChannel for PushbulletChannel {
    fn name(&self) -> &str {
        "pushbullet"
    }

    async fn send_note(&self, title: &str, body: &str) -> Result<()> {
        let response = self
            .client
            .post(self.pushes_url())
            .header("Access-Token", &self.api_key)
            .json(&serde_json::json!({
                "type": "note",
                "title": title,
                "body": body,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            return Err(GymbotError::Channel {
                channel: "pushbullet".to_string(),
                message: format!("send failed ({}): {}", status, body),
            }
            .into());
        }
        Ok(())
    }

    async fn fetch_recent(&self, limit: usize) -> Result<Vec<Push>> {
        self.fetch(&[
            ("limit", limit.to_string()),
            ("active", "true".to_string()),
        ])
        .await
    }

    async fn fetch_since(&self, timestamp: f64) -> Result<Vec<Push>> {
        self.fetch(&[
            ("modified_after", timestamp.to_string()),
            ("active", "true".to_string()),
        ])
        .await
    }
}
