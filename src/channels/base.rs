use anyhow::Result;
use async_trait::async_trait;

/// An inbound push as seen by the poll loop. The timestamp is the
/// channel's float epoch-seconds value and doubles as the watermark unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Push {
    pub body: String,
    pub timestamp: f64,
}

/// The notification channel the notifier runs over: send a note, read
/// recent messages back. Implementations must return fetched pushes
/// newest first.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    fn name(&self) -> &str;

    async fn send_note(&self, title: &str, body: &str) -> Result<()>;

    /// The most recent pushes, newest first, up to `limit`.
    async fn fetch_recent(&self, limit: usize) -> Result<Vec<Push>>;

    /// Pushes strictly after `timestamp`, newest first.
    async fn fetch_since(&self, timestamp: f64) -> Result<Vec<Push>>;
}
