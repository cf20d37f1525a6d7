// Shared test helpers — not all items used by every test binary.
#![allow(unused)]

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use gymbot::channels::{NotificationChannel, Push};
use gymbot::poll::Clock;
use std::cmp::Ordering;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering as AtomicOrdering};
use std::time::Duration;

/// In-memory notification channel: records outbound notes, serves queued
/// inbound pushes with the same newest-first contract as the real channel.
#[derive(Default)]
pub struct MockChannel {
    pushes: Mutex<Vec<Push>>,
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail_fetch: AtomicBool,
}

impl MockChannel {
    pub fn with_pushes(pushes: Vec<Push>) -> Self {
        Self {
            pushes: Mutex::new(pushes),
            ..Default::default()
        }
    }

    pub fn queue_push(&self, body: &str, timestamp: f64) {
        self.pushes.lock().expect("pushes lock").push(Push {
            body: body.to_string(),
            timestamp,
        });
    }

    pub fn sent_bodies(&self) -> Vec<String> {
        self.sent
            .lock()
            .expect("sent lock")
            .iter()
            .map(|(_, body)| body.clone())
            .collect()
    }

    fn newest_first(&self) -> Vec<Push> {
        let mut pushes = self.pushes.lock().expect("pushes lock").clone();
        pushes.sort_by(|a, b| {
            b.timestamp
                .partial_cmp(&a.timestamp)
                .unwrap_or(Ordering::Equal)
        });
        pushes
    }
}

#[async_trait]
impl NotificationChannel for MockChannel {
    fn name(&self) -> &str {
        "mock"
    }

    async fn send_note(&self, title: &str, body: &str) -> anyhow::Result<()> {
        self.sent
            .lock()
            .expect("sent lock")
            .push((title.to_string(), body.to_string()));
        Ok(())
    }

    async fn fetch_recent(&self, limit: usize) -> anyhow::Result<Vec<Push>> {
        if self.fail_fetch.load(AtomicOrdering::SeqCst) {
            anyhow::bail!("mock fetch failure");
        }
        let mut pushes = self.newest_first();
        pushes.truncate(limit);
        Ok(pushes)
    }

    async fn fetch_since(&self, timestamp: f64) -> anyhow::Result<Vec<Push>> {
        if self.fail_fetch.load(AtomicOrdering::SeqCst) {
            anyhow::bail!("mock fetch failure");
        }
        Ok(self
            .newest_first()
            .into_iter()
            .filter(|p| p.timestamp > timestamp)
            .collect())
    }
}

/// Fixed clock with instant sleeps. After `max_ticks` sleeps it notifies
/// `parked` and suspends forever, so a continuous loop can be shut down
/// deterministically without real time passing.
pub struct MockClock {
    now: DateTime<Local>,
    pub sleeps: AtomicUsize,
    max_ticks: usize,
    pub parked: tokio::sync::Notify,
}

impl MockClock {
    pub fn fixed(now: DateTime<Local>) -> Self {
        Self {
            now,
            sleeps: AtomicUsize::new(0),
            max_ticks: usize::MAX,
            parked: tokio::sync::Notify::new(),
        }
    }

    pub fn with_max_ticks(now: DateTime<Local>, max_ticks: usize) -> Self {
        Self {
            max_ticks,
            ..Self::fixed(now)
        }
    }
}

#[async_trait]
impl Clock for MockClock {
    fn now(&self) -> DateTime<Local> {
        self.now
    }

    async fn sleep(&self, _duration: Duration) {
        let n = self.sleeps.fetch_add(1, AtomicOrdering::SeqCst);
        if n >= self.max_ticks {
            self.parked.notify_waiters();
            std::future::pending::<()>().await;
        }
        tokio::task::yield_now().await;
    }
}

/// 2026-08-19, a Wednesday, 07:00 local time.
pub fn wednesday_morning() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 8, 19, 7, 0, 0).unwrap()
}
