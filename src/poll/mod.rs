use crate::channels::{NotificationChannel, Push};
use crate::commands::{Command, interpret};
use crate::notify::NotificationDispatcher;
use crate::schedule::{Mode, PlanTable};
use crate::state::ModeStore;
use async_trait::async_trait;
use chrono::{DateTime, Datelike, Local};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// How many recent pushes a single pass scans for a pending command.
const RECENT_LOOKBACK: usize = 3;

/// Wall clock and sleep, injected so the continuous loop is testable
/// without real time passing.
#[async_trait]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
    async fn sleep(&self, duration: Duration);
}

pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Drives the notification cycle: pulls inbound pushes, applies mode
/// switches, and dispatches today's workout or rest notification.
pub struct PollLoop {
    channel: Arc<dyn NotificationChannel>,
    store: Arc<dyn ModeStore>,
    plans: PlanTable,
    dispatcher: NotificationDispatcher,
    clock: Arc<dyn Clock>,
}

impl PollLoop {
    pub fn new(
        channel: Arc<dyn NotificationChannel>,
        store: Arc<dyn ModeStore>,
        plans: PlanTable,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let dispatcher = NotificationDispatcher::new(channel.clone());
        Self {
            channel,
            store,
            plans,
            dispatcher,
            clock,
        }
    }

    /// One load → maybe-switch → notify cycle, for external periodic
    /// invocation (e.g. a daily systemd timer). Never fails: transport
    /// errors are logged and the run completes regardless.
    pub async fn single_pass(&self) {
        let mut mode = self.store.load();
        info!("loaded previous mode: {}-day plan", mode.days());

        let pushes = match self.channel.fetch_recent(RECENT_LOOKBACK).await {
            Ok(pushes) => pushes,
            Err(e) => {
                warn!("could not check for pending commands: {}", e);
                Vec::new()
            }
        };

        if let Some(new_mode) = first_set_mode(&pushes) {
            mode = new_mode;
            if let Err(e) = self.store.save(mode) {
                error!("failed to persist mode change: {}", e);
            }
            self.dispatcher.send_mode_changed(mode).await;
            info!("updated plan to {}-day routine", mode.days());
        }

        let now = self.clock.now();
        let outcome = self.plans.resolve(mode, weekday(now));
        self.dispatcher.send_workout(mode, &outcome, now).await;
    }

    /// Poll indefinitely until `shutdown` resolves. The watermark is
    /// anchored at "now" and held only in memory, so commands sent while
    /// the process was down are missed on restart — known gap, kept to
    /// match the legacy behavior.
    pub async fn run_continuous<F>(&self, interval: Duration, shutdown: F)
    where
        F: Future<Output = ()> + Send,
    {
        let mut watermark = epoch_seconds(self.clock.now());
        info!(
            "listening for pushes every {}s (Ctrl+C to stop)",
            interval.as_secs()
        );

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                () = &mut shutdown => {
                    info!("shutdown requested, stopping poll loop");
                    break;
                }
                () = self.clock.sleep(interval) => {
                    self.step(&mut watermark).await;
                }
            }
        }
    }

    /// One poll tick: fetch pushes past the watermark, act on the single
    /// most recent one, advance the watermark to its timestamp regardless
    /// of whether it was recognized.
    pub async fn step(&self, watermark: &mut f64) {
        let pushes = match self.channel.fetch_since(*watermark).await {
            Ok(pushes) => pushes,
            Err(e) => {
                warn!("fetch failed, will retry next tick: {}", e);
                return;
            }
        };
        let Some(latest) = pushes.into_iter().next() else {
            return;
        };

        match interpret(&latest.body) {
            Command::SetMode(mode) => {
                if let Err(e) = self.store.save(mode) {
                    error!("failed to persist mode change: {}", e);
                }
                self.dispatcher.send_mode_changed(mode).await;
                info!("updated plan to {}-day routine", mode.days());
            }
            Command::RequestToday => {
                let mode = self.store.load();
                let now = self.clock.now();
                let outcome = self.plans.resolve(mode, weekday(now));
                self.dispatcher.send_workout(mode, &outcome, now).await;
            }
            Command::Unrecognized(body) => {
                info!("ignored: {}", body);
            }
        }

        *watermark = latest.timestamp;
    }
}

/// First recognized mode switch in a newest-first push list. RequestToday
/// and unrecognized bodies are skipped, not errors.
fn first_set_mode(pushes: &[Push]) -> Option<Mode> {
    pushes.iter().find_map(|push| match interpret(&push.body) {
        Command::SetMode(mode) => Some(mode),
        _ => None,
    })
}

fn weekday(now: DateTime<Local>) -> u32 {
    now.weekday().num_days_from_monday()
}

fn epoch_seconds(now: DateTime<Local>) -> f64 {
    now.timestamp_millis() as f64 / 1000.0
}
