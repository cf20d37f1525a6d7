use crate::channels::NotificationChannel;
use crate::schedule::{Mode, Outcome};
use chrono::{DateTime, Local};
use std::sync::Arc;
use tracing::{error, info};

pub const NOTIFIER_TITLE: &str = "Gym Notifier";

/// Formats and sends the outbound notifications.
///
/// Every send path catches transport failures and logs them instead of
/// propagating — a flaky network must never abort a notification cycle.
pub struct NotificationDispatcher {
    channel: Arc<dyn NotificationChannel>,
}

impl NotificationDispatcher {
    pub fn new(channel: Arc<dyn NotificationChannel>) -> Self {
        Self { channel }
    }

    pub async fn send_workout(&self, mode: Mode, outcome: &Outcome, now: DateTime<Local>) {
        let body = format_workout(mode, outcome, now);
        self.send(&body).await;
    }

    pub async fn send_mode_changed(&self, mode: Mode) {
        let body = format_mode_changed(mode);
        self.send(&body).await;
    }

    async fn send(&self, body: &str) {
        match self.channel.send_note(NOTIFIER_TITLE, body).await {
            Ok(()) => info!("notification sent: {}", body.replace('\n', " / ")),
            Err(e) => error!("error while sending via {}: {}", self.channel.name(), e),
        }
    }
}

pub fn format_workout(mode: Mode, outcome: &Outcome, now: DateTime<Local>) -> String {
    let current_time = now.format("%I:%M %p");
    match outcome {
        Outcome::Workout(label) => format!(
            "🏋️ Gym Workout ({}-Day Plan)\nToday's Workout: {}\nTime: {}",
            mode.days(),
            label,
            current_time
        ),
        Outcome::Rest => format!(
            "😴 Rest Day Today!\n(Plan: {}-Day Routine)\nTime: {}",
            mode.days(),
            current_time
        ),
    }
}

pub fn format_mode_changed(mode: Mode) -> String {
    format!(
        "✅ Plan updated to {}-day workout schedule!",
        mode.days()
    )
}
