pub mod base;
pub mod pushbullet;

pub use base::{NotificationChannel, Push};
pub use pushbullet::PushbulletChannel;
