use super::schema::Config;

/// Env var that injects the Pushbullet access token without touching the
/// config file (useful for containers and CI).
pub const PUSHBULLET_API_KEY_ENV: &str = "GYMBOT_PUSHBULLET_API_KEY";

/// Apply environment variable overrides. A non-empty
/// `GYMBOT_PUSHBULLET_API_KEY` is inserted ahead of any configured keys,
/// so it becomes the key actually used.
pub fn apply_env_overrides(config: &mut Config) {
    if let Ok(val) = std::env::var(PUSHBULLET_API_KEY_ENV)
        && !val.is_empty()
    {
        config.channels.pushbullet.api_keys.insert(0, val);
    }
}
