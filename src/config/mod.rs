pub mod credentials;
pub mod loader;
pub mod schema;

pub use credentials::apply_env_overrides;
pub use loader::{get_config_path, load_config, save_config};
pub use schema::{ChannelsConfig, Config, PollConfig, PushbulletConfig, ScheduleConfig};
