use crate::channels::PushbulletChannel;
use crate::config::{Config, apply_env_overrides, get_config_path, load_config, save_config};
use crate::poll::{PollLoop, SystemClock};
use crate::schedule::{Outcome, PlanTable};
use crate::state::{FileModeStore, ModeStore};
use anyhow::Result;
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "gymbot")]
#[command(about = "Personal workout-reminder notifier", version)]
pub struct Cli {
    /// Path to an alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one notification cycle and exit (for cron/systemd timers)
    Notify,
    /// Poll for commands continuously until interrupted
    Listen {
        /// Poll interval in seconds (overrides config)
        #[arg(long, short = 'i')]
        interval: Option<u64>,
    },
    /// Create the default configuration
    Onboard,
    /// Show the active mode and today's entry
    Status,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Notify => notify(cli.config.as_deref()).await,
        Commands::Listen { interval } => listen(cli.config.as_deref(), interval).await,
        Commands::Onboard => onboard(),
        Commands::Status => status(cli.config.as_deref()),
    }
}

fn load_effective_config(path: Option<&Path>) -> Result<Config> {
    let mut config = load_config(path)?;
    apply_env_overrides(&mut config);
    Ok(config)
}

fn build_poll_loop(config: &Config) -> Result<PollLoop> {
    let channel = Arc::new(PushbulletChannel::new(&config.channels.pushbullet)?);
    let store = Arc::new(FileModeStore::new(config.settings_file()));
    let plans = PlanTable::from_config(&config.schedule)?;
    Ok(PollLoop::new(channel, store, plans, Arc::new(SystemClock)))
}

async fn notify(config_path: Option<&Path>) -> Result<()> {
    let config = load_effective_config(config_path)?;
    let poll = build_poll_loop(&config)?;
    poll.single_pass().await;
    Ok(())
}

async fn listen(config_path: Option<&Path>, interval: Option<u64>) -> Result<()> {
    let config = load_effective_config(config_path)?;
    let poll = build_poll_loop(&config)?;
    let interval = interval.unwrap_or(config.poll.interval_seconds).max(1);

    poll.run_continuous(Duration::from_secs(interval), async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await;

    println!("\nStopped.");
    Ok(())
}

fn onboard() -> Result<()> {
    println!("🏋️ Initializing gymbot...");

    let config_path = get_config_path()?;
    if config_path.exists() {
        println!("⚠️  Config already exists at {}", config_path.display());
        println!("Overwrite? (y/N): ");
        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
    }

    let config = Config::default();
    save_config(&config, Some(config_path.as_path()))?;
    println!("✓ Created config at {}", config_path.display());

    println!("\n🏋️ gymbot is ready!");
    println!("\nNext steps:");
    println!("  1. Add your Pushbullet access token to the config under");
    println!("     channels.pushbullet.apiKeys (or set GYMBOT_PUSHBULLET_API_KEY)");
    println!("  2. Send today's reminder: gymbot notify");
    println!("  3. Or poll for \"4\" / \"6\" / \"workout\" pushes: gymbot listen");

    Ok(())
}

fn status(config_path: Option<&Path>) -> Result<()> {
    let config = load_effective_config(config_path)?;
    let store = FileModeStore::new(config.settings_file());
    let plans = PlanTable::from_config(&config.schedule)?;

    let mode = store.load();
    let now = Local::now();
    let outcome = plans.resolve(mode, now.weekday().num_days_from_monday());

    println!("Active plan:  {}-day", mode.days());
    println!("Settings at:  {}", store.path().display());
    println!(
        "Token:        {}",
        if config.channels.pushbullet.api_key().is_some() {
            "configured"
        } else {
            "missing"
        }
    );
    match outcome {
        Outcome::Workout(label) => println!("Today:        {}", label),
        Outcome::Rest => println!("Today:        rest day"),
    }

    Ok(())
}
