use breakroom_core::{BreakroomConfig, StateStore, ThreadRandom};
use breakroom_engine::{
    spawn_boss_cooldown, spawn_stress_decay, BreakHandler, DelayGate, TickerConfig,
};
use breakroom_gateway::GatewayServer;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(short, long, default_value = "breakroom.toml")]
    config: String,

    /// 0-100 chance for the boss alert level to rise on a break
    #[arg(long)]
    boss_alertness: Option<u8>,

    /// Cooldown (seconds) for the boss alert level to drop
    #[arg(long)]
    boss_alertness_cooldown: Option<u64>,

    /// Gateway bind host
    #[arg(long)]
    host: Option<String>,

    /// Gateway bind port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    info!("Loading config from {}...", args.config);
    let mut config = BreakroomConfig::load_or_default(&args.config);

    // CLI flags override file and env.
    if let Some(v) = args.boss_alertness {
        config.boss.alertness = v;
    }
    if let Some(v) = args.boss_alertness_cooldown {
        config.boss.cooldown_secs = v;
    }
    if let Some(v) = args.host {
        config.gateway.host = v;
    }
    if let Some(v) = args.port {
        config.gateway.port = v;
    }
    config.validate()?;

    info!(
        alertness = config.boss.alertness,
        cooldown_secs = config.boss.cooldown_secs,
        "Initializing state store"
    );
    let store = Arc::new(StateStore::new(config.boss.alertness, config.boss.cooldown()));

    let handler = Arc::new(BreakHandler::new(
        store.clone(),
        Arc::new(ThreadRandom),
        DelayGate::default(),
    ));

    // The two perpetual background loops. Never joined; process exit kills
    // them.
    let _decay = spawn_stress_decay(store.clone(), TickerConfig::default());
    let _cooldown = spawn_boss_cooldown(store.clone());

    info!(
        host = %config.gateway.host,
        port = config.gateway.port,
        "Breakroom online"
    );
    let server = GatewayServer::new(
        handler,
        store,
        &config.gateway.host,
        config.gateway.port,
    );
    server.start().await?;

    Ok(())
}
