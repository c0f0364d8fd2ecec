use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BreakroomConfig {
    pub boss: BossConfig,
    pub gateway: GatewayConfig,
}

impl BreakroomConfig {
    /// Load config from a TOML file, falling back to defaults for missing
    /// fields. After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: BreakroomConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if the file doesn't exist, return defaults
    /// with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("BREAKROOM_BOSS_ALERTNESS") {
            if let Ok(n) = v.parse() {
                self.boss.alertness = n;
            }
        }
        if let Ok(v) = std::env::var("BREAKROOM_BOSS_COOLDOWN_SECS") {
            if let Ok(n) = v.parse() {
                self.boss.cooldown_secs = n;
            }
        }
        if let Ok(v) = std::env::var("BREAKROOM_GATEWAY_HOST") {
            self.gateway.host = v;
        }
        if let Ok(v) = std::env::var("BREAKROOM_GATEWAY_PORT") {
            if let Ok(n) = v.parse() {
                self.gateway.port = n;
            }
        }
    }

    /// Reject configurations the engine must never see.
    ///
    /// The store and tickers assume validated parameters; this is the one
    /// place that enforces the ranges before anything is built.
    pub fn validate(&self) -> Result<()> {
        if self.boss.alertness > 100 {
            bail!(
                "boss.alertness must be 0-100, got {}",
                self.boss.alertness
            );
        }
        if self.boss.cooldown_secs == 0 {
            bail!("boss.cooldown_secs must be positive");
        }
        Ok(())
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BossConfig {
    /// Chance out of 100 that a break raises the boss alert level.
    pub alertness: u8,
    /// Seconds between boss cooldown ticks.
    pub cooldown_secs: u64,
}

impl Default for BossConfig {
    fn default() -> Self {
        Self {
            alertness: 50,
            cooldown_secs: 300,
        }
    }
}

impl BossConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8590,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
