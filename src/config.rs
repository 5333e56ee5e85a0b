use std::path::Path;
use std::time::Duration;

use crate::board::Stone;
use crate::error::ConfigError;

/// Which game a new session starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    /// Human against the local heuristic
    Ai,
    /// Two humans sharing one board
    Pvp,
    /// Online match, falling back to the heuristic if no match is found in time
    #[default]
    Network,
}

/// What happens when the peer disconnects mid-game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisconnectPolicy {
    /// Post a notice and leave the game as it is
    #[default]
    Notify,
    /// End the game with no winner
    EndGame,
    /// Let the local heuristic take over the peer's color
    ResumeLocal,
}

/// Color choice for the human in games against the heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorChoice {
    #[default]
    Black,
    White,
}

impl From<ColorChoice> for Stone {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Black => Stone::Black,
            ColorChoice::White => Stone::White,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Relay server, `host:port`
    pub server_addr: String,
    pub connect_timeout_ms: u64,
    /// Seconds to wait for a match before falling back to the heuristic
    pub match_deadline_secs: u64,
    pub on_peer_disconnect: DisconnectPolicy,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:6666".to_string(),
            connect_timeout_ms: 3_000,
            match_deadline_secs: 18,
            on_peer_disconnect: DisconnectPolicy::default(),
        }
    }
}

impl NetworkConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn match_deadline(&self) -> Duration {
        Duration::from_secs(self.match_deadline_secs)
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: PlayMode,
    /// Human color in games against the heuristic
    pub human_color: ColorChoice,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Main loop rate while waiting on the network
    pub tick_hz: u32,
    /// Offer move hints in two-player games
    pub show_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_hz: 60,
            show_hints: true,
        }
    }
}

impl UiConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_hz.max(1) as f64)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub network: NetworkConfig,
    pub game: GameConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.network.server_addr.trim().is_empty() {
            return Err(ConfigError::Validation(
                "network.server_addr must not be empty".into(),
            ));
        }
        if self.network.match_deadline_secs == 0 {
            return Err(ConfigError::Validation(
                "network.match_deadline_secs must be > 0".into(),
            ));
        }
        if self.network.connect_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "network.connect_timeout_ms must be > 0".into(),
            ));
        }
        if self.ui.tick_hz == 0 {
            return Err(ConfigError::Validation("ui.tick_hz must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.network.match_deadline(), Duration::from_secs(18));
        assert_eq!(config.network.on_peer_disconnect, DisconnectPolicy::Notify);
        assert_eq!(config.game.mode, PlayMode::Network);
        assert_eq!(Stone::from(config.game.human_color), Stone::Black);
        assert_eq!(config.ui.tick_hz, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [network]
            server_addr = "relay.example:7000"
            on_peer_disconnect = "resume_local"

            [game]
            mode = "pvp"
            human_color = "white"
            "#,
        )
        .unwrap();

        assert_eq!(config.network.server_addr, "relay.example:7000");
        assert_eq!(config.network.on_peer_disconnect, DisconnectPolicy::ResumeLocal);
        assert_eq!(config.network.match_deadline_secs, 18);
        assert_eq!(config.game.mode, PlayMode::Pvp);
        assert_eq!(config.game.human_color, ColorChoice::White);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.network.server_addr, "127.0.0.1:6666");
    }

    #[test]
    fn test_validation_rejects_zero_deadline() {
        let err = AppConfig::from_toml("[network]\nmatch_deadline_secs = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(msg) if msg.contains("match_deadline_secs")));
    }

    #[test]
    fn test_validation_rejects_empty_address() {
        let err = AppConfig::from_toml("[network]\nserver_addr = \"  \"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_unknown_policy_is_parse_error() {
        let err = AppConfig::from_toml("[network]\non_peer_disconnect = \"retry\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_or_default(Path::new("definitely/not/here.toml")).unwrap();
        assert_eq!(config.ui.tick_hz, 60);
    }

    #[test]
    fn test_tick_interval() {
        let ui = UiConfig { tick_hz: 50, show_hints: true };
        assert_eq!(ui.tick(), Duration::from_millis(20));
    }
}
