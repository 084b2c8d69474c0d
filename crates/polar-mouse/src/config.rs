use crate::events::AppEvent;
use async_channel::{Receiver, Sender};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use polarcoord::coords::{AngleNotation, CoordinateMode};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::path::{Path, PathBuf};
use std::time::Duration;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;
pub const MIN_POLL_INTERVAL_MS: u64 = 10;

/// Screen corner the status label is pinned to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Corner {
    #[strum(serialize = "top-left", serialize = "tl")]
    TopLeft,
    #[default]
    #[strum(serialize = "top-right", serialize = "tr")]
    TopRight,
    #[strum(serialize = "bottom-left", serialize = "bl")]
    BottomLeft,
    #[strum(serialize = "bottom-right", serialize = "br")]
    BottomRight,
}

impl Corner {
    pub fn is_top(&self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub mode: CoordinateMode,
    pub notation: AngleNotation,
    pub poll_interval_ms: u64,
    pub track_on_launch: bool,
    pub corner: Corner,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: CoordinateMode::Polar,
            notation: AngleNotation::Degrees,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            track_on_launch: false,
            corner: Corner::TopRight,
        }
    }
}

impl Config {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(MIN_POLL_INTERVAL_MS))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "polar", "polar-mouse")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("POLAR_MOUSE").try_parsing(true))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Using default configuration: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
        log::info!("Wrote default configuration to {}", path.display());
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Whether a filesystem event should trigger a reload of the file at `config_path`.
fn is_config_change(event: &notify::Event, config_path: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == config_path)
}

type WatchResult = notify::Result<notify::Event>;

/// Watches the directory holding `config_path`. The watcher must be kept alive for events to
/// keep arriving on the receiver.
fn watch_config_dir(
    config_path: &Path,
) -> Result<(RecommendedWatcher, Receiver<WatchResult>), ConfigError> {
    let config_dir = config_path.parent().ok_or(ConfigError::ConfigDirNotFound)?;
    fs_err::create_dir_all(config_dir)?;

    let (bridge_tx, bridge_rx) = async_channel::unbounded();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(config_dir, RecursiveMode::NonRecursive)?;

    Ok((watcher, bridge_rx))
}

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let watched = get_config_path()
        .and_then(|path| watch_config_dir(&path).map(|watch| (path, watch)));
    let (config_path, (_watcher, events)) = match watched {
        Ok(w) => w,
        Err(e) => {
            log::error!("Config watcher not started: {}", e);
            return;
        }
    };

    while let Ok(res) = events.recv().await {
        match res.map_err(ConfigError::from) {
            Ok(event) if is_config_change(&event, &config_path) => {
                if tx.send(AppEvent::ConfigReload).await.is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => log::error!("Config watcher: {}", e),
        }
    }
}
