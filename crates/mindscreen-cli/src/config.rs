use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when changing the shape.
const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "mindscreen";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindscreenConfig {
    /// Schema version. Missing means the current one.
    #[serde(default = "current_version")]
    pub config_version: u32,
    /// Where saved reports go. `None` means the platform data directory.
    #[serde(default)]
    pub report_dir: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub save_reports: bool,
    #[serde(default = "default_true")]
    pub color: bool,
}

fn current_version() -> u32 {
    CURRENT_VERSION
}

fn default_true() -> bool {
    true
}

impl Default for MindscreenConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            report_dir: None,
            save_reports: true,
            color: true,
        }
    }
}

impl MindscreenConfig {
    /// The configured report directory, or the platform default.
    pub fn resolved_report_dir(&self) -> eyre::Result<PathBuf> {
        match &self.report_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_report_dir(),
        }
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR).join("config.json"))
}

pub fn default_report_dir() -> eyre::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join(APP_DIR).join("reports"))
}

/// Load the config at `path`, falling back to defaults when the file does
/// not exist.
pub fn load_config(path: &Path) -> eyre::Result<MindscreenConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(MindscreenConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Check the version on raw JSON before deserializing into the current shape.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .map_or(CURRENT_VERSION, |v| u32::try_from(v).unwrap_or(u32::MAX));
    check_version(on_disk_version)?;

    let config: MindscreenConfig = serde_json::from_value(json)?;
    Ok(config)
}

/// Reject configs written by a newer build. Once a second version exists,
/// migrations from older versions run here.
fn check_version(on_disk_version: u32) -> eyre::Result<()> {
    if on_disk_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {on_disk_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update mindscreen."
        ));
    }
    Ok(())
}

pub fn save_config(path: &Path, config: &MindscreenConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
