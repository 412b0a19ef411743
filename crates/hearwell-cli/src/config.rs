use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use hearwell_core::models::preferences::ClinicPreferences;
use hearwell_export::styles::DocumentStyles;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HearwellConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Added in v1.
    pub preferences: ClinicPreferences,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Added in v1.
    pub output_format: OutputFormat,
    #[serde(default)]
    pub styles: DocumentStyles,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for HearwellConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            preferences: ClinicPreferences::default(),
            log_level: default_log_level(),
            output_format: OutputFormat::default(),
            styles: DocumentStyles::default(),
        }
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("hearwell").join("config.json"))
}

/// Load the config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> eyre::Result<HearwellConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(HearwellConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = config_version(&json)?;

    let migrated = migrate(json, on_disk_version)?;
    let config: HearwellConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// The stored schema version. Missing means 0; anything that is not a
/// `u32` is rejected rather than truncated.
fn config_version(json: &serde_json::Value) -> eyre::Result<u32> {
    let Some(raw) = json.get("config_version") else {
        return Ok(0);
    };
    raw.as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| eyre::eyre!("config_version {raw} is not a valid version number"))
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Hearwell."
        ));
    }

    // v0 → v1: add preferences and output_format
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("preferences")
            .or_insert_with(|| serde_json::json!({ "center_id": "", "counselor_name": "" }));
        obj.entry("output_format")
            .or_insert(serde_json::Value::String("json".to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added preferences, output_format)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &HearwellConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);
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
