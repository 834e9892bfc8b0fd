mod config;

pub use config::{Config, DefaultsConfig, OutputConfig};

use std::path::PathBuf;

/// Environment variable that replaces the whole data directory.
pub const CONFIG_DIR_ENV: &str = "FAMILYTIME_CONFIG_DIR";

/// Returns `~/.config/familytime[-dev]/` based on FAMILYTIME_ENV.
///
/// Set FAMILYTIME_ENV=dev to use the development data directory, or
/// FAMILYTIME_CONFIG_DIR to point somewhere else entirely.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("FAMILYTIME_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("familytime-dev")
            } else {
                base_dir.join("familytime")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
