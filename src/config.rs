// hdchart - Human Design Chart Generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const SETTINGS_FILE_NAME: &str = "hdchart_settings.json";
const MAX_SIMULATED_LATENCY_MS: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Delay the simulator awaits before producing a chart.
    pub simulated_latency_ms: u64,
    /// User id stamped on charts produced by the simulator.
    pub simulator_user_id: String,
    /// User id stamped on charts produced by the primary engine.
    pub primary_user_id: String,
    /// env_logger filter used when RUST_LOG is unset.
    pub log_filter: String,
    pub pretty_output: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 500,
            simulator_user_id: "temp-user".to_string(),
            primary_user_id: "demo-user".to_string(),
            log_filter: "warn".to_string(),
            pretty_output: true,
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(SETTINGS_FILE_NAME)
    }

    pub fn load_from_disk(path: &Path) -> anyhow::Result<Self> {
        let data = fs::read_to_string(path)?;
        let mut settings: Settings = serde_json::from_str(&data)?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn save_to_disk(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Loads `path` if it exists, otherwise returns defaults. A file that is
    /// present but unreadable is reported and replaced by defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Settings::default();
        }
        match Settings::load_from_disk(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("failed to load settings from {:?}: {err:?}", path);
                Settings::default()
            }
        }
    }

    pub fn sanitize(&mut self) {
        let defaults = Settings::default();
        self.simulated_latency_ms = self.simulated_latency_ms.min(MAX_SIMULATED_LATENCY_MS);
        self.simulator_user_id = self.simulator_user_id.trim().to_string();
        if self.simulator_user_id.is_empty() {
            self.simulator_user_id = defaults.simulator_user_id;
        }
        self.primary_user_id = self.primary_user_id.trim().to_string();
        if self.primary_user_id.is_empty() {
            self.primary_user_id = defaults.primary_user_id;
        }
        self.log_filter = self.log_filter.trim().to_string();
        if self.log_filter.is_empty() {
            self.log_filter = defaults.log_filter;
        }
    }

    /// Settings with no simulated delay.
    pub fn instant() -> Self {
        Self {
            simulated_latency_ms: 0,
            ..Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("hdchart-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"pretty_output": false}"#).unwrap();
        assert!(!settings.pretty_output);
        assert_eq!(settings.simulated_latency_ms, 500);
        assert_eq!(settings.simulator_user_id, "temp-user");
    }

    #[test]
    fn sanitize_clamps_and_restores_blanks() {
        let mut settings = Settings {
            simulated_latency_ms: 99_999,
            simulator_user_id: "   ".into(),
            primary_user_id: " alice ".into(),
            log_filter: String::new(),
            pretty_output: true,
        };
        settings.sanitize();
        assert_eq!(settings.simulated_latency_ms, MAX_SIMULATED_LATENCY_MS);
        assert_eq!(settings.simulator_user_id, "temp-user");
        assert_eq!(settings.primary_user_id, "alice");
        assert_eq!(settings.log_filter, "warn");
    }

    #[test]
    fn save_then_load_keeps_values() {
        let path = scratch_path("roundtrip/settings.json");
        let settings = Settings {
            simulated_latency_ms: 42,
            log_filter: "debug".into(),
            ..Settings::default()
        };
        settings.save_to_disk(&path).unwrap();
        let loaded = Settings::load_from_disk(&path).unwrap();
        assert_eq!(loaded, settings);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unreadable_file_yields_defaults() {
        let path = scratch_path("broken.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(Settings::load_from_disk(&path).is_err());
        assert_eq!(Settings::load_or_default(&path), Settings::default());
        let _ = fs::remove_file(&path);
        assert_eq!(Settings::load_or_default(&scratch_path("absent.json")), Settings::default());
    }
}
