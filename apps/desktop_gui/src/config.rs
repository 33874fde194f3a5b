use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::ui::theme::ThemePreset;

pub const APP_DIR_NAME: &str = "purism-cv";
const SETTINGS_FILE_NAME: &str = "settings.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub data_dir: Option<PathBuf>,
    /// Window width (logical points) below which the layout folds to one pane.
    pub fold_width: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub theme: ThemePreset,
    pub log_filter: String,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            data_dir: None,
            fold_width: 720.0,
            // Narrow default so the viewer opens folded.
            window_width: 360.0,
            window_height: 648.0,
            theme: ThemePreset::System,
            log_filter: "info".into(),
        }
    }
}

impl ViewerSettings {
    fn apply_file(&mut self, raw: &str) {
        match toml::from_str::<ViewerSettings>(raw) {
            Ok(file_cfg) => *self = file_cfg,
            Err(err) => tracing::debug!(error = %err, "ignoring invalid settings file"),
        }
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("PURISM_CV_DATA_DIR") {
            self.data_dir = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("PURISM_CV_FOLD_WIDTH") {
            if let Ok(parsed) = v.parse::<f32>() {
                self.fold_width = parsed;
            }
        }
        if let Some(v) = lookup("PURISM_CV_THEME") {
            if let Ok(parsed) = v.parse::<ThemePreset>() {
                self.theme = parsed;
            }
        }
        if let Some(v) = lookup("PURISM_CV_LOG") {
            self.log_filter = v;
        }
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.fold_width.is_finite() || self.fold_width <= 0.0 {
            self.fold_width = defaults.fold_width;
        }
        if !self.window_width.is_finite() || self.window_width < 200.0 {
            self.window_width = defaults.window_width;
        }
        if !self.window_height.is_finite() || self.window_height < 200.0 {
            self.window_height = defaults.window_height;
        }
        if self.log_filter.trim().is_empty() {
            self.log_filter = defaults.log_filter;
        }
        self
    }
}

pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

pub fn load_settings() -> ViewerSettings {
    load_settings_from(settings_path().as_deref(), |name| {
        std::env::var(name).ok().filter(|v| !v.trim().is_empty())
    })
}

fn load_settings_from(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> ViewerSettings {
    let mut settings = ViewerSettings::default();

    if let Some(path) = path {
        if let Ok(raw) = fs::read_to_string(path) {
            settings.apply_file(&raw);
        }
    }
    settings.apply_env(lookup);

    settings.sanitized()
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_without_file_or_env() {
        let settings = load_settings_from(None, env_from(&[]));
        assert_eq!(settings, ViewerSettings::default());
        assert!(settings.window_width < settings.fold_width);
    }

    #[test]
    fn file_values_then_env_overrides() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let temp_root = env::temp_dir().join(format!("purism_cv_settings_test_{suffix}"));
        fs::create_dir_all(&temp_root).expect("temp root");
        let path = temp_root.join("settings.toml");
        fs::write(
            &path,
            "data_dir = \"/srv/cv\"\nfold_width = 900.0\ntheme = \"dark\"\n",
        )
        .expect("write settings");

        let settings = load_settings_from(Some(&path), env_from(&[]));
        assert_eq!(settings.data_dir, Some(PathBuf::from("/srv/cv")));
        assert_eq!(settings.fold_width, 900.0);
        assert_eq!(settings.theme, ThemePreset::Dark);
        assert_eq!(settings.window_height, 648.0);

        let settings = load_settings_from(
            Some(&path),
            env_from(&[
                ("PURISM_CV_DATA_DIR", "/opt/cv"),
                ("PURISM_CV_FOLD_WIDTH", "640"),
                ("PURISM_CV_LOG", "debug"),
            ]),
        );
        assert_eq!(settings.data_dir, Some(PathBuf::from("/opt/cv")));
        assert_eq!(settings.fold_width, 640.0);
        assert_eq!(settings.log_filter, "debug");

        fs::remove_dir_all(temp_root).expect("cleanup");
    }

    #[test]
    fn invalid_values_are_ignored() {
        let mut settings = ViewerSettings::default();
        settings.apply_file("fold_width = \"wide\"");
        assert_eq!(settings, ViewerSettings::default());

        let settings = load_settings_from(
            None,
            env_from(&[
                ("PURISM_CV_FOLD_WIDTH", "not-a-number"),
                ("PURISM_CV_THEME", "neon"),
            ]),
        );
        assert_eq!(settings.fold_width, 720.0);
        assert_eq!(settings.theme, ThemePreset::System);
    }

    #[test]
    fn sanitizes_out_of_range_sizes() {
        let settings = ViewerSettings {
            fold_width: -1.0,
            window_width: 10.0,
            log_filter: " ".into(),
            ..ViewerSettings::default()
        }
        .sanitized();
        assert_eq!(settings, ViewerSettings::default());
    }
}
