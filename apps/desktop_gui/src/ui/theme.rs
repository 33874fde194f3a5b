use std::str::FromStr;

use eframe::egui;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    System,
    Light,
    Dark,
}

impl FromStr for ThemePreset {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme preset `{other}`")),
        }
    }
}

impl From<ThemePreset> for egui::ThemePreference {
    fn from(value: ThemePreset) -> Self {
        match value {
            ThemePreset::System => Self::System,
            ThemePreset::Light => Self::Light,
            ThemePreset::Dark => Self::Dark,
        }
    }
}

pub fn apply(ctx: &egui::Context, preset: ThemePreset) {
    ctx.set_theme(egui::ThemePreference::from(preset));
    ctx.all_styles_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
    });
}

/// Muted colour for row captions such as "Email" or "Skills".
pub fn caption_color(ui: &egui::Ui) -> egui::Color32 {
    ui.visuals().weak_text_color()
}
