use std::sync::Arc;

mod config;
mod controller;
mod ui;

use anyhow::Context;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::ui::{AppPaths, CvViewerApp};

fn main() -> anyhow::Result<()> {
    let settings = config::load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let paths = AppPaths::from_settings(&settings)?;
    let loaded = shared::load_or_default(&paths.profile_path);
    tracing::info!(
        data_dir = %paths.data_dir.display(),
        fallback = loaded.is_fallback(),
        "profile ready"
    );

    let profile = Arc::new(loaded.profile);
    let title = profile.window_title();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_app_id("purism-cv")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(CvViewerApp::new(profile, paths, &settings)))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
    .context("viewer window failed")
}
