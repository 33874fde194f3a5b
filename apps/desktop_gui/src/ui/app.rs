use std::{path::PathBuf, sync::Arc};

use eframe::egui;
use layout_core::{LayoutController, Pane, SlotBContent};
use shared::{Profile, PROFILE_FILE_NAME};

use crate::config::{ViewerSettings, APP_DIR_NAME};
use crate::controller::{events::UiEvent, orchestration::EventQueue};
use crate::ui::{
    layout::{self, FoldTracker},
    panels::{self, ProfilePaneProps},
    theme::{self, ThemePreset},
    widgets::ProfilePicture,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub profile_path: PathBuf,
    pub profile_picture_path: PathBuf,
}

impl AppPaths {
    pub fn from_settings(settings: &ViewerSettings) -> anyhow::Result<Self> {
        let root = if let Some(dir) = &settings.data_dir {
            dir.clone()
        } else {
            dirs::data_dir()
                .ok_or_else(|| anyhow::anyhow!("unable to resolve app data dir"))?
                .join(APP_DIR_NAME)
        };
        Ok(Self::from_data_dir(root))
    }

    pub fn from_data_dir(data_dir: PathBuf) -> Self {
        Self {
            profile_path: data_dir.join(PROFILE_FILE_NAME),
            profile_picture_path: data_dir.join("images").join("profile_pic.png"),
            data_dir,
        }
    }
}

pub struct CvViewerApp {
    controller: LayoutController,
    paths: AppPaths,
    theme: ThemePreset,
    applied_theme: Option<ThemePreset>,
    fold: FoldTracker,
    events: EventQueue,
    picture: ProfilePicture,
}

impl CvViewerApp {
    pub fn new(profile: Arc<Profile>, paths: AppPaths, settings: &ViewerSettings) -> Self {
        Self {
            controller: LayoutController::new(profile),
            paths,
            theme: settings.theme,
            applied_theme: None,
            fold: FoldTracker::new(settings.fold_width),
            events: EventQueue::default(),
            picture: ProfilePicture::new(),
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }
        theme::apply(ctx, self.theme);
        self.applied_theme = Some(self.theme);
    }

    /// Feeds a width change to the controller before anything is painted.
    fn observe_window_width(&mut self, ctx: &egui::Context) {
        let width = ctx.input(|input| input.screen_rect().width());
        if let Some(folded) = self.fold.observe(width) {
            tracing::info!(width, folded, "layout fold changed");
            self.events.push(UiEvent::FoldObserved { folded });
            self.events.dispatch(&mut self.controller);
        }
    }

    fn show_layout(&mut self, ctx: &egui::Context) {
        let Self {
            controller,
            paths,
            events,
            picture,
            ..
        } = self;
        let profile = controller.profile().clone();
        let state = controller.state();
        let profile_props = ProfilePaneProps {
            profile: &profile,
            paths,
            nav_buttons_visible: state.nav_buttons_visible,
            active_section: state.active_section,
        };

        if state.folded {
            egui::CentralPanel::default().show(ctx, |ui| {
                match (state.visible, &state.slot_b) {
                    (Pane::SlotB, Some(slot)) => match &slot.content {
                        SlotBContent::Single(pane) => panels::show_section_pane(ui, pane, events),
                        SlotBContent::Composite(panes) => {
                            panels::show_composite_pane(ui, panes, events)
                        }
                    },
                    _ => panels::show_profile_pane(ui, profile_props, picture, events),
                }
            });
            return;
        }

        egui::SidePanel::left("profile_pane")
            .resizable(false)
            .exact_width(layout::PROFILE_PANE_WIDTH)
            .show(ctx, |ui| {
                panels::show_profile_pane(ui, profile_props, picture, events);
            });
        egui::CentralPanel::default().show(ctx, |ui| match state.slot_b.as_ref().map(|slot| &slot.content) {
            Some(SlotBContent::Composite(panes)) => panels::show_composite_pane(ui, panes, events),
            Some(SlotBContent::Single(pane)) => panels::show_section_pane(ui, pane, events),
            None => {}
        });
    }
}

impl eframe::App for CvViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);
        self.observe_window_width(ctx);
        self.show_layout(ctx);

        if !self.events.is_empty() {
            self.events.dispatch(&mut self.controller);
            ctx.request_repaint();
        }
    }
}
