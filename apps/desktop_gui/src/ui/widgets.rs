//! Small reusable widgets for the profile pane.

use std::{fs, path::Path};

use eframe::egui;
use egui::TextureHandle;

use crate::ui::theme;

const PROFILE_PICTURE_MAX_DIMENSION: u32 = 256;

pub(crate) struct DecodedImage {
    width: usize,
    height: usize,
    rgba: Vec<u8>,
}

fn decode_profile_picture(bytes: &[u8]) -> Result<DecodedImage, String> {
    let dynamic = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let resized = dynamic
        .thumbnail(PROFILE_PICTURE_MAX_DIMENSION, PROFILE_PICTURE_MAX_DIMENSION)
        .to_rgba8();
    let width = resized.width() as usize;
    let height = resized.height() as usize;
    Ok(DecodedImage {
        width,
        height,
        rgba: resized.into_raw(),
    })
}

enum PictureState {
    NotLoaded,
    Loaded(TextureHandle),
    Unavailable,
}

/// Profile picture decoded lazily on first paint; falls back to initials.
pub struct ProfilePicture {
    state: PictureState,
}

impl ProfilePicture {
    pub fn new() -> Self {
        Self {
            state: PictureState::NotLoaded,
        }
    }

    fn ensure_loaded(&mut self, ctx: &egui::Context, path: &Path) {
        if !matches!(self.state, PictureState::NotLoaded) {
            return;
        }
        let decoded = fs::read(path)
            .map_err(|err| err.to_string())
            .and_then(|bytes| decode_profile_picture(&bytes));
        self.state = match decoded {
            Ok(image) => {
                let color_image =
                    egui::ColorImage::from_rgba_unmultiplied([image.width, image.height], &image.rgba);
                PictureState::Loaded(ctx.load_texture(
                    format!("profile-picture:{}", path.display()),
                    color_image,
                    egui::TextureOptions::LINEAR,
                ))
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "profile picture unavailable");
                PictureState::Unavailable
            }
        };
    }

    pub fn show(&mut self, ui: &mut egui::Ui, path: &Path, name: &str, max_width: f32) {
        self.ensure_loaded(ui.ctx(), path);
        match &self.state {
            PictureState::Loaded(texture) => {
                let size = texture.size_vec2();
                let scale = (max_width / size.x).min(1.0);
                ui.add(egui::Image::new((texture.id(), size * scale)));
            }
            PictureState::NotLoaded | PictureState::Unavailable => {
                let side = max_width.min(96.0);
                let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
                let visuals = ui.visuals();
                ui.painter()
                    .circle_filled(rect.center(), side / 2.0, visuals.faint_bg_color);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    initials(name),
                    egui::FontId::proportional(side / 2.5),
                    visuals.strong_text_color(),
                );
            }
        }
    }
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Caption over a value, like a titled list row.
pub fn info_row(ui: &mut egui::Ui, caption: &str, value: &str) {
    ui.vertical(|ui| {
        let caption_color = theme::caption_color(ui);
        ui.label(egui::RichText::new(caption).small().color(caption_color));
        ui.label(value);
    });
}
