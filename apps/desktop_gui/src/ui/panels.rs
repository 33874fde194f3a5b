//! Pane renderers. They read controller state and push events; they never mutate layout state.

use eframe::egui;
use layout_core::SectionPane;
use shared::{Profile, Section};

use crate::controller::{events::UiEvent, orchestration::EventQueue};
use crate::ui::{app::AppPaths, layout, theme, widgets};

pub struct ProfilePaneProps<'a> {
    pub profile: &'a Profile,
    pub paths: &'a AppPaths,
    pub nav_buttons_visible: bool,
    pub active_section: Section,
}

/// Slot A: picture, contact rows, about text, skills and (when folded) navigation.
pub fn show_profile_pane(
    ui: &mut egui::Ui,
    props: ProfilePaneProps<'_>,
    picture: &mut widgets::ProfilePicture,
    events: &mut EventQueue,
) {
    let profile = props.profile;

    if props.nav_buttons_visible {
        egui::TopBottomPanel::bottom("profile_pane_navigation")
            .show_separator_line(false)
            .show_inside(ui, |ui| {
                ui.add_space(6.0);
                show_navigation_buttons(ui, props.active_section, events);
                ui.add_space(6.0);
            });
    }

    egui::ScrollArea::vertical()
        .id_salt("profile_pane_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let max_width = ui.available_width().min(layout::PROFILE_PANE_WIDTH);
                picture.show(ui, &props.paths.profile_picture_path, &profile.name, max_width);
            });
            ui.add_space(8.0);

            widgets::info_row(ui, "Name", &profile.name);
            widgets::info_row(ui, "Email", &profile.email);
            widgets::info_row(ui, "Phone", &profile.phone);
            ui.separator();

            ui.label(egui::RichText::new("About").strong());
            ui.add(egui::Label::new(profile.about_text()).wrap());
            ui.separator();

            ui.label(egui::RichText::new("Skills").strong());
            let caption = theme::caption_color(ui);
            for skill in &profile.skills {
                ui.label(egui::RichText::new(&skill.label))
                    .on_hover_text(egui::RichText::new(&skill.icon).color(caption));
            }
        });
}

fn show_navigation_buttons(ui: &mut egui::Ui, active: Section, events: &mut EventQueue) {
    let width = ui.available_width();
    for section in Section::ALL {
        let button = egui::Button::new(section.label())
            .selected(section == active)
            .min_size(egui::vec2(width, 32.0));
        if ui.add(button).clicked() {
            events.push(UiEvent::NavButton(section));
        }
    }
}

/// One section of Slot B, with the "Go Back" button when it carries a back affordance.
pub fn show_section_pane(ui: &mut egui::Ui, pane: &SectionPane, events: &mut EventQueue) {
    let frame = egui::Frame::NONE.inner_margin(egui::Margin::same(layout::CONTENT_MARGIN));
    frame.show(ui, |ui| {
        if pane.back_affordance {
            egui::TopBottomPanel::bottom(egui::Id::new(("section_pane_back", pane.section)))
                .show_separator_line(false)
                .show_inside(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        if ui.button("Go Back").clicked() {
                            events.push(UiEvent::BackButton);
                        }
                    });
                });
        }

        egui::ScrollArea::vertical()
            .id_salt(("section_pane_scroll", pane.section))
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(pane.section.label());
                ui.add_space(6.0);
                ui.add(egui::Label::new(pane.text.as_str()).wrap());
            });
    });
}

/// The unfolded Slot B: every section side by side.
pub fn show_composite_pane(ui: &mut egui::Ui, panes: &[SectionPane; 3], events: &mut EventQueue) {
    ui.columns(panes.len(), |columns| {
        for (column, pane) in columns.iter_mut().zip(panes.iter()) {
            show_section_pane(column, pane, events);
        }
    });
}
