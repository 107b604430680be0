//! Application tracking: id search, record details, and stage timeline.

use eframe::egui::{self, Key, RichText, Ui};
use egui_phosphor::regular::{MAGNIFYING_GLASS, PATH};

use crate::models::TrackedApplication;
use crate::state::{Action, AppState};

use super::components::{back_button, badge, colors, info_row, panel_header, section, stage_color, stage_icon};

/// Show the tracking panel.
pub fn show(state: &AppState, ui: &mut Ui) -> Vec<Action> {
    let mut actions = Vec::new();

    if back_button(ui, "Back to Dashboard") {
        actions.push(Action::Back);
    }
    panel_header(
        ui,
        PATH,
        "Track Your Application",
        "Enter your application ID to check the current status of your application",
    );

    section(ui, "Application ID", |ui| {
        ui.horizontal(|ui| {
            let mut input = state.application_id_input.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut input)
                    .desired_width(320.0)
                    .hint_text("Enter your application ID (e.g., CB-2024-001234)"),
            );
            if response.changed() {
                actions.push(Action::EditApplicationId(input.clone()));
            }

            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            let can_search = !input.trim().is_empty();
            let search = ui
                .add_enabled(can_search, egui::Button::new(format!("{MAGNIFYING_GLASS} Search")))
                .clicked();

            if search || (enter && can_search) {
                actions.push(Action::SearchApplication);
            }
        });
    });

    if let Some(record) = &state.searched_application {
        ui.add_space(10.0);
        show_details(ui, record);
        ui.add_space(10.0);
        show_timeline(ui, record);
        ui.add_space(10.0);
        section(ui, "What's Next?", |ui| {
            ui.label(record.current_stage().next_steps());
        });
    }

    actions
}

fn show_details(ui: &mut Ui, record: &TrackedApplication) {
    section(ui, "Application Details", |ui| {
        egui::Grid::new("application_details_grid")
            .num_columns(2)
            .spacing([40.0, 8.0])
            .show(ui, |ui| {
                info_row(ui, "Application ID", &record.id);
                info_row(ui, "Applicant Name", &record.applicant_name);
                info_row(ui, "Submitted Date", &record.submitted_date.format("%Y-%m-%d").to_string());
                info_row(
                    ui,
                    "Estimated Completion",
                    &record.estimated_completion_date.format("%Y-%m-%d").to_string(),
                );
            });
    });
}

fn show_timeline(ui: &mut Ui, record: &TrackedApplication) {
    section(ui, "Application Status", |ui| {
        ui.label(RichText::new("Track the progress of your application through each stage").weak());
        ui.add_space(10.0);

        for (stage, status) in record.timeline() {
            let color = stage_color(status);
            ui.horizontal(|ui| {
                ui.label(RichText::new(stage_icon(status)).size(24.0).color(color));
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(stage.name()).size(16.0).strong().color(color));
                        if let Some(text) = status.badge() {
                            badge(ui, text, colors::INFO);
                        }
                    });
                    ui.label(RichText::new(status.caption()).small().weak());
                });
            });
            ui.add_space(6.0);
        }
    });
}
