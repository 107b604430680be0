//! Settings panel for notification, security, and display preferences.

use eframe::egui::{self, RichText};
use egui_phosphor::regular::GEAR;

use crate::models::{Language, NotificationChannel, Timezone};
use crate::state::{Action, AppState};

use super::components::{back_button, badge, colors, panel_header, section};

/// Show the settings panel.
pub fn show(state: &AppState, ui: &mut egui::Ui) -> Vec<Action> {
    let mut actions = Vec::new();
    let prefs = state.preferences;

    if back_button(ui, "Back to Dashboard") {
        actions.push(Action::Back);
    }
    panel_header(
        ui,
        GEAR,
        "Settings",
        "Manage your account preferences and security settings",
    );

    section(ui, "Notification Preferences", |ui| {
        for channel in NotificationChannel::ALL {
            let mut enabled = prefs.notifications.get(channel);
            ui.horizontal(|ui| {
                if ui.checkbox(&mut enabled, channel.label()).changed() {
                    actions.push(Action::SetNotificationChannel(channel, enabled));
                }
                ui.label(RichText::new(channel.description()).small().weak());
            });
        }
    });

    ui.add_space(10.0);

    section(ui, "Security", |ui| {
        ui.horizontal(|ui| {
            ui.label("Two-Factor Authentication");
            if prefs.two_factor_enabled {
                badge(ui, "Enabled", colors::SUCCESS);
            } else {
                badge(ui, "Disabled", colors::ERROR);
            }
        });
    });

    ui.add_space(10.0);

    section(ui, "Preferences", |ui| {
        egui::Grid::new("preferences_grid")
            .num_columns(2)
            .spacing([20.0, 8.0])
            .show(ui, |ui| {
                ui.label("Language");
                egui::ComboBox::from_id_salt("language_select")
                    .selected_text(prefs.language.name())
                    .show_ui(ui, |ui| {
                        for language in Language::ALL {
                            if ui.selectable_label(prefs.language == language, language.name()).clicked() {
                                actions.push(Action::SetLanguage(language));
                            }
                        }
                    });
                ui.end_row();

                ui.label("Timezone");
                egui::ComboBox::from_id_salt("timezone_select")
                    .selected_text(prefs.timezone.name())
                    .show_ui(ui, |ui| {
                        for timezone in Timezone::ALL {
                            if ui.selectable_label(prefs.timezone == timezone, timezone.name()).clicked() {
                                actions.push(Action::SetTimezone(timezone));
                            }
                        }
                    });
                ui.end_row();
            });
    });

    actions
}
