//! Profile panel with personal details and account summary.

use eframe::egui::{self, Ui};
use egui_phosphor::regular::USER_CIRCLE;

use crate::config::AppConfig;
use crate::models::ProfileField;
use crate::state::{Action, AppState};

use super::components::{back_button, badge, colors, info_row, panel_header, section};

/// Show the profile panel.
pub fn show(state: &AppState, config: &AppConfig, ui: &mut Ui) -> Vec<Action> {
    let mut actions = Vec::new();

    if back_button(ui, "Back to Dashboard") {
        actions.push(Action::Back);
    }
    panel_header(
        ui,
        USER_CIRCLE,
        "Profile",
        "Manage your personal information and account details",
    );

    section(ui, "Personal Information", |ui| {
        let profile = &state.profile;
        let fields = [
            ("First Name", ProfileField::FirstName, &profile.first_name),
            ("Last Name", ProfileField::LastName, &profile.last_name),
            ("Email", ProfileField::Email, &profile.email),
            ("Phone Number", ProfileField::Phone, &profile.phone),
        ];

        egui::Grid::new("profile_grid")
            .num_columns(2)
            .spacing([20.0, 8.0])
            .show(ui, |ui| {
                for (label, field, value) in fields {
                    ui.label(label);
                    let mut text = value.clone();
                    if ui.text_edit_singleline(&mut text).changed() {
                        actions.push(Action::EditProfile(field, text));
                    }
                    ui.end_row();
                }

                ui.label("Address");
                let mut address = profile.address.clone();
                let response = ui.add(
                    egui::TextEdit::multiline(&mut address)
                        .desired_rows(2)
                        .hint_text("Enter your address"),
                );
                if response.changed() {
                    actions.push(Action::EditProfile(ProfileField::Address, address));
                }
                ui.end_row();
            });
    });

    ui.add_space(10.0);

    section(ui, "Account Information", |ui| {
        egui::Grid::new("account_grid")
            .num_columns(2)
            .spacing([40.0, 8.0])
            .show(ui, |ui| {
                info_row(ui, "Account ID", &config.applicant.account_id);
                info_row(ui, "Member Since", &config.applicant.member_since);

                ui.label("Account Status");
                badge(ui, "Active", colors::SUCCESS);
                ui.end_row();

                ui.label("Verification Status");
                badge(ui, "Verified", colors::INFO);
                ui.end_row();
            });
    });

    actions
}
