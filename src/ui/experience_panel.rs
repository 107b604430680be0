//! Industry experience intake form and RPL qualification suggestions.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{ARROW_RIGHT, BRIEFCASE};

use crate::models::{Industry, IntakeField, QUALIFICATIONS};
use crate::state::{Action, AppState};

use super::components::{back_button, panel_header, section};

/// Show the experience panel.
pub fn show(state: &AppState, ui: &mut Ui) -> Vec<Action> {
    let mut actions = Vec::new();

    if back_button(ui, "Back to Dashboard") {
        actions.push(Action::Back);
    }
    panel_header(
        ui,
        BRIEFCASE,
        "Industry Experience",
        "Tell us about your professional background to find the best qualifications for you",
    );

    section(ui, "Your Details", |ui| {
        egui::Grid::new("intake_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                text_field(ui, &mut actions, "Full Name *", "Enter your full name", IntakeField::Name, &state.intake.name);
                text_field(
                    ui,
                    &mut actions,
                    "Email Address *",
                    "Enter your email address",
                    IntakeField::Email,
                    &state.intake.email,
                );
                text_field(
                    ui,
                    &mut actions,
                    "Phone Number *",
                    "Enter your phone number",
                    IntakeField::Phone,
                    &state.intake.phone,
                );

                ui.label("Industry *");
                egui::ComboBox::from_id_salt("intake_industry")
                    .width(240.0)
                    .selected_text(state.intake.industry.map(Industry::name).unwrap_or("Select an industry"))
                    .show_ui(ui, |ui| {
                        for industry in Industry::ALL {
                            if ui
                                .selectable_label(state.intake.industry == Some(industry), industry.name())
                                .clicked()
                            {
                                actions.push(Action::SelectIndustry(industry));
                            }
                        }
                    });
                ui.end_row();
            });

        ui.add_space(10.0);
        ui.label("Tell us about your experience *");
        let mut experience = state.intake.experience.clone();
        let response = ui.add(
            egui::TextEdit::multiline(&mut experience)
                .desired_rows(5)
                .desired_width(f32::INFINITY)
                .hint_text("Describe your work experience, skills, and achievements..."),
        );
        if response.changed() {
            actions.push(Action::EditIntake(IntakeField::Experience, experience));
        }

        ui.add_space(10.0);
        let submit = ui.add_enabled(state.can_submit_intake(), egui::Button::new("Submit Application"));
        if submit.clicked() {
            actions.push(Action::SubmitIntake);
        }
        if !state.can_submit_intake() {
            ui.label(RichText::new("All fields marked * are required").small().weak());
        }
    });

    ui.add_space(10.0);

    section(ui, "Possible RPL Qualifications", |ui| {
        ui.label(
            RichText::new(
                "Based on your experience, these qualifications might be suitable for Recognition of Prior Learning",
            )
            .weak(),
        );
        ui.add_space(8.0);
        for qual in QUALIFICATIONS {
            ui.horizontal(|ui| {
                ui.label(RichText::new(qual.code).strong());
                ui.label(qual.title);
                ui.label(RichText::new(ARROW_RIGHT).weak());
            });
        }
    });

    actions
}

fn text_field(
    ui: &mut Ui,
    actions: &mut Vec<Action>,
    label: &str,
    hint: &str,
    field: IntakeField,
    value: &str,
) {
    ui.label(label);
    let mut text = value.to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut text)
            .desired_width(240.0)
            .hint_text(hint),
    );
    if response.changed() {
        actions.push(Action::EditIntake(field, text));
    }
    ui.end_row();
}
