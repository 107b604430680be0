//! Document upload checklist.

use eframe::egui::{self, ProgressBar, RichText, Ui};
use egui_phosphor::regular::{ARROW_RIGHT, CHECK_CIRCLE, FILE_TEXT, UPLOAD};

use crate::state::{Action, AppState};

use super::components::{back_button, colors, panel_header, section};

/// Show the documents panel.
pub fn show(state: &AppState, ui: &mut Ui) -> Vec<Action> {
    let mut actions = Vec::new();

    if back_button(ui, "Back to Dashboard") {
        actions.push(Action::Back);
    }
    panel_header(
        ui,
        FILE_TEXT,
        "Upload Documents",
        "Complete your application by uploading the required documents",
    );

    let percent = state.completion_percent();
    ui.add(
        ProgressBar::new(f32::from(percent) / 100.0)
            .text(format!("{percent}% complete"))
            .desired_width(ui.available_width()),
    );

    ui.add_space(15.0);

    for doc in state.documents.documents() {
        let (icon, color, caption) = if doc.uploaded {
            (CHECK_CIRCLE, colors::SUCCESS, "Uploaded successfully".to_string())
        } else {
            (UPLOAD, colors::NEUTRAL, format!("Upload {}", doc.name))
        };

        section(ui, &doc.name, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(icon).size(18.0).color(color));
                ui.label(RichText::new(caption).weak());

                if !doc.uploaded {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Choose File").clicked() {
                            actions.push(Action::UploadDocument(doc.name.clone()));
                        }
                    });
                }
            });
        });
    }

    if state.can_proceed_to_payment() {
        ui.add_space(15.0);
        ui.vertical_centered(|ui| {
            let next = egui::Button::new(RichText::new(format!("Next - Proceed to Payment {ARROW_RIGHT}")).size(16.0));
            if ui.add(next).clicked() {
                actions.push(Action::ProceedToPayment);
            }
        });
    }

    actions
}
