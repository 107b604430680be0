//! Help & support panel with contact details and FAQ.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{BOOK_OPEN, CHAT_TEXT, ENVELOPE, FILE_TEXT, PHONE, QUESTION};

use crate::models::support::{FAQ, HELP_OPTIONS, SUPPORT_CHANNELS};
use crate::state::Action;

use super::components::{back_button, colors, panel_header, section};

/// Show the help panel.
pub fn show(ui: &mut Ui) -> Vec<Action> {
    let mut actions = Vec::new();

    if back_button(ui, "Back to Dashboard") {
        actions.push(Action::Back);
    }
    panel_header(
        ui,
        QUESTION,
        "Help & Support",
        "Get help and find answers to your questions",
    );

    ui.horizontal(|ui| {
        for (option, icon) in HELP_OPTIONS.iter().zip([CHAT_TEXT, FILE_TEXT, BOOK_OPEN]) {
            egui::Frame::new()
                .fill(ui.style().visuals.extreme_bg_color)
                .inner_margin(egui::Margin::same(15))
                .corner_radius(egui::CornerRadius::same(8))
                .show(ui, |ui| {
                    ui.set_min_width(200.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(icon).size(28.0).color(colors::INFO));
                        ui.label(RichText::new(option.title).strong());
                        ui.label(RichText::new(option.description).small().weak());
                    });
                });
        }
    });

    ui.add_space(10.0);

    section(ui, "Contact Information", |ui| {
        for (channel, icon) in SUPPORT_CHANNELS.iter().zip([PHONE, ENVELOPE]) {
            ui.horizontal(|ui| {
                ui.label(RichText::new(icon).size(18.0));
                ui.vertical(|ui| {
                    ui.label(RichText::new(channel.name).strong());
                    ui.label(channel.contact);
                    ui.label(RichText::new(channel.hours).small().weak());
                });
            });
            ui.add_space(5.0);
        }
    });

    ui.add_space(10.0);

    section(ui, "Frequently Asked Questions", |ui| {
        for (i, faq) in FAQ.iter().enumerate() {
            egui::CollapsingHeader::new(faq.question)
                .id_salt(("faq", i))
                .default_open(i == 0)
                .show(ui, |ui| {
                    ui.label(faq.answer);
                });
        }
    });

    actions
}
