//! Dashboard panel with welcome banner, status timeline, quick actions, and alerts.

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, Ui};
use egui_phosphor::regular::{CHECK_CIRCLE, CREDIT_CARD, MAGNIFYING_GLASS, UPLOAD, WARNING};

use crate::models::application::MOCK_STAGE_INDEX;
use crate::models::stage::timeline;
use crate::state::{Action, AppState, QuickAction};

use super::components::{badge, colors, dashboard_card, section, stage_color, stage_icon};

/// Show the dashboard panel.
///
/// Returns the actions requested by the user.
pub fn show(state: &AppState, ui: &mut Ui) -> Vec<Action> {
    let mut actions = Vec::new();

    // Welcome banner
    egui::Frame::new()
        .fill(colors::INFO)
        .inner_margin(Margin::same(20))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(
                RichText::new(format!("Welcome back, {}", state.profile.first_name))
                    .size(24.0)
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.label(
                RichText::new("Track your application progress and manage your career journey")
                    .color(Color32::from_rgb(220, 230, 255)),
            );
        });

    ui.add_space(15.0);

    // Stat cards row
    ui.horizontal(|ui| {
        stat_card(
            ui,
            "Documents",
            &format!("{}%", state.completion_percent()),
            "Upload progress",
        );
        stat_card(
            ui,
            "Notifications",
            &state.unread_count().to_string(),
            "Unread messages",
        );
        stat_card(ui, "Payment Plan", state.payment_plan.label(), "Selected option");
    });

    ui.add_space(10.0);

    // Application status
    section(ui, "Application Status", |ui| {
        for (stage, status) in timeline(MOCK_STAGE_INDEX) {
            ui.horizontal(|ui| {
                let color = stage_color(status);
                ui.label(RichText::new(stage_icon(status)).size(18.0).color(color));
                ui.label(RichText::new(stage.name()).color(color));
            });
        }
    });

    ui.add_space(10.0);

    // Quick action tiles
    let available = ui.available_width();
    let spacing = 20.0;
    let card_width = ((available - spacing * 3.0) / 4.0).clamp(140.0, 240.0);
    let card_size = egui::vec2(card_width, card_width * 0.6);

    ui.horizontal(|ui| {
        for action in QuickAction::ALL {
            let (icon, accent) = quick_action_style(action);
            if dashboard_card(ui, action.title(), icon, accent, card_size).clicked() {
                actions.push(Action::QuickAction(action));
            }
            ui.add_space(spacing);
        }
    });

    ui.add_space(10.0);

    // Recent notifications
    section(ui, &format!("{WARNING} Recent Notifications"), |ui| {
        ui.horizontal_top(|ui| {
            badge(ui, "RTO Alert", colors::ERROR);
            ui.vertical(|ui| {
                ui.label(RichText::new("7000+ qualifications cancelled – check yours now!").strong());
                ui.label(
                    RichText::new(
                        "Due to recent regulatory changes, several qualifications have been cancelled. \
                         Please verify the status of your qualifications.",
                    )
                    .color(colors::WARNING),
                );
            });
        });
    });

    actions
}

fn quick_action_style(action: QuickAction) -> (&'static str, Color32) {
    match action {
        QuickAction::CheckEligibility => (CHECK_CIRCLE, Color32::from_rgb(240, 150, 60)),
        QuickAction::UploadDocuments => (UPLOAD, colors::ACCENT),
        QuickAction::PayNow => (CREDIT_CARD, colors::SUCCESS),
        QuickAction::TrackApplication => (MAGNIFYING_GLASS, colors::INFO),
    }
}

/// Render a stat card with title, value, and subtitle.
fn stat_card(ui: &mut Ui, title: &str, value: &str, subtitle: &str) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::same(5))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(150.0);

            ui.vertical(|ui| {
                ui.label(RichText::new(title).small());
                ui.label(RichText::new(value).heading().strong());
                ui.label(RichText::new(subtitle).small().weak());
            });
        });
}
