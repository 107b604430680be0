//! Notification popup anchored under the header bell.

use chrono::Local;
use eframe::egui::{self, Color32, Margin, Rect, RichText, ScrollArea};
use egui_phosphor::regular::{BELL, WARNING};

use crate::models::notification::relative_time;
use crate::models::{Notification, Severity};
use crate::state::{Action, AppState, OverlayDispatcher, OverlayId};

use super::components::colors;

const POPUP_WIDTH: f32 = 380.0;

/// Show the notification popup and register its bounds for outside-press dismissal.
pub fn show(state: &AppState, ctx: &egui::Context, anchor: Rect, overlays: &mut OverlayDispatcher) -> Vec<Action> {
    let mut actions = Vec::new();
    let now = Local::now();
    let pos = egui::pos2(anchor.right() - POPUP_WIDTH, anchor.bottom() + 8.0);

    let area = egui::Area::new(egui::Id::new("notifications_popup"))
        .order(egui::Order::Foreground)
        .fixed_pos(pos)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(POPUP_WIDTH);

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Notifications").strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(format!("{} unread", state.unread_count())).small().weak());
                    });
                });
                ui.separator();

                ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                    for notification in &state.notifications {
                        if notification_row(ui, notification, now).clicked() {
                            actions.push(Action::MarkNotificationRead(notification.id));
                        }
                    }
                });
            });
        });

    overlays.register(OverlayId::Notifications, area.response.rect);
    actions
}

fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Info => colors::INFO,
        Severity::Warning => colors::WARNING,
        Severity::Alert => colors::ERROR,
    }
}

fn notification_row(ui: &mut egui::Ui, notification: &Notification, now: chrono::DateTime<Local>) -> egui::Response {
    let accent = severity_color(notification.severity);
    let fill = if notification.read {
        ui.visuals().faint_bg_color
    } else {
        accent.gamma_multiply(0.12)
    };
    let icon = match notification.severity {
        Severity::Info => BELL,
        Severity::Warning | Severity::Alert => WARNING,
    };

    egui::Frame::new()
        .fill(fill)
        .inner_margin(Margin::same(8))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal_top(|ui| {
                ui.label(RichText::new(icon).color(accent));
                ui.vertical(|ui| {
                    let title = RichText::new(&notification.title);
                    ui.label(if notification.read { title.weak() } else { title.strong() });
                    ui.label(RichText::new(&notification.message).small());
                    ui.label(
                        RichText::new(relative_time(notification.timestamp, now))
                            .small()
                            .weak(),
                    );
                });
            });
        })
        .response
        .interact(egui::Sense::click())
}
