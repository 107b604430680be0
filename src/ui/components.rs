//! Shared UI components.

use eframe::egui::{self, Color32, CornerRadius, Margin, Response, RichText, Sense, StrokeKind, Ui};
use egui_phosphor::regular::{ARROW_LEFT, CHECK_CIRCLE, CIRCLE, CLOCK};

use crate::models::StageStatus;

/// Render a clickable dashboard card with dynamic size.
///
/// Returns the response which can be checked for `.clicked()`.
pub fn dashboard_card(ui: &mut Ui, title: &str, icon: &str, accent: Color32, size: egui::Vec2) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);

        // Scale factor based on width (200 is the reference size)
        let scale = size.x / 200.0;

        ui.painter().rect_filled(rect, 8.0, visuals.bg_fill);
        ui.painter()
            .rect_stroke(rect, 8.0, visuals.bg_stroke, StrokeKind::Outside);

        // Icon disc
        let icon_pos = egui::pos2(rect.center().x, rect.top() + size.y * 0.35);
        ui.painter()
            .circle_filled(icon_pos, 24.0 * scale, accent.gamma_multiply(0.2));
        ui.painter().text(
            icon_pos,
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(24.0 * scale),
            accent,
        );

        let title_pos = egui::pos2(rect.center().x, rect.bottom() - size.y * 0.22);
        ui.painter().text(
            title_pos,
            egui::Align2::CENTER_CENTER,
            title,
            egui::FontId::proportional(16.0 * scale),
            visuals.text_color(),
        );
    }

    response
}

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 100);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);
    pub const INFO: Color32 = Color32::from_rgb(100, 150, 230);
    pub const ACCENT: Color32 = Color32::from_rgb(140, 100, 220);
}

/// Render a back button that returns true when clicked.
pub fn back_button(ui: &mut Ui, label: &str) -> bool {
    ui.button(RichText::new(format!("{ARROW_LEFT} {label}")).size(14.0))
        .clicked()
}

/// Render a panel header with title and description.
pub fn panel_header(ui: &mut Ui, icon: &str, title: &str, description: &str) {
    ui.heading(RichText::new(format!("{icon} {title}")).size(24.0));
    ui.label(RichText::new(description).weak());
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(20.0);
}

/// Framed section with a bold title.
pub fn section<R>(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::symmetric(0, 5))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(title).strong().size(16.0));
            ui.add_space(10.0);
            add_contents(ui)
        })
        .inner
}

/// Small colored pill.
pub fn badge(ui: &mut Ui, text: &str, color: Color32) -> Response {
    egui::Frame::new()
        .fill(color.gamma_multiply(0.2))
        .inner_margin(Margin::symmetric(6, 2))
        .corner_radius(CornerRadius::same(10))
        .show(ui, |ui| ui.label(RichText::new(text).small().color(color)))
        .response
}

/// Color for a timeline stage.
pub fn stage_color(status: StageStatus) -> Color32 {
    match status {
        StageStatus::Completed => colors::SUCCESS,
        StageStatus::Current => colors::INFO,
        StageStatus::Pending => colors::NEUTRAL,
    }
}

/// Icon for a timeline stage.
pub fn stage_icon(status: StageStatus) -> &'static str {
    match status {
        StageStatus::Completed => CHECK_CIRCLE,
        StageStatus::Current => CLOCK,
        StageStatus::Pending => CIRCLE,
    }
}

/// Label / value pair in a two-column grid.
pub fn info_row(ui: &mut Ui, label: &str, value: &str) {
    ui.label(RichText::new(label).weak());
    ui.label(RichText::new(value).strong());
    ui.end_row();
}
