//! Main application UI.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use eframe::egui::{self, Align, Layout, RichText};
use egui_phosphor::regular::{BELL, CHECK_CIRCLE, ENVELOPE, GEAR, PHONE, QUESTION, SIGN_OUT, USER, USER_CIRCLE};
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::models::support::SUPPORT_CHANNELS;
use crate::scheduler::{ScheduledTask, Scheduler};
use crate::state::{Action, AppState, Effect, OverlayDispatcher, OverlayId, Store, UserMenuItem, View};

use super::components::colors;
use super::{
    dashboard, documents_panel, experience_panel, help_panel, notification_panel, payment_panel, profile_panel,
    settings_panel, track_panel,
};

/// Messages from background tasks to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMessage {
    /// The delay after an intake submit has elapsed.
    ClearIntake { submission: u64 },
}

/// Main application state.
pub struct App {
    // Runtime for scheduled tasks
    #[allow(dead_code)]
    rt: tokio::runtime::Runtime,

    // Message channel for async communication
    rx: mpsc::UnboundedReceiver<UiMessage>,
    scheduler: Scheduler<UiMessage>,
    intake_clear: Option<ScheduledTask>,

    // State
    store: Store,
    config: AppConfig,
    overlays: OverlayDispatcher,

    // Dialogs
    initial_error: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, rt: tokio::runtime::Runtime, initial_error: Option<String>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Scheduler::new(rt.handle().clone(), tx);
        let store = Store::new(AppState::new(&config, Local::now()));

        Self {
            rt,
            rx,
            scheduler,
            intake_clear: None,
            store,
            config,
            overlays: OverlayDispatcher::new(),
            initial_error,
        }
    }

    /// Apply an action and carry out the effects it requests.
    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatch");
        for effect in self.store.dispatch(action) {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ScheduleIntakeClear { submission } => {
                let delay = self.config.intake.clear_delay();
                tracing::info!("Intake form submitted; clearing in {:?}", delay);
                // Replacing the handle aborts any clear still pending.
                self.intake_clear = Some(
                    self.scheduler
                        .schedule(delay, UiMessage::ClearIntake { submission }),
                );
            }
            Effect::PaymentRequested(plan) => {
                tracing::info!("Payment requested with plan '{}' (no charge made)", plan.label());
            }
            Effect::LogOut => {
                tracing::info!("Logging out...");
            }
        }
    }

    /// Drain messages from background tasks.
    fn poll_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::ClearIntake { submission } => {
                    // A stale message must not drop the handle of a newer pending clear.
                    if submission == self.store.state().intake_submission {
                        self.intake_clear = None;
                    }
                    self.dispatch(Action::ClearIntake { submission });
                }
            }
        }
    }

    /// Route a pointer press to the overlays registered last frame.
    fn handle_outside_press(&mut self, ctx: &egui::Context) {
        let press = ctx.input(|i| {
            if i.pointer.any_pressed() {
                i.pointer.press_origin()
            } else {
                None
            }
        });

        if let Some(pos) = press {
            self.route_press(pos);
        }
    }

    /// Close every overlay the press at `pos` landed outside of.
    fn route_press(&mut self, pos: egui::Pos2) {
        for id in self.overlays.pointer_pressed(pos) {
            self.dispatch(Action::CloseOverlay(id));
        }
    }

    /// Render header with brand, notification bell, and user menu.
    fn show_header(&mut self, ctx: &egui::Context, state: &AppState, actions: &mut Vec<Action>) {
        egui::TopBottomPanel::top("header").min_height(48.0).show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new("CB")
                        .strong()
                        .color(egui::Color32::WHITE)
                        .background_color(colors::INFO),
                );
                ui.label(RichText::new("Career Bridge").size(20.0).strong().color(colors::ACCENT));

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    self.show_user_menu(ui, state, actions);

                    let bell = ui.button(RichText::new(BELL).size(18.0));
                    let unread = state.unread_count();
                    if unread > 0 {
                        let center = bell.rect.right_top() + egui::vec2(-2.0, 2.0);
                        ui.painter().circle_filled(center, 8.0, colors::ERROR);
                        ui.painter().text(
                            center,
                            egui::Align2::CENTER_CENTER,
                            unread.to_string(),
                            egui::FontId::proportional(10.0),
                            egui::Color32::WHITE,
                        );
                    }
                    if bell.clicked() {
                        actions.push(Action::ToggleNotifications);
                    }

                    if state.notifications_open {
                        self.overlays.register(OverlayId::Notifications, bell.rect);
                        actions.extend(notification_panel::show(state, ui.ctx(), bell.rect, &mut self.overlays));
                    }
                });
            });
        });
    }

    fn show_user_menu(&self, ui: &mut egui::Ui, state: &AppState, actions: &mut Vec<Action>) {
        ui.menu_button(RichText::new(USER).size(18.0), |ui| {
            ui.label(RichText::new(state.profile.full_name()).strong());
            ui.label(RichText::new(&state.profile.email).small().weak());
            ui.separator();

            let items = [
                (USER_CIRCLE, UserMenuItem::Profile),
                (GEAR, UserMenuItem::Settings),
                (QUESTION, UserMenuItem::HelpSupport),
            ];
            for (icon, item) in items {
                if ui.button(format!("{icon} {}", item.label())).clicked() {
                    actions.push(Action::UserMenu(item));
                    ui.close();
                }
            }

            ui.separator();
            let log_out = RichText::new(format!("{SIGN_OUT} {}", UserMenuItem::LogOut.label())).color(colors::ERROR);
            if ui.button(log_out).clicked() {
                actions.push(Action::UserMenu(UserMenuItem::LogOut));
                ui.close();
            }
        });
    }

    /// Render the support footer shown on every view.
    fn show_support_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("support_footer")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(RichText::new("Need Help?").strong());
                    ui.label(
                        RichText::new("If your application status is stuck or you have any questions, contact our support team.")
                            .weak(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let [phone, email] = SUPPORT_CHANNELS;
                        ui.label(format!("{ENVELOPE} {}", email.contact));
                        ui.label(format!("{PHONE} {}", phone.contact));
                    });
                });
            });
    }

    /// Render modal dialogs (startup error, intake confirmation).
    fn show_dialogs(&mut self, ctx: &egui::Context, state: &AppState, actions: &mut Vec<Action>) {
        if let Some(err) = self.initial_error.clone() {
            egui::Window::new("Configuration Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, &err);
                    ui.label("Default settings are in use for this session.");
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.initial_error = None;
                    }
                });
        }

        if state.intake_dialog_open {
            egui::Window::new("Thank You!")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(CHECK_CIRCLE).size(32.0).color(colors::SUCCESS));
                        ui.add_space(5.0);
                        ui.label("Thank you for your inquiry! We will get back to you soon.");
                        ui.add_space(10.0);
                        if ui.button("Close").clicked() {
                            actions.push(Action::CloseIntakeDialog);
                        }
                    });
                });
        }
    }

    /// Render the active view.
    fn show_view(&self, ui: &mut egui::Ui, state: &AppState) -> Vec<Action> {
        match state.view {
            View::Dashboard => dashboard::show(state, ui),
            View::Profile => profile_panel::show(state, &self.config, ui),
            View::Settings => settings_panel::show(state, ui),
            View::HelpSupport => help_panel::show(ui),
            View::Track => track_panel::show(state, ui),
            View::Documents => documents_panel::show(state, ui),
            View::Payment => payment_panel::show(state, ui),
            View::Experience => experience_panel::show(state, ui),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.poll_messages();

        // Outside presses are judged against last frame's overlay bounds
        self.handle_outside_press(ctx);
        self.overlays.begin_frame();

        // Keep polling until the pending clear's message has been received
        if self.intake_clear.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        let state: Arc<AppState> = self.store.snapshot();
        let mut actions = Vec::new();

        self.show_header(ctx, &state, &mut actions);
        self.show_support_footer(ctx);
        self.show_dialogs(ctx, &state, &mut actions);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.add_space(10.0);
                actions.extend(self.show_view(ui, &state));
            });
        });

        for action in actions {
            self.dispatch(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Industry, IntakeField, IntakeFormData};
    use eframe::egui::{Rect, pos2, vec2};

    fn paused_runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .start_paused(true)
            .build()
            .expect("runtime")
    }

    fn new_app() -> App {
        App::new(AppConfig::default(), paused_runtime(), None)
    }

    /// Let scheduled tasks run for `ms` of virtual time.
    fn advance(app: &App, ms: u64) {
        app.rt.block_on(async {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        });
    }

    fn fill_intake(app: &mut App) {
        app.dispatch(Action::EditIntake(IntakeField::Name, "Alex Lee".to_string()));
        app.dispatch(Action::EditIntake(IntakeField::Email, "alex@example.com".to_string()));
        app.dispatch(Action::EditIntake(IntakeField::Phone, "0400 000 000".to_string()));
        app.dispatch(Action::SelectIndustry(Industry::Technology));
        app.dispatch(Action::EditIntake(IntakeField::Experience, "Ten years of support work".to_string()));
    }

    fn intake_is_empty(app: &App) -> bool {
        app.store.state().intake == IntakeFormData::default()
    }

    #[test]
    fn test_submit_clears_after_delay() {
        let mut app = new_app();
        fill_intake(&mut app);
        app.dispatch(Action::SubmitIntake);
        assert!(app.store.state().intake_dialog_open);
        assert!(app.intake_clear.is_some());

        advance(&app, 1000);
        app.poll_messages();
        assert!(!intake_is_empty(&app));
        assert!(app.intake_clear.is_some());

        // Sent but not yet drained: the handle keeps repaints coming.
        advance(&app, 1001);
        assert!(app.intake_clear.is_some());

        app.poll_messages();
        assert!(intake_is_empty(&app));
        assert!(app.intake_clear.is_none());
    }

    #[test]
    fn test_resubmit_supersedes_pending_clear() {
        let mut app = new_app();
        fill_intake(&mut app);
        app.dispatch(Action::SubmitIntake);

        advance(&app, 1500);
        app.dispatch(Action::SubmitIntake);

        // The first clear would have fired here.
        advance(&app, 600);
        app.poll_messages();
        assert!(!intake_is_empty(&app));

        advance(&app, 1500);
        app.poll_messages();
        assert!(intake_is_empty(&app));
    }

    #[test]
    fn test_stale_clear_keeps_newer_pending_clear() {
        let mut app = new_app();
        fill_intake(&mut app);
        app.dispatch(Action::SubmitIntake);

        // First clear is delivered but not yet drained when the user submits again.
        advance(&app, 2001);
        app.dispatch(Action::SubmitIntake);
        assert_eq!(app.store.state().intake_submission, 2);

        app.poll_messages();
        assert!(!intake_is_empty(&app));
        assert!(app.intake_clear.is_some());

        advance(&app, 2001);
        app.poll_messages();
        assert!(intake_is_empty(&app));
        assert!(app.intake_clear.is_none());
    }

    #[test]
    fn test_closing_dialog_keeps_pending_clear() {
        let mut app = new_app();
        fill_intake(&mut app);
        app.dispatch(Action::SubmitIntake);
        app.dispatch(Action::CloseIntakeDialog);
        assert!(!app.store.state().intake_dialog_open);

        advance(&app, 2001);
        app.poll_messages();
        assert!(intake_is_empty(&app));
    }

    fn bell_rect() -> Rect {
        Rect::from_min_size(pos2(1100.0, 10.0), vec2(32.0, 32.0))
    }

    fn panel_rect() -> Rect {
        Rect::from_min_size(pos2(752.0, 50.0), vec2(380.0, 320.0))
    }

    /// What a frame with the panel open leaves behind for the next frame.
    fn render_open_panel(app: &mut App) {
        app.overlays.begin_frame();
        app.overlays.register(OverlayId::Notifications, bell_rect());
        app.overlays.register(OverlayId::Notifications, panel_rect());
    }

    #[test]
    fn test_outside_press_closes_notifications() {
        let mut app = new_app();
        app.dispatch(Action::ToggleNotifications);
        render_open_panel(&mut app);

        app.route_press(pos2(400.0, 300.0));
        assert!(!app.store.state().notifications_open);
    }

    #[test]
    fn test_inside_press_keeps_notifications_open() {
        let mut app = new_app();
        app.dispatch(Action::ToggleNotifications);
        render_open_panel(&mut app);

        app.route_press(panel_rect().center());
        assert!(app.store.state().notifications_open);
    }

    #[test]
    fn test_bell_press_toggles_once() {
        let mut app = new_app();
        app.dispatch(Action::ToggleNotifications);
        render_open_panel(&mut app);

        // Press is routed against last frame's bounds, then the bell's click toggles.
        app.route_press(bell_rect().center());
        assert!(app.store.state().notifications_open);
        app.dispatch(Action::ToggleNotifications);
        assert!(!app.store.state().notifications_open);
    }

    #[test]
    fn test_press_after_begin_frame_sees_no_overlays() {
        let mut app = new_app();
        app.dispatch(Action::ToggleNotifications);
        render_open_panel(&mut app);

        // Bounds are gone once the next frame starts, which is why presses are routed first.
        app.overlays.begin_frame();
        app.route_press(pos2(400.0, 300.0));
        assert!(app.store.state().notifications_open);
    }
}
