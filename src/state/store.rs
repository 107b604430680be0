//! Application state, actions, and the reducer that connects them.

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::config::AppConfig;
use crate::models::{
    DocumentChecklist, Industry, IntakeField, IntakeFormData, Language, Notification, NotificationChannel,
    PaymentPlan, Preferences, ProfileDraft, ProfileField, Timezone, TrackedApplication, application, notification,
};

use super::overlay::OverlayId;
use super::view::{QuickAction, UserMenuItem, View};

/// Snapshot of everything the dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    // Navigation
    pub view: View,

    // Documents
    pub documents: DocumentChecklist,

    // Tracking
    pub application_id_input: String,
    pub searched_application: Option<TrackedApplication>,

    // Payment
    pub payment_plan: PaymentPlan,

    // Intake form
    pub intake: IntakeFormData,
    /// Sequence number of the most recent submit.
    pub intake_submission: u64,
    pub intake_dialog_open: bool,

    // Notifications
    pub notifications: Vec<Notification>,
    pub notifications_open: bool,

    // Account
    pub profile: ProfileDraft,
    pub preferences: Preferences,
}

/// Something the user (or a scheduled task) did.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    Navigate(View),
    Back,
    QuickAction(QuickAction),
    UserMenu(UserMenuItem),

    // Documents
    UploadDocument(String),
    ProceedToPayment,

    // Tracking
    EditApplicationId(String),
    SearchApplication,

    // Payment
    SelectPaymentPlan(PaymentPlan),
    ContinuePayment,

    // Intake form
    EditIntake(IntakeField, String),
    SelectIndustry(Industry),
    SubmitIntake,
    CloseIntakeDialog,
    ClearIntake { submission: u64 },

    // Notifications
    ToggleNotifications,
    CloseOverlay(OverlayId),
    MarkNotificationRead(u32),

    // Account
    EditProfile(ProfileField, String),
    SetNotificationChannel(NotificationChannel, bool),
    SetLanguage(Language),
    SetTimezone(Timezone),
}

/// Side effect requested by the reducer, carried out by the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Clear the intake form once the configured delay has passed.
    ScheduleIntakeClear { submission: u64 },
    /// User asked to continue with the selected plan; nothing is charged.
    PaymentRequested(PaymentPlan),
    /// User asked to log out.
    LogOut,
}

impl AppState {
    /// Initial state for a new session.
    pub fn new(config: &AppConfig, now: DateTime<Local>) -> Self {
        Self {
            view: View::default(),
            documents: DocumentChecklist::default(),
            application_id_input: String::new(),
            searched_application: None,
            payment_plan: PaymentPlan::default(),
            intake: IntakeFormData::default(),
            intake_submission: 0,
            intake_dialog_open: false,
            notifications: notification::seed(now),
            notifications_open: false,
            profile: ProfileDraft::from_config(&config.applicant),
            preferences: Preferences::default(),
        }
    }

    pub fn completion_percent(&self) -> u8 {
        self.documents.completion_percent()
    }

    pub fn can_proceed_to_payment(&self) -> bool {
        self.documents.can_proceed_to_payment()
    }

    /// Search is enabled once the id is non-blank.
    pub fn can_search(&self) -> bool {
        !self.application_id_input.trim().is_empty()
    }

    pub fn can_submit_intake(&self) -> bool {
        self.intake.is_complete()
    }

    pub fn unread_count(&self) -> usize {
        notification::unread_count(&self.notifications)
    }
}

/// Apply `action` to `state`, returning the effects it requests.
pub fn reduce(state: &mut AppState, action: Action) -> Vec<Effect> {
    match action {
        Action::Navigate(view) => {
            state.view = view;
            Vec::new()
        }
        Action::Back => {
            state.view = state.view.back_target();
            Vec::new()
        }
        Action::QuickAction(quick) => {
            state.view = quick.target();
            Vec::new()
        }
        Action::UserMenu(item) => match item.target() {
            Some(view) => {
                state.view = view;
                Vec::new()
            }
            None => vec![Effect::LogOut],
        },
        Action::UploadDocument(name) => {
            if state.documents.mark_uploaded(&name) {
                tracing::info!("Document uploaded: {}", name);
            } else {
                tracing::debug!("Ignoring upload for '{}'", name);
            }
            Vec::new()
        }
        Action::ProceedToPayment => {
            if state.can_proceed_to_payment() {
                state.view = View::Payment;
            } else {
                tracing::debug!(
                    "Payment locked at {}% document completion",
                    state.completion_percent()
                );
            }
            Vec::new()
        }
        Action::EditApplicationId(id) => {
            state.application_id_input = id;
            Vec::new()
        }
        Action::SearchApplication => {
            if let Some(record) = application::lookup(&state.application_id_input) {
                state.searched_application = Some(record);
            }
            Vec::new()
        }
        Action::SelectPaymentPlan(plan) => {
            state.payment_plan = plan;
            Vec::new()
        }
        Action::ContinuePayment => vec![Effect::PaymentRequested(state.payment_plan)],
        Action::EditIntake(field, value) => {
            state.intake.set(field, value);
            Vec::new()
        }
        Action::SelectIndustry(industry) => {
            state.intake.industry = Some(industry);
            Vec::new()
        }
        Action::SubmitIntake => {
            if !state.can_submit_intake() {
                tracing::debug!("Ignoring submit of incomplete intake form");
                return Vec::new();
            }
            state.intake_submission += 1;
            state.intake_dialog_open = true;
            vec![Effect::ScheduleIntakeClear {
                submission: state.intake_submission,
            }]
        }
        Action::CloseIntakeDialog => {
            state.intake_dialog_open = false;
            Vec::new()
        }
        Action::ClearIntake { submission } => {
            if submission == state.intake_submission {
                state.intake.reset();
            } else {
                tracing::debug!(
                    "Ignoring stale intake clear {} (latest {})",
                    submission,
                    state.intake_submission
                );
            }
            Vec::new()
        }
        Action::ToggleNotifications => {
            state.notifications_open = !state.notifications_open;
            Vec::new()
        }
        Action::CloseOverlay(OverlayId::Notifications) => {
            state.notifications_open = false;
            Vec::new()
        }
        Action::MarkNotificationRead(id) => {
            // Read state is display-only.
            tracing::debug!("Mark-read requested for notification {}", id);
            Vec::new()
        }
        Action::EditProfile(field, value) => {
            state.profile.set(field, value);
            Vec::new()
        }
        Action::SetNotificationChannel(channel, enabled) => {
            state.preferences.notifications.set(channel, enabled);
            Vec::new()
        }
        Action::SetLanguage(language) => {
            state.preferences.language = language;
            Vec::new()
        }
        Action::SetTimezone(timezone) => {
            state.preferences.timezone = timezone;
            Vec::new()
        }
    }
}

/// Holds the current snapshot and applies actions to it.
///
/// Each dispatch that changes anything publishes a fresh `Arc<AppState>`;
/// snapshots handed out earlier are never modified.
#[derive(Debug)]
pub struct Store {
    state: Arc<AppState>,
    revision: u64,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
            revision: 0,
        }
    }

    /// Borrow the current snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Share the current snapshot.
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Number of state changes so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Reduce `action` into a new snapshot and return the requested effects.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let mut next = AppState::clone(&self.state);
        let effects = reduce(&mut next, action);

        if next != *self.state {
            self.state = Arc::new(next);
            self.revision += 1;
        }

        effects
    }
}
