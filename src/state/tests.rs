//! Unit tests for the dashboard reducer and store.

use chrono::Local;

use super::overlay::OverlayId;
use super::store::{Action, AppState, Effect, Store};
use super::view::{QuickAction, UserMenuItem, View};
use crate::config::AppConfig;
use crate::models::{
    ApplicationStage, Industry, IntakeField, IntakeFormData, Language, NotificationChannel, PaymentPlan,
    REQUIRED_DOCUMENTS, StageStatus,
};

fn new_store() -> Store {
    Store::new(AppState::new(&AppConfig::default(), Local::now()))
}

fn fill_intake(store: &mut Store) {
    store.dispatch(Action::EditIntake(IntakeField::Name, "Alex Lee".to_string()));
    store.dispatch(Action::EditIntake(IntakeField::Email, "alex@example.com".to_string()));
    store.dispatch(Action::EditIntake(IntakeField::Phone, "0400 000 000".to_string()));
    store.dispatch(Action::SelectIndustry(Industry::Hospitality));
    store.dispatch(Action::EditIntake(
        IntakeField::Experience,
        "Six years running a front desk".to_string(),
    ));
}

#[test]
fn test_initial_state() {
    let store = new_store();
    let state = store.state();
    assert_eq!(state.view, View::Dashboard);
    assert_eq!(state.completion_percent(), 20);
    assert!(state.searched_application.is_none());
    assert!(!state.notifications_open);
    assert_eq!(state.unread_count(), 4);
    assert_eq!(state.payment_plan, PaymentPlan::Card);
    assert_eq!(store.revision(), 0);
}

#[test]
fn test_any_view_reachable_from_any_other() {
    let mut store = new_store();
    for from in View::ALL {
        for to in View::ALL {
            store.dispatch(Action::Navigate(from));
            store.dispatch(Action::Navigate(to));
            assert_eq!(store.state().view, to);
        }
    }
}

#[test]
fn test_back_navigation() {
    let mut store = new_store();

    store.dispatch(Action::Navigate(View::Payment));
    store.dispatch(Action::Back);
    assert_eq!(store.state().view, View::Documents);

    store.dispatch(Action::Back);
    assert_eq!(store.state().view, View::Dashboard);

    store.dispatch(Action::Back);
    assert_eq!(store.state().view, View::Dashboard);
}

#[test]
fn test_quick_actions_and_user_menu() {
    let mut store = new_store();

    store.dispatch(Action::QuickAction(QuickAction::CheckEligibility));
    assert_eq!(store.state().view, View::Experience);

    store.dispatch(Action::UserMenu(UserMenuItem::Settings));
    assert_eq!(store.state().view, View::Settings);
}

#[test]
fn test_log_out_only_emits_effect() {
    let mut store = new_store();
    let before = store.snapshot();

    let effects = store.dispatch(Action::UserMenu(UserMenuItem::LogOut));

    assert_eq!(effects, vec![Effect::LogOut]);
    assert_eq!(*store.state(), *before);
    assert_eq!(store.revision(), 0);
}

#[test]
fn test_proceed_to_payment_gated_by_documents() {
    let mut store = new_store();
    store.dispatch(Action::Navigate(View::Documents));

    for name in REQUIRED_DOCUMENTS {
        store.dispatch(Action::ProceedToPayment);
        assert_eq!(store.state().view, View::Documents, "locked before {name}");
        store.dispatch(Action::UploadDocument(name.to_string()));
    }

    assert!(store.state().can_proceed_to_payment());
    store.dispatch(Action::ProceedToPayment);
    assert_eq!(store.state().view, View::Payment);
}

#[test]
fn test_unknown_document_is_silent() {
    let mut store = new_store();
    let effects = store.dispatch(Action::UploadDocument("Passport".to_string()));
    assert!(effects.is_empty());
    assert_eq!(store.state().completion_percent(), 20);
    assert_eq!(store.revision(), 0);
}

#[test]
fn test_search_blank_id_is_noop() {
    let mut store = new_store();

    store.dispatch(Action::SearchApplication);
    assert!(store.state().searched_application.is_none());

    store.dispatch(Action::EditApplicationId("   ".to_string()));
    assert!(!store.state().can_search());
    store.dispatch(Action::SearchApplication);
    assert!(store.state().searched_application.is_none());
}

#[test]
fn test_search_produces_mock_record() {
    let mut store = new_store();
    store.dispatch(Action::EditApplicationId("CB-2024-001234".to_string()));
    assert!(store.state().can_search());
    store.dispatch(Action::SearchApplication);

    let record = store.state().searched_application.clone().unwrap();
    assert_eq!(record.id, "CB-2024-001234");
    assert_eq!(record.current_stage(), ApplicationStage::InReview);
    assert_eq!(
        record.timeline().map(|(_, s)| s),
        [
            StageStatus::Completed,
            StageStatus::Current,
            StageStatus::Pending,
            StageStatus::Pending
        ]
    );
}

#[test]
fn test_blank_search_keeps_previous_record() {
    let mut store = new_store();
    store.dispatch(Action::EditApplicationId("A-1".to_string()));
    store.dispatch(Action::SearchApplication);
    store.dispatch(Action::EditApplicationId(String::new()));
    store.dispatch(Action::SearchApplication);

    assert_eq!(store.state().searched_application.as_ref().map(|r| r.id.as_str()), Some("A-1"));
}

#[test]
fn test_select_payment_plan() {
    let mut store = new_store();
    store.dispatch(Action::SelectPaymentPlan(PaymentPlan::Afterpay));
    assert_eq!(store.state().payment_plan, PaymentPlan::Afterpay);

    let effects = store.dispatch(Action::ContinuePayment);
    assert_eq!(effects, vec![Effect::PaymentRequested(PaymentPlan::Afterpay)]);
}

#[test]
fn test_incomplete_intake_submit_is_noop() {
    let mut store = new_store();
    store.dispatch(Action::EditIntake(IntakeField::Name, "Alex".to_string()));

    let effects = store.dispatch(Action::SubmitIntake);

    assert!(effects.is_empty());
    assert!(!store.state().intake_dialog_open);
    assert_eq!(store.state().intake_submission, 0);
}

#[test]
fn test_intake_submit_and_clear() {
    let mut store = new_store();
    fill_intake(&mut store);

    let effects = store.dispatch(Action::SubmitIntake);
    assert_eq!(effects, vec![Effect::ScheduleIntakeClear { submission: 1 }]);
    assert!(store.state().intake_dialog_open);
    assert!(store.state().can_submit_intake());

    store.dispatch(Action::CloseIntakeDialog);
    assert!(!store.state().intake_dialog_open);
    assert_ne!(store.state().intake, IntakeFormData::default());

    store.dispatch(Action::ClearIntake { submission: 1 });
    assert_eq!(store.state().intake, IntakeFormData::default());
}

#[test]
fn test_each_submit_schedules_one_clear() {
    let mut store = new_store();
    fill_intake(&mut store);

    let first = store.dispatch(Action::SubmitIntake);
    let second = store.dispatch(Action::SubmitIntake);

    assert_eq!(first, vec![Effect::ScheduleIntakeClear { submission: 1 }]);
    assert_eq!(second, vec![Effect::ScheduleIntakeClear { submission: 2 }]);
}

#[test]
fn test_stale_clear_is_ignored() {
    let mut store = new_store();
    fill_intake(&mut store);
    store.dispatch(Action::SubmitIntake);
    store.dispatch(Action::SubmitIntake);

    store.dispatch(Action::ClearIntake { submission: 1 });
    assert_ne!(store.state().intake, IntakeFormData::default());

    store.dispatch(Action::ClearIntake { submission: 2 });
    assert_eq!(store.state().intake, IntakeFormData::default());
}

#[test]
fn test_toggle_notifications_twice() {
    let mut store = new_store();
    store.dispatch(Action::ToggleNotifications);
    assert!(store.state().notifications_open);
    store.dispatch(Action::ToggleNotifications);
    assert!(!store.state().notifications_open);
}

#[test]
fn test_close_overlay() {
    let mut store = new_store();
    store.dispatch(Action::ToggleNotifications);
    store.dispatch(Action::CloseOverlay(OverlayId::Notifications));
    assert!(!store.state().notifications_open);

    // Closing a closed panel changes nothing.
    let revision = store.revision();
    store.dispatch(Action::CloseOverlay(OverlayId::Notifications));
    assert_eq!(store.revision(), revision);
}

#[test]
fn test_mark_read_is_display_only() {
    let mut store = new_store();
    store.dispatch(Action::MarkNotificationRead(1));
    assert_eq!(store.state().unread_count(), 4);
    assert_eq!(store.revision(), 0);
}

#[test]
fn test_settings_edits() {
    let mut store = new_store();
    store.dispatch(Action::SetNotificationChannel(NotificationChannel::Marketing, true));
    store.dispatch(Action::SetLanguage(Language::French));

    let prefs = store.state().preferences;
    assert!(prefs.notifications.marketing);
    assert_eq!(prefs.language, Language::French);
}

#[test]
fn test_snapshots_are_immutable() {
    let mut store = new_store();
    let before = store.snapshot();

    store.dispatch(Action::Navigate(View::Track));
    store.dispatch(Action::UploadDocument("ID".to_string()));

    assert_eq!(before.view, View::Dashboard);
    assert_eq!(before.completion_percent(), 20);
    assert_eq!(store.state().view, View::Track);
    assert_eq!(store.state().completion_percent(), 40);
    assert_eq!(store.revision(), 2);
}
