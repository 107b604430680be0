//! Data models for documents, applications, notifications, and forms.

pub mod application;
pub mod document;
pub mod intake;
pub mod notification;
pub mod payment;
pub mod profile;
pub mod stage;
pub mod support;

pub use application::{TrackedApplication, lookup};
pub use document::{DocumentChecklist, DocumentRequirement, REQUIRED_DOCUMENTS};
pub use intake::{Industry, IntakeField, IntakeFormData, QUALIFICATIONS, Qualification};
pub use notification::{Notification, Severity, unread_count};
pub use payment::{PaymentPlan, PaymentRecord};
pub use profile::{Language, NotificationChannel, Preferences, ProfileDraft, ProfileField, Timezone};
pub use stage::{ApplicationStage, StageStatus};
