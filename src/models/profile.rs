//! Applicant profile and account preferences.

use crate::config::ApplicantConfig;

/// Editable profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
}

/// In-memory profile draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl ProfileDraft {
    /// Seed the draft from the configured applicant.
    pub fn from_config(applicant: &ApplicantConfig) -> Self {
        Self {
            first_name: applicant.first_name.clone(),
            last_name: applicant.last_name.clone(),
            email: applicant.email.clone(),
            phone: applicant.phone.clone(),
            address: String::new(),
        }
    }

    /// Name shown in the header menu.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::FirstName => self.first_name = value,
            ProfileField::LastName => self.last_name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Phone => self.phone = value,
            ProfileField::Address => self.address = value,
        }
    }
}

/// Notification channel toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationChannel {
    Email,
    Sms,
    ApplicationUpdates,
    Marketing,
}

impl NotificationChannel {
    pub const ALL: [NotificationChannel; 4] = [
        NotificationChannel::Email,
        NotificationChannel::Sms,
        NotificationChannel::ApplicationUpdates,
        NotificationChannel::Marketing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NotificationChannel::Email => "Email Notifications",
            NotificationChannel::Sms => "SMS Notifications",
            NotificationChannel::ApplicationUpdates => "Application Updates",
            NotificationChannel::Marketing => "Marketing Communications",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            NotificationChannel::Email => "Receive updates via email",
            NotificationChannel::Sms => "Receive updates via SMS",
            NotificationChannel::ApplicationUpdates => "Get notified about application status changes",
            NotificationChannel::Marketing => "Receive promotional emails and offers",
        }
    }
}

/// Which notification channels are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPreferences {
    pub email: bool,
    pub sms: bool,
    pub application_updates: bool,
    pub marketing: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            sms: false,
            application_updates: true,
            marketing: false,
        }
    }
}

impl NotificationPreferences {
    pub fn get(&self, channel: NotificationChannel) -> bool {
        match channel {
            NotificationChannel::Email => self.email,
            NotificationChannel::Sms => self.sms,
            NotificationChannel::ApplicationUpdates => self.application_updates,
            NotificationChannel::Marketing => self.marketing,
        }
    }

    pub fn set(&mut self, channel: NotificationChannel, enabled: bool) {
        match channel {
            NotificationChannel::Email => self.email = enabled,
            NotificationChannel::Sms => self.sms = enabled,
            NotificationChannel::ApplicationUpdates => self.application_updates = enabled,
            NotificationChannel::Marketing => self.marketing = enabled,
        }
    }
}

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Spanish, Language::French];

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
        }
    }
}

/// Display timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timezone {
    #[default]
    Utc,
    Eastern,
    Pacific,
}

impl Timezone {
    pub const ALL: [Timezone; 3] = [Timezone::Utc, Timezone::Eastern, Timezone::Pacific];

    pub fn name(self) -> &'static str {
        match self {
            Timezone::Utc => "UTC",
            Timezone::Eastern => "Eastern Time",
            Timezone::Pacific => "Pacific Time",
        }
    }
}

/// Account settings edited on the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub notifications: NotificationPreferences,
    pub language: Language,
    pub timezone: Timezone,
    pub two_factor_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_from_config() {
        let draft = ProfileDraft::from_config(&ApplicantConfig::default());
        assert_eq!(draft.first_name, "Sarah");
        assert_eq!(draft.email, "sarah.johnson@email.com");
        assert!(draft.address.is_empty());
    }

    #[test]
    fn test_full_name_follows_edits() {
        let mut draft = ProfileDraft::from_config(&ApplicantConfig::default());
        assert_eq!(draft.full_name(), "Sarah Johnson");

        draft.set(ProfileField::LastName, "Mills".to_string());
        assert_eq!(draft.full_name(), "Sarah Mills");

        draft.set(ProfileField::LastName, String::new());
        assert_eq!(draft.full_name(), "Sarah");
    }

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        let enabled: Vec<bool> = NotificationChannel::ALL
            .iter()
            .map(|c| prefs.notifications.get(*c))
            .collect();
        assert_eq!(enabled, vec![true, false, true, false]);
        assert_eq!(prefs.language, Language::English);
        assert_eq!(prefs.timezone, Timezone::Utc);
        assert!(!prefs.two_factor_enabled);
    }

    #[test]
    fn test_toggle_channel() {
        let mut prefs = NotificationPreferences::default();
        prefs.set(NotificationChannel::Sms, true);
        assert!(prefs.get(NotificationChannel::Sms));
    }
}
