//! View identifiers and navigation targets.

use std::fmt;
use std::str::FromStr;

/// Panel currently rendered in the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum View {
    #[default]
    Dashboard,
    Profile,
    Settings,
    HelpSupport,
    Track,
    Documents,
    Payment,
    Experience,
}

impl View {
    pub const ALL: [View; 8] = [
        View::Dashboard,
        View::Profile,
        View::Settings,
        View::HelpSupport,
        View::Track,
        View::Documents,
        View::Payment,
        View::Experience,
    ];

    /// Stable identifier, e.g. `help-support`.
    pub fn id(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Profile => "profile",
            View::Settings => "settings",
            View::HelpSupport => "help-support",
            View::Track => "track",
            View::Documents => "documents",
            View::Payment => "payment",
            View::Experience => "experience",
        }
    }

    /// Get the display name for the view.
    pub fn name(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Profile => "Profile",
            View::Settings => "Settings",
            View::HelpSupport => "Help & Support",
            View::Track => "Track Application",
            View::Documents => "Upload Documents",
            View::Payment => "Payment",
            View::Experience => "Industry Experience",
        }
    }

    /// Where the back button leads.
    ///
    /// Payment steps back to the document upload it follows; everything else returns to the dashboard.
    pub fn back_target(self) -> View {
        match self {
            View::Payment => View::Documents,
            _ => View::Dashboard,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Unknown view identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown view: {0}")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.id() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// Dashboard quick-action tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    CheckEligibility,
    UploadDocuments,
    PayNow,
    TrackApplication,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::CheckEligibility,
        QuickAction::UploadDocuments,
        QuickAction::PayNow,
        QuickAction::TrackApplication,
    ];

    pub fn title(self) -> &'static str {
        match self {
            QuickAction::CheckEligibility => "Check Eligibility",
            QuickAction::UploadDocuments => "Upload Documents",
            QuickAction::PayNow => "Pay Now",
            QuickAction::TrackApplication => "Track Application",
        }
    }

    pub fn target(self) -> View {
        match self {
            QuickAction::CheckEligibility => View::Experience,
            QuickAction::UploadDocuments => View::Documents,
            QuickAction::PayNow => View::Payment,
            QuickAction::TrackApplication => View::Track,
        }
    }
}

/// Entry in the user menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuItem {
    Profile,
    Settings,
    HelpSupport,
    LogOut,
}

impl UserMenuItem {
    pub fn label(self) -> &'static str {
        match self {
            UserMenuItem::Profile => "Profile",
            UserMenuItem::Settings => "Settings",
            UserMenuItem::HelpSupport => "Help & Support",
            UserMenuItem::LogOut => "Log out",
        }
    }

    /// View opened by the item; log out opens nothing.
    pub fn target(self) -> Option<View> {
        match self {
            UserMenuItem::Profile => Some(View::Profile),
            UserMenuItem::Settings => Some(View::Settings),
            UserMenuItem::HelpSupport => Some(View::HelpSupport),
            UserMenuItem::LogOut => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for view in View::ALL {
            assert_eq!(view.id().parse::<View>(), Ok(view));
            assert_eq!(view.to_string(), view.id());
        }
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!("reports".parse::<View>(), Err(UnknownView("reports".to_string())));
        assert!("Dashboard".parse::<View>().is_err());
    }

    #[test]
    fn test_back_targets() {
        for view in View::ALL {
            let expected = if view == View::Payment { View::Documents } else { View::Dashboard };
            assert_eq!(view.back_target(), expected, "{view}");
        }
    }

    #[test]
    fn test_quick_action_targets() {
        let targets: Vec<View> = QuickAction::ALL.iter().map(|a| a.target()).collect();
        assert_eq!(targets, vec![View::Experience, View::Documents, View::Payment, View::Track]);
    }

    #[test]
    fn test_log_out_has_no_target() {
        assert_eq!(UserMenuItem::LogOut.target(), None);
        assert_eq!(UserMenuItem::HelpSupport.target(), Some(View::HelpSupport));
    }
}
