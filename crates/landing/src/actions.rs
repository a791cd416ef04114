//! Call-to-action handlers. Actions only log for now.

use leptos::logging;

#[derive(Debug, Clone, PartialEq, Eq)]
/// User-triggered landing page action.
pub enum LandingAction {
    /// Hero primary call to action.
    StartTrial,
    /// Hero secondary call to action.
    WatchDemo,
    /// Pricing tier button.
    SelectPlan {
        /// Plan identifier.
        id: String,
        /// Plan display name.
        name: String,
    },
    /// Header login button.
    Login,
    /// Pricing footnote sales contact.
    ContactSales,
}

impl LandingAction {
    /// Log line recorded when the action fires.
    pub fn message(&self) -> String {
        match self {
            Self::StartTrial => "Start Free Trial clicked".to_string(),
            Self::WatchDemo => "Watch Demo clicked".to_string(),
            Self::SelectPlan { id, name } => format!("Selected plan: {id} ({name})"),
            Self::Login => "Login clicked".to_string(),
            Self::ContactSales => "Contact sales clicked".to_string(),
        }
    }
}

/// Runs an action.
pub fn dispatch(action: &LandingAction) {
    logging::log!("{}", action.message());
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn messages_match_stub_log_lines() {
        assert_eq!(LandingAction::StartTrial.message(), "Start Free Trial clicked");
        assert_eq!(LandingAction::WatchDemo.message(), "Watch Demo clicked");
        assert_eq!(LandingAction::Login.message(), "Login clicked");
        assert_eq!(
            LandingAction::SelectPlan {
                id: "professional".to_string(),
                name: "Professional".to_string(),
            }
            .message(),
            "Selected plan: professional (Professional)"
        );
    }
}
