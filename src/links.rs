//! Static platform links
//!
//! Closed mapping from a link category to a literal URL. The
//! `project-management` entry carries a `{projectId}` placeholder the caller
//! interpolates with a concrete project identifier.

/// One of the platform's fixed link categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkType {
    Dashboard,
    Account,
    Billing,
    FeatureRequests,
    Projects,
    ProjectManagement,
    Website,
    Contact,
    Support,
    HelpCenter,
}

impl LinkType {
    /// Category names as accepted by the `links` tool.
    pub const ALL: [&'static str; 10] = [
        "dashboard",
        "account",
        "billing",
        "feature-requests",
        "projects",
        "project-management",
        "website",
        "contact",
        "support",
        "help-center",
    ];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "dashboard" => Some(Self::Dashboard),
            "account" => Some(Self::Account),
            "billing" => Some(Self::Billing),
            "feature-requests" => Some(Self::FeatureRequests),
            "projects" => Some(Self::Projects),
            "project-management" => Some(Self::ProjectManagement),
            "website" => Some(Self::Website),
            "contact" => Some(Self::Contact),
            "support" => Some(Self::Support),
            "help-center" => Some(Self::HelpCenter),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Account => "account",
            Self::Billing => "billing",
            Self::FeatureRequests => "feature-requests",
            Self::Projects => "projects",
            Self::ProjectManagement => "project-management",
            Self::Website => "website",
            Self::Contact => "contact",
            Self::Support => "support",
            Self::HelpCenter => "help-center",
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            Self::Dashboard => "https://app.widgetplatform.com/dashboard",
            Self::Account => "https://app.widgetplatform.com/account",
            Self::Billing => "https://app.widgetplatform.com/account/billing",
            Self::FeatureRequests => "https://feedback.widgetplatform.com/feature-requests",
            Self::Projects => "https://app.widgetplatform.com/projects",
            Self::ProjectManagement => "https://app.widgetplatform.com/projects/{projectId}",
            Self::Website => "https://www.widgetplatform.com",
            Self::Contact => "https://www.widgetplatform.com/contact",
            Self::Support => "https://www.widgetplatform.com/support",
            Self::HelpCenter => "https://help.widgetplatform.com",
        }
    }
}
