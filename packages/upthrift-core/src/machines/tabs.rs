use serde::{Deserialize, Serialize};

/// Bottom navigation tabs, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Feed,
    Chat,
    Contribute,
    Profile,
    Support,
    Settings,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Feed => "Feed",
            Tab::Chat => "Chat",
            Tab::Contribute => "Contribute",
            Tab::Profile => "Profile",
            Tab::Support => "Support",
            Tab::Settings => "Settings",
        }
    }

    pub fn variants() -> &'static [Tab] {
        &[
            Tab::Feed,
            Tab::Chat,
            Tab::Contribute,
            Tab::Profile,
            Tab::Support,
            Tab::Settings,
        ]
    }
}
