//! Display preferences from the settings tab.

use serde::{Deserialize, Serialize};

/// Accessible text size applied to every tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Xs,
    #[default]
    Sm,
    Base,
    Lg,
    Xl,
}

impl FontSize {
    pub fn label(&self) -> &'static str {
        match self {
            FontSize::Xs => "Small",
            FontSize::Sm => "Medium",
            FontSize::Base => "Large",
            FontSize::Lg => "Extra Large",
            FontSize::Xl => "Maximum",
        }
    }

    /// Stylesheet class carrying the size.
    pub fn css_class(&self) -> &'static str {
        match self {
            FontSize::Xs => "text-xs-accessible",
            FontSize::Sm => "text-sm-accessible",
            FontSize::Base => "text-base-accessible",
            FontSize::Lg => "text-lg-accessible",
            FontSize::Xl => "text-xl-accessible",
        }
    }

    pub fn variants() -> &'static [FontSize] {
        &[
            FontSize::Xs,
            FontSize::Sm,
            FontSize::Base,
            FontSize::Lg,
            FontSize::Xl,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medium_is_the_default() {
        assert_eq!(FontSize::default(), FontSize::Sm);
        assert_eq!(FontSize::default().css_class(), "text-sm-accessible");
    }

    #[test]
    fn serializes_as_short_key() {
        assert_eq!(serde_json::to_string(&FontSize::Xl).unwrap(), "\"xl\"");
    }
}
