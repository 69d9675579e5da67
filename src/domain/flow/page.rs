//! Page - the four navigable views.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level view selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Page {
    #[default]
    Home,
    Calculation,
    About,
    Contact,
}

impl Page {
    /// Pages in navigation-bar order.
    pub fn all() -> [Page; 4] {
        [Page::Home, Page::Calculation, Page::About, Page::Contact]
    }

    /// Label shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "ASCENSION",
            Page::Calculation => "THE LEDGER",
            Page::About => "THE LORE",
            Page::Contact => "SUMMON",
        }
    }

    /// True for the page hosting the form and the dashboard.
    pub fn is_ledger(&self) -> bool {
        matches!(self, Page::Calculation)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Page::Home => "Home",
            Page::Calculation => "Calculation",
            Page::About => "About",
            Page::Contact => "Contact",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn labels_match_navigation_bar() {
        let labels: Vec<_> = Page::all().iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["ASCENSION", "THE LEDGER", "THE LORE", "SUMMON"]);
    }

    #[test]
    fn only_calculation_is_the_ledger() {
        assert!(Page::Calculation.is_ledger());
        assert!(!Page::Home.is_ledger());
        assert!(!Page::About.is_ledger());
        assert!(!Page::Contact.is_ledger());
    }

    #[test]
    fn deserializes_from_page_name() {
        let page: Page = serde_json::from_str("\"Contact\"").unwrap();
        assert_eq!(page, Page::Contact);
        assert!(serde_json::from_str::<Page>("\"Settings\"").is_err());
    }
}
