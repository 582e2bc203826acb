//! In-page anchor targets for the navigation menu

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Section of the page that a navigation link can scroll to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Models,
    Technology,
    About,
    Testimonials,
    Contact,
}

impl Anchor {
    /// All anchors in navigation order
    pub const ALL: [Anchor; 5] = [
        Anchor::Models,
        Anchor::Technology,
        Anchor::About,
        Anchor::Testimonials,
        Anchor::Contact,
    ];

    /// DOM element id of the section
    pub fn id(&self) -> &'static str {
        match self {
            Anchor::Models => "models",
            Anchor::Technology => "technology",
            Anchor::About => "about",
            Anchor::Testimonials => "testimonials",
            Anchor::Contact => "contact",
        }
    }

    /// Fragment link, e.g. "#contact"
    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }

    /// Label shown in the navigation bar
    pub fn label(&self) -> String {
        self.id().to_uppercase()
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Anchor {
    type Err = CoreError;

    /// Accepts "contact", "#contact" or "CONTACT"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches('#').to_ascii_lowercase();
        Anchor::ALL
            .into_iter()
            .find(|a| a.id() == name)
            .ok_or_else(|| CoreError::UnknownAnchor {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!("contact".parse::<Anchor>().unwrap(), Anchor::Contact);
        assert_eq!("#models".parse::<Anchor>().unwrap(), Anchor::Models);
        assert_eq!(" About ".parse::<Anchor>().unwrap(), Anchor::About);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "#pricing".parse::<Anchor>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownAnchor { ref name } if name == "#pricing"));
        assert!("".parse::<Anchor>().is_err());
    }

    #[test]
    fn test_href_and_label() {
        assert_eq!(Anchor::Testimonials.href(), "#testimonials");
        assert_eq!(Anchor::Technology.label(), "TECHNOLOGY");
        assert_eq!(Anchor::ALL.len(), 5);
        assert_eq!(Anchor::ALL[0], Anchor::Models);
        assert_eq!(Anchor::ALL[4], Anchor::Contact);
    }
}
