//! Class category classification and the derived calendar color scheme.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A class type as it arrives from the store: a display name, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassTypeDescriptor {
    pub name: String,
}

impl ClassTypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Keywords whose presence in a class-type name marks it as Personal
/// Training. Matched as plain substrings on the lowercased name.
const PERSONAL_TRAINING_KEYWORDS: [&str; 3] = ["personal", "training", "pt"];

/// Coarse business category of a class.
///
/// Always derived fresh from the class-type name; never persisted, so it
/// cannot drift from the name it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassCategory {
    Pilates,
    PersonalTraining,
}

impl ClassCategory {
    /// Classifies a class type by keyword heuristic.
    ///
    /// A missing descriptor classifies as Pilates, the more commonly
    /// available category. Otherwise the lowercased name is scanned for the
    /// Personal Training keywords as substrings.
    ///
    /// # Edge Cases
    ///
    /// Substring matching is deliberate and known to be imprecise: a class
    /// named "Personality Training" or one containing "pt" inside an
    /// unrelated word classifies as Personal Training. Tightening this to
    /// word-boundary matching would change observable behavior.
    pub fn classify(class_type: Option<&ClassTypeDescriptor>) -> Self {
        match class_type {
            Some(descriptor) => Self::from_name(&descriptor.name),
            None => Self::Pilates,
        }
    }

    /// Classifies a raw class-type name.
    pub fn from_name(name: &str) -> Self {
        let lowered = name.to_lowercase();
        if PERSONAL_TRAINING_KEYWORDS
            .iter()
            .any(|keyword| lowered.contains(keyword))
        {
            Self::PersonalTraining
        } else {
            Self::Pilates
        }
    }

    /// Color scheme for the admin calendar card of this category.
    pub fn color_scheme(&self) -> CardColorScheme {
        match self {
            Self::Pilates => CardColorScheme {
                background: "#ede9fe",
                border: "#8b5cf6",
                text: "#5b21b6",
            },
            Self::PersonalTraining => CardColorScheme {
                background: "#ffedd5",
                border: "#f97316",
                text: "#9a3412",
            },
        }
    }
}

impl fmt::Display for ClassCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pilates => write!(f, "pilates"),
            Self::PersonalTraining => write!(f, "personal-training"),
        }
    }
}

/// Calendar card colors derived from a category.
///
/// Purely presentational; the calendar view is the only consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardColorScheme {
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}
