//! Declaration modifiers.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::Deserialize;

/// A modifier keyword on a declaration or member.
///
/// Variants are declared in canonical source order, so iterating a
/// [`ModifierSet`] yields modifiers in the order they must be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Default,
    Static,
    Sealed,
    #[serde(rename = "non-sealed")]
    NonSealed,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
}

/// A unique, canonically ordered set of modifiers.
pub type ModifierSet = BTreeSet<Modifier>;

impl Modifier {
    /// Every modifier in canonical order.
    pub const ALL: [Modifier; 14] = [
        Self::Public,
        Self::Protected,
        Self::Private,
        Self::Abstract,
        Self::Default,
        Self::Static,
        Self::Sealed,
        Self::NonSealed,
        Self::Final,
        Self::Transient,
        Self::Volatile,
        Self::Synchronized,
        Self::Native,
        Self::Strictfp,
    ];

    /// The source keyword for this modifier.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Abstract => "abstract",
            Self::Default => "default",
            Self::Static => "static",
            Self::Sealed => "sealed",
            Self::NonSealed => "non-sealed",
            Self::Final => "final",
            Self::Transient => "transient",
            Self::Volatile => "volatile",
            Self::Synchronized => "synchronized",
            Self::Native => "native",
            Self::Strictfp => "strictfp",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Error returned when a string is not a modifier keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModifierError(pub String);

impl fmt::Display for ParseModifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown modifier '{}'", self.0)
    }
}

impl std::error::Error for ParseModifierError {}

impl FromStr for Modifier {
    type Err = ParseModifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.keyword() == s)
            .ok_or_else(|| ParseModifierError(s.to_string()))
    }
}
