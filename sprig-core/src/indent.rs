//! Indentation configuration for rendered declarations.

use serde::{Deserialize, Deserializer, de};

/// Indentation style for rendered source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation, the default for rendered declarations.
    pub const TWO: Self = Self::Spaces(2);

    /// 4-space indentation.
    pub const FOUR: Self = Self::Spaces(4);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(1) => " ",
            Self::Spaces(2) => "  ",
            Self::Spaces(3) => "   ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 2 whitespaces
            Self::Spaces(_) => "  ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TWO
    }
}

impl<'de> Deserialize<'de> for Indent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawIndent {
            Width(u8),
            Named(String),
        }

        match RawIndent::deserialize(deserializer)? {
            RawIndent::Width(width @ (1..=4 | 8)) => Ok(Self::Spaces(width)),
            RawIndent::Width(width) => Err(de::Error::custom(format!(
                "unsupported indent width {width}, expected 1, 2, 3, 4 or 8"
            ))),
            RawIndent::Named(name) if name == "tab" => Ok(Self::Tab),
            RawIndent::Named(name) => Err(de::Error::custom(format!(
                "unknown indent style '{name}', expected a width or \"tab\""
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        indent: Indent,
    }

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::TWO);
    }

    #[test]
    fn test_deserialize_width_and_tab() {
        let holder: Holder = toml::from_str("indent = 4").unwrap();
        assert_eq!(holder.indent, Indent::FOUR);

        let holder: Holder = toml::from_str("indent = \"tab\"").unwrap();
        assert_eq!(holder.indent, Indent::Tab);
    }

    #[test]
    fn test_deserialize_rejects_unknown() {
        assert!(toml::from_str::<Holder>("indent = 5").is_err());
        assert!(toml::from_str::<Holder>("indent = \"spaces\"").is_err());
    }
}
