use std::fmt;

use serde::Deserialize;
use sprig_core::{Modifier, ModifierSet};

/// Modifier tables that drive validation and emission for one kind.
#[derive(Debug, Clone, Copy)]
struct KindPolicy {
    keyword: &'static str,
    implicit_property_modifiers: &'static [Modifier],
    implicit_function_modifiers: &'static [Modifier],
    implicit_nested_modifiers: &'static [Modifier],
    as_member_modifiers: &'static [Modifier],
}

const CLASS: KindPolicy = KindPolicy {
    keyword: "class",
    implicit_property_modifiers: &[],
    implicit_function_modifiers: &[],
    implicit_nested_modifiers: &[],
    as_member_modifiers: &[],
};

const INTERFACE: KindPolicy = KindPolicy {
    keyword: "interface",
    implicit_property_modifiers: &[Modifier::Public, Modifier::Static, Modifier::Final],
    implicit_function_modifiers: &[Modifier::Public, Modifier::Abstract],
    implicit_nested_modifiers: &[Modifier::Public, Modifier::Static],
    as_member_modifiers: &[Modifier::Static],
};

const ENUM: KindPolicy = KindPolicy {
    keyword: "enum",
    implicit_property_modifiers: &[],
    implicit_function_modifiers: &[],
    implicit_nested_modifiers: &[],
    as_member_modifiers: &[Modifier::Static],
};

const ANNOTATION: KindPolicy = KindPolicy {
    keyword: "@interface",
    ..INTERFACE
};

/// The kind of a declaration. Fixed when the builder is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

impl DeclarationKind {
    fn policy(&self) -> &'static KindPolicy {
        match self {
            Self::Class => &CLASS,
            Self::Interface => &INTERFACE,
            Self::Enum => &ENUM,
            Self::Annotation => &ANNOTATION,
        }
    }

    /// Keyword introducing the declaration.
    pub fn keyword(&self) -> &'static str {
        self.policy().keyword
    }

    /// Modifiers every property of this kind carries.
    pub fn implicit_property_modifiers(&self) -> ModifierSet {
        self.policy().implicit_property_modifiers.iter().copied().collect()
    }

    /// Modifiers every function of this kind carries.
    pub fn implicit_function_modifiers(&self) -> ModifierSet {
        self.policy().implicit_function_modifiers.iter().copied().collect()
    }

    /// Modifiers every nested declaration of this kind carries.
    pub fn implicit_nested_modifiers(&self) -> ModifierSet {
        self.policy().implicit_nested_modifiers.iter().copied().collect()
    }

    /// Modifiers a declaration of this kind has when it is itself nested.
    pub fn as_member_modifiers(&self) -> ModifierSet {
        self.policy().as_member_modifiers.iter().copied().collect()
    }

    /// Whether functions may be abstract without the declaration saying so.
    pub fn is_abstract_by_kind(&self) -> bool {
        !matches!(self, Self::Class)
    }

    pub fn allows_initializers(&self) -> bool {
        matches!(self, Self::Class | Self::Enum)
    }

    pub fn allows_constructors(&self) -> bool {
        matches!(self, Self::Class | Self::Enum)
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Annotation => "annotation",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(DeclarationKind::Class.keyword(), "class");
        assert_eq!(DeclarationKind::Interface.keyword(), "interface");
        assert_eq!(DeclarationKind::Enum.keyword(), "enum");
        assert_eq!(DeclarationKind::Annotation.keyword(), "@interface");
    }

    #[test]
    fn test_annotation_shares_interface_tables() {
        let interface = DeclarationKind::Interface;
        let annotation = DeclarationKind::Annotation;
        assert_eq!(
            interface.implicit_property_modifiers(),
            annotation.implicit_property_modifiers()
        );
        assert_eq!(
            interface.implicit_function_modifiers(),
            annotation.implicit_function_modifiers()
        );
        assert_eq!(
            annotation.implicit_nested_modifiers(),
            [Modifier::Public, Modifier::Static].into_iter().collect()
        );
    }

    #[test]
    fn test_class_has_no_implicit_modifiers() {
        let class = DeclarationKind::Class;
        assert!(class.implicit_property_modifiers().is_empty());
        assert!(class.implicit_function_modifiers().is_empty());
        assert!(class.implicit_nested_modifiers().is_empty());
        assert!(class.as_member_modifiers().is_empty());
        assert!(!class.is_abstract_by_kind());
    }

    #[test]
    fn test_enum_is_static_as_member() {
        assert_eq!(
            DeclarationKind::Enum.as_member_modifiers(),
            [Modifier::Static].into_iter().collect()
        );
    }

    #[test]
    fn test_deserialize_kind() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: DeclarationKind,
        }
        let parsed: Wrapper = toml::from_str("kind = \"annotation\"").unwrap();
        assert_eq!(parsed.kind, DeclarationKind::Annotation);
    }
}
