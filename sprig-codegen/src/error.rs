use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for declaration and member construction.
pub type Result<T> = std::result::Result<T, Error>;

/// A structural rule enforced while a declaration or member is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// A declaration has exactly one of a name and anonymous arguments.
    NameOrArguments,
    /// Enums declare at least one constant.
    EnumConstantsRequired,
    /// Abstract functions only appear in abstract declarations.
    AbstractFunction,
    /// Anonymous declarations have at most one interesting supertype.
    AnonymousSupertypes,
    /// Enum constant bodies are anonymous declarations.
    EnumConstantBody,
    /// Enum constant names are unique.
    DuplicateEnumConstant,
    /// Only enums declare enum constants.
    EnumConstantKind,
    /// Interface and annotation properties are `public|private static final`.
    PropertyModifiers,
    /// Interface and annotation functions carry their required modifiers.
    FunctionModifiers,
    /// Only interface functions may be `default`.
    DefaultModifier,
    /// Only annotation functions carry a default value.
    DefaultValue,
    /// Constructors only appear in named classes and enums.
    Constructor,
    /// Nested declarations carry the modifiers their parent requires.
    NestedModifiers,
    /// Nested declarations are named.
    NestedName,
    /// Anonymous declarations declare no modifiers.
    AnonymousModifiers,
    /// Anonymous declarations declare no type parameters.
    AnonymousTypeParameters,
    /// Only classes have a superclass, and only one.
    Superclass,
    /// Supertypes are reference types.
    Supertype,
    /// Only classes and enums have initializer blocks.
    InitializerBlock,
    /// Abstract functions have no body.
    AbstractBody,
    /// A varargs function ends with an array parameter.
    Varargs,
    /// Parameters may only be `final`.
    ParameterModifiers,
}

impl Rule {
    /// Stable identifier for this rule.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NameOrArguments => "name-or-arguments",
            Self::EnumConstantsRequired => "enum-constants-required",
            Self::AbstractFunction => "abstract-function",
            Self::AnonymousSupertypes => "anonymous-supertypes",
            Self::EnumConstantBody => "enum-constant-body",
            Self::DuplicateEnumConstant => "duplicate-enum-constant",
            Self::EnumConstantKind => "enum-constant-kind",
            Self::PropertyModifiers => "property-modifiers",
            Self::FunctionModifiers => "function-modifiers",
            Self::DefaultModifier => "default-modifier",
            Self::DefaultValue => "default-value",
            Self::Constructor => "constructor",
            Self::NestedModifiers => "nested-modifiers",
            Self::NestedName => "nested-name",
            Self::AnonymousModifiers => "anonymous-modifiers",
            Self::AnonymousTypeParameters => "anonymous-type-parameters",
            Self::Superclass => "superclass",
            Self::Supertype => "supertype",
            Self::InitializerBlock => "initializer-block",
            Self::AbstractBody => "abstract-body",
            Self::Varargs => "varargs",
            Self::ParameterModifiers => "parameter-modifiers",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while declarations, members and templates are constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(sprig::invalid_name),
        help(
            "names start with a letter, '_' or '$', continue with letters, digits, '_' or '$', and may not be reserved words"
        )
    )]
    InvalidName { context: &'static str, name: String },

    #[error("{rule}: {message}")]
    #[diagnostic(code(sprig::invariant_violation))]
    InvariantViolation { rule: Rule, message: String },

    #[error("invalid template '{format}': {message}")]
    #[diagnostic(code(sprig::template))]
    Template { format: String, message: String },

    #[error("invalid type '{input}': {message}")]
    #[diagnostic(
        code(sprig::invalid_type),
        help("write types like 'int', 'java.util.List<java.lang.String>' or 'T[]'")
    )]
    InvalidType { input: String, message: String },
}

impl Error {
    pub(crate) fn violation(rule: Rule, message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            rule,
            message: message.into(),
        }
    }

    /// The rule this error violates, if it is an invariant violation.
    pub fn rule(&self) -> Option<Rule> {
        match self {
            Self::InvariantViolation { rule, .. } => Some(*rule),
            _ => None,
        }
    }
}

/// Errors raised by the writer while text is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum EmitError {
    #[error("cannot unindent {levels} from {current}")]
    #[diagnostic(code(sprig::emit::unindent))]
    Unindent { levels: usize, current: usize },

    #[error("{0}")]
    #[diagnostic(code(sprig::emit::statement))]
    Statement(&'static str),

    #[error("constructor emitted outside a named declaration")]
    #[diagnostic(code(sprig::emit::constructor))]
    UnnamedConstructor,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Template(#[from] Error),
}
