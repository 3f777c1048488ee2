//! Identifier rules for generated source.

/// Reserved words that can never be used as a declaration or member name.
pub const KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "try",
    "void",
    "volatile",
    "while",
    "true",
    "false",
    "null",
    "_",
];

/// Check if a word is reserved.
pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.contains(&s)
}

/// Check that a string is lexically an identifier.
///
/// Identifiers start with a letter, `_` or `$` and continue with letters,
/// digits, `_` or `$`.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Check that a string is an identifier that is not a reserved word.
pub fn is_valid_name(s: &str) -> bool {
    is_valid_identifier(s) && !is_keyword(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(is_valid_identifier("Foo"));
        assert!(is_valid_identifier("_bar"));
        assert!(is_valid_identifier("$proxy1"));
        assert!(is_valid_identifier("café"));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1abc"));
        assert!(!is_valid_identifier("foo-bar"));
        assert!(!is_valid_identifier("foo bar"));
        assert!(!is_valid_identifier("a.b"));
    }

    #[test]
    fn test_keywords_are_not_names() {
        assert!(is_valid_identifier("class"));
        assert!(!is_valid_name("class"));
        assert!(!is_valid_name("null"));
        assert!(is_valid_name("klass"));
    }
}
