//! The Identifier/Number Validator (spec §2.2, §4.1): pure predicates
//! shared by the parser (to reject malformed names) and the emitter (to
//! decide what needs identifier rewriting).

/// Datatype keywords spec §6 calls out by name. Recognized, discarded in
/// output. The sole source of truth for this list — the parser imports
/// it rather than keeping its own copy.
pub const DATATYPE_KEYWORDS: &[&str] =
    &["boolean", "byte", "char", "double", "float", "int", "long", "short"];

/// Structural keywords plus the statements the corpus documents but does
/// not implement (`while`/`for`/`do`/`switch`/`try`/`throw`) — these
/// still occupy the keyword namespace even though the parser only stubs
/// them out.
const STRUCTURAL_KEYWORDS: &[&str] = &[
    "void", "class", "extends", "public", "private", "protected", "static",
    "return", "if", "else", "new", "true", "false", "null", "this",
    "while", "for", "do", "switch", "try", "throw",
];

pub fn is_keyword(token: &str) -> bool {
    DATATYPE_KEYWORDS.contains(&token) || STRUCTURAL_KEYWORDS.contains(&token)
}

pub fn is_datatype_keyword(token: &str) -> bool {
    DATATYPE_KEYWORDS.contains(&token)
}

/// `true` iff `token` matches `[A-Za-z_][A-Za-z0-9_]*` and is not a
/// reserved keyword.
pub fn validate_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return false;
    }
    !is_keyword(token)
}

/// `true` iff `token` is a non-negative decimal numeric literal — digits
/// with at most one interior `.`, matching what the lexer leaves intact
/// when it refuses to split on a decimal point (spec §4.1). Sign tokens
/// are handled separately by the parser's unary-expression rule, not
/// here.
pub fn validate_number(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    let mut seen_dot = false;
    let mut seen_digit = false;
    for c in token.chars() {
        if c == '.' {
            if seen_dot {
                return false;
            }
            seen_dot = true;
        } else if c.is_ascii_digit() {
            seen_digit = true;
        } else {
            return false;
        }
    }
    seen_digit
}
