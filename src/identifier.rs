use core::{
    cmp::Ordering,
    fmt::{self, Display},
};

/// Which identifier list of a version an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// An identifier of the pre-release node, after the `-`.
    PreRelease,
    /// An identifier of the build metadata node, after the `+`.
    BuildMetadata,
}

impl Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::PreRelease => f.write_str("pre-release"),
            IdentifierKind::BuildMetadata => f.write_str("build metadata"),
        }
    }
}

pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Returns true if `identifier` consists only of ASCII digits.
pub(crate) fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `identifier` is a valid pre-release or build metadata identifier.
///
/// A valid identifier is non-empty and either:
///
/// - all ASCII digits, without a leading zero unless it is exactly `0`, or
/// - made of ASCII alphanumerics and hyphens, with at least one letter or hyphen.
///
/// ```
/// use semantic_version::is_valid_identifier;
///
/// assert!(is_valid_identifier("alpha"));
/// assert!(is_valid_identifier("0"));
/// assert!(is_valid_identifier("0a"));
/// assert!(!is_valid_identifier("01"));
/// assert!(!is_valid_identifier("al_pha"));
/// assert!(!is_valid_identifier(""));
/// ```
pub fn is_valid_identifier(identifier: &str) -> bool {
    if is_numeric(identifier) {
        identifier.len() == 1 || !identifier.starts_with('0')
    } else {
        !identifier.is_empty() && identifier.chars().all(is_identifier_char)
    }
}

/// Compares two pre-release identifiers by precedence.
///
/// Numeric identifiers compare by value and always precede alphanumeric ones. Alphanumeric
/// identifiers compare by their bytes.
pub(crate) fn compare_identifiers(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        // valid numeric identifiers have no leading zeros, so the longer one is greater. this
        // also holds for values that wouldn't fit in any integer type.
        (true, true) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}
