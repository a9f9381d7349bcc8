use crate::{identifier::IdentifierKind, level::Level, parse::Phase};

/// Errors raised while parsing a version string.
///
/// Every variant except [`FormatError::Empty`] names the [`Phase`] of the parser that rejected
/// the input. See [`FormatError::phase`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The version string was empty.
    #[error("Version string should not be empty")]
    Empty,

    /// A character was encountered that the current phase does not accept.
    #[error("Unexpected character `{character}` at index {index} while parsing {phase}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The byte index of the character in the version string.
        index: usize,
        /// The phase that rejected it.
        phase: Phase,
    },

    /// A numeric node had no digits, such as the middle node of `1..2`.
    #[error("The {phase} node should contain at least one digit")]
    EmptyNode {
        /// The phase whose node was empty.
        phase: Phase,
    },

    /// A numeric node had a leading zero.
    #[error("The {phase} node `{value}` should not have a leading zero")]
    LeadingZero {
        /// The digits of the node.
        value: String,
        /// The phase whose node was rejected.
        phase: Phase,
    },

    /// A numeric node does not fit in 32 bits.
    #[error("The {phase} node `{value}` should fit in an unsigned 32-bit integer")]
    NumberOverflow {
        /// The digits of the node.
        value: String,
        /// The phase whose node was rejected.
        phase: Phase,
    },

    /// A fourth numeric node was started, such as in `1.2.3.4`.
    #[error("Version should have exactly three numeric nodes, found a `.` after {phase}")]
    TooManyNumericNodes {
        /// Always [`Phase::Patch`].
        phase: Phase,
    },

    /// A second `+` was found in the build metadata.
    #[error("Build metadata should be introduced by a single `+`, found another in {phase}")]
    DuplicateMetadataSeparator {
        /// Always [`Phase::MetaData`].
        phase: Phase,
    },

    /// An identifier had no characters, such as in `1.2.3-alpha..1` or `1.2.3-`.
    #[error("Identifiers in {phase} should not be empty")]
    EmptyIdentifier {
        /// The phase whose identifier was empty.
        phase: Phase,
    },

    /// An identifier violated the identifier grammar, like a numeric identifier with a leading
    /// zero.
    #[error("Identifier `{identifier}` in {phase} is invalid")]
    InvalidIdentifier {
        /// The rejected identifier.
        identifier: String,
        /// The phase whose identifier was rejected.
        phase: Phase,
    },

    /// The version string ended before the patch node was reached.
    #[error("Version string ended while parsing {phase}, it should have major, minor and patch nodes")]
    Incomplete {
        /// The phase that was being parsed when the input ran out.
        phase: Phase,
    },
}

impl FormatError {
    /// Returns the parser phase that produced this error, or `None` for an empty input (which is
    /// rejected before scanning begins).
    pub fn phase(&self) -> Option<Phase> {
        use FormatError::*;
        match self {
            Empty => None,
            UnexpectedCharacter { phase, .. }
            | EmptyNode { phase }
            | LeadingZero { phase, .. }
            | NumberOverflow { phase, .. }
            | TooManyNumericNodes { phase }
            | DuplicateMetadataSeparator { phase }
            | EmptyIdentifier { phase }
            | InvalidIdentifier { phase, .. }
            | Incomplete { phase } => Some(*phase),
        }
    }
}

/// Errors raised when a caller hands structurally invalid data straight to the API, as opposed to
/// a malformed version string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// A caller-supplied identifier violated the identifier grammar.
    #[error("{kind} identifier `{identifier}` is invalid")]
    InvalidIdentifier {
        /// The rejected identifier.
        identifier: String,
        /// Which identifier list it was supplied for.
        kind: IdentifierKind,
    },

    /// A format code other than `0`, `1`, `2` or `3`.
    #[error("Format code `{code}` is unknown, it should be one of `0`, `1`, `2` or `3`")]
    UnknownFormatCode {
        /// The rejected code.
        code: String,
    },

    /// A value of another type was handed to [`crate::SemanticVersion::compare_any`].
    #[error("Cannot compare a semantic version to a value of type `{type_name}`")]
    NotASemanticVersion {
        /// A description of the foreign value's type.
        type_name: &'static str,
    },
}

/// Errors raised when deriving a new version from an existing one.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// Incrementing the given level would overflow its 32-bit value.
    #[error("Incrementing the {level} value would overflow")]
    Overflow {
        /// The level that could not be incremented.
        level: Level,
    },
}
