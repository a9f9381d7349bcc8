use crate::{
    error::FormatError,
    identifier::{is_identifier_char, is_valid_identifier},
    version::SemanticVersion,
};
use core::fmt::{self, Display};

/// A phase of the version string parser. Phases are visited strictly in declaration order, and
/// only [`Phase::PreRelease`] and [`Phase::MetaData`] may be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The major numeric node.
    Major,
    /// The minor numeric node.
    Minor,
    /// The patch numeric node.
    Patch,
    /// The dot-separated pre-release identifiers after `-`.
    PreRelease,
    /// The dot-separated build metadata identifiers after `+`.
    MetaData,
}

impl Phase {
    fn is_numeric(&self) -> bool {
        matches!(self, Phase::Major | Phase::Minor | Phase::Patch)
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Major => "major",
            Phase::Minor => "minor",
            Phase::Patch => "patch",
            Phase::PreRelease => "pre-release",
            Phase::MetaData => "build metadata",
        })
    }
}

/// State carried through a single left-to-right scan of a version string.
struct Scanner<'vs> {
    input: &'vs str,
    phase: Phase,
    /// Start of the node or identifier currently being accumulated.
    start: usize,
    core: [u32; 3],
    pre_release: Vec<String>,
    build_metadata: Vec<String>,
}

impl<'vs> Scanner<'vs> {
    fn new(input: &'vs str) -> Self {
        Self {
            input,
            phase: Phase::Major,
            start: 0,
            core: [0; 3],
            pre_release: Vec::new(),
            build_metadata: Vec::new(),
        }
    }

    fn run(mut self) -> Result<SemanticVersion, FormatError> {
        for (index, character) in self.input.char_indices() {
            if self.phase.is_numeric() {
                self.numeric_step(index, character)?;
            } else {
                self.identifier_step(index, character)?;
            }
        }
        self.finish()
    }

    fn numeric_step(&mut self, index: usize, character: char) -> Result<(), FormatError> {
        match (character, self.phase) {
            ('0'..='9', _) => Ok(()),
            ('.', Phase::Major) => self.close_numeric(index, Phase::Minor),
            ('.', Phase::Minor) => self.close_numeric(index, Phase::Patch),
            ('.', phase) => Err(FormatError::TooManyNumericNodes { phase }),
            ('-', Phase::Patch) => self.close_numeric(index, Phase::PreRelease),
            ('+', Phase::Patch) => self.close_numeric(index, Phase::MetaData),
            (character, phase) => Err(FormatError::UnexpectedCharacter {
                character,
                index,
                phase,
            }),
        }
    }

    fn identifier_step(&mut self, index: usize, character: char) -> Result<(), FormatError> {
        match (character, self.phase) {
            (c, _) if is_identifier_char(c) => Ok(()),
            ('.', phase) => self.close_identifier(index, phase),
            ('+', Phase::PreRelease) => self.close_identifier(index, Phase::MetaData),
            ('+', phase) => Err(FormatError::DuplicateMetadataSeparator { phase }),
            (character, phase) => Err(FormatError::UnexpectedCharacter {
                character,
                index,
                phase,
            }),
        }
    }

    /// Closes the numeric node ending at `end` (exclusive) and moves to `next`.
    fn close_numeric(&mut self, end: usize, next: Phase) -> Result<(), FormatError> {
        let digits = &self.input[self.start..end];
        let phase = self.phase;

        if digits.is_empty() {
            return Err(FormatError::EmptyNode { phase });
        }
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(FormatError::LeadingZero {
                value: digits.to_owned(),
                phase,
            });
        }
        let value = digits
            .parse::<u32>()
            .map_err(|_| FormatError::NumberOverflow {
                value: digits.to_owned(),
                phase,
            })?;

        let slot = match phase {
            Phase::Major => 0,
            Phase::Minor => 1,
            _ => 2,
        };
        self.core[slot] = value;
        self.advance(end, next);
        Ok(())
    }

    /// Closes the identifier ending at `end` (exclusive) and moves to `next`, which may be the
    /// current phase.
    fn close_identifier(&mut self, end: usize, next: Phase) -> Result<(), FormatError> {
        let identifier = &self.input[self.start..end];
        let phase = self.phase;

        if identifier.is_empty() {
            return Err(FormatError::EmptyIdentifier { phase });
        }
        if !is_valid_identifier(identifier) {
            return Err(FormatError::InvalidIdentifier {
                identifier: identifier.to_owned(),
                phase,
            });
        }

        let target = match phase {
            Phase::PreRelease => &mut self.pre_release,
            _ => &mut self.build_metadata,
        };
        target.push(identifier.to_owned());
        self.advance(end, next);
        Ok(())
    }

    /// Moves past the separator at `separator_index`.
    fn advance(&mut self, separator_index: usize, next: Phase) {
        if next != self.phase {
            tracing::trace!(from = %self.phase, to = %next, "parser phase transition");
        }
        self.phase = next;
        // separators are all single-byte ascii
        self.start = separator_index + 1;
    }

    fn finish(mut self) -> Result<SemanticVersion, FormatError> {
        let end = self.input.len();
        match self.phase {
            phase @ (Phase::Major | Phase::Minor) => return Err(FormatError::Incomplete { phase }),
            Phase::Patch => self.close_numeric(end, Phase::Patch)?,
            phase => self.close_identifier(end, phase)?,
        }

        let [major, minor, patch] = self.core;
        Ok(SemanticVersion::from_validated(
            major,
            minor,
            patch,
            self.pre_release,
            self.build_metadata,
        ))
    }
}

/// Parses `input` as a SemVer 2.0 version string.
pub(crate) fn parse(input: &str) -> Result<SemanticVersion, FormatError> {
    if input.is_empty() {
        tracing::debug!("rejected empty version string");
        return Err(FormatError::Empty);
    }

    let result = Scanner::new(input).run();
    if let Err(err) = &result {
        tracing::debug!(input, error = %err, "failed to parse version string");
    }
    result
}
