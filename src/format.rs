use crate::{error::ArgumentError, version::SemanticVersion};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// Selects which fields of a [`SemanticVersion`] are rendered. The core (`major.minor.patch`) is
/// always rendered.
///
/// Each mode has a single-character format code, used by [`SemanticVersion::to_string_with`]
/// and the command line.
///
/// | Mode | Code | Pre-release | Build metadata |
/// |---|---|---|---|
/// | [`FormatMode::Core`] | `0` | no | no |
/// | [`FormatMode::PreRelease`] | `1` | yes | no |
/// | [`FormatMode::Metadata`] | `2` | no | yes |
/// | [`FormatMode::Full`] | `3` | yes | yes |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatMode {
    /// Only `major.minor.patch`.
    Core,
    /// The core and the pre-release identifiers.
    PreRelease,
    /// The core and the build metadata identifiers.
    Metadata,
    /// Everything.
    #[default]
    Full,
}

impl FormatMode {
    /// Looks up a mode by its format code. `None` selects [`FormatMode::Full`].
    ///
    /// # Errors
    ///
    /// - Returns [`ArgumentError::UnknownFormatCode`] if `code` is not `0`, `1`, `2` or `3`.
    pub fn from_code(code: Option<&str>) -> Result<Self, ArgumentError> {
        match code {
            None | Some("3") => Ok(FormatMode::Full),
            Some("0") => Ok(FormatMode::Core),
            Some("1") => Ok(FormatMode::PreRelease),
            Some("2") => Ok(FormatMode::Metadata),
            Some(code) => Err(ArgumentError::UnknownFormatCode {
                code: code.to_owned(),
            }),
        }
    }

    /// Returns this mode's format code.
    pub fn code(&self) -> &'static str {
        match self {
            FormatMode::Core => "0",
            FormatMode::PreRelease => "1",
            FormatMode::Metadata => "2",
            FormatMode::Full => "3",
        }
    }

    fn includes_pre_release(&self) -> bool {
        matches!(self, FormatMode::PreRelease | FormatMode::Full)
    }

    fn includes_build_metadata(&self) -> bool {
        matches!(self, FormatMode::Metadata | FormatMode::Full)
    }
}

impl FromStr for FormatMode {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(Some(s))
    }
}

impl Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A version rendered with a [`FormatMode`]. Created by [`SemanticVersion::render`].
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'v> {
    version: &'v SemanticVersion,
    mode: FormatMode,
}

impl<'v> Rendered<'v> {
    pub(crate) fn new(version: &'v SemanticVersion, mode: FormatMode) -> Self {
        Self { version, mode }
    }
}

fn write_identifiers(
    f: &mut fmt::Formatter<'_>,
    prefix: char,
    identifiers: &[String],
) -> fmt::Result {
    let mut separator = prefix;
    for identifier in identifiers {
        write!(f, "{separator}{identifier}")?;
        separator = '.';
    }
    Ok(())
}

impl<'v> Display for Rendered<'v> {
    /// Renders `major.minor.patch`, then `-` and the dot-joined pre-release identifiers, then `+`
    /// and the dot-joined build metadata identifiers, skipping the parts excluded by the mode or
    /// that are empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version = self.version;
        write!(
            f,
            "{}.{}.{}",
            version.major(),
            version.minor(),
            version.patch()
        )?;
        if self.mode.includes_pre_release() {
            write_identifiers(f, '-', version.pre_release())?;
        }
        if self.mode.includes_build_metadata() {
            write_identifiers(f, '+', version.build_metadata())?;
        }
        Ok(())
    }
}
