//! # semantic-version
//!
//! A strict [SemVer 2.0](https://semver.org/) parser, formatter and comparator.
//!
//! The central type is [`SemanticVersion`], an immutable value made of a `major.minor.patch`
//! core, optional pre-release identifiers and optional build metadata identifiers.
//!
//! ## Examples
//!
//! Parse, render and compare:
//!
//! ```
//! use semantic_version::prelude::*;
//!
//! let version = SemanticVersion::parse("1.2.3-alpha.1+build.5").unwrap();
//! assert_eq!("1.2.3", version.render(FormatMode::Core).to_string());
//! assert_eq!("1.2.3-alpha.1", version.to_string_with(Some("1")).unwrap());
//!
//! // a pre-release precedes its release
//! assert!(version < SemanticVersion::new(1, 2, 3));
//!
//! // build metadata never affects equality or ordering
//! assert_eq!(version, "1.2.3-alpha.1+build.6".parse::<SemanticVersion>().unwrap());
//! ```
//!
//! Or build one from explicit fields, which are validated just like parsed ones:
//!
//! ```
//! use semantic_version::prelude::*;
//!
//! let version = SemanticVersion::with_pre_release(1, 0, 0, ["rc", "1"]).unwrap();
//! assert_eq!("1.0.0-rc.1", version.to_string());
//!
//! let err = SemanticVersion::with_pre_release(1, 0, 0, ["rc", "01"]).unwrap_err();
//! assert!(matches!(err, ArgumentError::InvalidIdentifier { .. }));
//! ```
//!
//! ## Grammar
//!
//! - A version is `MAJOR.MINOR.PATCH`, then optionally `-` and dot-separated pre-release
//!   identifiers, then optionally `+` and dot-separated build metadata identifiers.
//! - `MAJOR`, `MINOR` and `PATCH` are decimal numbers without leading zeros that fit in a `u32`.
//! - Identifiers are non-empty runs of `[0-9A-Za-z-]`. An all-digit identifier must not have a
//!   leading zero unless it is exactly `0`. This applies to build metadata too.
//!
//! Malformed strings fail with a [`FormatError`] naming the [`Phase`] that rejected them.
//! Malformed explicit arguments fail with an [`ArgumentError`].
//!
//! ## Precedence
//!
//! Versions are ordered as in SemVer 2.0 §11:
//!
//! 1. `major`, `minor`, then `patch`, numerically.
//! 2. A version without pre-release identifiers is greater than one with them.
//! 3. Pre-release identifiers are compared left to right: numeric ones by value, alphanumeric
//!    ones by their bytes, and a numeric identifier always precedes an alphanumeric one.
//! 4. If every shared identifier is equal, the longer list is greater.
//!
//! ```
//! use semantic_version::prelude::*;
//!
//! let chain = [
//!     "1.0.0-alpha", "1.0.0-alpha.1", "1.0.0-alpha.beta", "1.0.0-beta",
//!     "1.0.0-beta.2", "1.0.0-beta.11", "1.0.0-rc.1", "1.0.0",
//! ];
//! let versions: Vec<SemanticVersion> = chain.iter().map(|s| s.parse().unwrap()).collect();
//! assert!(versions.windows(2).all(|pair| pair[0] < pair[1]));
//! ```
//!
//! ## Prelude
//!
//! Use the prelude for everything at once:
//!
//! ```
//! use semantic_version::prelude::*;
//! ```
#![warn(missing_docs)]

mod error;
mod format;
mod identifier;
mod level;
mod parse;
mod version;

pub use crate::error::{ArgumentError, FormatError, VersionError};
pub use crate::format::{FormatMode, Rendered};
pub use crate::identifier::{is_valid_identifier, IdentifierKind};
pub use crate::level::Level;
pub use crate::parse::Phase;
pub use crate::version::SemanticVersion;

/// A convenience module appropriate for glob imports (`use semantic_version::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::ArgumentError;
    #[doc(no_inline)]
    pub use crate::FormatError;
    #[doc(no_inline)]
    pub use crate::FormatMode;
    #[doc(no_inline)]
    pub use crate::IdentifierKind;
    #[doc(no_inline)]
    pub use crate::Level;
    #[doc(no_inline)]
    pub use crate::Phase;
    #[doc(no_inline)]
    pub use crate::SemanticVersion;
    #[doc(no_inline)]
    pub use crate::VersionError;
}
