use crate::{
    error::{ArgumentError, FormatError, VersionError},
    format::{FormatMode, Rendered},
    identifier::{compare_identifiers, is_valid_identifier, IdentifierKind},
    level::Level,
    parse,
};
use core::{
    any::Any,
    cmp::Ordering,
    fmt::{self, Display},
    hash::{Hash, Hasher},
    str::FromStr,
};

/// An immutable [SemVer 2.0](https://semver.org/) version: a `major.minor.patch` core, an
/// optional list of pre-release identifiers, and an optional list of build metadata identifiers.
///
/// Versions are created by parsing a string or from explicit fields, and every constructor
/// validates its input, so an instance is always well-formed.
///
/// Build metadata is carried along and rendered, but it never takes part in equality, hashing,
/// or ordering.
///
/// # Examples
///
/// ```
/// use semantic_version::SemanticVersion;
///
/// let version = SemanticVersion::parse("1.2.3-alpha.1+build.5").unwrap();
/// assert_eq!("1.2.3-alpha.1+build.5", version.to_string());
/// assert!(version.is_pre_release());
/// assert!(version < SemanticVersion::new(1, 2, 3));
///
/// // build metadata is ignored by comparisons
/// let other = SemanticVersion::parse("1.2.3-alpha.1+build.6").unwrap();
/// assert_eq!(version, other);
/// ```
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    major: u32,
    minor: u32,
    patch: u32,
    pre_release: Vec<String>,
    build_metadata: Vec<String>,
}

impl SemanticVersion {
    /// The `0.0.0` version, with no pre-release or build metadata. This is the canonical
    /// "unversioned" value and is also what [`Default`] returns.
    pub const EMPTY: SemanticVersion = SemanticVersion::new(0, 0, 0);

    /// Creates a version with the given core and no identifiers.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build_metadata: Vec::new(),
        }
    }

    /// Creates a version with the given core and pre-release identifiers.
    ///
    /// # Errors
    ///
    /// - Returns [`ArgumentError::InvalidIdentifier`] if any identifier is invalid. See
    ///   [`crate::is_valid_identifier`].
    pub fn with_pre_release<P, S>(
        major: u32,
        minor: u32,
        patch: u32,
        pre_release: P,
    ) -> Result<Self, ArgumentError>
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_parts(major, minor, patch, pre_release, Vec::<String>::new())
    }

    /// Creates a version from all of its parts.
    ///
    /// ```
    /// use semantic_version::SemanticVersion;
    ///
    /// let version = SemanticVersion::with_parts(1, 0, 0, ["rc", "1"], ["sha", "5114f85"]).unwrap();
    /// assert_eq!("1.0.0-rc.1+sha.5114f85", version.to_string());
    ///
    /// assert!(SemanticVersion::with_parts(1, 0, 0, ["rc", "01"], [] as [&str; 0]).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns [`ArgumentError::InvalidIdentifier`] if any identifier is invalid. See
    ///   [`crate::is_valid_identifier`].
    pub fn with_parts<P, PS, B, BS>(
        major: u32,
        minor: u32,
        patch: u32,
        pre_release: P,
        build_metadata: B,
    ) -> Result<Self, ArgumentError>
    where
        P: IntoIterator<Item = PS>,
        PS: Into<String>,
        B: IntoIterator<Item = BS>,
        BS: Into<String>,
    {
        Ok(Self::from_validated(
            major,
            minor,
            patch,
            validate_identifiers(pre_release, IdentifierKind::PreRelease)?,
            validate_identifiers(build_metadata, IdentifierKind::BuildMetadata)?,
        ))
    }

    pub(crate) fn from_validated(
        major: u32,
        minor: u32,
        patch: u32,
        pre_release: Vec<String>,
        build_metadata: Vec<String>,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
        }
    }

    /// Creates a `major.minor.0` version. This is the explicit counterpart of a two-part
    /// "major.minor" platform version.
    pub const fn from_major_minor(major: u32, minor: u32) -> Self {
        Self::new(major, minor, 0)
    }

    /// Parses a SemVer 2.0 version string.
    ///
    /// The grammar is strict: no `v` prefix, no surrounding whitespace, exactly three numeric
    /// nodes without leading zeros, and identifiers of ASCII alphanumerics and hyphens.
    ///
    /// # Errors
    ///
    /// - Returns [`FormatError::Empty`] if `version_str` is empty.
    /// - Returns another [`FormatError`] variant, naming the failed [`crate::Phase`], if
    ///   `version_str` does not follow the grammar.
    pub fn parse(version_str: &str) -> Result<Self, FormatError> {
        parse::parse(version_str)
    }

    /// Like [`Self::parse`], but returns `None` instead of an error.
    ///
    /// ```
    /// use semantic_version::SemanticVersion;
    ///
    /// assert!(SemanticVersion::try_parse("1.2.3").is_some());
    /// assert!(SemanticVersion::try_parse("0.0.0.").is_none());
    /// ```
    pub fn try_parse(version_str: &str) -> Option<Self> {
        parse::parse(version_str).ok()
    }

    /// Returns the major value.
    pub fn major(&self) -> u32 {
        self.major
    }

    /// Returns the minor value.
    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// Returns the patch value.
    pub fn patch(&self) -> u32 {
        self.patch
    }

    /// Returns the pre-release identifiers, in order. Empty if this is not a pre-release.
    pub fn pre_release(&self) -> &[String] {
        &self.pre_release
    }

    /// Returns the build metadata identifiers, in order.
    pub fn build_metadata(&self) -> &[String] {
        &self.build_metadata
    }

    /// Returns true if this version has pre-release identifiers.
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Returns true if this version has build metadata identifiers.
    pub fn has_build_metadata(&self) -> bool {
        !self.build_metadata.is_empty()
    }

    /// Returns true if this version is `0.0.0` with no pre-release identifiers (build metadata
    /// is ignored, like everywhere else in comparisons).
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Returns true if both versions agree on every level at or above `level`.
    pub fn is_compatible_at(&self, other: &Self, level: Level) -> bool {
        match level {
            Level::Major => self.major == other.major,
            Level::Minor => self.major == other.major && self.minor == other.minor,
            Level::Patch => {
                self.major == other.major && self.minor == other.minor && self.patch == other.patch
            }
        }
    }

    /// Returns true if `other` only differs from this version in its patch value or
    /// identifiers.
    pub fn is_patch_compatible(&self, other: &Self) -> bool {
        self.is_compatible_at(other, Level::Minor)
    }

    /// Returns true if `other` has the same major value as this version.
    pub fn is_minor_compatible(&self, other: &Self) -> bool {
        self.is_compatible_at(other, Level::Major)
    }

    /// Returns the `(major, minor)` pair. This is the explicit, lossy counterpart of a two-part
    /// "major.minor" platform version.
    pub fn to_major_minor(&self) -> (u32, u32) {
        (self.major, self.minor)
    }

    /// Returns the `major.minor.patch` core of this version, without any identifiers.
    pub fn core(&self) -> Self {
        Self::new(self.major, self.minor, self.patch)
    }

    /// Returns a copy of this version without build metadata.
    pub fn without_build_metadata(&self) -> Self {
        Self::from_validated(
            self.major,
            self.minor,
            self.patch,
            self.pre_release.clone(),
            Vec::new(),
        )
    }

    /// Returns the next release at `level`. The value at `level` is incremented, all lesser
    /// values are reset to zero, and identifiers are dropped.
    ///
    /// A pre-release whose lesser values are already zero is instead promoted to its release,
    /// since that release is already greater than the pre-release.
    ///
    /// ```
    /// use semantic_version::{Level, SemanticVersion};
    ///
    /// let version = SemanticVersion::parse("1.2.3+build.7").unwrap();
    /// assert_eq!("2.0.0", version.next(Level::Major).unwrap().to_string());
    /// assert_eq!("1.3.0", version.next(Level::Minor).unwrap().to_string());
    /// assert_eq!("1.2.4", version.next(Level::Patch).unwrap().to_string());
    ///
    /// let rc = SemanticVersion::parse("2.0.0-rc.1").unwrap();
    /// assert_eq!("2.0.0", rc.next(Level::Major).unwrap().to_string());
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns [`VersionError::Overflow`] if the value at `level` is already `u32::MAX`.
    pub fn next(&self, level: Level) -> Result<Self, VersionError> {
        let promotes = self.is_pre_release()
            && match level {
                Level::Major => self.minor == 0 && self.patch == 0,
                Level::Minor => self.patch == 0,
                Level::Patch => true,
            };
        if promotes {
            return Ok(self.core());
        }

        let incr = |value: u32| value.checked_add(1).ok_or(VersionError::Overflow { level });
        let next = match level {
            Level::Major => Self::new(incr(self.major)?, 0, 0),
            Level::Minor => Self::new(self.major, incr(self.minor)?, 0),
            Level::Patch => Self::new(self.major, self.minor, incr(self.patch)?),
        };
        Ok(next)
    }

    /// Returns a [`Display`]able view of this version that renders the fields selected by
    /// `mode`.
    pub fn render(&self, mode: FormatMode) -> Rendered<'_> {
        Rendered::new(self, mode)
    }

    /// Renders this version with a format code: `"0"` (core), `"1"` (core and pre-release),
    /// `"2"` (core and build metadata), or `"3"` (everything). `None` means `"3"`.
    ///
    /// ```
    /// use semantic_version::SemanticVersion;
    ///
    /// let version = SemanticVersion::parse("1.2.3-alpha.1+build.5").unwrap();
    /// assert_eq!("1.2.3", version.to_string_with(Some("0")).unwrap());
    /// assert_eq!("1.2.3-alpha.1", version.to_string_with(Some("1")).unwrap());
    /// assert_eq!("1.2.3+build.5", version.to_string_with(Some("2")).unwrap());
    /// assert_eq!("1.2.3-alpha.1+build.5", version.to_string_with(None).unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns [`ArgumentError::UnknownFormatCode`] for any other code.
    pub fn to_string_with(&self, code: Option<&str>) -> Result<String, ArgumentError> {
        let mode = FormatMode::from_code(code)?;
        Ok(self.render(mode).to_string())
    }

    /// Compares this version to `other` by precedence and returns `-1`, `0`, or `1`.
    pub fn compare(&self, other: &Self) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Compares this version to a value of unknown type.
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use semantic_version::SemanticVersion;
    ///
    /// let version = SemanticVersion::new(1, 0, 0);
    /// assert_eq!(Ok(Ordering::Greater), version.compare_any(&SemanticVersion::EMPTY));
    /// assert!(version.compare_any(&"1.0.0").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns [`ArgumentError::NotASemanticVersion`] if `other` is not a [`SemanticVersion`].
    pub fn compare_any(&self, other: &dyn Any) -> Result<Ordering, ArgumentError> {
        other
            .downcast_ref::<Self>()
            .map(|other| self.cmp(other))
            .ok_or(ArgumentError::NotASemanticVersion {
                type_name: "non-semantic version value",
            })
    }

    /// Like [`Ord::cmp`], but versions of equal precedence are further ordered by their build
    /// metadata, compared identifier by identifier like pre-release identifiers. This gives a
    /// deterministic order when sorting, but it is not SemVer precedence.
    pub fn cmp_including_build(&self, other: &Self) -> Ordering {
        self.cmp(other)
            .then_with(|| compare_identifier_lists(&self.build_metadata, &other.build_metadata))
    }
}

fn validate_identifiers<I, S>(
    identifiers: I,
    kind: IdentifierKind,
) -> Result<Vec<String>, ArgumentError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    identifiers
        .into_iter()
        .map(|identifier| {
            let identifier = identifier.into();
            if is_valid_identifier(&identifier) {
                Ok(identifier)
            } else {
                Err(ArgumentError::InvalidIdentifier { identifier, kind })
            }
        })
        .collect()
}

/// Compares identifier lists pairwise. If one list is a prefix of the other, the longer one is
/// greater.
fn compare_identifier_lists(a: &[String], b: &[String]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(a, b)| compare_identifiers(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

impl Default for SemanticVersion {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PartialEq for SemanticVersion {
    /// Versions are equal when their cores and pre-release identifiers are equal. Build metadata
    /// is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release == other.pre_release
    }
}

impl Eq for SemanticVersion {}

impl Hash for SemanticVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // must agree with `eq`, so no build metadata
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemanticVersion {
    /// Orders versions by SemVer 2.0 precedence.
    ///
    /// - The core values are compared numerically, major first.
    /// - A version without pre-release identifiers is greater than one with them.
    /// - Otherwise, pre-release identifiers are compared pairwise: numeric identifiers by value,
    ///   alphanumeric ones by their bytes, and numeric ones precede alphanumeric ones. If all
    ///   shared identifiers are equal, the version with more identifiers is greater.
    ///
    /// Build metadata is ignored.
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(
                || match (self.pre_release.is_empty(), other.pre_release.is_empty()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => {
                        compare_identifier_lists(&self.pre_release, &other.pre_release)
                    }
                },
            )
    }
}

impl Display for SemanticVersion {
    /// Renders every field, like [`FormatMode::Full`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.render(FormatMode::Full), f)
    }
}

impl FromStr for SemanticVersion {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SemanticVersion {
    type Error = FormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rstest::*;
    use std::collections::hash_map::DefaultHasher;

    fn v(version_str: &str) -> SemanticVersion {
        SemanticVersion::parse(version_str).unwrap()
    }

    fn hash_of(version: &SemanticVersion) -> u64 {
        let mut hasher = DefaultHasher::new();
        version.hash(&mut hasher);
        hasher.finish()
    }

    /// Versions in strictly increasing precedence, including the example chain from SemVer 2.0
    /// §11.
    #[fixture]
    fn ascending() -> Vec<SemanticVersion> {
        [
            "0.0.0-0",
            "0.0.0",
            "0.0.1",
            "0.1.0",
            "0.9.9",
            "1.0.0-0.3.7",
            "1.0.0-1",
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0-x.7.z.92",
            "1.0.0",
            "1.0.1",
            "1.2.0",
            "1.10.0",
            "2.0.0",
            "10.0.0",
            "4294967295.4294967295.4294967295",
        ]
        .into_iter()
        .map(v)
        .collect()
    }

    #[test]
    fn test_parse_eq_new() {
        assert_eq!(SemanticVersion::new(1, 2, 3), v("1.2.3"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(v("0.0.0"), SemanticVersion::EMPTY);
        assert_eq!(SemanticVersion::EMPTY, SemanticVersion::default());
        assert!(SemanticVersion::EMPTY.is_empty());
        assert!(v("0.0.0+build").is_empty());
        assert!(!v("0.0.0-alpha").is_empty());
        assert!(!v("0.0.1").is_empty());
        assert_eq!("0.0.0", SemanticVersion::EMPTY.to_string());
    }

    #[rstest]
    fn test_ascending_order(ascending: Vec<SemanticVersion>) {
        for (a, b) in ascending.iter().tuple_windows() {
            assert!(a < b, "{a} < {b}");
            assert!(b > a, "{b} > {a}");
            assert_eq!(-1, a.compare(b), "{a} vs {b}");
            assert_eq!(1, b.compare(a), "{b} vs {a}");
        }
    }

    #[rstest]
    fn test_total_and_transitive(ascending: Vec<SemanticVersion>) {
        // exactly one of <, ==, > holds for every pair
        for (a, b) in ascending.iter().cartesian_product(ascending.iter()) {
            let holds = [a < b, a == b, a > b];
            assert_eq!(1, holds.iter().filter(|h| **h).count(), "{a} vs {b}");
        }
        for (a, b, c) in ascending.iter().tuple_combinations() {
            assert!(a < b && b < c && a < c, "{a} < {b} < {c}");
        }
    }

    #[rstest]
    fn test_sort_shuffled(ascending: Vec<SemanticVersion>) {
        let mut shuffled: Vec<_> = ascending.iter().rev().cloned().collect();
        shuffled.rotate_left(7);
        shuffled.sort();
        assert_eq!(ascending, shuffled);
    }

    #[test]
    fn test_scenarios() {
        let pre = |ids: &[&str]| SemanticVersion::with_pre_release(1, 0, 0, ids.to_vec()).unwrap();
        let one = 1.to_string();

        // pre-release precedes release
        assert!(pre(&["alpha"]) < SemanticVersion::new(1, 0, 0));
        // numeric precedes alphanumeric
        assert!(pre(&["1"]) < pre(&["alpha"]));
        // prefix precedes longer list
        assert!(pre(&["alpha"]) < pre(&["alpha", "1"]));
        // numeric `1` precedes alphanumeric `beta`
        assert!(pre(&["alpha", one.as_str()]).compare(&pre(&["alpha", "beta"])) < 0);
        assert!(SemanticVersion::new(1, 2, 0).compare(&SemanticVersion::new(2, 0, 0)) < 0);
    }

    #[test]
    fn test_numeric_identifiers_by_value() {
        assert!(v("1.0.0-2") < v("1.0.0-10"));
        assert!(v("1.0.0-rc.9") < v("1.0.0-rc.10"));
        assert!(
            v("1.0.0-99999999999999999999999") < v("1.0.0-100000000000000000000000"),
            "identifiers larger than u64 still compare by value"
        );
    }

    #[test]
    fn test_metadata_irrelevance() {
        let a = SemanticVersion::with_parts(1, 2, 3, ["rc", "1"], ["build", "1"]).unwrap();
        let b = SemanticVersion::with_parts(1, 2, 3, ["rc", "1"], ["build", "2"]).unwrap();
        let c = SemanticVersion::with_pre_release(1, 2, 3, ["rc", "1"]).unwrap();

        for (x, y) in [(&a, &b), (&a, &c), (&b, &c)] {
            assert_eq!(0, x.compare(y));
            assert_eq!(Ordering::Equal, x.cmp(y));
            assert_eq!(x, y);
            assert_eq!(hash_of(x), hash_of(y));
        }
    }

    #[test]
    fn test_cmp_including_build() {
        let a = v("1.0.0+build.1");
        let b = v("1.0.0+build.2");
        let c = v("1.0.0");
        assert_eq!(Ordering::Less, a.cmp_including_build(&b));
        assert_eq!(Ordering::Greater, a.cmp_including_build(&c));
        assert_eq!(Ordering::Less, v("0.9.0+zzz").cmp_including_build(&c));
    }

    #[test]
    fn test_ne_and_hash() {
        let args = [
            ("1.2.3", "1.2.4"),
            ("1.2.3", "1.2.3-0"),
            ("1.2.3-alpha", "1.2.3-alpha.0"),
            ("1.2.3-alpha.beta", "1.2.3-beta.alpha"),
        ];
        for (a, b) in args {
            assert_ne!(v(a), v(b));
        }

        assert_eq!(hash_of(&v("1.2.3-alpha")), hash_of(&v("1.2.3-alpha+x.y")));
    }

    #[test]
    fn test_round_trip() {
        let args = [
            "0.0.0",
            "1.2.3",
            "1.2.3-alpha",
            "1.2.3-alpha.1+build.5",
            "1.2.3+build",
            "1.0.0-x-y-z.--+a-b.0",
        ];
        for version_str in args {
            let version = v(version_str);
            let rendered = version.to_string();
            assert_eq!(version_str, rendered);

            let reparsed = v(&rendered);
            assert_eq!(version, reparsed);
            assert_eq!(version.build_metadata(), reparsed.build_metadata());
        }

        let built = SemanticVersion::with_parts(7, 8, 9, ["beta", "3"], ["exp", "sha", "5114f85"])
            .unwrap();
        assert_eq!(built, v(&built.to_string()));
    }

    #[test]
    fn test_with_parts_invalid() {
        let args = [
            (vec!["01"], vec![], "01", IdentifierKind::PreRelease),
            (vec!["alpha", ""], vec![], "", IdentifierKind::PreRelease),
            (vec!["a.b"], vec![], "a.b", IdentifierKind::PreRelease),
            (vec![], vec!["ok", "no+"], "no+", IdentifierKind::BuildMetadata),
            (vec![], vec!["007"], "007", IdentifierKind::BuildMetadata),
        ];

        for (pre, build, identifier, kind) in args {
            let actual = SemanticVersion::with_parts(1, 0, 0, pre, build);
            assert_eq!(
                Err(ArgumentError::InvalidIdentifier {
                    identifier: identifier.to_string(),
                    kind,
                }),
                actual
            );
        }
    }

    #[test]
    fn test_with_parts_owned_strings() {
        let pre = vec![String::from("rc"), 2.to_string()];
        let version = SemanticVersion::with_pre_release(3, 0, 0, pre).unwrap();
        assert_eq!("3.0.0-rc.2", version.to_string());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = v("1.2.3-alpha.1+build");
        let cloned = original.clone();
        assert_eq!(original, cloned);
        assert_ne!(
            original.pre_release().as_ptr(),
            cloned.pre_release().as_ptr()
        );
        assert_eq!(original.build_metadata(), cloned.build_metadata());
    }

    #[test]
    fn test_predicates() {
        let version = v("1.2.3-rc.1+build");
        assert!(version.is_pre_release());
        assert!(version.has_build_metadata());
        assert!(!v("1.2.3").is_pre_release());
        assert!(!v("1.2.3").has_build_metadata());

        assert!(version.is_patch_compatible(&v("1.2.9")));
        assert!(!version.is_patch_compatible(&v("1.3.3")));
        assert!(version.is_minor_compatible(&v("1.9.0")));
        assert!(!version.is_minor_compatible(&v("2.2.3")));
        assert!(version.is_compatible_at(&v("1.2.3"), Level::Patch));
        assert!(!version.is_compatible_at(&v("1.2.4"), Level::Patch));
    }

    #[test]
    fn test_conversions() {
        let version = v("3.4.5-rc+meta");
        assert_eq!((3, 4), version.to_major_minor());
        assert_eq!(v("3.4.0"), SemanticVersion::from_major_minor(3, 4));
        assert_eq!("3.4.5", version.core().to_string());
        assert_eq!("3.4.5-rc", version.without_build_metadata().to_string());
        assert_eq!(Ok(v("3.4.5")), "3.4.5".parse::<SemanticVersion>());
        assert_eq!(Ok(v("3.4.5")), SemanticVersion::try_from("3.4.5"));
    }

    #[test]
    fn test_try_parse() {
        assert_eq!(None, SemanticVersion::try_parse("0.0.0."));
        assert_eq!(None, SemanticVersion::try_parse(""));
        assert_eq!(None, SemanticVersion::try_parse("1.0.0-01"));
        assert_eq!(Some(v("1.0.0-1")), SemanticVersion::try_parse("1.0.0-1"));
    }

    #[test]
    fn test_next() {
        let args = [
            ("1.2.3", Level::Major, "2.0.0"),
            ("1.2.3", Level::Minor, "1.3.0"),
            ("1.2.3", Level::Patch, "1.2.4"),
            ("1.2.3+build", Level::Patch, "1.2.4"),
            ("1.2.3-rc.1", Level::Patch, "1.2.3"),
            ("1.2.3-rc.1", Level::Minor, "1.3.0"),
            ("1.2.3-rc.1", Level::Major, "2.0.0"),
            ("1.2.0-rc.1", Level::Minor, "1.2.0"),
            ("1.2.0-rc.1", Level::Major, "2.0.0"),
            ("2.0.0-rc.1", Level::Major, "2.0.0"),
            (
                "4294967295.4294967295.4294967295-rc",
                Level::Patch,
                "4294967295.4294967295.4294967295",
            ),
        ];

        for (version_str, level, expected) in args {
            let version = v(version_str);
            let next = version.next(level).unwrap();
            assert_eq!(expected, next.to_string(), "{version_str} {level}");
            assert!(version < next);
        }
    }

    #[test]
    fn test_next_overflow() {
        let args = [
            ("4294967295.0.0", Level::Major),
            ("0.4294967295.0", Level::Minor),
            ("0.0.4294967295", Level::Patch),
        ];
        for (version_str, level) in args {
            assert_eq!(
                Err(VersionError::Overflow { level }),
                v(version_str).next(level)
            );
        }
    }

    #[test]
    fn test_compare_any() {
        let version = v("1.0.0");
        assert_eq!(Ok(Ordering::Equal), version.compare_any(&v("1.0.0+x")));
        assert_eq!(Ok(Ordering::Less), version.compare_any(&v("1.0.1")));
        assert!(matches!(
            version.compare_any(&42u32),
            Err(ArgumentError::NotASemanticVersion { .. })
        ));
        assert!(matches!(
            version.compare_any(&String::from("1.0.0")),
            Err(ArgumentError::NotASemanticVersion { .. })
        ));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SemanticVersion>();
    }
}
