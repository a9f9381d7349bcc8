use core::{
    cmp::Ordering,
    fmt::{self, Display},
};

/// A level of the core version: `major`, `minor`, or `patch`.
///
/// Levels are ordered by significance, so `Major > Minor > Patch`.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Level {
    /// The major level. It is greater than the minor and patch levels.
    Major,
    /// The minor level. It is less than the major level and greater than the patch level.
    Minor,
    /// The patch level. It is less than the major and minor levels.
    Patch,
}

impl Level {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Level::Major => "major",
            Level::Minor => "minor",
            Level::Patch => "patch",
        }
    }

    fn order_key(&self) -> u8 {
        match self {
            Level::Major => 0,
            Level::Minor => 1,
            Level::Patch => 2,
        }
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        // reverse it so e.g. major > minor
        other.order_key().cmp(&self.order_key())
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
