//! Shift labels and schedule snapshots.

use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Snapshot of a department schedule, keyed by staff identifier.
///
/// Always an owned copy. Mutating it never touches the department it came from.
pub type Schedule = BTreeMap<String, ShiftLabel>;

/// The three labels handed out by shift strategies, in rotation order.
pub const WORKING_SHIFTS: [ShiftLabel; 3] =
    [ShiftLabel::Morning, ShiftLabel::Afternoon, ShiftLabel::Night];

/// Name of a work period assigned to a staff member.
///
/// Serialized as its display string, so `ShiftLabel::Adjusted` travels as
/// `"Adjusted Schedule"` and unknown strings round-trip through
/// [`ShiftLabel::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum ShiftLabel {
    Unscheduled,
    Morning,
    Afternoon,
    Night,
    /// Placeholder written over a shift when its holder has pending leave.
    Adjusted,
    Custom(String),
}

impl ShiftLabel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unscheduled => "Unscheduled",
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Night => "Night",
            Self::Adjusted => "Adjusted Schedule",
            Self::Custom(label) => label,
        }
    }
}

impl fmt::Display for ShiftLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftLabel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Unscheduled" => Self::Unscheduled,
            "Morning" => Self::Morning,
            "Afternoon" => Self::Afternoon,
            "Night" => Self::Night,
            "Adjusted Schedule" => Self::Adjusted,
            other => Self::Custom(other.to_string()),
        })
    }
}

impl From<&str> for ShiftLabel {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(label) => label,
            Err(never) => match never {},
        }
    }
}
