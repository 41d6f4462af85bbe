use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of YES answers at which the checkup recommends getting help.
pub const RESULTS_TRIGGER: usize = 1;

/// Final classification of a checkup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultType {
    #[serde(rename = "NEED_HELP_RESULT")]
    NeedHelp,
    #[serde(rename = "ALL_GOOD_RESULT")]
    AllGood,
}

impl ResultType {
    /// Classify a checkup from its YES answer count.
    #[must_use]
    pub fn from_yes_count(yes_count: usize) -> Self {
        if yes_count >= RESULTS_TRIGGER {
            Self::NeedHelp
        } else {
            Self::AllGood
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ResultType::NeedHelp => "NEED_HELP_RESULT",
            ResultType::AllGood => "ALL_GOOD_RESULT",
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
