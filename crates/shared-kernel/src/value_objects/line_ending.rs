// crates/shared-kernel/src/value_objects/line_ending.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// The two line-ending styles a region can be split and rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`, also the fallback when a region has no line break at all.
    #[default]
    Crlf,
}

impl LineEnding {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.as_str().len()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        false
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Lf => "LF",
            Self::Crlf => "CRLF",
        }
    }
}

impl AsRef<str> for LineEnding {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
