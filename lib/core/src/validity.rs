use std::fmt::{Display, Formatter};
use std::ops;

/// Four-valued truth domain.
///
/// `Unknown` is the bottom, `True`/`False` are concrete, and `Invalid` marks a
/// contradiction. A cell only ever moves up: `Unknown` to a concrete value,
/// and anything to `Invalid`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Validity {
    True,
    False,
    #[default]
    Unknown,
    Invalid,
}

impl Validity {
    pub const fn is_known(self) -> bool {
        !matches!(self, Validity::Unknown)
    }

    pub const fn is_concrete(self) -> bool {
        matches!(self, Validity::True | Validity::False)
    }

    pub const fn negate(self) -> Self {
        use Validity::*;
        match self {
            True => False,
            False => True,
            v => v,
        }
    }

    /// False dominates Invalid dominates Unknown dominates True.
    pub fn and(self, other: Self) -> Self {
        use Validity::*;
        if self == False || other == False {
            False
        } else if self == Invalid || other == Invalid {
            Invalid
        } else if self == Unknown || other == Unknown {
            Unknown
        } else {
            True
        }
    }

    /// True dominates Unknown dominates Invalid dominates False.
    ///
    /// Note: this is *not* the De Morgan dual of [`Validity::and`], since an
    /// unknown operand outranks a contradictory one here.
    pub fn or(self, other: Self) -> Self {
        use Validity::*;
        if self == True || other == True {
            True
        } else if self == Unknown || other == Unknown {
            Unknown
        } else if self == Invalid || other == Invalid {
            Invalid
        } else {
            False
        }
    }
}

impl From<bool> for Validity {
    fn from(b: bool) -> Self {
        if b {
            Validity::True
        } else {
            Validity::False
        }
    }
}

impl Display for Validity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use Validity::*;
        if f.alternate() {
            match self {
                True => write!(f, "T"),
                False => write!(f, "F"),
                Unknown => write!(f, "?"),
                Invalid => write!(f, "!"),
            }
        } else {
            match self {
                True => write!(f, "TRUE"),
                False => write!(f, "FALSE"),
                Unknown => write!(f, "UNKNOWN"),
                Invalid => write!(f, "INVALID"),
            }
        }
    }
}

impl ops::Not for Validity {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl ops::BitAnd for Validity {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl ops::BitOr for Validity {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}
