use std::fmt;
#[cfg(feature="serde")]
use serde::{Serialize, Deserialize};

/// A totally ordered, discrete position type: every position except the
/// outermost two has exactly one successor and one predecessor.
///
/// This is what lets a tree turn the closed interval `[left, right]` into
/// the split points `left` and `right + 1`.
pub trait Discrete: Ord + Clone + fmt::Debug {
    /// The smallest representable position.
    const MIN: Self;
    /// The largest representable position.
    const MAX: Self;

    /// The position right after `self`, or `None` if `self` is [`Discrete::MAX`].
    fn successor(&self) -> Option<Self>;

    /// The position right before `self`, or `None` if `self` is [`Discrete::MIN`].
    fn predecessor(&self) -> Option<Self>;
}

macro_rules! impl_discrete {
    ($($t:ty),*) => {
        $(
            impl Discrete for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                fn successor(&self) -> Option<Self> {
                    self.checked_add(1)
                }

                fn predecessor(&self) -> Option<Self> {
                    self.checked_sub(1)
                }
            }
        )*
    };
}

impl_discrete!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// An integer extended with the two infinities.
///
/// The infinities are treated as ordinary points at the far ends of the
/// domain: `Finite(T::MAX)` is followed by `PosInfinity`, and `NegInfinity`
/// is followed by `Finite(T::MIN)`. A tree keyed by `Extended<T>` can then
/// be seeded with a single `[-∞, +∞]` node.
#[cfg_attr(feature="serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Extended<T> {
    /// `-∞`, below every finite value.
    NegInfinity,
    Finite(T),
    /// `+∞`, above every finite value.
    PosInfinity,
}

impl<T> Extended<T> {
    /// Returns `true` unless `self` is one of the infinities.
    pub fn is_finite(&self) -> bool {
        matches!(self, Extended::Finite(_))
    }

    /// Returns the finite value, if any.
    pub fn finite(&self) -> Option<&T> {
        match self {
            Extended::Finite(x) => Some(x),
            _ => None,
        }
    }
}

impl<T> From<T> for Extended<T> {
    fn from(value: T) -> Self {
        Extended::Finite(value)
    }
}

impl<T: Discrete> Discrete for Extended<T> {
    const MIN: Self = Extended::NegInfinity;
    const MAX: Self = Extended::PosInfinity;

    fn successor(&self) -> Option<Self> {
        match self {
            Extended::NegInfinity => Some(Extended::Finite(T::MIN)),
            Extended::Finite(x) => Some(x.successor().map_or(Extended::PosInfinity, Extended::Finite)),
            Extended::PosInfinity => None,
        }
    }

    fn predecessor(&self) -> Option<Self> {
        match self {
            Extended::NegInfinity => None,
            Extended::Finite(x) => Some(x.predecessor().map_or(Extended::NegInfinity, Extended::Finite)),
            Extended::PosInfinity => Some(Extended::Finite(T::MAX)),
        }
    }
}

impl<T> fmt::Display for Extended<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Extended::NegInfinity => write!(f, "-∞"),
            Extended::Finite(x) => write!(f, "{}", x),
            Extended::PosInfinity => write!(f, "+∞"),
        }
    }
}
