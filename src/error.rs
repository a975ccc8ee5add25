/// Caller-contract violations reported by [`crate::ChthollyTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A split position lies outside `[min, max]`.
    #[error("position is out of range")]
    PositionOutOfRange,
    /// A range with `left > right`.
    #[error("range is invalid")]
    InvalidRange,
    /// A range reaching below `min` or above `max`.
    #[error("range is out of bounds")]
    RangeOutOfBounds,
    /// Two consecutive seed intervals leave a gap or overlap.
    #[error("intervals are not contiguous")]
    Discontiguous,
    /// No seed interval was given.
    #[error("no intervals were given")]
    Empty,
}

pub type Result<T> = std::result::Result<T, Error>;
