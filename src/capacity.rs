use core::{
    fmt::{self, Formatter, Display},
    num::NonZeroUsize,
};
use crate::Error;

/// An upper bound on the number of elements a data structure will accept.
///
/// A limit of zero means "unlimited", which is also the default. Every structure checks its limit before wrapping a new value, so a rejected insertion leaves the structure untouched.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Capacity(Option<NonZeroUsize>);
impl Capacity {
    /// No limit.
    pub const UNLIMITED: Self = Self(None);

    /// Creates a limit of `limit` elements; `0` means unlimited.
    #[inline(always)]
    pub const fn new(limit: usize) -> Self {
        Self(NonZeroUsize::new(limit))
    }
    /// Returns the limit, or `0` if unlimited.
    #[inline(always)]
    pub fn get(self) -> usize {
        self.0.map_or(0, NonZeroUsize::get)
    }
    /// Returns `true` if there is no limit.
    #[inline(always)]
    pub const fn is_unlimited(self) -> bool {
        self.0.is_none()
    }
    /// Returns `true` if a structure currently holding `len` elements can take one more.
    #[inline]
    pub fn admits(self, len: usize) -> bool {
        self.0.map_or(true, |limit| len < limit.get())
    }
    /// Checks whether a structure currently holding `len` elements can take one more.
    ///
    /// # Errors
    /// Fails with [`Error::CapacityExceeded`] if the structure is full.
    ///
    /// [`Error::CapacityExceeded`]: enum.Error.html#variant.CapacityExceeded " "
    #[inline]
    pub fn check(self, len: usize) -> Result<(), Error> {
        if self.admits(len) {
            Ok(())
        } else {
            log::debug!("rejected insertion: capacity of {} elements reached", self);
            Err(Error::CapacityExceeded { capacity: self.get() })
        }
    }
    /// Returns the tighter of two limits.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        match (self.0, other.0) {
            (Some(a), Some(b)) => Self(Some(a.min(b))),
            (a, b) => Self(a.or(b)),
        }
    }
}
impl From<usize> for Capacity {
    #[inline(always)]
    fn from(limit: usize) -> Self {
        Self::new(limit)
    }
}
impl Display for Capacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(limit) => Display::fmt(&limit, f),
            None => f.pad("unlimited"),
        }
    }
}
