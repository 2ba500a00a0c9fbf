//! `ShareCount` newtype for share recovery

use anyhow::{Result, bail};

/// Declared total number of shares n (n >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(usize);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: usize = 1;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns an error if count is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharecrack::domain::ShareCount;
    ///
    /// let count = ShareCount::new(10).unwrap();
    /// assert_eq!(*count, 10);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value < Self::MIN {
            bail!("Share count must be at least 1");
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
