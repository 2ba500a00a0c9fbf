//! Threshold newtype for share recovery

use anyhow::Result;

/// Threshold k: the number of shares needed to reconstruct the secret
///
/// Invariant: threshold >= 1 (enforced at construction).
/// A degree-(k-1) polynomial is pinned down by exactly k points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(usize);

impl Threshold {
    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns an error if the threshold is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharecrack::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// // Invalid: at least one point is always needed
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value == 0 {
            anyhow::bail!("Threshold must be at least 1 (got {value})");
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
