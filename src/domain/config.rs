//! Configuration validation for share recovery

use anyhow::{Result, bail};

use super::{ShareCount, Threshold};

/// The `k` and `n` a share document declares in its `keys` object
///
/// A degree-(k-1) polynomial needs k shares, so a document whose `k`
/// exceeds its own `n` can never be recovered and is rejected before any
/// share is decoded. Whether the document really holds `n` shares is
/// checked later, against the shares themselves.
#[derive(Debug, Clone, Copy)]
pub struct RecoveryConfig {
    threshold: Threshold,
    share_count: ShareCount,
}

impl RecoveryConfig {
    /// Creates a new recovery configuration
    ///
    /// # Errors
    /// Returns an error if threshold exceeds share count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharecrack::domain::{RecoveryConfig, Threshold, ShareCount};
    ///
    /// let config = RecoveryConfig::new(
    ///     Threshold::new(3).unwrap(),
    ///     ShareCount::new(4).unwrap()
    /// ).unwrap();
    ///
    /// assert_eq!(*config.threshold(), 3);
    /// assert_eq!(*config.share_count(), 4);
    ///
    /// // Invalid: threshold > share_count
    /// let result = RecoveryConfig::new(
    ///     Threshold::new(5).unwrap(),
    ///     ShareCount::new(3).unwrap()
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(threshold: Threshold, share_count: ShareCount) -> Result<Self> {
        if *threshold > *share_count {
            bail!(
                "Threshold {} cannot exceed share count {}",
                *threshold,
                *share_count
            );
        }
        Ok(Self {
            threshold,
            share_count,
        })
    }

    /// Gets the threshold value
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the share count value
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }
}
