//! `ShareIndex` newtype for share recovery

use anyhow::{Context, Result, bail};

/// Share index: the x coordinate a share was evaluated at
///
/// In share documents the index is the object key of each share, so it is
/// usually built with [`ShareIndex::from_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareIndex(u64);

impl ShareIndex {
    /// Creates a new share index
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parses a share index from a document key
    ///
    /// # Errors
    /// Returns an error if the key is not a plain decimal integer
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharecrack::domain::ShareIndex;
    ///
    /// let index = ShareIndex::from_key("10").unwrap();
    /// assert_eq!(*index, 10);
    ///
    /// assert!(ShareIndex::from_key("ten").is_err());
    /// assert!(ShareIndex::from_key(" 3").is_err());
    /// assert!(ShareIndex::from_key("").is_err());
    /// ```
    pub fn from_key(key: &str) -> Result<Self> {
        if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
            bail!("Share key '{key}' is not a decimal index");
        }
        let value = key
            .parse()
            .with_context(|| format!("Share key '{key}' does not fit in 64 bits"))?;
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u64;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ShareIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
