//! `Base` newtype for encoded share values

use std::str::FromStr;

use crate::error::{Error, Result};

/// Numeric base of an encoded share value (2..=36)
///
/// Digits above 9 are the letters a–z, so 36 is the largest base a
/// single alphanumeric character can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base(u32);

impl Base {
    /// Smallest supported base
    pub const MIN: u32 = 2;

    /// Largest supported base
    pub const MAX: u32 = 36;

    /// Creates a new base
    ///
    /// # Errors
    /// Returns [`Error::InvalidBase`] if the value is outside 2..=36
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharecrack::domain::Base;
    ///
    /// let hex = Base::new(16).unwrap();
    /// assert_eq!(*hex, 16);
    ///
    /// assert!(Base::new(1).is_err());
    /// assert!(Base::new(37).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(Error::InvalidBase { base: value });
        }
        Ok(Self(value))
    }
}

impl FromStr for Base {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let value: u32 = s
            .parse()
            .map_err(|_| anyhow::anyhow!("'{s}' is not a valid base"))?;
        Ok(Self::new(value)?)
    }
}

impl std::ops::Deref for Base {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
