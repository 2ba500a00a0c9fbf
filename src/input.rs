//! JSON share documents
//!
//! A document holds the reserved `keys` object with the declared share count
//! `n` and threshold `k`. Every other top-level field is a share keyed by its
//! index:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" },
//!   "3": { "base": "10", "value": "12" },
//!   "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! Bases may be written as strings or as integers.

use std::collections::BTreeMap;
use std::io::Read;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::domain::{Base, RecoveryConfig, ShareCount, ShareIndex, Threshold};
use crate::interpolate::Point;

/// Declared share count and threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

/// Base as written in a document: `"16"` or `16`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawBase {
    Number(u32),
    Text(String),
}

/// A share exactly as it appears in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawShare {
    pub base: RawBase,
    pub value: String,
}

/// A parsed share document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareDocument {
    pub keys: Keys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, RawShare>,
}

/// A validated share, ready to decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    /// Key the share was stored under, kept for error messages
    pub key: String,
    pub index: ShareIndex,
    pub base: Base,
    pub value: String,
}

impl Share {
    /// Decodes the share value into a point on the polynomial
    ///
    /// # Errors
    /// Returns the decoder error if the value is not valid in the share's base
    pub fn to_point(&self) -> crate::Result<Point> {
        let y = codec::decode(&self.value, *self.base)?;
        Ok(Point::new(*self.index, y))
    }
}

impl ShareDocument {
    /// Parses a document from a JSON string
    ///
    /// # Errors
    /// Returns an error if the JSON does not have the document shape
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse share document")
    }

    /// Parses a document from a reader
    ///
    /// # Errors
    /// Returns an error if reading fails or the JSON does not have the document shape
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        serde_json::from_reader(reader).context("Failed to parse share document")
    }

    /// Validates the declared threshold and share count
    ///
    /// # Errors
    /// Returns an error if k is 0, n is 0, or k exceeds n
    pub fn config(&self) -> Result<RecoveryConfig> {
        let threshold = Threshold::new(self.keys.k)?;
        let share_count = ShareCount::new(self.keys.n)?;
        RecoveryConfig::new(threshold, share_count)
    }

    /// Returns the shares ordered by ascending numeric index
    ///
    /// Ordering is numeric, so share "10" comes after share "9".
    ///
    /// # Errors
    /// Returns an error if a key is not a decimal index, two keys name the
    /// same index, or a base is unsupported
    pub fn shares(&self) -> Result<Vec<Share>> {
        let mut shares = self
            .shares
            .iter()
            .map(|(key, raw)| {
                validate_share(key, raw).with_context(|| format!("Invalid share '{key}'"))
            })
            .collect::<Result<Vec<_>>>()?;

        shares.sort_by_key(|share| share.index);

        if let Some(pair) = shares.windows(2).find(|pair| pair[0].index == pair[1].index) {
            bail!(
                "Share keys '{}' and '{}' both name index {}",
                pair[0].key,
                pair[1].key,
                pair[0].index
            );
        }

        Ok(shares)
    }
}

fn validate_share(key: &str, raw: &RawShare) -> Result<Share> {
    let index = ShareIndex::from_key(key)?;
    let base = match &raw.base {
        RawBase::Number(base) => Base::new(*base)?,
        RawBase::Text(base) => base.parse()?,
    };
    Ok(Share {
        key: key.to_string(),
        index,
        base,
        value: raw.value.clone(),
    })
}
