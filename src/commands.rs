use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use num_bigint::{BigInt, BigUint};
use serde::{Serialize, Serializer};

use crate::codec;
use crate::domain::Base;
use crate::error::Error;
use crate::input::{Share, ShareDocument};
use crate::interpolate::{Point, interpolate_at, interpolate_at_zero};

/// Options for [`recover_secret`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RecoverOptions {
    /// Check the shares beyond the threshold against the recovered polynomial
    pub verify: bool,
}

/// Outcome of a successful recovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recovery {
    /// Constant term of the polynomial
    #[serde(serialize_with = "as_decimal")]
    pub secret: BigInt,
    /// Indices of the shares that were interpolated
    pub points_used: Vec<u64>,
    /// Indices of extra shares that do not lie on the polynomial
    ///
    /// Always empty unless [`RecoverOptions::verify`] was set.
    pub inconsistent: Vec<u64>,
}

/// A [`Recovery`] tagged with the document it came from, for line-per-document JSON output
#[derive(Debug, Serialize)]
pub struct SourcedRecovery<'a> {
    pub source: &'a str,
    #[serde(flatten)]
    pub recovery: &'a Recovery,
}

/// Per-document results of [`recover_all`], in input order
#[derive(Debug)]
pub struct BatchOutcome {
    pub results: Vec<(PathBuf, Result<Recovery>)>,
    /// Number of documents that failed to load or recover
    pub failed: usize,
}

fn as_decimal<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Recover the secret from a share document
///
/// Shares are ordered by numeric index and the first `k` are interpolated.
/// The remaining shares are ignored unless `options.verify` is set, in which
/// case each is checked against the recovered polynomial.
///
/// # Errors
/// Returns an error if the declared keys are invalid, fewer than `k` shares
/// are present, any used share fails to decode, or interpolation fails
pub fn recover_secret(document: &ShareDocument, options: RecoverOptions) -> Result<Recovery> {
    let config = document.config()?;
    let shares = document.shares()?;

    if shares.len() != *config.share_count() {
        warn!(
            target: "sharecrack::recover",
            "Document declares n = {} but holds {} shares",
            *config.share_count(),
            shares.len()
        );
    }

    let threshold = *config.threshold();
    if shares.len() < threshold {
        return Err(Error::InsufficientPoints {
            needed: threshold,
            available: shares.len(),
        }
        .into());
    }

    let (selected, remaining) = shares.split_at(threshold);
    let points = selected
        .iter()
        .map(decode_point)
        .collect::<Result<Vec<_>>>()?;

    let secret = interpolate_at_zero(&points).context("Failed to interpolate secret")?;
    info!(target: "sharecrack::recover", "Recovered secret {secret} from {threshold} shares");

    let inconsistent = if options.verify {
        find_inconsistent(&points, remaining)?
    } else {
        Vec::new()
    };

    Ok(Recovery {
        secret,
        points_used: selected.iter().map(|share| *share.index).collect(),
        inconsistent,
    })
}

/// Load a share document from a JSON file
///
/// # Errors
/// Returns an error if the file cannot be opened or parsed
pub fn load_document(path: &Path) -> Result<ShareDocument> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    ShareDocument::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Load and recover every document in `paths`
///
/// Each document is solved on its own; a failure is logged and counted, and
/// the remaining documents still run.
pub fn recover_all(paths: &[PathBuf], options: RecoverOptions) -> BatchOutcome {
    let mut failed = 0;
    let results = paths
        .iter()
        .map(|path| {
            let outcome =
                load_document(path).and_then(|document| recover_secret(&document, options));
            if let Err(e) = &outcome {
                error!(target: "sharecrack::recover", "{}: {e:#}", path.display());
                failed += 1;
            }
            (path.clone(), outcome)
        })
        .collect();

    BatchOutcome { results, failed }
}

/// Decode a single share value
///
/// # Errors
/// Returns an error if the value is not valid in `base`
pub fn decode_share(value: &str, base: Base) -> Result<BigUint> {
    codec::decode(value, *base).with_context(|| format!("Failed to decode '{value}'"))
}

fn decode_point(share: &Share) -> Result<Point> {
    let point = share
        .to_point()
        .with_context(|| format!("Failed to decode share '{}'", share.key))?;
    debug!(
        target: "sharecrack::recover",
        "Point ({}, {}) decoded from base {}",
        point.x,
        point.y,
        share.base
    );
    Ok(point)
}

/// Indices of `shares` that the polynomial through `points` does not pass through
fn find_inconsistent(points: &[Point], shares: &[Share]) -> Result<Vec<u64>> {
    let mut inconsistent = Vec::new();

    for share in shares {
        let point = decode_point(share)?;
        let on_curve = match interpolate_at(points, &point.x) {
            Ok(expected) => expected == point.y,
            // Integer y can never equal a fractional value
            Err(Error::NonIntegralSecret) => false,
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to verify share '{}'", share.key));
            }
        };

        if on_curve {
            debug!(target: "sharecrack::verify", "Share '{}' is consistent", share.key);
        } else {
            warn!(
                target: "sharecrack::verify",
                "Share '{}' does not lie on the recovered polynomial",
                share.key
            );
            inconsistent.push(*share.index);
        }
    }

    Ok(inconsistent)
}
