//! Domain types for share recovery
//!
//! This module contains validated newtypes and configuration:
//! - [`Base`] - Numeric base of an encoded share value (2..=36)
//! - [`Threshold`] - Shares required for reconstruction (k >= 1)
//! - [`ShareIndex`] - Share identifier, used as the x coordinate
//! - [`ShareCount`] - Declared total number of shares (n >= 1)
//! - [`RecoveryConfig`] - Validated threshold and share count pair

mod base;
mod config;
mod share_count;
mod share_index;
mod threshold;

pub use base::Base;
pub use config::RecoveryConfig;
pub use share_count::ShareCount;
pub use share_index::ShareIndex;
pub use threshold::Threshold;
