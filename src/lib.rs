//! Recover the constant term of a polynomial from base-encoded shares
//!
//! The pipeline is [`codec::decode`] for every share value followed by
//! [`interpolate::interpolate_at_zero`] over the decoded points. Both are
//! pure functions. [`commands::recover_secret`] drives them from a parsed
//! [`input::ShareDocument`].

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod input;
pub mod interpolate;

pub use error::{Error, Result};
