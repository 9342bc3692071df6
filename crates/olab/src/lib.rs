//! olab: MATLAB/GNU Octave conveniences for Rust.
//!
//! This crate fills a few holes left when moving MATLAB habits onto
//! `ndarray`: a struct-like [`Record`] with MATLAB construction rules, a
//! `numel` that works on anything, and `hstack`/`vstack`/`flatten` helpers.
//!
//! Records hold dynamically typed [`Value`]s and can also be built from a
//! JSON argument object (see [`config::RecordArgs`]).
pub mod config;
pub mod error;
pub mod matrix;
pub mod record;
pub mod utils;
pub mod value;

pub use error::RecordError;
pub use matrix::{flatten, hstack, numel, vstack, Numel};
pub use record::{fieldnames, Record};
pub use value::Value;
