//! # fisi-common
//!
//! Plumbing shared by the calculation engines and the command line front end:
//!
//! * **[`locale`]**: number punctuation (`1.234,5`) in both directions.
//! * **[`error`]**: the parse error raised for non-numeric text.
//! * **[`config`]**: output settings the front end collects from its flags.

pub mod config;
pub mod error;
pub mod locale;

pub use error::{NumberKind, ParseError};
