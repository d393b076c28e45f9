//! Feature standardization for tabular data and random sine waves on polar
//! surfaces.
//!
//! The two halves are independent:
//!
//! * [`data::standardize`] rescales selected columns of a [`data::model::Dataset`]
//!   to zero mean and unit variance.
//! * [`polar::plot_random_wave`] draws a random-frequency sine curve onto any
//!   [`polar::PolarSurface`] and reports the [`color::ColorToken`] it used.

pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod polar;

pub use error::{Error, Result};
