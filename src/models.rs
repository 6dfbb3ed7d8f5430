//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! Each [`twine_core::Model`] implementation is a thin adapter that delegates
//! to the relations in [`crate::support`], so the same computation is available
//! both as plain functions and as a composable model.

pub mod aero;
