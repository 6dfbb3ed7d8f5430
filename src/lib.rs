//! # Twine Shocks
//!
//! Oblique shock relations for [Twine](https://github.com/isentropic-dev/twine),
//! comparing the exact supersonic jump conditions with their hypersonic limits.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] adapters over the shock relations.
//! - [`support`]: The relations themselves, grid evaluation, error surfaces,
//!   and the numeric constraints used to validate inputs.
//!
//! Shock angles passed to the formula functions and grids are in degrees.
//! [`support::shock::FlowState`] carries the angle as a [`uom`] quantity and
//! converts it explicitly.

pub mod models;
pub mod support;
