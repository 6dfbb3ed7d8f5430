//! Aerodynamics models.

mod oblique_shock;

pub use oblique_shock::{ObliqueShock, ShockComparison};
