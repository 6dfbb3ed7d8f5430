//! Oblique shock relations under supersonic and hypersonic approximations.
//!
//! # Overview
//!
//! Across an oblique shock at angle `β` the jump conditions depend only on the
//! normal Mach number `Mn = M·sin(β)`. The exact (supersonic) Rankine-Hugoniot
//! relations simplify as `Mn` grows large; this module evaluates both forms of
//! the pressure and density ratios and measures how far apart they are.
//!
//! The supersonic value is always measured against the hypersonic value, so the
//! hypersonic ratio is the denominator of every relative error.
//!
//! This module provides:
//!
//! - **Relations**: [`normal_mach`], [`supersonic_pressure_ratio`],
//!   [`hypersonic_pressure_ratio`], [`supersonic_density_ratio`],
//!   [`hypersonic_density_ratio`]
//! - **Errors**: [`absolute_error`], [`relative_error`], [`ErrorMetric`], and the
//!   composites in [`functional`]
//! - **Point evaluation**: [`FlowState`], [`RatioPair`]
//! - **Grid evaluation**: [`grid`], [`Grid`], [`ShockField`], [`ErrorSurface`]
//! - **Accuracy boundary**: [`threshold`]
//!
//! Formula functions take the shock angle in degrees and never fail: invalid
//! inputs produce non-physical values and a zero reference produces `NaN` or `∞`.
//!
//! # Example
//!
//! ```
//! use twine_shocks::support::shock::{GAMMA_AIR, functional, hypersonic_density_ratio};
//!
//! assert!((hypersonic_density_ratio(GAMMA_AIR) - 6.0).abs() < 1e-12);
//!
//! let relative = functional::relative_error_density(10.0, 90.0, GAMMA_AIR);
//! assert!((relative - 1.0 / 21.0).abs() < 1e-12);
//! ```

mod config;
mod error_metric;
mod field;
mod flow_state;
pub mod functional;
pub mod grid;
mod ratio_pair;
mod relations;
mod surface;
pub mod threshold;

pub use config::SweepConfig;
pub use error_metric::{ErrorMetric, absolute_error, relative_error};
pub use field::ShockField;
pub use flow_state::{FlowState, FlowStateError};
pub use grid::{Grid, GridError};
pub use ratio_pair::RatioPair;
pub use relations::{
    hypersonic_density_ratio, hypersonic_pressure_ratio, normal_mach, supersonic_density_ratio,
    supersonic_pressure_ratio,
};
pub use surface::{ErrorSurface, coverage};

/// Ratio of specific heats for air.
pub const GAMMA_AIR: f64 = 1.4;

/// Relative error below which the hypersonic approximation is considered accurate.
pub const RELATIVE_ERROR_THRESHOLD: f64 = 0.1;

/// Relative error above which values are masked out of an error surface.
pub const RELATIVE_ERROR_CEILING: f64 = 1.0;

/// Default upstream Mach number sweep, inclusive.
pub const DEFAULT_MACH_RANGE: (f64, f64) = (1.0, 15.0);

/// Default shock angle sweep in degrees, inclusive.
pub const DEFAULT_BETA_RANGE: (f64, f64) = (0.0, 90.0);

/// Default number of points along each sweep axis.
pub const DEFAULT_SWEEP_STEPS: usize = 2000;
