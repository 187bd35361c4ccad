//! Command implementations

pub mod gitter;
pub mod venver;

pub use gitter::{run_gitter, GitterOptions};
pub use venver::{plan_venver, run_venver, VenverOptions, VenverPlan};
