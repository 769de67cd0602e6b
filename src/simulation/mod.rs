//! simulation — randomness and data for the labor-supply model.
//!
//! - [`shocks`]: explicit seeded [`ShockSource`] with common-random-number
//!   and fresh-stream policies.
//! - [`dataset`]: validated observed data, [`LaborData`].
//! - [`generate`]: log-normal wages and synthetic datasets at known θ.
pub mod dataset;
pub mod generate;
pub mod shocks;

pub use self::dataset::LaborData;
pub use self::generate::{
    DEFAULT_N_OBS, DEFAULT_WAGE_SEED, SimulationConfig, WageDistribution, draw_wages,
    generate_labor_data, simulate_labor_data,
};
pub use self::shocks::{DEFAULT_SHOCK_SEED, ShockPolicy, ShockSource};
