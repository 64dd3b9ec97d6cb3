//! Ant System pheromone learning.
//!
//! The shared-memory core of an Ant Colony Optimization run: a
//! concurrency-safe pheromone table plus the update rule that decays
//! and reinforces it from each generation's evaluated solutions.
//!
//! # Core Traits
//!
//! - [`Component`]: an addressable unit of solution structure (e.g. a
//!   graph edge) that carries pheromone
//! - [`ConstructiveSolution`]: an evaluated solution exposing its used
//!   components and fitness
//!
//! # Key Types
//!
//! - [`AcoConfig`]: decay rate, deposit constant `Q`, deposit rule,
//!   table baseline
//! - [`DepositRule`]: the ant-cycle / ant-density / ant-quantity
//!   contribution formulas
//! - [`PheromoneTable`]: the run-scoped concurrent component → value map
//! - [`AntSystemUpdate`]: executes one decay-plus-reinforcement cycle
//!   per generation
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"

mod config;
mod deposit;
mod table;
mod types;
mod update;

pub use config::AcoConfig;
pub use deposit::{DepositRule, DEPOSIT_RULE_NAMES};
pub use table::PheromoneTable;
pub use types::{Component, ConstructiveSolution};
pub use update::AntSystemUpdate;
