//! Domain-agnostic Ant Colony Optimization pheromone-learning core.
//!
//! Provides the shared-memory half of an ACO metaheuristic: a
//! concurrency-safe pheromone table together with the classic Ant System
//! update rule that decays and reinforces it from an evaluated population.
//!
//! - **Pheromone table**: a concurrent `Component -> f64` map with a
//!   configurable baseline for unseen components; read freely by many
//!   construction workers, written only during the update cycle.
//! - **Deposit rules**: the three Ant System contribution formulas,
//!   ant-cycle (`Q / fitness`), ant-density (`Q`), and ant-quantity
//!   (`Q / cost`), as a closed enum dispatched by pattern matching.
//! - **Update rule**: one decay-plus-reinforcement pass per generation,
//!   aggregating contributions across the whole population before any
//!   value is rewritten.
//!
//! # Architecture
//!
//! This crate is the learning component only. Solution representation,
//! fitness evaluation, the stochastic construction procedure, and the
//! generational run loop belong to consumers: they implement the
//! [`Component`](aco::Component) and
//! [`ConstructiveSolution`](aco::ConstructiveSolution) traits and call
//! [`AntSystemUpdate::update_pheromones`](aco::AntSystemUpdate::update_pheromones)
//! once per generation after evaluation completes.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

pub mod aco;
