//! The Ant System pheromone update cycle.
//!
//! [`AntSystemUpdate`] runs one decay-plus-reinforcement pass per
//! generation: it aggregates deposit contributions across the whole
//! evaluated population, then rewrites each touched component as
//! `(1 - decay_rate) * old + contribution`.
//!
//! Components unused in a cycle are left untouched: decay is applied
//! lazily, only when a component is next reinforced. This matches the
//! classic implementation this crate models, not the textbook global
//! evaporation sweep; a stale component keeps its last value until the
//! colony uses it again.

use super::config::AcoConfig;
use super::table::PheromoneTable;
use super::types::ConstructiveSolution;
use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Applies the Ant System update rule to a [`PheromoneTable`].
///
/// Constructed once per run from a validated [`AcoConfig`]; stateless
/// between cycles, since the table carries all persistent state.
///
/// # Usage
///
/// ```ignore
/// let update = AntSystemUpdate::new(AcoConfig::default())?;
/// let table = PheromoneTable::new(update.config().initial_pheromone);
/// loop {
///     let population = construct_and_evaluate(&table);
///     update.update_pheromones(&table, &population);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AntSystemUpdate {
    config: AcoConfig,
}

impl AntSystemUpdate {
    /// Validates `config` and builds the update rule.
    ///
    /// A bad configuration is a fatal setup error: the returned message
    /// names the offending parameter and its allowed range, and no
    /// update can run until it is fixed.
    pub fn new(config: AcoConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration this rule was built with.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Runs one full update cycle against `pheromones`.
    ///
    /// Aggregation happens first, over the entire population, so each
    /// touched component is decayed exactly once per cycle no matter
    /// how many solutions used it. Duplicate uses of a component within
    /// one solution each deposit separately.
    ///
    /// Logically single-writer: call this once per generation, after
    /// evaluation completes and before the next construction phase
    /// starts reading the table.
    ///
    /// # Panics
    ///
    /// - `population` is empty, or any solution used no components.
    /// - A solution's fitness (under ant-cycle) or a component's cost
    ///   (under ant-quantity) violates its positivity precondition.
    ///
    /// All of these abort the cycle before or mid-write; none are
    /// recoverable, since skipping contributions would corrupt the
    /// learned state.
    pub fn update_pheromones<S>(&self, pheromones: &PheromoneTable<S::Component>, population: &[S])
    where
        S: ConstructiveSolution,
    {
        assert!(
            !population.is_empty(),
            "cannot update pheromones from an empty population"
        );

        let contributions = self.accumulate(population);

        for (component, contribution) in contributions {
            let old = pheromones.get(&component);
            let new = (1.0 - self.config.decay_rate) * old + contribution;
            pheromones.set(component, new);
        }
    }

    /// Sums per-component contributions over the whole population.
    ///
    /// The merge is a per-key sum, associative and commutative, so the
    /// sharded path cannot differ from the sequential one.
    fn accumulate<S>(&self, population: &[S]) -> HashMap<S::Component, f64>
    where
        S: ConstructiveSolution,
    {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return population
                .par_iter()
                .fold(HashMap::new, |mut acc, solution| {
                    self.deposit(solution, &mut acc);
                    acc
                })
                .reduce(HashMap::new, |mut merged, shard| {
                    for (component, contribution) in shard {
                        *merged.entry(component).or_insert(0.0) += contribution;
                    }
                    merged
                });
        }

        let mut acc = HashMap::new();
        for solution in population {
            self.deposit(solution, &mut acc);
        }
        acc
    }

    /// Adds one solution's contributions into the accumulator.
    fn deposit<S>(&self, solution: &S, acc: &mut HashMap<S::Component, f64>)
    where
        S: ConstructiveSolution,
    {
        let components = solution.components();
        assert!(
            !components.is_empty(),
            "every solution in the population must have used at least one component"
        );

        let fitness = solution.fitness();
        for component in components {
            let contribution = self
                .config
                .deposit
                .contribution(fitness, component, self.config.q);
            *acc.entry(component.clone()).or_insert(0.0) += contribution;
        }
    }
}
