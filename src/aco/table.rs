//! The shared pheromone table.
//!
//! One table instance lives for the duration of a run. It is written
//! only by the update rule, between generations, and read concurrently
//! by every construction worker while the next generation is being
//! built. A sharded concurrent map ([`DashMap`]) gives the required
//! many-readers/single-logical-writer discipline without per-thread
//! storage.

use super::types::Component;
use dashmap::DashMap;

/// Concurrency-safe mapping from [`Component`] to pheromone value.
///
/// Components never written report the configured baseline, so the
/// table starts logically full at `initial` and only materializes
/// entries as the update rule touches them. There is no eviction: the
/// key space is bounded by the problem instance's finite component set.
///
/// # Invariants
///
/// Every stored value is finite and non-negative. [`set`](Self::set)
/// asserts this; a violation is a programming error in the caller, not
/// a recoverable condition.
///
/// # Examples
///
/// ```
/// use u_antsys::aco::{Component, PheromoneTable};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash)]
/// struct Edge(u32, u32);
/// impl Component for Edge {
///     fn cost(&self) -> f64 { 1.0 }
/// }
///
/// let table = PheromoneTable::new(0.1);
/// assert_eq!(table.get(&Edge(0, 1)), 0.1);
/// table.set(Edge(0, 1), 2.5);
/// assert_eq!(table.get(&Edge(0, 1)), 2.5);
/// ```
#[derive(Debug)]
pub struct PheromoneTable<C: Component> {
    values: DashMap<C, f64>,
    initial: f64,
}

impl<C: Component> PheromoneTable<C> {
    /// Creates a table whose unseen components read as `initial`.
    ///
    /// # Panics
    ///
    /// Panics if `initial` is not finite or is negative.
    pub fn new(initial: f64) -> Self {
        assert!(
            initial.is_finite() && initial >= 0.0,
            "initial pheromone must be finite and non-negative, got {initial}"
        );
        Self {
            values: DashMap::new(),
            initial,
        }
    }

    /// Returns the current pheromone value for `component`, or the
    /// baseline if it has never been written.
    ///
    /// Never fails; safe to call from any number of threads.
    pub fn get(&self, component: &C) -> f64 {
        match self.values.get(component) {
            Some(value) => *value,
            None => self.initial,
        }
    }

    /// Replaces the stored value for `component`.
    ///
    /// Safe against concurrent `get` calls and against concurrent `set`
    /// calls on other components. The update rule is the only writer by
    /// construction, so two writers never race on one key.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not finite or is negative: an invariant
    /// breach that must surface loudly rather than poison later
    /// construction probabilities.
    pub fn set(&self, component: C, value: f64) {
        assert!(
            value.is_finite() && value >= 0.0,
            "pheromone value must be finite and non-negative, got {value}"
        );
        self.values.insert(component, value);
    }

    /// The baseline reported for unseen components.
    pub fn initial(&self) -> f64 {
        self.initial
    }

    /// Number of components that have been explicitly written.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no component has been written yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    struct Edge(u32, u32);

    impl Component for Edge {
        fn cost(&self) -> f64 {
            1.0
        }
    }

    #[test]
    fn test_unseen_component_reads_baseline() {
        let table: PheromoneTable<Edge> = PheromoneTable::new(0.1);
        assert_eq!(table.get(&Edge(3, 4)), 0.1);
        assert!(table.is_empty());
    }

    #[test]
    fn test_zero_baseline_is_allowed_when_explicit() {
        let table: PheromoneTable<Edge> = PheromoneTable::new(0.0);
        assert_eq!(table.get(&Edge(0, 1)), 0.0);
    }

    #[test]
    fn test_set_then_get() {
        let table = PheromoneTable::new(0.1);
        table.set(Edge(0, 1), 2.0);
        table.set(Edge(1, 2), 3.0);
        assert_eq!(table.get(&Edge(0, 1)), 2.0);
        assert_eq!(table.get(&Edge(1, 2)), 3.0);
        assert_eq!(table.len(), 2);
        // Other components still read the baseline.
        assert_eq!(table.get(&Edge(9, 9)), 0.1);
    }

    #[test]
    fn test_set_overwrites() {
        let table = PheromoneTable::new(0.1);
        table.set(Edge(0, 1), 2.0);
        table.set(Edge(0, 1), 0.5);
        assert_eq!(table.get(&Edge(0, 1)), 0.5);
        assert_eq!(table.len(), 1);
    }

    #[test]
    #[should_panic(expected = "finite and non-negative")]
    fn test_set_rejects_negative() {
        PheromoneTable::new(0.1).set(Edge(0, 1), -1.0);
    }

    #[test]
    #[should_panic(expected = "finite and non-negative")]
    fn test_set_rejects_nan() {
        PheromoneTable::new(0.1).set(Edge(0, 1), f64::NAN);
    }

    #[test]
    #[should_panic(expected = "finite and non-negative")]
    fn test_set_rejects_infinity() {
        PheromoneTable::new(0.1).set(Edge(0, 1), f64::INFINITY);
    }

    #[test]
    #[should_panic(expected = "initial pheromone")]
    fn test_new_rejects_negative_baseline() {
        let _: PheromoneTable<Edge> = PheromoneTable::new(-0.5);
    }

    #[test]
    fn test_concurrent_readers_observe_consistent_values() {
        // Many reader threads hammer `get` while the main thread plays
        // the single writer. Every observed value must be one the
        // writer actually wrote (or the baseline).
        let table = Arc::new(PheromoneTable::new(0.1));
        let valid = [0.1, 1.0, 2.0, 3.0];

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let table = Arc::clone(&table);
                scope.spawn(move || {
                    for _ in 0..10_000 {
                        let v = table.get(&Edge(0, 1));
                        assert!(valid.contains(&v), "unexpected value {v}");
                    }
                });
            }
            for v in [1.0, 2.0, 3.0] {
                table.set(Edge(0, 1), v);
            }
        });

        assert_eq!(table.get(&Edge(0, 1)), 3.0);
    }

    #[test]
    fn test_writes_to_different_keys_do_not_interfere() {
        let table = Arc::new(PheromoneTable::new(0.1));

        std::thread::scope(|scope| {
            for i in 0..8u32 {
                let table = Arc::clone(&table);
                scope.spawn(move || {
                    table.set(Edge(i, i + 1), f64::from(i));
                });
            }
        });

        for i in 0..8u32 {
            assert_eq!(table.get(&Edge(i, i + 1)), f64::from(i));
        }
    }
}
