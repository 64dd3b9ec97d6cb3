//! Core trait definitions for the ACO pheromone core.
//!
//! The two central traits, [`Component`] and [`ConstructiveSolution`],
//! define the contract between the generic pheromone machinery and
//! domain-specific problem implementations.

use std::hash::Hash;

/// An addressable unit of solution structure that can carry pheromone.
///
/// For graph-based problems this is typically an edge; more generally it
/// is whatever token the construction procedure chooses between. The
/// pheromone table keys on component identity, so equality and hashing
/// must be cheap and consistent.
///
/// Components should be small, cheap-to-clone value types (an index
/// pair, an interned id). Immutable once created.
///
/// # Implementing
///
/// ```
/// use u_antsys::aco::Component;
///
/// /// One directed edge of a tour, with its traversal cost.
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// struct Edge {
///     from: u32,
///     to: u32,
///     /// Cost in tenths, kept integral so Eq/Hash stay derivable.
///     decicost: u32,
/// }
///
/// impl Component for Edge {
///     fn cost(&self) -> f64 {
///         self.decicost as f64 / 10.0
///     }
/// }
/// ```
pub trait Component: Clone + Eq + Hash + Send + Sync {
    /// The intrinsic cost of using this component. Must be non-negative,
    /// and strictly positive when the ant-quantity deposit rule is in
    /// use (its contribution divides by this value).
    fn cost(&self) -> f64;
}

/// An evaluated candidate solution built from components.
///
/// The update rule consumes a population of these after the evaluation
/// phase: each solution exposes the ordered sequence of components it
/// used and its scalar fitness. Duplicate components within one solution
/// are meaningful: each occurrence deposits pheromone separately.
///
/// Fitness is cost-like: lower is better. Under the ant-cycle deposit
/// rule it must be strictly positive, since the contribution divides
/// by it.
pub trait ConstructiveSolution: Send + Sync {
    /// The component type this solution is built from.
    type Component: Component;

    /// The ordered sequence of components used by this solution.
    ///
    /// Must be non-empty by the time the solution reaches the update
    /// rule; an empty sequence there is an invariant breach.
    fn components(&self) -> &[Self::Component];

    /// The evaluated fitness of this solution (lower is better).
    fn fitness(&self) -> f64;
}
