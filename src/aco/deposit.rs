//! Pheromone deposit rules.
//!
//! A deposit rule converts one solution's use of a component into a
//! pheromone contribution. The three classic Ant System variants are a
//! closed set, so they are modeled as an enum dispatched by pattern
//! matching rather than a trait object.
//!
//! # References
//!
//! Dorigo, Maniezzo & Colorni (1996), Section II.C: the ant-cycle,
//! ant-density, and ant-quantity models.

use super::types::Component;
use std::fmt;
use std::str::FromStr;

/// The Ant System deposit rule variants.
///
/// All variants are parameterized by a shared positive constant `Q`
/// (carried in [`AcoConfig`](super::AcoConfig), passed in per call so
/// the rule itself stays stateless).
///
/// # Examples
///
/// ```
/// use u_antsys::aco::DepositRule;
///
/// let rule: DepositRule = "ANT_CYCLE".parse().unwrap();
/// assert_eq!(rule, DepositRule::AntCycle);
/// assert!("ant_trail".parse::<DepositRule>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DepositRule {
    /// Contribution `Q / fitness`: better (lower-fitness) solutions
    /// deposit more on every component they used.
    ///
    /// Requires strictly positive fitness.
    #[default]
    AntCycle,

    /// Contribution `Q`, independent of fitness and component: every
    /// use of a component counts equally.
    AntDensity,

    /// Contribution `Q / component.cost()`: cheaper components receive
    /// more pheromone per use.
    ///
    /// Requires strictly positive component cost.
    AntQuantity,
}

/// The accepted configuration names, in declaration order.
pub const DEPOSIT_RULE_NAMES: [&str; 3] = ["ANT_CYCLE", "ANT_DENSITY", "ANT_QUANTITY"];

impl DepositRule {
    /// Computes the pheromone contribution of one use of `component` by
    /// a solution with the given `fitness`.
    ///
    /// Pure and reproducible: the result depends only on the arguments.
    ///
    /// # Panics
    ///
    /// - `AntCycle` with `fitness <= 0` or non-finite fitness.
    /// - `AntQuantity` with `component.cost() <= 0` or non-finite cost.
    ///
    /// These are fatal numeric precondition violations: skipping a
    /// contribution would silently corrupt the statistical meaning of
    /// the table, so the cycle aborts instead.
    pub fn contribution<C: Component>(self, fitness: f64, component: &C, q: f64) -> f64 {
        match self {
            DepositRule::AntCycle => {
                assert!(
                    fitness.is_finite() && fitness > 0.0,
                    "ANT_CYCLE deposit requires a finite, strictly positive fitness, got {fitness}"
                );
                q / fitness
            }
            DepositRule::AntDensity => q,
            DepositRule::AntQuantity => {
                let cost = component.cost();
                assert!(
                    cost.is_finite() && cost > 0.0,
                    "ANT_QUANTITY deposit requires a finite, strictly positive component cost, got {cost}"
                );
                q / cost
            }
        }
    }

    /// The configuration name of this rule.
    pub fn name(self) -> &'static str {
        match self {
            DepositRule::AntCycle => "ANT_CYCLE",
            DepositRule::AntDensity => "ANT_DENSITY",
            DepositRule::AntQuantity => "ANT_QUANTITY",
        }
    }
}

impl fmt::Display for DepositRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DepositRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ANT_CYCLE" => Ok(DepositRule::AntCycle),
            "ANT_DENSITY" => Ok(DepositRule::AntDensity),
            "ANT_QUANTITY" => Ok(DepositRule::AntQuantity),
            other => Err(format!(
                "invalid deposit rule '{other}'; allowed values are {DEPOSIT_RULE_NAMES:?}"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    struct Unit(u32);

    impl Component for Unit {
        fn cost(&self) -> f64 {
            self.0 as f64
        }
    }

    #[test]
    fn test_ant_cycle_divides_by_fitness() {
        let c = Unit(7);
        assert!((DepositRule::AntCycle.contribution(4.0, &c, 1.0) - 0.25).abs() < 1e-12);
        assert!((DepositRule::AntCycle.contribution(2.0, &c, 3.0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_ant_density_ignores_fitness_and_component() {
        let a = Unit(1);
        let b = Unit(999);
        let q = 2.5;
        assert!((DepositRule::AntDensity.contribution(4.0, &a, q) - q).abs() < 1e-12);
        assert!((DepositRule::AntDensity.contribution(0.001, &b, q) - q).abs() < 1e-12);
    }

    #[test]
    fn test_ant_quantity_divides_by_cost() {
        let c = Unit(4);
        assert!((DepositRule::AntQuantity.contribution(123.0, &c, 1.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_contribution_is_reproducible() {
        let c = Unit(3);
        let first = DepositRule::AntCycle.contribution(7.0, &c, 1.5);
        for _ in 0..10 {
            assert_eq!(first, DepositRule::AntCycle.contribution(7.0, &c, 1.5));
        }
    }

    #[test]
    #[should_panic(expected = "strictly positive fitness")]
    fn test_ant_cycle_rejects_zero_fitness() {
        DepositRule::AntCycle.contribution(0.0, &Unit(1), 1.0);
    }

    #[test]
    #[should_panic(expected = "strictly positive fitness")]
    fn test_ant_cycle_rejects_negative_fitness() {
        DepositRule::AntCycle.contribution(-1.0, &Unit(1), 1.0);
    }

    #[test]
    #[should_panic(expected = "strictly positive component cost")]
    fn test_ant_quantity_rejects_zero_cost() {
        DepositRule::AntQuantity.contribution(1.0, &Unit(0), 1.0);
    }

    #[test]
    fn test_parse_known_names() {
        assert_eq!("ANT_CYCLE".parse::<DepositRule>(), Ok(DepositRule::AntCycle));
        assert_eq!("ANT_DENSITY".parse::<DepositRule>(), Ok(DepositRule::AntDensity));
        assert_eq!("ANT_QUANTITY".parse::<DepositRule>(), Ok(DepositRule::AntQuantity));
    }

    #[test]
    fn test_parse_unknown_name_lists_allowed_values() {
        let err = "ANT_TRAIL".parse::<DepositRule>().unwrap_err();
        assert!(err.contains("ANT_TRAIL"));
        for name in DEPOSIT_RULE_NAMES {
            assert!(err.contains(name), "error should list {name}: {err}");
        }
    }

    #[test]
    fn test_display_round_trips() {
        for rule in [
            DepositRule::AntCycle,
            DepositRule::AntDensity,
            DepositRule::AntQuantity,
        ] {
            assert_eq!(rule.to_string().parse::<DepositRule>(), Ok(rule));
        }
    }
}
