//! ACO pheromone-update configuration.

use super::deposit::DepositRule;

/// Configuration for the Ant System pheromone update.
///
/// Controls the decay/reinforcement balance, the deposit formula, and
/// the table baseline. Validated once when an
/// [`AntSystemUpdate`](super::AntSystemUpdate) is constructed; a bad
/// configuration is a fatal setup error, never silently defaulted.
///
/// # Update formula
///
/// For each component touched in a cycle:
/// `new = (1 - decay_rate) * old + contribution`, where the
/// contribution is accumulated over every use of the component by every
/// solution in the population, via the configured [`DepositRule`].
///
/// # Builder Pattern
///
/// ```
/// use u_antsys::aco::{AcoConfig, DepositRule};
///
/// let config = AcoConfig::default()
///     .with_decay_rate(0.3)
///     .with_q(2.0)
///     .with_deposit(DepositRule::AntDensity);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Fraction of existing pheromone lost per update, in `[0, 1)`.
    ///
    /// Higher values forget faster. Dorigo et al. (1996) use 0.5.
    pub decay_rate: f64,

    /// Deposit constant `Q`, strictly positive.
    ///
    /// Scales every contribution; the classic default is 1.0.
    pub q: f64,

    /// Which deposit formula converts solution quality into pheromone.
    pub deposit: DepositRule,

    /// Baseline pheromone reported for components never yet written.
    ///
    /// Must be finite and non-negative. A small positive constant keeps
    /// unexplored components selectable by the construction procedure.
    pub initial_pheromone: f64,

    /// Whether to shard contribution aggregation across the population
    /// using rayon.
    ///
    /// Only effective with the `parallel` cargo feature; the merge is a
    /// per-component sum, so sharding cannot change the result.
    pub parallel: bool,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            decay_rate: 0.5,
            q: 1.0,
            deposit: DepositRule::default(),
            initial_pheromone: 0.1,
            parallel: false,
        }
    }
}

impl AcoConfig {
    /// Sets the decay rate.
    pub fn with_decay_rate(mut self, rate: f64) -> Self {
        self.decay_rate = rate;
        self
    }

    /// Sets the deposit constant `Q`.
    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    /// Sets the deposit rule.
    pub fn with_deposit(mut self, rule: DepositRule) -> Self {
        self.deposit = rule;
        self
    }

    /// Sets the baseline pheromone for unseen components.
    pub fn with_initial_pheromone(mut self, value: f64) -> Self {
        self.initial_pheromone = value;
        self
    }

    /// Enables or disables parallel contribution aggregation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.decay_rate.is_finite() || self.decay_rate < 0.0 || self.decay_rate >= 1.0 {
            return Err(format!(
                "decay_rate must be on the interval [0, 1), got {}",
                self.decay_rate
            ));
        }
        if !self.q.is_finite() || self.q <= 0.0 {
            return Err(format!("Q must be positive, got {}", self.q));
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone < 0.0 {
            return Err(format!(
                "initial_pheromone must be finite and non-negative, got {}",
                self.initial_pheromone
            ));
        }
        Ok(())
    }
}
