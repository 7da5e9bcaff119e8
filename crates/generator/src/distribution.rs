//! Discrete probability vectors over categorical attribute values.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use insights_core::{InsightsError, InsightsResult};

const SUM_TOLERANCE: f64 = 1e-6;

/// A fixed probability vector over a closed set of choices. Sampling is
/// with replacement, one choice per draw.
#[derive(Debug, Clone)]
pub struct CategoricalDistribution<T> {
    choices: Vec<T>,
    weights: Vec<f64>,
    index: WeightedIndex<f64>,
}

impl<T: Copy + PartialEq> CategoricalDistribution<T> {
    /// Pair `choices` with `weights` positionally. The weights must be
    /// finite, non-negative and sum to 1.0.
    pub fn new(attribute: &str, choices: &[T], weights: &[f64]) -> InsightsResult<Self> {
        if choices.is_empty() {
            return Err(InsightsError::distribution(attribute, "no choices"));
        }
        if choices.len() != weights.len() {
            return Err(InsightsError::distribution(
                attribute,
                format!(
                    "expected {} weights, got {}",
                    choices.len(),
                    weights.len()
                ),
            ));
        }
        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(InsightsError::distribution(
                attribute,
                format!("weight {bad} is not a probability"),
            ));
        }

        let total: f64 = weights.iter().sum();
        if (total - 1.0).abs() > SUM_TOLERANCE {
            return Err(InsightsError::distribution(
                attribute,
                format!("weights sum to {total}, expected 1.0"),
            ));
        }

        let index = WeightedIndex::new(weights.iter().copied())
            .map_err(|e| InsightsError::distribution(attribute, e.to_string()))?;

        Ok(Self {
            choices: choices.to_vec(),
            weights: weights.to_vec(),
            index,
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.choices[self.index.sample(rng)]
    }

    pub fn choices(&self) -> &[T] {
        &self.choices
    }

    /// Probability assigned to `choice`, 0.0 if it is not in the support.
    pub fn probability(&self, choice: T) -> f64 {
        self.choices
            .iter()
            .position(|c| *c == choice)
            .map(|i| self.weights[i])
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insights_core::types::MealPreference;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_valid_distribution() {
        let dist =
            CategoricalDistribution::new("meal", MealPreference::ALL, &[0.4, 0.3, 0.3]).unwrap();
        assert_eq!(dist.choices().len(), 3);
        assert!((dist.probability(MealPreference::Local) - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let err =
            CategoricalDistribution::new("meal", MealPreference::ALL, &[0.5, 0.3, 0.3]).unwrap_err();
        assert!(matches!(err, InsightsError::InvalidDistribution { .. }));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result = CategoricalDistribution::new("meal", MealPreference::ALL, &[1.2, -0.1, -0.1]);
        assert!(result.is_err());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result = CategoricalDistribution::new("meal", MealPreference::ALL, &[0.5, 0.5]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_choices_rejected() {
        let result = CategoricalDistribution::<MealPreference>::new("meal", &[], &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_weight_choice_never_sampled() {
        let dist =
            CategoricalDistribution::new("meal", MealPreference::ALL, &[0.0, 1.0, 0.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            assert_eq!(dist.sample(&mut rng), MealPreference::Continental);
        }
    }
}
