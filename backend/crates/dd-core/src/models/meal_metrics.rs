use serde::{Deserialize, Serialize};

/// Per-identity diet aggregates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealMetrics {
    pub total_meals: u64,
    pub total_meals_on_diet: u64,
    pub total_meals_out_of_diet: u64,
    pub best_sequence_on_diet: u64,
}

impl MealMetrics {
    /// Build every aggregate from one ordered list of diet flags.
    ///
    /// The streak depends on the order of `flags`; the counts do not.
    pub fn from_diet_flags<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut metrics = MealMetrics::default();
        let mut current = 0u64;

        for is_on_diet in flags {
            metrics.total_meals += 1;

            if is_on_diet {
                metrics.total_meals_on_diet += 1;
                current += 1;
            } else {
                metrics.total_meals_out_of_diet += 1;
                current = 0;
            }

            metrics.best_sequence_on_diet = metrics.best_sequence_on_diet.max(current);
        }

        metrics
    }
}

/// Longest run of consecutive on-diet meals in the given order
pub fn best_on_diet_sequence<I>(flags: I) -> u64
where
    I: IntoIterator<Item = bool>,
{
    MealMetrics::from_diet_flags(flags).best_sequence_on_diet
}
