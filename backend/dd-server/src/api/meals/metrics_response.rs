use dd_core::MealMetrics;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    pub total_meals: u64,
    pub total_meals_on_diet: u64,
    pub total_meals_out_of_diet: u64,
    pub best_sequence_on_diet: u64,
}

impl From<MealMetrics> for MetricsResponse {
    fn from(m: MealMetrics) -> Self {
        Self {
            total_meals: m.total_meals,
            total_meals_on_diet: m.total_meals_on_diet,
            total_meals_out_of_diet: m.total_meals_out_of_diet,
            best_sequence_on_diet: m.best_sequence_on_diet,
        }
    }
}
