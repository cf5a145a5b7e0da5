use crate::MealDto;
use serde::Serialize;

/// Single meal response; serializes as `{}` when the meal is absent
#[derive(Debug, Serialize)]
pub struct MealResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal: Option<MealDto>,
}
