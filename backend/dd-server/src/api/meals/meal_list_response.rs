use crate::MealDto;
use serde::Serialize;

/// List of meals response
#[derive(Debug, Serialize)]
pub struct MealListResponse {
    pub meals: Vec<MealDto>,
}
