pub mod meal_dto;
pub mod meal_list_response;
pub mod meal_response;
pub mod meals;
pub mod metrics_response;
