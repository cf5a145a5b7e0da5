pub mod meal_service;
