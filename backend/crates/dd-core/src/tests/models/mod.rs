mod identity;
mod meal;
mod streak_order;
