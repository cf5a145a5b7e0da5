//! Meal CRUD and metrics, always scoped to the resolved identity

use crate::{ApiError, ApiResult};

use dd_core::{Identity, Meal, MealFields, MealMetrics, StreakOrder};
use dd_db::MealRepository;

use log::info;
use sqlx::SqlitePool;
use uuid::Uuid;

const MEAL_NOT_FOUND_MESSAGE: &str = "This meal does not exists";

pub struct MealService {
    repo: MealRepository,
}

impl MealService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: MealRepository::new(pool),
        }
    }

    /// All meals of the identity, oldest first
    pub async fn list(&self, identity: &Identity) -> ApiResult<Vec<Meal>> {
        Ok(self.repo.find_by_owner(identity.id).await?)
    }

    /// None when the meal is missing or belongs to someone else
    pub async fn get(&self, identity: &Identity, id: Uuid) -> ApiResult<Option<Meal>> {
        Ok(self.repo.find_by_id_and_owner(id, identity.id).await?)
    }

    pub async fn create(&self, identity: &Identity, fields: MealFields) -> ApiResult<Meal> {
        let meal = Meal::new(identity.id, fields);
        self.repo.create(&meal).await?;

        info!("Created meal {} for identity {}", meal.id, identity.id);

        Ok(meal)
    }

    /// Replace every client-owned field of an existing meal
    pub async fn update(
        &self,
        identity: &Identity,
        id: Uuid,
        fields: MealFields,
    ) -> ApiResult<Meal> {
        let mut meal = self
            .repo
            .find_by_id_and_owner(id, identity.id)
            .await?
            .ok_or_else(|| ApiError::not_found(MEAL_NOT_FOUND_MESSAGE))?;

        meal.apply(fields);

        // Deleted between the lookup and the write
        if self.repo.update(&meal).await? == 0 {
            return Err(ApiError::not_found(MEAL_NOT_FOUND_MESSAGE));
        }

        info!("Updated meal {} for identity {}", meal.id, identity.id);

        Ok(meal)
    }

    /// Absent or foreign meals are a silent no-op
    pub async fn delete(&self, identity: &Identity, id: Uuid) -> ApiResult<()> {
        let deleted = self.repo.delete(id, identity.id).await?;

        info!(
            "Deleted meal {} for identity {} ({} rows)",
            id, identity.id, deleted
        );

        Ok(())
    }

    pub async fn metrics(&self, identity: &Identity, order: StreakOrder) -> ApiResult<MealMetrics> {
        let flags = self.repo.diet_flags(identity.id, order).await?;
        Ok(MealMetrics::from_diet_flags(flags))
    }
}
