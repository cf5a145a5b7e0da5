use dd_core::Identity;
use dd_db::{ConnectionManager, IdentityRepository};

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    ConnectionManager::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Persists a fresh anonymous identity to own test meals
pub async fn create_test_identity(pool: &SqlitePool) -> Identity {
    let identity = Identity::anonymous();

    IdentityRepository::new(pool.clone())
        .create(&identity)
        .await
        .expect("Failed to create test identity");

    identity
}
