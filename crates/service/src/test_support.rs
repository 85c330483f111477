#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::connect;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Fresh connection for the current test, or `None` when the database is
/// unavailable or `SKIP_DB_TESTS` is set.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let migrated = *MIGRATED
        .get_or_init(|| async {
            match connect().await {
                Ok(db) => migration::Migrator::up(&db, None).await.is_ok(),
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    false
                }
            }
        })
        .await;
    if !migrated {
        return None;
    }
    connect().await.ok()
}
