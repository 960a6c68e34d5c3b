//! Migrate command - apply, roll back, inspect or rebuild the schema.

use common::AppResult;

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Migrations stay under the command's control, so skip the automatic `up`
    let db = Database::connect_without_migrations(&config.database).await?;
    run(&db, args.action).await
}

/// Apply `action` to the schema behind `db`.
pub async fn run(db: &Database, action: MigrateAction) -> AppResult<()> {
    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            tracing::info!("Pending migrations applied");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            tracing::info!("Last migration rolled back");
        }
        MigrateAction::Status => {
            let report = db.migration_status().await?;
            for (name, applied) in &report {
                tracing::info!(migration = %name, applied, "Migration");
            }
            let pending = report.iter().filter(|(_, applied)| !applied).count();
            tracing::info!(total = report.len(), pending, "Migration status");
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping every table and reapplying all migrations");
            db.fresh_migrations().await?;
            tracing::info!("Schema rebuilt");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::DatabaseConfig;

    async fn blank_database() -> Database {
        Database::connect_without_migrations(&DatabaseConfig::in_memory())
            .await
            .unwrap()
    }

    fn applied(report: &[(String, bool)]) -> Vec<bool> {
        report.iter().map(|(_, applied)| *applied).collect()
    }

    #[tokio::test]
    async fn status_on_a_blank_database_lists_everything_pending() {
        let db = blank_database().await;

        run(&db, MigrateAction::Status).await.unwrap();

        let report = db.migration_status().await.unwrap();
        assert_eq!(report.len(), 3);
        assert_eq!(applied(&report), vec![false, false, false]);
        assert!(report[0].0.contains("create_centro_treinamento"));
    }

    #[tokio::test]
    async fn up_down_and_fresh_move_the_schema() {
        let db = blank_database().await;

        run(&db, MigrateAction::Up).await.unwrap();
        assert_eq!(applied(&db.migration_status().await.unwrap()), vec![true, true, true]);

        run(&db, MigrateAction::Down).await.unwrap();
        assert_eq!(applied(&db.migration_status().await.unwrap()), vec![true, true, false]);

        run(&db, MigrateAction::Fresh).await.unwrap();
        assert_eq!(applied(&db.migration_status().await.unwrap()), vec![true, true, true]);
        db.ping().await.unwrap();
    }
}
