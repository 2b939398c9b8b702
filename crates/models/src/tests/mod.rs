/// Account entity round trip against a live PostgreSQL; skipped when none is reachable.
mod account_tests {
    use migration::MigratorTrait;
    use sea_orm::DatabaseConnection;

    use crate::{account, db, errors::ModelError};

    async fn db_or_skip() -> Option<DatabaseConnection> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return None;
        }
        let db = match db::connect().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return None;
            }
        };
        if let Err(e) = migration::Migrator::up(&db, None).await {
            eprintln!("skip: migrate up failed: {}", e);
            return None;
        }
        Some(db)
    }

    fn unique_email() -> String {
        format!("model_{}@example.com", chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default())
    }

    #[tokio::test]
    async fn create_find_delete() -> anyhow::Result<()> {
        let Some(db) = db_or_skip().await else { return Ok(()) };

        let email = unique_email();
        let created = account::create(&db, &email, "Model Test", true, vec!["user".into()]).await?;
        assert!(created.id > 0);
        assert_eq!(created.roles, vec!["user".to_string()]);

        let found = account::find(&db, created.id).await?.expect("row exists");
        assert_eq!(found.email, email);

        assert!(account::hard_delete(&db, created.id).await?);
        assert!(!account::hard_delete(&db, created.id).await?);
        assert!(account::find(&db, created.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_maps_to_duplicate() -> anyhow::Result<()> {
        let Some(db) = db_or_skip().await else { return Ok(()) };

        let email = unique_email();
        let first = account::create(&db, &email, "First", true, vec![]).await?;
        let err = account::create(&db, &email, "Second", true, vec![]).await.unwrap_err();
        assert!(matches!(err, ModelError::Duplicate(_)), "got {err:?}");

        account::hard_delete(&db, first.id).await?;
        Ok(())
    }
}
