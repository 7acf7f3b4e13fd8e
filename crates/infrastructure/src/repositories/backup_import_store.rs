use async_trait::async_trait;
use hostkeep_application::ports::BackupImportStore;
use hostkeep_domain::{DomainError, HostListItem, HostsSource};
use sqlx::SqlitePool;
use tracing::{error, info, instrument};

use super::host_list_item_repository::INSERT_ITEM_SQL;
use super::hosts_source_repository::{map_insert_error, INSERT_SOURCE_SQL};

/// Writes a whole imported backup inside one SQLite transaction.
pub struct SqliteBackupImportStore {
    pool: SqlitePool,
}

impl SqliteBackupImportStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn database_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        error!(error = %e, "{}", context);
        DomainError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl BackupImportStore for SqliteBackupImportStore {
    #[instrument(skip_all, fields(sources = sources.len(), items = items.len()))]
    async fn insert_all(
        &self,
        sources: &[HostsSource],
        items: &[HostListItem],
    ) -> Result<(), DomainError> {
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(database_error("Failed to begin import transaction"))?;

        for source in sources {
            sqlx::query(INSERT_SOURCE_SQL)
                .bind(source.url.as_ref())
                .bind(source.enabled)
                .bind(&now)
                .execute(&mut *tx)
                .await
                .map_err(|e| map_insert_error(e, source))?;
        }

        for item in items {
            sqlx::query(INSERT_ITEM_SQL)
                .bind(item.host.as_ref())
                .bind(item.list_type.as_code())
                .bind(item.redirection.as_deref())
                .bind(item.enabled)
                .bind(&now)
                .execute(&mut *tx)
                .await
                .map_err(database_error("Failed to insert host list item"))?;
        }

        tx.commit()
            .await
            .map_err(database_error("Failed to commit import transaction"))?;

        info!("Import transaction committed");
        Ok(())
    }
}
