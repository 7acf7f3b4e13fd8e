use async_trait::async_trait;
use hostkeep_application::ports::HostsSourceRepository;
use hostkeep_domain::{DomainError, HostsSource};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

type SourceRow = (i64, String, bool);

pub(crate) const INSERT_SOURCE_SQL: &str =
    "INSERT INTO hosts_sources (url, enabled, created_at) VALUES (?, ?, ?)";

pub(crate) fn map_insert_error(e: sqlx::Error, source: &HostsSource) -> DomainError {
    error!(error = %e, url = %source.url, "Failed to insert hosts source");
    DomainError::DatabaseError(e.to_string())
}

pub struct SqliteHostsSourceRepository {
    pool: SqlitePool,
}

impl SqliteHostsSourceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_source(row: SourceRow) -> HostsSource {
        let (id, url, enabled) = row;

        HostsSource {
            id: Some(id),
            url: Arc::from(url.as_str()),
            enabled,
        }
    }
}

#[async_trait]
impl HostsSourceRepository for SqliteHostsSourceRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<HostsSource>, DomainError> {
        let rows = sqlx::query_as::<_, SourceRow>(
            "SELECT id, url, enabled FROM hosts_sources ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query hosts sources");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_source).collect())
    }

    #[instrument(skip(self))]
    async fn insert(&self, source: &HostsSource) -> Result<HostsSource, DomainError> {
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let result = sqlx::query(INSERT_SOURCE_SQL)
            .bind(source.url.as_ref())
            .bind(source.enabled)
            .bind(&now)
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error(e, source))?;

        Ok(HostsSource {
            id: Some(result.last_insert_rowid()),
            ..source.clone()
        })
    }
}
