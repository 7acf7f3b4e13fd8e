use async_trait::async_trait;
use hostkeep_application::ports::HostListItemRepository;
use hostkeep_domain::{DomainError, HostListItem, ListType};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

type ItemRow = (i64, String, i64, Option<String>, bool);

pub(crate) const INSERT_ITEM_SQL: &str =
    "INSERT INTO host_list_items (host, list_type, redirection, enabled, created_at)
     VALUES (?, ?, ?, ?, ?)";

pub struct SqliteHostListItemRepository {
    pool: SqlitePool,
}

impl SqliteHostListItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_item(row: ItemRow) -> Result<HostListItem, DomainError> {
        let (id, host, list_type, redirection, enabled) = row;

        Ok(HostListItem {
            id: Some(id),
            host: Arc::from(host.as_str()),
            list_type: ListType::from_code(list_type)?,
            redirection: redirection.map(|s| Arc::from(s.as_str())),
            enabled,
        })
    }
}

#[async_trait]
impl HostListItemRepository for SqliteHostListItemRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<HostListItem>, DomainError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            "SELECT id, host, list_type, redirection, enabled
             FROM host_list_items
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query host list items");
            DomainError::DatabaseError(e.to_string())
        })?;

        rows.into_iter().map(Self::row_to_item).collect()
    }

    #[instrument(skip(self))]
    async fn insert(&self, item: &HostListItem) -> Result<HostListItem, DomainError> {
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let result = sqlx::query(INSERT_ITEM_SQL)
            .bind(item.host.as_ref())
            .bind(item.list_type.as_code())
            .bind(item.redirection.as_deref())
            .bind(item.enabled)
            .bind(&now)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, host = %item.host, "Failed to insert host list item");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(HostListItem {
            id: Some(result.last_insert_rowid()),
            ..item.clone()
        })
    }
}
