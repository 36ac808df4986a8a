use crate::Result as DbErrorResult;
use crate::decode;

use ot_core::Module;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const SELECT_COLUMNS: &str = r#"
    SELECT id, name, code, description, content, created_by, created_by_name, created_at
    FROM modules
"#;

pub struct ModuleRepository {
    pool: SqlitePool,
}

impl ModuleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, module: &Module) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO modules (
                                     id, name, code, description, content,
                                     created_by, created_by_name, created_at
                                     ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(module.id.to_string())
        .bind(&module.name)
        .bind(&module.code)
        .bind(&module.description)
        .bind(&module.content)
        .bind(&module.created_by)
        .bind(&module.created_by_name)
        .bind(module.created_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Module>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    /// All modules, newest first.
    pub async fn list_all(&self) -> DbErrorResult<Vec<Module>> {
        self.list_recent(None).await
    }

    /// Newest modules first, at most `limit` when given.
    pub async fn list_recent(&self, limit: Option<u32>) -> DbErrorResult<Vec<Module>> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} ORDER BY created_at DESC, id LIMIT ?"
        ))
        .bind(decode::limit(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    pub async fn list_by_creator(&self, created_by: &str) -> DbErrorResult<Vec<Module>> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE created_by = ? ORDER BY created_at DESC, id"
        ))
        .bind(created_by)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    pub async fn count(&self) -> DbErrorResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM modules")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    fn map_row(r: &SqliteRow) -> DbErrorResult<Module> {
        let id: String = r.try_get("id")?;
        let created_at: i64 = r.try_get("created_at")?;

        Ok(Module {
            id: decode::uuid("modules.id", &id)?,
            name: r.try_get("name")?,
            code: r.try_get("code")?,
            description: r.try_get("description")?,
            content: r.try_get("content")?,
            created_by: r.try_get("created_by")?,
            created_by_name: r.try_get("created_by_name")?,
            created_at: decode::timestamp("modules.created_at", created_at)?,
        })
    }
}
