use crate::{
    abstract_trait::CategoryRepositoryTrait,
    domain::requests::{CreateCategoryRequest, UpdateCategoryRequest},
    model::Category as CategoryModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct CategoryRepository {
    db: ConnectionPool,
}

impl CategoryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
    ) -> Result<(Vec<CategoryModel>, i64), RepositoryError> {
        info!("🔍 Fetching categories | page: {page}, page_size: {page_size}");

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to count categories: {e:?}");
                RepositoryError::from(e)
            })?;

        let limit = i64::from(page_size);
        let offset = i64::from((page - 1).max(0)) * i64::from(page_size);

        let categories = sqlx::query_as::<_, CategoryModel>(
            r#"
            SELECT category_id, name, description, created_at, updated_at
            FROM categories
            ORDER BY category_id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch categories: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok((categories, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CategoryModel>, RepositoryError> {
        info!("🆔 Fetching category by ID: {id}");

        let result = sqlx::query_as::<_, CategoryModel>(
            r#"
            SELECT category_id, name, description, created_at, updated_at
            FROM categories
            WHERE category_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn create(&self, req: &CreateCategoryRequest) -> Result<CategoryModel, RepositoryError> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r#"
            INSERT INTO categories (name, description, created_at, updated_at)
            VALUES ($1, $2, current_timestamp, current_timestamp)
            RETURNING category_id, name, description, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to create category {}: {err:?}", req.name);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created category ID {} ({})",
            result.category_id, result.name
        );
        Ok(result)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<Option<CategoryModel>, RepositoryError> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r#"
            UPDATE categories
            SET name = $2,
                description = $3,
                updated_at = current_timestamp
            WHERE category_id = $1
            RETURNING category_id, name, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.description)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to update category ID {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        if result.is_some() {
            info!("🔄 Updated category ID {id}");
        }
        Ok(result)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        // Deleting a category still referenced by products trips the
        // ON DELETE RESTRICT foreign key.
        sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete category ID {id}: {err:?}");
                match err {
                    sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                        RepositoryError::ForeignKey(db_err.to_string())
                    }
                    other => RepositoryError::Sqlx(other),
                }
            })?;

        info!("🗑️ Deleted category ID {id}");
        Ok(())
    }
}
