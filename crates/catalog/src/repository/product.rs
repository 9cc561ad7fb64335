use crate::{
    abstract_trait::ProductRepositoryTrait,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    model::{Product as ProductModel, ProductWithCategory},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductRepository {
    db: ConnectionPool,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
            RepositoryError::ForeignKey(db_err.to_string())
        }
        other => RepositoryError::Sqlx(other),
    }
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
    ) -> Result<(Vec<ProductWithCategory>, i64), RepositoryError> {
        info!("🔍 Fetching products | page: {page}, page_size: {page_size}");

        // The count runs first; when it fails the page query is skipped.
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM products p
            JOIN categories c ON p.category_id = c.category_id
            "#,
        )
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to count products: {e:?}");
            RepositoryError::from(e)
        })?;

        let limit = i64::from(page_size);
        let offset = i64::from((page - 1).max(0)) * i64::from(page_size);

        let products = sqlx::query_as::<_, ProductWithCategory>(
            r#"
            SELECT
                p.product_id,
                p.name,
                p.price,
                p.stock,
                p.category_id,
                c.name AS category_name,
                p.created_at,
                p.updated_at
            FROM products p
            JOIN categories c ON p.category_id = c.category_id
            ORDER BY p.product_id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok((products, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductWithCategory>, RepositoryError> {
        info!("🆔 Fetching product by ID: {id}");

        // LEFT JOIN keeps uncategorized products fetchable by id.
        let result = sqlx::query_as::<_, ProductWithCategory>(
            r#"
            SELECT
                p.product_id,
                p.name,
                p.price,
                p.stock,
                p.category_id,
                c.name AS category_name,
                p.created_at,
                p.updated_at
            FROM products p
            LEFT JOIN categories c ON p.category_id = c.category_id
            WHERE p.product_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn create(&self, req: &CreateProductRequest) -> Result<ProductModel, RepositoryError> {
        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (name, price, stock, category_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
            RETURNING product_id, name, price, stock, category_id, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(req.price)
        .bind(req.stock)
        .bind(req.category_id)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {err:?}", req.name);
            map_sqlx_error(err)
        })?;

        info!(
            "✅ Created product ID {} ({})",
            result.product_id, result.name
        );
        Ok(result)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        // Zero matched rows is not an error here; the service guard owns
        // existence checks.
        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET name = $2,
                price = $3,
                stock = $4,
                category_id = $5,
                updated_at = current_timestamp
            WHERE product_id = $1
            RETURNING product_id, name, price, stock, category_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(req.price)
        .bind(req.stock)
        .bind(req.category_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {id}: {err:?}");
            map_sqlx_error(err)
        })?;

        if result.is_some() {
            info!("🔄 Updated product ID {id}");
        }
        Ok(result)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product ID {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        info!("🗑️ Deleted product ID {id}");
        Ok(())
    }
}
