use crate::{
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        response::ProductResponse,
    },
    model::{Product as ProductModel, ProductWithCategory},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductRepositoryTrait {
    /// Returns one page of products joined with their category, plus the
    /// total joined row count. `page` and `page_size` arrive normalized.
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
    ) -> Result<(Vec<ProductWithCategory>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductWithCategory>, RepositoryError>;
    async fn create(&self, req: &CreateProductRequest) -> Result<ProductModel, RepositoryError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Option<ProductModel>, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}

pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductServiceTrait {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
    ) -> Result<(Vec<ProductResponse>, i64), ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError>;
    async fn create(&self, req: &CreateProductRequest) -> Result<ProductResponse, ServiceError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}
