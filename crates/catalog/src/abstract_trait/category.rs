use crate::{
    domain::{
        requests::{CreateCategoryRequest, UpdateCategoryRequest},
        response::CategoryResponse,
    },
    model::Category as CategoryModel,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynCategoryRepository = Arc<dyn CategoryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CategoryRepositoryTrait {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
    ) -> Result<(Vec<CategoryModel>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<CategoryModel>, RepositoryError>;
    async fn create(&self, req: &CreateCategoryRequest) -> Result<CategoryModel, RepositoryError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<Option<CategoryModel>, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}

pub type DynCategoryService = Arc<dyn CategoryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryServiceTrait {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
    ) -> Result<(Vec<CategoryResponse>, i64), ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<CategoryResponse, ServiceError>;
    async fn create(&self, req: &CreateCategoryRequest) -> Result<CategoryResponse, ServiceError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<CategoryResponse, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}
