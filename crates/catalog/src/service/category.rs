use crate::{
    abstract_trait::{CategoryServiceTrait, DynCategoryRepository},
    domain::{
        requests::{CreateCategoryRequest, UpdateCategoryRequest},
        response::CategoryResponse,
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

const NOT_FOUND: &str = "category not found";

#[derive(Clone)]
pub struct CategoryService {
    repository: DynCategoryRepository,
}

impl CategoryService {
    pub fn new(repository: DynCategoryRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
    ) -> Result<(Vec<CategoryResponse>, i64), ServiceError> {
        let (categories, total) = self.repository.find_all(page, page_size).await?;

        info!("✅ Found {} categories (total: {total})", categories.len());

        let data = categories.into_iter().map(CategoryResponse::from).collect();
        Ok((data, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<CategoryResponse, ServiceError> {
        match self.repository.find_by_id(id).await? {
            Some(category) => Ok(category.into()),
            None => {
                error!("❌ Category not found with ID: {id}");
                Err(ServiceError::NotFound(NOT_FOUND.to_string()))
            }
        }
    }

    async fn create(&self, req: &CreateCategoryRequest) -> Result<CategoryResponse, ServiceError> {
        let category = self.repository.create(req).await?;
        Ok(category.into())
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<CategoryResponse, ServiceError> {
        if self.repository.find_by_id(id).await?.is_none() {
            error!("❌ Cannot update, category not found with ID: {id}");
            return Err(ServiceError::NotFound(NOT_FOUND.to_string()));
        }

        match self.repository.update(id, req).await? {
            Some(category) => Ok(category.into()),
            None => Err(ServiceError::NotFound(NOT_FOUND.to_string())),
        }
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if self.repository.find_by_id(id).await?.is_none() {
            error!("❌ Cannot delete, category not found with ID: {id}");
            return Err(ServiceError::NotFound(NOT_FOUND.to_string()));
        }

        self.repository.delete(id).await?;
        Ok(())
    }
}
