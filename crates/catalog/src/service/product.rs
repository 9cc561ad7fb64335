use crate::{
    abstract_trait::{DynProductRepository, ProductServiceTrait},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        response::ProductResponse,
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

const NOT_FOUND: &str = "product not found";

#[derive(Clone)]
pub struct ProductService {
    repository: DynProductRepository,
}

impl ProductService {
    pub fn new(repository: DynProductRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
    ) -> Result<(Vec<ProductResponse>, i64), ServiceError> {
        let (products, total) = self.repository.find_all(page, page_size).await?;

        info!("✅ Found {} products (total: {total})", products.len());

        let data = products.into_iter().map(ProductResponse::from).collect();
        Ok((data, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        match self.repository.find_by_id(id).await? {
            Some(product) => Ok(product.into()),
            None => {
                error!("❌ Product not found with ID: {id}");
                Err(ServiceError::NotFound(NOT_FOUND.to_string()))
            }
        }
    }

    async fn create(&self, req: &CreateProductRequest) -> Result<ProductResponse, ServiceError> {
        let product = self.repository.create(req).await?;
        Ok(product.into())
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        // Existence guard: a missing row surfaces as a domain-level 404
        // instead of whatever the raw store error would be.
        if self.repository.find_by_id(id).await?.is_none() {
            error!("❌ Cannot update, product not found with ID: {id}");
            return Err(ServiceError::NotFound(NOT_FOUND.to_string()));
        }

        match self.repository.update(id, req).await? {
            Some(product) => Ok(product.into()),
            // Row vanished between guard and update.
            None => Err(ServiceError::NotFound(NOT_FOUND.to_string())),
        }
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if self.repository.find_by_id(id).await?.is_none() {
            error!("❌ Cannot delete, product not found with ID: {id}");
            return Err(ServiceError::NotFound(NOT_FOUND.to_string()));
        }

        self.repository.delete(id).await?;
        Ok(())
    }
}
