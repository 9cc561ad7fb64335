// Each test binary pulls in only the helpers it needs.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use catalog::{
    abstract_trait::{
        CategoryRepositoryTrait, DynCategoryRepository, DynProductRepository,
        ProductRepositoryTrait,
    },
    di::DependenciesInject,
    domain::requests::{
        CreateCategoryRequest, CreateProductRequest, UpdateCategoryRequest, UpdateProductRequest,
    },
    handler::AppRouter,
    model::{Category, Product, ProductWithCategory},
    state::AppState,
};
use http_body_util::BodyExt;
use shared::errors::RepositoryError;
use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicI32, Ordering},
    },
};
use tower::ServiceExt;

/// In-memory product store mirroring the SQL behavior: the list query is an
/// inner join against known categories, the single fetch a left join.
pub struct MockProductRepository {
    products: Mutex<Vec<Product>>,
    categories: Mutex<HashMap<i32, String>>,
    next_id: AtomicI32,
}

impl MockProductRepository {
    pub fn new() -> Self {
        let mut categories = HashMap::new();
        categories.insert(1, "Beverages".to_string());

        Self {
            products: Mutex::new(Vec::new()),
            categories: Mutex::new(categories),
            next_id: AtomicI32::new(1),
        }
    }

    pub fn seed(&self, name: &str, price: i64, stock: i32, category_id: Option<i32>) -> i32 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.products.lock().unwrap().push(Product {
            product_id: id,
            name: name.to_string(),
            price,
            stock,
            category_id,
            created_at: None,
            updated_at: None,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.products.lock().unwrap().len()
    }

    fn with_category(&self, product: &Product) -> ProductWithCategory {
        let category_name = product
            .category_id
            .and_then(|id| self.categories.lock().unwrap().get(&id).cloned());

        ProductWithCategory {
            product_id: product.product_id,
            name: product.name.clone(),
            price: product.price,
            stock: product.stock,
            category_id: product.category_id,
            category_name,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[async_trait]
impl ProductRepositoryTrait for MockProductRepository {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
    ) -> Result<(Vec<ProductWithCategory>, i64), RepositoryError> {
        let products = self.products.lock().unwrap();
        let categories = self.categories.lock().unwrap();

        let joined: Vec<&Product> = products
            .iter()
            .filter(|p| matches!(p.category_id, Some(id) if categories.contains_key(&id)))
            .collect();

        let total = joined.len() as i64;
        let offset = ((page - 1) * page_size) as usize;

        let rows = joined
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .map(|p| {
                let category_name = p
                    .category_id
                    .and_then(|id| categories.get(&id).cloned());
                ProductWithCategory {
                    product_id: p.product_id,
                    name: p.name.clone(),
                    price: p.price,
                    stock: p.stock,
                    category_id: p.category_id,
                    category_name,
                    created_at: p.created_at,
                    updated_at: p.updated_at,
                }
            })
            .collect();

        Ok((rows, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductWithCategory>, RepositoryError> {
        let product = {
            let products = self.products.lock().unwrap();
            products.iter().find(|p| p.product_id == id).cloned()
        };

        Ok(product.map(|p| self.with_category(&p)))
    }

    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = Product {
            product_id: id,
            name: req.name.clone(),
            price: req.price,
            stock: req.stock,
            category_id: req.category_id,
            created_at: None,
            updated_at: None,
        };

        self.products.lock().unwrap().push(product.clone());

        Ok(product)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Option<Product>, RepositoryError> {
        let mut products = self.products.lock().unwrap();

        match products.iter_mut().find(|p| p.product_id == id) {
            Some(product) => {
                product.name = req.name.clone();
                product.price = req.price;
                product.stock = req.stock;
                product.category_id = req.category_id;
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        self.products.lock().unwrap().retain(|p| p.product_id != id);
        Ok(())
    }
}

pub struct MockCategoryRepository {
    categories: Mutex<Vec<Category>>,
    next_id: AtomicI32,
}

impl MockCategoryRepository {
    pub fn new() -> Self {
        Self {
            categories: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    pub fn seed(&self, name: &str, description: &str) -> i32 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.categories.lock().unwrap().push(Category {
            category_id: id,
            name: name.to_string(),
            description: description.to_string(),
            created_at: None,
            updated_at: None,
        });
        id
    }
}

#[async_trait]
impl CategoryRepositoryTrait for MockCategoryRepository {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
    ) -> Result<(Vec<Category>, i64), RepositoryError> {
        let categories = self.categories.lock().unwrap();

        let total = categories.len() as i64;
        let offset = ((page - 1) * page_size) as usize;

        let rows = categories
            .iter()
            .skip(offset)
            .take(page_size as usize)
            .cloned()
            .collect();

        Ok((rows, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, RepositoryError> {
        let categories = self.categories.lock().unwrap();
        Ok(categories.iter().find(|c| c.category_id == id).cloned())
    }

    async fn create(&self, req: &CreateCategoryRequest) -> Result<Category, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let category = Category {
            category_id: id,
            name: req.name.clone(),
            description: req.description.clone(),
            created_at: None,
            updated_at: None,
        };

        self.categories.lock().unwrap().push(category.clone());

        Ok(category)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<Option<Category>, RepositoryError> {
        let mut categories = self.categories.lock().unwrap();

        match categories.iter_mut().find(|c| c.category_id == id) {
            Some(category) => {
                category.name = req.name.clone();
                category.description = req.description.clone();
                Ok(Some(category.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        self.categories
            .lock()
            .unwrap()
            .retain(|c| c.category_id != id);
        Ok(())
    }
}

pub fn test_app(
    product_repository: Arc<MockProductRepository>,
    category_repository: Arc<MockCategoryRepository>,
) -> Router {
    let di_container = DependenciesInject::from_repositories(
        product_repository as DynProductRepository,
        category_repository as DynCategoryRepository,
    );

    AppRouter::router(Arc::new(AppState { di_container }))
}

pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Raw-body variant for malformed payloads that are not valid JSON.
pub async fn send_raw(
    app: Router,
    method: &str,
    uri: &str,
    body: &str,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
