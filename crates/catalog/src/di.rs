use crate::{
    abstract_trait::{
        DynCategoryRepository, DynCategoryService, DynProductRepository, DynProductService,
    },
    repository::{CategoryRepository, ProductRepository},
    service::{CategoryService, ProductService},
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_service: DynProductService,
    pub category_service: DynCategoryService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_service", &"ProductService")
            .field("category_service", &"CategoryService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let product_repository =
            Arc::new(ProductRepository::new(pool.clone())) as DynProductRepository;
        let category_repository =
            Arc::new(CategoryRepository::new(pool)) as DynCategoryRepository;

        Self::from_repositories(product_repository, category_repository)
    }

    /// Wires services over arbitrary repository implementations; router
    /// tests inject in-memory stores through here.
    pub fn from_repositories(
        product_repository: DynProductRepository,
        category_repository: DynCategoryRepository,
    ) -> Self {
        let product_service =
            Arc::new(ProductService::new(product_repository)) as DynProductService;
        let category_service =
            Arc::new(CategoryService::new(category_repository)) as DynCategoryService;

        Self {
            product_service,
            category_service,
        }
    }
}
