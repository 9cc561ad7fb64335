mod category;
mod list;
mod product;

pub use self::category::{CreateCategoryRequest, UpdateCategoryRequest};
pub use self::list::FindAllRequest;
pub use self::product::{CreateProductRequest, UpdateProductRequest};
