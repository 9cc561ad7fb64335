mod api;
mod category;
mod product;

pub use self::api::{ApiResponse, ApiResponsePagination, Metadata};
pub use self::category::CategoryResponse;
pub use self::product::ProductResponse;
