mod category;
mod product;

pub use self::category::Category;
pub use self::product::{Product, ProductWithCategory};
