mod category;
mod product;

pub use self::category::CategoryRepository;
pub use self::product::ProductRepository;
