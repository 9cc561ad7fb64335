use serde::{Deserialize, Serialize};
use shared::validation::{Check, Rule, ValidateRequest, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: i64,
    pub stock: i32,
    #[serde(default)]
    pub category_id: Option<i32>,
}

impl ValidateRequest for CreateProductRequest {
    fn checks(&self) -> Vec<Check<'_>> {
        product_checks(&self.name, self.price, self.stock)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    pub name: String,
    pub price: i64,
    pub stock: i32,
    #[serde(default)]
    pub category_id: Option<i32>,
}

impl ValidateRequest for UpdateProductRequest {
    fn checks(&self) -> Vec<Check<'_>> {
        product_checks(&self.name, self.price, self.stock)
    }
}

fn product_checks(name: &str, price: i64, stock: i32) -> Vec<Check<'_>> {
    vec![
        Check::new("name", Rule::Required, Value::Str(name)),
        Check::new("price", Rule::Positive, Value::Int(price)),
        Check::new("stock", Rule::NonNegative, Value::Int(i64::from(stock))),
    ]
}
