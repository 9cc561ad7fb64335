use serde::{Deserialize, Serialize};
use shared::validation::{Check, Rule, ValidateRequest, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ValidateRequest for CreateCategoryRequest {
    fn checks(&self) -> Vec<Check<'_>> {
        category_checks(&self.name, &self.description)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ValidateRequest for UpdateCategoryRequest {
    fn checks(&self) -> Vec<Check<'_>> {
        category_checks(&self.name, &self.description)
    }
}

fn category_checks<'a>(name: &'a str, description: &'a str) -> Vec<Check<'a>> {
    vec![
        Check::new("name", Rule::Required, Value::Str(name)),
        Check::new("name", Rule::MaxLength(100), Value::Str(name)),
        Check::new("description", Rule::MaxLength(255), Value::Str(description)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_required() {
        let req = CreateCategoryRequest {
            name: "".into(),
            description: "".into(),
        };

        let errors = req.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "name is required");
    }

    #[test]
    fn overlong_description_is_rejected() {
        let req = CreateCategoryRequest {
            name: "Drinks".into(),
            description: "d".repeat(256),
        };

        let errors = req.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "description");
    }
}
