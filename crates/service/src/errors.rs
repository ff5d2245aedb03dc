use models::{FieldViolation, ModelError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{}", ModelError::Validation(.0.clone()))]
    Validation(Vec<FieldViolation>),
    #[error("{0}")]
    NotFound(String),
}

impl ServiceError {
    pub fn not_found(kind: &str, id: &str) -> Self {
        Self::NotFound(format!("{kind} {id} not found"))
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(v) => ServiceError::Validation(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_matches_model_error() {
        let err: ServiceError =
            ModelError::Validation(vec![FieldViolation::new("name", "is required")]).into();
        assert_eq!(err.to_string(), "validation error: name: is required");
        assert_eq!(ServiceError::not_found("product", "42").to_string(), "product 42 not found");
    }
}
