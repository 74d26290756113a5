use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum RecipeServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    /// Missing recipe, unknown credential, or a credential that does not own the recipe.
    #[error("recipe not found")]
    NotFound,
}

impl From<AppError> for RecipeServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => RecipeServiceError::Invalid(msg),
            AppError::NotFound(_) => RecipeServiceError::NotFound,
            _ => RecipeServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<RecipeServiceError> for AppError {
    fn from(err: RecipeServiceError) -> Self {
        match err {
            RecipeServiceError::Invalid(msg) => AppError::BadRequest(msg),
            RecipeServiceError::NotFound => AppError::NotFound("Recipe not found".to_string()),
            RecipeServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
