pub mod credential_repository;
pub mod recipe_repository;

pub use credential_repository::{resolve_user_id, CredentialRepository};
pub use recipe_repository::RecipeRepository;
