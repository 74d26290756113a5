pub mod dto;
pub mod error;
pub mod filter;
pub mod model;
pub mod paging;
pub mod service;
pub mod validation;

pub use dto::{CreateRecipeRequest, RateRecipeRequest, UpdateRecipeRequest};
pub use error::RecipeServiceError;
pub use filter::RecipeFilter;
pub use model::{NewRecipe, Recipe, RecipeId, RecipePatch, Score, UserId};
pub use paging::{PageRequest, PageWindow, PagingPolicy};
pub use service::{RecipeService, RecipeServiceApi};
