use super::dto::{CreateRecipeRequest, RateRecipeRequest, UpdateRecipeRequest};
use super::error::RecipeServiceError;
use super::filter::RecipeFilter;
use super::model::{Recipe, RecipeId};
use super::paging::{PageRequest, PagingPolicy};
use super::validation::{validate_new_recipe, validate_patch, validate_score};
use crate::infrastructure::repositories::RecipeRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct RecipeService {
    recipe_repo: Arc<RecipeRepository>,
    paging: PagingPolicy,
}

impl RecipeService {
    pub fn new(recipe_repo: Arc<RecipeRepository>, paging: PagingPolicy) -> Self {
        Self {
            recipe_repo,
            paging,
        }
    }
}

#[async_trait]
pub trait RecipeServiceApi: Send + Sync {
    async fn list_recipes(
        &self,
        filter: RecipeFilter,
        page: PageRequest,
    ) -> Result<Vec<Recipe>, RecipeServiceError>;

    async fn create_recipe(
        &self,
        request: CreateRecipeRequest,
        token: &str,
    ) -> Result<Recipe, RecipeServiceError>;

    async fn get_recipe(&self, recipe_id: RecipeId) -> Result<Recipe, RecipeServiceError>;

    async fn update_recipe(
        &self,
        recipe_id: RecipeId,
        request: UpdateRecipeRequest,
        token: &str,
    ) -> Result<Recipe, RecipeServiceError>;

    async fn delete_recipe(
        &self,
        recipe_id: RecipeId,
        token: &str,
    ) -> Result<Recipe, RecipeServiceError>;

    async fn rate_recipe(
        &self,
        recipe_id: RecipeId,
        request: RateRecipeRequest,
    ) -> Result<Recipe, RecipeServiceError>;
}

#[async_trait]
impl RecipeServiceApi for RecipeService {
    async fn list_recipes(
        &self,
        filter: RecipeFilter,
        page: PageRequest,
    ) -> Result<Vec<Recipe>, RecipeServiceError> {
        let window = self.paging.normalize(page);
        let recipes = self.recipe_repo.list(&filter, window).await?;
        Ok(recipes)
    }

    async fn create_recipe(
        &self,
        request: CreateRecipeRequest,
        token: &str,
    ) -> Result<Recipe, RecipeServiceError> {
        let recipe = validate_new_recipe(request)?;
        let created = self.recipe_repo.add_by_credential(&recipe, token).await?;
        Ok(created)
    }

    async fn get_recipe(&self, recipe_id: RecipeId) -> Result<Recipe, RecipeServiceError> {
        self.recipe_repo
            .find_by_id(recipe_id)
            .await?
            .ok_or(RecipeServiceError::NotFound)
    }

    async fn update_recipe(
        &self,
        recipe_id: RecipeId,
        request: UpdateRecipeRequest,
        token: &str,
    ) -> Result<Recipe, RecipeServiceError> {
        let patch = validate_patch(request)?;
        let updated = self
            .recipe_repo
            .update_by_credential(&patch, recipe_id, token)
            .await?;
        Ok(updated)
    }

    async fn delete_recipe(
        &self,
        recipe_id: RecipeId,
        token: &str,
    ) -> Result<Recipe, RecipeServiceError> {
        let deleted = self
            .recipe_repo
            .delete_by_credential(recipe_id, token)
            .await?;
        Ok(deleted)
    }

    async fn rate_recipe(
        &self,
        recipe_id: RecipeId,
        request: RateRecipeRequest,
    ) -> Result<Recipe, RecipeServiceError> {
        let score = validate_score(request)?;
        let rated = self.recipe_repo.rate(score, recipe_id).await?;
        Ok(rated)
    }
}
