use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::domain::recipe::{
    CreateRecipeRequest, PageRequest, RateRecipeRequest, Recipe, RecipeFilter, RecipeId,
    RecipeService, RecipeServiceApi, RecipeServiceError, UpdateRecipeRequest,
};
use crate::error::AppResult;
use crate::infrastructure::auth::Credential;
use crate::infrastructure::http::extract::{JsonBody, QueryParams};

pub struct RecipeController {
    recipe_service: Arc<RecipeService>,
}

/// Non-numeric ids can never match a recipe, so they are reported as not found.
fn parse_recipe_id(raw: &str) -> Result<RecipeId, RecipeServiceError> {
    raw.parse().map_err(|_| RecipeServiceError::NotFound)
}

impl RecipeController {
    pub fn new(recipe_service: Arc<RecipeService>) -> Self {
        Self { recipe_service }
    }

    /// GET /recipes - List recipes matching the query filter
    pub async fn list_recipes(
        State(controller): State<Arc<RecipeController>>,
        QueryParams(filter): QueryParams<RecipeFilter>,
        QueryParams(page): QueryParams<PageRequest>,
    ) -> AppResult<Json<Vec<Recipe>>> {
        let recipes = controller.recipe_service.list_recipes(filter, page).await?;
        Ok(Json(recipes))
    }

    /// POST /recipes - Create a recipe owned by the caller
    pub async fn create_recipe(
        State(controller): State<Arc<RecipeController>>,
        credential: Credential,
        JsonBody(request): JsonBody<CreateRecipeRequest>,
    ) -> AppResult<Json<Recipe>> {
        let recipe = controller
            .recipe_service
            .create_recipe(request, credential.token())
            .await?;
        Ok(Json(recipe))
    }

    /// GET /recipes/{id}
    pub async fn get_recipe(
        State(controller): State<Arc<RecipeController>>,
        Path(id): Path<String>,
    ) -> AppResult<Json<Recipe>> {
        let recipe_id = parse_recipe_id(&id)?;
        let recipe = controller.recipe_service.get_recipe(recipe_id).await?;
        Ok(Json(recipe))
    }

    /// PUT /recipes/{id} - Partially update a recipe owned by the caller
    pub async fn update_recipe(
        State(controller): State<Arc<RecipeController>>,
        Path(id): Path<String>,
        credential: Credential,
        JsonBody(request): JsonBody<UpdateRecipeRequest>,
    ) -> AppResult<Json<Recipe>> {
        let recipe_id = parse_recipe_id(&id)?;
        let recipe = controller
            .recipe_service
            .update_recipe(recipe_id, request, credential.token())
            .await?;
        Ok(Json(recipe))
    }

    /// DELETE /recipes/{id} - Delete a recipe owned by the caller, returning it
    pub async fn delete_recipe(
        State(controller): State<Arc<RecipeController>>,
        Path(id): Path<String>,
        credential: Credential,
    ) -> AppResult<Json<Recipe>> {
        let recipe_id = parse_recipe_id(&id)?;
        let recipe = controller
            .recipe_service
            .delete_recipe(recipe_id, credential.token())
            .await?;
        Ok(Json(recipe))
    }

    /// POST /recipes/{id}/rating
    pub async fn rate_recipe(
        State(controller): State<Arc<RecipeController>>,
        Path(id): Path<String>,
        JsonBody(request): JsonBody<RateRecipeRequest>,
    ) -> AppResult<Json<Recipe>> {
        let recipe_id = parse_recipe_id(&id)?;
        let recipe = controller
            .recipe_service
            .rate_recipe(recipe_id, request)
            .await?;
        Ok(Json(recipe))
    }
}
