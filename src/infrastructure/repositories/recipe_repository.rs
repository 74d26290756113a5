use super::credential_repository::resolve_user_id;
use crate::domain::recipe::{
    NewRecipe, PageWindow, Recipe, RecipeFilter, RecipeId, RecipePatch, Score,
};
use crate::error::{AppError, AppResult};
use crate::infrastructure::db::DbPool;
use sqlx::{PgConnection, Postgres, QueryBuilder};
use std::sync::Arc;

/// Owns every read and write of recipes and their ownership links.
///
/// Holds no state besides the pool. Mutations that span several statements
/// run in one transaction and roll back on every failure path, including a
/// credential that does not own the recipe. Authorization failures and
/// missing rows both surface as `AppError::NotFound`.
pub struct RecipeRepository {
    pool: Arc<DbPool>,
}

fn not_found() -> AppError {
    AppError::NotFound("Recipe not found".to_string())
}

impl RecipeRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// List recipes matching `filter`, ordered by ascending id
    pub async fn list(&self, filter: &RecipeFilter, window: PageWindow) -> AppResult<Vec<Recipe>> {
        let pool = self.pool.as_ref();
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT id, name, prep_time, difficulty, vegetarian, rating, rated_count FROM recipes",
        );
        filter.push_predicates(&mut builder);
        builder
            .push(" ORDER BY id ASC LIMIT ")
            .push_bind(window.limit)
            .push(" OFFSET ")
            .push_bind(window.offset);

        let recipes = builder
            .build_query_as::<Recipe>()
            .fetch_all(pool)
            .await?;

        Ok(recipes)
    }

    /// Insert a recipe owned by the user holding `token`
    pub async fn add_by_credential(&self, recipe: &NewRecipe, token: &str) -> AppResult<Recipe> {
        let mut tx = self.pool.begin().await?;

        let Some(user_id) = resolve_user_id(&mut *tx, token).await? else {
            tx.rollback().await?;
            tracing::debug!("Recipe creation rejected: unknown credential");
            return Err(not_found());
        };

        let created = sqlx::query_as::<_, Recipe>(
            r#"
            INSERT INTO recipes (name, prep_time, difficulty, vegetarian, rating, rated_count)
            VALUES ($1, $2, $3, $4, 0, 0)
            RETURNING id, name, prep_time, difficulty, vegetarian, rating, rated_count
            "#,
        )
        .bind(&recipe.name)
        .bind(recipe.prep_time)
        .bind(recipe.difficulty)
        .bind(recipe.vegetarian)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO user_recipes (user_id, recipe_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(user_id)
        .bind(created.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(recipe_id = created.id, user_id, "Recipe created");
        Ok(created)
    }

    /// Get a recipe by ID
    pub async fn find_by_id(&self, recipe_id: RecipeId) -> AppResult<Option<Recipe>> {
        let pool = self.pool.as_ref();
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            SELECT id, name, prep_time, difficulty, vegetarian, rating, rated_count
            FROM recipes
            WHERE id = $1
            "#,
        )
        .bind(recipe_id)
        .fetch_optional(pool)
        .await?;

        Ok(recipe)
    }

    /// Partially overwrite a recipe owned by the user holding `token`
    pub async fn update_by_credential(
        &self,
        patch: &RecipePatch,
        recipe_id: RecipeId,
        token: &str,
    ) -> AppResult<Recipe> {
        if token.is_empty() {
            return Err(not_found());
        }

        let mut tx = self.pool.begin().await?;

        let Some(mut recipe) = lock_owned_recipe(&mut *tx, recipe_id, token).await? else {
            tx.rollback().await?;
            return Err(not_found());
        };

        patch.apply(&mut recipe);

        let updated = sqlx::query_as::<_, Recipe>(
            r#"
            UPDATE recipes r
            SET name = $1, prep_time = $2, difficulty = $3, vegetarian = $4
            FROM user_recipes ur
            JOIN users u ON u.id = ur.user_id
            WHERE r.id = $5 AND ur.recipe_id = r.id AND u.access_token = $6
            RETURNING r.id, r.name, r.prep_time, r.difficulty, r.vegetarian, r.rating, r.rated_count
            "#,
        )
        .bind(&recipe.name)
        .bind(recipe.prep_time)
        .bind(recipe.difficulty)
        .bind(recipe.vegetarian)
        .bind(recipe_id)
        .bind(token)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(updated) = updated else {
            tx.rollback().await?;
            return Err(not_found());
        };

        tx.commit().await?;

        tracing::info!(recipe_id, "Recipe updated");
        Ok(updated)
    }

    /// Delete a recipe owned by the user holding `token`, returning its last state
    pub async fn delete_by_credential(&self, recipe_id: RecipeId, token: &str) -> AppResult<Recipe> {
        if token.is_empty() {
            return Err(not_found());
        }

        let mut tx = self.pool.begin().await?;

        let Some(snapshot) = lock_owned_recipe(&mut *tx, recipe_id, token).await? else {
            tx.rollback().await?;
            return Err(not_found());
        };

        let result = sqlx::query(
            r#"
            DELETE FROM recipes r
            USING user_recipes ur, users u
            WHERE r.id = $1 AND ur.recipe_id = r.id AND ur.user_id = u.id AND u.access_token = $2
            "#,
        )
        .bind(recipe_id)
        .bind(token)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() != 1 {
            tx.rollback().await?;
            tracing::warn!(
                recipe_id,
                rows = result.rows_affected(),
                "Recipe delete matched an unexpected number of rows"
            );
            return Err(not_found());
        }

        tx.commit().await?;

        tracing::info!(recipe_id, "Recipe deleted");
        Ok(snapshot)
    }

    /// Fold one score into the running mean.
    ///
    /// The new mean is computed by the database from the row's values at
    /// write time, so concurrent submissions serialize on the row lock and
    /// none is lost.
    pub async fn rate(&self, score: Score, recipe_id: RecipeId) -> AppResult<Recipe> {
        let pool = self.pool.as_ref();
        let rated = sqlx::query_as::<_, Recipe>(
            r#"
            UPDATE recipes
            SET rating = (rating * rated_count + $1) / (rated_count + 1),
                rated_count = rated_count + 1
            WHERE id = $2
            RETURNING id, name, prep_time, difficulty, vegetarian, rating, rated_count
            "#,
        )
        .bind(f64::from(score.value()))
        .bind(recipe_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(not_found)?;

        tracing::debug!(
            recipe_id,
            score = score.value(),
            rating = rated.rating,
            rated_count = rated.rated_count,
            "Recipe rated"
        );
        Ok(rated)
    }
}

/// Read a recipe only if `token` owns it, holding its row lock until the
/// transaction ends.
async fn lock_owned_recipe(
    conn: &mut PgConnection,
    recipe_id: RecipeId,
    token: &str,
) -> AppResult<Option<Recipe>> {
    let recipe = sqlx::query_as::<_, Recipe>(
        r#"
        SELECT r.id, r.name, r.prep_time, r.difficulty, r.vegetarian, r.rating, r.rated_count
        FROM recipes r
        JOIN user_recipes ur ON ur.recipe_id = r.id
        JOIN users u ON u.id = ur.user_id
        WHERE r.id = $1 AND u.access_token = $2
        FOR UPDATE OF r
        "#,
    )
    .bind(recipe_id)
    .bind(token)
    .fetch_optional(conn)
    .await?;

    Ok(recipe)
}
