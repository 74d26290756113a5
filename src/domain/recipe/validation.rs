//! Input rules for recipe requests.
//!
//! Each function consumes a request DTO and returns the typed domain input,
//! so nothing downstream can see an unchecked value.

use super::dto::{CreateRecipeRequest, RateRecipeRequest, UpdateRecipeRequest};
use super::error::RecipeServiceError;
use super::model::{NewRecipe, RecipePatch, Score};

pub const NAME_MAX_LEN: usize = 512;
pub const DIFFICULTY_MIN: i32 = 1;
pub const DIFFICULTY_MAX: i32 = 3;

fn invalid(msg: impl Into<String>) -> RecipeServiceError {
    RecipeServiceError::Invalid(msg.into())
}

fn check_name(name: &str) -> Result<(), RecipeServiceError> {
    if name.is_empty() {
        return Err(invalid("name must not be empty"));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(invalid(format!(
            "name must be at most {} characters",
            NAME_MAX_LEN
        )));
    }
    Ok(())
}

fn check_prep_time(prep_time: Option<i32>) -> Result<(), RecipeServiceError> {
    match prep_time {
        Some(minutes) if minutes <= 0 => Err(invalid("prepare_time must be positive")),
        _ => Ok(()),
    }
}

fn check_difficulty(difficulty: Option<i32>) -> Result<(), RecipeServiceError> {
    match difficulty {
        Some(level) if !(DIFFICULTY_MIN..=DIFFICULTY_MAX).contains(&level) => Err(invalid(
            format!(
                "difficulty must be between {} and {}",
                DIFFICULTY_MIN, DIFFICULTY_MAX
            ),
        )),
        _ => Ok(()),
    }
}

pub fn validate_new_recipe(request: CreateRecipeRequest) -> Result<NewRecipe, RecipeServiceError> {
    let name = request.name.ok_or_else(|| invalid("name is required"))?;
    check_name(&name)?;
    check_prep_time(request.prepare_time)?;
    check_difficulty(request.difficulty)?;
    let vegetarian = request
        .is_vegetarian
        .ok_or_else(|| invalid("is_vegetarian is required"))?;

    Ok(NewRecipe {
        name,
        prep_time: request.prepare_time,
        difficulty: request.difficulty,
        vegetarian,
    })
}

pub fn validate_patch(request: UpdateRecipeRequest) -> Result<RecipePatch, RecipeServiceError> {
    if let Some(name) = &request.name {
        check_name(name)?;
    }
    check_prep_time(request.prepare_time)?;
    check_difficulty(request.difficulty)?;

    Ok(RecipePatch {
        name: request.name,
        prep_time: request.prepare_time,
        difficulty: request.difficulty,
        vegetarian: request.is_vegetarian,
    })
}

pub fn validate_score(request: RateRecipeRequest) -> Result<Score, RecipeServiceError> {
    let rating = request.rating.ok_or_else(|| invalid("rating is required"))?;
    Score::new(rating).ok_or_else(|| {
        invalid(format!(
            "rating must be between {} and {}",
            Score::MIN,
            Score::MAX
        ))
    })
}
