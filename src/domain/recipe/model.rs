use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub type RecipeId = i32;
pub type UserId = i32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(rename = "prepare_time")]
    pub prep_time: Option<i32>,
    pub difficulty: Option<i32>,
    #[serde(rename = "is_vegetarian")]
    pub vegetarian: bool,
    /// Running mean of every submitted score, 0 until the first one.
    pub rating: f64,
    #[serde(rename = "rated_num")]
    pub rated_count: i32,
}

/// Fields of a recipe about to be inserted. Rating starts at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub name: String,
    pub prep_time: Option<i32>,
    pub difficulty: Option<i32>,
    pub vegetarian: bool,
}

/// Partial overwrite: `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipePatch {
    pub name: Option<String>,
    pub prep_time: Option<i32>,
    pub difficulty: Option<i32>,
    pub vegetarian: Option<bool>,
}

impl RecipePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.prep_time.is_none()
            && self.difficulty.is_none()
            && self.vegetarian.is_none()
    }

    /// Merge the present fields into `recipe`. Rating fields are never touched.
    pub fn apply(&self, recipe: &mut Recipe) {
        if let Some(name) = &self.name {
            recipe.name = name.clone();
        }
        if let Some(prep_time) = self.prep_time {
            recipe.prep_time = Some(prep_time);
        }
        if let Some(difficulty) = self.difficulty {
            recipe.difficulty = Some(difficulty);
        }
        if let Some(vegetarian) = self.vegetarian {
            recipe.vegetarian = vegetarian;
        }
    }
}

/// A single rating submission, guaranteed to be within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score(i32);

impl Score {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    pub fn new(value: i32) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> i32 {
        self.0
    }
}
