use serde::{Deserialize, Serialize};

/// Request to create a recipe. Required fields are optional here so that
/// missing ones surface as validation errors instead of body rejections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRecipeRequest {
    pub name: Option<String>,
    pub prepare_time: Option<i32>,
    pub difficulty: Option<i32>,
    pub is_vegetarian: Option<bool>,
}

/// Request to update a recipe; omitted or `null` fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRecipeRequest {
    pub name: Option<String>,
    pub prepare_time: Option<i32>,
    pub difficulty: Option<i32>,
    pub is_vegetarian: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateRecipeRequest {
    pub rating: Option<i32>,
}
