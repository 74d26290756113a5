use serde::Deserialize;
use sqlx::{Postgres, QueryBuilder};

/// Optional listing predicates. Bounds are inclusive and never range-checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecipeFilter {
    pub name: Option<String>,
    #[serde(rename = "prepare_time_from")]
    pub prep_time_from: Option<i32>,
    #[serde(rename = "prepare_time_to")]
    pub prep_time_to: Option<i32>,
    pub difficulty_from: Option<i32>,
    pub difficulty_to: Option<i32>,
    #[serde(rename = "is_vegetarian")]
    pub vegetarian: Option<bool>,
}

impl RecipeFilter {
    fn name_fragment(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Whether any predicate constrains the listing.
    pub fn is_active(&self) -> bool {
        self.name_fragment().is_some()
            || self.prep_time_from.is_some()
            || self.prep_time_to.is_some()
            || self.difficulty_from.is_some()
            || self.difficulty_to.is_some()
            || self.vegetarian.is_some()
    }

    /// Append a `WHERE` clause ANDing every active predicate.
    ///
    /// Values always travel as bind parameters. The name match uses `strpos`
    /// so `%` and `_` in user input are plain characters.
    pub fn push_predicates<'args>(&self, builder: &mut QueryBuilder<'args, Postgres>) {
        if !self.is_active() {
            return;
        }

        builder.push(" WHERE ");
        let mut predicates = builder.separated(" AND ");

        if let Some(name) = self.name_fragment() {
            predicates.push("strpos(name, ");
            predicates.push_bind_unseparated(name.to_owned());
            predicates.push_unseparated(") > 0");
        }
        if let Some(from) = self.prep_time_from {
            predicates.push("prep_time >= ");
            predicates.push_bind_unseparated(from);
        }
        if let Some(to) = self.prep_time_to {
            predicates.push("prep_time <= ");
            predicates.push_bind_unseparated(to);
        }
        if let Some(from) = self.difficulty_from {
            predicates.push("difficulty >= ");
            predicates.push_bind_unseparated(from);
        }
        if let Some(to) = self.difficulty_to {
            predicates.push("difficulty <= ");
            predicates.push_bind_unseparated(to);
        }
        if let Some(vegetarian) = self.vegetarian {
            predicates.push("vegetarian = ");
            predicates.push_bind_unseparated(vegetarian);
        }
    }
}
