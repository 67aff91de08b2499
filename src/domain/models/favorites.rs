// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use super::recipe::Recipe;

/// 收藏夹
///
/// 按收藏顺序保存菜谱，以菜谱ID去重，只保存在内存中
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Favorites {
    recipes: Vec<Recipe>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the recipe if absent, otherwise remove it. Returns whether it is now a favorite.
    pub fn toggle(&mut self, recipe: &Recipe) -> bool {
        if self.remove(recipe.id) {
            false
        } else {
            self.recipes.push(recipe.clone());
            true
        }
    }

    pub fn remove(&mut self, recipe_id: i64) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|recipe| recipe.id != recipe_id);
        self.recipes.len() != before
    }

    pub fn contains(&self, recipe_id: i64) -> bool {
        self.recipes.iter().any(|recipe| recipe.id == recipe_id)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
