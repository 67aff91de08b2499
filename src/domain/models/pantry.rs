// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 储藏室
///
/// 有序且不重复的食材名列表，只保存在内存中
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pantry {
    ingredients: Vec<String>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a typed ingredient. Returns `false` for blank or already present input.
    pub fn add(&mut self, input: &str) -> bool {
        let name = input.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.ingredients.push(name.to_string());
        true
    }

    /// Add a picked autocomplete suggestion as-is.
    pub fn select_suggestion(&mut self, suggestion: &str) -> bool {
        if self.contains(suggestion) {
            return false;
        }
        self.ingredients.push(suggestion.to_string());
        true
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.ingredients.len();
        self.ingredients.retain(|item| item != name);
        self.ingredients.len() != before
    }

    pub fn clear(&mut self) {
        self.ingredients.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ingredients.iter().any(|item| item == name)
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Pantry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut pantry = Pantry::new();
        for input in iter {
            pantry.add(input.as_ref());
        }
        pantry
    }
}
