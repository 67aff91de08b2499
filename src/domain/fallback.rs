// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Compiled-in sample data shown when the food API cannot serve a request.

use once_cell::sync::Lazy;

use crate::domain::models::recipe::{IngredientRef, Recipe};
use crate::domain::models::restaurant::{Restaurant, RestaurantSource};

static FALLBACK_RESTAURANTS: Lazy<Vec<Restaurant>> = Lazy::new(|| {
    vec![
        sample_restaurant(
            "Lagos Bistro",
            "123 Marina St, Lagos, Nigeria",
            4.5,
            &["African", "Continental"],
            "Lagos",
        ),
        sample_restaurant(
            "Abuja Grill",
            "456 Wuse Zone, Abuja, Nigeria",
            4.3,
            &["Local", "BBQ"],
            "Abuja",
        ),
        sample_restaurant(
            "Port Harcourt Seafood Hub",
            "789 GRA Phase II, Port Harcourt, Nigeria",
            4.1,
            &["Seafood", "Nigerian"],
            "Port Harcourt",
        ),
    ]
});

static MOCK_RECIPES: Lazy<Vec<Recipe>> = Lazy::new(|| {
    vec![
        Recipe {
            id: 1,
            title: "Tomato Pasta".to_string(),
            image: None,
            ready_in_minutes: Some(20),
            diets: vec!["vegetarian".to_string()],
            cuisines: vec!["Italian".to_string()],
            used_ingredients: vec![IngredientRef::named("tomato"), IngredientRef::named("pasta")],
            missed_ingredients: Vec::new(),
        },
        Recipe {
            id: 2,
            title: "Chicken Stir Fry".to_string(),
            image: None,
            ready_in_minutes: Some(15),
            diets: Vec::new(),
            cuisines: vec!["Asian".to_string()],
            used_ingredients: vec![IngredientRef::named("chicken"), IngredientRef::named("rice")],
            missed_ingredients: vec![IngredientRef::named("soy sauce")],
        },
    ]
});

fn sample_restaurant(
    name: &str,
    address: &str,
    rating: f64,
    cuisines: &[&str],
    city: &str,
) -> Restaurant {
    Restaurant {
        name: name.to_string(),
        address: address.to_string(),
        rating: Some(rating),
        cuisines: cuisines.iter().map(|c| c.to_string()).collect(),
        city: Some(city.to_string()),
        source: RestaurantSource::Sample,
    }
}

/// The full fallback restaurant catalog, one record per known city.
pub fn restaurants() -> &'static [Restaurant] {
    &FALLBACK_RESTAURANTS
}

/// Sample recipes returned by the pantry recipe finder when the API fails.
pub fn recipes() -> &'static [Recipe] {
    &MOCK_RECIPES
}
