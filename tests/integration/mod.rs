// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod recipe_details_test;
pub mod restaurant_lookup_test;
