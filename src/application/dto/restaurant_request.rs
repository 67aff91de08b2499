// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct RestaurantSearchRequestDto {
    #[validate(length(min = 1, message = "Please enter a city in Nigeria."))]
    pub location: String,
}
