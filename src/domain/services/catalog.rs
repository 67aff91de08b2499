// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::domain::models::product::ProductDetails;
use crate::domain::search::source::FoodDataSource;

pub const INVALID_PRODUCT_MESSAGE: &str = "Invalid product ID.";
pub const PRODUCT_FAILED_MESSAGE: &str = "Failed to load product details.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Upstream(String),
}

/// 商品目录服务
pub struct ProductCatalog {
    source: Arc<dyn FoodDataSource>,
}

impl ProductCatalog {
    pub fn new(source: Arc<dyn FoodDataSource>) -> Self {
        Self { source }
    }

    pub async fn product_details(&self, id: &str) -> Result<ProductDetails, CatalogError> {
        let id = id.trim();
        if id.is_empty() || id == "undefined" {
            return Err(CatalogError::Validation(INVALID_PRODUCT_MESSAGE.to_string()));
        }
        self.source.product_details(id).await.map_err(|e| {
            warn!("Product {} lookup failed: {}", id, e);
            CatalogError::Upstream(
                e.api_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| PRODUCT_FAILED_MESSAGE.to_string()),
            )
        })
    }
}
