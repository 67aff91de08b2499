// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use parking_lot::Mutex;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::models::product::ProductSuggestion;
use crate::domain::search::source::FoodDataSource;

pub const INGREDIENT_SUGGESTIONS_FAILED: &str = "Failed to fetch ingredient suggestions.";
pub const PRODUCT_SUGGESTIONS_FAILED: &str = "Failed to fetch product suggestions.";

/// 自动补全建议
///
/// 查找失败时 `items` 为空，`error` 携带提示信息
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Suggestions<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Default for Suggestions<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
        }
    }
}

pub struct Autocomplete {
    source: Arc<dyn FoodDataSource>,
    min_chars: usize,
    limit: u32,
}

impl Autocomplete {
    pub fn new(source: Arc<dyn FoodDataSource>, min_chars: usize, limit: u32) -> Self {
        Self {
            source,
            min_chars,
            limit,
        }
    }

    /// Ingredient names matching the trimmed input.
    pub async fn suggest_ingredients(&self, input: &str) -> Suggestions<String> {
        let input = input.trim();
        if input.chars().count() < self.min_chars {
            return Suggestions::default();
        }
        match self.source.suggest_ingredients(input, self.limit).await {
            Ok(items) => Suggestions {
                items: items.into_iter().map(|item| item.name).collect(),
                error: None,
            },
            Err(e) => {
                warn!("Ingredient suggestions for {:?} failed: {}", input, e);
                Suggestions {
                    items: Vec::new(),
                    error: Some(
                        e.api_message()
                            .map(str::to_string)
                            .unwrap_or_else(|| INGREDIENT_SUGGESTIONS_FAILED.to_string()),
                    ),
                }
            }
        }
    }

    /// Product suggestions; the input is passed through untrimmed.
    pub async fn suggest_products(&self, input: &str) -> Suggestions<ProductSuggestion> {
        if input.chars().count() < self.min_chars {
            return Suggestions::default();
        }
        match self.source.suggest_products(input, self.limit).await {
            Ok(items) => Suggestions { items, error: None },
            Err(e) => {
                warn!("Product suggestions for {:?} failed: {}", input, e);
                Suggestions {
                    items: Vec::new(),
                    error: Some(
                        e.api_message()
                            .map(str::to_string)
                            .unwrap_or_else(|| PRODUCT_SUGGESTIONS_FAILED.to_string()),
                    ),
                }
            }
        }
    }
}

/// 防抖器
///
/// 每次调度都会中止上一次尚未完成的任务，只有静默 `delay`
/// 之后的最后一次输入才会真正执行，结果通过 watch 通道发布。
pub struct Debouncer<T> {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
    tx: Arc<watch::Sender<T>>,
}

impl<T> Debouncer<T>
where
    T: Send + Sync + 'static,
{
    pub fn new(delay: Duration, initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            delay,
            pending: Mutex::new(None),
            tx: Arc::new(tx),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    pub fn schedule<F, Fut>(&self, job: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        let tx = self.tx.clone();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let value = job().await;
            tx.send_replace(value);
        });

        if let Some(previous) = self.pending.lock().replace(handle) {
            debug!("Superseding pending debounced job");
            previous.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }
}

/// Ingredient autocomplete driven by keystrokes.
pub struct DebouncedIngredientSuggestions {
    autocomplete: Arc<Autocomplete>,
    debouncer: Debouncer<Suggestions<String>>,
}

impl DebouncedIngredientSuggestions {
    pub fn new(autocomplete: Arc<Autocomplete>, delay: Duration) -> Self {
        Self {
            autocomplete,
            debouncer: Debouncer::new(delay, Suggestions::default()),
        }
    }

    /// Record the current input; a lookup runs once typing pauses.
    pub fn input(&self, text: impl Into<String>) {
        let autocomplete = self.autocomplete.clone();
        let text = text.into();
        self.debouncer
            .schedule(move || async move { autocomplete.suggest_ingredients(&text).await });
    }

    pub fn subscribe(&self) -> watch::Receiver<Suggestions<String>> {
        self.debouncer.subscribe()
    }
}
