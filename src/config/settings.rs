// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_RESULT_LIMIT: u32 = 5;
const DEFAULT_RESTAURANT_DISTANCE: u32 = 5;
const DEFAULT_PAGE_SIZE: u32 = 10;
const DEFAULT_DEBOUNCE_MS: u64 = 300;
const DEFAULT_MIN_CHARS: usize = 2;
const DEFAULT_SUGGESTION_LIMIT: u32 = 5;
const DEFAULT_METRICS_ADDR: &str = "0.0.0.0:9000";
const DEFAULT_LOG_FILTER: &str = "info,foodie=debug,tower_http=debug";

/// 应用程序配置设置
///
/// 包含服务器、食品数据 API、菜谱分页、自动补全、指标和日志等配置项
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// Spoonacular API 配置
    pub spoonacular: SpoonacularSettings,
    /// 菜谱查找配置
    pub recipes: RecipeSettings,
    /// 自动补全配置
    pub autocomplete: AutocompleteSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
    /// 日志配置
    pub logging: LoggingSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Spoonacular API 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SpoonacularSettings {
    /// API 基础地址
    pub base_url: String,
    /// API 密钥，作为 `apiKey` 查询参数发送
    pub api_key: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 菜谱和商品搜索的结果上限
    pub result_limit: u32,
    /// 餐厅搜索半径（英里）
    pub restaurant_distance: u32,
}

impl Default for SpoonacularSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            result_limit: DEFAULT_RESULT_LIMIT,
            restaurant_distance: DEFAULT_RESTAURANT_DISTANCE,
        }
    }
}

/// 菜谱查找配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeSettings {
    /// 每页菜谱数量
    pub page_size: u32,
}

impl Default for RecipeSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// 自动补全配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct AutocompleteSettings {
    /// 防抖延迟（毫秒）
    pub debounce_ms: u64,
    /// 触发查找的最少字符数
    pub min_chars: usize,
    /// 建议数量上限
    pub limit: u32,
}

impl Default for AutocompleteSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_chars: DEFAULT_MIN_CHARS,
            limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出
    pub enabled: bool,
    /// 导出器监听地址
    pub listen_addr: String,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            listen_addr: DEFAULT_METRICS_ADDR.to_string(),
        }
    }
}

/// 日志配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// 默认过滤指令，`RUST_LOG` 存在时以其为准
    pub filter: String,
    /// 是否输出 JSON 格式日志
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}`
    /// 以及 `FOODIE__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            // Food data API
            .set_default("spoonacular.base_url", DEFAULT_BASE_URL)?
            .set_default("spoonacular.api_key", "")?
            .set_default("spoonacular.timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .set_default("spoonacular.result_limit", i64::from(DEFAULT_RESULT_LIMIT))?
            .set_default("spoonacular.restaurant_distance", i64::from(DEFAULT_RESTAURANT_DISTANCE))?
            // Recipe finder
            .set_default("recipes.page_size", i64::from(DEFAULT_PAGE_SIZE))?
            // Autocomplete
            .set_default("autocomplete.debounce_ms", DEFAULT_DEBOUNCE_MS as i64)?
            .set_default("autocomplete.min_chars", DEFAULT_MIN_CHARS as i64)?
            .set_default("autocomplete.limit", i64::from(DEFAULT_SUGGESTION_LIMIT))?
            // Metrics
            .set_default("metrics.enabled", true)?
            .set_default("metrics.listen_addr", DEFAULT_METRICS_ADDR)?
            // Logging
            .set_default("logging.filter", DEFAULT_LOG_FILTER)?
            .set_default("logging.json", false)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("FOODIE").separator("__"));

        builder.build()?.try_deserialize()
    }
}
