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

use foodie::application::services::Services;
use foodie::config::settings::Settings;
use foodie::domain::search::source::FoodDataSource;
use foodie::infrastructure::spoonacular::SpoonacularClient;
use foodie::presentation::routes;
use foodie::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.logging);
    info!("Starting foodie...");

    // 3. Initialize Prometheus Metrics
    if settings.metrics.enabled {
        foodie::infrastructure::metrics::init_metrics(&settings.metrics.listen_addr);
    }

    // 4. Initialize the food data client
    if settings.spoonacular.api_key.is_empty() {
        warn!("FOODIE__SPOONACULAR__API_KEY is not set; every API call will fail and fall back");
    }
    let source: Arc<dyn FoodDataSource> = Arc::new(SpoonacularClient::new(&settings.spoonacular)?);
    info!("Food data client initialized ({})", settings.spoonacular.base_url);

    // 5. Start HTTP server
    let app = routes::app(Services::new(source, &settings));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
