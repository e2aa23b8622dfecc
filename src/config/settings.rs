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

/// 应用程序配置设置
///
/// 包含服务器、搜索引擎和指标等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 搜索引擎配置
    pub engine: EngineSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// 是否启用跨域
    pub cors_enabled: bool,
    /// 500响应中是否包含底层错误详情
    pub expose_engine_errors: bool,
}

/// 搜索引擎配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// 引擎基础URL
    pub url: String,
    /// 请求超时时间（秒），不设置则不限制
    pub timeout_secs: Option<u64>,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用Prometheus导出
    pub enabled: bool,
    /// 导出器监听地址
    pub listen: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件和环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SEARCHGATE").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// 仅使用默认值并指定引擎地址，用于测试和嵌入式场景
    pub fn from_engine_url(url: &str) -> Result<Self, ConfigError> {
        Self::defaults(Config::builder())?
            .set_override("engine.url", url)?
            .build()?
            .try_deserialize()
    }

    fn defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            // Server
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5123)?
            .set_default("server.cors_enabled", true)?
            .set_default("server.expose_engine_errors", true)?
            // Search engine
            .set_default("engine.url", "http://127.0.0.1:9200")?
            // Metrics
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen", "0.0.0.0:9000")
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
