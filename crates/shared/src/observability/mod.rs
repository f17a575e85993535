//! 统一可观测性模块
//!
//! 提供日志、Prometheus 指标和 HTTP 中间件的统一初始化。
//! 三个服务通过同一入口配置可观测性，确保一致的日志格式和指标命名。

pub mod metrics;
pub mod middleware;
pub mod tracing;

use ::tracing::info;
use anyhow::Result;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;

/// 可观测性资源
///
/// 持有已安装的 Prometheus recorder 句柄，用于渲染 `/metrics`。
pub struct Telemetry {
    metrics_handle: Option<PrometheusHandle>,
}

impl Telemetry {
    pub fn metrics_handle(&self) -> Option<&PrometheusHandle> {
        self.metrics_handle.as_ref()
    }
}

/// 统一初始化可观测性
///
/// 初始化顺序：
/// 1. 日志（tracing subscriber）
/// 2. Prometheus 指标 recorder（`observability.metrics_enabled` 为真时）
///
/// 每个进程只能调用一次。
pub fn init(config: &AppConfig) -> Result<Telemetry> {
    tracing::init(&config.observability)?;

    let metrics_handle = if config.observability.metrics_enabled {
        Some(metrics::install_recorder(&config.service_name)?)
    } else {
        None
    };

    info!(
        service = %config.service_name,
        log_level = %config.observability.log_level,
        metrics_enabled = config.observability.metrics_enabled,
        "Observability initialized"
    );

    Ok(Telemetry { metrics_handle })
}
