//! tracing 初始化
//!
//! 库内通过 `log` 输出的记录经 `tracing-log` 桥接进同一个 subscriber。

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::{LogFormat, LogSettings};

/// 安装全局 subscriber
///
/// `RUST_LOG` 优先于配置中的 `level`；过滤器只在启动时构建一次。
/// 写文件时返回的 guard 必须存活到进程退出，否则缓冲的日志会丢失。
pub fn init(settings: &LogSettings) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = env_filter(&settings.level);

    let guard = match &settings.file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let filename = path.file_name().ok_or_else(|| {
                anyhow::anyhow!("log file path has no file name: {}", path.display())
            })?;

            let appender = tracing_appender::rolling::daily(directory, filename);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer(settings.format, writer, false))
                .try_init()?;
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer(
                    settings.format,
                    std::io::stdout,
                    settings.format != LogFormat::Json,
                ))
                .try_init()?;
            None
        }
    };

    Ok(guard)
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn fmt_layer<S, W>(format: LogFormat, writer: W, ansi: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
    let base = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(ansi);

    match format {
        LogFormat::Json => Box::new(base.json()),
        LogFormat::Compact => Box::new(base.compact()),
        LogFormat::Pretty => Box::new(base.pretty()),
    }
}
