//! 配置加载：TOML 文件 + 环境变量覆盖

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "ddns-web", version, about = "DDNS record update endpoint")]
pub struct Args {
    /// 配置文件路径，不存在时使用默认配置
    #[arg(short, long, env = "DDNS_CONFIG", default_value = "config.toml")]
    pub config: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// `None` 时由 actix 按 CPU 数决定
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` 指令，如 `info` 或 `ddns_provider=debug,info`
    pub level: String,
    pub format: LogFormat,
    /// 日志文件路径（按天滚动），为空时输出到 stdout
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            file: None,
        }
    }
}

impl Config {
    /// 读取配置文件并应用环境变量覆盖
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))?
        } else {
            Self::default()
        };

        config.with_overrides(|name| std::env::var(name).ok())
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// `DDNS_HOST` / `DDNS_PORT` / `DDNS_LOG_LEVEL`
    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        if let Some(host) = var("DDNS_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("DDNS_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("DDNS_PORT is not a valid port: {port}"))?;
        }
        if let Some(level) = var("DDNS_LOG_LEVEL") {
            self.log.level = level;
        }
        Ok(self)
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr(), ("127.0.0.1".to_string(), 8080));
    }

    #[test]
    fn parses_all_sections() {
        let config = Config::parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            workers = 2

            [log]
            level = "debug"
            format = "json"
            file = "/var/log/ddns/ddns.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.workers, Some(2));
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(
            config.log.file.as_deref(),
            Some(Path::new("/var/log/ddns/ddns.log"))
        );
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = Config::parse("[server]\nport = 8053\n").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8053);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn env_overrides_win() {
        let config = Config::default()
            .with_overrides(|name| match name {
                "DDNS_HOST" => Some("0.0.0.0".to_string()),
                "DDNS_PORT" => Some("9090".to_string()),
                "DDNS_LOG_LEVEL" => Some("warn".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.bind_addr(), ("0.0.0.0".to_string(), 9090));
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn invalid_port_override_is_an_error() {
        let result = Config::default().with_overrides(|name| {
            (name == "DDNS_PORT").then(|| "eighty".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Config::parse("[log]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load(Path::new("/nonexistent/ddns-config.toml")).unwrap();
        assert_eq!(config.server.workers, None);
        assert_eq!(config.log.format, LogFormat::Pretty);
    }
}
