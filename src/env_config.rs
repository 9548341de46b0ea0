use std::env;

use anyhow::{anyhow, Result};

use crate::cli::FilterArgs;

#[derive(Clone, Debug, Default)]
pub struct EnvDefaults {
    pub monitor: Option<usize>,
    pub model: Option<String>,
    pub serial: Option<String>,
    pub backend: Option<String>,
}

pub fn load_env_defaults() -> Result<EnvDefaults> {
    Ok(EnvDefaults {
        monitor: read_env_usize("MONITOR")?,
        model: read_env_string("MODEL")?,
        serial: read_env_string("SERIAL")?,
        backend: read_env_string("BACKEND")?,
    })
}

/// CLI指定を優先し、欠けている項目だけ環境変数から補う
pub fn merge_filter(cli: &FilterArgs, env: &EnvDefaults) -> FilterArgs {
    FilterArgs {
        model: cli.model.clone().or_else(|| env.model.clone()),
        serial: cli.serial.clone().or_else(|| env.serial.clone()),
        backend: cli.backend.clone().or_else(|| env.backend.clone()),
    }
}

/// モニタ番号はCLI引数→環境変数MONITOR→0の順で決める
pub fn resolve_monitor_index(cli: Option<usize>, env: &EnvDefaults) -> usize {
    cli.or(env.monitor).unwrap_or(0)
}

fn read_env_usize(key: &str) -> Result<Option<usize>> {
    match env::var(key) {
        Ok(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|e| anyhow!("{} の値を解釈できません: {}", key, e)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(anyhow!("{} が非Unicodeのため読み取れません", key))
        }
    }
}

fn read_env_string(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(anyhow!("{} が非Unicodeのため読み取れません", key))
        }
    }
}
