use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::recycling::Period;

const CONFIG_FILE: &str = "config.toml";

/// GUI 테마 선택.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// 시스템/프레임워크 기본값
    #[default]
    System,
    Light,
    Dark,
}

/// 애플리케이션 설정을 표현한다. 입력값은 저장하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드("auto", "pt-br", "en-us" 등)
    pub language: String,
    /// 사용자 언어팩 디렉터리
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_pack_dir: Option<String>,
    /// 화면을 열었을 때 미리 선택되는 기간
    pub default_period: Period,
    pub theme: ThemeChoice,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            default_period: Period::default(),
            theme: ThemeChoice::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "file I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(CONFIG_FILE))
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값을 그 경로에 저장한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("cap_recycling_cfg_{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir.join(name)
    }

    #[test]
    fn missing_file_writes_defaults() {
        let path = scratch_path("missing.toml");
        let _ = fs::remove_file(&path);
        let cfg = load_from(&path).expect("load defaults");
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn roundtrips_through_toml() {
        let path = scratch_path("roundtrip.toml");
        let cfg = Config {
            language: "pt-br".into(),
            language_pack_dir: Some("locales".into()),
            default_period: Period::Weekly,
            theme: ThemeChoice::Dark,
        };
        cfg.save_to(&path).expect("save");
        let loaded = load_from(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: Config = toml::from_str("default_period = \"daily\"\n").expect("parse");
        assert_eq!(cfg.default_period, Period::Daily);
        assert_eq!(cfg.language, "auto");
        assert_eq!(cfg.theme, ThemeChoice::System);
    }

    #[test]
    fn bad_period_is_a_parse_error() {
        let path = scratch_path("bad.toml");
        fs::write(&path, "default_period = \"hourly\"\n").expect("write");
        assert!(matches!(load_from(&path), Err(ConfigError::Serde(_))));
    }
}
