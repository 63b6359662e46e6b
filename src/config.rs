//! 설정 파일 로드/저장 (JSON)

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 출력 모드
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// 로마자 표기
    #[default]
    Romanize,
    /// 가타카나 표기 (ㅎ 묵음화만 적용)
    Katakana,
    /// 발음 규칙 적용 후 가타카나 표기
    Pronounce,
    /// 발음 규칙 적용 결과 (한글)
    Convert,
}

/// Sori 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SoriConfig {
    /// 로마자 표기에서 글자 사이 구분자
    #[serde(default = "default_separator")]
    pub separator: String,
    /// 명령행에서 모드를 생략했을 때의 출력 모드
    #[serde(default)]
    pub mode: OutputMode,
}

fn default_separator() -> String {
    " ".to_string()
}

impl Default for SoriConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            mode: OutputMode::default(),
        }
    }
}

impl SoriConfig {
    /// 명령행에서 준 값으로 덮어쓴 설정
    pub fn with_overrides(mut self, mode: Option<OutputMode>, separator: Option<String>) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(separator) = separator {
            self.separator = separator;
        }
        self
    }
}

/// 설정 파일 경로: $SORI_CONFIG 또는 ~/.config/sori/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("SORI_CONFIG").filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("sori").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> SoriConfig {
    load_config_from(&config_path())
}

fn load_config_from(path: &Path) -> SoriConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            SoriConfig::default()
        }),
        Err(_) => SoriConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &SoriConfig) -> Result<(), String> {
    save_config_to(&config_path(), config)
}

fn save_config_to(path: &Path, config: &SoriConfig) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    log::info!("설정 저장: {}", path.display());
    Ok(())
}
