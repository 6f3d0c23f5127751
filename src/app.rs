use crate::config::Config;
use crate::conversion;
use crate::i18n::{self, keys, Translator};
use crate::separator::sizing;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 분리기 사이징 계산 오류
    Sizing(sizing::SizingError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::Sizing(e) => write!(f, "사이징 계산 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<sizing::SizingError> for AppError {
    fn from(value: sizing::SizingError) -> Self {
        AppError::Sizing(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 사이징 입력 오류는 루프를 끝내지 않고 메시지만 출력한 뒤 메뉴로 돌아간다.
pub fn run(config: &mut Config, mut tr: Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(&tr)? {
            MenuChoice::Sizing => match ui_cli::handle_sizing(&tr, config) {
                Err(AppError::Sizing(e)) => println!("{} {e}", tr.t(keys::ERROR_PREFIX)),
                other => other?,
            },
            MenuChoice::Presets => match ui_cli::handle_presets(&tr, config) {
                Err(AppError::Sizing(e)) => println!("{} {e}", tr.t(keys::ERROR_PREFIX)),
                other => other?,
            },
            MenuChoice::UnitConversion => match ui_cli::handle_unit_conversion(&tr, config) {
                Err(AppError::Conversion(e)) => println!("{} {e}", tr.t(keys::ERROR_PREFIX)),
                other => other?,
            },
            MenuChoice::Settings => {
                ui_cli::handle_settings(&tr, config)?;
                config.save()?;
                // 언어 설정이 바뀌었을 수 있으므로 번역기를 다시 만든다.
                let lang = i18n::resolve_language("", Some(config.language.as_str()));
                tr = Translator::new_with_pack(&lang, None);
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
