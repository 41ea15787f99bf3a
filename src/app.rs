use std::io::{BufRead, Write};

use crate::config::Config;
use crate::form::{self, FormError};
use crate::format;
use crate::i18n::{self, keys, Translator};
use crate::recycling::{EstimationResult, Period};
use crate::ui_cli::{self, MenuChoice, Prompter};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 입력/계산 오류
    Form(FormError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "config error: {e}"),
            AppError::Form(e) => write!(f, "{e}"),
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

impl From<FormError> for AppError {
    fn from(value: FormError) -> Self {
        AppError::Form(value)
    }
}

/// 설정의 언어 값으로 번역기를 만든다.
pub fn translator_for(config: &Config, cli_lang: Option<&str>) -> Translator {
    let lang = i18n::resolve_language(cli_lang.unwrap_or("auto"), Some(config.language.as_str()));
    Translator::new_with_pack(&lang, config.language_pack_dir.as_deref())
}

/// 개수 세 개를 받아 한 번만 계산한다. 기간이 없으면 설정의 기본 기간을 쓴다.
///
/// 결과는 `out`, 입력/계산 오류 문구는 `err`에 쓰고 오류는 그대로 돌려준다.
pub fn run_estimate<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    tr: &Translator,
    config: &Config,
    counts: [&str; 3],
    period: Option<Period>,
) -> Result<EstimationResult, AppError> {
    let [two_liter, one_liter, mineral_water] = counts;
    let period = period.unwrap_or(config.default_period);
    match form::estimate_from_text(two_liter, one_liter, mineral_water, period) {
        Ok(res) => {
            let (weight, value) = format::format_result(&res);
            writeln!(out, "{} {weight}", tr.t(keys::RESULT_ANNUAL_WEIGHT))?;
            writeln!(out, "{} {value}", tr.t(keys::RESULT_ANNUAL_VALUE))?;
            Ok(res)
        }
        Err(e) => {
            writeln!(
                err,
                "{}: {}",
                tr.t(keys::ERROR_PREFIX),
                form::describe_error(tr, &e)
            )?;
            Err(AppError::Form(e))
        }
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 설정 변경은 `persist`가 true일 때만 config.toml에 기록한다.
pub fn run<R: BufRead, W: Write>(
    io: &mut Prompter<R, W>,
    config: &mut Config,
    tr: &mut Translator,
    persist: bool,
) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(io, tr)? {
            MenuChoice::Calculate => {
                ui_cli::handle_calculate(io, tr, config)?;
            }
            MenuChoice::Settings => {
                if ui_cli::handle_settings(io, tr, config)? {
                    *tr = translator_for(config, None);
                }
                if persist {
                    config.save()?;
                }
            }
            MenuChoice::Exit => {
                io.say(tr.t(keys::APP_EXIT))?;
                break;
            }
        }
    }
    Ok(())
}
