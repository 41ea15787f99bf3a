use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::form::{self, EstimateForm, FormError};
use crate::format;
use crate::i18n::{self, keys, Translator};
use crate::input;
use crate::recycling::{BottleKind, EstimationResult, Period};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Settings,
    Exit,
}

/// 프롬프트 입출력. 테스트에서는 메모리 버퍼를 넣는다.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// 한 줄을 읽는다. 입력이 끝나면 UnexpectedEof를 돌려 무한 재시도를 막는다.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended",
            )));
        }
        Ok(buf)
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu<R: BufRead, W: Write>(
    io: &mut Prompter<R, W>,
    tr: &Translator,
) -> Result<MenuChoice, AppError> {
    io.say(tr.t(keys::MAIN_MENU_TITLE))?;
    io.say(tr.t(keys::MAIN_MENU_CALCULATE))?;
    io.say(tr.t(keys::MAIN_MENU_SETTINGS))?;
    io.say(tr.t(keys::MAIN_MENU_EXIT))?;
    loop {
        let sel = io.read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => io.say(tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    }
}

/// 계산 메뉴를 처리한다. 음수 입력은 안내만 하고 결과는 출력하지 않는다.
pub fn handle_calculate<R: BufRead, W: Write>(
    io: &mut Prompter<R, W>,
    tr: &Translator,
    cfg: &Config,
) -> Result<Option<EstimationResult>, AppError> {
    io.say(tr.t(keys::CALC_HEADING))?;
    io.say(tr.t(keys::HELP_CALCULATE))?;
    let mut form = EstimateForm::new(cfg.default_period);
    for kind in BottleKind::ALL {
        *form.field_mut(kind) = read_count(io, tr, kind)?.to_string();
    }
    form.period = read_period(io, tr, cfg.default_period)?;
    match form.calculate() {
        Ok(result) => {
            print_result(io, tr, &result)?;
            Ok(Some(result))
        }
        Err(err @ FormError::Estimate(_)) => {
            io.say(&format!(
                "{}: {}",
                tr.t(keys::ERROR_PREFIX),
                form::describe_error(tr, &err)
            ))?;
            Ok(None)
        }
        Err(err) => Err(AppError::Form(err)),
    }
}

/// 설정 메뉴를 처리한다. 언어가 바뀌면 true.
pub fn handle_settings<R: BufRead, W: Write>(
    io: &mut Prompter<R, W>,
    tr: &Translator,
    cfg: &mut Config,
) -> Result<bool, AppError> {
    io.say(tr.t(keys::SETTINGS_HEADING))?;
    io.say(&format!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language
    ))?;
    io.say(tr.t(keys::SETTINGS_LANGUAGE_OPTIONS))?;
    let sel = io.read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(false);
    }
    let language = match sel.trim() {
        "1" => "auto",
        "2" => "pt-br",
        "3" => "en-us",
        _ => {
            io.say(tr.t(keys::SETTINGS_INVALID))?;
            return Ok(false);
        }
    };
    let changed = cfg.language != language;
    cfg.language = language.to_string();
    io.say(&format!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language))?;
    Ok(changed)
}

/// 결과 두 줄을 출력한다.
pub fn print_result<R: BufRead, W: Write>(
    io: &mut Prompter<R, W>,
    tr: &Translator,
    result: &EstimationResult,
) -> Result<(), AppError> {
    let (weight, value) = format::format_result(result);
    io.say(tr.t(keys::RESULT_HEADING))?;
    io.say(&format!("{} {weight}", tr.t(keys::RESULT_ANNUAL_WEIGHT)))?;
    io.say(&format!("{} {value}", tr.t(keys::RESULT_ANNUAL_VALUE)))?;
    Ok(())
}

fn read_count<R: BufRead, W: Write>(
    io: &mut Prompter<R, W>,
    tr: &Translator,
    kind: BottleKind,
) -> Result<i64, AppError> {
    let prompt = format!("{}: ", tr.t(i18n::bottle_key(kind)));
    loop {
        let s = io.read_line(&prompt)?;
        match input::parse_count(kind, &s) {
            Ok(v) => return Ok(v),
            Err(e) => io.say(&form::describe_error(tr, &FormError::Parse(e)))?,
        }
    }
}

fn read_period<R: BufRead, W: Write>(
    io: &mut Prompter<R, W>,
    tr: &Translator,
    default: Period,
) -> Result<Period, AppError> {
    let prompt = i18n::fill_template(
        tr.t(keys::PROMPT_PERIOD),
        &[("default", tr.t(i18n::period_key(default)).to_string())],
    );
    loop {
        let s = io.read_line(&prompt)?;
        if s.trim().is_empty() {
            return Ok(default);
        }
        match s.parse::<Period>() {
            Ok(p) => return Ok(p),
            Err(_) => io.say(tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    }
}
