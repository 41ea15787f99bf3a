//! 입력 화면 상태와 계산 호출을 묶는 어댑터. CLI와 GUI가 함께 쓴다.

use crate::format;
use crate::i18n::{self, keys, Translator};
use crate::input::{self, ParseError};
use crate::recycling::{self, BottleKind, EstimateError, EstimationResult, Period};

/// 한 번의 계산 시도에서 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// 정수가 아닌 입력
    Parse(ParseError),
    /// 음수 개수
    Estimate(EstimateError),
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::Parse(e) => write!(f, "input error: {e}"),
            FormError::Estimate(e) => write!(f, "estimate error: {e}"),
        }
    }
}

impl std::error::Error for FormError {}

impl From<ParseError> for FormError {
    fn from(value: ParseError) -> Self {
        FormError::Parse(value)
    }
}

impl From<EstimateError> for FormError {
    fn from(value: EstimateError) -> Self {
        FormError::Estimate(value)
    }
}

/// 문자열 입력 세 개를 읽어 바로 계산한다.
pub fn estimate_from_text(
    two_liter: &str,
    one_liter: &str,
    mineral_water: &str,
    period: Period,
) -> Result<EstimationResult, FormError> {
    let [two, one, water] = input::parse_counts(two_liter, one_liter, mineral_water)?;
    Ok(recycling::estimate_annual(two, one, water, period)?)
}

/// 사용자에게 보여줄 오류 문구를 만든다.
pub fn describe_error(tr: &Translator, err: &FormError) -> String {
    match err {
        FormError::Parse(e) => {
            let field = tr.t(i18n::bottle_key(e.kind)).to_string();
            if e.text.is_empty() {
                i18n::fill_template(tr.t(keys::ERROR_EMPTY_NUMBER), &[("field", field)])
            } else {
                i18n::fill_template(
                    tr.t(keys::ERROR_INVALID_NUMBER),
                    &[("field", field), ("text", e.text.clone())],
                )
            }
        }
        FormError::Estimate(EstimateError::InvalidArgument { kind, value }) => i18n::fill_template(
            tr.t(keys::ERROR_NEGATIVE_COUNT),
            &[("field", tr.t(i18n::bottle_key(*kind)).to_string()), ("value", value.to_string())],
        ),
    }
}

/// 입력 화면의 일시 상태. 입력값은 저장하지 않는다.
#[derive(Debug, Clone, Default)]
pub struct EstimateForm {
    pub two_liter: String,
    pub one_liter: String,
    pub mineral_water: String,
    pub period: Period,
    result: Option<EstimationResult>,
    error: Option<FormError>,
}

impl EstimateForm {
    pub fn new(period: Period) -> Self {
        Self {
            period,
            ..Self::default()
        }
    }

    pub fn field(&self, kind: BottleKind) -> &str {
        match kind {
            BottleKind::TwoLiter => &self.two_liter,
            BottleKind::OneLiter => &self.one_liter,
            BottleKind::MineralWater => &self.mineral_water,
        }
    }

    pub fn field_mut(&mut self, kind: BottleKind) -> &mut String {
        match kind {
            BottleKind::TwoLiter => &mut self.two_liter,
            BottleKind::OneLiter => &mut self.one_liter,
            BottleKind::MineralWater => &mut self.mineral_water,
        }
    }

    /// 현재 입력으로 계산한다. 실패하면 이전 결과를 그대로 두고 오류만 기록한다.
    pub fn calculate(&mut self) -> Result<EstimationResult, FormError> {
        match estimate_from_text(
            &self.two_liter,
            &self.one_liter,
            &self.mineral_water,
            self.period,
        ) {
            Ok(res) => {
                self.result = Some(res);
                self.error = None;
                Ok(res)
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    pub fn result(&self) -> Option<&EstimationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// 표시용 (무게, 금액) 문자열.
    pub fn formatted_result(&self) -> Option<(String, String)> {
        self.result.as_ref().map(format::format_result)
    }
}
