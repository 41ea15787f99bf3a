//! 결과 표시 형식. 지역 설정과 무관하게 고정 형식을 쓴다.
//!
//! - 무게: `#,##0.000 kg`
//! - 금액: `R$ #,##0.00`

use crate::recycling::EstimationResult;

pub const WEIGHT_DECIMALS: usize = 3;
pub const VALUE_DECIMALS: usize = 2;
pub const WEIGHT_SUFFIX: &str = " kg";
pub const CURRENCY_PREFIX: &str = "R$ ";

/// 소수 자릿수를 고정하고 천 단위 구분 기호(,)를 넣는다.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let mut out = String::with_capacity(raw.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && raw.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// 연간 무게 표시 문자열.
pub fn format_weight(kg: f64) -> String {
    format!("{}{WEIGHT_SUFFIX}", group_thousands(kg, WEIGHT_DECIMALS))
}

/// 연간 금액 표시 문자열.
pub fn format_value(value: f64) -> String {
    format!("{CURRENCY_PREFIX}{}", group_thousands(value, VALUE_DECIMALS))
}

/// 결과 두 값을 한 번에 포맷한다. (무게, 금액)
pub fn format_result(result: &EstimationResult) -> (String, String) {
    (
        format_weight(result.annual_weight_kg),
        format_value(result.annual_value),
    )
}
