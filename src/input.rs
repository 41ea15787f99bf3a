//! 사용자 입력 문자열을 계산 입력으로 변환한다.

use crate::recycling::BottleKind;

/// 정수가 아닌 입력.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 잘못 입력된 항목
    pub kind: BottleKind,
    /// 입력된 원문(공백 제거)
    pub text: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.text.is_empty() {
            write!(f, "{} bottle count is empty", self.kind)
        } else {
            write!(f, "{} bottle count is not a whole number: {}", self.kind, self.text)
        }
    }
}

impl std::error::Error for ParseError {}

/// 한 항목의 개수를 정수로 읽는다. 부호는 허용하고 범위 검사는 계산부에 맡긴다.
pub fn parse_count(kind: BottleKind, text: &str) -> Result<i64, ParseError> {
    let trimmed = text.trim();
    trimmed.parse::<i64>().map_err(|_| ParseError {
        kind,
        text: trimmed.to_string(),
    })
}

/// 세 항목을 순서대로 읽는다. 첫 번째 실패에서 멈춘다.
pub fn parse_counts(
    two_liter: &str,
    one_liter: &str,
    mineral_water: &str,
) -> Result<[i64; 3], ParseError> {
    Ok([
        parse_count(BottleKind::TwoLiter, two_liter)?,
        parse_count(BottleKind::OneLiter, one_liter)?,
        parse_count(BottleKind::MineralWater, mineral_water)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_surrounding_whitespace() {
        assert_eq!(parse_count(BottleKind::TwoLiter, "  42\n"), Ok(42));
    }

    #[test]
    fn negative_text_is_parsed_not_rejected() {
        assert_eq!(parse_count(BottleKind::OneLiter, "-3"), Ok(-3));
    }

    #[test]
    fn rejects_decimal_and_words() {
        for bad in ["1.5", "dez", "1,000", "12abc"] {
            let err = parse_count(BottleKind::MineralWater, bad).unwrap_err();
            assert_eq!(err.kind, BottleKind::MineralWater);
            assert_eq!(err.text, bad);
        }
    }

    #[test]
    fn empty_text_is_a_parse_error() {
        let err = parse_count(BottleKind::TwoLiter, "   ").unwrap_err();
        assert!(err.text.is_empty());
    }

    #[test]
    fn parse_error_messages_are_english() {
        let bad = parse_count(BottleKind::TwoLiter, "1.5").unwrap_err();
        assert_eq!(bad.to_string(), "2L bottle count is not a whole number: 1.5");
        let empty = parse_count(BottleKind::OneLiter, "").unwrap_err();
        assert_eq!(empty.to_string(), "1L bottle count is empty");
    }

    #[test]
    fn parse_counts_reports_first_bad_field() {
        let err = parse_counts("1", "x", "y").unwrap_err();
        assert_eq!(err.kind, BottleKind::OneLiter);
        assert_eq!(parse_counts("1", "2", "3"), Ok([1, 2, 3]));
    }
}
