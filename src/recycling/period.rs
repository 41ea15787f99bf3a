use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 소비 기간. 각 기간은 연간 환산 계수를 가진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// 1년 = 365일
    Daily,
    /// 1년 = 52주
    Weekly,
    /// 1년 = 12개월
    #[default]
    Monthly,
    /// 이미 연간 값
    Annual,
}

impl Period {
    /// 선택 목록을 채우기 위한 전체 기간(표시 순서).
    pub const ALL: [Period; 4] = [
        Period::Daily,
        Period::Weekly,
        Period::Monthly,
        Period::Annual,
    ];

    /// 기간 값을 연간 값으로 바꾸는 계수.
    pub const fn annualization_factor(self) -> f64 {
        match self {
            Period::Daily => 365.0,
            Period::Weekly => 52.0,
            Period::Monthly => 12.0,
            Period::Annual => 1.0,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Annual => "annual",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// 알 수 없는 기간 문자열.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPeriod(pub String);

impl std::fmt::Display for UnknownPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown period '{}' (expected daily, weekly, monthly or annual)",
            self.0
        )
    }
}

impl std::error::Error for UnknownPeriod {}

impl FromStr for Period {
    type Err = UnknownPeriod;

    /// 영어/포르투갈어 이름과 메뉴 번호(1~4)를 받는다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "d" | "daily" | "day" | "diario" | "diário" => Ok(Period::Daily),
            "2" | "w" | "weekly" | "week" | "semanal" => Ok(Period::Weekly),
            "3" | "m" | "monthly" | "month" | "mensal" => Ok(Period::Monthly),
            "4" | "a" | "y" | "annual" | "yearly" | "year" | "anual" => Ok(Period::Annual),
            _ => Err(UnknownPeriod(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factors_match_calendar() {
        assert_eq!(Period::Daily.annualization_factor(), 365.0);
        assert_eq!(Period::Weekly.annualization_factor(), 52.0);
        assert_eq!(Period::Monthly.annualization_factor(), 12.0);
        assert_eq!(Period::Annual.annualization_factor(), 1.0);
    }

    #[test]
    fn parses_english_portuguese_and_menu_index() {
        assert_eq!("Daily".parse::<Period>(), Ok(Period::Daily));
        assert_eq!(" diário ".parse::<Period>(), Ok(Period::Daily));
        assert_eq!("semanal".parse::<Period>(), Ok(Period::Weekly));
        assert_eq!("3".parse::<Period>(), Ok(Period::Monthly));
        assert_eq!("ANUAL".parse::<Period>(), Ok(Period::Annual));
    }

    #[test]
    fn rejects_unknown_period() {
        let err = "fortnightly".parse::<Period>().unwrap_err();
        assert_eq!(err, UnknownPeriod("fortnightly".into()));
    }

    #[test]
    fn unknown_period_message_lists_accepted_names() {
        let err = "hourly".parse::<Period>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown period 'hourly' (expected daily, weekly, monthly or annual)"
        );
    }

    #[test]
    fn code_roundtrips_through_from_str() {
        for p in Period::ALL {
            assert_eq!(p.as_code().parse::<Period>(), Ok(p));
        }
    }
}
