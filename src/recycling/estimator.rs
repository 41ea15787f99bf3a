use super::period::Period;

/// 2L·1L 병뚜껑 1kg에 해당하는 개수
pub const LARGE_BOTTLE_CAPS_PER_KG: f64 = 500.0;
/// 생수병 뚜껑 1kg에 해당하는 개수
pub const MINERAL_WATER_CAPS_PER_KG: f64 = 1000.0;
/// 재활용 병뚜껑 kg당 시세 [R$/kg]
pub const PRICE_PER_KG: f64 = 0.98;

/// 병 종류. 병 하나에 뚜껑 하나로 본다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BottleKind {
    TwoLiter,
    OneLiter,
    MineralWater,
}

impl BottleKind {
    pub const ALL: [BottleKind; 3] = [
        BottleKind::TwoLiter,
        BottleKind::OneLiter,
        BottleKind::MineralWater,
    ];
}

impl std::fmt::Display for BottleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BottleKind::TwoLiter => "2L",
            BottleKind::OneLiter => "1L",
            BottleKind::MineralWater => "mineral water",
        };
        f.write_str(name)
    }
}

/// 추정 계산 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateError {
    /// 음수 개수
    InvalidArgument { kind: BottleKind, value: i64 },
}

impl std::fmt::Display for EstimateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimateError::InvalidArgument { kind, value } => {
                write!(f, "{kind} bottle count cannot be negative: {value}")
            }
        }
    }
}

impl std::error::Error for EstimateError {}

/// 기간 동안 소비한 병 개수. 생성 시 음수를 거부한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BottleCounts {
    two_liter: u64,
    one_liter: u64,
    mineral_water: u64,
}

impl BottleCounts {
    pub fn new(two_liter: i64, one_liter: i64, mineral_water: i64) -> Result<Self, EstimateError> {
        Ok(Self {
            two_liter: non_negative(BottleKind::TwoLiter, two_liter)?,
            one_liter: non_negative(BottleKind::OneLiter, one_liter)?,
            mineral_water: non_negative(BottleKind::MineralWater, mineral_water)?,
        })
    }

    pub fn two_liter(&self) -> u64 {
        self.two_liter
    }

    pub fn one_liter(&self) -> u64 {
        self.one_liter
    }

    pub fn mineral_water(&self) -> u64 {
        self.mineral_water
    }

    pub fn get(&self, kind: BottleKind) -> u64 {
        match kind {
            BottleKind::TwoLiter => self.two_liter,
            BottleKind::OneLiter => self.one_liter,
            BottleKind::MineralWater => self.mineral_water,
        }
    }

    /// 검증된 개수로 연간 무게와 금액을 계산한다.
    pub fn estimate(&self, period: Period) -> EstimationResult {
        // 정수 합산 대신 f64로 더해 오버플로를 피한다.
        let large_bottle_weight_kg =
            (self.two_liter as f64 + self.one_liter as f64) / LARGE_BOTTLE_CAPS_PER_KG;
        let mineral_water_weight_kg = self.mineral_water as f64 / MINERAL_WATER_CAPS_PER_KG;
        let period_weight_kg = large_bottle_weight_kg + mineral_water_weight_kg;
        let annual_weight_kg = period_weight_kg * period.annualization_factor();
        EstimationResult {
            annual_weight_kg,
            annual_value: annual_weight_kg * PRICE_PER_KG,
        }
    }
}

fn non_negative(kind: BottleKind, value: i64) -> Result<u64, EstimateError> {
    u64::try_from(value).map_err(|_| EstimateError::InvalidArgument { kind, value })
}

/// 연간 추정 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimationResult {
    /// 연간 무게 [kg]
    pub annual_weight_kg: f64,
    /// 연간 금액 [R$]
    pub annual_value: f64,
}

/// 병 개수와 기간으로 연간 재활용 무게와 금액을 추정한다.
///
/// 음수 개수가 하나라도 있으면 `InvalidArgument`를 반환하고 결과는 만들지 않는다.
pub fn estimate_annual(
    two_liter: i64,
    one_liter: i64,
    mineral_water: i64,
    period: Period,
) -> Result<EstimationResult, EstimateError> {
    let counts = BottleCounts::new(two_liter, one_liter, mineral_water)?;
    Ok(counts.estimate(period))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_count_names_field() {
        let err = BottleCounts::new(1, -2, 3).unwrap_err();
        assert_eq!(
            err,
            EstimateError::InvalidArgument {
                kind: BottleKind::OneLiter,
                value: -2
            }
        );
    }

    #[test]
    fn first_negative_field_wins() {
        let err = BottleCounts::new(-1, -2, -3).unwrap_err();
        assert!(matches!(
            err,
            EstimateError::InvalidArgument {
                kind: BottleKind::TwoLiter,
                ..
            }
        ));
    }

    #[test]
    fn invalid_argument_message_is_english() {
        let err = BottleCounts::new(0, 0, -7).unwrap_err();
        assert_eq!(
            err.to_string(),
            "mineral water bottle count cannot be negative: -7"
        );
    }

    #[test]
    fn large_counts_do_not_overflow() {
        let counts = BottleCounts::new(i64::MAX, i64::MAX, 0).expect("valid counts");
        let res = counts.estimate(Period::Annual);
        assert!(res.annual_weight_kg.is_finite());
        assert!(res.annual_weight_kg > 0.0);
    }

    #[test]
    fn get_matches_accessors() {
        let counts = BottleCounts::new(4, 5, 6).expect("valid counts");
        assert_eq!(counts.get(BottleKind::TwoLiter), counts.two_liter());
        assert_eq!(counts.get(BottleKind::OneLiter), counts.one_liter());
        assert_eq!(counts.get(BottleKind::MineralWater), counts.mineral_water());
    }
}
