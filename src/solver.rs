//! 네 칸 비례식 `slot4 = slot2 * slot3 / slot1` 계산기.
//!
//! 입력이 바뀔 때마다 전체를 다시 계산하는 순수 함수로 구성된다. 잘못된 입력은
//! 오류로 알리지 않고 "변경 없음" 또는 "결과 칸 비움"으로 흡수한다.

use crate::format;
use crate::units::{mass, UnitTag};

/// 비례식 칸 개수.
pub const SLOT_COUNT: usize = 4;

/// 재계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Recompute {
    /// 갱신된 네 칸의 문자열. 결과 칸(4번)만 바뀔 수 있다.
    pub values: [String; SLOT_COUNT],
    /// 반올림 전 계산값. 계산을 건너뛰었거나 결과가 무효이면 `None`.
    pub derived: Option<f64>,
}

impl Recompute {
    fn unchanged(values: &[String; SLOT_COUNT]) -> Self {
        Self {
            values: values.clone(),
            derived: None,
        }
    }
}

/// 입력 문자열을 숫자로 해석한다.
///
/// 로케일과 무관하게 `.`만 소수점으로 인정한다. 공백뿐인 문자열은 0, 숫자가 아닌
/// 문자열은 NaN이 된다.
pub fn parse_number(text: &str) -> f64 {
    let t = text.trim();
    if t.is_empty() {
        return 0.0;
    }
    // 16진수와 Infinity 같은 표기는 일부러 받지 않는다
    let numeric_chars = t
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
    if !numeric_chars {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

/// 네 칸 값과 단위로 4번 칸을 다시 계산한다.
pub fn recompute(values: &[String; SLOT_COUNT], units: &[UnitTag; SLOT_COUNT]) -> Recompute {
    let mut numbers: [f64; SLOT_COUNT] = std::array::from_fn(|i| parse_number(&values[i]));

    // 4번 칸까지 포함해 하나라도 숫자가 아니면 아무것도 바꾸지 않는다.
    if numbers.iter().any(|n| n.is_nan()) {
        return Recompute::unchanged(values);
    }

    if units[0] == UnitTag::Ounce && units[2] == UnitTag::Pound {
        numbers[2] = mass::pounds_to_ounces(numbers[2]);
    }

    let derived = (numbers[1] * numbers[2]) / numbers[0];
    let mut new_values = values.clone();
    if !is_presentable(derived) {
        new_values[3].clear();
        return Recompute {
            values: new_values,
            derived: None,
        };
    }

    new_values[3] = format::rounded_field_text(derived);
    Recompute {
        values: new_values,
        derived: Some(derived),
    }
}

/// 1번 칸이 g, 2번 칸이 oz일 때 2번 칸을 1번 칸의 그램 값을 온스로 환산한 값으로 바꾼다.
///
/// 실시간 재계산에는 연결되어 있지 않다. 단위 조합이 맞지 않으면 `None`, 1번 칸이
/// 숫자가 아니면 값을 그대로 돌려준다.
pub fn convert_reference_mass(
    values: &[String; SLOT_COUNT],
    units: &[UnitTag; SLOT_COUNT],
) -> Option<[String; SLOT_COUNT]> {
    if units[0] != UnitTag::Gram || units[1] != UnitTag::Ounce {
        return None;
    }
    let mut new_values = values.clone();
    let grams = parse_number(&values[0]);
    if !grams.is_nan() {
        new_values[1] = format::full_precision_text(mass::grams_to_ounces(grams));
    }
    Some(new_values)
}

fn is_presentable(value: f64) -> bool {
    value.is_finite() && value != 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_decimal_forms() {
        assert_eq!(parse_number("1.5"), 1.5);
        assert_eq!(parse_number(" .5 "), 0.5);
        assert_eq!(parse_number("5."), 5.0);
        assert_eq!(parse_number("-2"), -2.0);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number("   "), 0.0);
    }

    #[test]
    fn parse_rejects_locale_and_words() {
        assert!(parse_number("1,5").is_nan());
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("1.2.3").is_nan());
        assert!(parse_number("-").is_nan());
        assert!(parse_number("0x10").is_nan());
        assert!(parse_number("Infinity").is_nan());
    }
}
