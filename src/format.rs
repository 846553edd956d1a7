//! 계산 결과를 입력 칸/상세 보기/클립보드용 문자열로 바꾼다.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// 숫자 입력 칸의 크기. 글자 크기 계산의 기준 면적이 된다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBox {
    pub width: f64,
    pub height: f64,
}

impl Default for InputBox {
    fn default() -> Self {
        Self {
            width: 70.0,
            height: 40.0,
        }
    }
}

impl InputBox {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// 결과 표시 규칙을 담는다.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayFormatter {
    input_box: InputBox,
}

impl DisplayFormatter {
    pub fn new(input_box: InputBox) -> Self {
        Self { input_box }
    }

    /// 글자 수가 늘수록 작아지는 글자 크기. 빈 문자열은 1글자로 본다.
    pub fn field_font_size(&self, text: &str) -> f64 {
        let len = text.chars().count().max(1);
        (self.input_box.area() / len as f64).sqrt()
    }

    /// 상세 보기에 쓰는 반올림 없는 결과 문자열.
    pub fn full_precision_text(&self, result: f64) -> String {
        full_precision_text(result)
    }

    /// 복사 시 클립보드로 넘기는 문자열. 상세 보기와 같다.
    pub fn clipboard_payload(&self, result: f64) -> String {
        full_precision_text(result)
    }
}

/// 소수 둘째 자리로 반올림한 뒤 불필요한 0을 지운 입력 칸 문자열.
///
/// 부동소수의 정확한 2진 값을 기준으로 반올림하고, 정확히 중간이면 0에서 먼 쪽을 고른다.
/// `3.0` → `"3"`, `0.125` → `"0.13"`, `1.005` → `"1"` (실제 값이 1.00499...).
pub fn rounded_field_text(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => exact
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
            .to_string(),
        // Decimal 범위를 넘는 크기는 중간값이 나올 수 없다
        None => {
            let fixed = format!("{value:.2}");
            match fixed.parse::<f64>() {
                Ok(rounded) => canonical(rounded),
                Err(_) => fixed,
            }
        }
    }
}

/// 가장 짧은 왕복 가능 10진 표기.
pub fn full_precision_text(value: f64) -> String {
    canonical(value)
}

fn canonical(value: f64) -> String {
    // -0은 0으로 표기
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}
