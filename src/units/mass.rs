/// 1 lb = 16 oz.
pub const OUNCES_PER_POUND: f64 = 16.0;

/// 1 oz = 28.349523125 g (국제 상용 온스). 분자/분모를 그대로 둬서 오차를 줄인다.
const OUNCE_RATIO_NUMERATOR: f64 = 1_600_000.0;
const OUNCE_RATIO_DENOMINATOR: f64 = 45_359_237.0;

/// 파운드를 온스로 환산한다.
pub fn pounds_to_ounces(value: f64) -> f64 {
    value * OUNCES_PER_POUND
}

/// 그램을 온스로 환산한다.
pub fn grams_to_ounces(value: f64) -> f64 {
    (OUNCE_RATIO_NUMERATOR * value) / OUNCE_RATIO_DENOMINATOR
}
