//! 비례식 재계산 규칙 회귀 테스트.
use pretty_assertions::assert_eq;
use proportion_calculator::solver::{convert_reference_mass, recompute};
use proportion_calculator::units::UnitTag::{self, *};

const DEFAULT: [UnitTag; 4] = [Gram, KiloCalorie, Gram, KiloCalorie];

fn vals(v: [&str; 4]) -> [String; 4] {
    v.map(String::from)
}

#[test]
fn scales_reference_by_target_over_basis() {
    let out = recompute(&vals(["100", "250", "30", ""]), &DEFAULT);
    assert_eq!(out.values, vals(["100", "250", "30", "75"]));
    assert_eq!(out.derived, Some(75.0));
}

#[test]
fn rounds_to_two_decimals_and_keeps_full_precision() {
    let out = recompute(&vals(["3", "100", "1", ""]), &DEFAULT);
    assert_eq!(out.values[3], "33.33");
    let derived = out.derived.expect("derived");
    assert!((derived - 100.0 / 3.0).abs() < 1e-12);

    let out = recompute(&vals(["4", "10", "1", ""]), &DEFAULT);
    assert_eq!(out.values[3], "2.5");
}

#[test]
fn eighth_scale_results_round_halves_away_from_zero() {
    assert_eq!(recompute(&vals(["8", "1", "1", ""]), &DEFAULT).values[3], "0.13");
    assert_eq!(recompute(&vals(["8", "5", "1", ""]), &DEFAULT).values[3], "0.63");
    let out = recompute(&vals(["8", "-1", "1", ""]), &DEFAULT);
    assert_eq!(out.values[3], "-0.13");
    assert_eq!(out.derived, Some(-0.125));
}

#[test]
fn non_numeric_input_leaves_everything_untouched() {
    let input = vals(["100", "abc", "50", "12"]);
    let out = recompute(&input, &DEFAULT);
    assert_eq!(out.values, input);
    assert_eq!(out.derived, None);

    let input = vals(["1,5", "200", "50", "7"]);
    assert_eq!(recompute(&input, &DEFAULT).values, input);
}

#[test]
fn non_numeric_derived_slot_blocks_recompute() {
    let input = vals(["100", "200", "50", "x"]);
    let out = recompute(&input, &DEFAULT);
    assert_eq!(out.values, input);
    assert_eq!(out.derived, None);
}

#[test]
fn zero_or_infinite_result_clears_derived_slot() {
    // 1번 칸 0 → 무한대
    let out = recompute(&vals(["0", "200", "50", "9"]), &DEFAULT);
    assert_eq!(out.values[3], "");
    assert_eq!(out.derived, None);

    // 2번 칸 비어 있음 → 0
    let out = recompute(&vals(["100", "", "50", "9"]), &DEFAULT);
    assert_eq!(out.values[3], "");

    // 0/0 → NaN
    let out = recompute(&vals(["0", "0", "50", ""]), &DEFAULT);
    assert_eq!(out.values[3], "");
}

#[test]
fn tiny_result_rounds_to_zero_but_is_kept() {
    let out = recompute(&vals(["1000", "1", "1", ""]), &DEFAULT);
    assert_eq!(out.values[3], "0");
    assert_eq!(out.derived, Some(0.001));
}

#[test]
fn ounce_basis_with_pound_target_scales_target_by_sixteen() {
    let units = [Ounce, KiloCalorie, Pound, KiloCalorie];
    let out = recompute(&vals(["2", "300", "1", ""]), &units);
    assert_eq!(out.values[3], "2400");
    assert_eq!(out.derived, Some(2400.0));
}

#[test]
fn other_unit_pairs_are_not_corrected() {
    let units = [Pound, KiloCalorie, Ounce, KiloCalorie];
    let out = recompute(&vals(["2", "300", "1", ""]), &units);
    assert_eq!(out.values[3], "150");

    let units = [Gram, Ounce, Gram, KiloCalorie];
    let out = recompute(&vals(["2", "300", "1", ""]), &units);
    assert_eq!(out.values[3], "150");
}

#[test]
fn recompute_is_idempotent() {
    let first = recompute(&vals(["7", "13", "5", ""]), &DEFAULT);
    let second = recompute(&first.values, &DEFAULT);
    assert_eq!(first.values, second.values);
    assert_eq!(first.derived, second.derived);
}

#[test]
fn reference_mass_conversion_needs_gram_and_ounce() {
    assert_eq!(convert_reference_mass(&vals(["100", "", "", ""]), &DEFAULT), None);

    let units = [Gram, Ounce, Gram, KiloCalorie];
    let out = convert_reference_mass(&vals(["45359237", "", "3", ""]), &units).expect("g/oz");
    assert_eq!(out[1], "1600000");
    assert_eq!(out[2], "3");

    let untouched = vals(["abc", "5", "", ""]);
    assert_eq!(convert_reference_mass(&untouched, &units), Some(untouched.clone()));
}
