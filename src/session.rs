//! 화면 쪽이 호출하는 비례식 세션 상태.
//!
//! 입력 칸 포커스나 위젯 수명은 화면 쪽 책임이고, 여기서는 확정된 문자열/단위
//! 변경만 받아 재계산한다.

use crate::format::DisplayFormatter;
use crate::solver::{self, SLOT_COUNT};
use crate::units::UnitTag;

/// 세션 시작 시 단위 배치 (g, kcal, g, kcal).
pub const DEFAULT_UNITS: [UnitTag; SLOT_COUNT] = [
    UnitTag::Gram,
    UnitTag::KiloCalorie,
    UnitTag::Gram,
    UnitTag::KiloCalorie,
];

/// 비례식의 칸 위치. 4번 칸이 계산 결과 칸이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotIndex {
    First,
    Second,
    Third,
    Fourth,
}

impl SlotIndex {
    pub const ALL: [SlotIndex; SLOT_COUNT] = [
        SlotIndex::First,
        SlotIndex::Second,
        SlotIndex::Third,
        SlotIndex::Fourth,
    ];

    /// 1부터 시작하는 칸 번호로 변환한다.
    pub fn from_number(n: usize) -> Option<Self> {
        match n {
            1 => Some(SlotIndex::First),
            2 => Some(SlotIndex::Second),
            3 => Some(SlotIndex::Third),
            4 => Some(SlotIndex::Fourth),
            _ => None,
        }
    }

    pub fn number(self) -> usize {
        self.position() + 1
    }

    fn position(self) -> usize {
        match self {
            SlotIndex::First => 0,
            SlotIndex::Second => 1,
            SlotIndex::Third => 2,
            SlotIndex::Fourth => 3,
        }
    }

    pub fn is_derived(self) -> bool {
        self == SlotIndex::Fourth
    }
}

/// 값/단위 한 쌍.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub value: String,
    pub unit: UnitTag,
}

/// 네 칸의 현재 상태.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProportionState {
    slots: [Slot; SLOT_COUNT],
}

impl Default for ProportionState {
    fn default() -> Self {
        Self {
            slots: DEFAULT_UNITS.map(|unit| Slot {
                value: String::new(),
                unit,
            }),
        }
    }
}

impl ProportionState {
    pub fn slot(&self, index: SlotIndex) -> &Slot {
        &self.slots[index.position()]
    }

    pub fn values(&self) -> [String; SLOT_COUNT] {
        std::array::from_fn(|i| self.slots[i].value.clone())
    }

    pub fn units(&self) -> [UnitTag; SLOT_COUNT] {
        std::array::from_fn(|i| self.slots[i].unit)
    }

    /// 결과 칸 문자열. 비어 있으면 유효한 결과가 없는 것이다.
    pub fn derived_text(&self) -> &str {
        &self.slot(SlotIndex::Fourth).value
    }

    fn set_values(&mut self, values: [String; SLOT_COUNT]) {
        for (slot, value) in self.slots.iter_mut().zip(values) {
            slot.value = value;
        }
    }
}

/// 복사 버튼이 문자열을 넘기는 외부 클립보드.
pub trait Clipboard {
    fn set_text(&mut self, text: &str);
}

/// 비례식 세션. 네 칸 상태와 마지막 전체 정밀도 결과를 들고 있다.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: ProportionState,
    full_precision_result: f64,
    formatter: DisplayFormatter,
}

impl Session {
    pub fn new(formatter: DisplayFormatter) -> Self {
        Self {
            state: ProportionState::default(),
            full_precision_result: 0.0,
            formatter,
        }
    }

    pub fn state(&self) -> &ProportionState {
        &self.state
    }

    /// 마지막으로 성공한 계산의 반올림 전 값. 아직 없으면 0.
    pub fn full_precision_result(&self) -> f64 {
        self.full_precision_result
    }

    /// 입력 칸 문자열이 바뀌었을 때. 4번 칸 편집도 받아들이지만 곧바로 덮어쓴다.
    pub fn on_field_edited(
        &mut self,
        index: SlotIndex,
        text: impl Into<String>,
    ) -> &ProportionState {
        self.state.slots[index.position()].value = text.into();
        self.recompute();
        &self.state
    }

    /// 단위 선택이 바뀌었을 때. 새 단위를 반영한 뒤 현재 값으로 재계산한다.
    pub fn on_unit_changed(&mut self, index: SlotIndex, unit: UnitTag) -> &ProportionState {
        self.state.slots[index.position()].unit = unit;
        self.recompute();
        &self.state
    }

    /// 결과 칸을 눌렀을 때 상세 보기에 띄울 문자열.
    pub fn on_derived_field_activated(&self) -> String {
        self.formatter.full_precision_text(self.full_precision_result)
    }

    /// 상세 보기의 복사 동작.
    pub fn copy_full_precision<C: Clipboard + ?Sized>(&self, clipboard: &mut C) {
        clipboard.set_text(&self.formatter.clipboard_payload(self.full_precision_result));
    }

    /// 해당 칸의 현재 문자열에 맞는 글자 크기.
    pub fn field_font_size(&self, index: SlotIndex) -> f64 {
        self.formatter.field_font_size(&self.state.slot(index).value)
    }

    /// 1번 칸이 g, 2번 칸이 oz일 때 2번 칸을 온스 환산값으로 채우고 재계산한다.
    /// 조합이 맞지 않으면 `false`를 돌려주고 상태를 건드리지 않는다.
    pub fn apply_reference_mass_conversion(&mut self) -> bool {
        match solver::convert_reference_mass(&self.state.values(), &self.state.units()) {
            Some(values) => {
                self.state.set_values(values);
                self.recompute();
                true
            }
            None => false,
        }
    }

    /// 처음 상태로 되돌린다.
    pub fn reset(&mut self) {
        self.state = ProportionState::default();
        self.full_precision_result = 0.0;
    }

    fn recompute(&mut self) {
        let out = solver::recompute(&self.state.values(), &self.state.units());
        self.state.set_values(out.values);
        if let Some(derived) = out.derived {
            self.full_precision_result = derived;
        }
    }
}
