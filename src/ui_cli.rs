use std::io::{self, Write};

use crate::app::AppError;
use crate::i18n::{keys, Translator};
use crate::session::{Clipboard, Session, SlotIndex};
use crate::units::UnitTag;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EditValue,
    ChangeUnit,
    ShowResult,
    ConvertMass,
    Reset,
    Exit,
}

/// 터미널에는 시스템 클립보드가 없으므로 복사할 문자열을 한 줄로 출력하고 기억해 둔다.
#[derive(Debug, Default)]
pub struct TerminalClipboard {
    last: Option<String>,
}

impl TerminalClipboard {
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl Clipboard for TerminalClipboard {
    fn set_text(&mut self, text: &str) {
        println!("{text}");
        self.last = Some(text.to_string());
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_EDIT_VALUE,
        keys::MAIN_MENU_CHANGE_UNIT,
        keys::MAIN_MENU_SHOW_RESULT,
        keys::MAIN_MENU_CONVERT_MASS,
        keys::MAIN_MENU_RESET,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::EditValue),
            "2" => return Ok(MenuChoice::ChangeUnit),
            "3" => return Ok(MenuChoice::ShowResult),
            "4" => return Ok(MenuChoice::ConvertMass),
            "5" => return Ok(MenuChoice::Reset),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 네 칸의 현재 값과 단위를 출력한다.
pub fn print_state(session: &Session, tr: &Translator) {
    println!("{}", tr.t(keys::STATE_HEADING));
    println!("{}", tr.t(keys::STATE_FORMULA));
    for index in SlotIndex::ALL {
        let slot = session.state().slot(index);
        let value = if slot.value.is_empty() && index.is_derived() {
            tr.t(keys::RESULT_EMPTY)
        } else {
            slot.value.as_str()
        };
        println!("  [{}] {:>12} {}", index.number(), value, slot.unit);
        log::debug!(
            "slot {} font size {:.1}",
            index.number(),
            session.field_font_size(index)
        );
    }
}

/// 칸 하나의 값을 바꾼다. 4번 칸도 받지만 즉시 재계산으로 덮어쓴다.
pub fn handle_edit_value(session: &mut Session, tr: &Translator) -> Result<(), AppError> {
    let index = read_slot(tr)?;
    if index.is_derived() {
        println!("{}", tr.t(keys::STATE_DERIVED_NOTE));
    }
    let text = read_line(tr.t(keys::PROMPT_VALUE))?;
    let state = session.on_field_edited(index, text.trim());
    log::debug!("recomputed, slot 4 = {:?}", state.derived_text());
    Ok(())
}

/// 칸 하나의 단위를 바꾼다.
pub fn handle_change_unit(session: &mut Session, tr: &Translator) -> Result<(), AppError> {
    let index = read_slot(tr)?;
    let unit = loop {
        let s = read_line(tr.t(keys::PROMPT_UNIT))?;
        match UnitTag::parse(&s) {
            Some(unit) => break unit,
            None => println!("{}", tr.t(keys::ERROR_UNKNOWN_UNIT)),
        }
    };
    session.on_unit_changed(index, unit);
    Ok(())
}

/// 결과 칸을 누른 것과 같다. 전체 정밀도 결과를 보여 주고 복사 여부를 묻는다.
pub fn handle_show_result(
    session: &Session,
    tr: &Translator,
    clipboard: &mut dyn Clipboard,
) -> Result<(), AppError> {
    println!("{} {}", tr.t(keys::RESULT_FULL), session.on_derived_field_activated());
    let answer = read_line(tr.t(keys::PROMPT_COPY))?;
    if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
        println!("{}", tr.t(keys::RESULT_COPIED));
        session.copy_full_precision(clipboard);
    }
    Ok(())
}

/// 1번 칸 그램 값을 2번 칸 온스로 채운다.
pub fn handle_convert_mass(session: &mut Session, tr: &Translator) {
    if !session.apply_reference_mass_conversion() {
        println!("{}", tr.t(keys::CONVERT_MASS_UNAVAILABLE));
    }
}

/// 사용자가 입력한 칸 번호(1~4)를 해석한다.
pub fn parse_slot(s: &str) -> Result<SlotIndex, AppError> {
    s.trim()
        .parse::<usize>()
        .ok()
        .and_then(SlotIndex::from_number)
        .ok_or_else(|| AppError::InvalidSlot(s.trim().to_string()))
}

fn read_slot(tr: &Translator) -> Result<SlotIndex, AppError> {
    loop {
        let s = read_line(tr.t(keys::PROMPT_SLOT))?;
        match parse_slot(&s) {
            Ok(index) => return Ok(index),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_SLOT)),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(buf)
}
