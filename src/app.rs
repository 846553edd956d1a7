use crate::config::ConfigError;
use crate::i18n::{self, Translator};
use crate::session::{Clipboard, Session};
use crate::ui_cli::{self, MenuChoice};
use crate::units::UnknownUnit;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 알 수 없는 단위 문자열
    UnknownUnit(UnknownUnit),
    /// 1~4 범위를 벗어난 칸 번호
    InvalidSlot(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::UnknownUnit(e) => write!(f, "{e}"),
            AppError::InvalidSlot(s) => write!(f, "invalid slot number: {s}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<UnknownUnit> for AppError {
    fn from(value: UnknownUnit) -> Self {
        AppError::UnknownUnit(value)
    }
}

/// 대화형 세션의 메인 루프를 실행한다.
pub fn run(
    session: &mut Session,
    tr: &Translator,
    clipboard: &mut dyn Clipboard,
) -> Result<(), AppError> {
    println!("{}", tr.t(i18n::keys::HELP_MAIN));
    loop {
        ui_cli::print_state(session, tr);
        match ui_cli::main_menu(tr)? {
            MenuChoice::EditValue => ui_cli::handle_edit_value(session, tr)?,
            MenuChoice::ChangeUnit => ui_cli::handle_change_unit(session, tr)?,
            MenuChoice::ShowResult => ui_cli::handle_show_result(session, tr, clipboard)?,
            MenuChoice::ConvertMass => ui_cli::handle_convert_mass(session, tr),
            MenuChoice::Reset => {
                session.reset();
                println!("{}", tr.t(i18n::keys::RESET_DONE));
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
