//! 비례식 계산 핵심 로직을 라이브러리로 분리하여 CLI 외의 화면에서도 재사용한다.

pub mod app;
pub mod config;
pub mod format;
pub mod i18n;
pub mod session;
pub mod solver;
pub mod ui_cli;
pub mod units;
