use std::path::PathBuf;

use clap::{Parser, Subcommand};
use proportion_calculator::{
    app::{self, AppError},
    config,
    format::DisplayFormatter,
    i18n::{self, Translator},
    session::{Session, SlotIndex},
    ui_cli::TerminalClipboard,
    units::UnitTag,
};

/// 세 값으로 네 번째 값을 구하는 비례식 계산기.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// 표시 언어 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long)]
    config: Option<PathBuf>,
    /// 언어팩(TOML) 디렉터리
    #[arg(long)]
    locales: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 한 번 계산하고 4번 칸을 출력한다: V4 = V2 × V3 ÷ V1
    Solve {
        #[arg(allow_hyphen_values = true)]
        basis: String,
        #[arg(allow_hyphen_values = true)]
        reference: String,
        #[arg(allow_hyphen_values = true)]
        target: String,
        /// 네 칸의 단위 (예: --units oz kcal lbs kcal)
        #[arg(long, num_args = 4, value_names = ["U1", "U2", "U3", "U4"])]
        units: Option<Vec<String>>,
        /// 반올림 없는 전체 결과도 출력
        #[arg(long)]
        full: bool,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 대화형 세션 또는 단발 계산을 실행한다.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        let tr = Translator::new(&i18n::resolve_language(&cli.lang, None));
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), AppError> {
    let cfg = match &cli.config {
        Some(path) => config::load_or_default_at(path)?,
        None => config::load_or_default()?,
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    log::debug!("language resolved to {lang}");
    let tr = Translator::new_with_pack(&lang, cli.locales.as_deref());
    let mut session = Session::new(DisplayFormatter::new(cfg.input_box));

    match &cli.command {
        None => {
            let mut clipboard = TerminalClipboard::default();
            app::run(&mut session, &tr, &mut clipboard)
        }
        Some(Command::Solve {
            basis,
            reference,
            target,
            units,
            full,
        }) => {
            if let Some(units) = units {
                for (index, label) in SlotIndex::ALL.into_iter().zip(units) {
                    let unit: UnitTag = label.parse()?;
                    session.on_unit_changed(index, unit);
                }
            }
            session.on_field_edited(SlotIndex::First, basis.as_str());
            session.on_field_edited(SlotIndex::Second, reference.as_str());
            let state = session.on_field_edited(SlotIndex::Third, target.as_str());
            let derived = state.slot(SlotIndex::Fourth);
            if derived.value.is_empty() {
                log::warn!("no valid result for {basis} : {reference} = {target} : ?");
            }
            println!("{} {}", derived.value, derived.unit);
            if *full {
                println!(
                    "{} {}",
                    tr.t(i18n::keys::RESULT_FULL),
                    session.on_derived_field_activated()
                );
            }
            Ok(())
        }
    }
}
