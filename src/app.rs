use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::session::{Session, SessionError};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 배관 런 입력 오류
    Session(SessionError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Session(e) => write!(f, "입력 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<SessionError> for AppError {
    fn from(value: SessionError) -> Self {
        AppError::Session(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 세션(유량·유체·런 목록)은 루프가 소유하며 종료 시 저장하지 않는다.
/// 런 추가 입력 오류는 메시지만 출력하고 루프를 계속한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let mut session = Session::new();
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::ProjectInputs => ui_cli::handle_project_inputs(tr, &mut session)?,
            MenuChoice::AddRun => match ui_cli::handle_add_run(tr, config, &mut session) {
                Ok(()) => {}
                Err(AppError::Session(e)) => {
                    println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX));
                }
                Err(other) => return Err(other),
            },
            MenuChoice::RemoveRun => ui_cli::handle_remove_run(tr, &mut session)?,
            MenuChoice::Results => ui_cli::handle_results(tr, &session)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
