use clap::Parser;

use system_head_calculator::{app, config, i18n};

/// 배관 시스템 수두손실 계산기 CLI 옵션.
#[derive(Debug, Parser)]
#[command(name = "system_head_calculator", version, about = "Piping system head loss calculator")]
struct Cli {
    /// 언어 코드 (ko/en/auto)
    #[arg(long, default_value = "auto")]
    lang: String,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        eprintln!("오류: {err}");
    }
}

fn try_run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(&cfg.language));
    let tr = i18n::Translator::new(&lang);
    app::run(&mut cfg, &tr)?;
    Ok(())
}
