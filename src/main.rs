use std::path::PathBuf;

use clap::Parser;

use separator_sizing_toolbox::separator::{presets, sizing};
use separator_sizing_toolbox::{app, config, i18n, ui_cli};

/// 3상 분리기 사이징 CLI. 옵션 없이 실행하면 대화형 메뉴로 들어간다.
#[derive(Debug, Parser)]
#[command(name = "separator_sizing_toolbox", version)]
struct Cli {
    /// 언어 코드 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 프리셋 코드로 비대화식 1회 실행 (ex: VERT-TEST)
    #[arg(long)]
    preset: Option<String>,
    /// TOML 입력 파일로 비대화식 1회 실행
    #[arg(long)]
    input: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, None);

    if let Some(code) = cli.preset.as_deref() {
        let preset = presets::find_preset(code)
            .ok_or_else(|| format!("알 수 없는 프리셋: {code}"))?;
        let result = sizing::size(&preset.input)?;
        ui_cli::print_result(&tr, &cfg, &result);
        return Ok(());
    }
    if let Some(path) = cli.input.as_deref() {
        let content = std::fs::read_to_string(path)?;
        let input: sizing::SeparatorInput = toml::from_str(&content)?;
        let result = sizing::size(&input)?;
        ui_cli::print_result(&tr, &cfg, &result);
        return Ok(());
    }

    app::run(&mut cfg, tr)?;
    Ok(())
}
