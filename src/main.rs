//! Sori - 한글 로마자/가타카나/발음 변환 명령행 도구
//!
//! 사용법: sori [--mode MODE] [--separator SEP] [TEXT...]
//!         sori config [--mode MODE] [--separator SEP]
//! TEXT가 없으면 표준 입력을 줄 단위로 처리한다.

use clap::{Args, Parser, Subcommand};
use sori::config::{load_config, save_config, OutputMode, SoriConfig};
use sori::core::converter::render;
use std::io::{self, BufRead, Write};
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "sori",
    version,
    about = "한글 로마자/가타카나/발음 변환",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    options: Options,

    /// 변환할 텍스트 (생략하면 표준 입력)
    text: Vec<String>,
}

#[derive(Args, Debug, PartialEq)]
struct Options {
    /// 출력 모드 (생략하면 설정 파일 값)
    #[arg(short, long, value_enum)]
    mode: Option<OutputMode>,

    /// 로마자 표기 구분자 (생략하면 설정 파일 값)
    #[arg(short, long, allow_hyphen_values = true)]
    separator: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// 기본 출력 모드/구분자를 설정 파일에 저장
    Config {
        #[command(flatten)]
        options: Options,
    },
}

fn main() {
    // 로깅 초기화 (error/warn만 출력, RUST_LOG=debug로 규칙 적용 과정 확인)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // 설정 로드
    let config = load_config();

    let result = match cli.command {
        Some(Command::Config { options }) => {
            save_config(&config.with_overrides(options.mode, options.separator))
        }
        None => {
            let config = config.with_overrides(cli.options.mode, cli.options.separator);
            run(&cli.text, &config)
        }
    };

    if let Err(e) = result {
        log::error!("{}", e);
        process::exit(1);
    }
}

fn run(text: &[String], config: &SoriConfig) -> Result<(), String> {
    log::debug!("모드: {:?}, 구분자: {:?}", config.mode, config.separator);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if text.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .map(|line| line.map_err(|e| format!("표준 입력 읽기 실패: {}", e)))
            .try_for_each(|line| print_line(&mut out, &line?, config.mode, &config.separator))
    } else {
        print_line(&mut out, &text.join(" "), config.mode, &config.separator)
    }
}

fn print_line(out: &mut impl Write, line: &str, mode: OutputMode, separator: &str) -> Result<(), String> {
    let rendered = render(line, mode, separator).map_err(|e| format!("변환 실패 ({}): {}", line, e))?;
    writeln!(out, "{}", rendered).map_err(|e| format!("출력 실패: {}", e))
}
