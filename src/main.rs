use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use cap_recycling_calculator::{
    app::{self, AppError},
    config,
    recycling::Period,
    ui_cli,
};

#[derive(Parser)]
#[command(name = "cap_recycling_calculator_cli")]
#[command(about = "PET bottle cap recycling estimator", long_about = None)]
struct Cli {
    /// Language code (auto, pt-br, en-us)
    #[arg(long, short = 'L', global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the annual cap weight and value once
    Estimate {
        /// Number of 2L bottles
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        two_liter: String,
        /// Number of 1L bottles
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        one_liter: String,
        /// Number of mineral water bottles
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        mineral_water: String,
        /// daily | weekly | monthly | annual (defaults to the configured period)
        #[arg(long, short)]
        period: Option<Period>,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    match try_run() {
        Ok(()) => ExitCode::SUCCESS,
        // 입력/계산 오류는 run_estimate가 이미 번역된 문구로 알렸다.
        Err(AppError::Form(_)) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let mut tr = app::translator_for(&cfg, cli.lang.as_deref());

    match cli.command {
        Some(Commands::Estimate {
            two_liter,
            one_liter,
            mineral_water,
            period,
        }) => {
            app::run_estimate(
                &mut io::stdout(),
                &mut io::stderr(),
                &tr,
                &cfg,
                [&two_liter, &one_liter, &mineral_water],
                period,
            )?;
        }
        None => {
            let mut io = ui_cli::Prompter::stdio();
            app::run(&mut io, &mut cfg, &mut tr, true)?;
        }
    }
    Ok(())
}
