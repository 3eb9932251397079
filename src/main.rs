use clap::Parser;
use image_comparer::args::{self, Args};
use image_comparer::batch::driver::DIVIDER_WIDTH;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Args::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            eprintln!();
            eprintln!("{}", args::full_help());
            return ExitCode::from(2);
        }
    };

    let options = match cli.into_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!();
            eprintln!("{}", args::full_help());
            return ExitCode::from(2);
        }
    };
    init_logging(options.debug);

    log::debug!("Options: {:?}", options);
    if !options.relocation_enabled() {
        log::info!("Match threshold is 0, images are compared but never moved or copied");
    }

    match image_comparer::run(&options) {
        Ok(report) => {
            println!("{}", "=".repeat(DIVIDER_WIDTH));
            println!("📊 {}", report.summary());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("❌ {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// `RUST_LOG` wins over the default level picked from `--debug`
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
