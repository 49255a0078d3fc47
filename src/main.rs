use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(version, about = "Gera o currículo em PDF no formato ABNT")]
struct Cli {
    /// Output file (defaults to the fixed filename in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(curriculo_pdf::resume::DEFAULT_OUTPUT));

    match curriculo_pdf::generate_resume(&output) {
        Ok(()) => {
            println!("PDF gerado com sucesso: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
