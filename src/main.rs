use console::style;
use ghpulse::cli::Cli;
use ghpulse::error::PulseError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let hint = err
                .downcast_ref::<PulseError>()
                .map(PulseError::hint)
                .unwrap_or("Run with --verbose for details.");
            eprintln!("{} {err:#}", style("error:").for_stderr().red().bold());
            eprintln!("  {}", style(hint).for_stderr().dim());
            ExitCode::FAILURE
        }
    }
}
