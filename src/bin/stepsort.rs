/// Stepsort CLI
///
/// Thin driver over the library: it plays the role of the external
/// caller, pairing the step engine with the demo generator and the
/// plain-text bar renderer.
use stepsort::cli;

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = cli::run_cli() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
