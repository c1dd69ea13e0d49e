// src/bin/cli.rs
use rent_scout::cli;

fn main() {
    // Pretty panic/error reports; not fatal if installation fails.
    let _ = color_eyre::install();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
