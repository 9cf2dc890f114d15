use std::io;

use clap::Parser;

use args::Args;

mod args;
mod input;
mod report;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let initial = match &args.grid_path {
        Some(path) => {
            log::info!("Loading grid from {}", path.display());
            input::load_grid(path)?
        }
        None => {
            log::info!("No grid file given, using the built-in blinker");
            input::default_grid()?
        }
    };

    log::debug!(
        "Initial grid is {}x{} with {} alive",
        initial.width(),
        initial.height(),
        initial.alive_count()
    );

    let next = liblife::step(&initial);

    report::write_transition(&mut io::stdout().lock(), &initial, &next)?;

    Ok(())
}
