mod config;
mod devices;
mod machine;

use clap::Parser;
use config::SimConfig;
use log::info;
use machine::Machine;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

/// Runs pan-tilt rig G-code against simulated devices
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Program file; commands are read from stdin if omitted
    #[arg()]
    program: Option<PathBuf>,

    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// enable debug messages
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.verbose {
        builder.filter(None, log::LevelFilter::Debug);
    } else {
        builder.filter(None, log::LevelFilter::Info);
    }
    builder.init();

    let config = SimConfig::load(args.config.as_deref())?;
    let mut machine = Machine::new(&config, io::stdout().lock());
    machine.announce()?;

    match args.program {
        Some(path) => {
            info!("running {}", path.display());
            let program = BufReader::new(File::open(&path)?);
            machine.run(program, wait_for_enter)
        }
        // Stdin is the program, so a stop resumes with the next line.
        None => machine.run(io::stdin().lock(), || Ok(())),
    }
}

/// Blocks until the user presses enter.
fn wait_for_enter() -> io::Result<()> {
    eprintln!("Stopped. Press enter to continue.");
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}
