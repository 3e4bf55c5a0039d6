use clap::Parser;
use log::LevelFilter;
use pandigital_prime::solve;

#[derive(Parser)]
#[command(name = "pandigital-prime")]
#[command(about = "Find the largest pandigital prime")]
struct Cli {
    /// Log search progress (-v for debug, -vv for every candidate)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG, when set, takes precedence over the -v count
    env_logger::Builder::new()
        .filter_level(level_for(cli.verbose))
        .parse_default_env()
        .init();

    match solve() {
        Ok(report) => println!("{}", report),
        Err(e) => {
            eprintln!("Search failed: {}", e);
            std::process::exit(1);
        }
    }
}
