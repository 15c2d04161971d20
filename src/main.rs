use clap::Parser;

use queens_rs::search::solve;

#[derive(Debug, Parser)]
#[command(author, version, about = "Count n-Queens solutions and the placements needed to find them")]
struct Cli {
    /// Board size (number of queens).
    #[arg(value_name = "INT", default_value = "4")]
    size: usize,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Warn,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();

    let counts = solve(args.size)?;
    println!("{}", counts);

    Ok(())
}
