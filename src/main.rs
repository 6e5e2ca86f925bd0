mod cli;
mod collector;
mod config;
mod consts;
mod error;
mod fetch;
mod queries;
mod stamp;
mod store;

use clap::Parser;

use cli::Cli;
use collector::Collector;
use config::Config;
use error::Error;
use stamp::RunStamp;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let config = Config::load(cli.config.as_deref())?;
    let stamp = RunStamp::now();
    let mut collector = Collector::new(&config, stamp, cli.debug)?;
    collector.run()
}
