mod cli;
mod dataset;

use clap::ArgMatches;

use std::error::Error;

fn main() {
    // initialize logger
    env_logger::init();

    let matches = cli::command().get_matches();

    // parse subcommands
    match matches.subcommand() {
        Some(("dataset", dataset_matches)) =>
            dataset::process(&matches, dataset_matches),
        Some((cmd, _)) => println!("unknown subcommand '{}'", cmd),
        None => println!("missing subcommand"),
    }
}

fn string_arg<'a>(matches: &'a ArgMatches, id: &str)
        -> Result<&'a str, Box<dyn Error>> {
    match matches.get_one::<String>(id) {
        Some(value) => Ok(value.as_str()),
        None => Err(format!("missing argument '{}'", id).into()),
    }
}

fn i32_arg(matches: &ArgMatches, id: &str) -> Result<i32, Box<dyn Error>> {
    match matches.get_one::<i32>(id) {
        Some(value) => Ok(*value),
        None => Err(format!("missing argument '{}'", id).into()),
    }
}
