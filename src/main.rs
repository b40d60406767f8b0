use std::process;
use log::{debug, error, LevelFilter};

use gridloc::utils::logger::Logger;
use gridloc::commands::{build_cli, load_settings, CommandFactory, GridlocCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Warn };
    Logger::init_global_logger(level);

    let settings = match load_settings(&matches) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    debug!("Using settings: {:?}", settings);

    let factory = GridlocCommandFactory::new();

    let command_result = factory.create_command(&matches, &settings);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
