use clap::{Arg, Command as ClapCommand, ArgAction};
use log::{error, LevelFilter};
use std::process;

// Import from your library
use exifkit::utils::logger::Logger;
use exifkit::commands::{CommandFactory, ExifkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("ExifKit")
        .version("1.0")
        .about("Decode Exif metadata embedded in JPEG files")
        .arg(
            Arg::new("files")
                .help("Input JPEG files")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Path to the log file")
                .value_name("FILE")
                .default_value("exifkit.log")
                .required(false),
        )
        .get_matches();

    let log_file = matches
        .get_one::<String>("log-file")
        .map(|s| s.as_str())
        .unwrap_or("exifkit.log");

    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = Logger::init_global_logger("exifkit-global.log", level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = ExifkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
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
