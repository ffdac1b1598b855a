use std::env;
use std::path::PathBuf;
use std::process;
use css_abbreviation_resolver::logging;
use css_abbreviation_resolver::stylesheet::request::ResolveRequest;
use log::{error, info, LevelFilter};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        // Use eprintln for usage info since logger isn't initialized yet
        eprintln!("Usage: {} <request.json> [log_file]", args[0]);
        eprintln!("  <request.json>: abbreviation tree, snippet definitions and optional config");
        eprintln!("  [log_file]: log file path, defaults to the local data directory");
        eprintln!("Set {}=debug for detailed resolution logs.", logging::LOG_LEVEL_ENV);
        process::exit(1);
    }

    let log_file = args.get(2).map(PathBuf::from);
    if let Err(e) = logging::init_logger(log_file, logging::level_from_env(LevelFilter::Info)) {
        eprintln!("Failed to initialize logger: {}", e);
        process::exit(1);
    }

    info!("Command line arguments: {:?}", args);

    let request_path = PathBuf::from(&args[1]);
    let resolved = ResolveRequest::from_file(&request_path).and_then(ResolveRequest::run);

    match resolved {
        Ok(abbreviation) => match serde_json::to_string_pretty(&abbreviation) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize resolved abbreviation: {}", e);
                eprintln!("Failed to serialize resolved abbreviation: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Resolution failed: {}", e);
            eprintln!("Resolution failed: {}", e);
            process::exit(1);
        }
    }
}
