use std::env;
use std::process;

use crashme::utils::log::init_log;
use crashme::{crashme_debug, run, Config};

fn main() {
    let config = Config::from_env();
    if let Err(err) = init_log(&config) {
        eprintln!("Failed to init log: {}", err);
    }

    let args: Vec<String> = env::args().collect();
    crashme_debug!("Received args: {:?}", args);

    process::exit(run(&args))
}
