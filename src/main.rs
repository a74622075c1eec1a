use std::env;
use std::fs;
use std::path::Path;

use scriptmedic::{RepairDriver, WorkerConfig};

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    match args.next() {
        Some(path) => repair_file(&path),
        None => eprintln!("No arguments"),
    }
}

fn repair_file(path: &str) {
    if !Path::new(path).is_file() {
        eprintln!("Cannot open {}", path);
        return;
    }

    // Frames reporting the canonical path are the candidate's own.
    let identity = match fs::canonicalize(path) {
        Ok(identity) => identity,
        Err(_) => {
            eprintln!("Cannot open {}", path);
            return;
        }
    };

    let source = match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => {
            eprintln!("Cannot open {}", path);
            return;
        }
    };

    let driver = RepairDriver::new(identity, WorkerConfig::from_env());
    let repaired = driver.clean(&source);

    if let Err(err) = fs::write(path, repaired) {
        eprintln!("Cannot write {}: {}", path, err);
    }
}
