use std::env;
use std::fs;
use std::path::Path;

// Keys read through option_env! in src/config.rs
const FORWARDED_KEYS: &[&str] = &[
    "BACKEND_URL",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "DEFAULT_LANGUAGE",
    "TOAST_DURATION_MS",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(_) => {
            println!("cargo:warning=No .env file found, compiling with default configuration (see .env.example)");
            return;
        }
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !FORWARDED_KEYS.contains(&key) {
            continue;
        }

        // A real environment variable wins over the .env file
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
