use std::env;
use std::fs;
use std::path::Path;

const API_URL_VAR: &str = "TICKETDESK_API_URL";

fn main() {
    // Values from .env become build-time env vars unless already set
    let env_file = Path::new(".env");
    // Also covers a .env created after the first build
    println!("cargo:rerun-if-changed=.env");

    if env_file.exists() {
        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    println!("cargo:rerun-if-env-changed={}", API_URL_VAR);
    println!("cargo:rerun-if-changed=build.rs");
}
