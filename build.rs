use std::collections::HashMap;
use std::fs;

const CREDENTIAL_VARS: &[(&str, &str)] = &[
    ("ADMIN_USER", "PORTFOLIO_ADMIN_USER"),
    ("ADMIN_PASSWORD", "PORTFOLIO_ADMIN_PASSWORD"),
];

fn main() {
    // `.env` at the crate root is a fallback for the process environment
    let dotenv = read_dotenv(".env");

    for (source, target) in CREDENTIAL_VARS {
        let value = std::env::var(source)
            .ok()
            .or_else(|| dotenv.get(*source).cloned())
            .filter(|v| !v.is_empty());

        match value {
            Some(v) => println!("cargo:rustc-env={}={}", target, v),
            None => println!("cargo:warning={} is not set, admin login will be disabled", source),
        }
        println!("cargo:rerun-if-env-changed={}", source);
    }

    println!("cargo:rerun-if-changed=.env");
}

fn read_dotenv(path: &str) -> HashMap<String, String> {
    let Ok(content) = fs::read_to_string(path) else {
        return HashMap::new();
    };

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| {
            let v = v.trim().trim_matches('"').trim_matches('\'');
            (k.trim().to_string(), v.to_string())
        })
        .collect()
}
