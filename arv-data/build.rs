use std::env;
use std::fs;
use std::path::Path;

/// Fallback mock series used when no fixture file is present, so the crate
/// builds from a fresh checkout.
const FALLBACK_CSV: &str = "1965,4555.32\n1966,7489.07\n1967,5527.14\n";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("rainfall.csv");

    // Copy fixtures/rainfall.csv into OUT_DIR for include_str!, normalizing
    // it on the way: rows that do not parse as (year, millimeters) are
    // dropped at build time rather than at runtime.
    let src = Path::new("../fixtures/rainfall.csv");
    if src.exists() {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(src)
            .expect("Failed to open fixtures/rainfall.csv");

        let mut output = String::new();
        for record in rdr.records().flatten() {
            let year = record.get(0).unwrap_or("").trim();
            let value = record.get(1).unwrap_or("").trim();
            if year.parse::<i32>().is_ok() && value.parse::<f64>().is_ok() {
                output.push_str(&format!("{},{}\n", year, value));
            }
        }
        fs::write(&dest, output).unwrap();
    } else {
        fs::write(&dest, FALLBACK_CSV).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/rainfall.csv");
}
