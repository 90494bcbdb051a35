//! CLI tool for spreadview - builds a page plan and outputs JSON
//!
//! Usage:
//!   spreadview_cli --pages 24 --series 7                 # Output JSON to stdout
//!   spreadview_cli --pages 24 --series 7 --spread --r2l  # Two-page, right-to-left
//!   spreadview_cli ... -o plan.json                      # Output JSON to file
//!
//! Flags: --start N, --spread, --r2l, --pageshift, --highlight, --query TEXT

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use log::LevelFilter;
use spreadview::{Configuration, ViewerState};

const USAGE: &str = "Usage: spreadview_cli --pages N --series ID [--start N] [--spread] [--r2l] \
                     [--pageshift] [--highlight] [--query TEXT] [-o output.json]";

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    eprintln!("{USAGE}");
    std::process::exit(1);
}

fn main() {
    spreadview::logging::init(LevelFilter::Warn);

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        fail("Missing arguments");
    }

    let mut config = Configuration::default();
    let mut output_path: Option<String> = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |name: &str| -> String {
            iter.next()
                .cloned()
                .unwrap_or_else(|| fail(&format!("Missing value for {name}")))
        };
        match arg.as_str() {
            "--pages" => {
                let text = value("--pages");
                config.page_count = text
                    .parse()
                    .unwrap_or_else(|_| fail(&format!("Invalid page count: {text}")));
            }
            "--series" => config.series_id = value("--series"),
            "--start" => {
                let text = value("--start");
                config.start_from = text
                    .parse()
                    .unwrap_or_else(|_| fail(&format!("Invalid start page: {text}")));
            }
            "--query" => config.search_query = value("--query"),
            "-o" => output_path = Some(value("-o")),
            "--spread" => config.spread = true,
            "--r2l" => config.r2l = true,
            "--pageshift" => config.pageshift = true,
            "--highlight" => config.highlight = true,
            other => fail(&format!("Unknown argument: {other}")),
        }
    }

    let mut state = ViewerState::new(config);
    let json = match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
