// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod descriptor;
mod error;
mod input_dir;
mod loader;
mod paths;
mod report;
mod scanner;
mod tree;
mod types;
mod ui;

use std::io;

/// Invalid arguments or no usable input directory
const EXIT_CONFIG_ERROR: i32 = 2;
/// Reading artifacts or writing pages failed
const EXIT_REPORT_ERROR: i32 = 1;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(EXIT_CONFIG_ERROR);
    }

    if args.list_formats {
        print!("{}", report::list_formats());
        return;
    }

    // Resolve directories and settings
    let config = match config::build_report_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    // Scan, decode and build the report tree
    let tree = match tree::process(Some(&config.input_dir)) {
        Ok(tree) => tree,
        Err(e) => {
            ui::print_error(&format!("Failed to build report tree: {}", e));
            std::process::exit(EXIT_REPORT_ERROR);
        }
    };

    if config.json {
        if let Err(e) = report::export_json_report(tree.as_ref(), io::stdout().lock()) {
            ui::print_error(&format!("Failed to write JSON: {}", e));
            std::process::exit(EXIT_REPORT_ERROR);
        }
        return;
    }

    // Write one page per node
    let result = match tree {
        None => types::ReportResult::empty(&config.input_dir),
        Some(root) => match report::write_report(&root, &config) {
            Ok(result) => result,
            Err(e) => {
                ui::print_error(&format!("Report generation failed: {}", e));
                std::process::exit(EXIT_REPORT_ERROR);
            }
        },
    };

    match result.message {
        Some(message) => ui::status(&message),
        None => ui::status(&format!(
            "Generated {} documentation file(s) in {}",
            result.files_generated,
            config.output_dir.display()
        )),
    }
}
