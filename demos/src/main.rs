// SPDX-License-Identifier: Apache-2.0

//! Parses each JSON file named on the command line and prints a summary of the tree.
//!
//! Run with `RUST_LOG=trace` to see the parser's dispatch decisions.

use std::process::ExitCode;

use picotree::Value;

fn describe(value: &Value, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Number(n) => out.push_str(&format!("{pad}number {n}\n")),
        Value::String(s) => out.push_str(&format!("{pad}string {s:?}\n")),
        Value::Array(items) => {
            out.push_str(&format!("{pad}array ({} items)\n", items.len()));
            for item in items {
                describe(item, indent + 1, out);
            }
        }
        Value::Object(fields) => {
            out.push_str(&format!("{pad}object ({} fields)\n", fields.len()));
            for (key, field) in fields {
                out.push_str(&format!("{pad}  {key:?}:\n"));
                describe(field, indent + 2, out);
            }
        }
        other => out.push_str(&format!("{pad}{}\n", other.get_type())),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: tree_dump <file.json>...");
        return ExitCode::FAILURE;
    }

    let mut failed = false;
    for path in &paths {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("{path}: {e}");
                failed = true;
                continue;
            }
        };

        match picotree::parse(&text) {
            Ok(value) => {
                log::info!("{path}: parsed {} root", value.get_type());
                let mut summary = String::new();
                describe(&value, 0, &mut summary);
                print!("{path}:\n{summary}");
            }
            Err(e) => {
                eprintln!("{path}: {e}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
