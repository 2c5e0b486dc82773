// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! PSY-Q math kernel command line tool
//!
//! Evaluates library routines and manages sine table assets.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{error, info};
use psyq_math::core::config::MathConfig;
use psyq_math::core::error::Result;
use psyq_math::core::routine::{MathLib, Routine};
use psyq_math::core::trig::SineTable;
use serde::Serialize;

/// PSY-Q libgte fixed-point math
#[derive(Parser)]
#[command(name = "psyq-math")]
#[command(about = "PSY-Q fixed-point math kernels", long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a routine (e.g. rsin, SquareRoot12) on one or more values
    Eval {
        /// Library symbol name
        routine: String,

        /// Input values (decimal or 0x-prefixed hex, may be negative)
        #[arg(required = true, allow_hyphen_values = true, value_parser = parse_int)]
        values: Vec<i32>,

        /// Print results as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// List known routines and their port status
    List {
        /// Print results as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Write the active sine table as a legacy table asset
    DumpTable {
        /// Output path
        path: PathBuf,
    },
    /// Validate a sine table asset and compare it with the generated table
    CheckTable {
        /// Table asset path
        path: PathBuf,
    },
}

#[derive(Serialize)]
struct EvalRecord<'a> {
    routine: &'a str,
    input: i32,
    output: i32,
}

fn parse_int(s: &str) -> std::result::Result<i32, String> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => digits.parse::<i64>(),
    }
    .map_err(|e| format!("invalid integer {:?}: {}", s, e))?;

    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).map_err(|_| format!("{} does not fit in 32 bits", s))
}

fn main() {
    // Load .env file if present; it may set RUST_LOG and PSYQ_* overrides
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize logger with default level INFO
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from: {}", path.display());
            MathConfig::load(path)?
        }
        None => MathConfig::default(),
    };
    config.apply_env()?;

    match args.command {
        Command::Eval {
            routine,
            values,
            json,
        } => {
            let lib = config.build_lib()?;
            let routine = Routine::from_name(&routine)?;
            eval(&lib, routine, &values, json)
        }
        Command::List { json } => {
            for routine in Routine::ALL {
                if json {
                    println!(
                        "{}",
                        serde_json::json!({
                            "routine": routine.name(),
                            "status": routine.status(),
                        })
                    );
                } else {
                    println!("{:<14}{:?}", routine.name(), routine.status());
                }
            }
            Ok(())
        }
        Command::DumpTable { path } => {
            let lib = config.build_lib()?;
            std::fs::write(&path, lib.table().to_le_bytes())?;
            info!("Sine table written to: {}", path.display());
            Ok(())
        }
        Command::CheckTable { path } => {
            let table = SineTable::load(&path)?;
            let generated = SineTable::generate();

            info!("Table is valid (peak {})", table.peak());

            let differences = table
                .as_slice()
                .iter()
                .zip(generated.as_slice())
                .filter(|(a, b)| a != b)
                .count();

            if differences == 0 {
                println!("identical to generated table");
            } else {
                println!(
                    "{} of {} samples differ from generated table",
                    differences,
                    generated.as_slice().len()
                );
            }
            Ok(())
        }
    }
}

fn eval(lib: &MathLib, routine: Routine, values: &[i32], json: bool) -> Result<()> {
    for &input in values {
        let output = lib.call(routine, input)?;

        if json {
            let record = EvalRecord {
                routine: routine.name(),
                input,
                output,
            };
            match serde_json::to_string(&record) {
                Ok(line) => println!("{}", line),
                Err(e) => error!("Failed to serialize result: {}", e),
            }
        } else {
            println!("{}({}) = {}", routine, input, output);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("1024").unwrap(), 1024);
        assert_eq!(parse_int("-1024").unwrap(), -1024);
        assert_eq!(parse_int("0x400").unwrap(), 0x400);
        assert_eq!(parse_int("-0xC00").unwrap(), -0xC00);
        assert_eq!(parse_int("-2147483648").unwrap(), i32::MIN);
        assert!(parse_int("2147483648").is_err());
        assert!(parse_int("abc").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args =
            Args::try_parse_from(["psyq-math", "eval", "rsin", "0x400", "-0xC00"]).unwrap();
        match args.command {
            Command::Eval { routine, values, .. } => {
                assert_eq!(routine, "rsin");
                assert_eq!(values, vec![0x400, -0xC00]);
            }
            _ => panic!("expected eval"),
        }
    }
}
