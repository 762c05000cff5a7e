// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use cidrutils::{
    describe,
    iptools::{normalize_address_with, parse_address, ZeroRun},
    logging::{self, Level, LogFormat},
    tables::{find_reserved, region_location, regions, reserved_ranges},
    address_to_bit_string, cidr_to_address_range, AddressFamily, CloudProvider, Query,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::{fmt::Display, process::ExitCode};
use tracing::{debug, warn};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const ABOUT: &str = "Format IP addresses and CIDR ranges, look up reserved ranges and cloud regions.";

#[derive(Parser, Debug)]
#[clap(
    name = "cidr-printer",
    version = VERSION,
    about = ABOUT,
    disable_help_subcommand = true,
    subcommand_required = true,
)]
struct CliApp {
    #[clap(
        short,
        long,
        global = true,
        value_name = "LEVEL",
        env = "CIDR_PRINTER_LOG_LEVEL",
        help = "Set the log level filter.",
        value_enum
    )]
    log_level: Option<Level>,

    #[clap(
        long,
        global = true,
        value_name = "FORMAT",
        env = "CIDR_PRINTER_LOG_FORMAT",
        help = "Set the logging output format.",
        value_enum
    )]
    log_format: Option<LogFormat>,

    #[clap(long, global = true, help = "Print one JSON object per result line.")]
    json: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// First and last address of each CIDR
    Range {
        #[clap(required = true, value_name = "CIDR")]
        cidrs: Vec<String>,
    },
    /// Addresses as 32 or 128 character bit strings
    Bits {
        #[clap(required = true, value_name = "ADDR")]
        addresses: Vec<String>,
    },
    /// Addresses in their display form
    Normalize {
        #[clap(long, help = "Collapse the longest zero run instead of the first one.")]
        longest: bool,
        #[clap(required = true, value_name = "ADDR")]
        addresses: Vec<String>,
    },
    /// List the reserved ranges, or the ones containing each address
    Reserved {
        #[clap(value_name = "ADDR")]
        addresses: Vec<String>,
    },
    /// List a provider's regions, or look up one region code
    Regions {
        provider: CloudProvider,
        code: Option<String>,
    },
    /// Guess what each argument is and describe it
    Describe {
        #[clap(required = true, value_name = "QUERY")]
        queries: Vec<String>,
    },
}

/* -------------------------------------------------------------------------- */

/// Writes results to stdout as text or JSON lines and counts failures.
struct Printer {
    json: bool,
    failed: usize,
}

impl Printer {
    fn emit<T: Serialize>(&self, text: impl Display, value: T) {
        if !self.json {
            println!("{text}");
            return;
        }
        match serde_json::to_string(&value) {
            Ok(line) => println!("{line}"),
            Err(e) => warn!("cannot serialize result: {e}"),
        }
    }

    fn fail(&mut self, input: &str, err: impl Display) {
        self.failed += 1;
        warn!(input, "{err}");
        match self.json {
            true => println!("{}", json!({ "input": input, "error": err.to_string() })),
            false => eprintln!("error: {err}"),
        }
    }
}

fn run(cmd: Commands, out: &mut Printer) {
    match cmd {
        Commands::Range { cidrs } => {
            for cidr in cidrs {
                match cidr_to_address_range(&cidr) {
                    Ok([first, last]) => out.emit(
                        format!("{cidr}\t{first}\t{last}"),
                        json!({ "cidr": cidr, "first": first, "last": last }),
                    ),
                    Err(e) => out.fail(&cidr, e),
                }
            }
        }
        Commands::Bits { addresses } => {
            for addr in addresses {
                match address_to_bit_string(&addr) {
                    Ok(bits) => out.emit(
                        format!("{addr}\t{bits}"),
                        json!({ "address": addr, "bits": bits }),
                    ),
                    Err(e) => out.fail(&addr, e),
                }
            }
        }
        Commands::Normalize { longest, addresses } => {
            let policy: ZeroRun = match longest {
                true => ZeroRun::Longest,
                false => ZeroRun::First,
            };
            for addr in addresses {
                match parse_address(&addr) {
                    Ok(ip) => {
                        let normalized: String = normalize_address_with(&ip, policy);
                        out.emit(
                            format!("{addr}\t{normalized}"),
                            json!({ "address": addr, "normalized": normalized }),
                        )
                    }
                    Err(e) => out.fail(&addr, e),
                }
            }
        }
        Commands::Reserved { addresses } if addresses.is_empty() => {
            for fam in [AddressFamily::V4, AddressFamily::V6] {
                for r in reserved_ranges(fam) {
                    out.emit(
                        format!("{}\t{}", r.prefix, r.description),
                        json!({ "family": fam, "prefix": r.prefix, "description": r.description }),
                    );
                }
            }
        }
        Commands::Reserved { addresses } => {
            for addr in addresses {
                match find_reserved(&addr) {
                    Ok(found) if found.is_empty() => out.emit(
                        format!("{addr}\tnot reserved"),
                        json!({ "address": addr, "warning": "Not found" }),
                    ),
                    Ok(found) => {
                        for m in found {
                            out.emit(
                                format!("{addr}\t{}\t{}", m.prefix, m.description),
                                json!({ "address": addr, "reserved": m }),
                            );
                        }
                    }
                    Err(e) => out.fail(&addr, e),
                }
            }
        }
        Commands::Regions { provider, code: None } => {
            for (code, location) in regions(provider) {
                out.emit(
                    format!("{code}\t{location}"),
                    json!({ "provider": provider, "region": code, "location": location }),
                );
            }
        }
        Commands::Regions { provider, code: Some(code) } => match region_location(provider, &code) {
            Some(location) => out.emit(
                format!("{code}\t{location}"),
                json!({ "provider": provider, "region": code, "location": location }),
            ),
            None => out.fail(&code, format!("unknown {provider} region: '{code}'")),
        },
        Commands::Describe { queries } => {
            for text in queries {
                let query: Query = Query::classify(&text);
                match describe(&query) {
                    Ok(report) => out.emit(report.to_string().trim_end(), &report),
                    Err(e) => out.fail(query.input(), e),
                }
            }
        }
    }
}

fn main() -> ExitCode {
    let app: CliApp = CliApp::parse();
    logging::init(
        app.log_level.unwrap_or_default(),
        app.log_format.unwrap_or_default(),
    );
    debug!(?app, "starting");

    let mut out: Printer = Printer {
        json: app.json,
        failed: 0,
    };
    run(app.command, &mut out);

    match out.failed {
        0 => ExitCode::SUCCESS,
        n => {
            debug!(failed = n, "finished with errors");
            ExitCode::FAILURE
        }
    }
}
