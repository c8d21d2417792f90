//! # maxpfx CLI
//!
//! Compares the BGP `prefix-limit maximum` configured on a Junos router against the
//! prefix counts networks publish in PeeringDB, and generates the `set` commands
//! that would bring the router in line. Nothing is ever applied to the router.
//!
//! ## Features
//! - [x] Fetch `protocols bgp` over the Junos REST API, or read a saved JSON document
//! - [x] IPv4 & IPv6 unicast limits, including groups that configure both
//! - [x] Command files per family for cron runs
//! - [x] Ad hoc tables (mismatches only, or everything with `--full`)
//! - [ ] Per-neighbor `peer-as` overrides
//!
//! ## Cron
//! ```sh
//! $ maxpfx /etc/maxpfx/config.toml
//! [INFO  maxpfx::check] 5 groups, 3 IPv4 and 1 IPv6 limits across 4 ASNs
//! [WARN  maxpfx::registry::sweep] Excluded from this run: AS65004 not found in registry
//! [INFO  maxpfx::output] Wrote 1 commands to /var/lib/maxpfx/prefix-limits-inet.set
//! [INFO  maxpfx::output] Wrote 0 commands to /var/lib/maxpfx/prefix-limits-inet6.set
//! ```
//!
//! ## Ad hoc
//! ```sh
//! $ maxpfx config.toml --adhoc --full
//! IPv4 results
//!  ASN    Configured  Registry  Mismatch?
//! ----------------------------------------
//!  65001  500         1000      YES
//!  65002  200         200
//!  65004  300         ---       unresolved
//!
//! IPv6 results
//!  ASN    Configured  Registry  Mismatch?
//! ----------------------------------------
//!  65003  50          0         n/a
//!
//! Registry lookups failed:
//!   AS65004 not found in registry
//!
//! IPv4 commands
//! set protocols bgp group PEER-A family inet unicast prefix-limit maximum 1000
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use log::{debug, info};

use crate::check::{check, Report};
use crate::config::{self, RunConfig};
use crate::output::write_command_files;
use crate::registry::PeeringDb;
use crate::source::{ConfigSource, FileSource, JunosRest};

mod display;
mod table;

use display::table_rows;
use table::FamilyTable;

#[derive(Parser, Debug)]
#[clap(name = "maxpfx", rename_all = "kebab-case")]
/// Check BGP max-prefix limits against PeeringDB
pub struct Args {
    /// Path to maxpfx config.toml
    pub config_path: PathBuf,
    /// Read the BGP configuration (JSON) from this file instead of the router
    #[clap(short, long)]
    pub document: Option<PathBuf>,
    /// Print result tables and commands instead of writing command files
    #[clap(short, long)]
    pub adhoc: bool,
    /// Show every peer in ad hoc tables, not just mismatches
    #[clap(short, long)]
    pub full: bool,
    /// Directory for command files. If not provided, will fall back to config file value
    #[clap(short, long)]
    pub output_dir: Option<PathBuf>,
    /// Show debug logs (additive for trace logs)
    #[clap(short, parse(from_occurrences), global = true)]
    pub verbose: u8,
}

async fn fetch_document(
    args: &Args,
    config: &RunConfig,
) -> Result<serde_json::Value, Box<dyn Error>> {
    let source: Box<dyn ConfigSource + '_> = match &args.document {
        Some(path) => Box::new(FileSource::new(path.clone())),
        None => Box::new(JunosRest::new(&config.router)?),
    };
    info!("Fetching BGP configuration from {}", source.describe());
    Ok(source.fetch().await?)
}

fn print_report(report: &Report, suppress: bool) {
    for (family, outcome) in report.outcome.iter() {
        let rows = table_rows(outcome, suppress);
        FamilyTable::new(family, &rows, suppress).print();
        println!();
    }

    if !report.failures.is_empty() {
        println!("Registry lookups failed:");
        for failure in &report.failures {
            println!("  {}", failure.to_string().yellow());
        }
        println!();
    }

    for (family, commands) in report.commands.iter() {
        if commands.is_empty() {
            continue;
        }
        println!("{} commands", family);
        for command in commands {
            println!("{}", command);
        }
        println!();
    }
}

async fn run_cmd(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = config::from_file(&args.config_path)?;
    debug!("{:?}", config);

    let document = fetch_document(args, &config).await?;
    let registry = PeeringDb::new(&config.registry)?;
    let report = check(&document, &registry, config.registry.concurrency).await?;

    if args.adhoc {
        print_report(&report, !args.full);
    } else {
        let directory = args
            .output_dir
            .as_ref()
            .unwrap_or(&config.output.directory);
        write_command_files(directory, &report.commands)?;
    }
    Ok(())
}

/// Run one reconciliation, returning false if it could not complete
pub async fn run(args: &Args) -> bool {
    match run_cmd(args).await {
        Ok(()) => true,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            false
        }
    }
}
