//! `docpath` CLI - inspect and edit the root container of a JSON document.
//!
//! ## Usage
//!
//! ```sh
//! # What kind of value is the root?
//! echo '{"a":1}' | docpath kind
//!
//! # List keys (or indices) and count entries
//! docpath keys -i data.json
//! docpath len -i data.json
//!
//! # Print every value of the root container, one compact JSON per line
//! docpath values -i data.json
//!
//! # Read one entry; --strict turns a missing key into an error
//! echo '{"a":[1,2]}' | docpath get a
//! echo '{}' | docpath get x --strict
//!
//! # Insert into an array (shifts later elements) or append without a key
//! echo '[1,2,3]' | docpath set 1 --value 99
//! echo '[1,2,3]' | docpath set --value 4
//!
//! # Add or replace an object member and write the result to a file
//! docpath set name --value '"Alice"' -i in.json -o out.json
//! ```
//!
//! Set `RUST_LOG=docpath_core=trace` (or pass `-v`) to see accessor events.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docpath_core::{
    get_map_value, get_property, length, property_keys, set_property, to_iterable, Document,
    PropertyKey,
};
use serde_json::Value;
use std::io::{self, Read};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "docpath",
    version,
    about = "Inspect and edit JSON documents through the docpath accessor"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Input JSON file (reads from stdin if omitted)
    #[arg(short, long, global = true)]
    input: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// Log accessor activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the type of the root value
    Kind,
    /// Print the keys of the root object, or the indices of the root array
    Keys,
    /// Print the number of entries in the root container
    Len,
    /// Print each value of the root container as compact JSON
    Values,
    /// Print the entry at KEY as pretty JSON
    Get {
        /// Object key or array index
        #[arg(allow_negative_numbers = true)]
        key: String,
        /// Fail if an object key is missing instead of printing nothing
        #[arg(long)]
        strict: bool,
    },
    /// Insert or replace an entry and print the updated document
    Set {
        /// Object key or array index (appends to an array if omitted)
        #[arg(allow_negative_numbers = true)]
        key: Option<String>,
        /// JSON value to write
        #[arg(long)]
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let raw = read_input(cli.input.as_deref())?;
    let doc: Value = serde_json::from_str(&raw).context("Failed to parse input JSON")?;
    debug!(kind = doc.type_name(), "document loaded");

    let rendered = run(cli.command, doc)?;
    write_output(cli.output.as_deref(), &rendered)
}

/// Execute one command against the parsed document and render its output.
fn run(command: Commands, mut doc: Value) -> Result<String> {
    let rendered = match command {
        Commands::Kind => format!("{}\n", doc.type_name()),
        Commands::Keys => property_keys(&doc)
            .context("Cannot list keys")?
            .iter()
            .map(|k| format!("{k}\n"))
            .collect(),
        Commands::Len => format!("{}\n", length(&doc).context("Cannot measure length")?),
        Commands::Values => {
            let mut out = String::new();
            for value in to_iterable(&doc).context("Cannot iterate values")? {
                out.push_str(&serde_json::to_string(value)?);
                out.push('\n');
            }
            out
        }
        Commands::Get { key, strict } => {
            let key = PropertyKey::parse_loose(&key);
            let found = if strict && doc.is_object() {
                get_map_value(&doc, &key.as_name(), true)
            } else {
                get_property(&doc, &key)
            };
            match found.with_context(|| format!("Cannot read '{key}'"))? {
                Some(value) => format!("{}\n", serde_json::to_string_pretty(value)?),
                None => {
                    eprintln!("'{key}' not found");
                    String::new()
                }
            }
        }
        Commands::Set { key, value } => {
            let key = key.as_deref().map(PropertyKey::parse_loose);
            let new_value: Value =
                serde_json::from_str(&value).context("Failed to parse --value as JSON")?;
            set_property(&mut doc, key.as_ref(), new_value).context("Cannot set property")?;
            format!("{}\n", serde_json::to_string_pretty(&doc)?)
        }
    };
    Ok(rendered)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
