// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use clap::Parser;
use csv::{ReaderBuilder, Trim, Writer};
use mini_bank::{Bank, BankConfig, Operation};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Mini Bank - Apply deposits, withdrawals, and transfers to a client ledger
///
/// Reads operations from a CSV script and outputs account balances to stdout.
/// Outcomes and rejected operations are logged to stderr.
#[derive(Parser, Debug)]
#[command(name = "mini-bank")]
#[command(about = "Apply banking operations from a CSV script", long_about = None)]
struct Args {
    /// Path to CSV file with operations (reads stdin when omitted)
    ///
    /// Expected format: op,client,target,amount
    /// Example: mini-bank ops.csv > balances.csv
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// TOML file with seed clients (defaults to Alice, Bob and Charlie)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match BankConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                process::exit(1);
            }
        },
        None => BankConfig::default(),
    };

    let bank = match config.into_ledger() {
        Ok(ledger) => Bank::new(ledger),
        Err(e) => {
            eprintln!("Error building ledger: {}", e);
            process::exit(1);
        }
    };

    let result = match &args.input {
        Some(path) => match File::open(path) {
            Ok(file) => apply_operations(&bank, BufReader::new(file)),
            Err(e) => {
                eprintln!("Error opening file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => apply_operations(&bank, io::stdin().lock()),
    };
    if let Err(e) = result {
        eprintln!("Error processing operations: {}", e);
        process::exit(1);
    }

    if let Err(e) = write_balances(&bank, io::stdout()) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

/// Raw CSV record matching the script format.
///
/// Fields: `op, client, target, amount`
#[derive(Debug, Deserialize)]
struct CsvRecord {
    op: String,
    client: String,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    amount: String,
}

impl CsvRecord {
    /// Converts CSV record to an [`Operation`].
    ///
    /// Returns `None` for unknown operations or a transfer without a target.
    fn into_operation(self) -> Option<Operation> {
        match self.op.to_lowercase().as_str() {
            "deposit" => Some(Operation::Deposit {
                client: self.client,
                amount: self.amount,
            }),
            "withdraw" | "withdrawal" => Some(Operation::Withdraw {
                client: self.client,
                amount: self.amount,
            }),
            "transfer" => {
                let to = self.target.filter(|target| !target.is_empty())?;
                Some(Operation::Transfer {
                    from: self.client,
                    to,
                    amount: self.amount,
                })
            }
            _ => None,
        }
    }
}

/// Apply operations from a CSV reader.
///
/// Rows are streamed one at a time. Malformed rows are skipped; rejected
/// operations are logged and do not stop processing.
///
/// # CSV Format
///
/// Expected columns: `op, client, target, amount`
/// - `op`: Operation (deposit, withdraw, transfer)
/// - `client`: Client name (source for transfers)
/// - `target`: Destination client name (transfers only)
/// - `amount`: Amount text, validated when applied
///
/// # Example
///
/// ```csv
/// op,client,target,amount
/// deposit,Alice,,200
/// transfer,Alice,Bob,300
/// ```
///
/// # Errors
///
/// Returns a CSV error if the reader fails or the CSV structure is invalid.
fn apply_operations<R: Read>(bank: &Bank, reader: R) -> Result<(), csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    for (row, result) in rdr.deserialize::<CsvRecord>().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(row, "skipping malformed row: {}", e);
                continue;
            }
        };

        let Some(operation) = record.into_operation() else {
            tracing::warn!(row, "skipping invalid operation record");
            continue;
        };

        match bank.apply(&operation) {
            Ok(outcome) => tracing::info!(row, client = operation.client(), "{}", outcome),
            Err(e) => tracing::warn!(
                row,
                op = operation.kind(),
                client = operation.client(),
                "operation rejected: {}",
                e
            ),
        }
    }

    Ok(())
}

/// Write account balances to a CSV writer
///
/// One row per client, in registration order.
///
/// # CSV Format
///
/// Columns: `client, account, balance`
///
/// # Errors
///
/// Returns a CSV error if writing fails.
fn write_balances<W: Write>(bank: &Bank, writer: W) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);

    for summary in bank.ledger().summaries() {
        wtr.serialize(&summary)?;
    }

    wtr.flush()?;
    Ok(())
}
