use anyhow::Result;
use std::path::Path;

use crate::config::shellexpand;
use crate::store::{load_csv, TransactionStore};
use crate::ui::util::{format_amount, truncate};

const COMMANDS: &[&str] = &["list", "ls", "--help", "-h", "help", "--version", "-V", "version"];

/// True when `arg` names a CLI subcommand rather than a ledger path.
pub(crate) fn is_cli_command(arg: &str) -> bool {
    COMMANDS.contains(&arg)
}

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "list" | "ls" => cli_list(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("txedit {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("txedit - browse and edit a transaction ledger");
    println!();
    println!("Usage: txedit [ledger.csv | command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch the TUI with sample transactions");
    println!("  <ledger.csv>                  Launch the TUI on a ledger file");
    println!("  list [ledger.csv]             Print the ledger as a table");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Environment:");
    println!("  TXEDIT_LOG                    Log filter (default: info)");
}

fn cli_list(args: &[String]) -> Result<()> {
    let store = match args.first() {
        Some(file) => load_csv(Path::new(&shellexpand(file)))?,
        None => TransactionStore::sample(),
    };

    if store.is_empty() {
        println!("No transactions");
        return Ok(());
    }

    println!(
        "{:<10} {:<9} {:<18} {:<24} {:<10} {:>12}",
        "ID", "Type", "Counterparty", "Description", "Status", "Amount"
    );
    println!("{}", "─".repeat(88));
    for txn in store.iter() {
        println!(
            "{:<10} {:<9} {:<18} {:<24} {:<10} {:>12}",
            truncate(txn.id.as_str(), 10),
            txn.kind.label(),
            truncate(txn.counterparty().unwrap_or("—"), 18),
            truncate(&txn.description, 24),
            txn.status.label(),
            format_amount(txn.amount),
        );
    }
    Ok(())
}
