mod config;
mod logging;
mod models;
mod run;
mod store;
mod ui;

use anyhow::Result;

use crate::config::Config;
use crate::store::TransactionStore;
use crate::ui::app::App;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.get(1).is_some_and(|arg| run::is_cli_command(arg)) {
        return run::as_cli(&args);
    }
    if args.len() > 2 {
        eprintln!("Usage: txedit [ledger.csv | command]");
        anyhow::bail!("Too many arguments");
    }

    let config = Config::load(args.get(1).map(String::as_str))?;
    logging::init(&config)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting txedit");

    let store = match &config.ledger_path {
        Some(path) => store::load_csv(path)?,
        None => TransactionStore::sample(),
    };

    let mut app = App::new(store, config.ledger_path.clone());
    run::as_tui(&mut app)
}
