use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;

use super::app::App;
use crate::config::shellexpand;
use crate::store::export_csv;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit txedit", cmd_quit, r);
    register_command!("quit", "Quit txedit", cmd_quit, r);
    register_command!("e", "Edit selected transaction", cmd_edit, r);
    register_command!("edit", "Edit selected transaction", cmd_edit, r);
    register_command!(
        "w",
        "Export ledger to CSV (e.g. :w ~/ledger.csv)",
        cmd_export,
        r
    );
    register_command!(
        "export",
        "Export ledger to CSV (e.g. :export ~/ledger.csv)",
        cmd_export,
        r
    );
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_edit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.open_editor();
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_export(args: &str, app: &mut App) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        match &app.ledger_path {
            Some(path) => path.clone(),
            None => {
                app.set_status("No ledger file loaded. Usage: :export <path>");
                return Ok(());
            }
        }
    } else {
        PathBuf::from(shellexpand(args))
    };

    let count = export_csv(&app.store, &path)?;
    app.set_status(format!(
        "Exported {count} transactions to {}",
        path.display()
    ));
    Ok(())
}
