mod cli;
mod tui;

pub(crate) use cli::{as_cli, is_cli_command};
pub(crate) use tui::as_tui;
