use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, InputMode};
use super::commands;
use super::edit_modal::{EditModal, Field};
use super::theme;
use super::util::{tail, truncate};

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Transactions table
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    super::screens::transactions::render(f, chunks[0], app);
    render_status_bar(f, chunks[1], app);
    render_command_bar(f, chunks[2], app);

    if let Some(modal) = &app.edit_modal {
        render_edit_modal(f, f.area(), modal);
    }
    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_bg = match app.input_mode {
        InputMode::Normal => theme::ACCENT,
        InputMode::Command => theme::GREEN,
        InputMode::Editing => theme::YELLOW,
    };
    let mode_style = Style::default()
        .fg(theme::BASE)
        .bg(mode_bg)
        .add_modifier(Modifier::BOLD);

    let source = app
        .ledger_path
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sample data".into());
    let info = format!(" {source} | {} txns", app.store.len());

    let right = match app.input_mode {
        InputMode::Normal => " e edit | :w export | ? help ",
        InputMode::Command => " Enter run | Esc cancel ",
        InputMode::Editing => " Tab next | ←/→ change | Enter save | Esc close ",
    };

    let available = area.width as usize;
    let used = mode_label.chars().count() + info.chars().count() + right.chars().count();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Normal | InputMode::Editing => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press e to edit, : for commands, ? for help",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    theme::command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

/// Centered dialog: header with close hint, one label/value pair per visible
/// field, Cancel/Save buttons and a line for the validation error.
fn render_edit_modal(f: &mut Frame, area: Rect, modal: &EditModal) {
    let popup_width = 52.min(area.width.saturating_sub(4));
    // One column of border on each side plus one of padding
    let value_width = (popup_width as usize).saturating_sub(4).max(1);
    let buffer = modal.buffer();

    let mut lines: Vec<Line> = vec![Line::from("")];
    let mut cursor: Option<(u16, u16)> = None;

    for field in modal.fields() {
        if matches!(field, Field::Cancel | Field::Save) {
            continue;
        }
        let focused = modal.focus() == field;
        lines.push(Line::from(Span::styled(
            format!(" {}", field.label()),
            theme::label_style(),
        )));

        let shown = match field {
            Field::Type => truncate(&format!("‹ {} ›", buffer.kind.label()), value_width),
            Field::Status => truncate(&format!("‹ {} ›", buffer.status.label()), value_width),
            // Keep the end of long input visible, that is where typing happens
            _ => tail(buffer.text(field).unwrap_or_default(), value_width.saturating_sub(1)),
        };
        if focused && field.is_text() {
            cursor = Some((2 + shown.chars().count() as u16, lines.len() as u16));
        }
        let style = if focused {
            theme::focused_input_style()
        } else {
            theme::input_style()
        };
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(format!(" {shown:<value_width$}"), style),
        ]));
        lines.push(Line::from(""));
    }

    let button_style = |field: Field, base: Style| {
        if modal.focus() == field {
            theme::focused_button_style()
        } else {
            base
        }
    };
    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", Field::Cancel.label()),
            button_style(Field::Cancel, theme::button_style()),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", Field::Save.label()),
            button_style(Field::Save, theme::primary_button_style()),
        ),
    ]));
    lines.push(match modal.error() {
        Some(err) => Line::from(Span::styled(format!(" {err}"), theme::error_style())),
        None => Line::from(""),
    });

    let popup_height = (lines.len() as u16 + 2).min(area.height);
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT))
        .style(Style::default().bg(theme::BASE))
        .title(Span::styled(
            " Edit Transaction ",
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        ))
        .title_top(Line::from(Span::styled(" ✕ Esc ", theme::dim_style())).right_aligned());

    f.render_widget(Clear, popup_area);
    f.render_widget(Paragraph::new(lines).block(block), popup_area);

    if let Some((col, row)) = cursor {
        let cx = popup_area.x + 1 + col;
        let cy = popup_area.y + 1 + row;
        if cx < popup_area.right() && cy < popup_area.bottom() {
            f.set_cursor_position((cx, cy));
        }
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let row = |text: &'static str| Line::from(Span::styled(text, theme::normal_style()));

    let mut help_text = vec![
        Line::from(Span::styled(
            " txedit Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading(" Transactions"),
        row("  j/k or Up/Down  Move cursor          g/G        Top/Bottom"),
        row("  Ctrl-d/u        Page Down/Up         q, Ctrl-c  Quit"),
        row("  e or Enter      Edit transaction     :          Command mode"),
        Line::from(""),
        heading(" Edit dialog"),
        row("  Tab/Shift-Tab   Next/Previous field  Left/Right Change Type/Status"),
        row("  Enter           Save changes         Esc        Close without saving"),
        Line::from(""),
        heading(" Commands"),
    ];

    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 1 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<14} {desc}"),
            theme::normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        Style::default().fg(theme::TEXT_DIM),
    )));

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::BASE)),
    );
    f.render_widget(help, popup_area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
