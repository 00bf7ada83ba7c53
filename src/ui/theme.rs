use ratatui::style::{Color, Modifier, Style};

use crate::models::TransactionStatus;

pub(crate) const BASE: Color = Color::Rgb(30, 30, 46);
pub(crate) const ACCENT: Color = Color::Rgb(137, 180, 250);
pub(crate) const GREEN: Color = Color::Rgb(166, 227, 161);
pub(crate) const RED: Color = Color::Rgb(243, 139, 168);
pub(crate) const YELLOW: Color = Color::Rgb(249, 226, 175);
pub(crate) const SURFACE: Color = Color::Rgb(49, 50, 68);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
pub(crate) const OVERLAY: Color = Color::Rgb(69, 71, 90);
pub(crate) const COMMAND_BG: Color = Color::Rgb(24, 24, 37);

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(BASE)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(BASE).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}

pub(crate) fn inbound_style() -> Style {
    Style::default().fg(GREEN)
}

pub(crate) fn outbound_style() -> Style {
    Style::default().fg(RED)
}

pub(crate) fn transaction_status_style(status: TransactionStatus) -> Style {
    match status {
        TransactionStatus::Completed => Style::default().fg(GREEN),
        TransactionStatus::Pending => Style::default().fg(YELLOW),
        TransactionStatus::Failed => Style::default().fg(RED),
    }
}

// ── Edit dialog ──────────────────────────────────────────────

pub(crate) fn label_style() -> Style {
    Style::default().fg(TEXT_DIM).add_modifier(Modifier::BOLD)
}

pub(crate) fn input_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn focused_input_style() -> Style {
    Style::default().fg(BASE).bg(ACCENT)
}

pub(crate) fn button_style() -> Style {
    Style::default().fg(TEXT).bg(OVERLAY)
}

pub(crate) fn primary_button_style() -> Style {
    Style::default()
        .fg(BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn error_style() -> Style {
    Style::default().fg(RED).add_modifier(Modifier::BOLD)
}

pub(crate) fn focused_button_style() -> Style {
    Style::default()
        .fg(BASE)
        .bg(YELLOW)
        .add_modifier(Modifier::BOLD)
}
