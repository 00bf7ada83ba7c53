use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" Transactions ({}) ", app.store.len()),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    if app.store.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No transactions", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Start txedit with a ledger file: txedit ledger.csv",
                theme::dim_style(),
            )),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["ID", "Type", "Counterparty", "Description", "Status", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .store
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            // Flow direction comes from the type; a negative stored amount reverses it
            let flow = if txn.kind.is_inbound() {
                txn.amount
            } else {
                -txn.amount
            };
            let (amount_str, amount_style) = if flow > Decimal::ZERO {
                (format!("+{}", format_amount(flow)), theme::inbound_style())
            } else if flow < Decimal::ZERO {
                (format_amount(flow), theme::outbound_style())
            } else {
                (format_amount(flow), theme::dim_style())
            };

            let style = if i == app.transaction_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(truncate(txn.id.as_str(), 12)),
                Cell::from(txn.kind.label()),
                Cell::from(truncate(txn.counterparty().unwrap_or("—"), 20)),
                Cell::from(truncate(&txn.description, 40)),
                Cell::from(Span::styled(
                    txn.status.label(),
                    theme::transaction_status_style(txn.status),
                )),
                Cell::from(Span::styled(amount_str, amount_style)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(20),
        Constraint::Min(20),
        Constraint::Length(11),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}
