//! Drawing the view model with ratatui.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, TableState};

use stocktally_inventory::InventoryView;
use stocktally_inventory::view::{
    ADD_LABEL, COLUMN_HEADERS, EMPTY_MESSAGE, PRICE_LABEL, PRICE_PLACEHOLDER, REMOVE_LABEL,
    STOCK_LABEL, STOCK_PLACEHOLDER, TITLE, TOTAL_LABEL,
};

use crate::app::App;
use crate::state::Focus;

const ACCENT: Color = Color::Rgb(234, 88, 12);
const MUTED: Color = Color::DarkGray;
const HINTS: &str = "Tab: next field │ Enter: add / remove │ ↑↓: select row │ Esc: quit";

pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();
    let focus = app.focus();

    let [title, inputs, error, button, list, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(Span::styled(
            TITLE,
            Style::new().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        title,
    );

    let [stock_area, price_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(inputs);
    draw_input(frame, stock_area, STOCK_LABEL, STOCK_PLACEHOLDER, &view.stock_input, focus == Focus::Stock);
    draw_input(frame, price_area, PRICE_LABEL, PRICE_PLACEHOLDER, &view.price_input, focus == Focus::Price);

    if let Some(message) = &view.error {
        frame.render_widget(
            Paragraph::new(Span::styled(message.as_str(), Style::new().fg(Color::Red))),
            error,
        );
    }

    let button_style = if focus == Focus::AddButton {
        Style::new().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(ACCENT)
    };
    frame.render_widget(
        Paragraph::new(ADD_LABEL)
            .style(button_style)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(border_style(focus == Focus::AddButton))),
        button,
    );

    if view.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(EMPTY_MESSAGE, Style::new().fg(MUTED)))
                .alignment(Alignment::Center)
                .block(Block::bordered().border_style(border_style(false))),
            list,
        );
    } else {
        let selected = if focus == Focus::Table {
            app.state().selected
        } else {
            None
        };
        draw_table(frame, list, &view, selected, focus == Focus::Table);
    }

    let mut status = Vec::new();
    if let Some(message) = &app.state().status {
        status.push(Span::styled(message.as_str(), Style::new().fg(ACCENT)));
        status.push(Span::raw(" │ "));
    }
    status.push(Span::styled(HINTS, Style::new().fg(MUTED)));
    frame.render_widget(Paragraph::new(Line::from(status)), footer);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::new().fg(ACCENT)
    } else {
        Style::new().fg(MUTED)
    }
}

fn draw_input(frame: &mut Frame, area: Rect, label: &str, placeholder: &str, text: &str, focused: bool) {
    let content = if text.is_empty() {
        Line::from(Span::styled(placeholder, Style::new().fg(MUTED)))
    } else {
        Line::from(text)
    };

    frame.render_widget(
        Paragraph::new(content).block(Block::bordered().title(label).border_style(border_style(focused))),
        area,
    );

    if focused {
        let inner_width = area.width.saturating_sub(2);
        let typed = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let x = area.x + 1 + typed.min(inner_width.saturating_sub(1));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn right(text: &str) -> Cell<'_> {
    Cell::from(Line::from(text).alignment(Alignment::Right))
}

fn draw_table(frame: &mut Frame, area: Rect, view: &InventoryView, selected: Option<usize>, focused: bool) {
    let [item, stock, price, total, action] = COLUMN_HEADERS;
    let header = Row::new(vec![
        Cell::from(item),
        right(stock),
        right(price),
        right(total),
        Cell::from(Line::from(action).alignment(Alignment::Center)),
    ])
    .style(Style::new().fg(ACCENT).add_modifier(Modifier::BOLD));

    let rows = view.rows.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.name.as_str()),
            right(&row.stock),
            right(&row.price),
            right(&row.total),
            Cell::from(Line::from(REMOVE_LABEL).alignment(Alignment::Center))
                .style(Style::new().fg(Color::Red)),
        ])
    });

    let footer = Row::new(vec![
        Cell::from(TOTAL_LABEL),
        Cell::from(""),
        Cell::from(""),
        right(&view.total),
        Cell::from(""),
    ])
    .style(Style::new().fg(ACCENT).add_modifier(Modifier::BOLD));

    let widths = [
        Constraint::Min(10),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(14),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .footer(footer)
        .row_highlight_style(Style::new().add_modifier(Modifier::REVERSED))
        .block(Block::bordered().border_style(border_style(focused)));

    let mut state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut state);
}
