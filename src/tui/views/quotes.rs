//! Quote manager view

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::{or_placeholder, short_age, truncate};
use crate::models::Quote;
use crate::tui::app::{App, QuoteMode};
use crate::tui::dialogs;

/// Cell text for one row: id, text, author, category, age
pub fn row_cells(quote: &Quote) -> [String; 5] {
    [
        quote.id.to_string(),
        truncate(&quote.text, 60),
        or_placeholder(&quote.author, "Unknown").to_string(),
        or_placeholder(&quote.category, "None").to_string(),
        short_age(quote.age()),
    ]
}

/// Render the quote screen and any dialog it has open
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let screen = &app.quotes;

    let title = format!(
        " Quotes ({}) ",
        screen.category_filter.as_deref().unwrap_or("all")
    );

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    if screen.quotes.is_empty() {
        let text = if screen.loading {
            "Loading..."
        } else {
            "No quotes found. Press 'a' to add one."
        };
        let paragraph = Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);
    } else {
        let widths = [
            Constraint::Length(6),  // ID
            Constraint::Min(30),    // Quote
            Constraint::Length(20), // Author
            Constraint::Length(16), // Category
            Constraint::Length(6),  // Age
        ];

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let header = Row::new(vec![
            Cell::from("ID").style(bold),
            Cell::from("Quote").style(bold),
            Cell::from("Author").style(bold),
            Cell::from("Category").style(bold),
            Cell::from("Age").style(bold),
        ])
        .style(Style::default().fg(Color::Yellow))
        .height(1);

        let rows: Vec<Row> = screen
            .quotes
            .iter()
            .map(|quote| {
                let [id, text, author, category, age] = row_cells(quote);
                Row::new(vec![
                    Cell::from(id),
                    Cell::from(text),
                    Cell::from(author).style(Style::default().fg(Color::Cyan)),
                    Cell::from(category).style(Style::default().fg(Color::Magenta)),
                    Cell::from(age),
                ])
                .style(Style::default().fg(Color::White))
            })
            .collect();

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = TableState::default();
        state.select(Some(screen.selected));

        frame.render_stateful_widget(table, area, &mut state);
    }

    match &screen.mode {
        QuoteMode::Browsing => {}
        QuoteMode::Adding(form) | QuoteMode::Editing { form, .. } => {
            dialogs::form::render(frame, form);
        }
        QuoteMode::ConfirmDelete(quote) => {
            dialogs::confirm::render(
                frame,
                "Delete Quote?",
                &dialogs::confirm::quote_details(quote),
            );
        }
        QuoteMode::Viewing(quote) => dialogs::quote_card::render(frame, quote),
    }
}
