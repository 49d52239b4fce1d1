use ratatui::Terminal;
use ratatui::backend::TestBackend;

use stocktally_tui::{App, Focus, Intent, render};

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| render::draw(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn type_row(app: &mut App, stock: &str, price: &str) {
    for ch in stock.chars() {
        app.dispatch(Intent::Insert(ch));
    }
    app.dispatch(Intent::FocusNext);
    for ch in price.chars() {
        app.dispatch(Intent::Insert(ch));
    }
    app.dispatch(Intent::Submit);
    app.dispatch(Intent::FocusPrev);
}

#[test]
fn empty_form_shows_labels_and_placeholder_message() {
    let app = App::new("$");
    let text = screen(&app);

    assert!(text.contains("Quick Inventory Calculator"));
    assert!(text.contains("Stock Quantity"));
    assert!(text.contains("Unit Price"));
    assert!(text.contains("Add Item"));
    assert!(text.contains("No items added yet. Start by entering stock and price values."));
    assert!(!text.contains("Total Inventory Value:"));
}

#[test]
fn table_shows_rows_and_total() {
    let mut app = App::new("$");
    type_row(&mut app, "10", "2.50");
    type_row(&mut app, "4", "1.25");
    let text = screen(&app);

    assert!(text.contains("Item 1"));
    assert!(text.contains("Item 2"));
    assert!(text.contains("$2.50"));
    assert!(text.contains("$25.00"));
    assert!(text.contains("$5.00"));
    assert!(text.contains("Total Inventory Value:"));
    assert!(text.contains("$30.00"));
    assert!(text.contains("Remove"));
    assert!(text.contains("Added Item 2"));
    assert!(!text.contains("No items added yet."));
}

#[test]
fn validation_error_is_shown_beneath_inputs() {
    let mut app = App::new("$");
    assert_eq!(app.focus(), Focus::Stock);
    app.dispatch(Intent::Submit);

    assert!(screen(&app).contains("Please fill both stock and price fields"));
}

#[test]
fn removing_every_row_brings_back_the_empty_message() {
    let mut app = App::new("$");
    type_row(&mut app, "1", "1");
    app.dispatch(Intent::FocusPrev);
    assert_eq!(app.focus(), Focus::Table);
    app.dispatch(Intent::RemoveSelected);

    let text = screen(&app);
    assert!(text.contains("No items added yet."));
    assert!(text.contains("Removed Item 1"));
}
