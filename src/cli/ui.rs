use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::core::Row;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Renders the visible rows as a Name/Value/Category table.
pub fn rows_table(rows: &[Row]) -> String {
    let mut table = new_styled_table();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Value"),
        header_cell("Category"),
    ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.name),
            Cell::new(format!("{:.2}", row.value)).set_alignment(CellAlignment::Right),
            Cell::new(row.category.to_string()).fg(Color::DarkGrey),
        ]);
    }

    table.to_string()
}

/// Renders one horizontal bar per row, scaled to the largest visible value.
pub fn rows_bars(rows: &[Row]) -> String {
    const BAR_WIDTH: usize = 40;

    let max = rows.iter().fold(0.0_f64, |acc, r| acc.max(r.value));
    let name_width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);

    let mut output = String::new();
    for row in rows {
        let filled = if max > 0.0 {
            (((row.value / max) * BAR_WIDTH as f64).round() as usize).max(1)
        } else {
            1
        };
        let bar = "\u{2588}".repeat(filled);
        output.push_str(&format!(
            "{:<name_width$}  {} {:.2}\n",
            row.name,
            style(&bar).cyan(),
            row.value
        ));
    }
    output
}

/// Creates a styled spinner for the fetch phase.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;

    #[test]
    fn test_rows_table_lists_rows_in_order() {
        let rows = vec![
            Row::new("EUR", 0.92, Category::Currency),
            Row::new("Bitcoin", 60000.0, Category::Crypto),
        ];
        let rendered = rows_table(&rows);

        assert!(rendered.contains("EUR"));
        assert!(rendered.contains("0.92"));
        assert!(rendered.contains("Bitcoin"));
        assert!(rendered.find("EUR").unwrap() < rendered.find("Bitcoin").unwrap());
    }

    #[test]
    fn test_rows_bars_scales_to_largest_value() {
        let rows = vec![
            Row::new("small", 1.0, Category::Commodity),
            Row::new("large", 100.0, Category::Commodity),
        ];
        let rendered = rows_bars(&rows);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2);
        let small_bar = lines[0].matches('\u{2588}').count();
        let large_bar = lines[1].matches('\u{2588}').count();
        assert_eq!(large_bar, 40);
        // A tiny value still gets a visible mark.
        assert_eq!(small_bar, 1);
    }

    #[test]
    fn test_rows_bars_handles_empty_input() {
        assert!(rows_bars(&[]).is_empty());
    }
}
