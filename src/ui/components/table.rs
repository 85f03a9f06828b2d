//! Table component renderer.
//!
//! Renders the ordered languages as a CODE / LANGUAGE table with a cursor
//! marker column and full-row selection highlighting.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Width of the CODE column, including its trailing gap.
const CODE_WIDTH: usize = 10;

/// Renders the column headers at `row` and returns the next row.
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("  {:<CODE_WIDTH$}{}", "CODE", "LANGUAGE");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every item starting at `row` and returns the next free row.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one language row.
///
/// ```text
/// > en        English            [padding to fill line]
/// ```
///
/// Selected rows are padded to the full width so the selection background
/// spans the line. Code and name are already truncated by the view model.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base_fg = if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };

    if item.is_cursor {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.cursor_fg));
        print!("> ");
        print!("{}", Theme::reset());
        if item.is_selected {
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        }
    } else {
        print!("  ");
    }

    print!("{}", Theme::fg(base_fg));
    print!("{:<CODE_WIDTH$}", item.code);
    print!("{}", item.name);

    let line_len = 2 + item.code.chars().count().max(CODE_WIDTH) + item.name.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
