//! UI component renderers.
//!
//! - [`header`]: Title bar with row and selection counts
//! - [`table`]: CODE / LANGUAGE table with cursor and selection styling
//! - [`footer`]: Keybinding hints
//! - [`empty`]: Loading, failure and no-rows messages

mod empty;
mod footer;
mod header;
mod table;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use footer::render_footer;
use header::render_header;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full editor layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Column headers]
/// [Rows]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// Six lines go to chrome, which is what `compute_viewmodel` reserves.
pub fn render_normal_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_table_headers(current_row, theme);
    let _current_row = render_table_rows(current_row, &vm.display_items, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
