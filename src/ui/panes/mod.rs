//! Pane rendering
//!
//! - [`trace`]: every probe record in run order, indented by nesting
//! - [`summary`]: peak stack depth per function with a depth bar
//! - [`status`]: status bar with keybindings
//!
//! Each module exports one `render_*` function that draws into a given area.

pub mod status;
pub mod summary;
pub mod trace;

pub use status::render_status_bar;
pub use summary::render_summary_pane;
pub use trace::render_trace_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style for a pane depending on focus
fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `scroll_offset` so the last page stays full
fn clamp_scroll(scroll_offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }
}
