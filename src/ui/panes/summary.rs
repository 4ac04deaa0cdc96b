//! Summary pane: peak stack depth per function
//!
//! One row per label, deepest first. The bar is scaled against the deepest
//! peak of the run.

use super::{border_style, clamp_scroll};
use crate::probe::summary::Summary;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

/// Width of the depth bar in cells
const BAR_WIDTH: usize = 24;

/// Render the summary pane
pub fn render_summary_pane(
    frame: &mut Frame,
    area: Rect,
    summary: &Summary,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Peak Depth ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let entries = summary.entries();
    // Borders plus header row
    let visible_height = area.height.saturating_sub(3).max(1) as usize;
    clamp_scroll(scroll_offset, entries.len(), visible_height);

    let max_peak = summary.max_peak_sp();
    let rows: Vec<Row> = entries
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(label, stats)| {
            Row::new(vec![
                Cell::from(label.to_string()).style(Style::default().fg(DEFAULT_THEME.fg)),
                Cell::from(stats.reports.to_string())
                    .style(Style::default().fg(DEFAULT_THEME.number)),
                Cell::from(stats.peak_sp.to_string())
                    .style(Style::default().fg(DEFAULT_THEME.number)),
                Cell::from(stats.peak_fp.to_string())
                    .style(Style::default().fg(DEFAULT_THEME.number)),
                Cell::from(stats.tags()).style(Style::default().fg(DEFAULT_THEME.secondary)),
                Cell::from(depth_bar(stats.peak_sp, max_peak, BAR_WIDTH))
                    .style(Style::default().fg(DEFAULT_THEME.bar)),
            ])
        })
        .collect();

    let header = Row::new(vec!["function", "reports", "peak sp", "peak fp", "", "depth"])
        .style(
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        );

    let widths = [
        Constraint::Min(18),
        Constraint::Length(7),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Length(BAR_WIDTH as u16),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}

/// Bar of `width` cells filled in proportion to `value / max`
pub fn depth_bar(value: isize, max: isize, width: usize) -> String {
    if max <= 0 || value <= 0 {
        return String::new();
    }
    let filled = ((value as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(filled.clamp(1, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_bar_scaling() {
        assert_eq!(depth_bar(100, 100, 10).chars().count(), 10);
        assert_eq!(depth_bar(50, 100, 10).chars().count(), 5);
        assert_eq!(depth_bar(1, 1000, 10).chars().count(), 1);
        assert_eq!(depth_bar(0, 100, 10), "");
        assert_eq!(depth_bar(-5, 100, 10), "");
    }
}
