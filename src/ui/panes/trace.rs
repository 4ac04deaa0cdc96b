//! Trace pane: probe records in the order they were reported

use super::{border_style, clamp_scroll};
use crate::probe::record::{CallKind, Record};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the trace pane
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    records: &[Record],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Trace ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if records.is_empty() {
        let paragraph = Paragraph::new("(no records)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, records.len(), visible_height);

    let items: Vec<ListItem> = records
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|record| ListItem::new(record_line(record)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn record_line(record: &Record) -> Line<'static> {
    let name_color = match record {
        Record::Checksum { .. } => DEFAULT_THEME.success,
        Record::Offset { kind, .. } => kind_color(*kind),
    };
    Line::from(vec![
        Span::raw("  ".repeat(record.indent())),
        Span::styled(record.name(), Style::default().fg(name_color)),
        Span::raw(" "),
        Span::styled(record.values(), Style::default().fg(DEFAULT_THEME.number)),
    ])
}

fn kind_color(kind: CallKind) -> ratatui::style::Color {
    match kind {
        CallKind::Direct => DEFAULT_THEME.direct,
        CallKind::Dynamic => DEFAULT_THEME.dynamic,
        CallKind::Cycle => DEFAULT_THEME.cycle,
    }
}
