use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{Focus, MessageType, StatusMessage};
use super::layout::AppLayout;
use super::timestamps::format_timestamp;
use crate::archive::format_long_date;
use crate::models::{AiSource, ConversationRecord};
use crate::prompt::{Selection, handoff_label};
use crate::utils::sanitize_for_terminal;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const BAR_BG: Color = Color::Rgb(24, 24, 27);
const ERROR: Color = Color::Rgb(239, 68, 68);

/// Characters of summary shown under each result
const SUMMARY_PREVIEW_CHARS: usize = 100;

/// Everything one frame needs, borrowed from the app
pub struct RenderState<'a> {
    pub results: &'a [&'a ConversationRecord],
    pub selected_idx: usize,
    pub selection: &'a Selection,
    pub query: &'a str,
    pub request: &'a str,
    pub prompt: Option<&'a str>,
    pub target: AiSource,
    pub focus: Focus,
    pub counts: &'a [(AiSource, usize)],
    pub total_count: usize,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, layout.header_area, state);
    render_input(frame, layout.search_area, " 🔍 검색 ", state.query, state.focus == Focus::Search);
    render_results_list(frame, layout.results_area, state);
    render_preview(frame, layout.preview_area, state.prompt, state.target);
    render_input(
        frame,
        layout.request_area,
        " 요청 ",
        state.request,
        state.focus == Focus::Request,
    );
    render_status_bar(frame, layout.status_area, state);
}

fn border_style(focused: bool) -> Style {
    if focused { Style::default().fg(ACCENT) } else { Style::default().fg(MUTED) }
}

fn render_header(frame: &mut Frame, area: Rect, state: &RenderState) {
    let mut spans = Vec::new();
    for (source, count) in state.counts {
        let profile = source.profile();
        spans.push(Span::raw(format!("{} {} ", profile.icon, profile.role_label)));
        spans.push(Span::styled(
            format!("{}회", count),
            Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled(format!("총 {}개", state.total_count), Style::default().fg(MUTED)));

    let title = format!(" 📊 오늘의 현황 ({}) ", format_long_date(Local::now().date_naive()));
    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_style(border_style(false)).title(title));

    frame.render_widget(paragraph, area);
}

fn render_input(frame: &mut Frame, area: Rect, title: &str, text: &str, focused: bool) {
    let cursor = if focused { "▏" } else { "" };
    let paragraph = Paragraph::new(format!("{}{}", sanitize_for_terminal(text), cursor)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused))
            .title(title.to_string()),
    );

    frame.render_widget(paragraph, area);
}

/// Single display line: sanitized, first line only, at most `max_chars`
fn one_line(text: &str, max_chars: usize) -> String {
    sanitize_for_terminal(text).lines().next().unwrap_or("").chars().take(max_chars).collect()
}

/// Second row of a result: the summary, or the opening of the content without one,
/// with line breaks folded into spaces
fn result_detail(record: &ConversationRecord) -> String {
    let text = record.summary().filter(|s| !s.is_empty()).unwrap_or(record.content());
    let folded = sanitize_for_terminal(text).split_whitespace().collect::<Vec<_>>().join(" ");
    folded.chars().take(SUMMARY_PREVIEW_CHARS).collect()
}

fn render_results_list(frame: &mut Frame, area: Rect, state: &RenderState) {
    let items: Vec<ListItem> = state
        .results
        .iter()
        .map(|record| {
            let checkbox = if state.selection.contains(record.id()) { "[x]" } else { "[ ]" };
            let profile = record.source().profile();

            let header = format!(
                "{} {} {} | {} | {}",
                checkbox,
                profile.icon,
                format_timestamp(&record.created_at()),
                profile.role_label,
                one_line(record.title(), 50)
            );
            let detail = Line::from(Span::styled(
                format!("    {}", result_detail(record)),
                Style::default().fg(MUTED).add_modifier(Modifier::DIM),
            ));

            ListItem::new(Text::from(vec![Line::from(header), detail]))
        })
        .collect();

    let title = format!(" 🔍 {}건의 관련 대화 ", state.results.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(state.focus == Focus::Results))
                .title(title),
        )
        .style(Style::default().fg(MUTED))
        .highlight_style(Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD));

    // The list scrolls to keep the highlighted row in view
    let selected = (!state.results.is_empty()).then_some(state.selected_idx);
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_preview(frame: &mut Frame, area: Rect, prompt: Option<&str>, target: AiSource) {
    let content = match prompt {
        Some(prompt) => {
            let mut lines: Vec<Line> =
                sanitize_for_terminal(prompt).lines().map(|l| Line::from(l.to_string())).collect();
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                handoff_label(target),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )));
            Text::from(lines)
        }
        None => Text::from("대화를 선택하면 프롬프트가 만들어집니다"),
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(false))
                .title(" ✨ 프롬프트 "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (status_text, style) = if let Some(message) = state.status_message {
        let fg = match message.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => ERROR,
        };
        let text = format!(" {} ", sanitize_for_terminal(&message.text));
        (text, Style::default().fg(fg).bg(BAR_BG))
    } else {
        let mut parts = vec![];

        if !state.results.is_empty() {
            parts.push(format!("entry {}/{}", state.selected_idx + 1, state.results.len()));
        }
        parts.push(format!("{} selected", state.selection.len()));
        parts.push(format!("target: {}", state.target.profile().name));
        parts.push("Tab: focus".to_string());
        parts.push("Space: select".to_string());
        parts.push("Ctrl+Y: copy".to_string());
        parts.push("Ctrl+T: target".to_string());
        parts.push("Ctrl+C: quit".to_string());

        (format!(" {} ", parts.join(" | ")), Style::default().fg(BRIGHT).bg(BAR_BG))
    };

    let paragraph = Paragraph::new(status_text).style(style);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use chrono::{TimeZone, Utc};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    use super::*;
    use crate::models::RecordParts;

    fn record(id: &str, source: AiSource, title: &str) -> ConversationRecord {
        ConversationRecord::from_parts(RecordParts {
            id: id.to_string(),
            source,
            title: title.to_string(),
            content: String::new(),
            summary: None,
            tags: vec![],
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        })
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn draw(state: &RenderState) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_ui(f, state)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn base_state<'a>(
        results: &'a [&'a ConversationRecord],
        selection: &'a Selection,
        counts: &'a [(AiSource, usize)],
    ) -> RenderState<'a> {
        RenderState {
            results,
            selected_idx: 0,
            selection,
            query: "",
            request: "",
            prompt: None,
            target: AiSource::Gemini,
            focus: Focus::Search,
            counts,
            total_count: results.len(),
            status_message: None,
        }
    }

    #[test]
    fn test_render_ui_empty() {
        let selection = Selection::new();
        let state = base_state(&[], &selection, &[]);
        let text = draw(&state);
        assert!(text.contains("Ctrl+Y"));
    }

    #[test]
    fn test_render_results_with_checkbox() {
        let first = record("1", AiSource::Claude, "alpha");
        let second = record("2", AiSource::Grok, "beta");
        let results = [&first, &second];
        let mut selection = Selection::new();
        selection.toggle("2");
        let counts = [(AiSource::Claude, 1), (AiSource::Grok, 1)];

        let mut state = base_state(&results, &selection, &counts);
        state.query = "a";
        let text = draw(&state);

        assert!(text.contains("[ ]"));
        assert!(text.contains("[x]"));
        assert!(text.contains("alpha"));
        assert!(text.contains("beta"));
        assert!(text.contains("1 selected"));
    }

    #[test]
    fn test_render_prompt_preview() {
        let selection = Selection::new();
        let mut state = base_state(&[], &selection, &[]);
        state.prompt = Some("[배경 정보]\n- 1/15: alpha\n\n[요청]\nhello");
        state.target = AiSource::Claude;

        let text = draw(&state);
        assert!(text.contains("hello"));
    }

    #[test]
    fn test_render_status_message() {
        let selection = Selection::new();
        let message = StatusMessage {
            text: "copied-ok".to_string(),
            message_type: MessageType::Success,
            expires_at: Instant::now() + Duration::from_secs(5),
        };
        let mut state = base_state(&[], &selection, &[]);
        state.status_message = Some(&message);

        let text = draw(&state);
        assert!(text.contains("copied-ok"));
        assert!(!text.contains("Ctrl+T"));
    }

    #[test]
    fn test_render_strips_escape_sequences() {
        let evil = record("1", AiSource::Claude, "safe\x1b[31mred");
        let results = [&evil];
        let selection = Selection::new();
        let state = base_state(&results, &selection, &[]);

        let text = draw(&state);
        assert!(text.contains("safered"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_render_small_terminal() {
        let backend = TestBackend::new(20, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let selection = Selection::new();
        let state = base_state(&[], &selection, &[]);

        terminal.draw(|f| render_ui(f, &state)).unwrap();
    }

    fn record_with_summary(
        id: &str,
        title: &str,
        summary: Option<&str>,
        content: &str,
    ) -> ConversationRecord {
        ConversationRecord::from_parts(RecordParts {
            id: id.to_string(),
            source: AiSource::Gemini,
            title: title.to_string(),
            content: content.to_string(),
            summary: summary.map(str::to_string),
            tags: vec![],
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        })
    }

    #[test]
    fn test_render_results_show_summary_line() {
        let with_summary =
            record_with_summary("1", "alpha", Some("first line\nsecond line..."), "ignored");
        let without_summary = record_with_summary("2", "beta", None, "raw content opening");
        let results = [&with_summary, &without_summary];
        let selection = Selection::new();
        let state = base_state(&results, &selection, &[]);

        let text = draw(&state);
        assert!(text.contains("first line second line..."));
        assert!(text.contains("raw content opening"));
        assert!(!text.contains("ignored"));
    }

    #[test]
    fn test_render_keeps_highlight_in_view() {
        let records: Vec<ConversationRecord> = (0..40)
            .map(|i| record_with_summary(&i.to_string(), &format!("item-{:02}", i), None, ""))
            .collect();
        let results: Vec<&ConversationRecord> = records.iter().collect();
        let selection = Selection::new();

        let mut state = base_state(&results, &selection, &[]);
        state.selected_idx = 39;
        let text = draw(&state);
        assert!(text.contains("item-39"), "highlighted row scrolled out of view");
        assert!(!text.contains("item-00"));

        state.selected_idx = 0;
        let text = draw(&state);
        assert!(text.contains("item-00"));
        assert!(!text.contains("item-39"));
    }

    #[test]
    fn test_render_status_message_is_sanitized() {
        let selection = Selection::new();
        let message = StatusMessage {
            text: "✗ bad\x1b]0;title\x07name.txt 처리 실패".to_string(),
            message_type: MessageType::Error,
            expires_at: Instant::now() + Duration::from_secs(5),
        };
        let mut state = base_state(&[], &selection, &[]);
        state.status_message = Some(&message);

        let text = draw(&state);
        assert!(text.contains("badname.txt"));
        assert!(!text.contains("title"));
    }
}
