//! TUI application state and event handling.
//!
//! `App` owns the conversation store for the session together with everything the
//! dashboard needs to build a prompt:
//!
//! - **Search**: matching store positions are cached and only recomputed when the query
//!   changes; idle redraws reuse them and keep upload order
//! - **Selection**: checked conversations, in the order they were checked
//! - **Request**: free text placed under the request header of the prompt
//! - **Target**: the AI the prompt is meant for, cycled with Ctrl+T
//! - **Status messages**: transient feedback for uploads and clipboard operations
//!
//! # Example
//!
//! ```rust,ignore
//! let mut app = App::from_batch(ingest_paths(&files), &AppConfig::default());
//! app.run(&mut terminal)?;
//! ```

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_prompt;
use crate::config::AppConfig;
use crate::models::{AiSource, ConversationRecord};
use crate::parsers::BatchOutcome;
use crate::prompt::{Selection, compose};
use crate::search::{MAX_QUERY_CHARS, search_positions};
use crate::store::ConversationStore;

/// Longest request text accepted from the keyboard
const MAX_REQUEST_CHARS: usize = 2000;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Widget that receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Results,
    Request,
}

impl Focus {
    fn next(self) -> Focus {
        match self {
            Focus::Search => Focus::Results,
            Focus::Results => Focus::Request,
            Focus::Request => Focus::Search,
        }
    }
}

/// Status line for a finished upload batch: failures win over the success summary
fn upload_status(outcome: &BatchOutcome) -> Option<(String, MessageType)> {
    let summary = outcome.summary_status();
    if outcome.failures.is_empty() {
        return summary.map(|text| (format!("✓ {}", text), MessageType::Success));
    }

    let failed: Vec<String> =
        outcome.failures.iter().map(|failure| format!("{} 처리 실패", failure.file)).collect();
    let mut text = format!("✗ {}", failed.join(", "));
    if let Some(summary) = summary {
        text.push_str(" | ");
        text.push_str(&summary);
    }
    Some((text, MessageType::Error))
}

pub struct App {
    store: ConversationStore,
    query: String,
    request: String,
    selection: Selection,
    target: AiSource,
    focus: Focus,
    selected_idx: usize,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    status_success_ms: u64,
    status_error_ms: u64,
    // Derived from store + query/selection/request; refreshed only when those change
    result_positions: Vec<usize>,
    prompt: Option<String>,
    counts: Vec<(AiSource, usize)>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(store: ConversationStore, config: &AppConfig) -> Self {
        let counts =
            AiSource::ALL.iter().map(|&source| (source, store.count_by_source(source))).collect();

        Self {
            store,
            query: String::new(),
            request: String::new(),
            selection: Selection::new(),
            target: config.default_target,
            focus: Focus::Search,
            selected_idx: 0,
            should_quit: false,
            status_message: None,
            status_success_ms: config.status_success_ms,
            status_error_ms: config.status_error_ms,
            result_positions: Vec::new(),
            prompt: None,
            counts,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    /// Build the dashboard from an upload batch, announcing its outcome in the status bar
    pub fn from_batch(outcome: BatchOutcome, config: &AppConfig) -> Self {
        let status = upload_status(&outcome);

        let mut store = ConversationStore::new();
        store.append(outcome.records);
        let mut app = Self::new(store, config);

        if let Some((text, message_type)) = status {
            app.set_status(text, message_type);
        }
        app
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType) {
        let duration_ms = match message_type {
            MessageType::Success => self.status_success_ms,
            MessageType::Error => self.status_error_ms,
        };
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                let results = self.results();
                terminal.draw(|f| {
                    let state = RenderState {
                        results: &results,
                        selected_idx: self.selected_idx,
                        selection: &self.selection,
                        query: &self.query,
                        request: &self.request,
                        prompt: self.prompt.as_deref(),
                        target: self.target,
                        focus: self.focus,
                        counts: &self.counts,
                        total_count: self.store.len(),
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Current search results, in store order
    fn results(&self) -> Vec<&ConversationRecord> {
        let records = self.store.records();
        self.result_positions.iter().filter_map(|&idx| records.get(idx)).collect()
    }

    /// Re-run the search for the current query, then the prompt that depends on it
    fn refresh_results(&mut self) {
        self.result_positions = search_positions(&self.store, &self.query);
        self.selected_idx = 0; // Reset highlight on search change
        self.refresh_prompt();
    }

    /// Rebuild the prompt from the checked results, if any are checked
    fn refresh_prompt(&mut self) {
        let prompt = compose(&self.selection.resolve(&self.results()), &self.request);
        self.prompt = prompt;
        self.needs_redraw = true;
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        let total_items = self.result_positions.len();
        match action {
            Action::Quit => self.should_quit = true,
            Action::Escape => self.escape(),
            Action::MoveUp => self.move_selection(-1, total_items),
            Action::MoveDown => self.move_selection(1, total_items),
            Action::PageUp => self.move_selection(-10, total_items),
            Action::PageDown => self.move_selection(10, total_items),
            Action::Confirm => match self.focus {
                Focus::Search => self.set_focus(Focus::Results),
                Focus::Results => self.toggle_highlighted(),
                Focus::Request => self.copy_composed_prompt(),
            },
            Action::CopyPrompt => self.copy_composed_prompt(),
            Action::CycleTarget => {
                self.target = self.target.next();
                self.needs_redraw = true;
            }
            Action::ClearSelection => {
                if !self.selection.is_empty() {
                    self.selection.clear();
                    self.refresh_prompt();
                }
            }
            Action::ToggleFocus => self.set_focus(self.focus.next()),
            Action::Input(c) => self.input_char(c),
            Action::DeleteChar => self.delete_char(),
            Action::None => {}
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.needs_redraw = true;
        }
    }

    /// Clear the focused input; quit when there is nothing left to clear
    fn escape(&mut self) {
        match self.focus {
            Focus::Search | Focus::Results if self.query.is_empty() => self.should_quit = true,
            Focus::Request if self.request.is_empty() => self.should_quit = true,
            Focus::Search | Focus::Results => {
                self.query.clear();
                self.refresh_results();
            }
            Focus::Request => {
                self.request.clear();
                self.refresh_prompt();
            }
        }
    }

    fn move_selection(&mut self, delta: isize, total: usize) {
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    /// Check or uncheck the highlighted result
    fn toggle_highlighted(&mut self) {
        let id = match self.results().get(self.selected_idx) {
            Some(record) => record.id().to_string(),
            None => return,
        };
        self.selection.toggle(&id);
        self.refresh_prompt();
    }

    fn copy_composed_prompt(&mut self) {
        let Some(prompt) = self.prompt.clone() else {
            self.set_status("✗ 선택된 대화가 없습니다", MessageType::Error);
            return;
        };

        match copy_prompt(&prompt) {
            Ok(()) => self.set_status("✓ 프롬프트가 복사되었습니다!", MessageType::Success),
            Err(e) => self.set_status(format!("✗ Clipboard error: {}", e), MessageType::Error),
        }
    }

    fn input_char(&mut self, c: char) {
        match self.focus {
            Focus::Results if c == ' ' => self.toggle_highlighted(),
            Focus::Search | Focus::Results => {
                if self.query.chars().count() < MAX_QUERY_CHARS {
                    self.query.push(c);
                    self.focus = Focus::Search;
                    self.refresh_results();
                }
            }
            Focus::Request => {
                if self.request.chars().count() < MAX_REQUEST_CHARS {
                    self.request.push(c);
                    self.refresh_prompt();
                }
            }
        }
    }

    fn delete_char(&mut self) {
        match self.focus {
            Focus::Search | Focus::Results => {
                if self.query.pop().is_some() {
                    self.refresh_results();
                }
            }
            Focus::Request => {
                if self.request.pop().is_some() {
                    self.refresh_prompt();
                }
            }
        }
    }
}
