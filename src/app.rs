use crate::api::GenerateReply;
use crate::errors::ChatResult;
use crate::status_indicator::StatusIndicator;
use crate::transcript::{Sender, Transcript};
use log::{error, info};

pub const GENERATE_FALLBACK: &str =
    "Sorry, I encountered an error while processing your request.";
pub const RESET_CONFIRMATION: &str = "Conversation has been reset.";
pub const RESET_FALLBACK: &str =
    "Sorry, I encountered an error while resetting the conversation.";

/// The backend starts out loading its model; once the readiness poll
/// sees `initialized: true` we move to Ready and never go back (reset
/// does not reload the model).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    Initializing,
    Ready,
}

pub struct App {
    pub model_state: ModelState,
    pub transcript: Transcript,
    pub input: String,
    pub scroll: u16,
    pub status_indicator: StatusIndicator,
    pub pending_generations: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> App {
        App {
            model_state: ModelState::Initializing,
            transcript: Transcript::new(),
            input: String::new(),
            scroll: 0,
            status_indicator: StatusIndicator::new(),
            pending_generations: 0,
            should_quit: false,
        }
    }

    pub fn model_ready(&self) -> bool {
        self.model_state == ModelState::Ready
    }

    pub fn mark_ready(&mut self) {
        self.model_state = ModelState::Ready;
        self.status_indicator.set_ready(true);
    }

    /// Drains the input buffer into a prompt. Blank input appends
    /// nothing and issues nothing; otherwise the user message lands in
    /// the transcript before any request goes out.
    pub fn take_prompt(&mut self) -> Option<String> {
        let prompt = self.input.trim().to_string();
        if prompt.is_empty() {
            return None;
        }
        self.input.clear();
        self.transcript.append(Sender::User, prompt.clone());
        self.scroll_to_bottom();
        Some(prompt)
    }

    pub fn begin_generation(&mut self) {
        self.pending_generations += 1;
        self.status_indicator.set_busy(true);
    }

    pub fn push_bot_reply(&mut self, text: String) {
        self.pending_generations = self.pending_generations.saturating_sub(1);
        self.status_indicator.set_busy(self.pending_generations > 0);
        self.transcript.append(Sender::Bot, text);
        self.scroll_to_bottom();
    }

    pub fn apply_reset_outcome(&mut self, ok: bool) {
        if ok {
            self.transcript.clear();
            self.transcript.append(Sender::Bot, RESET_CONFIRMATION);
        } else {
            self.transcript.append(Sender::Bot, RESET_FALLBACK);
        }
        self.scroll_to_bottom();
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    // The draw pass clamps this to the real maximum.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll = u16::MAX;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps the outcome of a generate call to the text of the bot message
/// that gets appended. An `error` field in the reply shows up inline;
/// a transport or parse failure becomes the fixed fallback line.
pub fn reply_text(result: ChatResult<GenerateReply>) -> String {
    match result {
        Ok(GenerateReply::Completed {
            response,
            generation_time,
        }) => {
            info!("generation took {:.2}s", generation_time);
            response
        }
        Ok(GenerateReply::Refused { error }) => format!("Error: {}", error),
        Err(e) => {
            error!("generate call failed: {}", e);
            GENERATE_FALLBACK.to_string()
        }
    }
}
