use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// The one-line readiness/activity indicator above the input. Mirrors
/// the backend state: "Model Initializing..." while the readiness poll
/// is still running, "Model Ready" once sending is enabled.
#[derive(Debug)]
pub struct StatusIndicator {
    ready: bool,
    busy: bool,
    spinner_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self {
            ready: false,
            busy: false,
            spinner_idx: 0,
        }
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn update_spinner(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let spinner_frames = ["◐", "◓", "◑", "◒"];
        let spinner = if !self.ready || self.busy {
            spinner_frames[self.spinner_idx % spinner_frames.len()]
        } else {
            " "
        };

        let (status_text, status_color) = if self.ready {
            ("Model Ready", Color::Green)
        } else {
            ("Model Initializing...", Color::Yellow)
        };

        let status = Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled(status_text, Style::default().fg(status_color)),
        ]);

        frame.render_widget(
            Paragraph::new(status).alignment(ratatui::layout::Alignment::Left),
            Rect {
                x: area.x,
                y: area.y + 1,
                width: area.width,
                height: 1,
            },
        );
    }
}

impl Default for StatusIndicator {
    fn default() -> Self {
        Self::new()
    }
}
