use crate::transcript::{Message, Sender};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

/// Renders one transcript message as a bordered block of lines: a
/// header with the timestamp, the wrapped body, and a closing foot.
/// User messages are indented and warm-tinted, bot messages sit flush
/// left in green.
pub fn render_message(message: &Message, area: Rect) -> Vec<Line<'static>> {
    let style = base_style(message.sender);
    let indent = indent_for(message.sender);
    let mut lines = Vec::new();

    let timestamp = message.timestamp.format("%H:%M").to_string();
    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("┌─".to_string(), style),
        Span::styled(timestamp, style.add_modifier(Modifier::DIM)),
    ]));

    let wrap_width = (area.width as usize).saturating_sub(4).max(1);
    for content_line in message.content.lines() {
        if content_line.is_empty() {
            lines.push(body_line(String::new(), indent, style));
            continue;
        }
        for wrapped in wrap(content_line, wrap_width) {
            lines.push(body_line(wrapped.to_string(), indent, style));
        }
    }

    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("╰─".to_string(), style),
    ]));

    lines
}

fn body_line(text: String, indent: &str, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("│ ".to_string(), style),
        Span::styled(text, style),
    ])
}

fn base_style(sender: Sender) -> Style {
    Style::default().fg(match sender {
        Sender::User => Color::Rgb(255, 223, 128),
        Sender::Bot => Color::Rgb(144, 238, 144),
    })
}

fn indent_for(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "  ",
        Sender::Bot => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_wraps_long_content() {
        let message = Message::new(Sender::Bot, "word ".repeat(40));
        let area = Rect::new(0, 0, 24, 10);

        let lines = render_message(&message, area);
        // header + at least two wrapped body lines + footer
        assert!(lines.len() >= 4);
    }

    #[test]
    fn test_render_keeps_explicit_line_breaks() {
        let message = Message::new(Sender::User, "one\ntwo");
        let area = Rect::new(0, 0, 60, 10);

        let lines = render_message(&message, area);
        assert_eq!(lines.len(), 4); // header, two body lines, footer
    }
}
