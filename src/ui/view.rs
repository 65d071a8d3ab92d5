//! Frame composition: passage panel, typing panel with the typed-prefix
//! highlight, controls line and the footer (status or command deck).

use crate::app::{AppMode, RenderState};
use crate::speech::PlaybackState;
use crate::ui::theme::colors;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;

const HINT_LINE: &str =
    "Tab panel | Ctrl-P play/pause | Ctrl-S sync | Ctrl-Up/Down volume | Ctrl-Left/Right rate | Esc deck";

pub fn draw(frame: &mut Frame, state: &RenderState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(render_passage(state), chunks[0]);
    frame.render_widget(render_typing(state), chunks[1]);
    frame.render_widget(render_controls(state), chunks[2]);
    frame.render_widget(render_footer(state), chunks[3]);
}

fn panel_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(colors::accent())
    } else {
        Style::default().fg(colors::dimmed())
    };
    Block::bordered().title(title).border_style(border)
}

pub fn render_passage(state: &RenderState) -> Paragraph<'static> {
    Paragraph::new(state.text.clone())
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(colors::text()).bg(colors::background()))
        .block(panel_block(" Passage ", state.mode == AppMode::Edit))
}

pub fn render_typing(state: &RenderState) -> Paragraph<'static> {
    let lines = typed_highlight_lines(&state.text, state.typed_len);
    Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(colors::background()))
        .block(panel_block(" Retype ", state.mode == AppMode::Type))
}

/// Style the first `typed_len` characters of the passage as already
/// typed. Graphemes stay whole: a cluster is highlighted once the typed
/// character count has reached it.
pub fn typed_highlight_lines(text: &str, typed_len: usize) -> Vec<Line<'static>> {
    let typed_style = Style::default()
        .fg(colors::background())
        .bg(colors::highlight());
    let plain_style = Style::default().fg(colors::text());

    let mut lines = Vec::new();
    let mut spans: Vec<Span> = Vec::new();
    let mut consumed = 0usize;

    for grapheme in text.graphemes(true) {
        if grapheme == "\n" || grapheme == "\r\n" {
            consumed += grapheme.chars().count();
            lines.push(Line::from(std::mem::take(&mut spans)));
            continue;
        }

        let style = if consumed < typed_len {
            typed_style
        } else {
            plain_style
        };
        spans.push(Span::styled(grapheme.to_string(), style));
        consumed += grapheme.chars().count();
    }

    lines.push(Line::from(spans));
    lines
}

pub fn render_controls(state: &RenderState) -> Line<'static> {
    let accent = Style::default()
        .fg(colors::accent())
        .add_modifier(Modifier::BOLD);
    let text = Style::default().fg(colors::text());
    let dimmed = Style::default().fg(colors::dimmed());

    let mut spans = Vec::new();

    match state.playback {
        PlaybackState::Speaking => spans.push(Span::styled(" ⏸ Pause ", accent)),
        PlaybackState::Idle => spans.push(Span::styled(" ▶ Play  ", text)),
    }

    spans.push(Span::styled("│ vol ", dimmed));
    let filled = (state.volume * 10.0).round() as usize;
    for i in 0..10 {
        let style = if i < filled { text } else { dimmed };
        spans.push(Span::styled("─", style));
    }

    spans.push(Span::styled(
        format!(" │ rate {:.2}x ", state.rate),
        text,
    ));

    if state.sync_enabled {
        spans.push(Span::styled("│ sync on ", accent));
    } else {
        spans.push(Span::styled("│ sync off ", dimmed));
    }

    Line::from(spans)
}

pub fn render_footer(state: &RenderState) -> Line<'static> {
    if state.mode == AppMode::Command {
        return Line::from(vec![
            Span::styled(" :", Style::default().fg(colors::accent())),
            Span::styled(
                state.command_line.clone(),
                Style::default().fg(colors::text()),
            ),
        ]);
    }

    match &state.status {
        Some(status) => Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(colors::text()),
        )),
        None => Line::from(Span::styled(
            format!(" {HINT_LINE}"),
            Style::default().fg(colors::dimmed()),
        )),
    }
}
