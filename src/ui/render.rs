use crate::engine::ScoreBand;
use crate::game::Attempt;
use crate::ui::theme::colors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph, Wrap},
};

fn base_style() -> Style {
    Style::default().fg(colors::text()).bg(colors::background())
}

pub fn render_title(title: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(colors::accent())
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(base_style())
}

pub fn render_prompt(prompt: Option<&str>, word_hint: Option<&str>) -> Paragraph<'static> {
    let mut lines = Vec::new();
    if let Some(prompt) = prompt {
        lines.push(Line::from(prompt.to_string()));
    }
    if let Some(hint) = word_hint {
        lines.push(Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(colors::dimmed()),
        )));
    }

    Paragraph::new(lines)
        .block(Block::bordered().title(" Prompt "))
        .wrap(Wrap { trim: true })
        .style(base_style())
}

pub fn attempt_line(number: usize, attempt: &Attempt) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}. ", number), Style::default().fg(colors::dimmed())),
        Span::raw(attempt.guess.clone()),
        Span::raw("  "),
        Span::styled(
            format!("{}%", attempt.score),
            Style::default()
                .fg(colors::score(attempt.score))
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

pub fn render_attempts(attempts: &[Attempt], attempts_left: usize) -> Paragraph<'static> {
    let mut lines: Vec<Line<'static>> = attempts
        .iter()
        .enumerate()
        .map(|(i, attempt)| attempt_line(i + 1, attempt))
        .collect();

    if attempts_left > 0 {
        let plural = if attempts_left == 1 { "" } else { "s" };
        lines.push(Line::from(Span::styled(
            format!("{} attempt{} left", attempts_left, plural),
            Style::default().fg(colors::dimmed()),
        )));
    }

    Paragraph::new(lines)
        .block(Block::bordered().title(" Attempts "))
        .style(base_style())
}

pub fn render_best_score(best: Option<u8>) -> Gauge<'static> {
    let score = best.unwrap_or(0);
    let label = match best {
        Some(score) => format!("Best {}% - {}", score, ScoreBand::from_score(score).message()),
        None => "No guesses yet".to_string(),
    };

    Gauge::default()
        .gauge_style(Style::default().fg(colors::score(score)).bg(colors::background()))
        .percent(u16::from(score))
        .label(label)
}

pub fn render_reference(reference: Option<&str>) -> Paragraph<'static> {
    let text = match reference {
        Some(reference) => Line::from(Span::styled(
            format!("\"{}\"", reference),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        None => Line::from(Span::styled(
            "Hidden until the round ends",
            Style::default().fg(colors::dimmed()),
        )),
    };

    Paragraph::new(text)
        .block(Block::bordered().title(" Response "))
        .wrap(Wrap { trim: true })
        .style(base_style())
}

pub fn render_input(input: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(colors::accent())),
        Span::raw(input.to_string()),
    ]))
    .block(Block::bordered().title(" Guess "))
    .style(base_style())
}

pub fn render_message(message: Option<&str>) -> Paragraph<'static> {
    Paragraph::new(message.unwrap_or_default().to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}
