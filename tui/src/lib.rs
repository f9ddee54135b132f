//! TUI rendering for Periodle using ratatui.

mod input;
mod theme;

pub use input::{handle_events, handle_key};
pub use theme::{ASCII_BORDER, Glyphs, Palette, framed, glyphs, palette, styles};

use std::borrow::Cow;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use periodle_engine::{App, NoticeKind, TranscriptEntry, sanitize_display_text};

const TITLE: &str = "GUESS THE ELEMENT";
const SUBTITLE: &str = "Identify the hidden element from its clues.";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(1), // Attempts
            Constraint::Length(3), // Input
            Constraint::Length(1), // Hint
            Constraint::Min(1),    // Transcript
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], &palette);
    draw_attempts(frame, app, chunks[1], &palette, &glyphs);
    draw_input(frame, app, chunks[2], &palette, &glyphs);
    draw_hint(frame, app, chunks[3], &palette);
    draw_transcript(frame, app, chunks[4], &palette, &glyphs);
    draw_key_help(frame, chunks[5], &palette, &glyphs);

    if app.notice().is_some() {
        draw_notice(frame, app, &palette);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, palette: &Palette) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(TITLE, styles::title(palette))),
        Line::from(Span::styled(
            SUBTITLE,
            Style::default().fg(palette.text_secondary),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_attempts(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let status = app.status();
    let gauge: String = (0..status.max_attempts)
        .map(|i| {
            if i < status.attempts {
                glyphs.attempt_used
            } else {
                glyphs.attempt_left
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let gauge_color = if status.won {
        palette.success
    } else if status.game_over {
        palette.error
    } else {
        palette.warning
    };

    let line = Line::from(vec![
        Span::styled(
            app.attempts_label(),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(gauge, Style::default().fg(gauge_color)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let accepting = app.accepts_guesses();
    let (title, border_color) = if accepting {
        (" Guess ", palette.accent)
    } else {
        (" Round over: Ctrl+R for a new one ", palette.text_muted)
    };

    let prefix = format!("{} ", glyphs.prompt);
    let draft = app.draft();
    let content_width = area.width.saturating_sub(2 + prefix.width() as u16) as usize;
    let visible = tail_fitting(draft, content_width.saturating_sub(1));
    let typed = visible.width() as u16;

    let input = Paragraph::new(Line::from(vec![
        Span::styled(prefix.clone(), Style::default().fg(palette.accent)),
        Span::styled(visible, Style::default().fg(palette.text_primary)),
    ]))
    .block(
        framed(app.ui_options(), BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(palette.bg_card))
            .title_top(Line::from(Span::styled(
                title,
                Style::default()
                    .fg(border_color)
                    .add_modifier(Modifier::BOLD),
            ))),
    );
    frame.render_widget(input, area);

    if app.notice().is_none() {
        let cursor_x = area
            .x
            .saturating_add(1 + prefix.width() as u16)
            .saturating_add(typed);
        frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
    }
}

fn draw_hint(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hint = app.hint_line();
    let line = Line::from(Span::styled(
        sanitize_display_text(&hint.text).into_owned(),
        Style::default()
            .fg(palette.tone(hint.tone))
            .add_modifier(Modifier::ITALIC),
    ));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_transcript(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let lines: Vec<Line> = app
        .transcript()
        .iter()
        .map(|entry| transcript_line(entry, palette, glyphs))
        .collect();

    let inner_width = area.width.saturating_sub(4);
    let inner_height = area.height.saturating_sub(2);
    let total = wrapped_line_count(&lines, inner_width);
    let scroll = total.saturating_sub(inner_height);

    let log = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            framed(app.ui_options(), BorderType::Rounded)
                .border_style(Style::default().fg(palette.bg_border))
                .style(Style::default().bg(palette.bg_card))
                .padding(Padding::horizontal(1))
                .title(Span::styled(
                    " Log ",
                    Style::default().fg(palette.text_secondary),
                )),
        );
    frame.render_widget(log, area);
}

fn transcript_line<'a>(entry: &'a TranscriptEntry, palette: &Palette, glyphs: &Glyphs) -> Line<'a> {
    match entry {
        TranscriptEntry::Banner { .. } => Line::from(Span::styled(
            entry.to_string(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        TranscriptEntry::Divider => Line::from(Span::styled(
            entry.to_string(),
            Style::default().fg(palette.bg_border),
        )),
        TranscriptEntry::Guess { result, hit, .. } => {
            let (marker, color) = if *hit {
                (glyphs.hit, palette.success)
            } else {
                (glyphs.miss, palette.error)
            };
            Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(color)),
                Span::styled(
                    clean(entry.label()),
                    Style::default().fg(palette.text_primary),
                ),
                Span::styled(clean(result.clone()), Style::default().fg(color)),
            ])
        }
        TranscriptEntry::Note(text) => Line::from(vec![
            Span::styled(format!("{} ", glyphs.note), Style::default().fg(palette.text_muted)),
            Span::styled(
                sanitize_display_text(text),
                Style::default().fg(palette.text_secondary),
            ),
        ]),
    }
}

fn draw_key_help(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let keys = [
        ("Enter", "guess"),
        ("Esc", "clear"),
        ("Ctrl+R", "new round"),
        ("/help", "commands"),
        ("Ctrl+C", "quit"),
    ];

    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, action)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                format!(" {} ", glyphs.separator),
                styles::key_hint(palette),
            ));
        }
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn draw_notice(frame: &mut Frame, app: &App, palette: &Palette) {
    let Some(notice) = app.notice() else {
        return;
    };
    let area = frame.area();

    let color = match notice.kind {
        NoticeKind::Victory => palette.success,
        NoticeKind::GameOver | NoticeKind::Error => palette.error,
    };

    let body = sanitize_multiline(&notice.body);
    let body_width = body.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
    let width = (body_width + 6)
        .max(30)
        .min(area.width.saturating_sub(4))
        .max(1);
    let height = (body.len() as u16 + 6).min(area.height).max(1);

    let popup = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.extend(body.into_iter().map(|text| {
        Line::from(Span::styled(text, Style::default().fg(palette.text_primary)))
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to continue",
        styles::key_hint(palette),
    )));

    let modal = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            framed(app.ui_options(), BorderType::Double)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(palette.bg_card))
                .title(Line::from(Span::styled(
                    format!(" {} ", sanitize_display_text(&notice.title)),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )))
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(modal, popup);
}

/// Sanitize each line separately so the line breaks survive.
fn sanitize_multiline(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| sanitize_display_text(line).into_owned())
        .collect()
}

fn clean(text: String) -> String {
    match sanitize_display_text(&text) {
        Cow::Borrowed(_) => text,
        Cow::Owned(owned) => owned,
    }
}

/// The longest suffix of `text` no wider than `max` columns.
fn tail_fitting(text: &str, max: usize) -> &str {
    if text.width() <= max {
        return text;
    }
    let mut start = text.len();
    let mut width = 0;
    for (idx, c) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > max {
            break;
        }
        width += w;
        start = idx;
    }
    &text[start..]
}

fn wrapped_line_count(lines: &[Line], width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut total: u16 = 0;

    for line in lines {
        let line_width = line.width();
        let rows = if line_width == 0 {
            1
        } else {
            ((line_width - 1) / width) + 1
        };
        total = total.saturating_add(rows as u16);
    }

    total
}
