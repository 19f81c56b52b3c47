//! UI rendering for the terminal front end.

use crate::App;
use phosphor_core::{ElementId, ElementKind};
use phosphor_narrative::{RenderInstruction, RenderMode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const PHOSPHOR: Color = Color::Green;
const PHOSPHOR_DIM: Color = Color::DarkGray;
const LINK: Color = Color::LightGreen;

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Screen
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    draw_screen(f, app, chunks[0]);
    draw_status_bar(f, app, chunks[1]);

    if app.narrative().state().dialog_open() {
        draw_dialog(f, app, chunks[0]);
    }
}

/// Draw the active screen, one row per revealed element.
#[tracing::instrument(skip_all)]
fn draw_screen(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PHOSPHOR_DIM))
        .title(
            app.narrative()
                .state()
                .active_screen()
                .clone()
                .unwrap_or_default(),
        );
    let inner = block.inner(area);
    f.render_widget(block, area);

    let visible: Vec<(ElementId, Line)> = {
        let view: &App = app;
        view.plan()
            .iter()
            .filter(|i| i.is_visible())
            .map(|i| (i.element(), element_line(view, i)))
            .collect()
    };

    // Keep the newest lines on screen
    let skip = visible.len().saturating_sub(inner.height as usize);
    let (rows, lines): (Vec<_>, Vec<_>) = visible
        .into_iter()
        .skip(skip)
        .enumerate()
        .map(|(offset, (element, line))| ((inner.y + offset as u16, element), line))
        .unzip();

    app.set_hit_rows(rows);
    f.render_widget(Paragraph::new(lines), inner);
}

/// Line for one element in its current render mode.
fn element_line(app: &App, instruction: &RenderInstruction) -> Line<'static> {
    let base = class_style(instruction.class_name().as_deref());
    let focused = app.focus() == Some(instruction.element());

    if let RenderMode::Reveal { .. } = instruction.mode() {
        let frame = app
            .reveal_frame(instruction.element())
            .unwrap_or_default();
        return Line::from(Span::styled(frame, base));
    }

    let text = instruction.payload().display_text().to_string();
    let disabled = matches!(instruction.mode(), RenderMode::Static { disabled: true });
    match instruction.kind() {
        ElementKind::Link => {
            let mut style = base.fg(LINK).add_modifier(Modifier::UNDERLINED);
            if focused {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(Span::styled(text, style))
        }
        ElementKind::Toggle => {
            let mut style = base.add_modifier(Modifier::BOLD);
            if focused {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(Span::styled(text, style))
        }
        ElementKind::Prompt => {
            let style = if disabled {
                base.fg(PHOSPHOR_DIM)
            } else {
                base
            };
            let mut spans = vec![
                Span::styled(text, style),
                Span::styled(app.input().to_string(), style),
            ];
            if focused && !disabled {
                spans.push(Span::styled("█", base.add_modifier(Modifier::SLOW_BLINK)));
            }
            Line::from(spans)
        }
        ElementKind::Text | ElementKind::Bitmap => Line::from(Span::styled(text, base)),
    }
}

/// Style for an authored class name.
fn class_style(class_name: Option<&str>) -> Style {
    let style = Style::default().fg(PHOSPHOR);
    match class_name {
        Some("bold") => style.add_modifier(Modifier::BOLD),
        Some("dim") => style.fg(PHOSPHOR_DIM),
        Some("blink") => style.add_modifier(Modifier::SLOW_BLINK),
        Some("error") | Some("alert") => style.fg(Color::Red),
        Some("highlight") => style.fg(Color::Yellow),
        _ => style,
    }
}

/// Draw the dialog overlay centred on the screen.
#[tracing::instrument(skip_all)]
fn draw_dialog(f: &mut Frame, app: &App, area: Rect) {
    let Some(dialog) = app.narrative().state().current_dialog() else {
        return;
    };

    let width = dialog
        .lines()
        .iter()
        .map(|l| l.chars().count() as u16)
        .max()
        .unwrap_or(0)
        .clamp(20, area.width.saturating_sub(4).max(20))
        + 4;
    let height = dialog.lines().len() as u16 + 4;
    let popup = centered(area, width, height);

    let mut lines: Vec<Line> = dialog.lines().iter().map(|l| Line::from(l.clone())).collect();
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            "[Enter] close",
            Style::default().fg(PHOSPHOR_DIM),
        ))
        .alignment(Alignment::Center),
    );

    let body = Paragraph::new(lines)
        .style(Style::default().fg(PHOSPHOR))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PHOSPHOR))
                .title(format!(" {} ", dialog.kind())),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup);
    f.render_widget(body, popup);
}

/// Draw the status bar with help text.
#[tracing::instrument(skip_all)]
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help = if app.narrative().state().dialog_open() {
        "Enter/Esc: Close"
    } else {
        "Tab: Focus | Enter: Activate | Shift+Enter: Unlock | Esc: Quit"
    };
    let status = format!("{} | {}", app.narrative().state().status(), help);
    f.render_widget(
        Paragraph::new(status).style(Style::default().fg(PHOSPHOR_DIM)),
        area,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
