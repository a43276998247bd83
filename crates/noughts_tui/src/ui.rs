//! Stateless UI rendering for tic-tac-toe.

use crate::alerts::OutcomeAlert;
use crate::app::App;
use noughts::{Player as Mark, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    if let Some(alert) = app.alert() {
        draw_alert(frame, area, alert);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, start) in [(0, 0), (2, 3), (4, 6)] {
        draw_row(frame, rows[row], app, start);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (offset, col) in [0, 2, 4].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(start + offset) {
            draw_square(frame, cols[col], app, pos);
        }
    }
    draw_vertical_sep(frame, cols[1]);
    draw_vertical_sep(frame, cols[3]);
}

fn draw_square(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (text, mut style) = match app.board().get(pos) {
        None => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Some(mv) => {
            let color = match mv.player() {
                Mark::Human => Color::Blue,
                Mark::Computer => Color::Red,
            };
            (
                mv.player().mark().to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };

    if pos == app.cursor() && app.board_enabled() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Pad vertically so the mark sits in the middle of the 3-line cell.
    let lines = vec![Line::default(), Line::from(Span::styled(text, style))];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn draw_alert(frame: &mut Frame, area: Rect, alert: OutcomeAlert) {
    let popup = center_rect(area, 50, 8);
    let text = vec![
        Line::from(alert.message),
        Line::default(),
        Line::from(Span::styled(
            format!("[ {} ]", alert.button),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(alert.title)
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::GameEvent;
    use noughts::{Board, GameOutcome, Move};
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_marks_and_numbers() {
        let mut app = App::new();
        let board = Board::new()
            .apply(Move::new(Mark::Computer, Position::Center))
            .unwrap();
        app.handle_event(GameEvent::MoveMade {
            mv: Move::new(Mark::Computer, Position::Center),
            board,
        });
        let screen = rendered(&app);
        assert!(screen.contains('O'));
        assert!(screen.contains('1'));
        assert!(screen.contains('9'));
    }

    #[test]
    fn test_renders_alert_on_game_over() {
        let mut app = App::new();
        app.handle_event(GameEvent::GameOver { outcome: GameOutcome::HumanWin });
        let screen = rendered(&app);
        assert!(screen.contains("You Win!"));
        assert!(screen.contains("Hell yeah"));
    }
}
