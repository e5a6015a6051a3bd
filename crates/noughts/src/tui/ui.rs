//! Stateless UI rendering for the board, scoreboard and round-over modal.

use noughts_core::{Board, Cell, Outcome, Position, RoundPhase, ScoreLedger, Side};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::App;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let controller = app.controller();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Scoreboard
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(format!(
        "Noughts - {} opponent",
        controller.difficulty().label()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_scoreboard(frame, chunks[1], controller.ledger());
    draw_board(frame, chunks[2], controller.board(), app.cursor());

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new("r: restart round  s: reset scores  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    if let RoundPhase::RoundOver(outcome) = controller.phase() {
        draw_round_over(frame, area, outcome);
    }
}

/// One-line scoreboard text.
pub fn scoreboard_line(ledger: &ScoreLedger) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("You {}", ledger.player_wins()),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Opponent {}", ledger.opponent_wins()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(format!("Draws {}", ledger.draws()), Style::default().fg(Color::Gray)),
    ])
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, ledger: &ScoreLedger) {
    let paragraph = Paragraph::new(scoreboard_line(ledger))
        .alignment(Alignment::Center)
        .block(Block::default().title("Score").borders(Borders::ALL));
    frame.render_widget(paragraph, center_rect(area, 44, area.height));
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
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

    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, row_area, board, cursor, r);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (c, col_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(row * 3 + c) {
            draw_cell(frame, col_area, board, cursor, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, pos: Position) {
    let (symbol, base_style) = match board.get(pos) {
        Cell::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(side) => (
            format!(" {} ", side.symbol()),
            Style::default().fg(side_color(side)).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the symbol in the 3-line cell.
    let text = vec![Line::raw(""), Line::from(Span::styled(symbol, style))];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn side_color(side: Side) -> Color {
    match side {
        Side::Player => Color::Blue,
        Side::Opponent => Color::Red,
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_round_over(frame: &mut Frame, area: Rect, outcome: Outcome) {
    let popup = center_rect(area, 36, 7);
    let color = outcome.winner().map(side_color).unwrap_or(Color::Yellow);

    let text = vec![
        Line::raw(""),
        Line::from(Span::styled(
            outcome.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from("n / Enter: next round"),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().title("Round over").borders(Borders::ALL)),
        popup,
    );
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
