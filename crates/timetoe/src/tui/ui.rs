//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use timetoe_rules::{GameState, Player, Position, Square, Status};

use super::app::{App, Focus};

const HELP: &str =
    "arrows move · enter play · 1-9 play cell · tab history · o order · r restart · q quit";

/// Renders the whole screen for `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(13),   // Board and game info
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(42), Constraint::Min(30)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_info(frame, body[1], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(focus_style(app.focus() == Focus::Board));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 38, 11);
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

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(board_area.width as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
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

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, pos);
        }
        if col < 2 {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let game = app.game();
    let highlighted = game.highlight().is_some_and(|line| line.contains(&pos));

    let (symbol, mut style) = match game.board().get(pos) {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if highlighted {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let text = vec![
        Line::from(Span::styled("     ", style)),
        Line::from(Span::styled(format!("  {symbol}  "), style)),
        Line::from(Span::styled("     ", style)),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Length(1), // Order button
            Constraint::Min(3),    // Move list
        ])
        .split(area);

    let game = app.game();
    let status = Paragraph::new(game.status().to_string())
        .style(status_style(game))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[0]);

    let button = Paragraph::new(format!("[o] {}", app.order().button_label()))
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(button, chunks[1]);

    let history_focused = app.focus() == Focus::History;
    let items: Vec<ListItem> = app
        .entries()
        .into_iter()
        .map(|entry| {
            let mut label_style = Style::default();
            if entry.is_current {
                label_style = label_style.add_modifier(Modifier::BOLD);
            }
            if history_focused && entry.step == app.selected() {
                label_style = label_style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(vec![
                Span::styled(entry.label, label_style),
                Span::raw(" "),
                Span::styled(entry.coordinates, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Moves")
            .border_style(focus_style(history_focused)),
    );
    frame.render_widget(list, chunks[2]);
}

fn status_style(game: &GameState) -> Style {
    match game.status() {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::Tie => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::MoveOrder;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_status_and_moves() {
        let mut app = App::new(MoveOrder::Ascending);
        app.play(Position::Center);

        let screen = render(&app);
        assert!(screen.contains("Next player: O"), "{screen}");
        assert!(screen.contains("Go to game start (col, row)"), "{screen}");
        assert!(screen.contains("Go to move #1 (2, 2)"), "{screen}");
        assert!(screen.contains("Order Descending"), "{screen}");
    }

    #[test]
    fn test_renders_winner_and_highlight() {
        let mut app = App::default();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::Center,
            Position::MiddleLeft,
            Position::BottomRight,
        ] {
            app.play(pos);
        }

        let screen = render(&app);
        assert!(screen.contains("Winner: X"), "{screen}");
    }

    #[test]
    fn test_current_entry_is_bold() {
        let mut app = App::default();
        app.play(Position::Center);
        app.play(Position::TopLeft);
        app.jump(1);

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        let buffer = terminal.backend().buffer();

        let width = buffer.area.width as usize;
        let bold_rows: Vec<String> = buffer
            .content()
            .chunks(width)
            .filter(|row| {
                row.iter()
                    .any(|c| c.symbol() == "G" && c.modifier.contains(Modifier::BOLD))
            })
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect();

        assert_eq!(bold_rows.len(), 1);
        assert!(bold_rows[0].contains("Go to move #1"), "{bold_rows:?}");
    }
}
