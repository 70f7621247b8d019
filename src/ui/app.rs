//! Frame rendering
//!
//! Draws the map, item guide, status line, key legend, message log and any
//! pending prompt. Rendering never touches game state.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::guide::guide_for;
use crate::game::{Game, MessageCategory, Prompt};

const GUIDE_WIDTH: u16 = 26;
const STATUS_HEIGHT: u16 = 6;
const MESSAGES_HEIGHT: u16 = 8;

pub const KEY_LEGEND: &str =
    "Keys: [WASD/Arrows] Move | [E] Interact | [P] Pick Up | [H] Hit | [T] Talk/Trade | [O] Open | [Q] Quit";

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Draw a full frame
pub fn render(frame: &mut Frame, game: &Game) {
    let area = frame.area();

    // Guide panel on the right
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(24), Constraint::Length(GUIDE_WIDTH)])
        .split(area);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Length(MESSAGES_HEIGHT),
        ])
        .split(chunks[0]);

    render_map(frame, game, left_chunks[0]);
    render_status(frame, game, left_chunks[1]);
    render_messages(frame, game, left_chunks[2]);
    render_guide(frame, game, chunks[1]);

    if let Some(prompt) = game.prompt() {
        render_prompt(frame, prompt, area);
    }
}

fn render_map(frame: &mut Frame, game: &Game, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Adventure Map ")
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Calculate viewport
    let grid = game.grid();
    let player = game.player();
    let view_width = (inner.width as i32).min(grid.width());
    let view_height = (inner.height as i32).min(grid.height());
    let cam_x = camera_origin(player.x, view_width, grid.width());
    let cam_y = camera_origin(player.y, view_height, grid.height());

    let player_style = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = (cam_y..cam_y + view_height)
        .map(|map_y| {
            let spans: Vec<Span> = (cam_x..cam_x + view_width)
                .map(|map_x| {
                    if (map_x, map_y) == player.position() {
                        return Span::styled("@", player_style);
                    }
                    let cell = grid.get(map_x, map_y).unwrap_or_default();
                    Span::styled(
                        cell.glyph().to_string(),
                        Style::default().fg(rgb(cell.fg_color())),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// First visible map coordinate on one axis: the player centred, clamped so
/// the view never runs past either edge of the map
fn camera_origin(player: i32, view: i32, map: i32) -> i32 {
    (player - view / 2).clamp(0, (map - view).max(0))
}

fn render_status(frame: &mut Frame, game: &Game, area: Rect) {
    let player = game.player();
    let hp_color = if player.hp * 3 <= player.max_hp {
        Color::Red
    } else if player.hp * 3 <= player.max_hp * 2 {
        Color::Yellow
    } else {
        Color::Green
    };

    let inventory = if player.inventory.is_empty() {
        "(empty)".to_string()
    } else {
        player.inventory_names().join(", ")
    };

    let lines = vec![
        Line::from(vec![
            Span::raw(format!("Player: {} | ", player.name)),
            Span::styled(
                format!("HP: {}/{}", player.hp, player.max_hp),
                Style::default().fg(hp_color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " | Treasures: {} | Moves: {} | Deals: {}",
                player.treasures, player.moves, player.vendor_deals
            )),
        ]),
        Line::from(format!("Here: {} | Inventory: {}", game.current_cell().name(), inventory)),
        Line::from(Span::styled(KEY_LEGEND, Style::default().fg(Color::DarkGray))),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Status ")
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_messages(frame: &mut Frame, game: &Game, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Messages ")
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);

    let messages: Vec<Line> = game
        .messages()
        .iter()
        .rev()
        .take(inner.height as usize)
        .rev()
        .map(|msg| {
            let color = match msg.category {
                MessageCategory::Combat => Color::Red,
                MessageCategory::Item => Color::Yellow,
                MessageCategory::System => Color::Cyan,
                MessageCategory::Lore => Color::Magenta,
                MessageCategory::Warning => Color::LightRed,
            };
            Line::from(Span::styled(msg.text.as_str(), Style::default().fg(color)))
        })
        .collect();

    frame.render_widget(Paragraph::new(messages).block(block), area);
}

fn render_guide(frame: &mut Frame, game: &Game, area: Rect) {
    let cell = game.current_cell();
    let guide = guide_for(cell);

    let art_style = Style::default().fg(rgb(cell.fg_color()));
    let mut lines: Vec<Line> = guide
        .art
        .iter()
        .map(|row| Line::from(Span::styled(*row, art_style)))
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(guide.info));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Item Guide: {} ", guide.title))
        .border_style(Style::default().fg(Color::Yellow));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_prompt(frame: &mut Frame, prompt: &Prompt, area: Rect) {
    let popup = centered_rect(48, 5, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", prompt.title()))
        .border_style(Style::default().fg(Color::Cyan));

    let text = vec![
        Line::default(),
        Line::from(Span::styled(
            prompt.question(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(text).block(block), popup);
}

/// A `width` x `height` rect centered in `area`, shrunk to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::{Action, EncounterKind};
    use crate::world::Grid;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(game: &Game) -> String {
        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, game)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_frame_shows_map_and_status() {
        let game = Game::with_grid("Ada", GameConfig::default(), Grid::from_rows(&[" T#V", "MC N"]));
        let screen = draw(&game);
        assert!(screen.contains("Adventure Map"));
        assert!(screen.contains("@$#V"));
        assert!(screen.contains("MC N"));
        assert!(screen.contains("Player: Ada | HP: 10/10 | Treasures: 0"));
        assert!(screen.contains("Here: Empty | Inventory: (empty)"));
        assert!(screen.contains("Welcome, Ada!"));
    }

    #[test]
    fn test_guide_follows_player() {
        let mut game = Game::with_grid("Ada", GameConfig::default(), Grid::from_rows(&[" V"]));
        assert!(draw(&game).contains("Item Guide: Sword"));

        game.execute(Action::Move { dx: 1, dy: 0 });
        let screen = draw(&game);
        assert!(screen.contains("Item Guide: Vendor"));
        assert!(screen.contains("(o o)"));
    }

    #[test]
    fn test_prompt_overlay() {
        let mut game = Game::with_grid("Ada", GameConfig::default(), Grid::from_rows(&["  "]));
        game.start_encounter(EncounterKind::Puzzle);
        let screen = draw(&game);
        assert!(screen.contains("Cave Riddle"));
        assert!(screen.contains("What is"));
    }

    #[test]
    fn test_rendering_does_not_mutate() {
        let game = Game::with_grid("Ada", GameConfig::default(), Grid::from_rows(&[" T"]));
        let before = (game.player().clone(), game.grid().clone(), game.messages().len());
        draw(&game);
        draw(&game);
        assert_eq!(before, (game.player().clone(), game.grid().clone(), game.messages().len()));
    }

    #[test]
    fn test_camera_follows_player_on_small_terminal() {
        let mut game = Game::with_grid("Ada", GameConfig::default(), Grid::new(20, 20));
        for _ in 0..15 {
            game.execute(Action::Move { dx: 0, dy: 1 });
        }
        assert_eq!(game.player().position(), (0, 15));

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, &game)).unwrap();
        let buffer = terminal.backend().buffer();
        let at = (0..buffer.area.height)
            .any(|y| (0..buffer.area.width).any(|x| buffer[(x, y)].symbol() == "@"));
        assert!(at, "player marker not drawn");
    }

    #[test]
    fn test_camera_origin_clamps_to_edges() {
        // Map fits: no scrolling
        assert_eq!(camera_origin(7, 20, 20), 0);
        // Near the top-left edge
        assert_eq!(camera_origin(2, 8, 20), 0);
        // Centred in the middle
        assert_eq!(camera_origin(10, 8, 20), 6);
        // Near the far edge
        assert_eq!(camera_origin(19, 8, 20), 12);
        assert_eq!(camera_origin(199, 50, 200), 150);
    }

    #[test]
    fn test_centered_rect_fits_small_area() {
        let area = Rect::new(0, 0, 20, 3);
        let popup = centered_rect(48, 5, area);
        assert_eq!(popup, Rect::new(0, 0, 20, 3));
    }
}
