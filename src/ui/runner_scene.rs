//! Lane runner scene rendering.
//!
//! Uses a cell buffer for per-character color control. The road, lane
//! dashes, entities and runner are drawn into a 2D grid in reference screen
//! coordinates scaled to the play field, then stamped row-by-row as
//! Paragraph widgets.

use super::game_common::{create_game_layout, render_game_over_overlay, render_status_bar};
use lane_runner::config::{REFERENCE_HEIGHT, REFERENCE_WIDTH};
use lane_runner::runner::{EntityKind, FrameSnapshot, GameSession, Projected};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const ROAD_EDGE_LEFT: char = '/';
const ROAD_EDGE_RIGHT: char = '\\';
const LANE_DASH: char = '¦';
const ROAD_FILL: char = '·';
/// Depth units per dash/gap pair.
const DASH_PERIOD: f64 = 48.0;

/// Cell in the render buffer.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }
}

/// Maps reference coordinates onto a field of `width` x `height` cells.
#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    pub width: u16,
    pub height: u16,
}

impl FieldMapping {
    pub fn to_cell(&self, x: f64, y: f64) -> (i32, i32) {
        (
            (x / REFERENCE_WIDTH * self.width as f64).floor() as i32,
            (y / REFERENCE_HEIGHT * self.height as f64).floor() as i32,
        )
    }

    /// Center of cell `(col, row)` in reference coordinates.
    pub fn to_reference(&self, col: u16, row: u16) -> (f64, f64) {
        (
            (col as f64 + 0.5) / self.width.max(1) as f64 * REFERENCE_WIDTH,
            (row as f64 + 0.5) / self.height.max(1) as f64 * REFERENCE_HEIGHT,
        )
    }
}

/// Render the whole runner screen. Returns the play field rectangle so the
/// host can translate mouse positions.
pub fn render_runner_scene(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    difficulty_name: &str,
) -> Rect {
    let snapshot = FrameSnapshot::capture(session);
    let layout = create_game_layout(frame, area, " Lane Runner ", Color::LightCyan, 22);

    render_play_field(frame, layout.content, &snapshot, session);

    if snapshot.game_over_visible {
        render_game_over_overlay(
            frame,
            layout.content,
            snapshot.final_score.unwrap_or(snapshot.score),
            snapshot.best_score,
            snapshot.new_best,
        );
        render_status_bar(
            frame,
            layout.status_bar,
            "Crashed!",
            Color::LightRed,
            "[Space/Click] Restart  [Q] Quit",
        );
    } else {
        render_status_bar(
            frame,
            layout.status_bar,
            &format!("Score: {}", snapshot.score),
            Color::LightYellow,
            "[←/→ or Swipe] Change lane  [Q] Quit",
        );
    }

    render_info_panel(frame, layout.info_panel, session, &snapshot, difficulty_name);
    layout.content
}

fn put(buffer: &mut [Vec<Cell>], col: i32, row: i32, cell: Cell) {
    if row < 0 || col < 0 {
        return;
    }
    if let Some(line) = buffer.get_mut(row as usize) {
        if let Some(slot) = line.get_mut(col as usize) {
            *slot = cell;
        }
    }
}

/// Stamp a sprite centered on `at`, sized by its projected scale.
fn stamp(buffer: &mut [Vec<Cell>], map: FieldMapping, at: Projected, base: f64, cell: Cell) {
    let (cx, cy) = map.to_cell(at.x, at.y);
    let cells_wide = (base * at.scale / REFERENCE_WIDTH * map.width as f64)
        .round()
        .max(1.0) as i32;
    let cells_tall = (base * at.scale / REFERENCE_HEIGHT * map.height as f64)
        .round()
        .max(1.0) as i32;
    let left = cx - cells_wide / 2;
    let top = cy - cells_tall / 2;
    for dy in 0..cells_tall {
        for dx in 0..cells_wide {
            put(buffer, left + dx, top + dy, cell);
        }
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, snapshot: &FrameSnapshot, session: &GameSession) {
    if area.height < 4 || area.width < 10 {
        return;
    }
    let map = FieldMapping {
        width: area.width,
        height: area.height,
    };
    let projector = &session.projector;
    let hitbox = &session.config.hitbox;
    let mut buffer: Vec<Vec<Cell>> =
        vec![vec![Cell::default(); area.width as usize]; area.height as usize];

    // ── Road, one row at a time ───────────────────────────────────────
    let lane_count = projector.lane_count();
    for row in 0..area.height {
        let (_, y) = map.to_reference(0, row);
        let Some(depth) = projector.depth_at_y(y) else {
            continue;
        };
        let (left, right) = projector.edges(depth);
        let (left_col, _) = map.to_cell(left, y);
        let (right_col, _) = map.to_cell(right, y);

        let shade = if depth > projector.config().d_max * 0.5 {
            Color::Rgb(70, 70, 80)
        } else {
            Color::Rgb(45, 45, 55)
        };
        for col in (left_col + 1)..right_col {
            put(
                &mut buffer,
                col,
                row as i32,
                Cell {
                    ch: ROAD_FILL,
                    fg: shade,
                },
            );
        }
        put(
            &mut buffer,
            left_col,
            row as i32,
            Cell {
                ch: ROAD_EDGE_LEFT,
                fg: Color::Gray,
            },
        );
        put(
            &mut buffer,
            right_col,
            row as i32,
            Cell {
                ch: ROAD_EDGE_RIGHT,
                fg: Color::Gray,
            },
        );

        // Dashes halfway between neighbouring lanes, scrolling toward the viewer
        let phase = ((depth - snapshot.scroll_offset) / DASH_PERIOD).rem_euclid(1.0);
        if phase < 0.5 {
            for boundary in 1..lane_count {
                let fraction = (boundary as f64 + 0.5) / (lane_count + 1) as f64;
                let (col, _) = map.to_cell(projector.x_at_fraction(fraction, depth), y);
                put(
                    &mut buffer,
                    col,
                    row as i32,
                    Cell {
                        ch: LANE_DASH,
                        fg: Color::Rgb(200, 200, 120),
                    },
                );
            }
        }
    }

    // ── Entities, far to near ─────────────────────────────────────────
    for entity in &snapshot.entities {
        let cell = match entity.kind {
            EntityKind::Obstacle => Cell {
                ch: '█',
                fg: Color::LightRed,
            },
            EntityKind::Coin => Cell {
                ch: '●',
                fg: Color::Yellow,
            },
        };
        let size = match entity.kind {
            EntityKind::Obstacle => hitbox.base_size * hitbox.obstacle_factor,
            EntityKind::Coin => hitbox.base_size * hitbox.coin_factor,
        };
        stamp(&mut buffer, map, entity.at, size, cell);
    }

    // ── Runner ────────────────────────────────────────────────────────
    let runner_color = if snapshot.game_over_visible {
        Color::DarkGray
    } else {
        Color::LightCyan
    };
    stamp(
        &mut buffer,
        map,
        snapshot.player,
        hitbox.base_size * hitbox.player_factor,
        Cell {
            ch: '▲',
            fg: runner_color,
        },
    );

    for (i, line) in buffer.iter().enumerate() {
        let spans: Vec<Span> = line
            .iter()
            .map(|c| Span::styled(c.ch.to_string(), Style::default().fg(c.fg)))
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(area.x, area.y + i as u16, area.width, 1),
        );
    }
}

fn render_info_panel(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    snapshot: &FrameSnapshot,
    difficulty_name: &str,
) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let row = |name: &str, text: String| {
        Line::from(vec![
            Span::styled(format!("{:<8}", name), label),
            Span::styled(text, value),
        ])
    };

    let lines = vec![
        row("Pace", difficulty_name.to_string()),
        row("Score", snapshot.score.to_string()),
        row("Best", snapshot.best_score.to_string()),
        row("Coins", session.coins_collected.to_string()),
        row(
            "Lane",
            format!("{}/{}", snapshot.player_lane + 1, session.lanes.lane_count()),
        ),
        row("Time", format!("{:.1}s", session.elapsed_ms / 1000.0)),
        Line::from(""),
        Line::from(Span::styled("█ dodge  ● grab", label)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_roundtrip_lands_in_same_cell() {
        let map = FieldMapping {
            width: 36,
            height: 32,
        };
        for (col, row) in [(0u16, 0u16), (17, 20), (35, 31)] {
            let (x, y) = map.to_reference(col, row);
            assert_eq!(map.to_cell(x, y), (col as i32, row as i32));
        }
    }

    #[test]
    fn test_stamp_clips_at_edges() {
        let map = FieldMapping {
            width: 10,
            height: 10,
        };
        let mut buffer = vec![vec![Cell::default(); 10]; 10];
        let at = Projected {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        };
        stamp(
            &mut buffer,
            map,
            at,
            200.0,
            Cell {
                ch: 'X',
                fg: Color::Red,
            },
        );
        assert_eq!(buffer[0][0].ch, 'X');
        assert_eq!(buffer[9][9].ch, ' ');
    }
}
