//! Text frame construction.

use std::fmt;

use crate::config::Config;
use crate::game::GameState;

pub const AGENT_GLYPH: char = 'B';
pub const OBSTACLE_GLYPH: char = '|';
pub const EMPTY_GLYPH: char = ' ';

/// One finished frame: the playfield rows and the score under them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub rows: Vec<String>,
    pub score: u32,
}

impl Frame {
    #[doc(hidden)]
    pub fn glyph(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row)?.chars().nth(col)
    }

    pub fn score_line(&self) -> String {
        format!("Score: {}", self.score)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        write!(f, "{}", self.score_line())
    }
}

/// An unvalidated config with a non-positive size yields an empty grid.
pub fn render(state: &GameState, config: &Config) -> Frame {
    let agent_row = state.agent.row();
    let mut rows = Vec::with_capacity(config.height.max(0) as usize);

    for row in 0..config.height {
        let line: String = (0..config.width)
            .map(|col| {
                if row == agent_row && col == state.agent.x {
                    AGENT_GLYPH
                } else if state
                    .obstacles
                    .iter()
                    .any(|o| o.x == col && o.blocks(row, config.gap_height))
                {
                    OBSTACLE_GLYPH
                } else {
                    EMPTY_GLYPH
                }
            })
            .collect();
        rows.push(line);
    }

    Frame {
        rows,
        score: state.score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacles::Obstacle;

    #[test]
    fn empty_field() {
        let config = Config::default();
        let state = GameState::new(&config);
        let frame = render(&state, &config);
        assert_eq!(frame.rows.len(), 20);
        assert!(frame.rows.iter().all(|r| r.chars().count() == 40));
        assert_eq!(frame.glyph(10, 5), Some(AGENT_GLYPH));
        let agents = frame
            .rows
            .iter()
            .flat_map(|r| r.chars())
            .filter(|&c| c == AGENT_GLYPH)
            .count();
        assert_eq!(agents, 1);
    }

    #[test]
    fn obstacle_column_has_gap() {
        let config = Config::default();
        let mut state = GameState::new(&config);
        state.obstacles.insert(Obstacle { x: 20, gap_top: 3 });
        let frame = render(&state, &config);
        let column: String = (0..20).filter_map(|r| frame.glyph(r, 20)).collect();
        assert_eq!(column, format!("|||{}{}", " ".repeat(6), "|".repeat(11)));
    }

    #[test]
    fn agent_drawn_over_obstacle() {
        let config = Config::default();
        let mut state = GameState::new(&config);
        state.agent.y = 1.0;
        state.obstacles.insert(Obstacle { x: 5, gap_top: 10 });
        let frame = render(&state, &config);
        assert_eq!(frame.glyph(1, 5), Some(AGENT_GLYPH));
        assert_eq!(frame.glyph(0, 5), Some(OBSTACLE_GLYPH));
    }

    #[test]
    fn negative_height_renders_nothing() {
        let config = Config {
            height: -3,
            ..Config::default()
        };
        let state = GameState::new(&config);
        let frame = render(&state, &config);
        assert!(frame.rows.is_empty());
        assert_eq!(frame.to_string(), "Score: 0");
    }

    #[test]
    fn score_line_follows_grid() {
        let config = Config {
            height: 3,
            width: 4,
            gap_height: 1,
            agent_x: 1,
            ..Config::default()
        };
        let mut state = GameState::new(&config);
        state.score = 7;
        // Centered at 1.5, which rounds onto the bottom row.
        let text = render(&state, &config).to_string();
        assert_eq!(text, "    \n    \n B  \nScore: 7");
    }
}
