//! ASCII art mazes.
//!
//! Each cell takes two columns and two rows of text: `+` at corners, `-`
//! for a horizontal wall, `|` for a vertical wall, and a space for an open
//! passage. The character inside a cell is ignored, so it can be used as a
//! marker.
//!
//! ```text
//! +-+-+
//! |   |
//! +-+ +
//! |   |
//! +-+-+
//! ```

use std::fmt;

use crate::error::GridError;
use crate::geom::Point;
use crate::grid::MazeGrid;
use crate::walls::{Side, Walls};

impl MazeGrid {
    /// Parse an ASCII maze. Leading and trailing blank lines are ignored;
    /// every remaining line must have the same width.
    pub fn parse(s: &str, cell_size: i32) -> Result<Self, GridError> {
        let s = s.trim_matches(|c| c == '\n' || c == '\r');
        let rows: Vec<Vec<char>> = s.lines().map(|l| l.chars().collect()).collect();
        let line_width = rows.first().map_or(0, Vec::len);
        for (line, row) in rows.iter().enumerate() {
            if row.len() != line_width {
                return Err(GridError::InconsistentWidth {
                    line,
                    expected: line_width,
                    found: row.len(),
                });
            }
        }
        if rows.len() < 3 || rows.len() % 2 == 0 || line_width < 3 || line_width % 2 == 0 {
            return Err(GridError::Malformed {
                lines: rows.len(),
                width: line_width,
            });
        }

        for (y, row) in rows.iter().enumerate().step_by(2) {
            for (x, &ch) in row.iter().enumerate().step_by(2) {
                if !matches!(ch, '+' | '-' | '|' | ' ') {
                    return Err(invalid(ch, x, y));
                }
            }
        }

        let wall = |x: usize, y: usize| -> Result<bool, GridError> {
            let ch = rows[y][x];
            match (ch, y % 2 == 0) {
                (' ', _) => Ok(false),
                ('-', true) | ('|', false) => Ok(true),
                _ => Err(invalid(ch, x, y)),
            }
        };

        let width = (line_width - 1) / 2;
        let height = (rows.len() - 1) / 2;
        let mut walls = Vec::with_capacity(width * height);
        for j in 0..height {
            for i in 0..width {
                let (x, y) = (2 * i + 1, 2 * j + 1);
                walls.push(Walls::from_array([
                    wall(x, y - 1)?,
                    wall(x + 1, y)?,
                    wall(x, y + 1)?,
                    wall(x - 1, y)?,
                ]));
            }
        }
        MazeGrid::from_walls(width as i32, height as i32, cell_size, walls)
    }

    /// Whether either cell sharing the edge on `side` of `p` has a wall
    /// there. Edges on the grid border only consult the inner cell.
    fn edge_closed(&self, p: Point, side: Side) -> bool {
        let here = self.at(p).is_some_and(|c| c.walls.is_closed(side));
        let there = self
            .at(p + side.delta())
            .is_some_and(|c| c.walls.is_closed(side.opposite()));
        here || there
    }
}

fn invalid(ch: char, x: usize, y: usize) -> GridError {
    GridError::InvalidRune {
        ch,
        pos: Point::new(x as i32, y as i32),
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (self.width(), self.height());
        for y in 0..=2 * h {
            if y > 0 {
                f.write_str("\n")?;
            }
            for x in 0..=2 * w {
                let ch = match (x % 2 == 0, y % 2 == 0) {
                    (true, true) => '+',
                    (false, true) => {
                        // Edge between rows y/2 - 1 and y/2.
                        let below = Point::new(x / 2, y / 2);
                        let closed = if y / 2 < h {
                            self.edge_closed(below, Side::Top)
                        } else {
                            self.edge_closed(below + Side::Top.delta(), Side::Bottom)
                        };
                        if closed { '-' } else { ' ' }
                    }
                    (true, false) => {
                        let right = Point::new(x / 2, y / 2);
                        let closed = if x / 2 < w {
                            self.edge_closed(right, Side::Left)
                        } else {
                            self.edge_closed(right + Side::Left.delta(), Side::Right)
                        };
                        if closed { '|' } else { ' ' }
                    }
                    (false, false) => ' ',
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_BY_TWO: &str = "
+-+-+
|   |
+-+ +
|   |
+-+-+
";

    fn walls_at(g: &MazeGrid, i: i32, j: i32) -> [bool; 4] {
        g.at(Point::new(i, j)).unwrap().walls.as_array()
    }

    #[test]
    fn parse_reads_wall_flags() {
        let g = MazeGrid::parse(TWO_BY_TWO, 16).unwrap();
        assert_eq!((g.width(), g.height(), g.cell_size()), (2, 2, 16));
        assert_eq!(walls_at(&g, 0, 0), [true, false, true, true]);
        assert_eq!(walls_at(&g, 1, 0), [true, true, false, false]);
        assert_eq!(walls_at(&g, 0, 1), [true, false, true, true]);
        assert_eq!(walls_at(&g, 1, 1), [false, true, true, false]);
    }

    #[test]
    fn interior_markers_are_ignored() {
        let g = MazeGrid::parse("+-+-+\n|S E|\n+-+-+", 1).unwrap();
        assert_eq!(walls_at(&g, 0, 0), [true, false, true, true]);
        assert_eq!(walls_at(&g, 1, 0), [true, true, true, false]);
    }

    #[test]
    fn display_matches_parsed_text() {
        let g = MazeGrid::parse(TWO_BY_TWO, 1).unwrap();
        assert_eq!(g.to_string(), TWO_BY_TWO.trim());
    }

    #[test]
    fn display_shows_one_sided_walls() {
        let mut g = MazeGrid::new(2, 1, 1).unwrap();
        g.open_between(Point::new(0, 0), Side::Right);
        g.at_mut(Point::new(1, 0)).unwrap().walls.set(Side::Left, true);
        assert_eq!(g.to_string(), "+-+-+\n| | |\n+-+-+");
    }

    #[test]
    fn even_dimensions_are_malformed() {
        assert_eq!(
            MazeGrid::parse("+-+-\n|  |\n+-+-", 1).unwrap_err(),
            GridError::Malformed { lines: 3, width: 4 }
        );
        assert!(matches!(
            MazeGrid::parse("+-+\n| |", 1),
            Err(GridError::Malformed { .. })
        ));
        assert!(MazeGrid::parse("", 1).is_err());
    }

    #[test]
    fn ragged_lines_are_rejected() {
        assert_eq!(
            MazeGrid::parse("+-+\n| |\n+-+-+", 1).unwrap_err(),
            GridError::InconsistentWidth {
                line: 2,
                expected: 3,
                found: 5
            }
        );
    }

    #[test]
    fn wrong_wall_glyph_is_rejected() {
        // A vertical bar where a horizontal wall belongs.
        assert_eq!(
            MazeGrid::parse("+|+\n| |\n+-+", 1).unwrap_err(),
            GridError::InvalidRune {
                ch: '|',
                pos: Point::new(1, 0)
            }
        );
        assert!(matches!(
            MazeGrid::parse("#-+\n| |\n+-+", 1),
            Err(GridError::InvalidRune { ch: '#', .. })
        ));
    }
}
