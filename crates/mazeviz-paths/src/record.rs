//! A [`Surface`] that records draw requests instead of rendering them.

use mazeviz_core::{Color, Point, Range};

use crate::traits::Surface;

/// A single recorded draw request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCmd {
    Fill { rect: Range, color: Color },
    Clear { rect: Range },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: u32,
    },
}

/// Recording surface. Useful for headless runs and for replaying a
/// visualisation onto another [`Surface`].
#[derive(Clone, Debug, Default)]
pub struct DrawLog {
    cmds: Vec<DrawCmd>,
}

impl DrawLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in issue order.
    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Drop every recorded command.
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// Issue every recorded command, in order, to `target`.
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) {
        for cmd in &self.cmds {
            match *cmd {
                DrawCmd::Fill { rect, color } => target.fill_rect(rect, color),
                DrawCmd::Clear { rect } => target.clear_rect(rect),
                DrawCmd::Line {
                    from,
                    to,
                    color,
                    width,
                } => target.line(from, to, color, width),
            }
        }
    }
}

impl Surface for DrawLog {
    fn fill_rect(&mut self, rect: Range, color: Color) {
        self.cmds.push(DrawCmd::Fill { rect, color });
    }

    fn clear_rect(&mut self, rect: Range) {
        self.cmds.push(DrawCmd::Clear { rect });
    }

    fn line(&mut self, from: Point, to: Point, color: Color, width: u32) {
        self.cmds.push(DrawCmd::Line {
            from,
            to,
            color,
            width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_reproduces_commands() {
        let mut rec = DrawLog::new();
        rec.clear_rect(Range::new(0, 0, 4, 4));
        rec.fill_rect(Range::new(0, 0, 4, 4), Color::WHITE);
        rec.line(Point::new(0, 0), Point::new(4, 0), Color::BLACK, 1);

        let mut copy = DrawLog::new();
        rec.replay(&mut copy);
        assert_eq!(copy.commands(), rec.commands());
        assert_eq!(copy.len(), 3);

        copy.clear();
        assert!(copy.is_empty());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn draw_cmd_round_trip() {
        let cmd = DrawCmd::Line {
            from: Point::new(0, 8),
            to: Point::new(8, 8),
            color: Color::BLACK,
            width: 2,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let back: DrawCmd = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
