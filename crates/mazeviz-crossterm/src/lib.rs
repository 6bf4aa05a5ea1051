//! Crossterm terminal surface for mazeviz.
//!
//! Provides a [`TermSurface`] that implements [`mazeviz_paths::Surface`] by
//! rasterising draw requests into a character buffer, one pixel per
//! terminal cell, and writing the changed cells out through crossterm.

use std::io::{self, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use mazeviz_core::{Color, MazeGrid, Point, Range};
use mazeviz_paths::Surface;

/// Maps an optional colour to a [`crossterm::style::Color`]; `None` is the
/// terminal default.
fn to_ct_color(c: Option<Color>) -> CtColor {
    match c {
        None => CtColor::Reset,
        Some(c) => CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        },
    }
}

/// Glyph for a line through a cell, merged with what is already there.
fn merge_glyph(old: char, new: char) -> char {
    match (old, new) {
        (' ', n) => n,
        (o, n) if o == n => o,
        ('-', '|') | ('|', '-') | ('+', _) | (_, '+') => '+',
        (_, n) => n,
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct TermCell {
    ch: char,
    fg: Option<Color>,
    bg: Option<Color>,
}

impl TermCell {
    const BLANK: Self = Self {
        ch: ' ',
        fg: None,
        bg: None,
    };
}

/// Largest surface extent on either axis; cursor positions are `u16`.
const MAX_EXTENT: i32 = u16::MAX as i32 + 1;

/// A terminal drawing surface.
///
/// Fills are alpha-blended over the configured background since terminals
/// have no translucency. Line widths are ignored.
pub struct TermSurface {
    cells: Vec<TermCell>,
    dirty: Vec<bool>,
    bounds: Range,
    background: Color,
}

impl TermSurface {
    /// Create a blank surface of `width` × `height` terminal cells. Each
    /// extent is clamped to the 65536 columns or rows a cursor can address.
    pub fn new(width: i32, height: i32, background: Color) -> Self {
        let bounds = Range::new(
            0,
            0,
            width.clamp(0, MAX_EXTENT),
            height.clamp(0, MAX_EXTENT),
        );
        if bounds.width() < width || bounds.height() < height {
            log::warn!("terminal surface {width}x{height} clipped to {bounds:?}");
        }
        Self {
            cells: vec![TermCell::BLANK; bounds.len()],
            dirty: vec![true; bounds.len()],
            bounds,
            background,
        }
    }

    /// A surface large enough for every wall of `grid`, including the
    /// closing right and bottom edges.
    pub fn for_grid(grid: &MazeGrid, background: Color) -> Self {
        let s = grid.cell_size();
        Self::new(
            grid.width().saturating_mul(s).saturating_add(1),
            grid.height().saturating_mul(s).saturating_add(1),
            background,
        )
    }

    /// The surface rectangle.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.bounds.width() as usize) + (p.x as usize))
    }

    fn update(&mut self, p: Point, f: impl FnOnce(&mut TermCell)) {
        if let Some(i) = self.idx(p) {
            let before = self.cells[i];
            f(&mut self.cells[i]);
            if self.cells[i] != before {
                self.dirty[i] = true;
            }
        }
    }

    /// Character at `p`, or `None` outside the surface.
    pub fn char_at(&self, p: Point) -> Option<char> {
        self.idx(p).map(|i| self.cells[i].ch)
    }

    /// Fill colour at `p`. `None` if nothing was filled there or `p` is
    /// outside the surface.
    pub fn fill_at(&self, p: Point) -> Option<Color> {
        self.idx(p).and_then(|i| self.cells[i].bg)
    }

    /// Plain text content, one line per row.
    pub fn text(&self) -> String {
        let w = self.bounds.width().max(1) as usize;
        self.cells
            .chunks(w)
            .map(|row| row.iter().map(|c| c.ch).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Mark every cell for output on the next [`flush`](Self::flush).
    pub fn invalidate(&mut self) {
        self.dirty.fill(true);
    }

    /// Write every changed cell to `out` and flush it. Returns the number of
    /// cells written.
    pub fn flush<W: Write>(&mut self, out: &mut W) -> io::Result<usize> {
        let mut written = 0;
        for p in self.bounds.iter() {
            let Some(i) = self.idx(p) else {
                continue;
            };
            if !self.dirty[i] {
                continue;
            }
            let cell = self.cells[i];
            queue!(
                out,
                cursor::MoveTo(p.x as u16, p.y as u16),
                SetForegroundColor(to_ct_color(cell.fg)),
                SetBackgroundColor(to_ct_color(cell.bg)),
                Print(cell.ch)
            )?;
            self.dirty[i] = false;
            written += 1;
        }
        queue!(out, ResetColor)?;
        out.flush()?;
        log::debug!("flushed {written} terminal cells");
        Ok(written)
    }
}

impl Surface for TermSurface {
    fn fill_rect(&mut self, rect: Range, color: Color) {
        let background = self.background;
        for p in rect.intersect(self.bounds).iter() {
            self.update(p, |c| {
                c.bg = Some(color.blend_over(c.bg.unwrap_or(background)));
            });
        }
    }

    fn clear_rect(&mut self, rect: Range) {
        for p in rect.intersect(self.bounds).iter() {
            self.update(p, |c| *c = TermCell::BLANK);
        }
    }

    fn line(&mut self, from: Point, to: Point, color: Color, _width: u32) {
        let glyph = match (from.x == to.x, from.y == to.y) {
            (_, true) => '-',
            (true, false) => '|',
            _ if (to.x - from.x).signum() == (to.y - from.y).signum() => '\\',
            _ => '/',
        };
        // Bresenham.
        let (dx, dy) = ((to.x - from.x).abs(), -(to.y - from.y).abs());
        let (sx, sy) = ((to.x - from.x).signum(), (to.y - from.y).signum());
        let mut err = dx + dy;
        let mut p = from;
        loop {
            self.update(p, |c| {
                c.ch = merge_glyph(c.ch, glyph);
                c.fg = Some(color);
            });
            if p == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                p.x += sx;
            }
            if e2 <= dx {
                err += dx;
                p.y += sy;
            }
        }
    }
}

/// Switch `out` to the alternate screen and hide the cursor.
pub fn enter<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(ClearType::All)
    )
}

/// Undo [`enter`].
pub fn leave<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen)
}
