//! Wall flags: [`Side`] and [`Walls`].
//!
//! A cell stores one flag per side in a fixed order: top, right, bottom,
//! left. `true` means the wall is present and blocks movement.

use std::ops::Index;

use crate::geom::Point;

/// One side of a cell. The discriminant is the wall index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Side {
    /// All sides in canonical order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Position of this side's flag in a [`Walls`] array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Coordinate offset of the cell across this side.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Side::Top => Point::new(0, -1),
            Side::Right => Point::new(1, 0),
            Side::Bottom => Point::new(0, 1),
            Side::Left => Point::new(-1, 0),
        }
    }

    /// The side facing this one from the neighbouring cell.
    #[inline]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }
}

/// The four wall flags of a cell, indexed by [`Side`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Walls([bool; 4]);

impl Walls {
    /// Every wall present.
    pub const CLOSED: Self = Self([true; 4]);
    /// No wall present.
    pub const OPEN: Self = Self([false; 4]);

    /// Build from flags in `[top, right, bottom, left]` order.
    #[inline]
    pub const fn from_array(flags: [bool; 4]) -> Self {
        Self(flags)
    }

    /// Flags in `[top, right, bottom, left]` order.
    #[inline]
    pub const fn as_array(self) -> [bool; 4] {
        self.0
    }

    #[inline]
    pub const fn is_closed(self, side: Side) -> bool {
        self.0[side.index()]
    }

    #[inline]
    pub const fn is_open(self, side: Side) -> bool {
        !self.0[side.index()]
    }

    /// Set the flag for `side` (`true` = wall present).
    #[inline]
    pub fn set(&mut self, side: Side, present: bool) {
        self.0[side.index()] = present;
    }

    /// Sides that currently have a wall, in canonical order.
    pub fn present(self) -> impl Iterator<Item = Side> {
        Side::ALL.into_iter().filter(move |&s| self.is_closed(s))
    }
}

impl Default for Walls {
    #[inline]
    fn default() -> Self {
        Self::CLOSED
    }
}

impl From<[bool; 4]> for Walls {
    fn from(flags: [bool; 4]) -> Self {
        Self(flags)
    }
}

impl Index<Side> for Walls {
    type Output = bool;
    #[inline]
    fn index(&self, side: Side) -> &bool {
        &self.0[side.index()]
    }
}
