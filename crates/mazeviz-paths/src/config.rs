use mazeviz_core::Color;

/// Colours and stroke width used when drawing a maze.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    pub wall_color: Color,
    /// Wall stroke width in pixels.
    pub wall_width: u32,
    /// Tint for cells on the solution path.
    pub path_color: Color,
    /// Tint for cells a solver has explored.
    pub explored_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            wall_color: Color::BLACK,
            wall_width: 1,
            path_color: Color::from_rgba(246, 8, 36, 150),
            explored_color: Color::from_rgba(38, 15, 139, 158),
        }
    }
}
