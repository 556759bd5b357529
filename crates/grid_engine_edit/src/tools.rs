//! Tool definitions for bitmap editing
//!
//! Tools are organized in toggle pairs: clicking on an already-selected tool
//! switches to its partner.

use std::str::FromStr;

use grid_engine::EngineError;

/// Available editing tools
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    // === Toggle Pair 1: Paint / Erase ===
    /// Freehand drawing with a square brush
    #[default]
    Paint,
    /// Freehand drawing with color 0
    Erase,

    // === Toggle Pair 2: Rectangle Outline / Filled ===
    /// Draw rectangle outline
    Rect,
    /// Draw filled rectangle
    FilledRect,

    // === Single Tools (no toggle partner) ===
    /// Draw straight lines
    Line,
    /// Draw circle outlines around the drag start
    Circle,
    /// Flood fill area
    Fill,
    /// Cut a region into the floating layer and move it around
    Marquee,
    /// Pick a color from the canvas. Never edits.
    ColorSelect,
}

/// A toggle pair of tools sharing one toolbar slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolPair {
    pub primary: Tool,
    pub secondary: Tool,
}

impl ToolPair {
    pub const fn new(primary: Tool, secondary: Tool) -> Self {
        Self { primary, secondary }
    }

    pub const fn single(tool: Tool) -> Self {
        Self {
            primary: tool,
            secondary: tool,
        }
    }

    pub fn contains(&self, tool: Tool) -> bool {
        self.primary == tool || self.secondary == tool
    }

    /// Get the other tool in the pair (toggle)
    pub fn toggle(&self, current: Tool) -> Tool {
        if current == self.primary { self.secondary } else { self.primary }
    }
}

/// The toolbar slots (each can be a pair or single)
pub const TOOL_SLOTS: [ToolPair; 7] = [
    ToolPair::new(Tool::Paint, Tool::Erase),
    ToolPair::new(Tool::Rect, Tool::FilledRect),
    ToolPair::single(Tool::Line),
    ToolPair::single(Tool::Circle),
    ToolPair::single(Tool::Fill),
    ToolPair::single(Tool::Marquee),
    ToolPair::single(Tool::ColorSelect),
];

impl Tool {
    pub const ALL: [Tool; 9] = [
        Tool::Paint,
        Tool::Erase,
        Tool::Rect,
        Tool::FilledRect,
        Tool::Line,
        Tool::Circle,
        Tool::Fill,
        Tool::Marquee,
        Tool::ColorSelect,
    ];

    /// Stable identifier, accepted by [`Tool::from_str`]
    pub fn id(&self) -> &'static str {
        match self {
            Tool::Paint => "paint",
            Tool::Erase => "erase",
            Tool::Rect => "rect",
            Tool::FilledRect => "filled_rect",
            Tool::Line => "line",
            Tool::Circle => "circle",
            Tool::Fill => "fill",
            Tool::Marquee => "marquee",
            Tool::ColorSelect => "color_select",
        }
    }

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Paint => "Paint",
            Tool::Erase => "Erase",
            Tool::Rect => "Rectangle",
            Tool::FilledRect => "Filled Rectangle",
            Tool::Line => "Line",
            Tool::Circle => "Circle",
            Tool::Fill => "Fill",
            Tool::Marquee => "Marquee",
            Tool::ColorSelect => "Color Select",
        }
    }

    /// Get the keyboard shortcut
    pub fn shortcut(&self) -> Option<char> {
        match self {
            Tool::Paint => Some('p'),
            Tool::Erase => Some('e'),
            Tool::Rect | Tool::FilledRect => Some('r'),
            Tool::Line => Some('l'),
            Tool::Circle => Some('c'),
            Tool::Fill => Some('f'),
            Tool::Marquee => Some('m'),
            Tool::ColorSelect => Some('i'),
        }
    }

    /// Check if this tool draws shapes from a drag (start to end)
    pub fn is_shape_tool(&self) -> bool {
        matches!(self, Tool::Line | Tool::Rect | Tool::FilledRect | Tool::Circle)
    }

    /// Check if this tool paints with a square brush of the tool width
    pub fn uses_brush(&self) -> bool {
        matches!(self, Tool::Paint | Tool::Erase | Tool::Rect | Tool::Line)
    }

    /// Find which slot this tool belongs to
    pub fn slot_index(&self) -> usize {
        TOOL_SLOTS.iter().position(|pair| pair.contains(*self)).unwrap_or(0)
    }
}

impl FromStr for Tool {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.id() == s)
            .ok_or_else(|| EngineError::UnknownTool { name: s.to_string() })
    }
}

/// Handle clicking on a tool slot - returns the new tool
pub fn click_tool_slot(slot: usize, current_tool: Tool) -> Tool {
    let Some(pair) = TOOL_SLOTS.get(slot) else {
        return current_tool;
    };
    if pair.contains(current_tool) {
        pair.toggle(current_tool)
    } else {
        pair.primary
    }
}
