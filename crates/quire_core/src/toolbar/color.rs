//! Text color and highlight color dropdowns.

use super::Dropdown;
use crate::editor::{
    attr, dispatch, read_attribute, Attributes, CommandChain, EditorCommand, EditorHandle,
    MarkType,
};

pub const DEFAULT_TEXT_COLOR: &str = "#000000";
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#FFFFFF";

/// Swatches offered by the text color picker.
pub const TEXT_COLOR_PALETTE: [&str; 18] = [
    "#f44336", "#e91e63", "#9c27b0", "#673ab7", "#3f51b5", "#2196f3", "#03a9f4", "#00bcd4",
    "#009688", "#4caf50", "#8bc34a", "#cddc39", "#ffeb3b", "#ffc107", "#ff9800", "#ff5722",
    "#795548", "#607d8b",
];

/// Parses `#rrggbb` or `#rgb` (the `#` is optional).
pub fn parse_hex(value: &str) -> Option<[u8; 3]> {
    let hex = value.trim().trim_start_matches('#');
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let channel = |idx: usize| u8::from_str_radix(expanded.get(idx..idx + 2)?, 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Formats an RGB triple as lowercase `#rrggbb`.
pub fn format_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Which color a [`ColorControl`] edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Text,
    Highlight,
}

/// Color picker dropdown bound to one color target.
#[derive(Debug, Clone)]
pub struct ColorControl {
    target: ColorTarget,
    dropdown: Dropdown,
}

impl ColorControl {
    pub fn new(target: ColorTarget) -> Self {
        Self {
            target,
            dropdown: Dropdown::default(),
        }
    }

    pub fn target(&self) -> ColorTarget {
        self.target
    }

    pub fn dropdown(&self) -> &Dropdown {
        &self.dropdown
    }

    pub fn dropdown_mut(&mut self) -> &mut Dropdown {
        &mut self.dropdown
    }

    /// Color shown on the trigger and preselected in the picker.
    pub fn current(&self, editor: Option<&dyn EditorHandle>) -> String {
        let (mark, fallback) = match self.target {
            ColorTarget::Text => (MarkType::TextStyle, DEFAULT_TEXT_COLOR),
            ColorTarget::Highlight => (MarkType::Highlight, DEFAULT_HIGHLIGHT_COLOR),
        };
        read_attribute(editor, mark, attr::COLOR).unwrap_or_else(|| fallback.to_string())
    }

    /// Applies a picked color. The dropdown stays open so the picker can be
    /// dragged through several values.
    pub fn apply(&self, editor: Option<&mut dyn EditorHandle>, color: &str) -> bool {
        let chain = match self.target {
            ColorTarget::Text => CommandChain::focused()
                .then(EditorCommand::ExtendMarkRange(MarkType::TextStyle))
                .then(EditorCommand::SetMark {
                    mark: MarkType::TextStyle,
                    attrs: Attributes::new().with(attr::COLOR, color),
                }),
            ColorTarget::Highlight => CommandChain::focused().then(EditorCommand::SetHighlight {
                color: color.to_string(),
            }),
        };
        dispatch(editor, chain)
    }
}
