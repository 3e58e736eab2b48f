//! Toolbar controls.
//!
//! Each control reads the editor to compute what it displays and, on click,
//! issues one focus-then-apply chain. Controls hold only their own ephemeral
//! state (open dropdown, text being typed); the editor is passed in per call.

mod color;
mod font;
mod heading;
mod image;
mod link;
mod paragraph;

pub use color::{
    format_hex, parse_hex, ColorControl, ColorTarget, DEFAULT_HIGHLIGHT_COLOR, DEFAULT_TEXT_COLOR,
    TEXT_COLOR_PALETTE,
};
pub use font::{
    apply_font_family, clamp_font_size, current_font_family, current_font_size,
    font_family_selected, parse_leading_int, FontSizeControl, DEFAULT_FONT_FAMILY,
    DEFAULT_FONT_SIZE, FONT_FAMILIES, MAX_FONT_SIZE, MIN_FONT_SIZE,
};
pub use heading::{current_heading_label, HeadingOption, HEADING_OPTIONS};
pub use image::ImageControl;
pub use link::LinkControl;
pub use paragraph::{
    current_align, current_line_height, AlignOption, LineHeightOption, ListOption, ALIGN_OPTIONS,
    DEFAULT_LINE_HEIGHT, LINE_HEIGHT_OPTIONS, LIST_OPTIONS,
};

use crate::editor::{
    dispatch, query_active, ActiveQuery, CommandChain, EditorCommand, EditorHandle, MarkType,
    NodeType,
};
use crate::host::HostActions;
use tracing::debug;

/// Open/closed state of one dropdown. Dropdowns never share this state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dropdown {
    open: bool,
}

impl Dropdown {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Trigger click.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Selection made, outside click, or explicit submit.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Single-click toolbar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    Undo,
    Redo,
    Print,
    Spellcheck,
    Bold,
    Italic,
    Underline,
    Comment,
    TaskList,
    RemoveFormatting,
}

impl ToolbarButton {
    pub fn label(self) -> &'static str {
        match self {
            Self::Undo => "Undo",
            Self::Redo => "Redo",
            Self::Print => "Print",
            Self::Spellcheck => "Spellcheck",
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Underline => "Underline",
            Self::Comment => "Comment",
            Self::TaskList => "List Todo",
            Self::RemoveFormatting => "Remove Formatting",
        }
    }

    /// Pressed state shown on the button.
    pub fn is_active(self, editor: Option<&dyn EditorHandle>) -> bool {
        let query = match self {
            Self::Bold => ActiveQuery::Mark(MarkType::Bold),
            Self::Italic => ActiveQuery::Mark(MarkType::Italic),
            Self::Underline => ActiveQuery::Mark(MarkType::Underline),
            Self::Comment => ActiveQuery::Mark(MarkType::Comment),
            Self::TaskList => ActiveQuery::Node(NodeType::TaskList),
            Self::Undo | Self::Redo | Self::Print | Self::Spellcheck | Self::RemoveFormatting => {
                return false
            }
        };
        query_active(editor, query)
    }

    fn command(self) -> Option<EditorCommand> {
        match self {
            Self::Undo => Some(EditorCommand::Undo),
            Self::Redo => Some(EditorCommand::Redo),
            Self::Bold => Some(EditorCommand::ToggleBold),
            Self::Italic => Some(EditorCommand::ToggleItalic),
            Self::Underline => Some(EditorCommand::ToggleUnderline),
            Self::Comment => Some(EditorCommand::AddPendingComment),
            Self::TaskList => Some(EditorCommand::ToggleTaskList),
            Self::RemoveFormatting => Some(EditorCommand::UnsetAllMarks),
            Self::Print | Self::Spellcheck => None,
        }
    }

    /// Handles a click.
    pub fn click(self, editor: Option<&mut dyn EditorHandle>, host: &mut dyn HostActions) {
        match self {
            Self::Print => host.print(),
            Self::Spellcheck => toggle_spellcheck(editor),
            other => {
                if let Some(command) = other.command() {
                    dispatch(editor, CommandChain::focused().then(command));
                }
            }
        }
    }
}

/// Flips the editing surface's spellcheck attribute. An unset attribute
/// counts as enabled.
pub fn toggle_spellcheck(editor: Option<&mut dyn EditorHandle>) {
    let Some(editor) = editor else {
        debug!("editor unavailable; spellcheck unchanged");
        return;
    };
    let next = editor.spellcheck() == Some(false);
    editor.set_spellcheck(next);
}

/// One slot of the toolbar, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarItem {
    Button(ToolbarButton),
    Separator,
    FontFamily,
    HeadingLevel,
    FontSize,
    TextColor,
    HighlightColor,
    Link,
    Image,
    Align,
    LineHeight,
    List,
}

/// Fixed toolbar ordering.
pub const TOOLBAR_LAYOUT: &[ToolbarItem] = &[
    ToolbarItem::Button(ToolbarButton::Undo),
    ToolbarItem::Button(ToolbarButton::Redo),
    ToolbarItem::Button(ToolbarButton::Print),
    ToolbarItem::Button(ToolbarButton::Spellcheck),
    ToolbarItem::Separator,
    ToolbarItem::FontFamily,
    ToolbarItem::Separator,
    ToolbarItem::HeadingLevel,
    ToolbarItem::Separator,
    ToolbarItem::FontSize,
    ToolbarItem::Separator,
    ToolbarItem::Button(ToolbarButton::Bold),
    ToolbarItem::Button(ToolbarButton::Italic),
    ToolbarItem::Button(ToolbarButton::Underline),
    ToolbarItem::TextColor,
    ToolbarItem::HighlightColor,
    ToolbarItem::Separator,
    ToolbarItem::Link,
    ToolbarItem::Image,
    ToolbarItem::Align,
    ToolbarItem::LineHeight,
    ToolbarItem::List,
    ToolbarItem::Button(ToolbarButton::Comment),
    ToolbarItem::Button(ToolbarButton::TaskList),
    ToolbarItem::Button(ToolbarButton::RemoveFormatting),
];

/// Which dropdown-hosting control a dropdown belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownSlot {
    FontFamily,
    HeadingLevel,
    TextColor,
    HighlightColor,
    Link,
    Image,
    Align,
    LineHeight,
    List,
}

/// Ephemeral state of every toolbar control.
#[derive(Debug, Clone)]
pub struct Toolbar {
    pub font_family: Dropdown,
    pub heading: Dropdown,
    pub font_size: FontSizeControl,
    pub text_color: ColorControl,
    pub highlight: ColorControl,
    pub link: LinkControl,
    pub image: ImageControl,
    pub align: Dropdown,
    pub line_height: Dropdown,
    pub list: Dropdown,
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new()
    }
}

impl Toolbar {
    pub fn new() -> Self {
        Self {
            font_family: Dropdown::default(),
            heading: Dropdown::default(),
            font_size: FontSizeControl::new(),
            text_color: ColorControl::new(ColorTarget::Text),
            highlight: ColorControl::new(ColorTarget::Highlight),
            link: LinkControl::new(),
            image: ImageControl::new(),
            align: Dropdown::default(),
            line_height: Dropdown::default(),
            list: Dropdown::default(),
        }
    }

    pub fn dropdown(&self, slot: DropdownSlot) -> &Dropdown {
        match slot {
            DropdownSlot::FontFamily => &self.font_family,
            DropdownSlot::HeadingLevel => &self.heading,
            DropdownSlot::TextColor => self.text_color.dropdown(),
            DropdownSlot::HighlightColor => self.highlight.dropdown(),
            DropdownSlot::Link => self.link.dropdown(),
            DropdownSlot::Image => self.image.dropdown(),
            DropdownSlot::Align => &self.align,
            DropdownSlot::LineHeight => &self.line_height,
            DropdownSlot::List => &self.list,
        }
    }

    pub fn dropdown_mut(&mut self, slot: DropdownSlot) -> &mut Dropdown {
        match slot {
            DropdownSlot::FontFamily => &mut self.font_family,
            DropdownSlot::HeadingLevel => &mut self.heading,
            DropdownSlot::TextColor => self.text_color.dropdown_mut(),
            DropdownSlot::HighlightColor => self.highlight.dropdown_mut(),
            DropdownSlot::Link => self.link.dropdown_mut(),
            DropdownSlot::Image => self.image.dropdown_mut(),
            DropdownSlot::Align => &mut self.align,
            DropdownSlot::LineHeight => &mut self.line_height,
            DropdownSlot::List => &mut self.list,
        }
    }

    /// Closes every dropdown (e.g. on a click outside the toolbar).
    pub fn close_all(&mut self) {
        for slot in ALL_SLOTS {
            self.dropdown_mut(slot).close();
        }
    }
}

const ALL_SLOTS: [DropdownSlot; 9] = [
    DropdownSlot::FontFamily,
    DropdownSlot::HeadingLevel,
    DropdownSlot::TextColor,
    DropdownSlot::HighlightColor,
    DropdownSlot::Link,
    DropdownSlot::Image,
    DropdownSlot::Align,
    DropdownSlot::LineHeight,
    DropdownSlot::List,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::MemoryEditor;

    #[derive(Default)]
    struct RecordingHost {
        prints: usize,
    }

    impl HostActions for RecordingHost {
        fn print(&mut self) {
            self.prints += 1;
        }

        fn open_in_new_tab(&mut self, _url: &str) {}

        fn pick_image(&mut self) {}
    }

    #[test]
    fn formatting_buttons_issue_focus_then_toggle() {
        let mut editor = MemoryEditor::new();
        let mut host = RecordingHost::default();

        ToolbarButton::Bold.click(editor.handle(), &mut host);

        assert_eq!(
            editor.last_chain().map(CommandChain::commands),
            Some(&[EditorCommand::Focus, EditorCommand::ToggleBold][..])
        );
        assert!(ToolbarButton::Bold.is_active(editor.view()));
        assert!(!ToolbarButton::Italic.is_active(editor.view()));
    }

    #[test]
    fn buttons_without_editor_are_no_ops() {
        let mut host = RecordingHost::default();
        for item in TOOLBAR_LAYOUT {
            if let ToolbarItem::Button(button) = item {
                if *button != ToolbarButton::Print {
                    button.click(None, &mut host);
                }
                assert!(!button.is_active(None));
            }
        }
        assert_eq!(host.prints, 0);
    }

    #[test]
    fn print_delegates_to_host_without_editor_commands() {
        let mut editor = MemoryEditor::new();
        let mut host = RecordingHost::default();
        ToolbarButton::Print.click(editor.handle(), &mut host);
        assert_eq!(host.prints, 1);
        assert!(editor.executed().is_empty());
    }

    #[test]
    fn spellcheck_toggles_from_unset() {
        let mut editor = MemoryEditor::new();
        toggle_spellcheck(editor.handle());
        assert_eq!(editor.spellcheck(), Some(false));
        toggle_spellcheck(editor.handle());
        assert_eq!(editor.spellcheck(), Some(true));
        toggle_spellcheck(editor.handle());
        assert_eq!(editor.spellcheck(), Some(false));
    }

    #[test]
    fn remove_formatting_unsets_marks() {
        let mut editor = MemoryEditor::new();
        let mut host = RecordingHost::default();
        ToolbarButton::Underline.click(editor.handle(), &mut host);
        ToolbarButton::Comment.click(editor.handle(), &mut host);
        ToolbarButton::RemoveFormatting.click(editor.handle(), &mut host);
        assert!(!ToolbarButton::Underline.is_active(editor.view()));
        assert!(!ToolbarButton::Comment.is_active(editor.view()));
    }

    #[test]
    fn layout_starts_with_history_and_ends_with_remove_formatting() {
        assert_eq!(TOOLBAR_LAYOUT[0], ToolbarItem::Button(ToolbarButton::Undo));
        assert_eq!(
            TOOLBAR_LAYOUT.last(),
            Some(&ToolbarItem::Button(ToolbarButton::RemoveFormatting))
        );
    }

    #[test]
    fn dropdowns_do_not_share_state() {
        let mut toolbar = Toolbar::new();
        toolbar.dropdown_mut(DropdownSlot::Align).toggle();
        assert!(toolbar.dropdown(DropdownSlot::Align).is_open());
        assert!(!toolbar.dropdown(DropdownSlot::List).is_open());

        toolbar.close_all();
        assert!(!toolbar.dropdown(DropdownSlot::Align).is_open());
    }
}
