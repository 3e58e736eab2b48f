//! Capability interface over the rich-text editing engine.
//!
//! Toolbar controls never own the editor. They receive it as an explicit
//! `Option<&mut dyn EditorHandle>` and issue one [`CommandChain`] per gesture;
//! an absent handle (editor not initialized yet) turns every command into a
//! no-op.

mod memory;

pub use memory::MemoryEditor;

use std::collections::BTreeMap;
use tracing::debug;

/// Marks (inline formatting) that can be queried or targeted by commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarkType {
    Bold,
    Italic,
    Underline,
    TextStyle,
    Highlight,
    Link,
    Comment,
}

impl MarkType {
    /// Engine-facing mark name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::TextStyle => "textStyle",
            Self::Highlight => "highlight",
            Self::Link => "link",
            Self::Comment => "commentMark",
        }
    }
}

/// Block-level nodes that can be queried for activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Paragraph,
    Heading,
    BulletList,
    OrderedList,
    TaskList,
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

/// Activity query answered by [`EditorHandle::is_active`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveQuery {
    Mark(MarkType),
    Node(NodeType),
    /// Heading node with a specific level (1..=6).
    Heading(u8),
    TextAlign(TextAlign),
}

/// Attribute keys used by the toolbar.
pub mod attr {
    pub const FONT_FAMILY: &str = "fontFamily";
    pub const FONT_SIZE: &str = "fontSize";
    pub const LINE_HEIGHT: &str = "lineHeight";
    pub const COLOR: &str = "color";
    pub const HREF: &str = "href";
}

/// Attribute map reported for a mark at the current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert used when constructing attribute payloads.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Returns the value for `key`; empty strings read as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Merges `other` into `self`, overwriting existing keys.
    pub fn merge(&mut self, other: &Attributes) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }
}

/// A single editor operation, named by intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    Focus,
    Undo,
    Redo,
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    ToggleTaskList,
    ToggleBulletList,
    ToggleOrderedList,
    ToggleHeading { level: u8 },
    SetParagraph,
    SetFontFamily(String),
    SetFontSize(String),
    SetLineHeight(String),
    SetTextAlign(TextAlign),
    SetHighlight { color: String },
    ExtendMarkRange(MarkType),
    SetMark { mark: MarkType, attrs: Attributes },
    SetLink { href: String },
    SetImage { src: String },
    UnsetAllMarks,
    AddPendingComment,
}

/// Ordered command sequence applied atomically from the caller's perspective.
///
/// Chains built with [`CommandChain::focused`] always start with
/// [`EditorCommand::Focus`], so the editor takes focus back from whatever
/// toolbar control issued the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandChain {
    commands: Vec<EditorCommand>,
}

impl CommandChain {
    /// Starts a chain with the focus step.
    pub fn focused() -> Self {
        Self {
            commands: vec![EditorCommand::Focus],
        }
    }

    /// Appends a command.
    pub fn then(mut self, command: EditorCommand) -> Self {
        self.commands.push(command);
        self
    }

    pub fn commands(&self) -> &[EditorCommand] {
        &self.commands
    }

    /// Commands after the leading focus step.
    pub fn mutations(&self) -> &[EditorCommand] {
        match self.commands.first() {
            Some(EditorCommand::Focus) => &self.commands[1..],
            _ => &self.commands,
        }
    }

    pub fn into_commands(self) -> Vec<EditorCommand> {
        self.commands
    }
}

/// External rich-text editor, seen only through the operations the toolbar uses.
pub trait EditorHandle {
    /// Whether the current selection already carries the queried state.
    fn is_active(&self, query: &ActiveQuery) -> bool;

    /// Attributes of `mark` at the current selection.
    fn attributes(&self, mark: MarkType) -> Attributes;

    /// Executes a command chain.
    fn run(&mut self, chain: CommandChain);

    /// Moves focus to the editor without changing content.
    fn focus(&mut self);

    /// Current spellcheck attribute of the editing surface, if set.
    fn spellcheck(&self) -> Option<bool>;

    fn set_spellcheck(&mut self, enabled: bool);
}

/// Runs `chain` against the editor when one is available.
///
/// # Returns
/// `true` when the chain was handed to the editor, `false` when the handle was
/// absent and nothing happened.
pub fn dispatch(editor: Option<&mut dyn EditorHandle>, chain: CommandChain) -> bool {
    match editor {
        Some(editor) => {
            debug!(commands = ?chain.mutations(), "running editor chain");
            editor.run(chain);
            true
        }
        None => {
            debug!("editor unavailable; dropping command chain");
            false
        }
    }
}

/// Reads one attribute of `mark`, if an editor is present.
pub fn read_attribute(
    editor: Option<&dyn EditorHandle>,
    mark: MarkType,
    key: &str,
) -> Option<String> {
    editor.and_then(|editor| editor.attributes(mark).get(key).map(str::to_string))
}

/// Activity query that treats a missing editor as inactive.
pub fn query_active(editor: Option<&dyn EditorHandle>, query: ActiveQuery) -> bool {
    editor.map(|editor| editor.is_active(&query)).unwrap_or(false)
}
