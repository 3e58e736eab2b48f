//! Alignment, line-height and list dropdowns.

use crate::editor::{
    attr, dispatch, query_active, read_attribute, ActiveQuery, CommandChain, EditorCommand,
    EditorHandle, MarkType, NodeType, TextAlign,
};

/// Alignment entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignOption {
    pub label: &'static str,
    pub align: TextAlign,
}

pub const ALIGN_OPTIONS: [AlignOption; 4] = [
    AlignOption {
        label: "Align Left",
        align: TextAlign::Left,
    },
    AlignOption {
        label: "Align Center",
        align: TextAlign::Center,
    },
    AlignOption {
        label: "Align Right",
        align: TextAlign::Right,
    },
    AlignOption {
        label: "Align Justify",
        align: TextAlign::Justify,
    },
];

impl AlignOption {
    pub fn is_active(&self, editor: Option<&dyn EditorHandle>) -> bool {
        query_active(editor, ActiveQuery::TextAlign(self.align))
    }

    pub fn apply(&self, editor: Option<&mut dyn EditorHandle>) -> bool {
        dispatch(
            editor,
            CommandChain::focused().then(EditorCommand::SetTextAlign(self.align)),
        )
    }
}

/// Alignment shown on the trigger. Left when nothing else is active.
pub fn current_align(editor: Option<&dyn EditorHandle>) -> TextAlign {
    ALIGN_OPTIONS
        .iter()
        .find(|option| option.is_active(editor))
        .map(|option| option.align)
        .unwrap_or_default()
}

/// Line-height entry. `value` is passed to the editor unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineHeightOption {
    pub label: &'static str,
    pub value: &'static str,
}

pub const DEFAULT_LINE_HEIGHT: &str = "normal";

pub const LINE_HEIGHT_OPTIONS: [LineHeightOption; 5] = [
    LineHeightOption {
        label: "Default",
        value: DEFAULT_LINE_HEIGHT,
    },
    LineHeightOption {
        label: "Single",
        value: "1",
    },
    LineHeightOption {
        label: "1.15",
        value: "1.15",
    },
    LineHeightOption {
        label: "1.5",
        value: "1.5",
    },
    LineHeightOption {
        label: "Double",
        value: "2",
    },
];

/// Line height at the selection; unset reads as [`DEFAULT_LINE_HEIGHT`].
pub fn current_line_height(editor: Option<&dyn EditorHandle>) -> String {
    read_attribute(editor, MarkType::TextStyle, attr::LINE_HEIGHT)
        .unwrap_or_else(|| DEFAULT_LINE_HEIGHT.to_string())
}

impl LineHeightOption {
    pub fn is_selected(&self, editor: Option<&dyn EditorHandle>) -> bool {
        current_line_height(editor) == self.value
    }

    pub fn apply(&self, editor: Option<&mut dyn EditorHandle>) -> bool {
        dispatch(
            editor,
            CommandChain::focused().then(EditorCommand::SetLineHeight(self.value.to_string())),
        )
    }
}

/// List entry of the list dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOption {
    pub label: &'static str,
    pub node: NodeType,
}

pub const LIST_OPTIONS: [ListOption; 2] = [
    ListOption {
        label: "Bullet List",
        node: NodeType::BulletList,
    },
    ListOption {
        label: "Ordered List",
        node: NodeType::OrderedList,
    },
];

impl ListOption {
    pub fn is_active(&self, editor: Option<&dyn EditorHandle>) -> bool {
        query_active(editor, ActiveQuery::Node(self.node))
    }

    pub fn apply(&self, editor: Option<&mut dyn EditorHandle>) -> bool {
        let command = match self.node {
            NodeType::OrderedList => EditorCommand::ToggleOrderedList,
            _ => EditorCommand::ToggleBulletList,
        };
        dispatch(editor, CommandChain::focused().then(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::MemoryEditor;

    #[test]
    fn alignment_is_exclusive_and_defaults_left() {
        let mut editor = MemoryEditor::new();
        assert_eq!(current_align(editor.view()), TextAlign::Left);

        ALIGN_OPTIONS[3].apply(editor.handle());
        assert_eq!(current_align(editor.view()), TextAlign::Justify);
        let active = ALIGN_OPTIONS
            .iter()
            .filter(|option| option.is_active(editor.view()))
            .count();
        assert_eq!(active, 1);
    }

    #[test]
    fn line_height_defaults_to_normal() {
        let mut editor = MemoryEditor::new();
        assert!(LINE_HEIGHT_OPTIONS[0].is_selected(editor.view()));
        assert!(LINE_HEIGHT_OPTIONS[1..]
            .iter()
            .all(|option| !option.is_selected(editor.view())));

        LINE_HEIGHT_OPTIONS[2].apply(editor.handle());
        assert_eq!(current_line_height(editor.view()), "1.15");
        assert!(LINE_HEIGHT_OPTIONS[2].is_selected(editor.view()));
        assert!(!LINE_HEIGHT_OPTIONS[0].is_selected(editor.view()));
    }

    #[test]
    fn list_options_toggle_their_list_kind() {
        let mut editor = MemoryEditor::new();
        LIST_OPTIONS[1].apply(editor.handle());
        assert_eq!(
            editor.last_chain().map(|chain| chain.mutations().to_vec()),
            Some(vec![EditorCommand::ToggleOrderedList])
        );
        assert!(LIST_OPTIONS[1].is_active(editor.view()));
        assert!(!LIST_OPTIONS[0].is_active(editor.view()));

        LIST_OPTIONS[0].apply(editor.handle());
        assert!(LIST_OPTIONS[0].is_active(editor.view()));
        assert!(!LIST_OPTIONS[1].is_active(editor.view()));
    }

    #[test]
    fn options_without_editor_do_nothing() {
        assert!(!ALIGN_OPTIONS[1].apply(None));
        assert!(!LINE_HEIGHT_OPTIONS[1].apply(None));
        assert!(!LIST_OPTIONS[0].apply(None));
        assert_eq!(current_line_height(None), DEFAULT_LINE_HEIGHT);
    }
}
