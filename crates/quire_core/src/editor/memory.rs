//! In-memory editor that tracks the formatting state of a single selection.
//!
//! It stands in for the real rich-text engine in the desktop shell and keeps a
//! log of executed chains so callers can assert exactly which commands a
//! control issued.

use super::{
    attr, ActiveQuery, Attributes, CommandChain, EditorCommand, EditorHandle, MarkType, NodeType,
    TextAlign,
};
use std::collections::BTreeSet;

const HISTORY_LIMIT: usize = 100;
const EXECUTED_LIMIT: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Paragraph,
    Heading(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Ordered,
    Task,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    marks: BTreeSet<MarkType>,
    text_style: Attributes,
    highlight: Attributes,
    link: Attributes,
    block: Block,
    list: Option<ListKind>,
    align: TextAlign,
    images: Vec<String>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            marks: BTreeSet::new(),
            text_style: Attributes::new(),
            highlight: Attributes::new(),
            link: Attributes::new(),
            block: Block::Paragraph,
            list: None,
            align: TextAlign::Left,
            images: Vec::new(),
        }
    }
}

/// Selection-level editor model implementing [`EditorHandle`].
#[derive(Debug, Clone, Default)]
pub struct MemoryEditor {
    state: Snapshot,
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
    focused: bool,
    focus_requests: usize,
    spellcheck: Option<bool>,
    executed: Vec<CommandChain>,
    executed_total: usize,
}

impl MemoryEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable handle in the shape toolbar controls accept.
    pub fn handle(&mut self) -> Option<&mut dyn EditorHandle> {
        let handle: &mut dyn EditorHandle = self;
        Some(handle)
    }

    /// Read-only handle in the shape toolbar displays accept.
    pub fn view(&self) -> Option<&dyn EditorHandle> {
        let view: &dyn EditorHandle = self;
        Some(view)
    }

    /// Most recent executed chains, oldest first. Only the last
    /// `EXECUTED_LIMIT` are kept.
    pub fn executed(&self) -> &[CommandChain] {
        &self.executed
    }

    /// Number of chains run since creation, including ones dropped from the log.
    pub fn executed_count(&self) -> usize {
        self.executed_total
    }

    /// Most recently executed chain.
    pub fn last_chain(&self) -> Option<&CommandChain> {
        self.executed.last()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Number of standalone [`EditorHandle::focus`] calls.
    pub fn focus_requests(&self) -> usize {
        self.focus_requests
    }

    /// Marks the editing surface as unfocused (e.g. a toolbar input took focus).
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Images inserted at the selection, in insertion order.
    pub fn images(&self) -> &[String] {
        &self.state.images
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Short description of the active formatting, for status displays.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        parts.push(match self.state.block {
            Block::Paragraph => "Paragraph".to_string(),
            Block::Heading(level) => format!("Heading {}", level),
        });
        if let Some(list) = self.state.list {
            parts.push(
                match list {
                    ListKind::Bullet => "Bullet list",
                    ListKind::Ordered => "Ordered list",
                    ListKind::Task => "Task list",
                }
                .to_string(),
            );
        }
        for mark in &self.state.marks {
            parts.push(mark.name().to_string());
        }
        if let Some(family) = self.state.text_style.get(attr::FONT_FAMILY) {
            parts.push(family.to_string());
        }
        if let Some(size) = self.state.text_style.get(attr::FONT_SIZE) {
            parts.push(size.to_string());
        }
        parts.push(format!("align {}", self.state.align.as_str()));
        parts.join(" · ")
    }

    fn record(&mut self) {
        self.undo.push(self.state.clone());
        if self.undo.len() > HISTORY_LIMIT {
            self.undo.remove(0);
        }
        self.redo.clear();
    }

    fn toggle_mark(&mut self, mark: MarkType) {
        if !self.state.marks.remove(&mark) {
            self.state.marks.insert(mark);
        }
    }

    fn toggle_list(&mut self, kind: ListKind) {
        self.state.list = if self.state.list == Some(kind) {
            None
        } else {
            Some(kind)
        };
    }

    fn apply(&mut self, command: &EditorCommand) {
        match command {
            EditorCommand::Focus => self.focused = true,
            EditorCommand::Undo => {
                if let Some(previous) = self.undo.pop() {
                    let current = std::mem::replace(&mut self.state, previous);
                    self.redo.push(current);
                }
            }
            EditorCommand::Redo => {
                if let Some(next) = self.redo.pop() {
                    let current = std::mem::replace(&mut self.state, next);
                    self.undo.push(current);
                }
            }
            EditorCommand::ExtendMarkRange(_) => {}
            mutation => {
                self.record();
                self.apply_mutation(mutation);
            }
        }
    }

    fn apply_mutation(&mut self, command: &EditorCommand) {
        match command {
            EditorCommand::ToggleBold => self.toggle_mark(MarkType::Bold),
            EditorCommand::ToggleItalic => self.toggle_mark(MarkType::Italic),
            EditorCommand::ToggleUnderline => self.toggle_mark(MarkType::Underline),
            EditorCommand::ToggleTaskList => self.toggle_list(ListKind::Task),
            EditorCommand::ToggleBulletList => self.toggle_list(ListKind::Bullet),
            EditorCommand::ToggleOrderedList => self.toggle_list(ListKind::Ordered),
            EditorCommand::ToggleHeading { level } => {
                self.state.block = if self.state.block == Block::Heading(*level) {
                    Block::Paragraph
                } else {
                    Block::Heading(*level)
                };
            }
            EditorCommand::SetParagraph => self.state.block = Block::Paragraph,
            EditorCommand::SetFontFamily(family) => {
                self.state.text_style.insert(attr::FONT_FAMILY, family.clone())
            }
            EditorCommand::SetFontSize(size) => {
                self.state.text_style.insert(attr::FONT_SIZE, size.clone())
            }
            EditorCommand::SetLineHeight(height) => {
                self.state.text_style.insert(attr::LINE_HEIGHT, height.clone())
            }
            EditorCommand::SetTextAlign(align) => self.state.align = *align,
            EditorCommand::SetHighlight { color } => {
                self.state.highlight.insert(attr::COLOR, color.clone());
                self.state.marks.insert(MarkType::Highlight);
            }
            EditorCommand::SetMark { mark, attrs } => match mark {
                MarkType::TextStyle => self.state.text_style.merge(attrs),
                MarkType::Highlight => self.state.highlight.merge(attrs),
                MarkType::Link => self.state.link.merge(attrs),
                other => {
                    self.state.marks.insert(*other);
                }
            },
            EditorCommand::SetLink { href } => {
                self.state.link.insert(attr::HREF, href.clone());
                self.state.marks.insert(MarkType::Link);
            }
            EditorCommand::SetImage { src } => self.state.images.push(src.clone()),
            EditorCommand::UnsetAllMarks => {
                self.state.marks.clear();
                self.state.text_style.clear();
                self.state.highlight.clear();
                self.state.link.clear();
            }
            EditorCommand::AddPendingComment => {
                self.state.marks.insert(MarkType::Comment);
            }
            EditorCommand::Focus
            | EditorCommand::Undo
            | EditorCommand::Redo
            | EditorCommand::ExtendMarkRange(_) => {}
        }
    }
}

impl EditorHandle for MemoryEditor {
    fn is_active(&self, query: &ActiveQuery) -> bool {
        match query {
            ActiveQuery::Mark(MarkType::TextStyle) => !self.state.text_style.is_empty(),
            ActiveQuery::Mark(mark) => self.state.marks.contains(mark),
            ActiveQuery::Node(NodeType::Paragraph) => self.state.block == Block::Paragraph,
            ActiveQuery::Node(NodeType::Heading) => {
                matches!(self.state.block, Block::Heading(_))
            }
            ActiveQuery::Node(NodeType::BulletList) => self.state.list == Some(ListKind::Bullet),
            ActiveQuery::Node(NodeType::OrderedList) => {
                self.state.list == Some(ListKind::Ordered)
            }
            ActiveQuery::Node(NodeType::TaskList) => self.state.list == Some(ListKind::Task),
            ActiveQuery::Heading(level) => self.state.block == Block::Heading(*level),
            ActiveQuery::TextAlign(align) => self.state.align == *align,
        }
    }

    fn attributes(&self, mark: MarkType) -> Attributes {
        match mark {
            MarkType::TextStyle => self.state.text_style.clone(),
            MarkType::Highlight => self.state.highlight.clone(),
            MarkType::Link => self.state.link.clone(),
            _ => Attributes::new(),
        }
    }

    fn run(&mut self, chain: CommandChain) {
        for command in chain.commands() {
            self.apply(command);
        }
        self.executed.push(chain);
        self.executed_total += 1;
        if self.executed.len() > EXECUTED_LIMIT {
            self.executed.remove(0);
        }
    }

    fn focus(&mut self) {
        self.focused = true;
        self.focus_requests += 1;
    }

    fn spellcheck(&self) -> Option<bool> {
        self.spellcheck
    }

    fn set_spellcheck(&mut self, enabled: bool) {
        self.spellcheck = Some(enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(editor: &mut MemoryEditor, command: EditorCommand) {
        editor.run(CommandChain::focused().then(command));
    }

    #[test]
    fn heading_toggle_returns_to_paragraph() {
        let mut editor = MemoryEditor::new();
        run(&mut editor, EditorCommand::ToggleHeading { level: 2 });
        assert!(editor.is_active(&ActiveQuery::Heading(2)));
        assert!(editor.is_active(&ActiveQuery::Node(NodeType::Heading)));

        run(&mut editor, EditorCommand::ToggleHeading { level: 2 });
        assert!(editor.is_active(&ActiveQuery::Node(NodeType::Paragraph)));
        assert!(!editor.is_active(&ActiveQuery::Node(NodeType::Heading)));
    }

    #[test]
    fn undo_and_redo_restore_snapshots() {
        let mut editor = MemoryEditor::new();
        run(&mut editor, EditorCommand::ToggleBold);
        assert!(editor.can_undo());

        run(&mut editor, EditorCommand::Undo);
        assert!(!editor.is_active(&ActiveQuery::Mark(MarkType::Bold)));
        assert!(editor.can_redo());

        run(&mut editor, EditorCommand::Redo);
        assert!(editor.is_active(&ActiveQuery::Mark(MarkType::Bold)));
    }

    #[test]
    fn new_mutation_clears_redo_stack() {
        let mut editor = MemoryEditor::new();
        run(&mut editor, EditorCommand::ToggleBold);
        run(&mut editor, EditorCommand::Undo);
        run(&mut editor, EditorCommand::ToggleItalic);
        assert!(!editor.can_redo());
    }

    #[test]
    fn lists_are_mutually_exclusive() {
        let mut editor = MemoryEditor::new();
        run(&mut editor, EditorCommand::ToggleBulletList);
        run(&mut editor, EditorCommand::ToggleOrderedList);
        assert!(!editor.is_active(&ActiveQuery::Node(NodeType::BulletList)));
        assert!(editor.is_active(&ActiveQuery::Node(NodeType::OrderedList)));
    }

    #[test]
    fn unset_all_marks_clears_styles_but_keeps_blocks() {
        let mut editor = MemoryEditor::new();
        run(&mut editor, EditorCommand::ToggleHeading { level: 1 });
        run(&mut editor, EditorCommand::ToggleBold);
        run(&mut editor, EditorCommand::SetFontFamily("Georgia".to_string()));
        run(&mut editor, EditorCommand::UnsetAllMarks);

        assert!(!editor.is_active(&ActiveQuery::Mark(MarkType::Bold)));
        assert!(editor.attributes(MarkType::TextStyle).is_empty());
        assert!(editor.is_active(&ActiveQuery::Heading(1)));
    }

    #[test]
    fn set_mark_merges_text_style_attributes() {
        let mut editor = MemoryEditor::new();
        run(&mut editor, EditorCommand::SetFontSize("18px".to_string()));
        run(
            &mut editor,
            EditorCommand::SetMark {
                mark: MarkType::TextStyle,
                attrs: Attributes::new().with(attr::COLOR, "#f44336"),
            },
        );
        let attrs = editor.attributes(MarkType::TextStyle);
        assert_eq!(attrs.get(attr::FONT_SIZE), Some("18px"));
        assert_eq!(attrs.get(attr::COLOR), Some("#f44336"));
    }

    #[test]
    fn executed_log_keeps_latest_chains_and_full_count() {
        let mut editor = MemoryEditor::new();
        for _ in 0..EXECUTED_LIMIT {
            run(&mut editor, EditorCommand::ToggleBold);
        }
        run(&mut editor, EditorCommand::ToggleItalic);
        run(&mut editor, EditorCommand::ToggleUnderline);

        assert_eq!(editor.executed().len(), EXECUTED_LIMIT);
        assert_eq!(editor.executed_count(), EXECUTED_LIMIT + 2);
        assert_eq!(
            editor.last_chain(),
            Some(&CommandChain::focused().then(EditorCommand::ToggleUnderline))
        );
    }

    #[test]
    fn focus_only_chain_does_not_touch_history() {
        let mut editor = MemoryEditor::new();
        editor.run(CommandChain::focused());
        assert!(editor.is_focused());
        assert!(!editor.can_undo());
    }
}
