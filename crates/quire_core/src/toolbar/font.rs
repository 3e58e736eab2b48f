//! Font family dropdown and the font-size stepper.

use crate::editor::{
    attr, dispatch, read_attribute, CommandChain, EditorCommand, EditorHandle, MarkType,
};
use crate::error::QuireError;
use tracing::debug;

pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_FONT_SIZE: u32 = 16;
pub const MIN_FONT_SIZE: u32 = 8;
pub const MAX_FONT_SIZE: u32 = 72;

/// Font family options as (label, value).
pub const FONT_FAMILIES: &[(&str, &str)] = &[
    ("Arial", "Arial"),
    ("Times New Roman", "Times New Roman"),
    ("Courier New", "Courier New"),
    ("Comic Sans", "Comic Sans"),
    ("Georgia", "Georgia"),
    ("Serif", "Serif"),
    ("Verdana", "Verdana"),
];

/// Font family shown on the dropdown trigger.
pub fn current_font_family(editor: Option<&dyn EditorHandle>) -> String {
    read_attribute(editor, MarkType::TextStyle, attr::FONT_FAMILY)
        .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string())
}

/// Whether the family option `value` is the one applied at the selection.
pub fn font_family_selected(editor: Option<&dyn EditorHandle>, value: &str) -> bool {
    read_attribute(editor, MarkType::TextStyle, attr::FONT_FAMILY).as_deref() == Some(value)
}

/// Applies a font family.
pub fn apply_font_family(editor: Option<&mut dyn EditorHandle>, value: &str) -> bool {
    dispatch(
        editor,
        CommandChain::focused().then(EditorCommand::SetFontFamily(value.to_string())),
    )
}

/// Parses the integer prefix of `input`, the way browsers read `"18px"`.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit.
///
/// # Returns
/// `None` when no digit follows the optional sign.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }
    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Clamps a proposed size into `[MIN_FONT_SIZE, MAX_FONT_SIZE]`.
pub fn clamp_font_size(size: i64) -> u32 {
    size.clamp(i64::from(MIN_FONT_SIZE), i64::from(MAX_FONT_SIZE)) as u32
}

/// Font size at the selection, without its `px` suffix.
pub fn current_font_size(editor: Option<&dyn EditorHandle>) -> String {
    read_attribute(editor, MarkType::TextStyle, attr::FONT_SIZE)
        .map(|size| size.trim_end_matches("px").to_string())
        .filter(|size| !size.is_empty())
        .unwrap_or_else(|| DEFAULT_FONT_SIZE.to_string())
}

fn current_font_size_value(editor: Option<&dyn EditorHandle>) -> i64 {
    parse_leading_int(&current_font_size(editor)).unwrap_or(i64::from(DEFAULT_FONT_SIZE))
}

/// Font-size stepper with an inline text field.
#[derive(Debug, Clone, Default)]
pub struct FontSizeControl {
    editing: bool,
    input: String,
}

impl FontSizeControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Switches the size label into a text field seeded with the current size.
    pub fn begin_edit(&mut self, editor: Option<&dyn EditorHandle>) {
        self.editing = true;
        self.input = current_font_size(editor);
    }

    /// Whether the typed text is highlighted as invalid: non-numeric or
    /// outside the allowed range.
    pub fn input_flagged(&self) -> bool {
        match parse_leading_int(&self.input) {
            None => true,
            Some(size) => size < i64::from(MIN_FONT_SIZE) || size > i64::from(MAX_FONT_SIZE),
        }
    }

    /// Commits the typed text (blur).
    ///
    /// Numeric input is clamped and applied, leaving edit mode. Non-numeric
    /// input issues no command and stays in edit mode, flagged.
    ///
    /// # Errors
    /// [`QuireError::InvalidFontSize`] when the text has no numeric prefix.
    pub fn commit(&mut self, editor: Option<&mut dyn EditorHandle>) -> Result<u32, QuireError> {
        let Some(proposed) = parse_leading_int(&self.input) else {
            debug!(input = %self.input, "rejecting non-numeric font size");
            return Err(QuireError::InvalidFontSize(self.input.clone()));
        };
        Ok(self.apply(editor, proposed))
    }

    /// Commits the typed text and hands focus back to the editor (Enter).
    ///
    /// A valid size refocuses through the chain's focus step; rejected input
    /// still returns focus to the editor.
    ///
    /// # Errors
    /// Same as [`FontSizeControl::commit`].
    pub fn commit_and_focus(
        &mut self,
        editor: Option<&mut dyn EditorHandle>,
    ) -> Result<u32, QuireError> {
        match parse_leading_int(&self.input) {
            Some(proposed) => Ok(self.apply(editor, proposed)),
            None => {
                if let Some(editor) = editor {
                    editor.focus();
                }
                Err(QuireError::InvalidFontSize(self.input.clone()))
            }
        }
    }

    pub fn can_increment(&self, editor: Option<&dyn EditorHandle>) -> bool {
        current_font_size_value(editor) < i64::from(MAX_FONT_SIZE)
    }

    pub fn can_decrement(&self, editor: Option<&dyn EditorHandle>) -> bool {
        current_font_size_value(editor) > i64::from(MIN_FONT_SIZE)
    }

    /// Steps the current size up by one within the clamp.
    pub fn increment(&mut self, editor: Option<&mut dyn EditorHandle>) -> u32 {
        self.step(editor, 1)
    }

    /// Steps the current size down by one within the clamp.
    pub fn decrement(&mut self, editor: Option<&mut dyn EditorHandle>) -> u32 {
        self.step(editor, -1)
    }

    fn step(&mut self, editor: Option<&mut dyn EditorHandle>, delta: i64) -> u32 {
        let current = current_font_size_value(editor.as_deref());
        self.apply(editor, current + delta)
    }

    fn apply(&mut self, editor: Option<&mut dyn EditorHandle>, proposed: i64) -> u32 {
        let size = clamp_font_size(proposed);
        dispatch(
            editor,
            CommandChain::focused().then(EditorCommand::SetFontSize(format!("{}px", size))),
        );
        self.input = size.to_string();
        self.editing = false;
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::MemoryEditor;

    fn editor_with_size(size: &str) -> MemoryEditor {
        let mut editor = MemoryEditor::new();
        editor.run(CommandChain::focused().then(EditorCommand::SetFontSize(size.to_string())));
        editor
    }

    #[test]
    fn parse_leading_int_reads_numeric_prefix() {
        assert_eq!(parse_leading_int("18"), Some(18));
        assert_eq!(parse_leading_int("  18px"), Some(18));
        assert_eq!(parse_leading_int("12.5"), Some(12));
        assert_eq!(parse_leading_int("-4"), Some(-4));
        assert_eq!(parse_leading_int("+9"), Some(9));
        assert_eq!(parse_leading_int("px18"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn out_of_range_commits_nearest_bound() {
        for (input, expected) in [("0", 8), ("-20", 8), ("7", 8), ("73", 72), ("1000", 72)] {
            let mut editor = MemoryEditor::new();
            let mut control = FontSizeControl::new();
            control.begin_edit(editor.view());
            control.set_input(input);

            let committed = control.commit(editor.handle()).expect("numeric input");

            assert_eq!(committed, expected, "input: {}", input);
            assert_eq!(current_font_size(editor.view()), expected.to_string());
            assert!(!control.is_editing());
        }
    }

    #[test]
    fn non_numeric_input_issues_no_command_and_keeps_value() {
        let mut editor = editor_with_size("20px");
        let before = editor.executed().len();
        let mut control = FontSizeControl::new();
        control.begin_edit(editor.view());
        control.set_input("large");

        assert!(matches!(
            control.commit(editor.handle()),
            Err(QuireError::InvalidFontSize(_))
        ));
        assert_eq!(editor.executed().len(), before);
        assert_eq!(current_font_size(editor.view()), "20");
        assert!(control.is_editing());
        assert!(control.input_flagged());
        assert_eq!(control.input(), "large");
    }

    #[test]
    fn typed_out_of_range_is_flagged_before_commit() {
        let mut control = FontSizeControl::new();
        control.set_input("99");
        assert!(control.input_flagged());
        control.set_input("12");
        assert!(!control.input_flagged());
    }

    #[test]
    fn begin_edit_seeds_input_from_editor() {
        let editor = editor_with_size("24px");
        let mut control = FontSizeControl::new();
        control.begin_edit(editor.view());
        assert_eq!(control.input(), "24");
    }

    #[test]
    fn steps_stay_within_bounds() {
        let mut editor = editor_with_size("72px");
        let mut control = FontSizeControl::new();
        assert!(!control.can_increment(editor.view()));
        assert_eq!(control.increment(editor.handle()), 72);
        assert_eq!(control.decrement(editor.handle()), 71);

        let mut editor = editor_with_size("8px");
        assert!(!control.can_decrement(editor.view()));
        assert_eq!(control.decrement(editor.handle()), 8);
        assert_eq!(control.increment(editor.handle()), 9);
    }

    #[test]
    fn default_size_is_sixteen() {
        let mut editor = MemoryEditor::new();
        assert_eq!(current_font_size(editor.view()), "16");
        let mut control = FontSizeControl::new();
        assert_eq!(control.increment(editor.handle()), 17);
    }

    #[test]
    fn enter_commits_and_refocuses() {
        let mut editor = MemoryEditor::new();
        let mut control = FontSizeControl::new();
        control.begin_edit(editor.view());
        control.set_input("30");
        editor.blur();
        assert_eq!(control.commit_and_focus(editor.handle()).ok(), Some(30));
        assert!(editor.is_focused());
    }

    #[test]
    fn enter_with_invalid_input_refocuses_without_command() {
        let mut editor = MemoryEditor::new();
        let mut control = FontSizeControl::new();
        control.begin_edit(editor.view());
        control.set_input("x");
        assert!(control.commit_and_focus(editor.handle()).is_err());
        assert_eq!(editor.focus_requests(), 1);
        assert!(editor.executed().is_empty());
    }

    #[test]
    fn missing_editor_still_validates_locally() {
        let mut control = FontSizeControl::new();
        control.begin_edit(None);
        assert_eq!(control.input(), "16");
        control.set_input("abc");
        assert!(control.commit(None).is_err());
        control.set_input("40");
        assert_eq!(control.commit(None).ok(), Some(40));
    }

    #[test]
    fn font_family_defaults_and_applies() {
        let mut editor = MemoryEditor::new();
        assert_eq!(current_font_family(editor.view()), "Arial");
        assert!(apply_font_family(editor.handle(), "Georgia"));
        assert_eq!(current_font_family(editor.view()), "Georgia");
        assert!(font_family_selected(editor.view(), "Georgia"));
        assert!(!font_family_selected(editor.view(), "Arial"));
        assert!(!apply_font_family(None, "Verdana"));
    }
}
