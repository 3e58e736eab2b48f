//! End-to-end toolbar and document-menu scenarios through the public facade.

use quire::document_menu::{DocumentMenu, DocumentMutation, MenuAction};
use quire::documents::{document_url, DocumentId};
use quire::editor::{attr, read_attribute, MarkType, TextAlign};
use quire::host::HostActions;
use quire::toolbar::{
    current_align, current_font_size, current_heading_label, ToolbarButton, Toolbar,
    ALIGN_OPTIONS, HEADING_OPTIONS, LINE_HEIGHT_OPTIONS,
};
use quire::{Config, MemoryEditor};

#[derive(Default)]
struct RecordingHost {
    prints: usize,
    opened: Vec<String>,
    picks: usize,
}

impl HostActions for RecordingHost {
    fn print(&mut self) {
        self.prints += 1;
    }

    fn open_in_new_tab(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }

    fn pick_image(&mut self) {
        self.picks += 1;
    }
}

#[test]
fn formatting_a_selection_end_to_end() {
    let mut editor = MemoryEditor::new();
    let mut toolbar = Toolbar::new();
    let mut host = RecordingHost::default();

    HEADING_OPTIONS[2].apply(editor.handle());
    ToolbarButton::Bold.click(editor.handle(), &mut host);
    ALIGN_OPTIONS[1].apply(editor.handle());
    LINE_HEIGHT_OPTIONS[3].apply(editor.handle());

    toolbar.font_size.begin_edit(editor.view());
    toolbar.font_size.set_input("96");
    assert!(toolbar.font_size.input_flagged());
    assert_eq!(toolbar.font_size.commit(editor.handle()).ok(), Some(72));

    toolbar.text_color.apply(editor.handle(), "#2196f3");
    toolbar.link.toggle(editor.view());
    *toolbar.link.value_mut() = "https://example.com".to_string();
    toolbar.link.apply(editor.handle());

    assert_eq!(current_heading_label(editor.view()), "Heading 2");
    assert!(ToolbarButton::Bold.is_active(editor.view()));
    assert_eq!(current_align(editor.view()), TextAlign::Center);
    assert!(LINE_HEIGHT_OPTIONS[3].is_selected(editor.view()));
    assert_eq!(current_font_size(editor.view()), "72");
    assert_eq!(
        read_attribute(editor.view(), MarkType::Link, attr::HREF).as_deref(),
        Some("https://example.com")
    );
    assert!(editor.can_undo());
    assert_eq!(host.prints, 0);
}

#[test]
fn toolbar_without_editor_is_inert() {
    let mut toolbar = Toolbar::new();
    let mut host = RecordingHost::default();

    ToolbarButton::Italic.click(None, &mut host);
    ToolbarButton::Print.click(None, &mut host);
    assert!(!HEADING_OPTIONS[1].apply(None));
    assert!(!toolbar.text_color.apply(None, "#000000"));
    assert_eq!(current_heading_label(None), "Normal");
    assert_eq!(host.prints, 1);

    toolbar.image.request_upload(&mut host);
    assert_eq!(host.picks, 1);
    assert!(!toolbar.image.complete_upload(None, None));
}

#[test]
fn document_menu_routes_to_host_and_mutations() {
    let config = Config::default();
    let id = DocumentId::new("doc-42");
    let mut menu = DocumentMenu::new(id.clone(), "Quarterly plan");
    let mut host = RecordingHost::default();

    let disposition = menu.select(MenuAction::OpenInNewTab, |id| {
        host.open_in_new_tab(&document_url(&config.document_base_url, id))
    });
    assert!(!disposition.propagate);
    assert_eq!(
        host.opened,
        vec!["http://localhost:3000/documents/doc-42".to_string()]
    );

    menu.select(MenuAction::Remove, |_| {});
    assert_eq!(menu.confirm(), Some(DocumentMutation::Remove { id }));
}
