//! # Form State
//!
//! Create and edit forms share one type. The edit form additionally carries
//! the `cod` of the product being edited.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Nombre      [Labial rojo█        ]  ◄ focus  │   editor mirrors the
//! │ Categoria   [labios              ]           │   focused field; every
//! │ ...                                          │   keystroke is written
//! │ Estado      < Activo >                       │   back to the draft
//! └──────────────────────────────────────────────┘
//! ```

use beauty_core::{DraftField, Product, ProductDraft};

use crate::tui::widgets::InputBuffer;

/// Draft text, focused field and (edit only) the target product.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    draft: ProductDraft,
    focus: DraftField,
    editor: InputBuffer,
    target: Option<i64>,
}

impl Default for FormState {
    fn default() -> Self {
        let draft = ProductDraft::default();
        let focus = DraftField::Name;
        let editor = InputBuffer::with_text(draft.field(focus));
        FormState {
            draft,
            focus,
            editor,
            target: None,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to an empty draft with no target.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Loads `product` for editing.
    pub fn load(&mut self, product: &Product) {
        self.draft = ProductDraft::from_product(product);
        self.target = Some(product.cod);
        self.focus_field(DraftField::Name);
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn target(&self) -> Option<i64> {
        self.target
    }

    pub fn focus(&self) -> DraftField {
        self.focus
    }

    pub fn editor(&self) -> &InputBuffer {
        &self.editor
    }

    pub fn focus_field(&mut self, field: DraftField) {
        self.focus = field;
        self.editor = InputBuffer::with_text(self.draft.field(field));
    }

    pub fn focus_next(&mut self) {
        self.focus_field(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.focus_field(self.focus.prev());
    }

    /// Types `c` into the focused field.
    ///
    /// Numeric fields only take digits, `.` and `-`; the status field is
    /// changed with [`toggle_status`](Self::toggle_status) instead.
    pub fn insert_char(&mut self, c: char) {
        if self.focus == DraftField::Status {
            return;
        }
        if self.focus.is_numeric() && !(c.is_ascii_digit() || c == '.' || c == '-') {
            return;
        }
        self.editor.insert_char(c);
        self.sync_field();
    }

    pub fn backspace(&mut self) {
        self.editor.backspace();
        self.sync_field();
    }

    pub fn delete(&mut self) {
        self.editor.delete();
        self.sync_field();
    }

    pub fn clear_field(&mut self) {
        self.editor.clear();
        self.sync_field();
    }

    pub fn cursor_left(&mut self) {
        self.editor.move_left();
    }

    pub fn cursor_right(&mut self) {
        self.editor.move_right();
    }

    pub fn cursor_home(&mut self) {
        self.editor.move_home();
    }

    pub fn cursor_end(&mut self) {
        self.editor.move_end();
    }

    pub fn toggle_status(&mut self) {
        self.draft.toggle_status();
        if self.focus == DraftField::Status {
            self.editor = InputBuffer::with_text(self.draft.field(DraftField::Status));
        }
    }

    /// Direct field write, used by tests and programmatic fills.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        *self.draft.field_mut(field) = value.into();
        if field == self.focus {
            self.editor = InputBuffer::with_text(self.draft.field(field));
        }
    }

    fn sync_field(&mut self) {
        *self.draft.field_mut(self.focus) = self.editor.text().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::product;

    #[test]
    fn test_typing_writes_focused_field() {
        let mut form = FormState::new();
        for c in "Rimel".chars() {
            form.insert_char(c);
        }
        form.focus_next();
        form.insert_char('o');
        form.insert_char('j');
        form.backspace();

        assert_eq!(form.draft().name, "Rimel");
        assert_eq!(form.draft().category, "o");
        assert_eq!(form.focus(), DraftField::Category);
    }

    #[test]
    fn test_numeric_fields_filter_letters() {
        let mut form = FormState::new();
        form.focus_field(DraftField::SalePrice);
        for c in "1x2.5".chars() {
            form.insert_char(c);
        }
        assert_eq!(form.draft().sale_price, "12.5");
    }

    #[test]
    fn test_status_only_toggles() {
        let mut form = FormState::new();
        form.focus_field(DraftField::Status);
        form.insert_char('z');
        assert_eq!(form.draft().status, "Activo");
        form.toggle_status();
        assert_eq!(form.draft().status, "Inactivo");
        assert_eq!(form.editor().text(), "Inactivo");
    }

    #[test]
    fn test_load_and_reset() {
        let mut form = FormState::new();
        form.load(&product(7, "Sombra"));
        assert_eq!(form.target(), Some(7));
        assert_eq!(form.draft().name, "Sombra");
        assert_eq!(form.editor().text(), "Sombra");

        form.reset();
        assert_eq!(form, FormState::default());
        assert_eq!(form.target(), None);
    }
}
