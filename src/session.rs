//! Transient form and selection state.
//!
//! A `Session` owns the notebook plus the edit buffer behind the note
//! form, and is the only surface the presentation layer drives. The form
//! moves between two states: closed, and open with either a fresh buffer
//! (creating) or a buffer populated from an existing note (editing).
//! Commit and delete always land back in the closed state.

use std::path::Path;

use crate::entity::{Category, Client, Note};
use crate::error::Result;
use crate::notebook::Notebook;

/// The edit buffer behind the note form. `selected` carries the id of the
/// note open for editing; `None` means the form is creating a new note.
#[derive(Debug, Default)]
pub struct Form {
    pub selected: Option<i64>,
    pub title: String,
    pub message: String,
    pub category: Option<Category>,
    pub client: Option<Client>,
    pub visible: bool,
}

pub struct Session {
    notebook: Notebook,
    form: Form,
}

impl Session {
    pub fn open(root: &Path) -> Result<Self> {
        Ok(Self {
            notebook: Notebook::open(root)?,
            form: Form::default(),
        })
    }

    /// Current collection in iteration order.
    pub fn list(&self) -> &[Note] {
        self.notebook.list()
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Show the form with cleared fields for a brand-new note.
    pub fn open_for_create(&mut self) {
        self.form = Form {
            visible: true,
            ..Form::default()
        };
    }

    /// Show the form populated from an existing note.
    pub fn open_for_edit(&mut self, note: &Note) {
        self.form = Form {
            selected: Some(note.id),
            title: note.title.clone(),
            message: note.message.clone(),
            category: note.category.clone(),
            client: note.client.clone(),
            visible: true,
        };
    }

    /// Hide the form and drop the buffered edits without persisting.
    pub fn close(&mut self) {
        self.form = Form::default();
    }

    pub fn set_title(&mut self, title: String) {
        self.form.title = title;
    }

    pub fn set_message(&mut self, message: String) {
        self.form.message = message;
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.form.category = category;
    }

    pub fn set_client(&mut self, client: Option<Client>) {
        self.form.client = client;
    }

    /// Save whatever the buffer holds: create when nothing is selected,
    /// replace the selected note otherwise. Clears and hides the form and
    /// returns the id of the saved note. Empty fields commit as-is; there
    /// is no validation.
    pub fn commit(&mut self) -> i64 {
        let form = std::mem::take(&mut self.form);
        let saved = match form.selected {
            Some(id) => self.notebook.update(
                id,
                form.title,
                form.message,
                form.category,
                form.client,
            ),
            None => self
                .notebook
                .create(form.title, form.message, form.category, form.client),
        };
        saved.id
    }

    /// Delete the selected note, then behave as `close()`. With no
    /// selection this is a no-op. Returns the deleted id, if any.
    pub fn request_delete(&mut self) -> Option<i64> {
        let selected = self.form.selected;
        if let Some(id) = selected {
            self.notebook.delete(id);
        }
        self.close();
        selected
    }
}
