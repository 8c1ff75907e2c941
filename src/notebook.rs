//! The note collection and its persistence contract.
//!
//! The whole collection lives in memory and is rewritten to storage as one
//! JSON blob under a single fixed key on every mutation. Persistence
//! failures never surface to the caller: mutations always succeed in
//! memory, and a failed write only produces a warning on stderr. The raw
//! `load`/`persist` paths return errors so the suppression stays
//! observable in tests.

use std::path::Path;

use crate::entity::{Category, Client, Note};
use crate::error::Result;
use crate::storage::KvStore;

const NOTES_KEY: &str = "notes";

pub struct Notebook {
    notes: Vec<Note>,
    storage: KvStore,
}

impl Notebook {
    /// Open the notebook under `root` and restore the persisted collection.
    pub fn open(root: &Path) -> Result<Self> {
        let storage = KvStore::open(root)?;
        let mut notebook = Self {
            notes: Vec::new(),
            storage,
        };
        notebook.restore();
        Ok(notebook)
    }

    /// Replace the in-memory collection with the persisted one. A missing
    /// key, an unreadable store, and a malformed blob all leave the
    /// collection empty.
    pub fn restore(&mut self) {
        match self.load() {
            Ok(notes) => self.notes = notes,
            Err(e) => {
                eprintln!("Warning: failed to load saved notes: {}", e);
                self.notes = Vec::new();
            }
        }
    }

    /// Raw read path behind `restore()`. A missing key is an empty
    /// collection; storage and parse errors go to the caller.
    pub fn load(&self) -> Result<Vec<Note>> {
        match self.storage.get(NOTES_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Serialize the full collection and write it under the fixed key.
    pub fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.notes)?;
        self.storage.set(NOTES_KEY, &json)
    }

    fn persist_or_warn(&self) {
        if let Err(e) = self.persist() {
            eprintln!("Warning: failed to save notes: {}", e);
        }
    }

    /// Append a new note with a fresh id.
    pub fn create(
        &mut self,
        title: String,
        message: String,
        category: Option<Category>,
        client: Option<Client>,
    ) -> &Note {
        self.save_note(None, title, message, category, client)
    }

    /// Replace the note matching `id`: the old record is removed and a new
    /// record with the edited fields is appended under a fresh id. Edits
    /// therefore move a note to the end of the list and do not keep its
    /// original id. An unmatched `id` removes nothing; the new record is
    /// appended regardless.
    pub fn update(
        &mut self,
        id: i64,
        title: String,
        message: String,
        category: Option<Category>,
        client: Option<Client>,
    ) -> &Note {
        self.save_note(Some(id), title, message, category, client)
    }

    fn save_note(
        &mut self,
        replace_id: Option<i64>,
        title: String,
        message: String,
        category: Option<Category>,
        client: Option<Client>,
    ) -> &Note {
        if let Some(id) = replace_id {
            self.notes.retain(|n| n.id != id);
        }
        self.notes.push(Note::new(title, message, category, client));
        self.persist_or_warn();
        self.notes.last().unwrap()
    }

    /// Remove the note matching `id`. Missing ids are a no-op; the
    /// collection is persisted either way.
    pub fn delete(&mut self, id: i64) {
        self.notes.retain(|n| n.id != id);
        self.persist_or_warn();
    }

    /// Current collection in iteration order.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }
}
