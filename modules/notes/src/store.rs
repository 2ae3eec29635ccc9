//! NoteStore — in-memory, insertion-ordered note collection
//!
//! Owns the notes and the id allocator. Callers serialize access (the route
//! layer keeps the store behind a mutex); every operation here is a plain
//! in-memory mutation with no I/O.

use notes_types::{Note, NoteInput};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NoteError {
    #[error("Note not found.")]
    NotFound,
    #[error("Title and content are required.")]
    InvalidInput,
}

pub type NoteResult<T> = Result<T, NoteError>;

/// Monotonic id counter. A consumed value is never handed out again.
#[derive(Debug)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Peek at the id the next `allocate` will return
    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn allocate(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

pub struct NoteStore {
    notes: Vec<Note>,
    ids: IdAllocator,
}

impl NoteStore {
    /// Empty store; the first note gets id 1
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            ids: IdAllocator::starting_at(1),
        }
    }

    /// Store pre-populated with the three sample notes (ids 1-3)
    pub fn seeded() -> Self {
        let seed = [
            ("Grocery List", "Milk, Bread, Eggs, Butter"),
            ("Homework", "Finish Node.js assignment"),
            ("Books to Read", "Clean Code, Eloquent JavaScript"),
        ];

        let mut store = Self::new();
        for (title, content) in seed {
            let id = store.ids.allocate();
            store.notes.push(Note {
                id,
                title: title.to_string(),
                content: content.to_string(),
            });
        }
        store
    }

    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn next_id(&self) -> u64 {
        self.ids.peek()
    }

    pub fn get(&self, id: u64) -> NoteResult<&Note> {
        self.notes
            .iter()
            .find(|n| n.id == id)
            .ok_or(NoteError::NotFound)
    }

    /// Validate, then allocate an id and append. A rejected input consumes no id.
    pub fn create(&mut self, input: NoteInput) -> NoteResult<&Note> {
        let (title, content) = validate(input)?;

        let id = self.ids.allocate();
        log::debug!("[NOTES] Created note {}", id);

        let idx = self.notes.len();
        self.notes.push(Note { id, title, content });
        Ok(&self.notes[idx])
    }

    /// Existence is checked before the body is validated.
    pub fn update(&mut self, id: u64, input: NoteInput) -> NoteResult<&Note> {
        let idx = self.position(id)?;
        let (title, content) = validate(input)?;

        let note = &mut self.notes[idx];
        note.title = title;
        note.content = content;
        log::debug!("[NOTES] Updated note {}", id);

        Ok(&*note)
    }

    pub fn delete(&mut self, id: u64) -> NoteResult<()> {
        let idx = self.position(id)?;
        self.notes.remove(idx);
        log::debug!("[NOTES] Deleted note {}", id);
        Ok(())
    }

    fn position(&self, id: u64) -> NoteResult<usize> {
        self.notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(NoteError::NotFound)
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(input: NoteInput) -> NoteResult<(String, String)> {
    match (input.title, input.content) {
        (Some(title), Some(content)) if !title.is_empty() && !content.is_empty() => {
            Ok((title, content))
        }
        _ => Err(NoteError::InvalidInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &NoteStore) -> Vec<u64> {
        store.list().iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_seeded_store() {
        let store = NoteStore::seeded();
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.next_id(), 4);
        assert_eq!(store.get(1).unwrap().title, "Grocery List");
        assert_eq!(store.get(3).unwrap().content, "Clean Code, Eloquent JavaScript");
    }

    #[test]
    fn test_empty_store_starts_at_one() {
        let mut store = NoteStore::new();
        assert!(store.list().is_empty());
        let note = store.create(NoteInput::new("a", "b")).unwrap();
        assert_eq!(note.id, 1);
    }

    #[test]
    fn test_create_then_get() {
        let mut store = NoteStore::seeded();
        let created = store.create(NoteInput::new("X", "Y")).unwrap().clone();
        assert_eq!(created, Note { id: 4, title: "X".to_string(), content: "Y".to_string() });
        let id = created.id;

        let note = store.get(id).unwrap();
        assert_eq!(note.title, "X");
        assert_eq!(note.content, "Y");
        assert_eq!(ids(&store), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_ids_never_reused_after_delete() {
        let mut store = NoteStore::new();
        let mut seen = Vec::new();

        for i in 0..5 {
            let id = store.create(NoteInput::new(format!("t{}", i), "c")).unwrap().id;
            seen.push(id);
            if i % 2 == 0 && i != 4 {
                store.delete(id).unwrap();
            }
        }

        // Deleting the newest note must not roll the counter back
        let last = *seen.last().unwrap();
        assert_eq!(store.list().last().map(|n| n.id), Some(last));
        store.delete(last).unwrap();
        let next = store.create(NoteInput::new("after", "delete")).unwrap().id;
        assert_eq!(next, last + 1);
        seen.push(next);

        assert!(seen.windows(2).all(|w| w[0] < w[1]), "ids not increasing: {:?}", seen);
    }

    #[test]
    fn test_rejected_create_consumes_no_id() {
        let mut store = NoteStore::seeded();

        let cases = [
            NoteInput::default(),
            NoteInput::new("", "content"),
            NoteInput::new("title", ""),
            NoteInput {
                title: Some("title".to_string()),
                content: None,
            },
        ];
        for input in cases {
            assert_eq!(store.create(input).unwrap_err(), NoteError::InvalidInput);
        }

        assert_eq!(store.len(), 3);
        assert_eq!(store.next_id(), 4);
        assert_eq!(store.create(NoteInput::new("X", "Y")).unwrap().id, 4);
    }

    #[test]
    fn test_update_keeps_id_and_position() {
        let mut store = NoteStore::seeded();
        let note = store.update(2, NoteInput::new("Z", "W")).unwrap();
        assert_eq!(note.id, 2);
        assert_eq!(note.title, "Z");
        assert_eq!(note.content, "W");
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.next_id(), 4);
    }

    #[test]
    fn test_update_missing_note_checked_before_body() {
        let mut store = NoteStore::seeded();
        assert_eq!(
            store.update(99, NoteInput::default()).unwrap_err(),
            NoteError::NotFound
        );
        assert_eq!(
            store.update(1, NoteInput::new("", "x")).unwrap_err(),
            NoteError::InvalidInput
        );
        // Failed update leaves the note untouched
        assert_eq!(store.get(1).unwrap().title, "Grocery List");
    }

    #[test]
    fn test_delete_then_get_not_found() {
        let mut store = NoteStore::seeded();
        store.delete(2).unwrap();
        assert_eq!(store.get(2).unwrap_err(), NoteError::NotFound);
        assert_eq!(store.delete(2).unwrap_err(), NoteError::NotFound);
        assert_eq!(ids(&store), vec![1, 3]);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(NoteError::NotFound.to_string(), "Note not found.");
        assert_eq!(
            NoteError::InvalidInput.to_string(),
            "Title and content are required."
        );
    }
}
