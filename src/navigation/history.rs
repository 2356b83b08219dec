//! In-memory session history, modelled on the browser history stack.

use crate::routing::Location;

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<Location>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry after the cursor, dropping any forward entries.
    pub fn push(&mut self, location: Location) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }
        self.entries.push(location);
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Overwrite the current entry (or push the first one).
    pub fn replace(&mut self, location: Location) {
        match self.cursor {
            Some(cursor) => self.entries[cursor] = location,
            None => self.push(location),
        }
    }

    /// Move the cursor by `delta`. Out-of-range moves leave it untouched.
    pub fn go(&mut self, delta: isize) -> Option<&Location> {
        let cursor = self.cursor?;
        let target = cursor.checked_add_signed(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.cursor = Some(target);
        self.entries.get(target)
    }

    pub fn current(&self) -> Option<&Location> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
