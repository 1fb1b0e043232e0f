//! Response Entity
//!
//! Phrase tiles and the ordered list that owns the current selection.

use serde::{Deserialize, Serialize};

use super::error::BoardError;

/// A phrase tile on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEntry {
    /// Unique identifier, assigned by the owning list
    #[serde(default)]
    pub id: u32,
    /// Spoken and displayed text
    pub text: String,
    /// Default entries are always present and cannot be deleted
    #[serde(default)]
    pub is_default: bool,
}

impl ResponseEntry {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_default: false,
        }
    }

    pub fn default_entry(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_default: true,
        }
    }
}

/// Ordered response list plus the selected index.
///
/// Invariants: defaults come first and are never removed, the list never
/// grows past `capacity`, and `selected < len()` whenever the list is
/// non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseList {
    entries: Vec<ResponseEntry>,
    selected: usize,
    next_id: u32,
    capacity: usize,
}

impl ResponseList {
    /// Create a list seeded with the given default phrases
    pub fn new<S: AsRef<str>>(defaults: &[S], capacity: usize) -> Self {
        let mut list = Self {
            entries: Vec::with_capacity(capacity),
            selected: 0,
            next_id: 1,
            capacity,
        };
        for text in defaults {
            let id = list.allocate_id();
            list.entries.push(ResponseEntry::default_entry(id, text.as_ref()));
        }
        list
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn entries(&self) -> &[ResponseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Entry under the selection marker
    pub fn current(&self) -> Option<&ResponseEntry> {
        self.entries.get(self.selected)
    }

    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    /// Set the selection to `index mod len`.
    ///
    /// Negative indices wrap from the end, so callers can pass a
    /// pre-computed `selected - 1`.
    pub fn select(&mut self, index: isize) -> usize {
        if self.entries.is_empty() {
            self.selected = 0;
            return 0;
        }
        let len = self.entries.len() as isize;
        self.selected = index.rem_euclid(len) as usize;
        self.selected
    }

    pub fn next(&mut self) -> usize {
        self.select(self.selected as isize + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.select(self.selected as isize - 1)
    }

    /// Append a custom phrase (trimmed)
    pub fn add(&mut self, text: &str) -> Result<&ResponseEntry, BoardError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BoardError::EmptyText);
        }
        if self.is_full() {
            return Err(BoardError::Full(self.capacity));
        }
        let id = self.allocate_id();
        self.entries.push(ResponseEntry::new(id, text));
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Remove a custom phrase, keeping the selection on the same entry
    /// when an earlier one is removed
    pub fn remove(&mut self, index: usize) -> Result<ResponseEntry, BoardError> {
        match self.entries.get(index) {
            None => return Err(BoardError::OutOfRange(index)),
            Some(entry) if entry.is_default => return Err(BoardError::DefaultEntry(index)),
            Some(_) => {}
        }
        let removed = self.entries.remove(index);
        if index < self.selected {
            self.selected -= 1;
        } else if self.selected >= self.entries.len() {
            self.selected = self.entries.len().saturating_sub(1);
        }
        Ok(removed)
    }

    /// Replace all custom entries.
    ///
    /// Incoming entries flagged as defaults are skipped (the defaults are
    /// already seeded), blank texts are dropped, ids are reassigned and the
    /// list is capped at capacity.
    pub fn replace_custom<I>(&mut self, incoming: I)
    where
        I: IntoIterator<Item = ResponseEntry>,
    {
        self.entries.retain(|e| e.is_default);
        for entry in incoming {
            if entry.is_default {
                continue;
            }
            let text = entry.text.trim();
            if text.is_empty() {
                continue;
            }
            if self.is_full() {
                log::warn!("[BOARD] dropping '{}': list is at capacity", text);
                continue;
            }
            let id = self.allocate_id();
            self.entries.push(ResponseEntry::new(id, text));
        }
        if self.selected >= self.entries.len() {
            self.selected = self.entries.len().saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> ResponseList {
        ResponseList::new(&["Yes", "No"], 8)
    }

    #[test]
    fn test_defaults_seeded() {
        let list = board();
        assert_eq!(list.texts(), vec!["Yes", "No"]);
        assert!(list.entries().iter().all(|e| e.is_default));
        assert_eq!(list.entries()[0].id, 1);
        assert_eq!(list.entries()[1].id, 2);
        assert_eq!(list.selected(), 0);
    }

    #[test]
    fn test_add_until_capacity() {
        for n in 2..=8 {
            let mut list = board();
            for i in 0..(n - 2) {
                list.add(&format!("Phrase {}", i)).expect("add should succeed");
            }
            assert_eq!(list.len(), n);
        }

        let mut list = board();
        for i in 0..6 {
            list.add(&format!("Phrase {}", i)).unwrap();
        }
        assert_eq!(list.add("One more"), Err(BoardError::Full(8)));
        assert_eq!(list.len(), 8);
    }

    #[test]
    fn test_add_blank_is_rejected() {
        let mut list = board();
        assert_eq!(list.add(""), Err(BoardError::EmptyText));
        assert_eq!(list.add("   "), Err(BoardError::EmptyText));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_add_trims_and_assigns_ids() {
        let mut list = board();
        let entry = list.add("  Maybe ").unwrap().clone();
        assert_eq!(entry.text, "Maybe");
        assert_eq!(entry.id, 3);
        assert!(!entry.is_default);
        assert_eq!(list.add("Wait").unwrap().id, 4);
    }

    #[test]
    fn test_remove_default_is_rejected() {
        let mut list = board();
        list.add("Maybe").unwrap();
        assert_eq!(list.remove(0), Err(BoardError::DefaultEntry(0)));
        assert_eq!(list.remove(1), Err(BoardError::DefaultEntry(1)));
        assert_eq!(list.remove(7), Err(BoardError::OutOfRange(7)));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_navigation_is_cyclic() {
        let mut list = board();
        list.add("Maybe").unwrap();
        assert_eq!(list.next(), 1);
        assert_eq!(list.next(), 2);
        assert_eq!(list.next(), 0);
        assert_eq!(list.prev(), 2);
        assert_eq!(list.select(-1), 2);
        assert_eq!(list.select(7), 1);
    }

    #[test]
    fn test_remove_before_selection_keeps_entry_selected() {
        let mut list = board();
        list.add("A").unwrap();
        list.add("B").unwrap();
        list.select(3);
        assert_eq!(list.current().unwrap().text, "B");

        list.remove(2).unwrap();
        assert_eq!(list.selected(), 2);
        assert_eq!(list.current().unwrap().text, "B");
    }

    #[test]
    fn test_remove_selected_last_clamps() {
        let mut list = board();
        list.add("A").unwrap();
        list.select(2);
        list.remove(2).unwrap();
        assert_eq!(list.selected(), 1);
        assert_eq!(list.current().unwrap().text, "No");
    }

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Add,
        Remove(usize),
        Next,
        Prev,
        Select(isize),
    }

    fn apply(list: &mut ResponseList, op: Op) {
        match op {
            Op::Add => {
                let _ = list.add("Phrase");
            }
            Op::Remove(index) => {
                let _ = list.remove(index);
            }
            Op::Next => {
                list.next();
            }
            Op::Prev => {
                list.prev();
            }
            Op::Select(index) => {
                list.select(index);
            }
        }
    }

    /// Apply every sequence of `ops` up to `depth` long, checking the list
    /// after each step
    fn explore(list: &ResponseList, depth: usize, ops: &[Op], trail: &mut Vec<Op>) {
        if depth == 0 {
            return;
        }
        for &op in ops {
            let mut next = list.clone();
            apply(&mut next, op);
            trail.push(op);
            assert!(next.selected() < next.len(), "selection escaped after {:?}", trail);
            assert!(next.len() <= next.capacity(), "over capacity after {:?}", trail);
            assert!(next.entries()[..2].iter().all(|e| e.is_default), "defaults moved after {:?}", trail);
            explore(&next, depth - 1, ops, trail);
            trail.pop();
        }
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut ops = vec![Op::Add, Op::Next, Op::Prev, Op::Select(-1), Op::Select(3), Op::Select(8)];
        ops.extend((0..8).map(Op::Remove));

        explore(&board(), 5, &ops, &mut Vec::new());

        let mut near_full = board();
        for i in 0..5 {
            near_full.add(&format!("Phrase {}", i)).unwrap();
        }
        near_full.select(6);
        explore(&near_full, 5, &ops, &mut Vec::new());
    }

    #[test]
    fn test_replace_custom_reseeds() {
        let mut list = board();
        list.add("Old").unwrap();
        list.select(2);

        list.replace_custom(vec![
            ResponseEntry::default_entry(1, "Yes"),
            ResponseEntry::default_entry(2, "No"),
            ResponseEntry::new(9, "Maybe"),
            ResponseEntry::new(9, "  "),
            ResponseEntry::new(12, "Later"),
        ]);

        assert_eq!(list.texts(), vec!["Yes", "No", "Maybe", "Later"]);
        let ids: Vec<u32> = list.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
        assert_eq!(list.selected(), 2);
    }

    #[test]
    fn test_replace_custom_caps_at_capacity() {
        let mut list = ResponseList::new(&["Yes", "No"], 4);
        list.replace_custom((0..5).map(|i| ResponseEntry::new(0, format!("P{}", i))));
        assert_eq!(list.texts(), vec!["Yes", "No", "P0", "P1"]);
    }

    #[test]
    fn test_legacy_shape_deserializes() {
        let entries: Vec<ResponseEntry> =
            serde_json::from_str(r#"[{"text":"Maybe"},{"id":4,"text":"Stop","isDefault":false}]"#).unwrap();
        assert_eq!(entries[0], ResponseEntry::new(0, "Maybe"));
        assert_eq!(entries[1].id, 4);
    }
}
