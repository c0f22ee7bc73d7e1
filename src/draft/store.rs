//! In-session store of generated draft variants

use chrono::Local;
use thiserror::Error;

use super::{DraftRevision, EmailDraft};

/// Store accessed with an index outside the current contents.
///
/// Happens when a caller iterates with a count cached from before a
/// `replace_all`; iteration bounds must come from the live store length.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("draft index {index} out of range (store holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered, index-addressable collection of the session's draft variants.
///
/// Replaced wholesale on each batch generation; individual drafts are
/// mutated in place by rewrites. Owned by exactly one session.
#[derive(Debug, Default)]
pub struct VariantStore {
    drafts: Vec<EmailDraft>,
}

impl VariantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmailDraft> {
        self.drafts.iter()
    }

    /// Discard the current contents and install a fresh batch.
    pub fn replace_all(&mut self, drafts: Vec<EmailDraft>) {
        self.drafts = drafts;
    }

    pub fn get(&self, index: usize) -> Result<&EmailDraft, StoreError> {
        self.drafts.get(index).ok_or(StoreError::IndexOutOfRange {
            index,
            len: self.drafts.len(),
        })
    }

    /// Archive the draft's current content onto its history, then overwrite
    /// it with the rewritten subject and body.
    pub fn apply_rewrite(
        &mut self,
        index: usize,
        subject: String,
        body: String,
    ) -> Result<(), StoreError> {
        let len = self.drafts.len();
        let draft = self
            .drafts
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;

        draft.history.push(DraftRevision {
            subject: std::mem::replace(&mut draft.subject, subject),
            body: std::mem::replace(&mut draft.body, body),
            revised_at: Local::now(),
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(subjects: &[&str]) -> Vec<EmailDraft> {
        subjects
            .iter()
            .map(|s| EmailDraft::new(s.to_string(), format!("{s}の本文")))
            .collect()
    }

    #[test]
    fn test_replace_all_installs_batch_in_order() {
        let mut store = VariantStore::new();
        store.replace_all(batch(&["A", "B", "C"]));

        assert_eq!(store.len(), 3);
        for (i, subject) in ["A", "B", "C"].iter().enumerate() {
            assert_eq!(store.get(i).unwrap().subject, *subject);
        }
        assert_eq!(
            store.get(3),
            Err(StoreError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_replace_all_discards_prior_contents() {
        let mut store = VariantStore::new();
        store.replace_all(batch(&["A", "B", "C"]));
        store.replace_all(batch(&["X"]));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().subject, "X");
        // An index valid before the replacement is now stale.
        assert_eq!(
            store.get(2),
            Err(StoreError::IndexOutOfRange { index: 2, len: 1 })
        );
    }

    #[test]
    fn test_apply_rewrite_archives_previous_content() {
        let mut store = VariantStore::new();
        store.replace_all(batch(&["A"]));

        store
            .apply_rewrite(0, "A2".to_string(), "二回目".to_string())
            .unwrap();
        store
            .apply_rewrite(0, "A3".to_string(), "三回目".to_string())
            .unwrap();

        let draft = store.get(0).unwrap();
        assert_eq!(draft.subject, "A3");
        assert_eq!(draft.body, "三回目");

        // History holds one snapshot per rewrite, oldest first, each equal
        // to the content immediately before that rewrite.
        assert_eq!(draft.history.len(), 2);
        assert_eq!(draft.history[0].subject, "A");
        assert_eq!(draft.history[0].body, "Aの本文");
        assert_eq!(draft.history[1].subject, "A2");
        assert_eq!(draft.history[1].body, "二回目");
    }

    #[test]
    fn test_earlier_history_entries_are_not_touched_by_later_rewrites() {
        let mut store = VariantStore::new();
        store.replace_all(batch(&["A"]));

        store
            .apply_rewrite(0, "A2".to_string(), "b2".to_string())
            .unwrap();
        let first_snapshot = store.get(0).unwrap().history[0].clone();

        store
            .apply_rewrite(0, "A3".to_string(), "b3".to_string())
            .unwrap();
        assert_eq!(store.get(0).unwrap().history[0], first_snapshot);
    }

    #[test]
    fn test_apply_rewrite_out_of_range_leaves_store_unchanged() {
        let mut store = VariantStore::new();
        store.replace_all(batch(&["A"]));

        let result = store.apply_rewrite(5, "X".to_string(), "Y".to_string());
        assert_eq!(result, Err(StoreError::IndexOutOfRange { index: 5, len: 1 }));

        let draft = store.get(0).unwrap();
        assert_eq!(draft.subject, "A");
        assert!(draft.history.is_empty());
    }

    #[test]
    fn test_empty_store() {
        let store = VariantStore::new();
        assert!(store.is_empty());
        assert_eq!(
            store.get(0),
            Err(StoreError::IndexOutOfRange { index: 0, len: 0 })
        );
    }
}
