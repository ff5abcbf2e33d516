use std::collections::BTreeSet;

/// The set of selected item identifiers for bulk operations.
///
/// Selection is orthogonal to filtering and paging; the controller prunes
/// it against the known id set whenever the backing collection changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Select exactly `all_ids`, unless the selection already equals that
    /// set, in which case it clears instead. This gives the strip's
    /// "Select All" / "Deselect All" dual-label behavior; a partial
    /// selection is replaced wholesale.
    pub fn select_all<I, S>(&mut self, all_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let all: BTreeSet<String> = all_ids.into_iter().map(Into::into).collect();
        if self.ids == all {
            self.ids.clear();
        } else {
            self.ids = all;
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Drop ids that are no longer present in the backing collection.
    pub fn retain_known(&mut self, known: &BTreeSet<&str>) {
        self.ids.retain(|id| known.contains(id.as_str()));
    }
}
