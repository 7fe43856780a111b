use std::collections::BTreeSet;

/// Ids checked for batch deletion. Survives page changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<String>,
}

impl SelectionSet {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn set(&mut self, id: &str, selected: bool) {
        if selected {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    /// Selects every id on the page, or deselects them all when they are already selected.
    pub fn toggle_all<'a>(&mut self, page_ids: impl IntoIterator<Item = &'a str> + Clone) {
        let all_selected = page_ids.clone().into_iter().all(|id| self.ids.contains(id));
        for id in page_ids {
            self.set(id, !all_selected);
        }
    }

    pub fn all_selected<'a>(&self, page_ids: impl IntoIterator<Item = &'a str>) -> bool {
        let mut any = false;
        for id in page_ids {
            if !self.ids.contains(id) {
                return false;
            }
            any = true;
        }
        any
    }

    pub fn remove_many<'a>(&mut self, ids: impl IntoIterator<Item = &'a String>) {
        for id in ids {
            self.ids.remove(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
