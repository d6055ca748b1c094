use serde::{Deserialize, Serialize};

/// Flight ids the user starred, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesState {
    #[serde(default)]
    pub ids: Vec<String>,
}

impl FavoritesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the id when absent, removes it when present. Returns the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.ids.retain(|x| x != id);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }
}
