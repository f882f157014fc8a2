/// Checked rows of one tab.
///
/// Selected names are always a subset of the tab's current listing, kept in
/// the order they were clicked. Download Selected fetches them in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    available: Vec<String>,
    selected: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the listing and drop every selection
    pub fn reset(&mut self, available: Vec<String>) {
        self.available = available;
        self.selected.clear();
    }

    /// Toggle `name`. Names outside the listing are ignored.
    pub fn toggle(&mut self, name: &str) -> bool {
        if !self.available.iter().any(|n| n == name) {
            tracing::debug!("Ignoring toggle of unlisted mod {}", name);
            return false;
        }
        if let Some(pos) = self.selected.iter().position(|n| n == name) {
            self.selected.remove(pos);
        } else {
            self.selected.push(name.to_string());
        }
        true
    }

    /// Select everything, or clear when everything is already selected
    pub fn toggle_all(&mut self) {
        if self.all_selected() {
            self.selected.clear();
        } else {
            self.selected = self.available.clone();
        }
    }

    pub fn all_selected(&self) -> bool {
        !self.available.is_empty() && self.selected.len() == self.available.len()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|n| n == name)
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn toggle_keeps_click_order() {
        let mut selection = Selection::new();
        selection.reset(listing(&["a.jar", "b.jar", "c.jar"]));

        assert!(selection.toggle("c.jar"));
        assert!(selection.toggle("a.jar"));
        assert_eq!(selection.selected(), ["c.jar", "a.jar"]);

        assert!(selection.toggle("c.jar"));
        assert!(selection.toggle("b.jar"));
        assert!(selection.toggle("c.jar"));
        assert_eq!(selection.selected(), ["a.jar", "b.jar", "c.jar"]);
    }

    #[test]
    fn unlisted_names_are_rejected() {
        let mut selection = Selection::new();
        selection.reset(listing(&["a.jar"]));

        assert!(!selection.toggle("ghost.jar"));
        assert!(selection.is_empty());
    }

    #[test]
    fn reset_clears_selection() {
        let mut selection = Selection::new();
        selection.reset(listing(&["a.jar", "b.jar"]));
        selection.toggle("a.jar");

        selection.reset(listing(&["a.jar", "b.jar"]));
        assert!(selection.is_empty());
        assert!(!selection.is_selected("a.jar"));
    }

    #[test]
    fn toggle_all_selects_then_clears() {
        let mut selection = Selection::new();
        selection.reset(listing(&["a.jar", "b.jar"]));
        selection.toggle("b.jar");

        selection.toggle_all();
        assert!(selection.all_selected());
        assert_eq!(selection.len(), 2);

        selection.toggle_all();
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_all_on_empty_listing_is_noop() {
        let mut selection = Selection::new();
        selection.toggle_all();
        assert!(selection.is_empty());
        assert!(!selection.all_selected());
    }
}
