// The user's per-run choice of tools and versions.
// Entries keep the order in which they were recorded, so dispatch follows catalog order.

/// Version token for tools that offer no explicit version choice.
pub const LATEST: &str = "latest";

/// Mapping from tool name to chosen version token, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<(String, String)>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a choice. A second choice for the same tool replaces the first
    /// and keeps its original position.
    pub fn insert(&mut self, tool: &str, version: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == tool) {
            Some(entry) => entry.1 = version.to_string(),
            None => self.entries.push((tool.to_string(), version.to_string())),
        }
    }

    #[cfg(test)]
    pub fn get(&self, tool: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == tool)
            .map(|(_, version)| version.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, version)| (name.as_str(), version.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_follows_insertion_order() {
        let mut selection = Selection::new();
        selection.insert("terraform", "1.4.6");
        selection.insert("aws-cli", LATEST);
        selection.insert("consul", "1.15.2");

        let order: Vec<&str> = selection.iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["terraform", "aws-cli", "consul"]);
    }

    #[test]
    fn reinserting_replaces_version_in_place() {
        let mut selection = Selection::new();
        selection.insert("vault", "1.13.3");
        selection.insert("go", "1.20.5");
        selection.insert("vault", "1.12.7");

        assert_eq!(selection.len(), 2);
        assert_eq!(selection.get("vault"), Some("1.12.7"));
        assert_eq!(selection.iter().next(), Some(("vault", "1.12.7")));
    }
}
