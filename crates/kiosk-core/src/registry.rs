#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;

use std::collections::HashMap;

use crate::content::ContentSet;

/// Immutable mapping from lower-cased command name to canned output lines.
///
/// Built once from a [`ContentSet`] and never mutated afterwards. `clear` is
/// always present as a key mapping to the empty sequence, but the session
/// intercepts it before lookup so it never produces a transcript record.
pub struct CommandRegistry {
    entries: HashMap<String, Vec<String>>,
}

impl CommandRegistry {
    pub fn new(content: &ContentSet) -> CommandRegistry {
        let mut entries: HashMap<String, Vec<String>> = content
            .commands
            .iter()
            .map(|entry| (entry.name.trim().to_lowercase(), entry.lines.clone()))
            .collect();
        entries.entry("clear".to_string()).or_default();

        CommandRegistry { entries }
    }

    /// Looks up a normalized (trimmed, lower-cased) command name.
    pub fn resolve(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(|lines| lines.as_slice())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The fallback output for inputs that match no registry entry. Echoes
    /// the original untrimmed input on the first line.
    pub fn not_found(raw_input: &str) -> Vec<String> {
        vec![
            format!("Command not found: {raw_input}"),
            "Type \"help\" for available commands.".to_string(),
        ]
    }
}
