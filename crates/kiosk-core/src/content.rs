#[cfg(test)]
#[path = "content_test.rs"]
mod tests;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::errors::ContentError;

/// One named command and the canned lines it prints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
    pub name: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

impl CommandEntry {
    pub fn new(name: &str, lines: &[&str]) -> CommandEntry {
        CommandEntry {
            name: name.to_string(),
            lines: lines.iter().map(|line| line.to_string()).collect(),
        }
    }
}

/// The data half of a widget variant: the welcome banner plus the full
/// command vocabulary. Variants differ only in content, so they are shipped
/// as data and loaded from a YAML file rather than branched on in code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSet {
    #[serde(default)]
    pub banner: Vec<String>,
    #[serde(default)]
    pub commands: Vec<CommandEntry>,
}

impl Default for ContentSet {
    fn default() -> ContentSet {
        ContentSet {
            banner: lines(&[
                "Welcome to my personal terminal!",
                "",
                "Type \"help\" to see available commands.",
                "Use the arrow keys to navigate command history.",
                "",
            ]),
            commands: vec![
                CommandEntry::new(
                    "help",
                    &[
                        "Available commands:",
                        "  about      - Learn more about me",
                        "  interests  - My interests and hobbies",
                        "  links      - Useful links and projects",
                        "  contact    - Get in touch with me",
                        "  clear      - Clear the terminal",
                        "  help       - Show this help message",
                    ],
                ),
                CommandEntry::new(
                    "about",
                    &[
                        "Hello! I build software and keep this little terminal",
                        "around because I like interfaces that stay out of the way.",
                        "",
                        "Feel free to explore using the commands below!",
                    ],
                ),
                CommandEntry::new(
                    "interests",
                    &[
                        "My interests & hobbies:",
                        "",
                        "  - Photography",
                        "  - Hiking",
                        "  - Science fiction",
                        "  - Synthesizers",
                        "",
                        "And always curious about new tools and technologies!",
                    ],
                ),
                CommandEntry::new(
                    "links",
                    &[
                        "Useful links:",
                        "",
                        "  - Projects: https://github.com/example",
                        "  - Photos: https://photos.example.com/gallery",
                        "  - Writing: https://blog.example.com",
                        "",
                        "Check them out and say hi!",
                    ],
                ),
                CommandEntry::new(
                    "contact",
                    &[
                        "Get in touch:",
                        "",
                        "  - Email: mailto:hello@example.com",
                        "  - Fediverse: https://hachyderm.io/@example",
                        "",
                        "Open to new ideas!",
                    ],
                ),
                CommandEntry::new("clear", &[]),
            ],
        }
    }
}

impl ContentSet {
    /// Loads a content set from a YAML file and validates it.
    pub fn load(path: &Path) -> Result<ContentSet, ContentError> {
        let text = fs::read_to_string(path).map_err(|err| ContentError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        let content: ContentSet =
            serde_yaml::from_str(&text).map_err(|err| ContentError::Parse {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;

        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for entry in &self.commands {
            let key = entry.name.trim().to_lowercase();
            if key.is_empty() {
                return Err(ContentError::Validation(
                    "command with an empty name".to_string(),
                ));
            }
            if key.split_whitespace().count() > 1 {
                return Err(ContentError::Validation(format!(
                    "command name '{}' contains whitespace",
                    entry.name
                )));
            }
            if !seen.insert(key.clone()) {
                return Err(ContentError::Validation(format!(
                    "duplicate command name '{key}'"
                )));
            }
        }

        Ok(())
    }
}

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|line| line.to_string()).collect()
}
