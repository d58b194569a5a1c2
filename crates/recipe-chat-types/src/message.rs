use serde::{Deserialize, Serialize};
use crate::recipe::Recipe;

/// Who authored a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn label(&self) -> &str {
        match self {
            Sender::User => "You",
            Sender::Assistant => "Chef",
        }
    }
}

/// A single entry in the conversation transcript.
///
/// Entries are never edited after they are appended; the session controller
/// only hands out clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub text: String,
    pub sender: Sender,
    /// Only assistant entries from a successful turn carry recipes
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub recipes: Vec<Recipe>,
}

impl TranscriptEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            recipes: Vec::new(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Assistant,
            recipes: Vec::new(),
        }
    }

    pub fn assistant_with_recipes(text: impl Into<String>, recipes: Vec<Recipe>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Assistant,
            recipes,
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn has_recipes(&self) -> bool {
        !self.recipes.is_empty()
    }
}

/// Structured reply from the chat service. Both fields may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub recipes: Option<Vec<Recipe>>,
}

impl ChatReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            recipes: None,
        }
    }

    pub fn with_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.recipes = Some(recipes);
        self
    }
}
