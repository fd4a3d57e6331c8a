use serde::{Deserialize, Serialize};

/// Identifier of a character record: the creation time in milliseconds,
/// bumped past the previous id when two records land in the same millisecond.
pub type CharacterId = i64;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub description: String,
    pub personality: String,
}

/// The character form as the user is typing it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDraft {
    pub name: String,
    pub description: String,
    pub personality: String,
}

impl CharacterDraft {
    pub fn from_character(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            description: character.description.clone(),
            personality: character.personality.clone(),
        }
    }

    pub fn into_character(self, id: CharacterId) -> Character {
        Character {
            id,
            name: self.name,
            description: self.description,
            personality: self.personality,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.description.is_empty() && self.personality.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
    Personality,
}
