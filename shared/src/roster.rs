use crate::models::{Character, CharacterDraft, CharacterId, DraftField};

/// Ordered list of characters plus the form that adds or edits them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    characters: Vec<Character>,
    draft: CharacterDraft,
    editing: Option<CharacterId>,
    last_id: Option<CharacterId>,
}

impl Roster {
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn draft(&self) -> &CharacterDraft {
        &self.draft
    }

    /// Id of the record the draft will overwrite on submit, if any.
    pub fn editing(&self) -> Option<CharacterId> {
        self.editing
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.draft.name = value,
            DraftField::Description => self.draft.description = value,
            DraftField::Personality => self.draft.personality = value,
        }
    }

    /// Commits the draft: updates the record under the edit cursor in place, or
    /// appends a new one stamped from `now_ms`. The draft is cleared either way.
    /// Returns the id that was written, or `None` when the cursor pointed at a
    /// record that no longer exists.
    pub fn submit_draft(&mut self, now_ms: i64) -> Option<CharacterId> {
        let draft = std::mem::take(&mut self.draft);

        if let Some(id) = self.editing.take() {
            let slot = self.characters.iter_mut().find(|c| c.id == id)?;
            *slot = draft.into_character(id);
            return Some(id);
        }

        let id = self.next_id(now_ms);
        self.last_id = Some(id);
        self.characters.push(draft.into_character(id));
        Some(id)
    }

    /// Points the edit cursor at `id` and loads the record into the draft.
    /// Unknown ids leave everything untouched.
    pub fn begin_edit(&mut self, id: CharacterId) -> bool {
        let Some(character) = self.get(id) else {
            return false;
        };
        self.draft = CharacterDraft::from_character(character);
        self.editing = Some(id);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft = CharacterDraft::default();
    }

    pub fn delete(&mut self, id: CharacterId) -> bool {
        let before = self.characters.len();
        self.characters.retain(|c| c.id != id);
        if self.editing == Some(id) {
            self.editing = None;
        }
        self.characters.len() != before
    }

    // Never reuses an id, even one whose record was deleted.
    fn next_id(&self, now_ms: i64) -> CharacterId {
        match self.last_id {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        }
    }
}
