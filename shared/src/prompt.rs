use crate::models::{Character, ChatMessage, ChatRequest, Selection};

/// Renders the cast and the genre/tone line into the text sent upstream.
///
/// The cast block is left out entirely when there are no characters. An
/// incomplete selection renders blanks in place of the missing labels;
/// [`build_request`] is the gate that keeps such prompts from being sent.
pub fn assemble_prompt(characters: &[Character], selection: &Selection) -> String {
    let mut prompt = String::new();

    if !characters.is_empty() {
        let lines: Vec<String> = characters
            .iter()
            .map(|c| {
                format!(
                    "- Name: {}, Description: {}, Personality: {}",
                    c.name, c.description, c.personality
                )
            })
            .collect();
        prompt.push_str("Characters: \n");
        prompt.push_str(&lines.join("\n"));
        prompt.push('\n');
    }

    prompt.push_str(&format!(
        "This is a {} story in a {} tone.",
        selection.genre_label(),
        selection.tone_label()
    ));
    prompt
}

/// Builds the relay payload, or `None` while genre or tone is still unset.
pub fn build_request(characters: &[Character], selection: &Selection) -> Option<ChatRequest> {
    if !selection.is_complete() {
        return None;
    }
    Some(ChatRequest {
        messages: vec![ChatMessage::user(assemble_prompt(characters, selection))],
    })
}

pub fn character_summary(character: &Character) -> String {
    format!(
        "{}: This character is described as {} and has a personality of {}.",
        character.name, character.description, character.personality
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Genre, Tone};

    fn character(id: i64, name: &str, description: &str, personality: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            description: description.to_string(),
            personality: personality.to_string(),
        }
    }

    #[test]
    fn no_characters_renders_only_the_story_line() {
        let prompt = assemble_prompt(&[], &Selection::new(Genre::Fantasy, Tone::Happy));
        assert_eq!(prompt, "This is a Fantasy story in a Happy tone.");
    }

    #[test]
    fn characters_render_in_list_order() {
        let cast = [
            character(2, "Mara", "a detective", "stubborn"),
            character(1, "Ollie", "her cat", "lazy"),
        ];
        let prompt = assemble_prompt(&cast, &Selection::new(Genre::Mystery, Tone::Sarcastic));
        assert_eq!(
            prompt,
            "Characters: \n\
             - Name: Mara, Description: a detective, Personality: stubborn\n\
             - Name: Ollie, Description: her cat, Personality: lazy\n\
             This is a Mystery story in a Sarcastic tone."
        );
    }

    #[test]
    fn assembly_is_deterministic() {
        let cast = [character(1, "Zed", "pilot", "brave")];
        let selection = Selection::new(Genre::SciFi, Tone::Funny);
        assert_eq!(
            assemble_prompt(&cast, &selection),
            assemble_prompt(&cast, &selection)
        );
    }

    #[test]
    fn incomplete_selection_still_renders() {
        let prompt = assemble_prompt(&[], &Selection::default());
        assert_eq!(prompt, "This is a  story in a  tone.");
    }

    #[test]
    fn request_is_withheld_until_selection_is_complete() {
        let cast = [character(1, "Zed", "pilot", "brave")];
        assert!(build_request(&cast, &Selection::default()).is_none());
        assert!(
            build_request(
                &cast,
                &Selection {
                    genre: Some(Genre::Romance),
                    tone: None,
                }
            )
            .is_none()
        );
        assert!(
            build_request(
                &cast,
                &Selection {
                    genre: None,
                    tone: Some(Tone::Sad),
                }
            )
            .is_none()
        );
    }

    #[test]
    fn request_carries_one_user_message() {
        let selection = Selection::new(Genre::Romance, Tone::Sad);
        let req = build_request(&[], &selection).unwrap();
        assert_eq!(
            req.messages,
            vec![ChatMessage::user("This is a Romance story in a Sad tone.")]
        );
    }

    #[test]
    fn summary_sentence() {
        let c = character(1, "Mara", "a detective", "stubborn");
        assert_eq!(
            character_summary(&c),
            "Mara: This character is described as a detective and has a personality of stubborn."
        );
    }
}
