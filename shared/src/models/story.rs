use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Fantasy,
    Mystery,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
}

impl Genre {
    pub const ALL: [Genre; 4] = [Genre::Fantasy, Genre::Mystery, Genre::Romance, Genre::SciFi];

    pub fn label(&self) -> &'static str {
        match self {
            Genre::Fantasy => "Fantasy",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Genre::Fantasy => "🧙",
            Genre::Mystery => "🕵️",
            Genre::Romance => "💑",
            Genre::SciFi => "🚀",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Happy,
    Sad,
    Sarcastic,
    Funny,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Happy, Tone::Sad, Tone::Sarcastic, Tone::Funny];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Happy => "Happy",
            Tone::Sad => "Sad",
            Tone::Sarcastic => "Sarcastic",
            Tone::Funny => "Funny",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Tone::Happy => "😊",
            Tone::Sad => "😢",
            Tone::Sarcastic => "😏",
            Tone::Funny => "😂",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Genre and tone picked for the next passage. `None` means not chosen yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub genre: Option<Genre>,
    pub tone: Option<Tone>,
}

impl Selection {
    pub fn new(genre: Genre, tone: Tone) -> Self {
        Self {
            genre: Some(genre),
            tone: Some(tone),
        }
    }

    /// Generation stays disabled until both fields are chosen.
    pub fn is_complete(&self) -> bool {
        self.genre.is_some() && self.tone.is_some()
    }

    pub fn genre_label(&self) -> &'static str {
        self.genre.map(|g| g.label()).unwrap_or_default()
    }

    pub fn tone_label(&self) -> &'static str {
        self.tone.map(|t| t.label()).unwrap_or_default()
    }
}
