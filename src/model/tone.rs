use std::fmt;

/// Narrative voice the user can ask for.
/// "No preference" is modelled as `Option::<Tone>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Mystical,
    Dark,
    Poetic,
    Mythic,
    Hopeful,
    Melancholic,
}

/// Used by Restyle when no tone is selected.
pub const DEFAULT_RESTYLE_TONE: Tone = Tone::Poetic;

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Mystical,
        Tone::Dark,
        Tone::Poetic,
        Tone::Mythic,
        Tone::Hopeful,
        Tone::Melancholic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Mystical => "Mystical",
            Tone::Dark => "Dark",
            Tone::Poetic => "Poetic",
            Tone::Mythic => "Mythic",
            Tone::Hopeful => "Hopeful",
            Tone::Melancholic => "Melancholic",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
