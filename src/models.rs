// src/models.rs

//! Plain data exchanged between the command handlers and the remote session.

use std::fmt;

// --- CLASS VOCABULARIES ---

/// A fixed, game-defined set of names that commands validate arguments against.
pub trait Vocabulary: Copy + fmt::Display + 'static {
    /// Every member, in the order the game lists them.
    const ALL: &'static [Self];

    /// The exact spelling the server expects.
    fn as_str(self) -> &'static str;

    /// Looks up a member by its exact (case-sensitive) spelling.
    fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.as_str() == name)
    }
}

macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[allow(missing_docs)]
        pub enum $name {
            $($variant),+
        }

        impl Vocabulary for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    /// A playable dinosaur class.
    DinoClass {
        Beipiaosaurus,
        Carnotaurus,
        Ceratosaurus,
        Deinosuchus,
        Diabloceratops,
        Dilophosaurus,
        Dryosaurus,
        Gallimimus,
        Herrerasaurus,
        Hypsilophodon,
        Maiasaura,
        Omniraptor,
        Pachycephalosaurus,
        Pteranodon,
        Stegosaurus,
        Tenontosaurus,
        Triceratops,
        Troodon,
        Tyrannosaurus,
    }
}

vocabulary! {
    /// A creature the server can spawn as AI.
    AiClass {
        Compsognathus,
        Pterodactylus,
        Boar,
        Deer,
        Goat,
        Seaturtle,
    }
}

/// Turns a blueprint name such as `BP_Stegosaurus_C` into `Stegosaurus`.
/// Unknown names are returned with only the blueprint affixes removed.
pub fn display_class_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let core = trimmed.strip_prefix("BP_").unwrap_or(trimmed);
    let core = core.strip_suffix("_C").unwrap_or(core);
    DinoClass::ALL
        .iter()
        .find(|class| class.as_str().eq_ignore_ascii_case(core))
        .map(|class| class.as_str().to_string())
        .unwrap_or_else(|| core.to_string())
}

// --- SERVER STATE ---

/// The answer to a server details request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerDetails {
    /// The name shown in the server browser.
    pub name: String,
    /// Players connected right now.
    pub current_players: u32,
    /// Player slots.
    pub max_players: u32,
    /// Length of the day cycle.
    pub day_length_minutes: u32,
    /// Length of the night cycle.
    pub night_length_minutes: u32,
    /// Whether joining requires a password.
    pub has_password: bool,
    /// Whether global chat is on.
    pub global_chat_enabled: bool,
    /// Whether the join queue is on.
    pub queue_enabled: bool,
    /// Whether only whitelisted players may join.
    pub whitelist_enabled: bool,
}

/// One entry of the connected-player roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// The stable identifier the server uses for this account.
    pub id: String,
    /// The display name. Not unique.
    pub name: String,
}

impl Player {
    /// Convenience constructor, mostly for tests and stubs.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A world-space position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[allow(missing_docs)]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// The detailed status of a connected player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerData {
    /// Same identifier as in [`Player::id`].
    pub id: String,
    /// The display name.
    pub name: String,
    /// The class as reported by the server (may be a blueprint name).
    pub class: String,
    /// Growth percentage. All percentages are in `0..=100`.
    pub growth: u32,
    /// Health percentage.
    pub health: u32,
    /// Stamina percentage.
    pub stamina: u32,
    /// Hunger percentage.
    pub hunger: u32,
    /// Thirst percentage.
    pub thirst: u32,
    /// Where the player was when the data was taken.
    pub location: Location,
}

// --- COMMAND LINE ---

/// One line of operator input split into a keyword and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// The first token, lowercased.
    pub keyword: String,
    /// The remaining tokens, untouched.
    pub args: Vec<String>,
}

impl CommandLine {
    /// Trims the line and splits it on single spaces. Empty fragments left by
    /// runs of spaces are dropped. Returns `None` when nothing remains.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line
            .trim()
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(str::to_string);
        let keyword = tokens.next()?.to_lowercase();
        Some(Self {
            keyword,
            args: tokens.collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_lowercases_only_the_keyword() {
        let line = CommandLine::parse("  KICK Alice Be Nice  ").unwrap();
        assert_eq!(line.keyword, "kick");
        assert_eq!(line.args, vec!["Alice", "Be", "Nice"]);
    }

    #[test]
    fn test_command_line_empty_input_yields_nothing() {
        assert!(CommandLine::parse("").is_none());
        assert!(CommandLine::parse("   \t ").is_none());
    }

    #[test]
    fn test_command_line_drops_fragments_between_double_spaces() {
        let line = CommandLine::parse("announce  hello   world").unwrap();
        assert_eq!(line.args, vec!["hello", "world"]);
    }

    #[test]
    fn test_vocabulary_parse_is_case_sensitive() {
        assert_eq!(DinoClass::parse("Stegosaurus"), Some(DinoClass::Stegosaurus));
        assert_eq!(DinoClass::parse("stegosaurus"), None);
        assert_eq!(AiClass::parse("Boar"), Some(AiClass::Boar));
        assert_eq!(AiClass::parse("Stegosaurus"), None);
    }

    #[test]
    fn test_display_class_name_strips_blueprint_affixes() {
        assert_eq!(display_class_name("BP_Stegosaurus_C"), "Stegosaurus");
        assert_eq!(display_class_name("BP_TYRANNOSAURUS_C"), "Tyrannosaurus");
        assert_eq!(display_class_name("Hypsilophodon"), "Hypsilophodon");
        assert_eq!(display_class_name("BP_Mystery_C"), "Mystery");
    }
}
