// src/core/resolver.rs

//! Player-name to identifier resolution against the live roster.

use crate::system::rcon::{RconError, RemoteSession};

/// The outcome of looking a name up in the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The identifier of the first connected player with that name.
    Resolved(String),
    /// Nobody with that name is connected.
    NotFound,
}

impl Resolution {
    /// The resolved identifier, or the input itself when the name is unknown.
    pub fn or_literal(self, name: &str) -> String {
        match self {
            Self::Resolved(id) => id,
            Self::NotFound => name.to_string(),
        }
    }

    /// Whether the lookup matched a connected player.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Resolves `name` to a player identifier.
///
/// The roster is fetched fresh on every call because players come and go
/// between commands. Matching is exact and case-sensitive; the first player
/// in roster order wins, duplicates are not detected.
pub fn resolve(session: &mut dyn RemoteSession, name: &str) -> Result<Resolution, RconError> {
    let roster = session.player_list()?;
    let resolution = roster
        .into_iter()
        .find(|player| player.name == name)
        .map_or(Resolution::NotFound, |player| Resolution::Resolved(player.id));

    log::debug!("Resolved player name '{}' to {:?}", name, resolution);
    Ok(resolution)
}
