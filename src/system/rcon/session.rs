// src/system/rcon/session.rs

use super::RconError;
use crate::models::{AiClass, DinoClass, Player, PlayerData, ServerDetails};

/// The typed remote operations the console can perform on a server.
///
/// Every call is synchronous: it sends one request and blocks until the reply
/// arrives or the transport gives up. Implementations must not retry.
pub trait RemoteSession {
    /// Fetches the server's name, population and feature flags.
    fn server_details(&mut self) -> Result<ServerDetails, RconError>;

    /// Shows `message` to every connected player.
    fn announce(&mut self, message: &str) -> Result<(), RconError>;

    /// Fetches the connected-player roster, in server order.
    fn player_list(&mut self) -> Result<Vec<Player>, RconError>;

    /// Fetches class, vitals and location of every connected player.
    fn player_data(&mut self) -> Result<Vec<PlayerData>, RconError>;

    /// Sends a private message to one player.
    fn direct_message(&mut self, player_id: &str, message: &str) -> Result<(), RconError>;

    /// Replaces the set of playable classes.
    fn update_playables(&mut self, classes: &[DinoClass]) -> Result<(), RconError>;

    /// Flips the whitelist and returns the new state.
    fn toggle_whitelist(&mut self) -> Result<bool, RconError>;

    /// Adds every identifier in one request.
    fn add_whitelist_ids(&mut self, ids: &[String]) -> Result<(), RconError>;

    /// Removes every identifier in one request.
    fn remove_whitelist_ids(&mut self, ids: &[String]) -> Result<(), RconError>;

    /// Disconnects a player, showing them `reason`.
    fn kick_player(&mut self, player_id: &str, reason: &str) -> Result<(), RconError>;

    /// Removes all corpses from the map.
    fn wipe_corpses(&mut self) -> Result<(), RconError>;

    /// Flips global chat and returns the new state.
    fn toggle_global_chat(&mut self) -> Result<bool, RconError>;

    /// Flips the humans feature and returns the new state.
    fn toggle_humans(&mut self) -> Result<bool, RconError>;

    /// Flips AI spawning and returns the new state.
    fn toggle_ai(&mut self) -> Result<bool, RconError>;

    /// Replaces the set of AI classes that may not spawn.
    fn disable_ai_classes(&mut self, classes: &[AiClass]) -> Result<(), RconError>;

    /// Sets the AI spawn density multiplier.
    fn set_ai_density(&mut self, density: f32) -> Result<(), RconError>;

    /// Sends an arbitrary command code with string arguments and returns the
    /// raw text reply.
    fn exec_command(&mut self, code: u8, args: &[String]) -> Result<String, RconError>;

    /// Releases the connection. Calling it more than once is harmless.
    fn close(&mut self) -> Result<(), RconError>;
}
