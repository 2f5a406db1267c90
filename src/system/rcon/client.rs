// src/system/rcon/client.rs

use super::{
    RconError, RemoteSession,
    protocol::{self, CommandCode},
};
use crate::models::{AiClass, DinoClass, Player, PlayerData, ServerDetails, Vocabulary};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;

/// A blocking RCON connection. One request is in flight at a time.
///
/// Replies are framed by their `NUL` terminator, not by read boundaries:
/// the reader keeps whatever arrived past the terminator for the next reply.
#[derive(Debug)]
pub struct RconClient {
    reader: Option<BufReader<TcpStream>>,
    address: String,
}

impl RconClient {
    /// Opens a TCP connection. `timeout` bounds both the connect and every reply.
    pub fn connect(address: &str, timeout: Duration) -> Result<Self, RconError> {
        let socket_addr = address
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| RconError::Protocol(format!("'{}' did not resolve", address)))?;

        let stream = TcpStream::connect_timeout(&socket_addr, timeout).map_err(RconError::from_io)?;
        stream.set_read_timeout(Some(timeout))?;
        stream.set_write_timeout(Some(timeout))?;
        stream.set_nodelay(true)?;
        log::debug!("Connected to {} ({})", address, socket_addr);

        Ok(Self {
            reader: Some(BufReader::new(stream)),
            address: address.to_string(),
        })
    }

    /// Logs in. The server answers with a text containing `Accepted` on success.
    pub fn authenticate(&mut self, password: &str) -> Result<(), RconError> {
        let reply = self.round_trip(&protocol::encode_auth(password))?;
        if reply.contains("Accepted") {
            log::debug!("Authenticated with {}", self.address);
            Ok(())
        } else {
            Err(RconError::AuthRejected(reply.trim().to_string()))
        }
    }

    fn round_trip(&mut self, frame: &[u8]) -> Result<String, RconError> {
        let reader = self.reader.as_mut().ok_or(RconError::Disconnected)?;
        log::trace!("-> {}", hex::encode(frame));
        reader.get_mut().write_all(frame).map_err(RconError::from_io)?;

        let raw = read_reply(reader)?;
        log::trace!("<- {}", hex::encode(&raw));
        Ok(protocol::decode_reply(&raw))
    }

    fn command(&mut self, code: CommandCode, args: &[String]) -> Result<String, RconError> {
        self.round_trip(&protocol::encode_command(code.byte(), args))
    }

    fn toggle(&mut self, code: CommandCode) -> Result<bool, RconError> {
        let reply = self.command(code, &[])?;
        protocol::parse_toggle_state(&reply)
    }
}

/// Reads one reply up to and excluding its `NUL` terminator, across as many
/// reads as it takes. Replies longer than [`protocol::MAX_REPLY_LEN`] are
/// rejected.
fn read_reply<R: BufRead>(reader: &mut R) -> Result<Vec<u8>, RconError> {
    let limit = u64::try_from(protocol::MAX_REPLY_LEN)
        .unwrap_or(u64::MAX)
        .saturating_add(1);
    let mut raw = Vec::new();
    reader
        .by_ref()
        .take(limit)
        .read_until(0x00, &mut raw)
        .map_err(RconError::from_io)?;

    match raw.last() {
        None => Err(RconError::Disconnected),
        Some(&0x00) => {
            raw.pop();
            Ok(raw)
        }
        Some(_) if raw.len() > protocol::MAX_REPLY_LEN => Err(RconError::Protocol(format!(
            "reply exceeds {} bytes without a terminator",
            protocol::MAX_REPLY_LEN
        ))),
        // The peer closed the connection in the middle of a reply.
        Some(_) => Err(RconError::Disconnected),
    }
}

fn class_names<C: Vocabulary>(classes: &[C]) -> Vec<String> {
    classes.iter().map(|class| class.as_str().to_string()).collect()
}

impl RemoteSession for RconClient {
    fn server_details(&mut self) -> Result<ServerDetails, RconError> {
        let reply = self.command(CommandCode::ServerDetails, &[])?;
        protocol::parse_server_details(&reply)
    }

    fn announce(&mut self, message: &str) -> Result<(), RconError> {
        self.command(CommandCode::Announce, &[message.to_string()])
            .map(drop)
    }

    fn player_list(&mut self) -> Result<Vec<Player>, RconError> {
        let reply = self.command(CommandCode::PlayerList, &[])?;
        protocol::parse_player_list(&reply)
    }

    fn player_data(&mut self) -> Result<Vec<PlayerData>, RconError> {
        let reply = self.command(CommandCode::PlayerData, &[])?;
        protocol::parse_player_data(&reply)
    }

    fn direct_message(&mut self, player_id: &str, message: &str) -> Result<(), RconError> {
        self.command(
            CommandCode::DirectMessage,
            &[player_id.to_string(), message.to_string()],
        )
        .map(drop)
    }

    fn update_playables(&mut self, classes: &[DinoClass]) -> Result<(), RconError> {
        self.command(CommandCode::UpdatePlayables, &class_names(classes))
            .map(drop)
    }

    fn toggle_whitelist(&mut self) -> Result<bool, RconError> {
        self.toggle(CommandCode::ToggleWhitelist)
    }

    fn add_whitelist_ids(&mut self, ids: &[String]) -> Result<(), RconError> {
        self.command(CommandCode::AddWhitelist, ids).map(drop)
    }

    fn remove_whitelist_ids(&mut self, ids: &[String]) -> Result<(), RconError> {
        self.command(CommandCode::RemoveWhitelist, ids).map(drop)
    }

    fn kick_player(&mut self, player_id: &str, reason: &str) -> Result<(), RconError> {
        self.command(CommandCode::Kick, &[player_id.to_string(), reason.to_string()])
            .map(drop)
    }

    fn wipe_corpses(&mut self) -> Result<(), RconError> {
        self.command(CommandCode::WipeCorpses, &[]).map(drop)
    }

    fn toggle_global_chat(&mut self) -> Result<bool, RconError> {
        self.toggle(CommandCode::ToggleGlobalChat)
    }

    fn toggle_humans(&mut self) -> Result<bool, RconError> {
        self.toggle(CommandCode::ToggleHumans)
    }

    fn toggle_ai(&mut self) -> Result<bool, RconError> {
        self.toggle(CommandCode::ToggleAi)
    }

    fn disable_ai_classes(&mut self, classes: &[AiClass]) -> Result<(), RconError> {
        self.command(CommandCode::DisableAiClasses, &class_names(classes))
            .map(drop)
    }

    fn set_ai_density(&mut self, density: f32) -> Result<(), RconError> {
        self.command(CommandCode::AiDensity, &[density.to_string()])
            .map(drop)
    }

    fn exec_command(&mut self, code: u8, args: &[String]) -> Result<String, RconError> {
        self.round_trip(&protocol::encode_command(code, args))
    }

    fn close(&mut self) -> Result<(), RconError> {
        if let Some(reader) = self.reader.take() {
            log::debug!("Closing connection to {}", self.address);
            match reader.get_ref().shutdown(Shutdown::Both) {
                Ok(()) => {}
                // Already gone on the other side; nothing left to release.
                Err(e) if e.kind() == std::io::ErrorKind::NotConnected => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

impl Drop for RconClient {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            log::warn!("Failed to close connection to {}: {}", self.address, e);
        }
    }
}
