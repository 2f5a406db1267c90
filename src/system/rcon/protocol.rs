// src/system/rcon/protocol.rs

//! Wire format of the Evrima RCON protocol.
//!
//! Requests are a type byte, a payload and a terminating `NUL`. Command
//! requests carry the command code as the first payload byte, followed by the
//! arguments joined with commas. Replies are plain text terminated by a
//! `NUL`, and may span any number of TCP segments.

use super::RconError;
use crate::models::{Location, Player, PlayerData, ServerDetails};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// Frame type of the login request.
pub const FRAME_AUTH: u8 = 0x01;
/// Frame type of every command request.
pub const FRAME_COMMAND: u8 = 0x02;

/// Largest reply accepted before its terminator. Player data for a full
/// server stays well below this; anything larger means the stream is garbage.
pub const MAX_REPLY_LEN: usize = 1024 * 1024;

/// Command codes understood by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum CommandCode {
    Announce = 0x10,
    DirectMessage = 0x11,
    ServerDetails = 0x12,
    WipeCorpses = 0x13,
    UpdatePlayables = 0x15,
    Kick = 0x30,
    PlayerList = 0x40,
    PlayerData = 0x77,
    ToggleWhitelist = 0x81,
    AddWhitelist = 0x82,
    RemoveWhitelist = 0x83,
    ToggleGlobalChat = 0x84,
    ToggleHumans = 0x86,
    ToggleAi = 0x90,
    DisableAiClasses = 0x91,
    AiDensity = 0x92,
}

impl CommandCode {
    /// The byte that goes on the wire.
    pub fn byte(self) -> u8 {
        self as u8
    }
}

lazy_static! {
    static ref KEY_VALUE_RE: Regex = Regex::new(r"(\w+):\s*([^,\n]*)").unwrap();
    static ref LOCATION_RE: Regex = Regex::new(
        r"Location:\s*\(?\s*X=\s*(-?[\d.]+)\s*,?\s*Y=\s*(-?[\d.]+)\s*,?\s*Z=\s*(-?[\d.]+)\s*\)?"
    )
    .unwrap();
    static ref STATE_WORD_RE: Regex =
        Regex::new(r"(?i)\b(true|false|on|off|enabled|disabled)\b").unwrap();
}

// --- ENCODING ---

/// Builds the login frame.
pub fn encode_auth(password: &str) -> Vec<u8> {
    let mut frame = Vec::with_capacity(password.len() + 2);
    frame.push(FRAME_AUTH);
    frame.extend_from_slice(password.as_bytes());
    frame.push(0x00);
    frame
}

/// Builds a command frame. Arguments are joined with commas.
pub fn encode_command(code: u8, args: &[String]) -> Vec<u8> {
    let payload = args.join(",");
    let mut frame = Vec::with_capacity(payload.len() + 3);
    frame.push(FRAME_COMMAND);
    frame.push(code);
    frame.extend_from_slice(payload.as_bytes());
    frame.push(0x00);
    frame
}

/// Turns a raw reply into text, dropping trailing `NUL` padding.
pub fn decode_reply(raw: &[u8]) -> String {
    let end = raw
        .iter()
        .rposition(|byte| *byte != 0x00)
        .map_or(0, |last| last + 1);
    String::from_utf8_lossy(raw.get(..end).unwrap_or_default()).into_owned()
}

// --- DECODING ---

fn key_values(text: &str) -> HashMap<&str, &str> {
    KEY_VALUE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let key = caps.get(1)?.as_str();
            let value = caps.get(2)?.as_str().trim();
            Some((key, value))
        })
        .collect()
}

fn parse_flag(value: Option<&&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

fn parse_count(value: Option<&&str>) -> u32 {
    value.and_then(|v| v.parse().ok()).unwrap_or_default()
}

/// Parses the reply to [`CommandCode::ServerDetails`].
pub fn parse_server_details(reply: &str) -> Result<ServerDetails, RconError> {
    let body = reply.trim_start_matches("ServerDetails").trim();
    let fields = key_values(body);
    let name = fields
        .get("ServerName")
        .ok_or_else(|| RconError::Protocol(format!("no ServerName in '{}'", reply.trim())))?;

    Ok(ServerDetails {
        name: (*name).to_string(),
        current_players: parse_count(fields.get("ServerCurrentPlayers")),
        max_players: parse_count(fields.get("ServerMaxPlayers")),
        day_length_minutes: parse_count(fields.get("ServerDayLengthMinutes")),
        night_length_minutes: parse_count(fields.get("ServerNightLengthMinutes")),
        has_password: parse_flag(fields.get("bServerPassword")),
        global_chat_enabled: parse_flag(fields.get("bEnableGlobalChat")),
        queue_enabled: parse_flag(fields.get("bQueueEnabled")),
        whitelist_enabled: parse_flag(fields.get("bServerWhitelist")),
    })
}

fn split_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses the reply to [`CommandCode::PlayerList`]: a header line, then a line
/// of identifiers and a line of names, both comma separated and in the same
/// order.
pub fn parse_player_list(reply: &str) -> Result<Vec<Player>, RconError> {
    let mut lines = reply
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("PlayerList"));

    let ids = lines.next().map(split_list).unwrap_or_default();
    let names = lines.next().map(split_list).unwrap_or_default();

    if ids.len() != names.len() {
        return Err(RconError::Protocol(format!(
            "player list has {} IDs but {} names",
            ids.len(),
            names.len()
        )));
    }

    Ok(ids
        .into_iter()
        .zip(names)
        .map(|(id, name)| Player { id, name })
        .collect())
}

/// Vitals arrive as fractions (`0.75`) or percentages (`75`).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_percent(value: Option<&&str>) -> u32 {
    let Some(raw) = value.and_then(|v| v.parse::<f64>().ok()) else {
        return 0;
    };
    let percent = if raw <= 1.0 { raw * 100.0 } else { raw };
    percent.round().clamp(0.0, 100.0) as u32
}

fn parse_location(line: &str) -> Location {
    let Some(caps) = LOCATION_RE.captures(line) else {
        return Location::default();
    };
    let axis = |i: usize| {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or_default()
    };
    Location {
        x: axis(1),
        y: axis(2),
        z: axis(3),
    }
}

/// Parses the reply to [`CommandCode::PlayerData`]: one line per player.
pub fn parse_player_data(reply: &str) -> Result<Vec<PlayerData>, RconError> {
    let mut players = Vec::new();

    for line in reply.lines().filter(|line| line.contains("PlayerID:")) {
        let location = parse_location(line);
        let without_location = LOCATION_RE.replace(line, "");
        let fields = key_values(&without_location);

        let id = fields
            .get("PlayerID")
            .ok_or_else(|| RconError::Protocol(format!("no PlayerID in '{}'", line.trim())))?;

        players.push(PlayerData {
            id: (*id).to_string(),
            name: fields.get("Name").map(|v| v.to_string()).unwrap_or_default(),
            class: fields.get("Class").map(|v| v.to_string()).unwrap_or_default(),
            growth: parse_percent(fields.get("Growth")),
            health: parse_percent(fields.get("Health")),
            stamina: parse_percent(fields.get("Stamina")),
            hunger: parse_percent(fields.get("Hunger")),
            thirst: parse_percent(fields.get("Thirst")),
            location,
        });
    }

    Ok(players)
}

/// Parses the reply to a toggle command. The last state word wins.
pub fn parse_toggle_state(reply: &str) -> Result<bool, RconError> {
    let word = STATE_WORD_RE
        .find_iter(reply)
        .last()
        .ok_or_else(|| RconError::Protocol(format!("no state in '{}'", reply.trim())))?;

    Ok(matches!(
        word.as_str().to_ascii_lowercase().as_str(),
        "true" | "on" | "enabled"
    ))
}
