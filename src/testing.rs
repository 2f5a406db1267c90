// src/testing.rs

//! Test doubles: a remote session that records every call, a scripted
//! input source and a scripted RCON server on a local port.

use crate::{
    cli::{dispatcher::Dispatcher, handlers::CommandContext},
    models::{AiClass, CommandLine, DinoClass, Player, PlayerData, ServerDetails},
    system::{
        input::{InputError, LineSource},
        rcon::{RconError, RemoteSession},
    },
};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::rc::Rc;
use std::thread;

/// One recorded remote call.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCall {
    pub op: &'static str,
    pub args: Vec<String>,
}

#[derive(Debug, Default)]
pub(crate) struct Journal {
    calls: Vec<RemoteCall>,
    closed: bool,
}

/// A scripted [`RemoteSession`]. Clones share the same journal, so a test can
/// keep one handle while the session loop owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingSession {
    pub roster: Vec<Player>,
    pub player_data: Vec<PlayerData>,
    pub details: ServerDetails,
    pub exec_reply: String,
    pub(crate) journal: Rc<RefCell<Journal>>,
    pub(crate) failures: Rc<RefCell<HashMap<&'static str, RconError>>>,
    pub(crate) toggles: Rc<RefCell<HashMap<&'static str, bool>>>,
}

impl RecordingSession {
    pub fn with_roster(roster: Vec<Player>) -> Self {
        Self {
            roster,
            ..Default::default()
        }
    }

    /// Makes the next call to `op` fail with `err`.
    pub fn fail_next(&self, op: &'static str, err: RconError) {
        self.failures.borrow_mut().insert(op, err);
    }

    /// Names of the remote operations called so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.journal.borrow().calls.iter().map(|c| c.op).collect()
    }

    /// Every recorded call with its arguments.
    pub fn recorded(&self) -> Vec<RemoteCall> {
        self.journal.borrow().calls.clone()
    }

    /// The last call to `op`, if any.
    pub fn last(&self, op: &str) -> Option<RemoteCall> {
        self.journal
            .borrow()
            .calls
            .iter()
            .rev()
            .find(|c| c.op == op)
            .cloned()
    }

    pub fn is_closed(&self) -> bool {
        self.journal.borrow().closed
    }

    fn record(&self, op: &'static str, args: Vec<String>) -> Result<(), RconError> {
        self.journal.borrow_mut().calls.push(RemoteCall { op, args });
        match self.failures.borrow_mut().remove(op) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn flip(&self, op: &'static str) -> bool {
        let mut toggles = self.toggles.borrow_mut();
        let state = toggles.entry(op).or_insert(false);
        *state = !*state;
        *state
    }
}

fn names<C: std::fmt::Display>(classes: &[C]) -> Vec<String> {
    classes.iter().map(ToString::to_string).collect()
}

impl RemoteSession for RecordingSession {
    fn server_details(&mut self) -> Result<ServerDetails, RconError> {
        self.record("server_details", vec![])?;
        Ok(self.details.clone())
    }

    fn announce(&mut self, message: &str) -> Result<(), RconError> {
        self.record("announce", vec![message.to_string()])
    }

    fn player_list(&mut self) -> Result<Vec<Player>, RconError> {
        self.record("player_list", vec![])?;
        Ok(self.roster.clone())
    }

    fn player_data(&mut self) -> Result<Vec<PlayerData>, RconError> {
        self.record("player_data", vec![])?;
        Ok(self.player_data.clone())
    }

    fn direct_message(&mut self, player_id: &str, message: &str) -> Result<(), RconError> {
        self.record(
            "direct_message",
            vec![player_id.to_string(), message.to_string()],
        )
    }

    fn update_playables(&mut self, classes: &[DinoClass]) -> Result<(), RconError> {
        self.record("update_playables", names(classes))
    }

    fn toggle_whitelist(&mut self) -> Result<bool, RconError> {
        self.record("toggle_whitelist", vec![])?;
        Ok(self.flip("toggle_whitelist"))
    }

    fn add_whitelist_ids(&mut self, ids: &[String]) -> Result<(), RconError> {
        self.record("add_whitelist_ids", ids.to_vec())
    }

    fn remove_whitelist_ids(&mut self, ids: &[String]) -> Result<(), RconError> {
        self.record("remove_whitelist_ids", ids.to_vec())
    }

    fn kick_player(&mut self, player_id: &str, reason: &str) -> Result<(), RconError> {
        self.record("kick_player", vec![player_id.to_string(), reason.to_string()])
    }

    fn wipe_corpses(&mut self) -> Result<(), RconError> {
        self.record("wipe_corpses", vec![])
    }

    fn toggle_global_chat(&mut self) -> Result<bool, RconError> {
        self.record("toggle_global_chat", vec![])?;
        Ok(self.flip("toggle_global_chat"))
    }

    fn toggle_humans(&mut self) -> Result<bool, RconError> {
        self.record("toggle_humans", vec![])?;
        Ok(self.flip("toggle_humans"))
    }

    fn toggle_ai(&mut self) -> Result<bool, RconError> {
        self.record("toggle_ai", vec![])?;
        Ok(self.flip("toggle_ai"))
    }

    fn disable_ai_classes(&mut self, classes: &[AiClass]) -> Result<(), RconError> {
        self.record("disable_ai_classes", names(classes))
    }

    fn set_ai_density(&mut self, density: f32) -> Result<(), RconError> {
        self.record("set_ai_density", vec![density.to_string()])
    }

    fn exec_command(&mut self, code: u8, args: &[String]) -> Result<String, RconError> {
        let mut recorded = vec![format!("{:02x}", code)];
        recorded.extend(args.iter().cloned());
        self.record("exec_command", recorded)?;
        Ok(self.exec_reply.clone())
    }

    fn close(&mut self) -> Result<(), RconError> {
        self.journal.borrow_mut().closed = true;
        Ok(())
    }
}

/// Feeds pre-written lines, then either end of input or a scripted failure.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    failure: Option<InputError>,
    closed: Rc<RefCell<bool>>,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Ends the script with `err` instead of end of input.
    pub fn then_fail(mut self, err: InputError) -> Self {
        self.failure = Some(err);
        self
    }

    /// A handle that reports whether `close` was called.
    pub fn closed_flag(&self) -> Rc<RefCell<bool>> {
        Rc::clone(&self.closed)
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self) -> Result<Option<String>, InputError> {
        match self.lines.pop_front() {
            Some(line) => Ok(Some(line)),
            None => match self.failure.take() {
                Some(err) => Err(err),
                None => Ok(None),
            },
        }
    }

    fn close(&mut self) {
        *self.closed.borrow_mut() = true;
    }
}

/// Dispatches one raw line against `session` and returns the handler result
/// together with everything written to the output.
pub fn run_line(session: &mut RecordingSession, line: &str) -> (anyhow::Result<()>, String) {
    let mut out = Vec::new();
    let result = match CommandLine::parse(line) {
        Some(parsed) => {
            let mut ctx = CommandContext {
                session,
                out: &mut out,
            };
            Dispatcher::new().dispatch(&parsed, &mut ctx)
        }
        None => Ok(()),
    };
    (result, String::from_utf8(out).unwrap())
}

/// Accepts one connection and reads up to `requests` NUL-terminated
/// requests, calling `answer` with the write half after each one. The thread
/// returns the requests it saw, terminators included.
pub fn serve_requests<F>(requests: usize, mut answer: F) -> (String, thread::JoinHandle<Vec<Vec<u8>>>)
where
    F: FnMut(&mut TcpStream) + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap().to_string();
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut writer = stream.try_clone().unwrap();
        let mut reader = BufReader::new(stream);
        let mut seen = Vec::new();
        for _ in 0..requests {
            let mut request = Vec::new();
            if reader.read_until(0x00, &mut request).unwrap() == 0 {
                break;
            }
            seen.push(request);
            answer(&mut writer);
        }
        seen
    });
    (address, handle)
}

/// Answers each request with the next reply, terminator included, in a
/// single write.
pub fn scripted_server(replies: Vec<&'static str>) -> (String, thread::JoinHandle<Vec<Vec<u8>>>) {
    let count = replies.len();
    let mut replies = replies.into_iter();
    serve_requests(count, move |stream| {
        if let Some(reply) = replies.next() {
            let mut frame = reply.as_bytes().to_vec();
            frame.push(0x00);
            stream.write_all(&frame).unwrap();
        }
    })
}
