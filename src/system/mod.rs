//! # System Interaction Layer
//!
//! Everything that touches the outside world lives here: the network, the
//! terminal and interactive prompts. The command layer only sees the traits
//! exported from these modules.
//!
//! ## Modules
//!
//! - **`rcon`**: the [`RemoteSession`](rcon::RemoteSession) trait and the blocking
//!   TCP client that implements it.
//! - **`input`**: the [`LineSource`](input::LineSource) trait and the rustyline-backed
//!   prompt used by the session loop.
//! - **`prompt`**: one-off questions asked during bootstrap (address, password).

pub mod input;
pub mod prompt;
pub mod rcon;
