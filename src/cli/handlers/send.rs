// src/cli/handlers/send.rs

use anyhow::Result;

use crate::{
    cli::handlers::{CommandContext, commons},
    core::error_policy::CommandError,
    system::rcon::RconError,
};

/// Parses a command byte written as exactly two hex digits (`3a`, `0F`).
fn parse_code(raw: &str) -> Option<u8> {
    match hex::decode(raw) {
        Ok(bytes) => match bytes.as_slice() {
            [code] => Some(*code),
            _ => None,
        },
        Err(_) => None,
    }
}

/// `send CODE [ARG...]`: a raw command frame for operations the console has
/// no dedicated command for. The reply text is printed as received.
///
/// A timeout here is reported as [`CommandError::NoResponse`] since many
/// command codes are simply not answered by the server.
pub fn handle(args: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
    let Some((raw_code, rest)) = args.split_first() else {
        return commons::report_missing(ctx, "CODE");
    };
    let Some(code) = parse_code(raw_code) else {
        writeln!(ctx.out, "{}", t!("send.invalid_code"))?;
        return Ok(());
    };

    log::debug!("Sending raw command 0x{:02x} with {} argument(s)", code, rest.len());
    let reply = match ctx.session.exec_command(code, rest) {
        Ok(reply) => reply,
        Err(RconError::Timeout) => return Err(CommandError::NoResponse { code }.into()),
        Err(e) => return Err(e.into()),
    };
    writeln!(ctx.out, "{}", reply)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error_policy::{self, Disposition};
    use crate::testing::{RecordingSession, run_line};

    #[test]
    fn test_parse_code_accepts_one_byte_only() {
        assert_eq!(parse_code("3a"), Some(0x3a));
        assert_eq!(parse_code("0F"), Some(0x0f));
        assert_eq!(parse_code("a"), None);
        assert_eq!(parse_code("zz"), None);
        assert_eq!(parse_code("3a4b"), None);
    }

    #[test]
    fn test_invalid_code_is_not_sent() {
        let mut session = RecordingSession::default();
        let (result, output) = run_line(&mut session, "send zz hello");

        assert!(result.is_ok());
        assert_eq!(output, "Command byte must be a hexadecimal number, e.g. 3a\n");
        assert!(session.calls().is_empty());
    }

    #[test]
    fn test_reply_is_printed() {
        let mut session = RecordingSession {
            exec_reply: "Done".to_string(),
            ..Default::default()
        };
        let (result, output) = run_line(&mut session, "send 3a hello");

        assert!(result.is_ok());
        assert_eq!(output, "Done\n");
        assert_eq!(
            session.last("exec_command").unwrap().args,
            vec!["3a", "hello"]
        );
    }

    #[test]
    fn test_timeout_becomes_recoverable_no_response() {
        let mut session = RecordingSession::default();
        session.fail_next("exec_command", RconError::Timeout);

        let (result, _) = run_line(&mut session, "send 3a");
        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<CommandError>(),
            Some(&CommandError::NoResponse { code: 0x3a })
        );
        assert_eq!(
            error_policy::classify(&err),
            Disposition::Recoverable("The server did not respond with anything.".to_string())
        );
    }

    #[test]
    fn test_disconnect_stays_fatal() {
        let mut session = RecordingSession::default();
        session.fail_next("exec_command", RconError::Disconnected);

        let (result, _) = run_line(&mut session, "send 10 Testing");
        assert_eq!(error_policy::classify(&result.unwrap_err()), Disposition::Fatal);
    }
}
