// src/cli/handlers/announce.rs

use anyhow::Result;

use crate::cli::handlers::{CommandContext, commons};

/// `announce MESSAGE...`: the words are re-joined with single spaces.
pub fn handle(args: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
    if args.is_empty() {
        return commons::report_missing(ctx, "MESSAGE");
    }

    let message = args.join(" ");
    ctx.session.announce(&message)?;
    writeln!(ctx.out, "{}", t!("announce.sent"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::testing::{RecordingSession, run_line};

    #[test]
    fn test_announce_joins_words() {
        let mut session = RecordingSession::default();
        let (result, _) = run_line(&mut session, "announce Restart in 10 minutes!");

        assert!(result.is_ok());
        assert_eq!(
            session.last("announce").unwrap().args,
            vec!["Restart in 10 minutes!"]
        );
    }

    #[test]
    fn test_announce_without_message() {
        let mut session = RecordingSession::default();
        let (result, output) = run_line(&mut session, "announce");

        assert!(result.is_ok());
        assert_eq!(output, "Missing MESSAGE\n");
        assert!(session.calls().is_empty());
    }
}
