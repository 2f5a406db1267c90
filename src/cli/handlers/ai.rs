// src/cli/handlers/ai.rs

use anyhow::Result;

use crate::{
    cli::handlers::{CommandContext, commons},
    core::selector::{self, SelectorError},
    models::{AiClass, Vocabulary},
};

/// The main handler for the `ai` command.
pub fn handle(args: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
    let Some((subcommand, rest)) = commons::split_subcommand(ctx, "ai", args)? else {
        return Ok(());
    };

    match subcommand.as_str() {
        "list" => {
            writeln!(ctx.out, "{}", t!("ai.list_header"))?;
            for class in AiClass::ALL {
                writeln!(ctx.out, "    {}", class)?;
            }
        }
        "toggle" => {
            let enabled = ctx.session.toggle_ai()?;
            let message = if enabled {
                t!("ai.now_on")
            } else {
                t!("ai.now_off")
            };
            writeln!(ctx.out, "{}", message)?;
        }
        "disable" => handle_disable(rest, ctx)?,
        "density" => handle_density(rest, ctx)?,
        other => commons::report_invalid_subcommand(ctx, "ai", other)?,
    }
    Ok(())
}

/// `ai disable all|none|CLASS...`. The server receives the complete list of
/// disabled classes, so `none` re-enables everything.
fn handle_disable(args: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
    let classes = match selector::parse_selector::<AiClass>(args, true) {
        Ok(selection) => selection.into_classes(),
        Err(SelectorError::Empty) => {
            writeln!(ctx.out, "{}", t!("ai.no_classes"))?;
            return Ok(());
        }
        Err(SelectorError::Unknown(name)) => {
            writeln!(ctx.out, t!("ai.not_an_ai_class"), name = name)?;
            return Ok(());
        }
    };

    ctx.session.disable_ai_classes(&classes)?;
    writeln!(ctx.out, "{}", t!("ai.classes_updated"))?;
    Ok(())
}

fn handle_density(args: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
    let Some(raw) = args.first() else {
        writeln!(ctx.out, "{}", t!("ai.no_density"))?;
        return Ok(());
    };
    let Ok(density) = raw.parse::<f32>() else {
        writeln!(ctx.out, "{}", t!("ai.density_not_a_number"))?;
        return Ok(());
    };

    ctx.session.set_ai_density(density)?;
    writeln!(ctx.out, "{}", t!("ai.density_updated"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::models::{AiClass, Vocabulary};
    use crate::testing::{RecordingSession, run_line};

    #[test]
    fn test_disable_none_submits_empty_list() {
        let mut session = RecordingSession::default();
        let (result, output) = run_line(&mut session, "ai disable none");

        assert!(result.is_ok());
        assert_eq!(output, "Updated AI classes.\n");
        assert_eq!(
            session.last("disable_ai_classes").unwrap().args,
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_disable_all_and_explicit() {
        let mut session = RecordingSession::default();
        run_line(&mut session, "ai disable all").0.unwrap();
        assert_eq!(
            session.last("disable_ai_classes").unwrap().args.len(),
            AiClass::ALL.len()
        );

        run_line(&mut session, "ai disable Boar Deer").0.unwrap();
        assert_eq!(
            session.last("disable_ai_classes").unwrap().args,
            vec!["Boar", "Deer"]
        );
    }

    #[test]
    fn test_disable_rejects_dinosaur_names() {
        let mut session = RecordingSession::default();
        let (_, output) = run_line(&mut session, "ai disable Boar Troodon");

        assert_eq!(
            output,
            "\"Troodon\" is not an AI class. Type \"ai list\" to get a list of all AI classes.\n"
        );
        assert!(session.calls().is_empty());
    }

    #[test]
    fn test_density() {
        let mut session = RecordingSession::default();
        let (_, output) = run_line(&mut session, "ai density 0.5");
        assert_eq!(output, "Updated AI density.\n");
        assert_eq!(session.last("set_ai_density").unwrap().args, vec!["0.5"]);

        let (_, output) = run_line(&mut session, "ai density lots");
        assert_eq!(output, "The density must be a number.\n");
        assert_eq!(session.calls(), vec!["set_ai_density"]);
    }

    #[test]
    fn test_toggle_reports_new_state() {
        let mut session = RecordingSession::default();
        let (_, first) = run_line(&mut session, "ai toggle");
        let (_, second) = run_line(&mut session, "ai toggle");
        assert_eq!(first, "AI spawns are now on\n");
        assert_eq!(second, "AI spawns are now off\n");
    }

    #[test]
    fn test_list_is_local() {
        let mut session = RecordingSession::default();
        let (_, output) = run_line(&mut session, "ai list");
        assert!(output.starts_with("List of all AI classes:\n    Compsognathus\n"));
        assert!(session.calls().is_empty());
    }
}
