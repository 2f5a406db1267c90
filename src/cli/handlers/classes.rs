// src/cli/handlers/classes.rs

use anyhow::Result;

use crate::{
    cli::handlers::{CommandContext, commons},
    core::selector::{self, Selector, SelectorError},
    models::{DinoClass, Vocabulary},
};

/// The parsed form of `classes SUBCOMMAND [ARG...]`.
#[derive(Debug, PartialEq, Eq)]
enum ClassesCommand {
    List,
    Allow(Selector<DinoClass>),
}

/// The main handler for the `classes` command.
pub fn handle(args: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
    let Some((subcommand, rest)) = commons::split_subcommand(ctx, "classes", args)? else {
        return Ok(());
    };

    let command = match subcommand.as_str() {
        "list" => ClassesCommand::List,
        "allow" => match selector::parse_selector::<DinoClass>(rest, false) {
            Ok(selection) => ClassesCommand::Allow(selection),
            Err(SelectorError::Empty) => {
                writeln!(ctx.out, "{}", t!("classes.no_classes"))?;
                return Ok(());
            }
            Err(SelectorError::Unknown(name)) => {
                writeln!(ctx.out, t!("classes.not_a_class"), name = name)?;
                return Ok(());
            }
        },
        other => return commons::report_invalid_subcommand(ctx, "classes", other),
    };

    match command {
        ClassesCommand::List => {
            writeln!(ctx.out, "{}", t!("classes.list_header"))?;
            for class in DinoClass::ALL {
                writeln!(ctx.out, "    {}", class)?;
            }
        }
        ClassesCommand::Allow(selection) => {
            let classes = selection.into_classes();
            ctx.session.update_playables(&classes)?;
            writeln!(ctx.out, t!("classes.updated"), count = classes.len())?;
        }
    }
    Ok(())
}
