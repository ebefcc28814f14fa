use super::{prompt_for, send_and_render, ModeContext, ModeExit, Prompted};
use crate::protocol::Command;
use crate::transport::Transport;
use crate::ui::UserInputError;
use crate::utils::input::sanitize_text_input;

const EXIT_TOKEN: &str = "/menu";
const USAGE: &str = "Profile commands: /view, /edit, /menu";

pub async fn run<T: Transport>(ctx: &mut ModeContext<'_, T>) -> ModeExit {
    ctx.console.print(&format!("👤 Profile. {USAGE}"));

    loop {
        let Some(line) = ctx.console.read_line("[profile] > ") else {
            return ModeExit::EndOfInput;
        };

        let command = match line.trim() {
            EXIT_TOKEN => return ModeExit::Menu,
            "" => continue,
            "/view" => Command::ViewProfile,
            "/edit" => match read_edit(ctx) {
                Prompted::Value(command) => command,
                Prompted::Cancelled => continue,
                Prompted::EndOfInput => return ModeExit::EndOfInput,
            },
            other => {
                let err = UserInputError::UnknownProfileCommand(other.to_string());
                ctx.console.print(&format!("⚠️  {err}"));
                continue;
            }
        };

        if let Some(exit) = send_and_render(ctx, &command).await {
            return exit;
        }
    }
}

/// Asks for the field and its new value. Typing `/menu` at the field
/// prompt abandons the edit.
fn read_edit<T: Transport>(ctx: &mut ModeContext<'_, T>) -> Prompted<Command> {
    let field = match prompt_for(ctx, "Field: ", Some(EXIT_TOKEN), |field| {
        Command::edit_profile(field, "").map(|_| ())
    }) {
        Prompted::Value(field) => field,
        Prompted::Cancelled => return Prompted::Cancelled,
        Prompted::EndOfInput => return Prompted::EndOfInput,
    };
    let Some(value) = ctx.console.read_line("Value: ") else {
        return Prompted::EndOfInput;
    };
    let value = sanitize_text_input(&value);

    match Command::edit_profile(field, value.trim()) {
        Ok(command) => Prompted::Value(command),
        Err(err) => {
            ctx.console.print(&format!("⚠️  {err}"));
            Prompted::Cancelled
        }
    }
}
