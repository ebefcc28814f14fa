use super::{run_line_loop, ModeContext, ModeExit};
use crate::protocol::Command;
use crate::transport::Transport;

const EXIT_TOKEN: &str = "/menu";

pub async fn run<T: Transport>(ctx: &mut ModeContext<'_, T>) -> ModeExit {
    ctx.console.print(&format!(
        "❓ Help. Enter a page name to read it, or {EXIT_TOKEN} to return to the menu."
    ));

    run_line_loop(ctx, "[help] page: ", EXIT_TOKEN, |page| Command::help(page.trim())).await
}
