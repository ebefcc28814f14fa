use super::{run_line_loop, ModeContext, ModeExit};
use crate::protocol::Command;
use crate::transport::Transport;

const EXIT_TOKEN: &str = "/menu";

/// Broadcast chat: every line goes to everyone.
pub async fn run<T: Transport>(ctx: &mut ModeContext<'_, T>) -> ModeExit {
    ctx.console
        .print(&format!("🌐 Global chat. Type {EXIT_TOKEN} to return to the menu."));

    run_line_loop(ctx, "[global] > ", EXIT_TOKEN, |text| Command::global(text)).await
}
