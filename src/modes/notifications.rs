use super::{exchange, Exchange, ModeContext, ModeExit};
use crate::protocol::Command;
use crate::transport::Transport;

/// Fetches pending notifications once and goes straight back to the menu.
///
/// A blank reply counts as "nothing pending"; the text shown for it comes
/// from the configuration, not from the server. A timeout is only reported:
/// the late reply is shown as a server line after the next exchange.
pub async fn run<T: Transport>(ctx: &mut ModeContext<'_, T>) -> ModeExit {
    match exchange(ctx, &Command::Notifications).await {
        Exchange::Reply(reply) if reply.is_empty() => {
            let text = ctx.config.empty_notifications_text().to_string();
            ctx.console.print(&format!("🔔 {text}"));
            ModeExit::Menu
        }
        Exchange::Reply(reply) => {
            ctx.console.print("🔔 Notifications:");
            ctx.console.print(reply.text());
            ModeExit::Menu
        }
        Exchange::Failed => ModeExit::Menu,
        Exchange::Disconnected => ModeExit::Disconnected,
    }
}
