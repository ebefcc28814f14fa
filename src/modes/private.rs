use super::{prompt_for, run_line_loop, ModeContext, ModeExit, Prompted};
use crate::protocol::Command;
use crate::transport::Transport;

const EXIT_TOKEN: &str = "/end";

/// One-to-one chat. Choosing the recipient is local; nothing is sent until
/// the first message.
pub async fn run<T: Transport>(ctx: &mut ModeContext<'_, T>) -> ModeExit {
    let recipient = match prompt_for(ctx, "Recipient: ", Some(EXIT_TOKEN), |recipient| {
        Command::private(recipient, "").map(|_| ())
    }) {
        Prompted::Value(recipient) => recipient,
        Prompted::Cancelled => return ModeExit::Menu,
        Prompted::EndOfInput => return ModeExit::EndOfInput,
    };
    ctx.session.active_recipient = Some(recipient.clone());
    ctx.console.print(&format!(
        "💬 Private chat with {recipient}. Type {EXIT_TOKEN} to return to the menu."
    ));

    let prompt = format!("[@{recipient}] > ");
    let exit = run_line_loop(ctx, &prompt, EXIT_TOKEN, |text| {
        Command::private(recipient.as_str(), text)
    })
    .await;

    ctx.session.active_recipient = None;
    exit
}
