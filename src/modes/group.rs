use super::{
    exchange, prompt_for, run_line_loop, send_and_render, Exchange, ModeContext, ModeExit,
    Prompted,
};
use crate::protocol::Command;
use crate::transport::Transport;

const EXIT_TOKEN: &str = "/leave";

/// Group chat: joins on entry, leaves on `/leave`.
pub async fn run<T: Transport>(ctx: &mut ModeContext<'_, T>) -> ModeExit {
    let group = match prompt_for(ctx, "Group name: ", Some(EXIT_TOKEN), |group| {
        Command::join_group(group).map(|_| ())
    }) {
        Prompted::Value(group) => group,
        Prompted::Cancelled => return ModeExit::Menu,
        Prompted::EndOfInput => return ModeExit::EndOfInput,
    };

    let join = match Command::join_group(group.as_str()) {
        Ok(command) => command,
        Err(err) => {
            ctx.console.print(&format!("⚠️  {err}"));
            return ModeExit::Menu;
        }
    };
    match exchange(ctx, &join).await {
        Exchange::Reply(reply) => ctx.console.print(reply.text()),
        // Membership is unknown after a failed join, so don't chat in it.
        Exchange::Failed => return ModeExit::Menu,
        Exchange::Disconnected => return ModeExit::Disconnected,
    }

    ctx.session.active_group = Some(group.clone());
    ctx.console.print(&format!(
        "👥 Group {group}. Type {EXIT_TOKEN} to leave the group."
    ));

    let prompt = format!("[#{group}] > ");
    let exit = run_line_loop(ctx, &prompt, EXIT_TOKEN, |text| {
        Command::group(group.as_str(), text)
    })
    .await;

    let exit = match exit {
        ModeExit::Menu => match Command::leave_group(group.as_str()) {
            Ok(leave) => send_and_render(ctx, &leave).await.unwrap_or(ModeExit::Menu),
            Err(err) => {
                ctx.console.print(&format!("⚠️  {err}"));
                ModeExit::Menu
            }
        },
        other => other,
    };

    ctx.session.active_group = None;
    exit
}
