//! One-shot chat from the command line.

use anyhow::Result;
use console::style;
use serde_json::json;

use crate::state::AppState;

/// Session id used for CLI exchanges.
const CLI_SESSION: &str = "cli";

/// Ask the responder one question and print the reply.
///
/// # Examples
///
/// ```bash
/// sunny ask "Do you have anything sugar-free?"
/// ```
pub fn ask(state: &AppState, message: &str, json: bool) -> Result<()> {
    let reply = state.chat_service.reply(CLI_SESSION, message)?;

    if json {
        let out = json!({ "message": reply, "sessionId": CLI_SESSION });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("  {} {}", style("You:").bold(), message);
    println!("  {} {}", style("Sunny:").yellow().bold(), reply);
    println!();

    Ok(())
}
