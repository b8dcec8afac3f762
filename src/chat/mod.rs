//! Chat command parsing and message shaping
//!
//! Messages look like `!meals` or `!plan`; anything without the prefix is
//! not addressed to the bot.

pub(crate) mod reply;

pub(crate) use reply::{ReplySink, StdoutSink, WebhookSink};

/// Longest message the chat service accepts
pub(crate) const MESSAGE_LIMIT: usize = 2000;

const FENCE: &str = "```";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChatCommand {
    Meals,
    Plan,
    Help,
}

impl ChatCommand {
    pub(crate) const ALL: [ChatCommand; 3] = [ChatCommand::Meals, ChatCommand::Plan, ChatCommand::Help];

    pub(crate) fn name(self) -> &'static str {
        match self {
            ChatCommand::Meals => "meals",
            ChatCommand::Plan => "plan",
            ChatCommand::Help => "help",
        }
    }

    pub(crate) fn help(self) -> &'static str {
        match self {
            ChatCommand::Meals => "Responds with the currently planned meals",
            ChatCommand::Plan => "Plans the week if it hasn't been planned",
            ChatCommand::Help => "Lists available commands",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParsedMessage {
    Command(ChatCommand),
    Unknown(String),
    /// No prefix; the bot stays quiet
    Ignored,
}

/// Command names are matched case-insensitively; trailing arguments are ignored
pub(crate) fn parse_message(message: &str, prefix: &str) -> ParsedMessage {
    let Some(rest) = message.trim().strip_prefix(prefix) else {
        return ParsedMessage::Ignored;
    };
    let word = rest.split_whitespace().next().unwrap_or("").to_lowercase();
    match ChatCommand::ALL.into_iter().find(|c| c.name() == word) {
        Some(command) => ParsedMessage::Command(command),
        None => ParsedMessage::Unknown(word),
    }
}

pub(crate) fn help_text(prefix: &str) -> String {
    let width = ChatCommand::ALL
        .iter()
        .map(|c| c.name().len() + prefix.len())
        .max()
        .unwrap_or(0);
    let lines: Vec<String> = ChatCommand::ALL
        .iter()
        .map(|c| format!("{:<width$}  {}", format!("{prefix}{}", c.name()), c.help()))
        .collect();
    code_block(&lines.join("\n"))
}

pub(crate) fn code_block(text: &str) -> String {
    format!("{FENCE}\n{text}\n{FENCE}")
}

/// Split a fenced table into messages that each fit `limit`, breaking on lines.
///
/// Every piece is re-fenced so it renders as a code block on its own. A
/// single line longer than the limit is cut at a character boundary.
pub(crate) fn split_code_block(text: &str, limit: usize) -> Vec<String> {
    let wrapped = code_block(text);
    if wrapped.chars().count() <= limit {
        return vec![wrapped];
    }

    let budget = limit.saturating_sub(2 * FENCE.len() + 2).max(1);
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0;

    for line in text.lines() {
        let line_len = line.chars().count();
        if line_len > budget {
            if !current.is_empty() {
                chunks.push(current.join("\n"));
                current.clear();
            }
            let chars: Vec<char> = line.chars().collect();
            chunks.extend(chars.chunks(budget).map(|c| c.iter().collect::<String>()));
            continue;
        }
        if !current.is_empty() && current_len + 1 + line_len > budget {
            chunks.push(current.join("\n"));
            current.clear();
        }
        current_len = if current.is_empty() { line_len } else { current_len + 1 + line_len };
        current.push(line);
    }
    if !current.is_empty() {
        chunks.push(current.join("\n"));
    }

    chunks.iter().map(|c| code_block(c)).collect()
}
