use crate::model::intent::Intent;
use crate::model::item::{Category, ItemId, Quantity};

/// A syntax problem on one line of an intent script
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    /// 1-based
    pub line: usize,
    pub message: String,
}

/// An intent together with the script line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub intent: Intent,
}

/// Parse an intent script.
///
/// One intent per line:
///
/// ```text
/// add [-q N] [-c CATEGORY] description words...
/// toggle 3
/// delete 3
/// search text...
/// ```
///
/// Blank lines and `#` comments are skipped. Bad lines are reported and
/// skipped; the rest of the script still parses.
pub fn parse_script(source: &str) -> (Vec<ScriptLine>, Vec<ParseError>) {
    let mut lines = Vec::new();
    let mut errors = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parse_intent(trimmed) {
            Ok(intent) => lines.push(ScriptLine { line, intent }),
            Err(message) => errors.push(ParseError { line, message }),
        }
    }

    (lines, errors)
}

/// Parse a single, already trimmed, intent line.
pub fn parse_intent(text: &str) -> Result<Intent, String> {
    let (verb, rest) = match text.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (text, ""),
    };

    match verb {
        "add" => parse_add(rest),
        "toggle" => parse_id(verb, rest).map(Intent::Toggle),
        "delete" => parse_id(verb, rest).map(Intent::Delete),
        "search" => Ok(Intent::Search(rest.to_string())),
        other => Err(format!("unknown intent: {}", other)),
    }
}

fn parse_id(verb: &str, rest: &str) -> Result<ItemId, String> {
    if rest.is_empty() {
        return Err(format!("{} needs an item id", verb));
    }
    rest.parse::<ItemId>()
        .map_err(|_| format!("invalid item id: {}", rest))
}

fn parse_add(rest: &str) -> Result<Intent, String> {
    let mut quantity = Quantity::default();
    let mut category = Category::default();
    let mut remaining = rest.trim_start();

    // Options come first; the first non-option word starts the description
    loop {
        let (word, after) = next_word(remaining);
        match word {
            "-q" | "--qty" => {
                let (value, after) = next_word(after);
                if value.is_empty() {
                    return Err(format!("{} needs a value", word));
                }
                quantity = value.parse().map_err(|e| format!("{}", e))?;
                remaining = after;
            }
            "-c" | "--category" => {
                let (value, after) = next_word(after);
                if value.is_empty() {
                    return Err(format!("{} needs a value", word));
                }
                category = value.parse().map_err(|e| format!("{}", e))?;
                remaining = after;
            }
            "--" => {
                remaining = after;
                break;
            }
            _ => break,
        }
    }

    // Taken verbatim so inner spacing survives; the store trims and
    // rejects blank descriptions
    Ok(Intent::Add {
        description: remaining.to_string(),
        quantity,
        category,
    })
}

/// Split the first whitespace-delimited word off `text`, returning it and
/// the rest with leading whitespace removed.
fn next_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, after)) => (word, after.trim_start()),
        None => (text, ""),
    }
}
