//! # Console Front End
//!
//! Line-oriented front end over the commands: one command per input line,
//! one JSON reply per output line. Logs go to stderr, so stdout can be piped
//! straight into `jq` or a test harness.
//!
//! ## Session Example
//! ```text
//! > search кофе
//! {"command":"search","result":{"items":[...]},"events":[{"event":"search_changed",...}]}
//! > add 42
//! {"command":"add","error":{"code":"NOT_FOUND","message":"Item not found: 42"}}
//! > quit
//! ```
//!
//! `events` lists the store changes the command caused, which is what a
//! graphical front end would use to decide which views to re-render.

use std::io::{self, BufRead, Write};

use bizideas_core::{ItemId, StoreEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::commands::{cart, catalog, detail, favorites};
use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

/// Help text returned by `help`.
pub const HELP: [&str; 15] = [
    "list                  show the catalog for the current filter",
    "search <text>         set search text (empty clears it)",
    "category <label|all>  filter by category",
    "categories            list category options",
    "fav <id>              toggle favorite",
    "favorites             show favorites",
    "add <id>              add item to cart",
    "remove <id>           remove item from cart",
    "cart                  show cart",
    "show <id>             open item details",
    "close                 close item details",
    "buy                   buy the open item",
    "pay                   show the payment summary",
    "help                  this text",
    "quit                  end the session",
];

// =============================================================================
// Parsing
// =============================================================================

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Search(String),
    Category(String),
    Categories,
    Favorite(ItemId),
    Favorites,
    Add(ItemId),
    Remove(ItemId),
    Cart,
    Show(ItemId),
    Close,
    Buy,
    Pay,
    Help,
    Quit,
}

impl Command {
    /// Parses a non-empty console line.
    ///
    /// The first word picks the command; the rest of the line (trimmed) is
    /// its argument.
    pub fn parse(line: &str) -> Result<Command, ApiError> {
        let line = line.trim();
        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "list" => Command::List,
            "search" => Command::Search(arg.to_string()),
            "category" => Command::Category(required(word, arg)?.to_string()),
            "categories" => Command::Categories,
            "fav" => Command::Favorite(parse_id(word, arg)?),
            "favorites" => Command::Favorites,
            "add" => Command::Add(parse_id(word, arg)?),
            "remove" => Command::Remove(parse_id(word, arg)?),
            "cart" => Command::Cart,
            "show" => Command::Show(parse_id(word, arg)?),
            "close" => Command::Close,
            "buy" => Command::Buy,
            "pay" => Command::Pay,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(ApiError::unknown_command(format!(
                    "unknown command: {other} (try `help`)"
                )))
            }
        };
        Ok(command)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::List => "list",
            Command::Search(_) => "search",
            Command::Category(_) => "category",
            Command::Categories => "categories",
            Command::Favorite(_) => "fav",
            Command::Favorites => "favorites",
            Command::Add(_) => "add",
            Command::Remove(_) => "remove",
            Command::Cart => "cart",
            Command::Show(_) => "show",
            Command::Close => "close",
            Command::Buy => "buy",
            Command::Pay => "pay",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

fn required<'a>(word: &str, arg: &'a str) -> Result<&'a str, ApiError> {
    if arg.is_empty() {
        return Err(ApiError::validation(format!("{word} needs an argument")));
    }
    Ok(arg)
}

fn parse_id(word: &str, arg: &str) -> Result<ItemId, ApiError> {
    required(word, arg)?
        .parse::<u32>()
        .map(ItemId::new)
        .map_err(|_| ApiError::validation(format!("{word}: item id must be a number, got {arg}")))
}

// =============================================================================
// Execution
// =============================================================================

fn to_json<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::internal(e.to_string()))
}

/// Runs one command against the session and returns its JSON result.
pub fn execute(
    command: &Command,
    session: &SessionState,
    config: &ConfigState,
) -> Result<Value, ApiError> {
    match command {
        Command::List => to_json(&catalog::list_items(session, config)),
        Command::Search(text) => to_json(&catalog::set_search(session, config, text)?),
        Command::Category(value) => to_json(&catalog::set_category(session, config, value)?),
        Command::Categories => to_json(&catalog::list_categories(session)),
        Command::Favorite(id) => to_json(&favorites::toggle_favorite(session, config, *id)),
        Command::Favorites => to_json(&favorites::get_favorites(session, config)),
        Command::Add(id) => to_json(&cart::add_to_cart(session, config, *id)?),
        Command::Remove(id) => to_json(&cart::remove_from_cart(session, config, *id)),
        Command::Cart => to_json(&cart::get_cart(session, config)),
        Command::Show(id) => to_json(&detail::select_item(session, config, *id)?),
        Command::Close => to_json(&detail::close_detail(session)),
        Command::Buy => to_json(&detail::buy_selected(session, config)),
        Command::Pay => to_json(&cart::pay(session, config)),
        Command::Help => to_json(&HELP),
        Command::Quit => Ok(Value::Null),
    }
}

/// One output line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Reply {
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ApiError>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    events: Vec<StoreEvent>,
}

/// Reads commands from `input` until EOF or `quit`, writing one JSON reply
/// per command to `output`. Blank lines are skipped.
///
/// ## Errors
/// Only I/O errors end the loop; command errors are written as replies.
pub fn run_console<R, W>(
    input: R,
    mut output: W,
    session: &SessionState,
    config: &ConfigState,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    info!(session_id = %session.session_id(), store = %config.store_name, "Console ready");

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => {
                let outcome = execute(&command, session, config);
                let (result, error) = match outcome {
                    Ok(value) => (Some(value), None),
                    Err(err) => {
                        warn!(command = command.name(), error = %err, "Command failed");
                        (None, Some(err))
                    }
                };
                Reply {
                    command: command.name().to_string(),
                    result,
                    error,
                    events: session.drain_events(),
                }
            }
            Err(err) => {
                debug!(line = %line, error = %err, "Unparseable input");
                Reply {
                    command: line.split_whitespace().next().unwrap_or_default().to_string(),
                    result: None,
                    error: Some(err),
                    events: Vec::new(),
                }
            }
        };

        serde_json::to_writer(&mut output, &reply)?;
        writeln!(output)?;
        output.flush()?;
    }

    info!(session_id = %session.session_id(), "Console closed");
    Ok(())
}
