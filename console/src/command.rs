//! Line commands typed at the console prompt.

use std::fmt;

pub const HELP: &str = "\
commands:
  list                         redraw the list
  reload                       fetch the list again
  select <id>                  copy a todo into the update and delete forms
  new <userId> <title...>      create a todo
  new-done <userId> <title...> create a completed todo
  set-id <id>                  edit the update form's target id
  set-user <userId>            edit the update form's owner
  set-title <title...>         edit the update form's title
  toggle                       flip the update form's completed flag
  update                       submit the update form
  delete [id]                  submit the delete form, optionally setting its id
  clear                        reset every form
  help                         show this text
  quit                         leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Reload,
    Select(u64),
    New {
        user_id: String,
        title: String,
        completed: bool,
    },
    SetId(String),
    SetUser(String),
    SetTitle(String),
    Toggle,
    Update,
    Delete(Option<String>),
    Clear,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    BadId(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::Unknown(word) => write!(f, "unknown command {word:?}, try `help`"),
            CommandError::MissingArgument(what) => write!(f, "missing {what}"),
            CommandError::BadId(raw) => write!(f, "{raw:?} is not a todo id"),
        }
    }
}

impl std::error::Error for CommandError {}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "" => Err(CommandError::Empty),
            "list" | "ls" => Ok(Command::List),
            "reload" => Ok(Command::Reload),
            "select" => {
                let raw = non_empty(rest, "id")?;
                raw.parse()
                    .map(Command::Select)
                    .map_err(|_| CommandError::BadId(raw.to_string()))
            }
            "new" | "new-done" => {
                let (user_id, title) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(CommandError::MissingArgument("title"))?;
                Ok(Command::New {
                    user_id: non_empty(user_id, "userId")?.to_string(),
                    title: non_empty(title, "title")?.to_string(),
                    completed: word == "new-done",
                })
            }
            "set-id" => Ok(Command::SetId(non_empty(rest, "id")?.to_string())),
            "set-user" => Ok(Command::SetUser(non_empty(rest, "userId")?.to_string())),
            "set-title" => Ok(Command::SetTitle(non_empty(rest, "title")?.to_string())),
            "toggle" => Ok(Command::Toggle),
            "update" => Ok(Command::Update),
            "delete" | "rm" => Ok(Command::Delete((!rest.is_empty()).then(|| rest.to_string()))),
            "clear" => Ok(Command::Clear),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn non_empty<'a>(value: &'a str, what: &'static str) -> Result<&'a str, CommandError> {
    let value = value.trim();
    if value.is_empty() {
        Err(CommandError::MissingArgument(what))
    } else {
        Ok(value)
    }
}
