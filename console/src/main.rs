//! Terminal front end for the todo list.
//!
//! Reads line commands from stdin, drives `TodoApp` over `UreqTransport`,
//! and redraws whenever the component reports a state change.

mod command;
mod render;

use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use todo_core::{ApiError, ClientConfig, Observer, StateChange, TodoApp, Transport, UreqTransport};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use command::{Command, HELP};
use render::Screen;

/// What the loop should do after a command ran.
enum Flow {
    Continue,
    Quit,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = ClientConfig::from_env();
    debug!(?config, "starting");

    let dirty = Rc::new(Cell::new(false));
    let flag = Rc::clone(&dirty);
    let mut app = TodoApp::new(&config, UreqTransport::new(), move |_: &StateChange| flag.set(true));

    // Failures are shown through `last_error` on the first draw.
    let _ = app.load();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "{}", Screen::of(&app))?;
    writeln!(stdout, "type `help` for commands")?;

    for line in stdin.lock().lines() {
        let line = line?;
        let flow = match Command::parse(&line) {
            Ok(Command::List) => {
                dirty.set(true);
                Flow::Continue
            }
            Ok(Command::Help) => {
                writeln!(stdout, "{HELP}")?;
                Flow::Continue
            }
            Ok(command) => {
                let (flow, result) = run_command(&mut app, command, &mut stdout)?;
                if let Err(err) = result {
                    debug!(error = %err, "command failed");
                }
                flow
            }
            Err(err) => {
                writeln!(stdout, "{err}")?;
                Flow::Continue
            }
        };
        if let Flow::Quit = flow {
            break;
        }
        if dirty.replace(false) {
            write!(stdout, "{}", Screen::of(&app))?;
        }
        stdout.flush()?;
    }
    Ok(())
}

fn run_command<T: Transport, O: Observer>(
    app: &mut TodoApp<T, O>,
    command: Command,
    out: &mut impl Write,
) -> io::Result<(Flow, Result<(), ApiError>)> {
    let result = match command {
        Command::Reload => app.load().map(drop),
        Command::Select(id) => {
            if !app.select(id) {
                writeln!(out, "no todo with id {id} in the list")?;
            }
            Ok(())
        }
        Command::New {
            user_id,
            title,
            completed,
        } => {
            app.edit_create_form(|form| {
                form.user_id = user_id;
                form.title = title;
                form.completed = completed;
            });
            app.create().map(drop)
        }
        Command::SetId(id) => {
            app.edit_update_form(|form| form.id = id);
            Ok(())
        }
        Command::SetUser(user_id) => {
            app.edit_update_form(|form| form.user_id = user_id);
            Ok(())
        }
        Command::SetTitle(title) => {
            app.edit_update_form(|form| form.title = title);
            Ok(())
        }
        Command::Toggle => {
            app.edit_update_form(|form| form.completed = !form.completed);
            Ok(())
        }
        Command::Update => {
            if app.is_update_enabled() {
                app.update().map(drop)
            } else {
                writeln!(out, "update is disabled: select a todo and change a field first")?;
                Ok(())
            }
        }
        Command::Delete(id) => {
            if let Some(id) = id {
                app.edit_delete_form(|form| form.id = id);
            }
            app.delete().map(drop)
        }
        Command::Clear => {
            app.edit_create_form(|form| form.reset());
            app.edit_update_form(|form| form.reset());
            app.edit_delete_form(|form| form.reset());
            Ok(())
        }
        Command::Quit => return Ok((Flow::Quit, Ok(()))),
        Command::List | Command::Help => Ok(()),
    };
    Ok((Flow::Continue, result))
}
