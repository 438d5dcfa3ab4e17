// Line-driven terminal front-end
//
// Reads one command per line, drives `App` and re-renders the list after
// every change. Tasks are addressed by their 1-based row in the current list.

use crate::app::App;
use crate::models::{Priority, TaskId};
use crate::render;
use crate::store::Upsert;
use eyre::Result;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

/// Answer that clears the description
const CLEAR: &str = "-";

const HELP: &str = "\
Commands:
  list, ls          show the task list
  new, add          create a task
  edit N            edit the task in row N
  delete N, rm N    delete the task in row N
  sort              sort by priority (direction alternates)
  json              print the tasks as JSON
  help              show this help
  quit, exit        leave

In forms an empty answer keeps the value in brackets; '-' clears the description.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    New,
    Edit(usize),
    Delete(usize),
    Sort,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("'{0}' needs a row number")]
    MissingRow(String),
    #[error("'{0}' is not a row number")]
    BadRow(String),
}

impl std::str::FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default().to_ascii_lowercase();

        match verb.as_str() {
            "list" | "ls" | "" => Ok(Command::List),
            "new" | "add" => Ok(Command::New),
            "edit" => parse_row(&verb, parts.next()).map(Command::Edit),
            "delete" | "rm" => parse_row(&verb, parts.next()).map(Command::Delete),
            "sort" => Ok(Command::Sort),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(ParseCommandError::Unknown(verb.clone())),
        }
    }
}

fn parse_row(verb: &str, arg: Option<&str>) -> Result<usize, ParseCommandError> {
    let arg = arg.ok_or_else(|| ParseCommandError::MissingRow(verb.to_string()))?;
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseCommandError::BadRow(arg.to_string())),
    }
}

pub struct Shell<R, W> {
    app: App,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(app: App, input: R, output: W) -> Self {
        Self { app, input, output }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");
        writeln!(self.output, "Task list")?;
        self.show()?;

        while let Some(line) = self.prompt("> ")? {
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };
            debug!(?command, "Dispatching");
            if !self.execute(command)? {
                break;
            }
        }

        info!(tasks = self.app.tasks().len(), "Session ended");
        Ok(())
    }

    /// Returns false when the session should end
    pub fn execute(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::List => self.show()?,
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => return Ok(false),
            Command::Json => {
                let json = serde_json::to_string_pretty(self.app.tasks())?;
                writeln!(self.output, "{}", json)?;
            }
            Command::Sort => {
                self.app.toggle_sort();
                self.show()?;
            }
            Command::New => {
                self.app.open_new_form();
                self.run_form()?;
            }
            Command::Edit(row) => {
                if let Some(id) = self.task_at(row)? {
                    self.app.begin_edit(id);
                    self.run_form()?;
                }
            }
            Command::Delete(row) => {
                if let Some(id) = self.task_at(row)? {
                    if let Some(task) = self.app.delete(id) {
                        writeln!(self.output, "Deleted '{}'", task.name)?;
                    }
                    self.show()?;
                }
            }
        }
        Ok(true)
    }

    fn task_at(&mut self, row: usize) -> Result<Option<TaskId>> {
        let id = row.checked_sub(1).and_then(|i| self.app.tasks().get(i)).map(|t| t.id);
        if id.is_none() {
            writeln!(self.output, "No task at row {}", row)?;
        }
        Ok(id)
    }

    fn show(&mut self) -> Result<()> {
        writeln!(self.output, "[{}]", render::sort_label(self.app.sort_direction()))?;
        writeln!(self.output, "{}", render::task_list(self.app.tasks()))?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Prompt for a field, showing the current value. An empty answer keeps it.
    fn prompt_field(&mut self, label: &str, current: &str) -> Result<Option<String>> {
        let label = if current.is_empty() {
            format!("{}: ", label)
        } else {
            format!("{} [{}]: ", label, current)
        };
        Ok(self
            .prompt(&label)?
            .map(|answer| if answer.is_empty() { current.to_string() } else { answer }))
    }

    fn prompt_priority(&mut self) -> Result<Option<Priority>> {
        loop {
            let current = self.app.form().priority;
            let label = format!("Priority ({})", render::priority_choices());
            let Some(answer) = self.prompt_field(&label, current.as_str())? else {
                return Ok(None);
            };
            match answer.parse::<Priority>() {
                Ok(priority) => return Ok(Some(priority)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Fill in and submit the open form. End of input cancels it.
    fn run_form(&mut self) -> Result<()> {
        writeln!(self.output, "{}", render::form_title(self.app.editing()))?;

        let mut ask_rest = true;
        loop {
            let current = self.app.form().name.clone();
            let Some(name) = self.prompt_field("Name", &current)? else {
                return self.cancel_form();
            };
            self.app.set_name(name);

            if ask_rest {
                let current = self.app.form().description.clone();
                let label = if current.is_empty() {
                    "Description".to_string()
                } else {
                    format!("Description ('{}' clears)", CLEAR)
                };
                let Some(description) = self.prompt_field(&label, &current)? else {
                    return self.cancel_form();
                };
                if description == CLEAR {
                    self.app.set_description("");
                } else {
                    self.app.set_description(description);
                }

                let Some(priority) = self.prompt_priority()? else {
                    return self.cancel_form();
                };
                self.app.set_priority(priority);
                ask_rest = false;
            }

            match self.app.submit() {
                Ok(outcome) => {
                    let message = match outcome {
                        Upsert::Created(_) => "Task added",
                        Upsert::Updated(_) => "Task updated",
                        Upsert::Missing(_) => "Task no longer exists, nothing saved",
                    };
                    writeln!(self.output, "{}", message)?;
                    return self.show();
                }
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }
    }

    fn cancel_form(&mut self) -> Result<()> {
        self.app.cancel();
        writeln!(self.output)?;
        writeln!(self.output, "Cancelled")?;
        Ok(())
    }
}
