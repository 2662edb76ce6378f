//! Line oriented command shell over an [Agenda]

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand, ValueEnum};
use ord_table::TraversalOrder;

use crate::{persistence, Agenda};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Level by level from the root
    #[value(alias = "bfs")]
    Breadth,
    /// Ascending name order
    #[value(alias = "dfs")]
    Depth,
}

impl From<Order> for TraversalOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Breadth => TraversalOrder::BreadthFirst,
            Order::Depth => TraversalOrder::DepthFirst,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Shows the record of a municipality
    Find { name: String },
    /// Adds a record given as a `;` separated row, quoted if it has spaces
    Insert { row: String },
    /// Removes a municipality and shows its record
    Remove { name: String },
    /// Lists the names in a traversal order
    List {
        #[arg(value_enum, default_value_t = Order::Depth)]
        order: Order,
    },
    /// Shows the tree shape in a traversal order
    Dump {
        #[arg(value_enum, default_value_t = Order::Breadth)]
        order: Order,
    },
    /// Number of records in the subtree of a municipality
    Size { name: String },
    /// Imports a CSV file
    Import { path: PathBuf },
    /// Exports all records to a CSV file
    Export { path: PathBuf },
    /// Adds random records
    Generate { count: usize },
    /// Removes every record
    Clear,
    /// Writes a RON snapshot
    Save { path: PathBuf },
    /// Replaces the register with a RON snapshot
    Load { path: PathBuf },
    /// Renders the tree shape to an SVG file
    Render { path: PathBuf },
    /// Shows this list of commands
    Help,
    /// Leaves the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Parser, Debug)]
#[command(
    name = "",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

/// Splits a line on whitespace, except inside double quotes
pub fn split_words(line: &str) -> Vec<String> {
    let mut words = vec![];
    let mut word = String::new();
    let mut in_word = false;
    let mut quoted = false;
    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            c => {
                word.push(c);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(word);
    }
    words
}

/// Parses one line of input. Blank lines and `#` comments give `Ok(None)`, a
/// parse failure gives the rendered usage error.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None)
    }
    match Line::try_parse_from(split_words(line)) {
        Ok(parsed) => Ok(Some(parsed.command)),
        Err(e) => Err(e.render().to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<W: Write> {
    agenda: Agenda,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(agenda: Agenda, out: W) -> Self {
        Self { agenda, out }
    }

    pub fn agenda(&self) -> &Agenda {
        &self.agenda
    }

    pub fn into_inner(self) -> (Agenda, W) {
        (self.agenda, self.out)
    }

    /// Runs one command, writing its output or its error message. Only
    /// failures to write the output are returned.
    pub fn execute(&mut self, command: Command) -> io::Result<Flow> {
        tracing::debug!(?command, "executing");
        let agenda = &mut self.agenda;
        let res: Result<String, crate::AgendaError> = match command {
            Command::Find { name } => agenda.find(&name).map(|m| m.to_string()),
            Command::Insert { row } => persistence::parse_row(&row, 1)
                .map_err(crate::AgendaError::Row)
                .and_then(|m| {
                    let name = m.name().to_owned();
                    agenda.insert(m).map(|()| format!("inserted {name}"))
                }),
            Command::Remove { name } => agenda.remove(&name).map(|m| format!("removed {m}")),
            Command::List { order } => Ok(agenda.list(order.into())),
            Command::Dump { order } => Ok(agenda.dump(order.into())),
            Command::Size { name } => Ok(match agenda.subtree_size(&name) {
                Some(size) => size.to_string(),
                None => format!("{name} is not in the register"),
            }),
            Command::Import { path } => agenda
                .import(&path)
                .map(|count| format!("imported {count} records")),
            Command::Export { path } => agenda
                .export(&path)
                .map(|count| format!("exported {count} records")),
            Command::Generate { count } => agenda
                .generate(count)
                .map(|count| format!("generated {count} records")),
            Command::Clear => {
                agenda.clear();
                Ok("cleared".to_owned())
            }
            Command::Save { path } => agenda
                .snapshot_save(&path)
                .map(|()| format!("saved {} records", agenda.len())),
            Command::Load { path } => agenda
                .snapshot_load(&path)
                .map(|count| format!("loaded {count} records")),
            Command::Render { path } => agenda
                .render(&path)
                .map(|()| format!("rendered to {}", path.display())),
            Command::Help => Ok(help_text()),
            Command::Quit => return Ok(Flow::Quit),
        };
        match res {
            Ok(s) => writeln!(self.out, "{s}")?,
            Err(e) => {
                tracing::warn!(%e, "command failed");
                writeln!(self.out, "error: {e}")?
            }
        }
        Ok(Flow::Continue)
    }

    /// Executes every line of `input` until the end or a `quit`
    pub fn run<R: BufRead>(&mut self, input: R, prompt: bool) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }
            let Some(line) = lines.next() else { break };
            let line = line?;
            match parse_command(&line) {
                Ok(Some(command)) => {
                    if self.execute(command)? == Flow::Quit {
                        break
                    }
                }
                Ok(None) => (),
                Err(usage) => writeln!(self.out, "{}", usage.trim_end())?,
            }
        }
        self.out.flush()
    }
}

pub fn help_text() -> String {
    let mut s = String::from("commands:\n");
    let cmd = <Line as clap::CommandFactory>::command();
    for sub in cmd.get_subcommands() {
        let about = sub.get_about().map(|a| a.to_string()).unwrap_or_default();
        s.push_str(&format!("  {:<10}{about}\n", sub.get_name()));
    }
    s.push_str("orders are `breadth` (`bfs`) and `depth` (`dfs`)");
    s
}
