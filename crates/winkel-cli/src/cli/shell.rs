//! `winkel shell` – interactive session over the lists overview and a single list.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use winkel_core::backend::Backend;
use winkel_core::error::ActionError;
use winkel_core::model::RowId;
use winkel_core::rest::RestClient;
use winkel_core::route::Route;
use winkel_core::views::{ListDetailView, ListsView};

use crate::cli::{prompt, render};

const HELP: &str = "\
commands:
  lists                 show all lists
  open <id>             open a list
  go <path>             navigate by path (\"/\" or \"lijst/<id>\")
  new <name>            create a list
  add <list-id> <name>  add a product (overview)
  add <name>            add a product to the open list
  toggle <product-id>   flip purchased on the open list
  rm <product-id>       delete a product from the open list
  drop [<list-id>]      delete a list (the open one if no id)
  back                  return to the overview
  help                  this text
  quit                  leave the shell
";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ShellCommand {
    Lists,
    Open(RowId),
    Go(Route),
    New(String),
    Add { list: Option<RowId>, name: String },
    Toggle(RowId),
    Remove(RowId),
    Drop(Option<RowId>),
    Back,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

/// Parses one input line. `in_detail` selects the form of `add`.
pub(crate) fn parse(line: &str, in_detail: bool) -> ShellCommand {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };
    match word {
        "" => ShellCommand::Empty,
        "lists" | "ls" => ShellCommand::Lists,
        "open" if !rest.is_empty() => ShellCommand::Open(RowId::from(rest)),
        "go" => ShellCommand::Go(Route::parse(rest)),
        "new" => ShellCommand::New(rest.to_string()),
        "add" if in_detail => ShellCommand::Add {
            list: None,
            name: rest.to_string(),
        },
        "add" => match rest.split_once(char::is_whitespace) {
            Some((id, name)) => ShellCommand::Add {
                list: Some(RowId::from(id)),
                name: name.trim().to_string(),
            },
            None => ShellCommand::Invalid("usage: add <list-id> <name>".to_string()),
        },
        "toggle" if !rest.is_empty() => ShellCommand::Toggle(RowId::from(rest)),
        "rm" if !rest.is_empty() => ShellCommand::Remove(RowId::from(rest)),
        "drop" if rest.is_empty() => ShellCommand::Drop(None),
        "drop" => ShellCommand::Drop(Some(RowId::from(rest))),
        "back" => ShellCommand::Back,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        "open" | "toggle" | "rm" => ShellCommand::Invalid(format!("usage: {} <id>", word)),
        other => ShellCommand::Invalid(format!("unknown command: {} (try help)", other)),
    }
}

fn alert<W: Write>(out: &mut W, e: &ActionError) -> io::Result<()> {
    tracing::warn!("{}: {}", e.message, e.source);
    writeln!(out, "! {} ({})", e.message, e.source)
}

pub(crate) struct Shell<B> {
    route: Route,
    overview: ListsView<B>,
    detail: ListDetailView<B>,
}

impl<B: Backend + Clone> Shell<B> {
    pub(crate) fn new(backend: B) -> Self {
        Self {
            route: Route::Overview,
            overview: ListsView::new(backend.clone()),
            detail: ListDetailView::new(backend),
        }
    }

    /// Reads commands until `quit` or end of input.
    pub(crate) fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<()> {
        self.navigate(Route::Overview, out)?;
        loop {
            write!(out, "{}> ", self.route.path())?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(());
            }
            let in_detail = matches!(self.route, Route::Detail(_));
            if !self.execute(parse(&line, in_detail), input, out)? {
                return Ok(());
            }
        }
    }

    /// Switches route and reloads the target view, like opening the page.
    fn navigate<W: Write>(&mut self, route: Route, out: &mut W) -> io::Result<()> {
        self.route = route;
        match &self.route {
            Route::Overview => {
                self.overview.load();
                self.render_overview(out)
            }
            Route::Detail(id) => {
                self.detail.load(id);
                self.render_detail(out)
            }
        }
    }

    fn render_overview<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(err) = &self.overview.error {
            writeln!(out, "! {}", err)?;
        }
        write!(out, "{}", render::lists_table(&self.overview.lists))
    }

    fn render_detail<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(err) = &self.detail.error {
            writeln!(out, "! {}", err)?;
        }
        match &self.detail.list {
            Some(list) => write!(out, "{}", render::list_detail(list, &self.detail.products)),
            None => Ok(()),
        }
    }

    /// Runs one command. Returns `false` when the session should end.
    fn execute<R: BufRead, W: Write>(
        &mut self,
        cmd: ShellCommand,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<bool> {
        let in_detail = matches!(self.route, Route::Detail(_));
        match cmd {
            ShellCommand::Empty => {}
            ShellCommand::Quit => return Ok(false),
            ShellCommand::Help => write!(out, "{}", HELP)?,
            ShellCommand::Invalid(msg) => writeln!(out, "{}", msg)?,
            ShellCommand::Lists | ShellCommand::Back => self.navigate(Route::Overview, out)?,
            ShellCommand::Open(id) => self.navigate(Route::Detail(id), out)?,
            ShellCommand::Go(route) => self.navigate(route, out)?,
            ShellCommand::New(name) => match self.overview.create_list(&name) {
                Ok(false) => writeln!(out, "list name is empty")?,
                Ok(true) if in_detail => writeln!(out, "created list \"{}\"", name.trim())?,
                Ok(true) => self.render_overview(out)?,
                Err(e) => alert(out, &e)?,
            },
            ShellCommand::Add { list: None, name } => match self.detail.add_product(&name) {
                Ok(false) => writeln!(out, "product name is empty")?,
                Ok(true) => self.render_detail(out)?,
                Err(e) => alert(out, &e)?,
            },
            ShellCommand::Add {
                list: Some(list),
                name,
            } => {
                if self.overview.lists.is_empty() {
                    self.overview.load();
                }
                match self.overview.add_product(&list, &name) {
                    Ok(Some(msg)) => writeln!(out, "{}", msg)?,
                    Ok(None) => writeln!(out, "product name is empty")?,
                    Err(e) => alert(out, &e)?,
                }
            }
            ShellCommand::Toggle(_) | ShellCommand::Remove(_) if !in_detail => {
                writeln!(out, "open a list first")?
            }
            ShellCommand::Toggle(id) => match self.detail.toggle_product(&id) {
                Ok(_) => self.render_detail(out)?,
                Err(e) => alert(out, &e)?,
            },
            ShellCommand::Remove(id) => {
                if prompt::confirm_with(input, out, "Delete this product?")? {
                    match self.detail.delete_product(&id) {
                        Ok(()) => self.render_detail(out)?,
                        Err(e) => alert(out, &e)?,
                    }
                }
            }
            ShellCommand::Drop(None) if !in_detail => writeln!(out, "usage: drop <list-id>")?,
            ShellCommand::Drop(None) => self.drop_open_list(input, out)?,
            ShellCommand::Drop(Some(id)) => self.drop_list(&id, input, out)?,
        }
        Ok(true)
    }

    fn drop_open_list<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<()> {
        let name = match &self.detail.list {
            Some(list) => list.name.clone(),
            None => return writeln!(out, "no list is open"),
        };
        if !prompt::confirm_with(input, out, &format!("Delete \"{}\"?", name))? {
            return Ok(());
        }
        match self.detail.delete_list() {
            Ok(route) => self.navigate(route, out),
            Err(e) => alert(out, &e),
        }
    }

    fn drop_list<R: BufRead, W: Write>(
        &mut self,
        id: &RowId,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<()> {
        self.overview.load();
        let name = match self.overview.find(id) {
            Some(list) => list.name.clone(),
            None => return writeln!(out, "list not found"),
        };
        if !prompt::confirm_with(input, out, &format!("Delete \"{}\"?", name))? {
            return Ok(());
        }
        match self.overview.delete_list(id) {
            Ok(()) => self.navigate(Route::Overview, out),
            Err(e) => alert(out, &e),
        }
    }
}

pub fn run_shell(client: &RestClient) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    Shell::new(client).run(&mut input, &mut out)?;
    Ok(())
}
