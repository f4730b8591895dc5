//! Line-oriented note shell.
//!
//! # Responsibility
//! - Map one input line to one store action and render the result.
//! - Ask for confirmation before deleting.
//!
//! # Invariants
//! - Every state change goes through `NoteStore`; the shell keeps only the
//!   current search text.
//! - Selecting another note drops unsaved draft edits without asking.

use jotter_core::service::sidebar::{last_updated_label, DELETE_CONFIRM_PROMPT};
use jotter_core::{
    editor_pane, sidebar_view, EditorPane, KeyValueRepository, NoteId, NoteStore,
};
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  new                 create a note and select it
  list                show notes matching the current search
  search [text]       set the search text (empty clears it)
  select <id|n>       select a note by id, or row n of the list
  title <text>        set the draft title
  body <text>         replace the draft body
  append <text>       add a line to the draft body
  show                show the selected note
  save                save the draft
  delete              delete the selected note
  help                show this help
  quit                leave";

/// Result of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

pub struct Shell<R: KeyValueRepository> {
    store: NoteStore<R>,
    query: String,
}

impl<R: KeyValueRepository> Shell<R> {
    pub fn new(store: NoteStore<R>) -> Self {
        Self {
            store,
            query: String::new(),
        }
    }

    pub fn store(&self) -> &NoteStore<R> {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Handles one command line; `confirm` answers yes/no prompts.
    pub fn handle(&mut self, line: &str, mut confirm: impl FnMut(&str) -> bool) -> Outcome {
        let line = line.trim_end_matches(['\r', '\n']);
        let (command, arg) = match line.trim_start().split_once(' ') {
            Some((command, arg)) => (command, arg),
            None => (line.trim(), ""),
        };

        let output = match command {
            "" => String::new(),
            "new" => {
                self.store.create();
                self.render_editor()
            }
            "list" => self.render_sidebar(),
            "search" => {
                self.query = arg.to_string();
                self.render_sidebar()
            }
            "select" => self.select(arg.trim()),
            "title" | "body" | "append" => self.edit(command, arg),
            "show" => self.render_editor(),
            "save" => match self.store.save_draft() {
                Ok(true) => "Saved.".to_string(),
                Ok(false) => "No note selected.".to_string(),
                Err(err) => format!("Not saved: {err}"),
            },
            "delete" => self.delete(&mut confirm),
            "help" => HELP.to_string(),
            "quit" | "exit" => return Outcome::Quit,
            other => format!("Unknown command `{other}`. Type `help` for a list."),
        };
        Outcome::Continue(output)
    }

    /// Selects by exact note id first, then by 1-based row number.
    fn select(&mut self, target: &str) -> String {
        let exact = self.store.get(&NoteId::from(target)).is_some();
        let id = Some(target)
            .filter(|_| !exact)
            .and_then(|target| target.parse::<usize>().ok())
            .and_then(|row| row.checked_sub(1))
            .and_then(|idx| {
                self.store
                    .visible(&self.query)
                    .get(idx)
                    .map(|note| note.id.to_string())
            })
            .unwrap_or_else(|| target.to_string());

        self.store.select(&id);
        if self.store.active_id().is_none() && !target.is_empty() {
            return format!("No note `{target}`.\n{}", self.render_editor());
        }
        self.render_editor()
    }

    fn edit(&mut self, field: &str, text: &str) -> String {
        if self.store.active_id().is_none() {
            return "No note selected.".to_string();
        }
        let draft = self.store.draft_mut();
        match field {
            "title" => draft.set_title(text),
            "body" => draft.set_body(text),
            _ => draft.append_body_line(text),
        }
        self.render_editor()
    }

    fn delete(&mut self, confirm: &mut impl FnMut(&str) -> bool) -> String {
        let Some(id) = self.store.active_id().cloned() else {
            return "No note selected.".to_string();
        };
        if !confirm(DELETE_CONFIRM_PROMPT) {
            return "Kept.".to_string();
        }
        self.store.delete(&id);
        "Deleted.".to_string()
    }

    fn render_sidebar(&self) -> String {
        let query = self.query();
        let view = sidebar_view(&self.store, query);
        let mut out = String::new();
        if query.is_empty() {
            out.push_str("Notes\n");
        } else {
            let _ = writeln!(out, "Notes matching \"{query}\"");
        }
        if let Some(message) = view.empty_message {
            out.push_str(message);
            return out;
        }
        for (idx, item) in view.items.iter().enumerate() {
            let marker = if item.active { '>' } else { ' ' };
            let _ = write!(out, "{marker} {:>2}. {}", idx + 1, item.label);
            if !item.preview.is_empty() {
                let _ = write!(out, " | {}", item.preview);
            }
            out.push('\n');
        }
        out.truncate(out.trim_end().len());
        out
    }

    fn render_editor(&self) -> String {
        match editor_pane(&self.store) {
            EditorPane::Placeholder(message) => message.to_string(),
            EditorPane::Editing { note, draft, dirty } => {
                let mut out = String::new();
                let _ = writeln!(out, "Title: {}", draft.title());
                let _ = writeln!(out, "Body:\n{}", draft.body());
                if dirty {
                    out.push_str("(unsaved changes)\n");
                }
                out.push_str(&last_updated_label(note));
                out
            }
        }
    }
}

/// Reads commands from `input` until `quit` or end of input.
pub fn run<R, I, W>(shell: &mut Shell<R>, input: &mut I, output: &mut W) -> io::Result<()>
where
    R: KeyValueRepository,
    I: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        let outcome = shell.handle(&line, |prompt| {
            ask(&mut *input, &mut *output, prompt).unwrap_or(false)
        });
        match outcome {
            Outcome::Quit => return Ok(()),
            Outcome::Continue(text) if text.is_empty() => {}
            Outcome::Continue(text) => writeln!(output, "{text}")?,
        }
    }
}

fn ask(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> io::Result<bool> {
    write!(output, "{prompt} [y/N] ")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
