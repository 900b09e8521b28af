//! # Console
//!
//! The client's only window onto the user: prompts, a material table and
//! modal-style dialogs. [`TerminalConsole`] implements it over any
//! `BufRead`/`Write` pair, stdin/stdout in production.

use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::model::Material;

use super::errors::ClientResult;

/// Dialog severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Warning,
    Error,
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogKind::Info => write!(f, "INFO"),
            DialogKind::Warning => write!(f, "WARNING"),
            DialogKind::Error => write!(f, "ERROR"),
        }
    }
}

/// User interaction surface
pub trait Console {
    /// Screen heading
    fn title(&mut self, title: &str) -> ClientResult<()>;

    /// Free text line
    fn line(&mut self, text: &str) -> ClientResult<()>;

    /// Tabular view of materials (id, name, description)
    fn table(&mut self, materials: &[Material]) -> ClientResult<()>;

    /// Ask for one line of input. `None` means input has ended.
    fn prompt(&mut self, label: &str) -> ClientResult<Option<String>>;

    /// Yes/no question; end of input counts as "no"
    fn confirm(&mut self, title: &str, question: &str) -> ClientResult<bool>;

    /// Show a message the user must acknowledge
    fn dialog(&mut self, kind: DialogKind, title: &str, message: &str) -> ClientResult<()>;
}

/// Line-oriented terminal console
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> ClientResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Render materials as a fixed-width table
pub fn render_table(materials: &[Material]) -> String {
    const HEADERS: [&str; 3] = ["ID", "Name", "Description"];

    let rows: Vec<[String; 3]> = materials
        .iter()
        .map(|m| [m.id.to_string(), m.name.clone(), m.description.clone()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 3]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| {
                let pad = width - cell.chars().count();
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect();
        padded.join(" | ").trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&format_row(HEADERS));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');

    if rows.is_empty() {
        out.push_str("(no materials)\n");
    }
    for row in &rows {
        out.push_str(&format_row([row[0].as_str(), row[1].as_str(), row[2].as_str()]));
        out.push('\n');
    }
    out
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn title(&mut self, title: &str) -> ClientResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "== {} ==", title)?;
        Ok(())
    }

    fn line(&mut self, text: &str) -> ClientResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn table(&mut self, materials: &[Material]) -> ClientResult<()> {
        write!(self.output, "{}", render_table(materials))?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> ClientResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn confirm(&mut self, title: &str, question: &str) -> ClientResult<bool> {
        write!(self.output, "[{}] {} [y/N]: ", title, question)?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    fn dialog(&mut self, kind: DialogKind, title: &str, message: &str) -> ClientResult<()> {
        writeln!(self.output, "[{}] {}: {}", kind, title, message)?;
        Ok(())
    }
}
