//! Interactive numbered menu
//!
//! Reads choices line by line from any `BufRead` and writes to any `Write`, so
//! the loop runs against a terminal or a scripted buffer alike.

use std::io::{BufRead, Write};
use std::path::Path;

use colored::Colorize;
use tracing::{debug, instrument};

use crate::application::report;
use crate::application::services::CatalogService;
use crate::application::Session;
use crate::infrastructure::{InfraError, InfraResult};

pub const NOT_LOADED: &str = "No data loaded. Please load the file data first.";
pub const NOT_FOUND: &str = "Course not found.";
pub const INVALID_OPTION: &str = "Invalid option. Please try again.";
pub const GOODBYE: &str = "Exiting the program. Goodbye!";

/// Menu entries, keyed by the number the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    List,
    Show,
    Exit,
}

impl MenuChoice {
    /// Parse the user's input line; `None` for anything but a known number.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            1 => Some(Self::Load),
            2 => Some(Self::List),
            3 => Some(Self::Show),
            9 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Menu loop over one session.
pub struct Menu<'a, R, W> {
    catalog: &'a CatalogService,
    catalog_file: &'a Path,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(catalog: &'a CatalogService, catalog_file: &'a Path, input: R, out: W) -> Self {
        Self {
            catalog,
            catalog_file,
            input,
            out,
        }
    }

    /// Run until the user exits or input ends.
    #[instrument(level = "debug", skip_all)]
    pub fn run(&mut self, session: &mut Session) -> InfraResult<()> {
        loop {
            self.emit(&menu_text())?;
            let Some(line) = self.read_line()? else {
                debug!("input closed");
                self.emit(&format!("\n{}\n", GOODBYE))?;
                return Ok(());
            };

            let choice = MenuChoice::parse(&line);
            debug!("menu choice: {:?}", choice);
            match choice {
                Some(MenuChoice::Load) => self.load(session)?,
                Some(MenuChoice::List) => self.list(session)?,
                Some(MenuChoice::Show) => {
                    if !self.show(session)? {
                        self.emit(&format!("\n{}\n", GOODBYE))?;
                        return Ok(());
                    }
                }
                Some(MenuChoice::Exit) => {
                    self.emit(&format!("{}\n", GOODBYE))?;
                    return Ok(());
                }
                None => self.emit(&format!("{}\n", INVALID_OPTION))?,
            }
        }
    }

    fn load(&mut self, session: &mut Session) -> InfraResult<()> {
        let mut lines = vec!["Loading file data...".to_string()];
        match self.catalog.load(self.catalog_file, session) {
            Ok(report) => {
                lines.extend(
                    report
                        .rejected
                        .iter()
                        .map(|r| format!("Error: Invalid format in line: {}", r.content)),
                );
                lines.push("Courses successfully loaded from file.".to_string());
                lines.push(format!(
                    "Data successfully loaded! {} course(s) in catalog.",
                    session.index().len()
                ));
            }
            Err(e) => lines.push(format!("Error: {}", e)),
        }
        self.emit(&format!("{}\n", lines.join("\n")))
    }

    fn list(&mut self, session: &Session) -> InfraResult<()> {
        if !session.is_loaded() {
            return self.emit(&format!("{}\n", NOT_LOADED));
        }
        let mut text = String::from("Printing all courses in alphanumeric order...\n");
        for course in session.courses() {
            text.push_str(&report::course_details(course));
            text.push('\n');
        }
        self.emit(&text)
    }

    /// Returns false when input ended while waiting for a course number.
    fn show(&mut self, session: &Session) -> InfraResult<bool> {
        if !session.is_loaded() {
            self.emit(&format!("{}\n", NOT_LOADED))?;
            return Ok(true);
        }
        self.emit("Enter the course number to search: ")?;
        let Some(identifier) = self.read_token()? else {
            return Ok(false);
        };

        let found = session.lookup(&identifier);
        let text = match found {
            Some(course) => format!("{}\n", report::course_details(course)),
            None => format!("{}\n", NOT_FOUND),
        };
        self.emit(&text)?;
        Ok(true)
    }

    /// First whitespace-delimited token of the next non-blank line.
    ///
    /// Blank lines are skipped; `None` once input ends.
    fn read_token(&mut self) -> InfraResult<Option<String>> {
        while let Some(line) = self.read_line()? {
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
        Ok(None)
    }

    fn read_line(&mut self) -> InfraResult<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| InfraError::io("read menu input", e))?;
        Ok((read > 0).then_some(line))
    }

    fn emit(&mut self, text: &str) -> InfraResult<()> {
        self.out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| InfraError::io("write menu output", e))
    }
}

fn menu_text() -> String {
    format!(
        "\n{}\n\
         1. Load the file data into the data structure\n\
         2. Print an alphanumerically ordered list of all courses\n\
         3. Print course title and prerequisites for a specific course\n\
         9. Exit the program\n\
         Enter your choice: ",
        "Menu Options:".cyan().bold()
    )
}
