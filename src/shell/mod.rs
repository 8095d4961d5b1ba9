//! Interactive shell
//!
//! A line-oriented menu loop over any `BufRead`/`Write` pair. End of input
//! at any prompt leaves the current action and, at the main menu, exits.

pub mod menu;

use std::io::{BufRead, Write};

use crate::display::format_record_table;
use crate::error::{LedgerError, LedgerResult};
use crate::export::export_to_file;
use crate::models::parse_amount;
use crate::reports::{MonthlyReport, SummaryReport};
use crate::services::{CreateRecordInput, RecordFilter, RecordService};
use crate::storage::RecordStore;

pub use menu::MenuChoice;

/// The interactive menu loop
pub struct Shell<'a, R, W> {
    store: &'a mut RecordStore,
    default_category: &'a str,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(store: &'a mut RecordStore, default_category: &'a str, input: R, output: W) -> Self {
        Self {
            store,
            default_category,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> LedgerResult<()> {
        writeln!(
            self.output,
            "Loaded {} records from {}",
            self.store.len(),
            self.store.path().display()
        )?;

        loop {
            self.print_menu()?;

            let Some(line) = self.prompt("Choose an option: ")? else {
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Add) => self.add_record()?,
                Some(MenuChoice::List) => self.list_records()?,
                Some(MenuChoice::Summary) => self.show_summary()?,
                Some(MenuChoice::Monthly) => self.show_monthly()?,
                Some(MenuChoice::Export) => self.export()?,
                Some(MenuChoice::Exit) => break,
                None => writeln!(self.output, "Invalid option: {}", line)?,
            }
        }

        writeln!(self.output, "Goodbye.")?;
        Ok(())
    }

    fn print_menu(&mut self) -> LedgerResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Ledger ===")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}) {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    fn add_record(&mut self) -> LedgerResult<()> {
        let Some(date) = self.prompt("Enter date (YYYY-MM-DD) [leave blank for today]: ")? else {
            return Ok(());
        };
        let Some(amount_text) =
            self.prompt("Enter amount (positive for income, negative for expense): ")?
        else {
            return Ok(());
        };

        let amount = match parse_amount(&amount_text) {
            Ok(amount) => amount,
            Err(_) => {
                writeln!(self.output, "Invalid amount. Aborting add.")?;
                return Ok(());
            }
        };

        let Some(category) = self.prompt("Enter category (e.g., Food, Salary, Rent): ")? else {
            return Ok(());
        };
        let Some(note) = self.prompt("Enter note (optional): ")? else {
            return Ok(());
        };

        let input = CreateRecordInput {
            date: Some(date),
            amount,
            category: Some(category),
            note: Some(note),
        };

        match RecordService::new(self.store, self.default_category).add(input) {
            Ok(_) => writeln!(self.output, "Record added.")?,
            Err(e @ LedgerError::LineBreak(_)) => writeln!(self.output, "{}. Aborting add.", e)?,
            Err(e) => writeln!(self.output, "Failed to save record: {}", e)?,
        }

        Ok(())
    }

    fn list_records(&mut self) -> LedgerResult<()> {
        let mut filter = RecordFilter::new();

        let Some(answer) = self.prompt("Filter by date range? (y/n): ")? else {
            return Ok(());
        };
        if is_yes(&answer) {
            let Some(from) = self.prompt("From (YYYY-MM-DD) [leave blank for no lower bound]: ")?
            else {
                return Ok(());
            };
            let Some(to) = self.prompt("To (YYYY-MM-DD)   [leave blank for no upper bound]: ")?
            else {
                return Ok(());
            };
            filter = filter.from_date(from).to_date(to);
        }

        let Some(answer) = self.prompt("Filter by category? (y/n): ")? else {
            return Ok(());
        };
        if is_yes(&answer) {
            let Some(category) = self.prompt("Enter category: ")? else {
                return Ok(());
            };
            filter = filter.category(category);
        }

        let filtered = filter.apply(self.store.records());
        write!(self.output, "{}", format_record_table(&filtered))?;

        let Some(answer) = self.prompt("\nShow summary for these records? (y/n): ")? else {
            return Ok(());
        };
        if is_yes(&answer) {
            write!(self.output, "{}", SummaryReport::generate(&filtered).format_terminal())?;
        }

        Ok(())
    }

    fn show_summary(&mut self) -> LedgerResult<()> {
        let report = SummaryReport::generate(self.store.records());
        write!(self.output, "{}", report.format_terminal())?;
        Ok(())
    }

    fn show_monthly(&mut self) -> LedgerResult<()> {
        let report = MonthlyReport::generate(self.store.records());
        write!(self.output, "{}", report.format_terminal())?;
        Ok(())
    }

    fn export(&mut self) -> LedgerResult<()> {
        let Some(name) = self.prompt("Enter filename to export to (e.g., export.csv): ")? else {
            return Ok(());
        };

        match export_to_file(self.store.records(), &name) {
            Ok(count) => writeln!(self.output, "Exported {} records to {}", count, name)?,
            Err(LedgerError::EmptyFilename) => writeln!(self.output, "Invalid filename.")?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }

        Ok(())
    }

    /// Prompt for a line of input; `None` at end of input
    ///
    /// Only the line terminator is removed, the answer is otherwise as typed.
    fn prompt(&mut self, prompt: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line
            .strip_suffix('\n')
            .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
            .unwrap_or(&line);
        Ok(Some(answer.to_string()))
    }
}

fn is_yes(answer: &str) -> bool {
    answer.starts_with(['y', 'Y'])
}
