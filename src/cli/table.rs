use colored::*;
use prettytable::{format, Table};

use super::display::LimitRow;
use crate::family::Family;

/// Results table for one family in an ad hoc run
pub struct FamilyTable {
    family: Family,
    suppress: bool,
    inner: Table,
}

fn table_format() -> format::TableFormat {
    format::FormatBuilder::new()
        .padding(1, 1)
        .separator(
            format::LinePosition::Title,
            format::LineSeparator::new('-', '+', '+', '+'),
        )
        .build()
}

impl FamilyTable {
    pub fn new(family: Family, rows: &[LimitRow], suppress: bool) -> Self {
        let mut inner = Table::new();
        inner.set_format(table_format());
        inner.set_titles(LimitRow::titles());
        for row in rows {
            inner.add_row(row.to_row());
        }
        Self {
            family,
            suppress,
            inner,
        }
    }

    fn empty_message(&self) -> Option<&'static str> {
        if !self.inner.is_empty() {
            None
        } else if self.suppress {
            Some("No mismatches")
        } else {
            Some("No peers")
        }
    }

    /// Uncolored rendering, heading included
    pub fn render(&self) -> String {
        let body = match self.empty_message() {
            Some(message) => format!("  {}\n", message),
            None => self.inner.to_string(),
        };
        format!("{} results\n{}", self.family, body)
    }

    pub fn print(&self) {
        println!("{} results", self.family);
        match self.empty_message() {
            Some(message) => println!("  {}", message.green()),
            None => {
                self.inner.printstd();
            }
        }
    }
}
