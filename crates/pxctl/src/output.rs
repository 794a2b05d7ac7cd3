use serde::Serialize;
use std::io::{self, Write};

#[derive(clap::Args, Clone, Debug, Default)]
pub struct Output {
    /// How to format CLI output
    #[clap(global = true, short, long, value_enum)]
    pub output: Option<OutputType>,
}

#[derive(clap::ValueEnum, Debug, Copy, Clone, PartialEq)]
pub enum OutputType {
    /// Format output as compact JSON with items separated by newlines
    Json,
    /// Format output as YAML
    Yaml,
    /// Format the output as a pretty-printed table
    Table,
    /// Format the output as a pretty-printed table with additional columns
    Wide,
}

/// A trait for things that can be output from the CLI as either JSON, YAML, or a table.
/// The body of this trait is focused on table output, since JSON and YAML are both handled
/// by `Serialize`.
pub trait CliOutput: Serialize {
    /// Allows threading through an alternate representation of table output,
    /// such as the additional columns of `--output wide`.
    /// `type TableAlt = ();` is used to opt out of having an alternative representation.
    type TableAlt: Copy;
    /// The type output from `into_table_row`. Common types are `String`, or
    /// anything implementing `std::fmt::Display`.
    type CellValue: Into<comfy_table::Cell>;

    /// Returns the column headers of the table.
    fn table_headers(alt: Self::TableAlt) -> Vec<&'static str>;

    /// Converts this item into a tablular representation. The returned cells must be in the
    /// same order as the `table_headers`.
    fn into_table_row(self, alt: Self::TableAlt) -> Vec<Self::CellValue>;
}

pub fn print_yaml(items: impl IntoIterator<Item = impl CliOutput>) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    for item in items {
        serde_yaml::to_writer(&mut stdout, &item)?;
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

pub fn print_json(items: impl IntoIterator<Item = impl CliOutput>) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    for item in items {
        serde_json::to_writer(&mut stdout, &item)?;
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

pub fn print_table<T: CliOutput>(
    alt: T::TableAlt,
    items: impl IntoIterator<Item = T>,
) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    let mut table = render_table(alt, items);

    for line in table.lines() {
        stdout.write_all(line.as_bytes())?;
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

pub fn render_table<T: CliOutput>(
    alt: T::TableAlt,
    items: impl IntoIterator<Item = T>,
) -> comfy_table::Table {
    let mut table = crate::new_table(T::table_headers(alt));

    for item in items {
        table.add_row(item.into_table_row(alt));
    }
    table
}
