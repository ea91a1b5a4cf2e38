use std::io::Write;

use anyhow::Result;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::{
    app::color::{colorize_change_percent, colorize_price, pad_cell},
    models::QuoteSnapshot,
};

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
pub enum Column {
    #[strum(serialize = "Symbol")]
    Symbol,
    #[strum(serialize = "Pre-Market")]
    PreMarket,
    #[strum(serialize = "Current")]
    Current,
    #[strum(serialize = "Post-Market")]
    PostMarket,
    #[strum(serialize = "Change %")]
    ChangePercent,
}

impl Column {
    pub fn width(&self) -> usize {
        match self {
            Column::Symbol | Column::ChangePercent => 10,
            Column::PreMarket | Column::Current | Column::PostMarket => 12,
        }
    }
}

/// Writes one table: separator, header, separator, a row per quote, separator.
pub fn render<W: Write>(out: &mut W, quotes: &[QuoteSnapshot]) -> Result<()> {
    let separator = separator_line();

    writeln!(out, "{}", separator)?;
    writeln!(out, "{}", header_line())?;
    writeln!(out, "{}", separator)?;
    for quote in quotes {
        writeln!(out, "{}", quote_row(quote))?;
    }
    writeln!(out, "{}", separator)?;
    out.flush()?;

    Ok(())
}

pub fn separator_line() -> String {
    let mut line = String::from("+");
    for column in Column::iter() {
        line.push_str(&"-".repeat(column.width() + 2));
        line.push('+');
    }

    line
}

pub fn header_line() -> String {
    let cells = Column::iter()
        .map(|column| pad_cell(&column.to_string(), column.width()))
        .collect::<Vec<_>>();

    format!("| {} |", cells.join(" | "))
}

fn quote_row(quote: &QuoteSnapshot) -> String {
    let pre_market = colorize_price(quote.pre_market(), quote.prev_close());
    let current = colorize_price(quote.last_done(), quote.prev_close());
    let post_market = colorize_price(quote.post_market(), quote.prev_close());
    let change_percent = colorize_change_percent(quote.last_done(), quote.prev_close());

    format!(
        "| {} | {} | {} | {} | {} |",
        pad_cell(quote.symbol(), Column::Symbol.width()),
        pad_cell(&pre_market, Column::PreMarket.width()),
        pad_cell(&current, Column::Current.width()),
        pad_cell(&post_market, Column::PostMarket.width()),
        pad_cell(&change_percent, Column::ChangePercent.width()),
    )
}
