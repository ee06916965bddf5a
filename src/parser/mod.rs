mod add;
mod delete;
mod export;
mod report;

use anyhow::anyhow;
use chrono::NaiveDate;
use nom::branch::alt;
use nom::bytes::complete::is_not;
use nom::character::complete::{char, digit1};
use nom::combinator::{map, map_res, opt, recognize};
use nom::error::ErrorKind;
use nom::multi::{many1, separated_list0};
use nom::sequence::{delimited, tuple};
use nom::{InputTakeAtPosition, IResult};
use crate::transaction::TransactionKind;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Statement {
    /// ADD INCOME|EXPENSE description category amount
    Add(TransactionKind, String, String, String),
    /// DELETE yyyy-mm-dd description category
    Delete(NaiveDate, String, String),
    Clear,
    /// EXPORT TO file_path
    Export(String),
    /// LIST [category]
    List(Option<String>),
    Totals,
    /// CATEGORIES [category]
    Categories(Option<String>),
    /// MONTHLY [EXPENSES|INCOME]. `None` compares both kinds side by side.
    Monthly(Option<TransactionKind>),
    Help,
}

/// Parse one command. A trailing `;` is optional.
pub(crate) fn parse(command: &str) -> anyhow::Result<Statement> {
    let command = command.trim().trim_end_matches(';').trim_end();
    let result = alt((
        add::parse_add,
        delete::parse_delete,
        export::parse_export,
        report::parse_clear,
        report::parse_list,
        report::parse_totals,
        report::parse_categories,
        report::parse_monthly,
        report::parse_help,
    ))(command);

    match result {
        Ok((rest, statement)) if rest.trim().is_empty() => Ok(statement),
        Ok((rest, _)) => Err(anyhow!("Unexpected input '{}'", rest.trim())),
        Err(e) => Err(anyhow!("Unable to parse '{}': {}", command, e)),
    }
}

/// Split a script into its `;` separated commands, dropping empty ones.
/// A `;` inside a quoted string does not end a command.
pub(crate) fn split_statements(script: &str) -> anyhow::Result<Vec<&str>> {
    let result: IResult<&str, Vec<Option<&str>>> = separated_list0(char(';'), opt(statement_text))(script);
    match result {
        Ok(("", commands)) => Ok(commands.into_iter().flatten().map(str::trim).filter(|c| !c.is_empty()).collect()),
        Ok((rest, _)) => Err(anyhow!("Unbalanced quote at '{}'", rest.trim())),
        Err(e) => Err(anyhow!("Unable to split '{}': {}", script, e)),
    }
}

fn statement_text(input: &str) -> IResult<&str, &str> {
    recognize(many1(alt((recognize(quoted), is_not("';")))))(input)
}

/// A run of characters up to the next whitespace or `;`
pub(crate) fn token(input: &str) -> IResult<&str, &str> {
    input.split_at_position1_complete(|c: char| c.is_whitespace() || c == ';', ErrorKind::Space)
}

/// Either a single quoted string, which may contain spaces, or a bare token
pub(crate) fn text(input: &str) -> IResult<&str, String> {
    map(alt((quoted, token)), str::to_string)(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('\''), is_not("'"), char('\''))(input)
}

pub(crate) fn yyyy_mm_dd_date(input: &str) -> IResult<&str, NaiveDate> {
    map_res(
        recognize(tuple((digit1, char('-'), digit1, char('-'), digit1))),
        |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d"),
    )(input)
}
