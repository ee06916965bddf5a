use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::multispace1;
use nom::combinator::value;
use nom::IResult;
use crate::parser::{text, token, Statement};
use crate::transaction::TransactionKind;

/// Parse `ADD INCOME|EXPENSE 'description' category amount`.
/// The amount is kept as typed and validated by the ledger.
pub(crate) fn parse_add(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("ADD")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, kind) = transaction_kind(input)?;
    let (input, _) = multispace1(input)?;
    let (input, description) = text(input)?;
    let (input, _) = multispace1(input)?;
    let (input, category) = text(input)?;
    let (input, _) = multispace1(input)?;
    let (input, amount) = token(input)?;
    Ok((input, Statement::Add(kind, description, category, amount.to_string())))
}

fn transaction_kind(input: &str) -> IResult<&str, TransactionKind> {
    alt((
        value(TransactionKind::Income, tag_no_case("INCOME")),
        value(TransactionKind::Expense, tag_no_case("EXPENSE")),
    ))(input)
}
