use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::multispace1;
use nom::combinator::{opt, value};
use nom::sequence::preceded;
use nom::IResult;
use crate::parser::{text, Statement};
use crate::transaction::TransactionKind;

/// Category filter value meaning "no filter"
const ALL_CATEGORIES: &str = "all";

pub(crate) fn parse_clear(input: &str) -> IResult<&str, Statement> {
    value(Statement::Clear, tag_no_case("CLEAR"))(input)
}

pub(crate) fn parse_totals(input: &str) -> IResult<&str, Statement> {
    value(Statement::Totals, tag_no_case("TOTALS"))(input)
}

pub(crate) fn parse_help(input: &str) -> IResult<&str, Statement> {
    value(Statement::Help, tag_no_case("HELP"))(input)
}

/// Parse `LIST [category]`
pub(crate) fn parse_list(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("LIST")(input)?;
    let (input, category) = category_filter(input)?;
    Ok((input, Statement::List(category)))
}

/// Parse `CATEGORIES [category]`
pub(crate) fn parse_categories(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("CATEGORIES")(input)?;
    let (input, category) = category_filter(input)?;
    Ok((input, Statement::Categories(category)))
}

/// Parse `MONTHLY [EXPENSES|INCOME]`
pub(crate) fn parse_monthly(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("MONTHLY")(input)?;
    let (input, kind) = opt(preceded(multispace1, alt((
        value(TransactionKind::Expense, tag_no_case("EXPENSES")),
        value(TransactionKind::Expense, tag_no_case("EXPENSE")),
        value(TransactionKind::Income, tag_no_case("INCOME")),
    ))))(input)?;
    Ok((input, Statement::Monthly(kind)))
}

fn category_filter(input: &str) -> IResult<&str, Option<String>> {
    let (input, category) = opt(preceded(multispace1, text))(input)?;
    Ok((input, category.filter(|c| !c.eq_ignore_ascii_case(ALL_CATEGORIES))))
}

#[cfg(test)]
mod tests {
    use crate::parser::report::{parse_categories, parse_list, parse_monthly};
    use crate::parser::{parse, Statement};
    use crate::transaction::TransactionKind;

    #[test]
    fn test_list() {
        assert_eq!(parse_list("LIST").unwrap().1, Statement::List(None));
        assert_eq!(parse_list("list All").unwrap().1, Statement::List(None));
        assert_eq!(parse_list("LIST 'Eating out'").unwrap().1, Statement::List(Some("Eating out".to_string())));
    }

    #[test]
    fn test_categories() {
        assert_eq!(parse_categories("CATEGORIES").unwrap().1, Statement::Categories(None));
        assert_eq!(parse_categories("categories Food").unwrap().1, Statement::Categories(Some("Food".to_string())));
    }

    #[test]
    fn test_monthly() {
        assert_eq!(parse_monthly("MONTHLY").unwrap().1, Statement::Monthly(None));
        assert_eq!(parse_monthly("monthly expenses").unwrap().1, Statement::Monthly(Some(TransactionKind::Expense)));
        assert_eq!(parse_monthly("MONTHLY INCOME").unwrap().1, Statement::Monthly(Some(TransactionKind::Income)));
        assert!(parse("MONTHLY TRANSFERS").is_err());
    }

    #[test]
    fn test_clear() {
        assert_eq!(parse("CLEAR;").unwrap(), Statement::Clear);
    }
}
