use nom::bytes::complete::tag_no_case;
use nom::character::complete::multispace1;
use nom::IResult;
use crate::parser::{text, yyyy_mm_dd_date, Statement};

/// Parse `DELETE yyyy-mm-dd 'description' category`
pub(crate) fn parse_delete(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("DELETE")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, date) = yyyy_mm_dd_date(input)?;
    let (input, _) = multispace1(input)?;
    let (input, description) = text(input)?;
    let (input, _) = multispace1(input)?;
    let (input, category) = text(input)?;
    Ok((input, Statement::Delete(date, description, category)))
}
