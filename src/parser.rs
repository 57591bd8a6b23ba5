use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, digit1, multispace0},
    combinator::{all_consuming, cut, map, opt, recognize},
    error::Error,
    multi::many0,
    sequence::{pair, preceded, terminated, tuple},
};

use crate::ParseError;
use crate::syntax::{Node, NodeKind};

/// Characters that may appear in an atom (number or symbol)
fn is_atom_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_+-*/\\=<>!&%^.".contains(c)
}

/// Convert nom parsing errors to positioned parse errors
fn to_parse_error(input: &str, error: nom::Err<Error<&str>>) -> ParseError {
    match error {
        nom::Err::Error(e) | nom::Err::Failure(e) => unexpected_at(input, e.input),
        nom::Err::Incomplete(_) => ParseError::UnexpectedEof,
    }
}

fn unexpected_at(input: &str, rest: &str) -> ParseError {
    match rest.chars().next() {
        Some(found) => ParseError::Unexpected {
            found,
            position: input.len() - rest.len(),
        },
        None => ParseError::UnexpectedEof,
    }
}

/// Recognize `-?[0-9]+(\.[0-9]+)?`
fn number_literal(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(char('-')),
        digit1,
        opt(pair(char('.'), digit1)),
    )))(input)
}

/// Whether a complete atom spells a number
fn is_number_literal(atom: &str) -> bool {
    all_consuming(number_literal)(atom).is_ok()
}

/// Parse a number or symbol leaf
fn parse_atom(input: &str) -> IResult<&str, Node> {
    map(take_while1(is_atom_char), |atom: &str| {
        if is_number_literal(atom) {
            Node::leaf(NodeKind::Number, atom)
        } else {
            Node::leaf(NodeKind::Symbol, atom)
        }
    })(input)
}

/// Parse a bracketed list. Once the opening bracket is seen the list must close.
fn parse_list<'a>(
    open: char,
    close: char,
    kind: NodeKind,
) -> impl FnMut(&'a str) -> IResult<&'a str, Node> {
    move |input: &'a str| {
        let (input, _) = char(open)(input)?;
        let (input, items) = cut(many0(preceded(multispace0, parse_expr)))(input)?;
        let (input, _) = cut(preceded(multispace0, char(close)))(input)?;

        let mut children = Vec::with_capacity(items.len() + 2);
        children.push(Node::punct(open));
        children.extend(items);
        children.push(Node::punct(close));
        Ok((input, Node::branch(kind, children)))
    }
}

/// Parse a single expression
fn parse_expr(input: &str) -> IResult<&str, Node> {
    alt((
        parse_atom,
        parse_list('(', ')', NodeKind::SExpr),
        parse_list('{', '}', NodeKind::QExpr),
    ))(input)
}

/// Parse a whole input line into a root node.
///
/// The root holds every top-level expression between a leading and a trailing
/// [`NodeKind::Marker`]; empty input yields a root with only the markers.
pub fn parse(input: &str) -> Result<Node, ParseError> {
    let mut program = preceded(multispace0, many0(terminated(parse_expr, multispace0)));
    match program(input) {
        Ok(("", exprs)) => {
            let mut children = Vec::with_capacity(exprs.len() + 2);
            children.push(Node::marker());
            children.extend(exprs);
            children.push(Node::marker());
            Ok(Node::branch(NodeKind::Root, children))
        }
        Ok((remaining, _)) => Err(unexpected_at(input, remaining)),
        Err(e) => Err(to_parse_error(input, e)),
    }
}
