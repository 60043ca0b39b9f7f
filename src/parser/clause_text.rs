//! Parser for clause strings in the `¬?P(args) ∨ …` notation.
//!
//! Input arrives from an untrusted language model, so the parser is
//! permissive: a piece that does not parse as a literal yields no literal
//! instead of an error, and a clause string whose pieces all fail becomes
//! an empty clause.

use crate::fol::{Literal, Term};
use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::opt,
    multi::separated_list0,
    sequence::{delimited, preceded, tuple},
    IResult,
};

/// The negation sign (U+00AC)
const NOT: char = '¬';
/// The disjunction sign (U+2228)
const OR: char = '∨';

/// Parse one clause string into its literals.
///
/// The string is split on `∨`; each piece is trimmed and parsed as a
/// literal. Malformed pieces (no parentheses, stray tokens, unbalanced
/// arguments) are dropped silently.
pub fn parse_clause(input: &str) -> Vec<Literal> {
    input
        .split(OR)
        .filter_map(|piece| parse_literal_str(piece.trim()))
        .collect()
}

/// Parse a single literal, requiring the whole piece to be consumed
/// (trailing whitespace aside)
fn parse_literal_str(piece: &str) -> Option<Literal> {
    match literal(piece) {
        Ok((rest, lit)) if rest.trim().is_empty() => Some(lit),
        _ => None,
    }
}

fn literal(input: &str) -> IResult<&str, Literal> {
    let (input, _) = multispace0(input)?;
    let (input, negation) = opt(char(NOT))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, name) = identifier(input)?;
    let (input, _) = multispace0(input)?;
    let (input, args) = arg_list(input)?;
    Ok((input, Literal::new(name, args, negation.is_some())))
}

/// A parenthesized, comma-separated argument list; may be empty
fn arg_list(input: &str) -> IResult<&str, Vec<Term>> {
    delimited(
        char('('),
        separated_list0(tuple((multispace0, char(','))), term),
        tuple((multispace0, char(')'))),
    )(input)
}

fn term(input: &str) -> IResult<&str, Term> {
    preceded(multispace0, alt((function_term, leaf_term)))(input)
}

/// `name(args…)`; nested argument lists recurse through `term`
fn function_term(input: &str) -> IResult<&str, Term> {
    let (input, name) = identifier(input)?;
    let (input, _) = multispace0(input)?;
    let (input, args) = arg_list(input)?;
    Ok((input, Term::function(name, args)))
}

/// A bare identifier: a single Unicode lowercase letter is a variable,
/// anything else is a constant
fn leaf_term(input: &str) -> IResult<&str, Term> {
    let (input, name) = identifier(input)?;
    let term = if is_single_lowercase_letter(name) {
        Term::variable(name)
    } else {
        Term::constant(name)
    };
    Ok((input, term))
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)
}

fn is_single_lowercase_letter(s: &str) -> bool {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_alphabetic() && c.is_lowercase(),
        _ => false,
    }
}
