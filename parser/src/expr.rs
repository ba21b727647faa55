use pest::error::{Error, ErrorVariant};
use pest::iterators::Pair;
use pest::Parser;

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct SeqParser;

/// A sequence expression, e.g. `chain(range(0, 3), empty, [7, 8])`.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum SeqExpr {
    /// `range(a, b)`: `a` up to but excluding `b`.
    Range(i64, i64),
    Empty,
    List(Vec<i64>),
    Chain(Vec<SeqExpr>),
    /// `owned(e)`: the values of `e`, passed around through owning pointers.
    Owned(Box<SeqExpr>),
}

pub type ParseError = Error<Rule>;

pub fn parse_seq_expr(raw_expr: &str) -> Result<SeqExpr, ParseError> {
    let parsed_expr = SeqParser::parse(Rule::file, raw_expr)?.next().unwrap();

    fn build_int(pair: Pair<Rule>) -> Result<i64, ParseError> {
        pair.as_str().parse().map_err(|_| {
            Error::new_from_span(
                ErrorVariant::CustomError {
                    message: format!("integer `{}` does not fit in 64 bits", pair.as_str()),
                },
                pair.as_span(),
            )
        })
    }

    fn build_ast_expr(pair: Pair<Rule>) -> Result<SeqExpr, ParseError> {
        let rule = pair.as_rule();
        let mut inner_rules = pair.into_inner();
        macro_rules! parse_next_int {
            () => { build_int(inner_rules.next().unwrap())? };
        }
        macro_rules! parse_next_expr {
            () => { build_ast_expr(inner_rules.next().unwrap())? };
        }

        let expr = match rule {
            Rule::s_range => SeqExpr::Range(parse_next_int!(), parse_next_int!()),
            Rule::s_empty => SeqExpr::Empty,
            Rule::s_list => SeqExpr::List(inner_rules.map(build_int).collect::<Result<_, _>>()?),
            Rule::s_chain => SeqExpr::Chain(
                inner_rules
                    .map(build_ast_expr)
                    .collect::<Result<_, _>>()?,
            ),
            Rule::s_owned => SeqExpr::Owned(Box::new(parse_next_expr!())),
            _ => unreachable!(),
        };
        Ok(expr)
    }

    build_ast_expr(parsed_expr)
}
