/*!
Reading sentences from text.

Sentences are written with the following connectives, from loosest to tightest binding:

| Connective  | Symbols                 | Named form            |
|-------------|-------------------------|-----------------------|
| equivalence | `<=>` `<->` `==` `↔`    | `Equivalent(a, b)`    |
| implication | `=>` `->` `>>` `→`      | `Implies(a, b)`       |
| disjunction | `\|` `∨`                | `Or(a, b, …)`         |
| conjunction | `&` `∧`                 | `And(a, b, …)`        |
| negation    | `~` `!` `¬`             | `Not(a)`              |

Equivalence associates to the left and implication to the right, so `a => b => c` is `a => (b => c)`.
The constants are `True` and `False`, and any other word of letters, digits, and underscores (not beginning with a digit) is an atom.

Atoms are interned in an [atom database](crate::db::atom) as they are read.

```rust
# use propkb::db::atom::AtomDB;
# use propkb::parse::parse_expr;
# use propkb::structures::expression::Expr;
let mut atom_db = AtomDB::default();
let expr = parse_expr("(B | C) & ~(B & C)", &mut atom_db).unwrap();

let (b, c) = (Expr::Atom(0), Expr::Atom(1));
assert_eq!(expr, (b.clone() | c.clone()) & !(b & c));
assert_eq!(expr.as_string(&atom_db), "(B | C) & ~(B & C)");
```
*/

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, multispace0},
    combinator::{map, opt, recognize},
    multi::{many0, separated_list1},
    sequence::{delimited, pair, preceded},
    IResult,
};

use crate::{
    db::atom::AtomDB,
    misc::log::targets::{self},
    structures::expression::Expr,
    types::err::ParseError,
};

/// Reads an expression from `text`, interning any atoms in `atom_db`.
pub fn parse_expr(text: &str, atom_db: &mut AtomDB) -> Result<Expr, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let tree = match equivalence(text) {
        Ok((remaining, tree)) => match remaining.trim().is_empty() {
            true => tree,
            false => return Err(ParseError::Trailing(offset(text, remaining))),
        },

        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            return Err(ParseError::Malformed(offset(text, e.input)))
        }

        Err(nom::Err::Incomplete(_)) => return Err(ParseError::Malformed(text.len())),
    };

    let expr = intern(tree, atom_db)?;
    log::trace!(target: targets::PARSE, "Read {expr} from '{text}'");
    Ok(expr)
}

fn offset(text: &str, remaining: &str) -> usize {
    text.len() - remaining.len()
}

/// A sentence as read, before atoms are interned and named connectives are checked.
enum Tree<'a> {
    Top,
    Bottom,
    Name(&'a str),
    Not(Box<Tree<'a>>),
    And(Vec<Tree<'a>>),
    Or(Vec<Tree<'a>>),
    Implies(Box<Tree<'a>>, Box<Tree<'a>>),
    Equivalent(Box<Tree<'a>>, Box<Tree<'a>>),
    Call(&'a str, Vec<Tree<'a>>),
}

fn intern_all(trees: Vec<Tree>, atom_db: &mut AtomDB) -> Result<Vec<Expr>, ParseError> {
    trees.into_iter().map(|t| intern(t, atom_db)).collect()
}

fn intern(tree: Tree, atom_db: &mut AtomDB) -> Result<Expr, ParseError> {
    let expr = match tree {
        Tree::Top => Expr::Top,
        Tree::Bottom => Expr::Bottom,
        Tree::Name(name) => Expr::Atom(atom_db.atom_or_fresh(name)?),
        Tree::Not(inner) => Expr::Not(Box::new(intern(*inner, atom_db)?)),
        Tree::And(operands) => Expr::And(intern_all(operands, atom_db)?),
        Tree::Or(operands) => Expr::Or(intern_all(operands, atom_db)?),
        Tree::Implies(a, b) => Expr::Implies(
            Box::new(intern(*a, atom_db)?),
            Box::new(intern(*b, atom_db)?),
        ),
        Tree::Equivalent(a, b) => Expr::Equivalent(
            Box::new(intern(*a, atom_db)?),
            Box::new(intern(*b, atom_db)?),
        ),

        Tree::Call(connective, arguments) => {
            let found = arguments.len();
            let mut arguments = intern_all(arguments, atom_db)?;

            let arity_error = |connective: &'static str, expected: usize| ParseError::Arity {
                connective,
                expected,
                found,
            };

            match connective {
                "Not" => match arguments.pop() {
                    Some(a) if found == 1 => Expr::Not(Box::new(a)),
                    _ => return Err(arity_error("Not", 1)),
                },

                "Implies" | "Equivalent" if found != 2 => {
                    let name = match connective {
                        "Implies" => "Implies",
                        _ => "Equivalent",
                    };
                    return Err(arity_error(name, 2));
                }

                "Implies" | "Equivalent" => {
                    let b = Box::new(arguments.swap_remove(1));
                    let a = Box::new(arguments.swap_remove(0));
                    match connective {
                        "Implies" => Expr::Implies(a, b),
                        _ => Expr::Equivalent(a, b),
                    }
                }

                "And" => Expr::And(arguments),

                _ => Expr::Or(arguments),
            }
        }
    };

    Ok(expr)
}

// Combinators

fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

fn equivalence(input: &str) -> IResult<&str, Tree> {
    let (input, first) = implication(input)?;
    let (input, rest) = many0(preceded(
        ws(alt((tag("<=>"), tag("<->"), tag("=="), tag("↔")))),
        implication,
    ))(input)?;

    let tree = rest.into_iter().fold(first, |acc, next| {
        Tree::Equivalent(Box::new(acc), Box::new(next))
    });
    Ok((input, tree))
}

fn implication(input: &str) -> IResult<&str, Tree> {
    let (input, antecedent) = disjunction(input)?;
    let (input, consequent) = opt(preceded(
        ws(alt((tag("=>"), tag("->"), tag(">>"), tag("→")))),
        implication,
    ))(input)?;

    let tree = match consequent {
        Some(consequent) => Tree::Implies(Box::new(antecedent), Box::new(consequent)),
        None => antecedent,
    };
    Ok((input, tree))
}

fn disjunction(input: &str) -> IResult<&str, Tree> {
    let (input, first) = conjunction(input)?;
    let (input, mut rest) =
        many0(preceded(ws(alt((tag("|"), tag("∨")))), conjunction))(input)?;

    let tree = match rest.is_empty() {
        true => first,
        false => {
            rest.insert(0, first);
            Tree::Or(rest)
        }
    };
    Ok((input, tree))
}

fn conjunction(input: &str) -> IResult<&str, Tree> {
    let (input, first) = negation(input)?;
    let (input, mut rest) = many0(preceded(ws(alt((tag("&"), tag("∧")))), negation))(input)?;

    let tree = match rest.is_empty() {
        true => first,
        false => {
            rest.insert(0, first);
            Tree::And(rest)
        }
    };
    Ok((input, tree))
}

fn negation(input: &str) -> IResult<&str, Tree> {
    alt((
        map(
            preceded(ws(alt((tag("~"), tag("!"), tag("¬")))), negation),
            |inner| Tree::Not(Box::new(inner)),
        ),
        primary,
    ))(input)
}

fn primary(input: &str) -> IResult<&str, Tree> {
    ws(alt((
        delimited(char('('), equivalence, char(')')),
        call,
        word,
    )))(input)
}

fn call(input: &str) -> IResult<&str, Tree> {
    map(
        pair(
            alt((
                tag("Not"),
                tag("And"),
                tag("Or"),
                tag("Implies"),
                tag("Equivalent"),
            )),
            delimited(
                ws(char('(')),
                separated_list1(ws(char(',')), equivalence),
                ws(char(')')),
            ),
        ),
        |(connective, arguments)| Tree::Call(connective, arguments),
    )(input)
}

fn word(input: &str) -> IResult<&str, Tree> {
    map(
        recognize(pair(
            alt((alpha1, tag("_"))),
            many0(alt((alphanumeric1, tag("_")))),
        )),
        |name| match name {
            "True" => Tree::Top,
            "False" => Tree::Bottom,
            _ => Tree::Name(name),
        },
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> (Expr, AtomDB) {
        let mut atom_db = AtomDB::default();
        let expr = parse_expr(text, &mut atom_db).unwrap();
        (expr, atom_db)
    }

    #[test]
    fn precedence() {
        let (expr, _) = read("a | b & ~c => d <=> e");
        let [a, b, c, d, e] = std::array::from_fn(|i| Expr::Atom(i as u32));

        let expected = (a | (b & !c)).implies(d).equivalent(e);
        assert_eq!(expr, expected);
    }

    #[test]
    fn implication_associates_right() {
        let (expr, _) = read("p -> q -> r");
        let [p, q, r] = std::array::from_fn(|i| Expr::Atom(i as u32));
        assert_eq!(expr, p.implies(q.implies(r)));
    }

    #[test]
    fn named_connectives() {
        let (named, _) = read("Implies(Not(M), And(Ma, ~I))");
        let (symbolic, _) = read("~M >> (Ma & ~I)");
        assert_eq!(named, symbolic);

        let (equivalent, _) = read("Equivalent(p, Or(q, r, s))");
        assert!(matches!(equivalent, Expr::Equivalent(_, _)));
    }

    #[test]
    fn names_beginning_with_connectives() {
        let (expr, atom_db) = read("Notable & Orange");
        assert_eq!(expr, Expr::Atom(0) & Expr::Atom(1));
        assert_eq!(atom_db.external_name(0), "Notable");
    }

    #[test]
    fn constants() {
        let (expr, atom_db) = read("True | False");
        assert_eq!(expr, Expr::Top | Expr::Bottom);
        assert_eq!(atom_db.count(), 0);
    }

    #[test]
    fn round_trip_of_display() {
        let text = "(p => q) & ~(r | s) & (p <=> ~q)";
        let (expr, atom_db) = read(text);
        let (again, _) = read(&expr.as_string(&atom_db));
        assert_eq!(expr, again);
    }

    #[test]
    fn errors() {
        let mut atom_db = AtomDB::default();

        assert_eq!(parse_expr("   ", &mut atom_db), Err(ParseError::Empty));
        assert_eq!(parse_expr("p q", &mut atom_db), Err(ParseError::Trailing(2)));
        assert!(matches!(
            parse_expr("& p", &mut atom_db),
            Err(ParseError::Malformed(_))
        ));
        assert!(matches!(
            parse_expr("(p | q", &mut atom_db),
            Err(ParseError::Trailing(_)) | Err(ParseError::Malformed(_))
        ));
        assert_eq!(
            parse_expr("Implies(p)", &mut atom_db),
            Err(ParseError::Arity {
                connective: "Implies",
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            parse_expr("Not(p, q)", &mut atom_db),
            Err(ParseError::Arity {
                connective: "Not",
                expected: 1,
                found: 2
            })
        );
    }
}
