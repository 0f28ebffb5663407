//! Pool-size formulas.
//!
//! Sheets describe a pool as a sum of roll-data references and constants,
//! for example `@dex + @athletics + 1`. The formula is evaluated against an
//! actor's [`RollData`] to get the number of dice.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::actor::RollData;
use crate::error::{MechError, MechResult};

/// Whether a term is added or subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// `+`
    Plus,
    /// `-`
    Minus,
}

/// One operand of a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// An integer literal.
    Constant(i64),
    /// A roll-data reference, written `@name`.
    Reference(String),
}

/// A parsed pool-size formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolFormula {
    terms: Vec<(Sign, Term)>,
}

impl PoolFormula {
    /// Parse a formula of the form `term (('+' | '-') term)*`.
    pub fn parse(source: &str) -> MechResult<Self> {
        let mut chars = source.char_indices().peekable();
        let mut terms = Vec::new();
        let mut sign = Sign::Plus;

        loop {
            skip_whitespace(&mut chars);
            let term = parse_term(source, &mut chars)?;
            terms.push((sign, term));

            skip_whitespace(&mut chars);
            sign = match chars.next() {
                None => break,
                Some((_, '+')) => Sign::Plus,
                Some((_, '-')) => Sign::Minus,
                Some((pos, c)) => {
                    return Err(MechError::InvalidFormula(format!(
                        "unexpected '{c}' at position {pos} in \"{source}\""
                    )));
                }
            };
        }

        Ok(Self { terms })
    }

    /// The parsed terms, in order.
    pub fn terms(&self) -> &[(Sign, Term)] {
        &self.terms
    }

    /// Sum the formula against roll data.
    ///
    /// Fractional roll-data values are carried through unchanged.
    pub fn evaluate(&self, data: &RollData) -> MechResult<f64> {
        let mut total = 0.0_f64;
        for (sign, term) in &self.terms {
            let value = match term {
                Term::Constant(n) => *n as f64,
                Term::Reference(name) => data
                    .get(name)
                    .ok_or_else(|| MechError::UnknownReference(name.clone()))?,
            };
            match sign {
                Sign::Plus => total += value,
                Sign::Minus => total -= value,
            }
        }
        if !total.is_finite() {
            return Err(MechError::InvalidFormula("formula overflowed".to_string()));
        }
        Ok(total)
    }

    /// Evaluate the formula as a number of dice.
    ///
    /// The total must be a whole, non-negative number that fits in a `u32`.
    pub fn pool_size(&self, data: &RollData) -> MechResult<u32> {
        let total = self.evaluate(data)?;
        if total.fract() != 0.0 {
            return Err(MechError::InvalidPool(format!(
                "{self} evaluates to {total}, which is not a whole number of dice"
            )));
        }
        if total < 0.0 || total > f64::from(u32::MAX) {
            return Err(MechError::InvalidPool(format!(
                "{self} evaluates to {total} dice"
            )));
        }
        Ok(total as u32)
    }
}

fn skip_whitespace(chars: &mut Peekable<CharIndices<'_>>) {
    while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
}

fn parse_term(source: &str, chars: &mut Peekable<CharIndices<'_>>) -> MechResult<Term> {
    match chars.peek().copied() {
        None => Err(MechError::InvalidFormula(if source.trim().is_empty() {
            "formula is empty".to_string()
        } else {
            format!("expected a term at the end of \"{source}\"")
        })),
        Some((_, '@')) => {
            chars.next();
            let mut name = String::new();
            while let Some((_, c)) =
                chars.next_if(|(_, c)| c.is_ascii_alphanumeric() || *c == '_' || *c == '.')
            {
                name.push(c);
            }
            if name.is_empty() {
                return Err(MechError::InvalidFormula(format!(
                    "'@' without a name in \"{source}\""
                )));
            }
            Ok(Term::Reference(name))
        }
        Some((_, c)) if c.is_ascii_digit() => {
            let mut digits = String::new();
            while let Some((_, d)) = chars.next_if(|(_, c)| c.is_ascii_digit()) {
                digits.push(d);
            }
            digits
                .parse()
                .map(Term::Constant)
                .map_err(|_| MechError::InvalidFormula(format!("number {digits} is too large")))
        }
        Some((pos, c)) => Err(MechError::InvalidFormula(format!(
            "unexpected '{c}' at position {pos} in \"{source}\""
        ))),
    }
}

impl std::fmt::Display for PoolFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (sign, term)) in self.terms.iter().enumerate() {
            if i > 0 {
                match sign {
                    Sign::Plus => write!(f, " + ")?,
                    Sign::Minus => write!(f, " - ")?,
                }
            }
            match term {
                Term::Constant(n) => write!(f, "{n}")?,
                Term::Reference(name) => write!(f, "@{name}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> RollData {
        [
            ("dex".to_string(), 3.0),
            ("athletics".to_string(), 2.0),
            ("abilities.str".to_string(), 4.0),
            ("speed".to_string(), 2.5),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn parse_references_and_constants() {
        let f = PoolFormula::parse("@dex + @athletics + 1").unwrap();
        assert_eq!(
            f.terms(),
            &[
                (Sign::Plus, Term::Reference("dex".to_string())),
                (Sign::Plus, Term::Reference("athletics".to_string())),
                (Sign::Plus, Term::Constant(1)),
            ]
        );
    }

    #[test]
    fn evaluate_sum() {
        let f = PoolFormula::parse("@dex+@athletics+1").unwrap();
        assert_eq!(f.evaluate(&data()).unwrap(), 6.0);
        assert_eq!(f.pool_size(&data()).unwrap(), 6);
    }

    #[test]
    fn evaluate_subtraction_and_dotted_paths() {
        let f = PoolFormula::parse("@abilities.str - 1").unwrap();
        assert_eq!(f.evaluate(&data()).unwrap(), 3.0);
    }

    #[test]
    fn plain_number() {
        let f = PoolFormula::parse(" 5 ").unwrap();
        assert_eq!(f.pool_size(&RollData::new()).unwrap(), 5);
    }

    #[test]
    fn negative_total_is_invalid_pool() {
        let f = PoolFormula::parse("@dex - 10").unwrap();
        assert_eq!(f.evaluate(&data()).unwrap(), -7.0);
        let err = f.pool_size(&data()).unwrap_err();
        assert!(matches!(err, MechError::InvalidPool(_)));
    }

    #[test]
    fn fractional_total_is_invalid_pool() {
        let f = PoolFormula::parse("@dex + @speed").unwrap();
        assert_eq!(f.evaluate(&data()).unwrap(), 5.5);
        let err = f.pool_size(&data()).unwrap_err();
        assert!(matches!(err, MechError::InvalidPool(_)));
        assert!(err.to_string().contains("not a whole number"));
    }

    #[test]
    fn fractions_that_cancel_are_whole() {
        let f = PoolFormula::parse("@speed + @speed").unwrap();
        assert_eq!(f.pool_size(&data()).unwrap(), 5);
    }

    #[test]
    fn oversized_total_is_invalid_pool() {
        let f = PoolFormula::parse("4294967296").unwrap();
        let err = f.pool_size(&RollData::new()).unwrap_err();
        assert!(matches!(err, MechError::InvalidPool(_)));
    }

    #[test]
    fn unknown_reference() {
        let f = PoolFormula::parse("@dex + @brawl").unwrap();
        let err = f.evaluate(&data()).unwrap_err();
        assert!(matches!(err, MechError::UnknownReference(ref n) if n == "brawl"));
        assert_eq!(err.to_string(), "unknown reference: @brawl");
    }

    #[test]
    fn empty_formula() {
        let err = PoolFormula::parse("   ").unwrap_err();
        assert_eq!(err.to_string(), "invalid formula: formula is empty");
    }

    #[test]
    fn dangling_operator() {
        assert!(PoolFormula::parse("@dex +").is_err());
        assert!(PoolFormula::parse("+ 2").is_err());
    }

    #[test]
    fn bare_at_sign() {
        assert!(PoolFormula::parse("@ + 1").is_err());
    }

    #[test]
    fn unexpected_character() {
        let err = PoolFormula::parse("@dex * 2").unwrap_err();
        assert!(err.to_string().contains("unexpected '*'"));
    }

    #[test]
    fn leading_minus_is_rejected() {
        let err = PoolFormula::parse("-1 + @dex").unwrap_err();
        assert!(matches!(err, MechError::InvalidFormula(_)));
    }

    #[test]
    fn display_normalizes_spacing() {
        let f = PoolFormula::parse("@dex+@athletics -1").unwrap();
        assert_eq!(f.to_string(), "@dex + @athletics - 1");
    }
}
