use alloc::format;

use crate::parser::{parse_rule, BinaryOp, Expr, UnaryOp};
use crate::{CoreError, CoreResult};

/// A compiled plural-form rule.
///
/// Compilation happens once per catalog; `select` is pure and total over
/// all counts, so the compiled rule can be shared and cached freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralRule {
    ast: Expr,
}

impl PluralRule {
    pub fn parse(source: &str) -> CoreResult<Self> {
        let ast = parse_rule(source).map_err(|error| {
            CoreError::MalformedPluralRule(format!(
                "{} at offset {}",
                error.message, error.offset
            ))
        })?;
        Ok(Self { ast })
    }

    /// Maps a count to its plural-category index.
    pub fn select(&self, count: u64) -> usize {
        eval(&self.ast, count).as_int() as usize
    }
}

#[derive(Debug, Clone, Copy)]
enum Value {
    Int(u64),
    Bool(bool),
}

impl Value {
    fn as_int(self) -> u64 {
        match self {
            Value::Int(value) => value,
            Value::Bool(true) => 1,
            Value::Bool(false) => 0,
        }
    }

    fn truthy(self) -> bool {
        match self {
            Value::Int(value) => value != 0,
            Value::Bool(value) => value,
        }
    }
}

// Division and modulo by zero evaluate to 0 and subtraction saturates,
// keeping evaluation total for every count.
fn eval(expr: &Expr, n: u64) -> Value {
    match expr {
        Expr::Number(value) => Value::Int(*value),
        Expr::Count => Value::Int(n),
        Expr::Unary { op, operand } => match op {
            UnaryOp::Not => Value::Bool(!eval(operand, n).truthy()),
        },
        Expr::Binary { op, lhs, rhs } => {
            let lhs = eval(lhs, n);
            let rhs = eval(rhs, n);
            match op {
                BinaryOp::Add => Value::Int(lhs.as_int().saturating_add(rhs.as_int())),
                BinaryOp::Sub => Value::Int(lhs.as_int().saturating_sub(rhs.as_int())),
                BinaryOp::Mul => Value::Int(lhs.as_int().saturating_mul(rhs.as_int())),
                BinaryOp::Div => Value::Int(lhs.as_int().checked_div(rhs.as_int()).unwrap_or(0)),
                BinaryOp::Rem => Value::Int(lhs.as_int().checked_rem(rhs.as_int()).unwrap_or(0)),
                BinaryOp::Eq => Value::Bool(lhs.as_int() == rhs.as_int()),
                BinaryOp::Ne => Value::Bool(lhs.as_int() != rhs.as_int()),
                BinaryOp::Lt => Value::Bool(lhs.as_int() < rhs.as_int()),
                BinaryOp::Le => Value::Bool(lhs.as_int() <= rhs.as_int()),
                BinaryOp::Gt => Value::Bool(lhs.as_int() > rhs.as_int()),
                BinaryOp::Ge => Value::Bool(lhs.as_int() >= rhs.as_int()),
                BinaryOp::And => Value::Bool(lhs.truthy() && rhs.truthy()),
                BinaryOp::Or => Value::Bool(lhs.truthy() || rhs.truthy()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PluralRule;
    use crate::CoreError;

    #[test]
    fn english_rule_selects_singular_for_one() {
        let rule = PluralRule::parse("n != 1").expect("rule");
        assert_eq!(rule.select(1), 0);
        assert_eq!(rule.select(0), 1);
        assert_eq!(rule.select(5), 1);
    }

    #[test]
    fn french_style_rule_uses_textual_or() {
        let rule = PluralRule::parse("n == 0 or n == 1").expect("rule");
        assert_eq!(rule.select(0), 1);
        assert_eq!(rule.select(1), 1);
        assert_eq!(rule.select(2), 0);
    }

    #[test]
    fn arithmetic_rule_yields_multiple_indexes() {
        let rule = PluralRule::parse("(n != 1) + (n > 99)").expect("rule");
        assert_eq!(rule.select(1), 0);
        assert_eq!(rule.select(7), 1);
        assert_eq!(rule.select(100), 2);
    }

    #[test]
    fn modulo_rule_distinguishes_teens() {
        let rule = PluralRule::parse("n % 10 == 1 && n % 100 != 11").expect("rule");
        assert_eq!(rule.select(1), 1);
        assert_eq!(rule.select(11), 0);
        assert_eq!(rule.select(21), 1);
    }

    #[test]
    fn selection_is_deterministic() {
        let rule = PluralRule::parse("n % 3").expect("rule");
        for count in 0..50 {
            let first = rule.select(count);
            for _ in 0..10 {
                assert_eq!(rule.select(count), first);
            }
        }
    }

    #[test]
    fn not_coerces_count_to_boolean() {
        let rule = PluralRule::parse("!n").expect("rule");
        assert_eq!(rule.select(0), 1);
        assert_eq!(rule.select(3), 0);
    }

    #[test]
    fn division_by_zero_evaluates_to_zero() {
        let rule = PluralRule::parse("n / 0").expect("rule");
        assert_eq!(rule.select(7), 0);
        let rule = PluralRule::parse("n % 0").expect("rule");
        assert_eq!(rule.select(7), 0);
    }

    #[test]
    fn subtraction_saturates_at_zero() {
        let rule = PluralRule::parse("n - 10").expect("rule");
        assert_eq!(rule.select(3), 0);
        assert_eq!(rule.select(12), 2);
    }

    #[test]
    fn malformed_rule_fails_at_parse_time() {
        let err = PluralRule::parse("n ==").expect_err("malformed");
        match err {
            CoreError::MalformedPluralRule(message) => {
                assert!(message.contains("unexpected end of rule"), "{message}");
            }
            other => panic!("expected MalformedPluralRule, got {other:?}"),
        }
    }
}
