use std::str::FromStr;

use log::debug;

use crate::op::errors::OpError;
use crate::op::kinds::Op;

/// One token grammar: returns the decoded operation when the token's syntax
/// matches, `None` otherwise.
type Grammar = fn(&str) -> Option<Op>;

/// Grammars tried in order; the first syntactic match wins. The grammars
/// are mutually exclusive over well-formed tokens, so the order documents
/// the language rather than breaking ties:
///
/// 1. power         `x^<n>`
/// 2. sign flip     `+/-`
/// 3. arithmetic    `+<n>` `-<n>` `x<n>` `/<n>`
/// 4. drop digit    `<<`
/// 5. append        bare digit literal
/// 6. replace       `<a>=><b>`
/// 7. reverse       `Reverse`
/// 8. digit sum     `SUM`
/// 9. rotate left   `<Shift`
/// 10. rotate right `Shift>`
/// 11. mirror       `Mirror`
const GRAMMARS: &[Grammar] = &[
    power,
    sign_flip,
    arithmetic,
    drop_digit,
    append,
    replace,
    reverse,
    digit_sum,
    rotate_left,
    rotate_right,
    mirror,
];

impl Op {
    /// Resolve a button token against the grammar table.
    ///
    /// # Errors
    ///
    /// `OpError::UnknownToken` when no grammar matches the token, and
    /// `OpError::DivisionByZero` for the syntactically well-formed `/0`,
    /// which no calculator may carry.
    pub fn resolve(token: &str) -> Result<Self, OpError> {
        let op = GRAMMARS
            .iter()
            .find_map(|grammar| grammar(token))
            .ok_or_else(|| OpError::UnknownToken(token.to_string()))?;

        if op == Op::Div(0) {
            return Err(OpError::DivisionByZero);
        }

        debug!("Resolved token {:?} to {:?}", token, op);
        Ok(op)
    }
}

impl FromStr for Op {
    type Err = OpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Op::resolve(s)
    }
}

fn power(token: &str) -> Option<Op> {
    let exponent = token.strip_prefix("x^")?;
    exponent.parse::<i32>().ok().map(Op::Pow)
}

fn sign_flip(token: &str) -> Option<Op> {
    (token == "+/-").then_some(Op::Negate)
}

fn arithmetic(token: &str) -> Option<Op> {
    let mut chars = token.chars();
    let operator = chars.next()?;
    let operand = chars.as_str().parse::<i64>().ok()?;
    match operator {
        '+' => Some(Op::Add(operand)),
        '-' => Some(Op::Sub(operand)),
        'x' => Some(Op::Mul(operand)),
        '/' => Some(Op::Div(operand)),
        _ => None,
    }
}

fn drop_digit(token: &str) -> Option<Op> {
    (token == "<<").then_some(Op::DropDigit)
}

fn append(token: &str) -> Option<Op> {
    is_digit_literal(token).then(|| Op::Append(token.to_string()))
}

fn replace(token: &str) -> Option<Op> {
    let mut sides = token.split("=>");
    let from = sides.next()?;
    let to = sides.next()?;
    if sides.next().is_some() {
        // a second separator makes the token ambiguous
        return None;
    }
    (is_digit_literal(from) && is_digit_literal(to)).then(|| Op::Replace {
        from: from.to_string(),
        to: to.to_string(),
    })
}

fn reverse(token: &str) -> Option<Op> {
    (token == "Reverse").then_some(Op::Reverse)
}

fn digit_sum(token: &str) -> Option<Op> {
    (token == "SUM").then_some(Op::Sum)
}

fn rotate_left(token: &str) -> Option<Op> {
    (token == "<Shift").then_some(Op::ShiftLeft)
}

fn rotate_right(token: &str) -> Option<Op> {
    (token == "Shift>").then_some(Op::ShiftRight)
}

fn mirror(token: &str) -> Option<Op> {
    (token == "Mirror").then_some(Op::Mirror)
}

fn is_digit_literal(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}
