/// One calculator button, decoded from its token.
///
/// Arithmetic variants carry the literal operand from the token. The
/// digit-manipulation variants (`DropDigit` through `Mirror`) rewrite the
/// decimal digit text of the value's magnitude and reattach the sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Pow(i32),
    Negate,
    Add(i64),
    Sub(i64),
    Mul(i64),
    Div(i64),
    DropDigit,
    Append(String), // raw token text, leading zeros preserved
    Replace { from: String, to: String },
    Reverse,
    Sum,
    ShiftLeft,
    ShiftRight,
    Mirror,
}
