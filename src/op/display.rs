use std::fmt;

use crate::op::kinds::Op;

/// Renders the canonical token for the operation, so a resolved token
/// displays as itself.
impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Pow(exponent) => write!(f, "x^{}", exponent),
            Op::Negate => write!(f, "+/-"),
            Op::Add(operand) => write!(f, "+{}", operand),
            Op::Sub(operand) => write!(f, "-{}", operand),
            Op::Mul(operand) => write!(f, "x{}", operand),
            Op::Div(operand) => write!(f, "/{}", operand),
            Op::DropDigit => write!(f, "<<"),
            Op::Append(literal) => write!(f, "{}", literal),
            Op::Replace { from, to } => write!(f, "{}=>{}", from, to),
            Op::Reverse => write!(f, "Reverse"),
            Op::Sum => write!(f, "SUM"),
            Op::ShiftLeft => write!(f, "<Shift"),
            Op::ShiftRight => write!(f, "Shift>"),
            Op::Mirror => write!(f, "Mirror"),
        }
    }
}
