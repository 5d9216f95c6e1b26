use crate::op::kinds::Op;
use crate::utils::{attach_sign, split_digits};

impl Op {
    /// Apply the operation to a calculator value.
    ///
    /// Transforms are total. Division is real division, so a non-divisible
    /// value produces a fraction rather than an error. Digit-manipulation
    /// operations read the value as an integer truncated toward zero and
    /// follow one sign rule: operate on the magnitude's digit text,
    /// reattach the sign at the end.
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Op::Pow(exponent) => value.powi(*exponent).trunc(),
            Op::Negate => -value,
            Op::Add(operand) => value + *operand as f64,
            Op::Sub(operand) => value - *operand as f64,
            Op::Mul(operand) => value * *operand as f64,
            Op::Div(operand) => value / *operand as f64,
            Op::DropDigit => (value as i64 / 10) as f64,
            Op::Append(literal) => {
                let (negative, mut text) = split_digits(value);
                text.push_str(literal);
                attach_sign(negative, &text)
            }
            Op::Replace { from, to } => {
                let (negative, text) = split_digits(value);
                attach_sign(negative, &text.replace(from.as_str(), to))
            }
            Op::Reverse => {
                let (negative, text) = split_digits(value);
                let reversed: String = text.chars().rev().collect();
                attach_sign(negative, &reversed)
            }
            Op::Sum => {
                let (negative, text) = split_digits(value);
                let sum: u32 = text.bytes().map(|byte| u32::from(byte - b'0')).sum();
                attach_sign(negative, &sum.to_string())
            }
            Op::ShiftLeft => {
                let (negative, mut text) = split_digits(value);
                if text.len() > 1 {
                    let head = text.remove(0);
                    text.push(head);
                }
                attach_sign(negative, &text)
            }
            Op::ShiftRight => {
                let (negative, mut text) = split_digits(value);
                if let Some(tail) = text.pop() {
                    text.insert(0, tail);
                }
                attach_sign(negative, &text)
            }
            Op::Mirror => {
                let (negative, text) = split_digits(value);
                let reflection: String = text.chars().rev().collect();
                attach_sign(negative, &(text + &reflection))
            }
        }
    }
}
