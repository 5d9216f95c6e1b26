use std::fmt;

/// The button tokens of a successful candidate, in press order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    tokens: Vec<String>,
}

impl Solution {
    pub(crate) fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

/// Renders the presses joined by `" => "`, e.g. `x3 => +2 => x3`.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" => "))
    }
}
