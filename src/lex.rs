struct Lexer {
    tokens: Vec<String>,
    literal: String,
}

impl Lexer {
    fn new() -> Self {
        Self {
            tokens: Vec::new(),
            literal: String::new(),
        }
    }

    /// An operator character is only a boundary in the first two token
    /// positions. A minus before any token exists stays in the literal
    /// (`-5` is one token), and a minus after two tokens starts the
    /// right operand's literal (`5 + -3`). Only the minus adjacent to
    /// exactly one finalized token becomes the operator token itself.
    fn operator(&mut self, c: char) {
        if !self.literal.is_empty() && self.tokens.is_empty() {
            self.end_literal();
            self.tokens.push(c.to_string());
        } else if self.tokens.len() == 1 {
            self.tokens.push(c.to_string());
        } else {
            self.literal.push(c);
        }
    }

    fn end_literal(&mut self) {
        if !self.literal.is_empty() {
            self.tokens.push(std::mem::take(&mut self.literal));
        }
    }
}

/// Splits the input into numeric literal and operator tokens.
///
/// Tokenization never fails; whether the tokens form a valid expression
/// is decided afterwards by [`parse_tree`](crate::parse_tree).
pub fn tokenize(input: &str) -> Vec<String> {
    let mut lexer = Lexer::new();

    for c in input.chars() {
        match c {
            '+' | '-' | '*' | '/' => lexer.operator(c),
            c if c.is_whitespace() => lexer.end_literal(),
            c => lexer.literal.push(c),
        }
    }

    lexer.end_literal();
    lexer.tokens
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert(input: &str, expected: &[&str]) {
        assert_eq!(tokenize(input), expected);
    }

    #[test]
    fn empty() {
        assert("", &[]);
    }

    #[test]
    fn only_whitespace() {
        assert("   ", &[]);
    }

    #[test]
    fn single_number() {
        assert("432.432", &["432.432"]);
    }

    #[test]
    fn spaced_add() {
        assert("5 + 3", &["5", "+", "3"]);
    }

    #[test]
    fn unspaced_add() {
        assert("5+3", &["5", "+", "3"]);
    }

    #[test]
    fn operator_touching_left_operand() {
        assert("604.453* 3562.543", &["604.453", "*", "3562.543"]);
    }

    #[test]
    fn operator_touching_right_operand() {
        assert("5 +3", &["5", "+", "3"]);
    }

    #[test]
    fn leading_minus_is_absorbed() {
        assert("-5", &["-5"]);
    }

    #[test]
    fn negative_right_operand() {
        assert("5 + -3", &["5", "+", "-3"]);
    }

    #[test]
    fn consecutive_whitespace() {
        assert("  5   /  2  ", &["5", "/", "2"]);
    }

    #[test]
    fn trailing_operator() {
        assert("5 +", &["5", "+"]);
    }

    #[test]
    fn four_tokens() {
        assert("1 2 3 4", &["1", "2", "3", "4"]);
    }

    #[test]
    fn operators_after_two_tokens_join_literal() {
        assert("5 + 3+2", &["5", "+", "3+2"]);
    }
}
