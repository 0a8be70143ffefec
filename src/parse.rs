use crate::{tokenize, Error, Expr};

/// Tokenizes and validates one line of input.
///
/// The token count alone decides the outcome: one token is a bare
/// number, three tokens are a binary expression, anything else is an
/// error.
pub fn parse_tree(input: &str) -> crate::Result<Expr> {
    let tokens = tokenize(input);

    match tokens.as_slice() {
        [] => Err(Error::EmptyInput),
        [num] => {
            let num = num.parse().map_err(|_| Error::InvalidNumber)?;
            Ok(Expr::Num(num))
        }
        [_, _] => Err(Error::InsufficientTokens),
        [left, op, right] => {
            let left = left.parse().map_err(|_| Error::InvalidLeftOperand)?;
            let right = right.parse().map_err(|_| Error::InvalidRightOperand)?;
            operation(op, left, right)
        }
        _ => Err(Error::TooManyTokens),
    }
}

fn operation(op: &str, left: f64, right: f64) -> crate::Result<Expr> {
    match op {
        "+" => Ok(Expr::Add(left, right)),
        "-" => Ok(Expr::Sub(left, right)),
        "*" => Ok(Expr::Mul(left, right)),
        "/" => Ok(Expr::Div(left, right)),
        _ => Err(Error::InvalidOperator),
    }
}
