/// A literal number or a single binary operation pending evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Expr {
    Num(f64),
    Add(f64, f64),
    Sub(f64, f64),
    Mul(f64, f64),
    Div(f64, f64),
}

impl Expr {
    /// Division follows IEEE 754 semantics, a zero divisor yields an
    /// infinity or NaN instead of an error.
    pub fn calc(&self) -> f64 {
        match *self {
            Self::Num(n) => n,
            Self::Add(a, b) => a + b,
            Self::Sub(a, b) => a - b,
            Self::Mul(a, b) => a * b,
            Self::Div(a, b) => a / b,
        }
    }
}
