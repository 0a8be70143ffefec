pub use error::*;
pub use expr::*;
pub use lex::*;
pub use parse::*;

mod error;
mod expr;
mod lex;
mod parse;

pub fn calc(string: impl AsRef<str>) -> crate::Result<f64> {
    let expr = parse_tree(string.as_ref())?;
    Ok(expr.calc())
}
