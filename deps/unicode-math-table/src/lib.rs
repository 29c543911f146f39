//! Reading `unicode-math-table.tex`, the symbol table shipped with the `unicode-math` LaTeX package.
//!
//! Each line of that file declares one symbol:
//!
//! ```text
//! \UnicodeMathSymbol{"0002B}{\plus                    }{\mathbin}{plus sign b:}%
//! ```
//!
//! [`parse_line`] recognizes such a line and [`MathClass`] gives the class the `\mathbin` part stands for.

mod common;
mod parser;

pub use common::{MathClass, LATEX_CLASSES};
pub use parser::{parse_line, parse_table_line, Line};
