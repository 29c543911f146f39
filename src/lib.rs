/*! # Maintenance tools for a Lua table of Unicode math symbols.

The `unicode-math` LaTeX package ships `unicode-math-table.tex`, which declares for every math symbol its codepoint and its class:

```text
\UnicodeMathSymbol{"0002B}{\plus                    }{\mathbin}{plus sign b:}%
```

This crate turns that table into entries of a Lua data file, and keeps track of which of its symbols are safe to redefine.
It provides two executables:

 - `classify-symbols` lists the commands of the table (by running TeX on `extract-symbols.tex`) and sorts them into
   `old-symbols.lst`, the ones already defined by LaTeX, `amsmath` and friends or listed in `known-symbols.lst`,
   and `new-symbols.lst`, the others. Commands of `dangerous-symbols.lst` are never considered known.
 - `extract-symbols` prints the table as Lua entries, sorted by codepoint, flagging symbols of `old-symbols.lst` as safe.

Both find TeX files through `kpsewhich` ; the TeX installation is accessed through the [`Toolchain`](crate::toolchain::Toolchain)
trait, which [`Kpathsea`](crate::toolchain::Kpathsea) implements by spawning the actual programs.

## Library usage

```no_run
let config = unimath_symbols::config::Config::default();
let tools  = unimath_symbols::toolchain::Kpathsea::new(&config);
let logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).build();

let classification = unimath_symbols::differ::run(&config, &tools, &logger).expect("classification failed");
println!("{} new symbols", classification.new.len());

unimath_symbols::extract::run(&config, &tools, &logger, &mut std::io::stdout()).expect("extraction failed");
```

Parsing alone needs neither TeX nor files:

```
let input = r#"\UnicodeMathSymbol{"0002B}{\plus }{\mathbin}{plus sign b:}%"#;
let table = unimath_symbols::table::parse_table(input, log::logger());
assert_eq!(table.get(r"\plus").unwrap().code, 0x2B);
```
*/

#[macro_use]
extern crate serde_derive;

#[macro_use]
mod macros;

#[deny(missing_docs)]
pub mod error;
pub mod config;
pub mod toolchain;
pub mod symbols;
pub mod table;
pub mod lua;
pub mod extract;
pub mod differ;
pub mod cli;

pub use unicode_math_table::MathClass;
