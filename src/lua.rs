//! Lua rendering of the symbol table.
//!
//! The lines produced here are pasted into a larger Lua data file, e.g.
//!
//! ```lua
//!    plus = {
//!       class = "binary",
//!       char = "+"
//!    },
//!    ["\\P"] = "¶",
//! ```

use std::io::{self, Write};

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_math_table::MathClass;

use crate::symbols::SymbolSet;
use crate::table::{SymbolTable, TableEntry};

/// Letters, numbers, punctuation and symbols are written as quoted characters, anything else (marks, spaces, controls, ...) as a hex number.
fn is_written_as_char(c: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(c),
        UppercaseLetter | LowercaseLetter | TitlecaseLetter | ModifierLetter | OtherLetter
        | DecimalNumber | LetterNumber | OtherNumber
        | ConnectorPunctuation | DashPunctuation | OpenPunctuation | ClosePunctuation
        | InitialPunctuation | FinalPunctuation | OtherPunctuation
        | MathSymbol | CurrencySymbol | ModifierSymbol | OtherSymbol
    )
}

/// Formats a codepoint either as `"c"` or as `0x0300`.
pub fn format_code(code: u32) -> String {
    match char::from_u32(code) {
        Some(c) if is_written_as_char(c) => match c {
            '"' | '\\' => format!("\"\\{}\"", c),
            _ => format!("\"{}\"", c),
        },
        _ => format!("0x{:04X}", code),
    }
}

/// Formats a command name as a table key: `\alpha` becomes `alpha`, and one-letter commands like `\P` become `["\\P"]`.
pub fn format_lua_key(command: &str) -> String {
    if command.len() == 2 {
        format!(r#"   ["\{}"]"#, command)
    }
    else {
        format!("   {}", command.get(1 ..).unwrap_or(command))
    }
}

/// Ordinary symbols that are not safe are written as their character alone ; all others as a record.
pub fn format_lua_value(entry: &TableEntry, safe: bool) -> String {
    let code = format_code(entry.code);
    if entry.class == MathClass::Ordinary && !safe {
        return code;
    }

    let mut lines = vec![
        format!("      class = \"{}\"", entry.class),
        format!("      char = {}", code),
    ];
    if safe {
        lines.push("      safe = true".to_string());
    }
    format!("{{\n{}\n   }}", lines.join(",\n"))
}

/// Writes one `key = value,` line per entry, by increasing codepoint.
pub fn write_data<W: Write + ?Sized>(out: &mut W, table: &SymbolTable, safe_symbols: &SymbolSet) -> io::Result<()> {
    for (command, entry) in table.sorted_by_code() {
        let safe = safe_symbols.contains(command);
        writeln!(out, "{} = {},", format_lua_key(command), format_lua_value(entry, safe))?;
    }
    Ok(())
}
