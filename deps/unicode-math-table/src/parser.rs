use nom::{
    bytes::complete::{tag, take_while1, take_while_m_n},
    character::complete::{alpha1, char, multispace0},
    combinator::{map_opt, map_res, recognize},
    sequence::preceded,
    IResult,
};

use crate::common::MathClass;

/// One `\UnicodeMathSymbol` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub codepoint : u32,
    /// Command name, backslash included (e.g. `\plus`)
    pub command   : & 'a str,
    pub class     : MathClass,
}

fn is_upper_hex_digit(c: char) -> bool {
    c.is_ascii_digit() || ('A' ..= 'F').contains(&c)
}

/// Parses the beginning of a line of the table ; whatever follows the class keyword (description, comments) is left in the remaining input.
pub fn parse_line(input : &str) -> IResult<&str, Line> {
    let (input, _) = tag("\\UnicodeMathSymbol{\"")(input)?;
    let (input, codepoint) = map_res(take_while_m_n(5, 5, is_upper_hex_digit), |digits: &str| {
        u32::from_str_radix(digits, 16)
    })(input)?;
    let (input, _) = tag("}{")(input)?;
    let (input, command) = recognize(preceded(char('\\'), alpha1))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = tag("}{\\math")(input)?;
    let (input, class) = map_opt(
        take_while1(|c: char| c.is_ascii_lowercase()),
        MathClass::from_keyword,
    )(input)?;
    let (input, _) = char('}')(input)?;

    Ok((input, Line {
        codepoint,
        command,
        class,
    }))
}

/// Same as [`parse_line`], for callers that only care whether the line is a declaration.
pub fn parse_table_line(line : &str) -> Option<Line> {
    parse_line(line).ok().map(|(_, line)| line)
}


#[cfg(test)]
mod tests {
    use super::{parse_table_line, Line};
    use crate::common::MathClass;

    #[test]
    fn plus_sign() {
        let line = parse_table_line(r#"\UnicodeMathSymbol{"0002B}{\plus                    }{\mathbin}{plus sign b:}%"#);
        assert_eq!(line, Some(Line {
            codepoint: 0x2B,
            command: r"\plus",
            class: MathClass::Binary,
        }));
    }

    #[test]
    fn no_padding_before_brace() {
        let line = parse_table_line(r#"\UnicodeMathSymbol{"1D6E2}{\mupAlpha}{\mathalpha}"#).unwrap();
        assert_eq!(line.codepoint, 0x1D6E2);
        assert_eq!(line.command, r"\mupAlpha");
        assert_eq!(line.class, MathClass::Variable);
    }

    #[test]
    fn codepoint_survives_hex_round_trip() {
        for hex in ["00000", "0002B", "02210", "0FFFF", "1D7FF", "FFFFF"] {
            let input = format!("\\UnicodeMathSymbol{{\"{}}}{{\\x }}{{\\mathord}}", hex);
            let line = parse_table_line(&input).unwrap_or_else(|| panic!("{} should parse", input));
            assert_eq!(format!("{:05X}", line.codepoint), hex);
        }
    }

    #[test]
    fn rejected_lines() {
        let failure_cases = [
            "",
            "% comment line",
            r#" \UnicodeMathSymbol{"0002B}{\plus }{\mathbin}"#,
            r#"\UnicodeMathSymbol{"0002b}{\plus }{\mathbin}"#,
            r#"\UnicodeMathSymbol{"002B}{\plus }{\mathbin}"#,
            r#"\UnicodeMathSymbol{"0002B}{\plus2 }{\mathbin}"#,
            r#"\UnicodeMathSymbol{"0002B}{plus }{\mathbin}"#,
            r#"\UnicodeMathSymbol{"0002B}{\plus }{\mathaccentwide}"#,
            r#"\UnicodeMathSymbol{"0002B}{\plus }{\mathradical}"#,
            r#"\UnicodeMathSymbol{"0002B}{\plus }{\mathbin"#,
        ];
        for case in failure_cases {
            eprintln!("{} should fail", case);
            assert_eq!(parse_table_line(case), None);
        }
    }
}
