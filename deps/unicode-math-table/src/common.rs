use std::fmt;

/// The semantic class a symbol is given in the generated Lua table.
/// `unicode-math` distinguishes more categories than we need ; several of its keywords collapse onto the same class (cf [`LATEX_CLASSES`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MathClass {
    Ordinary,
    Operator,
    Binary,
    Relation,
    Punctuation,
    Open,
    Close,
    /// Alphabetic symbols, e.g. `\alpha`
    Variable,
    Accent,
    /// Over- and under- braces, brackets, etc.
    Delimiter,
}

/// `unicode-math` keyword (what follows `\math` in the table) and the class it maps to.
pub const LATEX_CLASSES: &[(&str, MathClass)] = &[
    ("ord",    MathClass::Ordinary),
    ("op",     MathClass::Operator),
    ("bin",    MathClass::Binary),
    ("rel",    MathClass::Relation),
    ("punct",  MathClass::Punctuation),
    ("open",   MathClass::Open),
    ("close",  MathClass::Close),
    ("alpha",  MathClass::Variable),
    ("accent", MathClass::Accent),
    ("over",   MathClass::Delimiter),
    ("under",  MathClass::Delimiter),
    ("fence",  MathClass::Ordinary),
];

impl MathClass {
    /// Looks up a keyword like `"bin"` (not `"mathbin"`) in [`LATEX_CLASSES`].
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        LATEX_CLASSES
            .iter()
            .find(|(name, _)| *name == keyword)
            .map(|&(_, class)| class)
    }

    /// Name of the class as written in the Lua table.
    pub fn name(self) -> &'static str {
        match self {
            MathClass::Ordinary    => "ordinary",
            MathClass::Operator    => "operator",
            MathClass::Binary      => "binary",
            MathClass::Relation    => "relation",
            MathClass::Punctuation => "punctuation",
            MathClass::Open        => "open",
            MathClass::Close       => "close",
            MathClass::Variable    => "variable",
            MathClass::Accent      => "accent",
            MathClass::Delimiter   => "delimiter",
        }
    }
}

impl fmt::Display for MathClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
