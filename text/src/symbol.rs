//! Glyphs used to annotate the components of an angle

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const APOSTROPHE: char = '\'';
pub(crate) const QUOTE: char = '"';
pub(crate) const PRIME: char = '′';
pub(crate) const DOUBLE_PRIME: char = '″';

/// Character symbols, or glyphs, used to annotate coordinate components.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CoordinateSymbol {
    /// Degree symbol `°`
    Degree,
    /// Apostrophe `'`, the minutes on the web and computer applications
    Apostrophe,
    /// Quote `"`, the seconds on the web and computer applications
    Quote,
    /// Prime `′`, the minutes on printed charts and maps
    Prime,
    /// Double prime `″`, the seconds on printed charts and maps
    DoublePrime,
}

impl CoordinateSymbol {
    /// Every known symbol
    pub const ALL: [Self; 5] = [
        Self::Degree,
        Self::Apostrophe,
        Self::Quote,
        Self::Prime,
        Self::DoublePrime,
    ];

    /// The glyph itself
    pub const fn as_char(self) -> char {
        match self {
            Self::Degree => DEGREE_SIGN,
            Self::Apostrophe => APOSTROPHE,
            Self::Quote => QUOTE,
            Self::Prime => PRIME,
            Self::DoublePrime => DOUBLE_PRIME,
        }
    }

    /// Find the symbol represented by the character
    pub fn from_char(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|sym| sym.as_char() == ch)
    }
}

/// Defines the characters used to annotate coordinate components.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SymbolStyle {
    /// No symbols, the components are delimited with spaces:
    /// `48 6 59 N, 122 46 31 W`
    None,
    /// Commonly used on the web and computer systems:
    /// `48° 6' 59" N, 122° 46' 31" W`
    #[default]
    Simple,
    /// The typographically correct format of paper charts and maps:
    /// `48° 6′ 59″ N, 122° 46′ 31″ W`
    Traditional,
}

impl SymbolStyle {
    fn symbol(self, symbol: CoordinateSymbol) -> &'static str {
        if self == Self::None {
            return "";
        }

        match symbol {
            CoordinateSymbol::Degree => "°",
            CoordinateSymbol::Apostrophe => "'",
            CoordinateSymbol::Quote => "\"",
            CoordinateSymbol::Prime => "′",
            CoordinateSymbol::DoublePrime => "″",
        }
    }

    /// The symbol used to annotate degrees
    pub fn degrees(self) -> &'static str {
        self.symbol(CoordinateSymbol::Degree)
    }

    /// The symbol used to annotate minutes
    pub fn minutes(self) -> &'static str {
        match self {
            Self::Traditional => self.symbol(CoordinateSymbol::Prime),
            _ => self.symbol(CoordinateSymbol::Apostrophe),
        }
    }

    /// The symbol used to annotate seconds
    pub fn seconds(self) -> &'static str {
        match self {
            Self::Traditional => self.symbol(CoordinateSymbol::DoublePrime),
            _ => self.symbol(CoordinateSymbol::Quote),
        }
    }

    /// Whether any glyphs are produced at all
    pub fn has_symbols(self) -> bool {
        self != Self::None
    }
}

/// Normalization of the text before matching it against the patterns
pub(crate) trait Desymbolize {
    /// Replace every known symbol with a space and compact the runs of whitespace
    fn desymbolized(self) -> String;
}

impl Desymbolize for &str {
    fn desymbolized(self) -> String {
        let mut result = String::with_capacity(self.len());
        let mut in_space = false;

        for ch in self.chars() {
            let ch = if CoordinateSymbol::from_char(ch).is_some() {
                ' '
            } else {
                ch
            };

            if ch.is_whitespace() {
                if !in_space {
                    result.push(' ');
                }
                in_space = true;
            } else {
                result.push(ch);
                in_space = false;
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_round_trip() {
        for sym in CoordinateSymbol::ALL {
            assert_eq!(CoordinateSymbol::from_char(sym.as_char()), Some(sym));
        }
        assert!(CoordinateSymbol::from_char('*').is_none());
    }

    #[test]
    fn simple_style() {
        let style = SymbolStyle::Simple;
        assert_eq!(style.degrees(), "°");
        assert_eq!(style.minutes(), "'");
        assert_eq!(style.seconds(), "\"");
        assert!(style.has_symbols());
    }

    #[test]
    fn traditional_style() {
        let style = SymbolStyle::Traditional;
        assert_eq!(style.degrees(), "°");
        assert_eq!(style.minutes(), "′");
        assert_eq!(style.seconds(), "″");
    }

    #[test]
    fn no_style() {
        let style = SymbolStyle::None;
        assert_eq!(style.degrees(), "");
        assert_eq!(style.minutes(), "");
        assert_eq!(style.seconds(), "");
        assert!(!style.has_symbols());
    }

    #[test]
    fn default_style_is_simple() {
        assert_eq!(SymbolStyle::default(), SymbolStyle::Simple);
    }

    #[test]
    fn desymbolize_simple() {
        assert_eq!("48° 6' 59\" N".desymbolized(), "48 6 59 N");
    }

    #[test]
    fn desymbolize_compact() {
        assert_eq!("48°6′59″N".desymbolized(), "48 6 59 N");
    }

    #[test]
    fn desymbolize_trailing_symbol() {
        assert_eq!("120.33°".desymbolized(), "120.33 ");
    }

    #[test]
    fn desymbolize_collapses_whitespace() {
        assert_eq!("N  10 \t 30".desymbolized(), "N 10 30");
    }

    #[test]
    fn desymbolize_keeps_plain_text() {
        assert_eq!("10U 516726m E".desymbolized(), "10U 516726m E");
    }
}
