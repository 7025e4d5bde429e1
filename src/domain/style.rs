use std::fmt;

/// Bold, italic and underline flags of a subtitle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Style {
    pub fn new(bold: bool, italic: bool, underline: bool) -> Self {
        Self {
            bold,
            italic,
            underline,
        }
    }

    // @returns: Whether any flag is set
    pub fn is_enabled(&self) -> bool {
        self.bold || self.italic || self.underline
    }

    /// Reads flags from raw style markup: every `u`, `b` or `i` letter in the
    /// text turns on the matching flag, whatever the surrounding syntax.
    pub fn from_style_text(style_text: &str) -> Self {
        let mut style = Self::default();
        for character in style_text.chars() {
            match character {
                'u' | 'U' => style.underline = true,
                'b' | 'B' => style.bold = true,
                'i' | 'I' => style.italic = true,
                _ => {}
            }
        }
        style
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bold {
            write!(f, " bold")?;
        }
        if self.italic {
            write!(f, " italic")?;
        }
        if self.underline {
            write!(f, " underline")?;
        }
        Ok(())
    }
}
