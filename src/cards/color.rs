#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Color {
    #[default]
    Black = 0,
    Red = 1,
}

impl Color {
    /// the opposite color
    pub const fn invert(&self) -> Self {
        match self {
            Color::Black => Color::Red,
            Color::Red => Color::Black,
        }
    }
}

impl From<u8> for Color {
    fn from(n: u8) -> Color {
        match n {
            0 => Color::Black,
            1 => Color::Red,
            _ => panic!("invalid color"),
        }
    }
}
impl From<Color> for u8 {
    fn from(c: Color) -> u8 {
        c as u8
    }
}

/// accepts both the wire alphabet ('0'/'1') used by the deck data
/// files and the human alphabet ('B'/'R') used for sequence labels
impl TryFrom<char> for Color {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' | 'B' | 'b' => Ok(Color::Black),
            '1' | 'R' | 'r' => Ok(Color::Red),
            _ => Err(anyhow::anyhow!("invalid color character: {}", c)),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Color::Black => "B",
                Color::Red => "R",
            }
        )
    }
}
