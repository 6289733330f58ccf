/// ANSI color tables and text painting.
///
/// Colors are selected by name. The SGR parameters below are emitted verbatim
/// as `ESC [ <code> m`:
/// - foreground codes carry an intensity prefix (`0;` normal, `1;` bold/bright),
///   so `red` is `0;31` and `light_red` is `1;31`
/// - background codes are plain (`42` for green)
///
/// Scripts parse these sequences downstream, so the numbers must not change.
use super::errors::ColorError;

/// Escape sequence introducer.
const ESC: &str = "\x1b[";

/// Sequence that clears all attributes.
pub const RESET: &str = "\x1b[0m";

/// Recognized foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Foreground {
    Black,
    DarkGray,
    Blue,
    LightBlue,
    Green,
    LightGreen,
    Cyan,
    LightCyan,
    Red,
    LightRed,
    Purple,
    LightPurple,
    Brown,
    Yellow,
    LightGray,
    White,
}

impl Foreground {
    /// Every foreground color, in table order.
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::DarkGray,
        Self::Blue,
        Self::LightBlue,
        Self::Green,
        Self::LightGreen,
        Self::Cyan,
        Self::LightCyan,
        Self::Red,
        Self::LightRed,
        Self::Purple,
        Self::LightPurple,
        Self::Brown,
        Self::Yellow,
        Self::LightGray,
        Self::White,
    ];

    /// Name accepted by [`Foreground::from_name`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkGray => "dark_gray",
            Self::Blue => "blue",
            Self::LightBlue => "light_blue",
            Self::Green => "green",
            Self::LightGreen => "light_green",
            Self::Cyan => "cyan",
            Self::LightCyan => "light_cyan",
            Self::Red => "red",
            Self::LightRed => "light_red",
            Self::Purple => "purple",
            Self::LightPurple => "light_purple",
            Self::Brown => "brown",
            Self::Yellow => "yellow",
            Self::LightGray => "light_gray",
            Self::White => "white",
        }
    }

    /// SGR parameter string for this color.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Black => "0;30",
            Self::DarkGray => "1;30",
            Self::Blue => "0;34",
            Self::LightBlue => "1;34",
            Self::Green => "0;32",
            Self::LightGreen => "1;32",
            Self::Cyan => "0;36",
            Self::LightCyan => "1;36",
            Self::Red => "0;31",
            Self::LightRed => "1;31",
            Self::Purple => "0;35",
            Self::LightPurple => "1;35",
            Self::Brown => "0;33",
            Self::Yellow => "1;33",
            Self::LightGray => "0;37",
            Self::White => "1;37",
        }
    }

    /// Look up a color by its exact name.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidForeground` for an unknown name.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| ColorError::InvalidForeground(name.to_owned()))
    }
}

/// Recognized background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    LightGray,
}

impl Background {
    /// Every background color, in table order.
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::LightGray,
    ];

    /// Name accepted by [`Background::from_name`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::LightGray => "light_gray",
        }
    }

    /// SGR parameter string for this color.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Black => "40",
            Self::Red => "41",
            Self::Green => "42",
            Self::Yellow => "43",
            Self::Blue => "44",
            Self::Magenta => "45",
            Self::Cyan => "46",
            Self::LightGray => "47",
        }
    }

    /// Look up a color by its exact name.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidBackground` for an unknown name.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| ColorError::InvalidBackground(name.to_owned()))
    }
}

/// Wrap `text` in the escape sequences for the named colors.
///
/// The foreground is validated before the background. When `ansi` is false
/// the names are still validated but `text` comes back untouched, and the
/// same holds when neither color is given.
///
/// # Examples
///
/// ```
/// use minion_cli::style::paint;
///
/// let s = paint("text", Some("red"), Some("green"), true).unwrap();
/// assert_eq!(s, "\x1b[0;31m\x1b[42mtext\x1b[0m");
/// ```
///
/// # Errors
///
/// Returns `ColorError` naming the first unrecognized color.
pub fn paint(
    text: &str,
    foreground: Option<&str>,
    background: Option<&str>,
    ansi: bool,
) -> Result<String, ColorError> {
    let fg = foreground.map(Foreground::from_name).transpose()?;
    let bg = background.map(Background::from_name).transpose()?;

    if !ansi || (fg.is_none() && bg.is_none()) {
        return Ok(text.to_owned());
    }

    let mut out = String::with_capacity(text.len() + 16);
    if let Some(fg) = fg {
        out.push_str(ESC);
        out.push_str(fg.code());
        out.push('m');
    }
    if let Some(bg) = bg {
        out.push_str(ESC);
        out.push_str(bg.code());
        out.push('m');
    }
    out.push_str(text);
    out.push_str(RESET);
    Ok(out)
}
