//! Theme colors.
//!
//! Block colors and `h` text markers use the same tokens: nine foreground
//! colors (`red`) and their background variants (`red_background`). Each maps
//! to an output class, `color-red` or `background-red`. Tokens this module
//! does not know pass through unchanged.

use serde::{Serialize, Serializer};

/// A resolved color or background token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    Gray,
    Brown,
    Orange,
    Yellow,
    Teal,
    Blue,
    Purple,
    Pink,
    Red,
    GrayBackground,
    BrownBackground,
    OrangeBackground,
    YellowBackground,
    TealBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
    RedBackground,
    /// A token not in the known set, kept verbatim.
    Other(String),
}

/// Known tokens with their output class. `green` is the older name of `teal`.
const KNOWN: &[(&str, ThemeColor, &str)] = &[
    ("gray", ThemeColor::Gray, "color-gray"),
    ("brown", ThemeColor::Brown, "color-brown"),
    ("orange", ThemeColor::Orange, "color-orange"),
    ("yellow", ThemeColor::Yellow, "color-yellow"),
    ("teal", ThemeColor::Teal, "color-green"),
    ("green", ThemeColor::Teal, "color-green"),
    ("blue", ThemeColor::Blue, "color-blue"),
    ("purple", ThemeColor::Purple, "color-purple"),
    ("pink", ThemeColor::Pink, "color-pink"),
    ("red", ThemeColor::Red, "color-red"),
    ("gray_background", ThemeColor::GrayBackground, "background-gray"),
    ("brown_background", ThemeColor::BrownBackground, "background-brown"),
    ("orange_background", ThemeColor::OrangeBackground, "background-orange"),
    ("yellow_background", ThemeColor::YellowBackground, "background-yellow"),
    ("teal_background", ThemeColor::TealBackground, "background-green"),
    ("green_background", ThemeColor::TealBackground, "background-green"),
    ("blue_background", ThemeColor::BlueBackground, "background-blue"),
    ("purple_background", ThemeColor::PurpleBackground, "background-purple"),
    ("pink_background", ThemeColor::PinkBackground, "background-pink"),
    ("red_background", ThemeColor::RedBackground, "background-red"),
];

impl ThemeColor {
    /// Parse a token. Empty tokens mean "no color".
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        if token.is_empty() {
            return None;
        }
        let color = KNOWN
            .iter()
            .find(|(known, _, _)| *known == token)
            .map_or_else(|| Self::Other(token.to_owned()), |(_, color, _)| color.clone());
        Some(color)
    }

    /// Canonical token, as stored in records.
    #[must_use]
    pub fn as_token(&self) -> &str {
        match self {
            Self::Other(token) => token,
            known => KNOWN
                .iter()
                .find(|(_, color, _)| color == known)
                .map_or("", |(token, _, _)| *token),
        }
    }

    /// Output class name. Unknown tokens are returned as they are.
    #[must_use]
    pub fn class_name(&self) -> &str {
        match self {
            Self::Other(token) => token,
            known => KNOWN
                .iter()
                .find(|(_, color, _)| color == known)
                .map_or("", |(_, _, class)| *class),
        }
    }
}

impl Serialize for ThemeColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_token())
    }
}

/// Map a color token to its output class, or to `default` when absent.
///
/// Total: unknown tokens come back unchanged.
#[must_use]
pub fn resolve<'a>(token: Option<&'a str>, default: &'a str) -> &'a str {
    match token {
        None | Some("") => default,
        Some(token) => KNOWN
            .iter()
            .find(|(known, _, _)| *known == token)
            .map_or(token, |(_, _, class)| *class),
    }
}

/// Output class of an already parsed color, or `default` when absent.
#[must_use]
pub fn resolve_class<'a>(color: Option<&'a ThemeColor>, default: &'a str) -> &'a str {
    color.map_or(default, ThemeColor::class_name)
}
