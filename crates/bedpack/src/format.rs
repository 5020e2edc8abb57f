//! Minecraft `§`-prefixed text formatting codes.

pub const BLACK: &str = "\u{a7}0";
pub const DARK_BLUE: &str = "\u{a7}1";
pub const DARK_GREEN: &str = "\u{a7}2";
pub const DARK_AQUA: &str = "\u{a7}3";
pub const DARK_RED: &str = "\u{a7}4";
pub const DARK_PURPLE: &str = "\u{a7}5";
pub const GOLD: &str = "\u{a7}6";
pub const GREY: &str = "\u{a7}7";
pub const DARK_GREY: &str = "\u{a7}8";
pub const BLUE: &str = "\u{a7}9";
pub const GREEN: &str = "\u{a7}a";
pub const AQUA: &str = "\u{a7}b";
pub const RED: &str = "\u{a7}c";
pub const LIGHT_PURPLE: &str = "\u{a7}d";
pub const YELLOW: &str = "\u{a7}e";
pub const WHITE: &str = "\u{a7}f";
pub const MINECOIN_GOLD: &str = "\u{a7}g";

pub const OBFUSCATED: &str = "\u{a7}k";
pub const BOLD: &str = "\u{a7}l";
pub const ITALIC: &str = "\u{a7}o";
pub const RESET: &str = "\u{a7}r";
