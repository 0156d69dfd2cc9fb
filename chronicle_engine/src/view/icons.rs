//! module Icons
//!
//! A centralized out-of-the-way module to define Unicode icons used for
//! various message types. The use for each is self-evident from the constant
//! name.

pub(crate) const ICON_SUCCESS: &str = "\u{2611}"; // ✔
pub(crate) const ICON_FAILURE: &str = "\u{274C}"; // ✖
pub(crate) const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
pub(crate) const ICON_ENGINE: &str = "⚙";
pub(crate) const ICON_CELEBRATE: &str = "🎉"; // U+1F389
pub(crate) const ICON_POSITIVE: &str = "➕";
pub(crate) const ICON_ATTACK: &str = "⚔"; // U+2694
pub(crate) const ICON_HARMED: &str = "\u{2623}"; // biohazard sign
pub(crate) const ICON_HEALED: &str = "\u{2624}"; // caduceus
pub(crate) const ICON_ESCAPE: &str = "→"; // U+2192
pub(crate) const ICON_DEATH: &str = "☠";
