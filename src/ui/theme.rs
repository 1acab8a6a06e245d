use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xff, 0x98, 0x00);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const FOCUS_BORDER: Color = Color::Rgb(0x21, 0x96, 0xf3);

pub const INCREMENT: Color = Color::Rgb(0x4c, 0xaf, 0x50);
pub const DECREMENT: Color = Color::Rgb(0xf4, 0x43, 0x36);
pub const RESET: Color = Color::Rgb(0x21, 0x96, 0xf3);
pub const ALERT: Color = Color::Rgb(0xff, 0x98, 0x00);
