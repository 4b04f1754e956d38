use ratatui::style::Color;

use crate::config::SkinSetting;

/// Identity of a skin, in picker order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SkinId {
    Winamp,
    Bmw,
    Cdj,
    Walkman,
    Boombox,
    Technics,
    Atari,
}

impl SkinId {
    pub const ALL: [SkinId; 7] = [
        SkinId::Winamp,
        SkinId::Bmw,
        SkinId::Cdj,
        SkinId::Walkman,
        SkinId::Boombox,
        SkinId::Technics,
        SkinId::Atari,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SkinId::Winamp => "Winamp",
            SkinId::Bmw => "BMW E38",
            SkinId::Cdj => "CDJ-2000",
            SkinId::Walkman => "Walkman",
            SkinId::Boombox => "Boombox",
            SkinId::Technics => "Technics",
            SkinId::Atari => "Atari 2600",
        }
    }

    pub fn accent(self) -> Color {
        match self {
            SkinId::Winamp => Color::Rgb(0x00, 0xff, 0x00),
            SkinId::Bmw => Color::Rgb(0xff, 0x8c, 0x00),
            SkinId::Cdj => Color::Rgb(0xff, 0x00, 0x66),
            SkinId::Walkman => Color::Rgb(0x00, 0xbf, 0xff),
            SkinId::Boombox => Color::Rgb(0xff, 0xd7, 0x00),
            SkinId::Technics => Color::Rgb(0xc0, 0xc0, 0xc0),
            SkinId::Atari => Color::Rgb(0xff, 0x6b, 0x35),
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    /// The following skin in picker order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The preceding skin in picker order, wrapping around.
    pub fn prev(self) -> Self {
        let n = Self::ALL.len();
        Self::ALL[(self.index() + n - 1) % n]
    }
}

impl From<SkinSetting> for SkinId {
    fn from(s: SkinSetting) -> Self {
        match s {
            SkinSetting::Winamp => SkinId::Winamp,
            SkinSetting::Bmw => SkinId::Bmw,
            SkinSetting::Cdj => SkinId::Cdj,
            SkinSetting::Walkman => SkinId::Walkman,
            SkinSetting::Boombox => SkinId::Boombox,
            SkinSetting::Technics => SkinId::Technics,
            SkinSetting::Atari => SkinId::Atari,
        }
    }
}
