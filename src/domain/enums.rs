use serde::{Deserialize, Serialize};
use std::fmt;

// @module: Shared enumerations for the subtitle domain

/// Which timing view was authoritative when a file was read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimingMode {
    #[default]
    Times,
    Frames,
}

/// The timing modes a subtitle format is able to express
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubtitleMode {
    Times,
    Frames,
    Both,
}

impl SubtitleMode {
    // @returns: Fixed timing mode. Only meaningful when the mode is not Both.
    pub fn as_timing_mode(&self) -> TimingMode {
        match self {
            Self::Frames => TimingMode::Frames,
            _ => TimingMode::Times,
        }
    }
}

/// Identity of every built-in subtitle format, in registration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum SubtitleType {
    #[default]
    Unknown,
    MicroDVD,
    SubRip,
    SubStationAlpha,
    AdvancedSubStationAlpha,
    MPlayer,
    MPlayer2,
    MPSub,
    SubViewer1,
    SubViewer2,
    AQTitle,
    MacSUB,
    PhoenixJapanimationSociety,
    Panimator,
    Sofni,
    SubCreator1x,
    ViPlaySubtitleFile,
    DKSSubtitleFormat,
    PowerDivX,
    KaraokeLyricsVKT,
    KaraokeLyricsLRC,
    AdobeEncoreDVD,
    FABSubtitler,
}

impl SubtitleType {
    /// Every concrete type, in registration order
    pub const ALL: [SubtitleType; 22] = [
        Self::MicroDVD,
        Self::SubRip,
        Self::SubStationAlpha,
        Self::AdvancedSubStationAlpha,
        Self::MPlayer,
        Self::MPlayer2,
        Self::MPSub,
        Self::SubViewer1,
        Self::SubViewer2,
        Self::AQTitle,
        Self::MacSUB,
        Self::PhoenixJapanimationSociety,
        Self::Panimator,
        Self::Sofni,
        Self::SubCreator1x,
        Self::ViPlaySubtitleFile,
        Self::DKSSubtitleFormat,
        Self::PowerDivX,
        Self::KaraokeLyricsVKT,
        Self::KaraokeLyricsLRC,
        Self::AdobeEncoreDVD,
        Self::FABSubtitler,
    ];

    // @returns: Identifier used for sorting and display
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::MicroDVD => "MicroDVD",
            Self::SubRip => "SubRip",
            Self::SubStationAlpha => "SubStationAlpha",
            Self::AdvancedSubStationAlpha => "AdvancedSubStationAlpha",
            Self::MPlayer => "MPlayer",
            Self::MPlayer2 => "MPlayer2",
            Self::MPSub => "MPSub",
            Self::SubViewer1 => "SubViewer1",
            Self::SubViewer2 => "SubViewer2",
            Self::AQTitle => "AQTitle",
            Self::MacSUB => "MacSUB",
            Self::PhoenixJapanimationSociety => "PhoenixJapanimationSociety",
            Self::Panimator => "Panimator",
            Self::Sofni => "Sofni",
            Self::SubCreator1x => "SubCreator1x",
            Self::ViPlaySubtitleFile => "ViPlaySubtitleFile",
            Self::DKSSubtitleFormat => "DKSSubtitleFormat",
            Self::PowerDivX => "PowerDivX",
            Self::KaraokeLyricsVKT => "KaraokeLyricsVKT",
            Self::KaraokeLyricsLRC => "KaraokeLyricsLRC",
            Self::AdobeEncoreDVD => "AdobeEncoreDVD",
            Self::FABSubtitler => "FABSubtitler",
        }
    }
}

impl fmt::Display for SubtitleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SubtitleType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Invalid subtitle type: {}", s))
    }
}

/// Newline convention of a subtitle file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewlineType {
    #[default]
    Unknown,
    Macintosh,
    Unix,
    Windows,
}

impl NewlineType {
    // @returns: Newline sequence, None when text is kept as-is
    pub fn sequence(&self) -> Option<&'static str> {
        match self {
            Self::Windows => Some("\r\n"),
            Self::Macintosh => Some("\r"),
            Self::Unix | Self::Unknown => None,
        }
    }
}

/// Which text field of a subtitle is addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubtitleTextType {
    #[default]
    Text,
    Translation,
}

impl fmt::Display for SubtitleTextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Translation => write!(f, "translation"),
        }
    }
}

impl fmt::Display for TimingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Times => write!(f, "times"),
            Self::Frames => write!(f, "frames"),
        }
    }
}
