/*!
 * The built-in subtitle formats.
 *
 * Order matters: detection tries formats in this order, so formats with
 * precise patterns come before simple, catch-all ones. The order also
 * follows `SubtitleType::ALL`.
 *
 * The regex engine has no lookaround. Multi-line texts are read either with
 * lazy repetition that stops at the closing timing line, or with a
 * [`TextBlock`] that stops where the next subtitle starts.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::style::StyleRule;
use super::{SubtitleFormat, SubtitleIn, SubtitleOut, TextBlock};
use crate::domain::constants::{NTSC_FRAME_RATE, PAL_FRAME_RATE};
use crate::domain::{ParsingProperties, SubtitleMode, SubtitleType};

// @const: Adobe Encore DVD timing written with colons, used for PAL
static ENCORE_PAL_TIMING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+(\s*:\s*\d+){3}\s+\d+(\s*:\s*\d+){3}\s*.+").expect("Invalid Encore timing regex")
});

/// Input properties that can only be read from the whole text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlobalInput {
    #[default]
    None,
    /// Colon separators mean PAL (25 fps), semicolons NTSC (29.97 fps)
    EncoreTimingSeparator,
    /// The input is always PAL
    AlwaysPal,
}

impl GlobalInput {
    pub fn apply(&self, text: &str, properties: &mut ParsingProperties) {
        match self {
            Self::None => {}
            Self::EncoreTimingSeparator => {
                properties.input_frame_rate = if ENCORE_PAL_TIMING.is_match(text) {
                    PAL_FRAME_RATE
                } else {
                    NTSC_FRAME_RATE
                };
            }
            Self::AlwaysPal => properties.input_frame_rate = PAL_FRAME_RATE,
        }
    }
}

// @returns: Whether a frame rate is nearer to PAL than to NTSC
pub fn is_frame_rate_pal(frame_rate: f64) -> bool {
    (frame_rate - PAL_FRAME_RATE).abs() <= (frame_rate - NTSC_FRAME_RATE).abs()
}

fn frame_rate_suffix(frame_rate: f64) -> &'static str {
    if is_frame_rate_pal(frame_rate) { "PAL" } else { "NTSC" }
}

fn adobe_encore_dvd_out(frame_rate: f64) -> String {
    let sep = if is_frame_rate_pal(frame_rate) { ':' } else { ';' };
    let suf = frame_rate_suffix(frame_rate);
    format!(
        "<<SubtitleNumber>> <<StartHours>>{sep}<<StartMinutes>>{sep}<<StartSeconds>>{sep}<<StartMillisecondsAsFrames{suf}>> <<EndHours>>{sep}<<EndMinutes>>{sep}<<EndSeconds>>{sep}<<EndMillisecondsAsFrames{suf}>> <<Text>>"
    )
}

fn fab_subtitler_out(frame_rate: f64) -> String {
    let suf = frame_rate_suffix(frame_rate);
    format!(
        "<<StartHours>>:<<StartMinutes>>:<<StartSeconds>>:<<StartMillisecondsAsFrames{suf}>>  <<EndHours>>:<<EndMinutes>>:<<EndSeconds>>:<<EndMillisecondsAsFrames{suf}>>\n<<Text>>\n"
    )
}

const SUB_VIEWER_TIMING_IN: &str = r"\[\s*(?<StartHours>\d+)\s*:\s*(?<StartMinutes>\d+)\s*:\s*(?<StartSeconds>\d+)\s*\]\s*(?<Text>.*)\s*\[\s*(?<EndHours>\d+)\s*:\s*(?<EndMinutes>\d+)\s*:\s*(?<EndSeconds>\d+)\s*\]";

const SUB_STATION_ALPHA_IN: &str = r"Dialogue:[^,]*,(?<StartHours>\d+):(?<StartMinutes>\d+):(?<StartSeconds>\d+)\.(?<StartCentiseconds>\d+),(?<EndHours>\d+):(?<EndMinutes>\d+):(?<EndSeconds>\d+)\.(?<EndCentiseconds>\d+)(,[^,]*){6},(?<Text>.*)";

const SUB_STATION_ALPHA_HEADERS: &[&str] = &[
    r"Title:(?<Title>.*)",
    r"Original\s*Script:(?<OriginalScript>.*)",
    r"Original\s*Translation:(?<OriginalTranslation>.*)",
    r"Original\s*Editing:(?<OriginalEditing>.*)",
    r"Original\s*Timing:(?<OriginalTiming>.*)",
    r"Original\s*Script\s*Checking:(?<OriginalScriptChecking>.*)",
    r"Script\s*Updated\s*By:(?<ScriptUpdatedBy>.*)",
    r"Collisions:(?<Collisions>.*)",
    r"PlayResX:\s*(?<PlayResX>\d*)",
    r"PlayResY:\s*(?<PlayResY>\d*)",
    r"PlayDepth:\s*(?<PlayDepth>\d*)",
    r"Timer:(?<Timer>.*)",
];

/// Defaults shared by every descriptor below
const BASE: SubtitleFormat = SubtitleFormat {
    name: "",
    subtitle_type: SubtitleType::Unknown,
    mode: SubtitleMode::Times,
    extensions: &[],
    line_break: "\n",
    detection: "",
    subtitle_in: SubtitleIn::Fixed(""),
    text_block: None,
    subtitle_out: SubtitleOut::Fixed(""),
    headers: &[],
    comments: None,
    body_begin_out: "",
    body_end_in: "",
    body_end_out: "",
    style: StyleRule::None,
    global_input: GlobalInput::None,
};

pub static BUILT_IN_FORMATS: [SubtitleFormat; 22] = [
    SubtitleFormat {
        name: "Micro DVD",
        subtitle_type: SubtitleType::MicroDVD,
        mode: SubtitleMode::Frames,
        extensions: &["sub"],
        line_break: "|",
        detection: r"\{\s*\d+\s*\}\s*\{\s*\d+\s*\}\s*.+",
        subtitle_in: SubtitleIn::Fixed(
            r"\{[^\d\n]*(?<StartFrame>\d+)[^\}\n]*\}([^\{\n]*\{[^\d\n]*(?<EndFrame>\d+)[^\}\n]*\})?(?<Text>.*)",
        ),
        subtitle_out: SubtitleOut::Fixed("{<<StartFrame>>}{<<EndFrame>>}<<Style>><<Text>>"),
        style: StyleRule::MicroDvd,
        ..BASE
    },
    SubtitleFormat {
        name: "SubRip",
        subtitle_type: SubtitleType::SubRip,
        mode: SubtitleMode::Times,
        extensions: &["srt"],
        line_break: "\n",
        // The dot before the end milliseconds accepts a common SubRip mistake
        detection: r"\d+[ \f\r\t\v]*\n\d+(\s*:\s*\d+){2}\s*[,.]\s*\d+\s*-->\s*\d+(\s*:\s*\d+){2}\s*[,.]\d+[ \f\r\t\v]*\n.+",
        subtitle_in: SubtitleIn::Fixed(
            r"(\d*[^\n]*\n)?((?<StartHours>\d+)[^\d\n]+)?(?<StartMinutes>\d+)[^\d\n]+(?<StartSeconds>\d+)([^\d\n](?<StartMilliseconds>\d+))?[^\d\n]+((?<EndHours>\d+)[^\d\n]+)?(?<EndMinutes>\d+)[^\d\n]+(?<EndSeconds>\d+)([^\d\n](?<EndMilliseconds>\d+))?[^\d\n]*",
        ),
        text_block: Some(TextBlock {
            boundary: r"\n[ \f\r\t\v]*\d+[ \f\r\t\v]*\n\d+(\s*:\s*\d+){2}",
            leading_newline: true,
        }),
        subtitle_out: SubtitleOut::Fixed(
            "<<SubtitleNumber>>\n<<StartHours>>:<<StartMinutes>>:<<StartSeconds>>,<<StartMilliseconds>> --> <<EndHours>>:<<EndMinutes>>:<<EndSeconds>>,<<EndMilliseconds>>\n<<Style>><<Text>><<EndOfStyle>>\n",
        ),
        style: StyleRule::Markup,
        ..BASE
    },
    SubtitleFormat {
        name: "Sub Station Alpha",
        subtitle_type: SubtitleType::SubStationAlpha,
        mode: SubtitleMode::Times,
        extensions: &["ssa"],
        line_break: r"\N",
        detection: r"\[\s*V4\s*Styles\s*\][^\[]*\[\s*Events\s*\]\s*Format:\s*[^,\n]*(,[^,\n]*){9}",
        subtitle_in: SubtitleIn::Fixed(SUB_STATION_ALPHA_IN),
        subtitle_out: SubtitleOut::Fixed(
            "Dialogue: Marked=0,<<StartHours,1>>:<<StartMinutes>>:<<StartSeconds>>.<<StartCentiseconds>>,<<EndHours,1>>:<<EndMinutes>>:<<EndSeconds>>.<<EndCentiseconds>>,Default,NTP,0000,0000,0000,!Effect,<<Style>><<Text>><<EndOfStyle>>",
        ),
        headers: SUB_STATION_ALPHA_HEADERS,
        body_begin_out: "[Events]\nFormat: Marked, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n",
        style: StyleRule::SubStationAlpha,
        ..BASE
    },
    SubtitleFormat {
        name: "Advanced Sub Station Alpha",
        subtitle_type: SubtitleType::AdvancedSubStationAlpha,
        mode: SubtitleMode::Times,
        extensions: &["ass"],
        line_break: r"\N",
        detection: r"\[\s*V4\+\s*Styles\s*\][^\[]*\[\s*Events\s*\]\s*Format:\s*[^,\n]*(,[^,\n]*){9}",
        subtitle_in: SubtitleIn::Fixed(SUB_STATION_ALPHA_IN),
        subtitle_out: SubtitleOut::Fixed(
            "Dialogue: 0,<<StartHours,1>>:<<StartMinutes>>:<<StartSeconds>>.<<StartCentiseconds>>,<<EndHours,1>>:<<EndMinutes>>:<<EndSeconds>>.<<EndCentiseconds>>,Default,,0000,0000,0000,,<<Style>><<Text>><<EndOfStyle>>",
        ),
        headers: SUB_STATION_ALPHA_HEADERS,
        body_begin_out: "[Events]\nFormat: Layer, Start, End, Style, Actor, MarginL, MarginR, MarginV, Effect, Text\n",
        style: StyleRule::SubStationAlpha,
        ..BASE
    },
    SubtitleFormat {
        name: "MPlayer",
        subtitle_type: SubtitleType::MPlayer,
        mode: SubtitleMode::Frames,
        extensions: &["mpl"],
        line_break: "|",
        detection: r"\d+,\d+,\d+,",
        subtitle_in: SubtitleIn::Fixed(
            r"(?<StartFrame>\d+)\s*,[^\d\n]*(?<EndFrame>\d+)\s*,[^\d\n]*\d+\s*,(?<Text>.*)",
        ),
        subtitle_out: SubtitleOut::Fixed("<<StartFrame>>,<<EndFrame>>,0,<<Text>>"),
        ..BASE
    },
    SubtitleFormat {
        name: "MPlayer2",
        subtitle_type: SubtitleType::MPlayer2,
        mode: SubtitleMode::Times,
        extensions: &["mpl"],
        line_break: "|",
        detection: r"\[\d+\]\[\d+\]",
        subtitle_in: SubtitleIn::Fixed(
            r"\[\s*(?<StartDeciseconds>\d+)\s*\]\[\s*(?<EndDeciseconds>\d+)\s*\](?<Text>.*)",
        ),
        subtitle_out: SubtitleOut::Fixed("[<<StartTotalDeciseconds>>][<<EndTotalDeciseconds>>]<<Text>>"),
        ..BASE
    },
    SubtitleFormat {
        name: "MPSub",
        subtitle_type: SubtitleType::MPSub,
        mode: SubtitleMode::Both,
        extensions: &["sub"],
        line_break: "\n",
        detection: r"TITLE\s*=.*\n(.*\n)*FORMAT\s*=.*\n(.*\n)*[ \f\r\t\v]*\n\d+([.,]\d+)? \d+([.,]\d+)?\s+.+",
        // Text is the run of non-blank lines after the timing line
        subtitle_in: SubtitleIn::ByTimingMode {
            times: r"(?<StartElapsedTime>\d+([.,]\d*)?)[^\d\n](?<EndElapsedTime>\d+([.,]\d*)?).*(?<Text>(\n[ \f\r\t\v]*\S.*)*)",
            frames: r"(?<StartElapsedFrames>\d+)[^\d\n](?<EndElapsedFrames>\d+).*(?<Text>(\n[ \f\r\t\v]*\S.*)*)",
        },
        subtitle_out: SubtitleOut::ByTimingMode {
            times: "<<StartElapsedTime>> <<EndElapsedTime>>\n<<Text>>\n",
            frames: "<<StartElapsedFrames>> <<EndElapsedFrames>>\n<<Text>>\n",
        },
        headers: &[
            r"TITLE\s*=(?<Title>.*)",
            r"FILE\s*=(?<File>.*)",
            r"AUTHOR\s*=(?<Author>.*)",
            r"TYPE\s*=(?<MediaType>.*)",
            r"FORMAT\s*=(?<TimingModeTimes>TIME)",
            r"FORMAT\s*=(?<TimingModeFrames>\d+(.\d+)?)",
            r"NOTE\s*=(?<Note>.*)",
        ],
        comments: Some(r"#.*"),
        ..BASE
    },
    SubtitleFormat {
        name: "SubViewer 1.0",
        subtitle_type: SubtitleType::SubViewer1,
        mode: SubtitleMode::Times,
        extensions: &["sub"],
        line_break: "|",
        detection: r"\**\s*START\s*SCRIPT\s*\**[^\[]*\[\d+:\d+:\d+\]\s*.*\s*\[\d+:\d+:\d+\]",
        subtitle_in: SubtitleIn::Fixed(SUB_VIEWER_TIMING_IN),
        subtitle_out: SubtitleOut::Fixed(
            "[<<StartHours>>:<<StartMinutes>>:<<StartSeconds>>]\n<<Text>>\n[<<EndHours>>:<<EndMinutes>>:<<EndSeconds>>]\n",
        ),
        headers: &[
            r"\[\s*TITLE\s*\].*\n(?<Title>.*)",
            r"\[\s*AUTHOR\s*\].*\n(?<Author>.*)",
            r"\[\s*SOURCE\s*\].*\n(?<Source>.*)",
            r"\[\s*PRG\s*\].*\n(?<Program>.*)",
            r"\[\s*FILEPATH\s*\].*\n(?<FilePath>.*)",
            r"\[\s*DELAY\s*\].*\n(?<Delay>.*)",
            r"\[\s*CD\s*TRACK\s*\].*\n(?<CdTrack>.*)",
        ],
        body_begin_out: "[BEGIN]\n******** START SCRIPT ********\n",
        body_end_in: r"\[\s*end\s*\]\s*\**\s*END\s*SCRIPT\s*\**",
        body_end_out: "[end]\n******** END SCRIPT ********\n",
        ..BASE
    },
    SubtitleFormat {
        name: "SubViewer 2.0",
        subtitle_type: SubtitleType::SubViewer2,
        mode: SubtitleMode::Times,
        extensions: &["sub"],
        line_break: "[br]",
        detection: r"\d\d:\d\d:\d\d.\d\d,\d\d:\d\d:\d\d.\d\d",
        subtitle_in: SubtitleIn::Fixed(
            r"(?<StartHours>\d+)\s*:\s*(?<StartMinutes>\d+)\s*:\s*(?<StartSeconds>\d+)\s*\.\s*(?<StartCentiseconds>\d+)\s*,\s*(?<EndHours>\d+)\s*:\s*(?<EndMinutes>\d+)\s*:\s*(?<EndSeconds>\d+)\s*\.\s*(?<EndCentiseconds>\d+).*\n(?<Text>.*)",
        ),
        subtitle_out: SubtitleOut::Fixed(
            "<<StartHours>>:<<StartMinutes>>:<<StartSeconds>>.<<StartCentiseconds>>,<<EndHours>>:<<EndMinutes>>:<<EndSeconds>>.<<EndCentiseconds>>\n<<Text>>\n",
        ),
        headers: &[
            r"\[\s*TITLE\s*\](?<Title>.*)",
            r"\[\s*AUTHOR\s*\](?<Author>.*)",
            r"\[\s*SOURCE\s*\](?<Source>.*)",
            r"\[\s*PRG\s*\](?<Program>.*)",
            r"\[\s*FILEPATH\s*\](?<FilePath>.*)",
            r"\[\s*DELAY\s*\](?<Delay>.*)",
            r"\[\s*CD\s*TRACK\s*\](?<CdTrack>.*)",
            r"\[\s*COMMENT\s*\](?<Comment>.*)",
            r"\[\s*COLF\s*\](?<FontColor>[^,\[\n]*)",
            r"\[\s*STYLE\s*\](?<FontStyle>[^,\[\n]*)",
            r"\[\s*SIZE\s*\](?<FontSize>[^,\[\n]*)",
            r"\[\s*FONT\s*\](?<FontName>[^,\[\n]*)",
        ],
        ..BASE
    },
    SubtitleFormat {
        name: "AQ Title",
        subtitle_type: SubtitleType::AQTitle,
        mode: SubtitleMode::Frames,
        extensions: &["aqt"],
        line_break: "\n",
        detection: r"-->>\s*\d+\s+(.+\n)*-->>\s*\d+",
        subtitle_in: SubtitleIn::Fixed(r"-->>\s*(?<StartFrame>\d+).*\n(?<Text>(.+\n)+)-->>\s*(?<EndFrame>\d+)"),
        subtitle_out: SubtitleOut::Fixed("-->> <<StartFrame>>\n<<Text>>\n-->> <<EndFrame>>\n"),
        style: StyleRule::OpeningMarkup,
        ..BASE
    },
    SubtitleFormat {
        name: "MacSUB",
        subtitle_type: SubtitleType::MacSUB,
        mode: SubtitleMode::Frames,
        extensions: &["scr"],
        line_break: "\n",
        detection: r"/\d+\s+(.+\n)*/\d+",
        subtitle_in: SubtitleIn::Fixed(r"/\s*(?<StartFrame>\d+)\n+(?<Text>(.*\n)+?)/\s*(?<EndFrame>\d+)"),
        subtitle_out: SubtitleOut::Fixed("/<<StartFrame>>\n<<Text>>\n/<<EndFrame>>"),
        ..BASE
    },
    SubtitleFormat {
        name: "Phoenix Japanimation Society",
        subtitle_type: SubtitleType::PhoenixJapanimationSociety,
        mode: SubtitleMode::Frames,
        extensions: &["pjs"],
        line_break: "|",
        detection: r#"\s*\d+,\s*\d+,\s*".+""#,
        subtitle_in: SubtitleIn::Fixed(r#"\s*(?<StartFrame>\d+),\s*(?<EndFrame>\d+),\s*"(?<Text>.+)""#),
        subtitle_out: SubtitleOut::Fixed("\t<<StartFrame>>,\t<<EndFrame>>, \"<<Text>>\""),
        ..BASE
    },
    SubtitleFormat {
        name: "Panimator",
        subtitle_type: SubtitleType::Panimator,
        mode: SubtitleMode::Times,
        extensions: &["pan"],
        line_break: "\n",
        detection: r"/d\s+\d+\s+\d+\s+(.+\n)*\s*/d\s+\d+\s+\d+\s+/c",
        subtitle_in: SubtitleIn::Fixed(
            r"/d\s+(?<StartSeconds>\d+)\s+(?<StartCentiseconds>\d+)\s+(?<Text>(.*\n)+?)\s*/d\s+(?<EndSeconds>\d+)\s+(?<EndCentiseconds>\d+)\s+/c",
        ),
        subtitle_out: SubtitleOut::Fixed(
            "/d <<StartSeconds>> <<StartCentiseconds>>\n<<Text>>\n/d <<EndSeconds>> <<EndCentiseconds>>\n/c",
        ),
        ..BASE
    },
    SubtitleFormat {
        name: "Sofni",
        subtitle_type: SubtitleType::Sofni,
        mode: SubtitleMode::Times,
        extensions: &["sub"],
        line_break: "\n",
        detection: r".+\s+\d+:\d+:\d+[.,]\d+\\\d+:\d+:\d+[.,]\d+",
        subtitle_in: SubtitleIn::Fixed(
            r"(?<Text>(.*\n)+?)[ \f\r\t\v]*(?<StartHours>\d+)\s*:\s*(?<StartMinutes>\d+)\s*:\s*(?<StartSeconds>\d+)\s*.\s*(?<StartCentiseconds>\d+)\\(?<EndHours>\d+)\s*:\s*(?<EndMinutes>\d+)\s*:\s*(?<EndSeconds>\d+)\s*.\s*(?<EndCentiseconds>\d+)",
        ),
        subtitle_out: SubtitleOut::Fixed(
            "<<Text>>\n<<StartHours>>:<<StartMinutes>>:<<StartSeconds>>.<<StartCentiseconds>>\\<<EndHours>>:<<EndMinutes>>:<<EndSeconds>>.<<EndCentiseconds>>",
        ),
        ..BASE
    },
    SubtitleFormat {
        name: "SubCreator 1.x",
        subtitle_type: SubtitleType::SubCreator1x,
        mode: SubtitleMode::Times,
        extensions: &["txt"],
        line_break: "|",
        detection: r"\d+:\d+:\d+.\d:\s*.+\s+\d+:\d+:\d+.\d:",
        subtitle_in: SubtitleIn::Fixed(
            r"(?<StartHours>\d+):(?<StartMinutes>\d+):(?<StartSeconds>\d+).(?<StartDeciseconds>\d+):\s*(?<Text>.+)\s+(?<EndHours>\d+):(?<EndMinutes>\d+):(?<EndSeconds>\d+).(?<EndDeciseconds>\d+)",
        ),
        subtitle_out: SubtitleOut::Fixed(
            "<<StartHours>>:<<StartMinutes>>:<<StartSeconds>>.<<StartDeciseconds>>:<<Text>>\n<<EndHours>>:<<EndMinutes>>:<<EndSeconds>>.<<EndDeciseconds>>:\n",
        ),
        ..BASE
    },
    SubtitleFormat {
        name: "ViPlay Subtitle File",
        subtitle_type: SubtitleType::ViPlaySubtitleFile,
        mode: SubtitleMode::Times,
        extensions: &["vsf"],
        line_break: "|",
        detection: r"\{\* VIPLAY SUBTITLE FILE \*\}\s*\d+:\d+:\d+[,.]\d+\s*-\s*\d+:\d+:\d+[,.]\d+=.+",
        subtitle_in: SubtitleIn::Fixed(
            r"(?<StartHours>\d+)\s*:\s*(?<StartMinutes>\d+)\s*:\s*(?<StartSeconds>\d+)\s*[,.]\s*(?<StartMilliseconds>\d+)\s*-\s*(?<EndHours>\d+)\s*:\s*(?<EndMinutes>\d+)\s*:\s*(?<EndSeconds>\d+)\s*[,.]\s*(?<EndMilliseconds>\d+)\s*=\s*(?<Text>.*)",
        ),
        subtitle_out: SubtitleOut::Fixed(
            "<<StartHours>>:<<StartMinutes>>:<<StartSeconds>>,<<StartMilliseconds>>-<<EndHours>>:<<EndMinutes>>:<<EndSeconds>>,<<EndMilliseconds>>=<<Text>>",
        ),
        body_begin_out: "{* VIPLAY SUBTITLE FILE *}\n",
        style: StyleRule::OpeningMarkup,
        ..BASE
    },
    SubtitleFormat {
        name: "DKS Subtitle Format",
        subtitle_type: SubtitleType::DKSSubtitleFormat,
        mode: SubtitleMode::Times,
        extensions: &["dks"],
        line_break: "[br]",
        detection: r"\[\d+:\d+:\d+\]\s*.*\s*\[\d+:\d+:\d+\]",
        subtitle_in: SubtitleIn::Fixed(SUB_VIEWER_TIMING_IN),
        subtitle_out: SubtitleOut::Fixed(
            "[<<StartHours>>:<<StartMinutes>>:<<StartSeconds>>]<<Text>>\n[<<EndHours>>:<<EndMinutes>>:<<EndSeconds>>]\n",
        ),
        ..BASE
    },
    SubtitleFormat {
        name: "Power DivX",
        subtitle_type: SubtitleType::PowerDivX,
        mode: SubtitleMode::Times,
        extensions: &["psb"],
        line_break: "|",
        detection: r"\{\s*\d+:\d+:\d+\s*\}\{\s*\d+:\d+:\d+\s*\}\s*.+",
        subtitle_in: SubtitleIn::Fixed(
            r"\{\s*(?<StartHours>\d+)\s*:\s*(?<StartMinutes>\d+)\s*:\s*(?<StartSeconds>\d+)\s*\}\s*\{\s*(?<EndHours>\d+)\s*:\s*(?<EndMinutes>\d+)\s*:\s*(?<EndSeconds>\d+)\s*\}\s*(?<Text>.*)",
        ),
        subtitle_out: SubtitleOut::Fixed(
            "{<<StartHours>>:<<StartMinutes>>:<<StartSeconds>>}{<<EndHours>>:<<EndMinutes>>:<<EndSeconds>>}<<Text>>",
        ),
        ..BASE
    },
    SubtitleFormat {
        name: "Karaoke Lyrics VKT",
        subtitle_type: SubtitleType::KaraokeLyricsVKT,
        mode: SubtitleMode::Frames,
        extensions: &["vkt"],
        line_break: "|",
        detection: r"\{\s*\d+\s*.+\s*\}\n+\{\s*\d+\s*\}",
        subtitle_in: SubtitleIn::Fixed(r"\{\s*(?<StartFrame>\d+)\s*(?<Text>.+)\}\n+\{\s*(?<EndFrame>\d+)\s*\}"),
        subtitle_out: SubtitleOut::Fixed("{<<StartFrame>> <<Text>>}\n{<<EndFrame>> }"),
        headers: &[
            r"FRAME RATE=(?<FrameRate>.*)",
            r"CREATOR=(?<Author>.*)",
            r"VIDEO SOURCE=(?<Source>.*)",
            r"DATE=(?<Date>.*)",
        ],
        body_end_in: r"#\s*[\n#]+\s+THE END.",
        body_end_out: "#\n# THE END.\n",
        ..BASE
    },
    SubtitleFormat {
        name: "Karaoke Lyrics LRC",
        subtitle_type: SubtitleType::KaraokeLyricsLRC,
        mode: SubtitleMode::Times,
        extensions: &["lrc"],
        // Lyrics have no line breaks; the separator only splits stored lines
        line_break: "|",
        detection: r"\[\s*\d+:\d+[.,]\d+\s*\].+\n+\[\s*\d+:\d+[.,]\d+\s*\]",
        subtitle_in: SubtitleIn::Fixed(
            r"\[\s*(?<StartMinutes>\d+)\s*:\s*(?<StartSeconds>\d+)\s*[.,]\s*(?<StartCentiseconds>\d+)\s*\]\s*(?<Text>.*)\n+\[\s*(?<EndMinutes>\d+)\s*:\s*(?<EndSeconds>\d+)\s*[.,]\s*(?<EndCentiseconds>\d+)\s*\]",
        ),
        subtitle_out: SubtitleOut::Fixed(
            "[<<StartMinutes>>:<<StartSeconds>>.<<StartCentiseconds>>]<<Text>>\n[<<EndMinutes>>:<<EndSeconds>>.<<EndCentiseconds>>]",
        ),
        headers: &[
            r"\[\s*ti:(?<Title>.*)\s*\]",
            r"\[\s*au:(?<Author>.*)\s*\]",
            r"\[\s*ar:(?<Artist>.*)\s*\]",
            r"\[\s*al:(?<Album>.*)\s*\]",
            r"\[\s*by:(?<Maker>.*)\s*\]",
            r"\[\s*ve:(?<Version>.*)\s*\]",
            r"\[\s*re:(?<Program>.*)\s*\]",
        ],
        ..BASE
    },
    SubtitleFormat {
        name: "Adobe Encore DVD",
        subtitle_type: SubtitleType::AdobeEncoreDVD,
        mode: SubtitleMode::Times,
        extensions: &["txt"],
        line_break: "\n",
        detection: r"\d+([:;]\d+){3} +\d+([:;]\d+){3} +.",
        subtitle_in: SubtitleIn::Fixed(
            r"(\d+\s+)?(?<StartHours>\d+)\s*[:;]\s*(?<StartMinutes>\d+)\s*[:;]\s*(?<StartSeconds>\d+)\s*[:;]\s*(?<StartMillisecondsAsFrames>\d+)\s+(?<EndHours>\d+)\s*[:;]\s*(?<EndMinutes>\d+)\s*[:;]\s*(?<EndSeconds>\d+)\s*[:;]\s*(?<EndMillisecondsAsFrames>\d+)\s+",
        ),
        text_block: Some(TextBlock {
            boundary: r"(\d+\s+)?\d+(\s*[:;]\s*\d+){3}",
            leading_newline: false,
        }),
        subtitle_out: SubtitleOut::ByFrameRate(adobe_encore_dvd_out),
        global_input: GlobalInput::EncoreTimingSeparator,
        ..BASE
    },
    SubtitleFormat {
        name: "FAB Subtitler",
        subtitle_type: SubtitleType::FABSubtitler,
        mode: SubtitleMode::Times,
        extensions: &["txt"],
        line_break: "\n",
        detection: r"\d\d:\d\d:\d\d:\d\d\s+\d\d:\d\d:\d\d:\d\d",
        subtitle_in: SubtitleIn::Fixed(
            r"(?<StartHours>\d+)\s*:\s*(?<StartMinutes>\d+)\s*:\s*(?<StartSeconds>\d+)\s*:\s*(?<StartMillisecondsAsFrames>\d+)\s+(?<EndHours>\d+)\s*:\s*(?<EndMinutes>\d+)\s*:\s*(?<EndSeconds>\d+)\s*:\s*(?<EndMillisecondsAsFrames>\d+).*",
        ),
        text_block: Some(TextBlock {
            boundary: r"\n\d+(\s*:\s*\d+){2}",
            leading_newline: true,
        }),
        subtitle_out: SubtitleOut::ByFrameRate(fab_subtitler_out),
        // Frame numbers are PAL or NTSC; PAL is assumed on input
        global_input: GlobalInput::AlwaysPal,
        ..BASE
    },
];
