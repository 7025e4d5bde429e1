// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use chrono::Duration;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use regex::RegexBuilder;
use std::io::Write;
use std::path::{Path, PathBuf};

use subcore::app_config::{Config, LogLevel};
use subcore::domain::{
    available_types_sorted, FileProperties, NewlineType, SubtitleTextType, SubtitleType,
    Subtitles, SyncPoint, SyncPoints, Timing,
};
use subcore::encoding::TextEncoding;
use subcore::errors::AppError;
use subcore::factory::{OpenedSubtitles, SubtitleFactory};
use subcore::file_utils::FileManager;
use subcore::saver::SubtitleSaver;
use subcore::search::{SearchOperator, SubtitleSearchOptions};
use subcore::timing::{
    AdjustOperator, FrameRateOperator, MergeOperator, ShiftOperator, SplitOperator,
    SynchronizeOperator,
};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for NewlineType to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliNewlineType {
    Unix,
    Windows,
    Macintosh,
}

impl From<CliNewlineType> for NewlineType {
    fn from(cli_newline: CliNewlineType) -> Self {
        match cli_newline {
            CliNewlineType::Unix => NewlineType::Unix,
            CliNewlineType::Windows => NewlineType::Windows,
            CliNewlineType::Macintosh => NewlineType::Macintosh,
        }
    }
}

/// Where an edited file is written
#[derive(Parser, Debug)]
struct OutputArgs {
    /// Subtitle file to read
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// File to write; the input is overwritten when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the format, encoding and timing of a file, or of every subtitle file in a directory
    Info {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Write a file in another format, newline type or encoding
    Convert {
        #[command(flatten)]
        files: OutputArgs,

        /// Target format, e.g. SubRip or MicroDVD
        #[arg(short = 't', long = "format")]
        subtitle_type: Option<SubtitleType>,

        /// Target newline type
        #[arg(short, long, value_enum)]
        newline: Option<CliNewlineType>,

        /// Target encoding, e.g. UTF-8 or windows-1252
        #[arg(short, long)]
        encoding: Option<String>,

        /// Write the translation instead of the text
        #[arg(long)]
        translation: bool,

        /// Import the translation from another subtitle file first
        #[arg(long, value_name = "FILE")]
        import_translation: Option<PathBuf>,
    },

    /// Shift subtitles by a time or a number of frames
    Shift {
        #[command(flatten)]
        files: OutputArgs,

        /// Milliseconds to add, negative to move earlier
        #[arg(long, allow_hyphen_values = true, conflicts_with = "frames")]
        millis: Option<i64>,

        /// Frames to add, negative to move earlier
        #[arg(long, allow_hyphen_values = true)]
        frames: Option<i64>,

        /// First subtitle to shift, counting from 1
        #[arg(long)]
        from: Option<usize>,

        /// Last subtitle to shift, counting from 1
        #[arg(long)]
        to: Option<usize>,
    },

    /// Stretch timings so the first and last subtitles start at given times
    Adjust {
        #[command(flatten)]
        files: OutputArgs,

        /// New start of the first subtitle, in milliseconds
        #[arg(long)]
        first: i64,

        /// New start of the last subtitle, in milliseconds
        #[arg(long)]
        last: i64,
    },

    /// Synchronize with reference points
    Sync {
        #[command(flatten)]
        files: OutputArgs,

        /// Reference point as SUBTITLE=MILLISECONDS, counting subtitles from 1
        #[arg(short, long = "point", value_name = "SUBTITLE=MS", required = true)]
        points: Vec<String>,

        /// Also move subtitles outside the first and last points
        #[arg(long)]
        all: bool,
    },

    /// Change the current or the original frame rate
    Framerate {
        #[command(flatten)]
        files: OutputArgs,

        /// New current frame rate; times are kept
        #[arg(long, conflicts_with = "original")]
        current: Option<f64>,

        /// New original frame rate; times are recomputed
        #[arg(long)]
        original: Option<f64>,
    },

    /// Merge a range of subtitles into one
    Merge {
        #[command(flatten)]
        files: OutputArgs,

        /// First subtitle, counting from 1
        first: usize,

        /// Last subtitle, counting from 1
        last: usize,
    },

    /// Split a subtitle into one subtitle per line
    Split {
        #[command(flatten)]
        files: OutputArgs,

        /// Subtitle to split, counting from 1
        subtitle: usize,

        /// Gap between the pieces in milliseconds; the configured gap when omitted
        #[arg(long)]
        gap: Option<i64>,
    },

    /// Find text, or replace every match with --replace
    Search {
        #[command(flatten)]
        files: OutputArgs,

        /// Regular expression to look for
        pattern: String,

        /// Replacement text; every match is replaced and the file saved
        #[arg(short, long)]
        replace: Option<String>,

        /// Match case-insensitively
        #[arg(short, long)]
        ignore_case: bool,
    },

    /// List the supported subtitle formats
    Formats,

    /// Generate shell completions for subcore
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// subcore - subtitle format detection, conversion and timing tool
#[derive(Parser, Debug)]
#[command(name = "subcore")]
#[command(version)]
#[command(about = "Subtitle format conversion and timing tool")]
#[command(long_about = "subcore reads 22 subtitle formats, converts between them and fixes their timing.

EXAMPLES:
    subcore info movie.srt                         # Show format, encoding and timing
    subcore convert movie.srt -t MicroDVD -o movie.sub
    subcore shift movie.srt --millis -1500         # Move everything 1.5 s earlier
    subcore sync movie.srt -p 1=1000 -p 120=3600000 --all
    subcore framerate movie.sub --original 23.976
    subcore search movie.srt 'colou?r' --replace color
    subcore completions bash > subcore.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger::new(LevelFilter::Trace)))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and label for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, label) = Self::style_for_level(record.level());
            let _ = writeln!(std::io::stderr(), "{}{} {} {}\x1B[0m", color, now, label, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Info until the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();
    if let Some(level) = cli.log_level {
        log::set_max_level(LogLevel::from(level).to_level_filter());
    }

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subcore", &mut std::io::stdout());
            Ok(())
        }
        Commands::Formats => {
            for info in available_types_sorted() {
                let mode = format!("{:?}", info.mode);
                println!("{:<28} {:<7} {}", info.subtitle_type.as_str(), mode, info);
            }
            Ok(())
        }
        command => {
            let config = load_config(&cli.config_path, cli.log_level)?;
            run_command(command, &config)
        }
    }
}

fn load_config(config_path: &str, cli_level: Option<CliLogLevel>) -> Result<Config, AppError> {
    if !Path::new(config_path).exists() {
        warn!("Config file not found at '{}', creating default config.", config_path);
    }
    let mut config = Config::load_or_create(config_path)
        .map_err(|e| AppError::Config(format!("Failed to load config file {}: {:#}", config_path, e)))?;

    match cli_level {
        Some(level) => config.log_level = level.into(),
        None => log::set_max_level(config.log_level.to_level_filter()),
    }

    config
        .validate()
        .map_err(|e| AppError::Config(format!("Configuration validation failed: {:#}", e)))?;
    Ok(config)
}

fn run_command(command: Commands, config: &Config) -> Result<()> {
    let factory = SubtitleFactory::from_config(config)?;

    match command {
        Commands::Info { path } => run_info(&factory, &path),
        Commands::Convert {
            files,
            subtitle_type,
            newline,
            encoding,
            translation,
            import_translation,
        } => {
            let mut opened = open(&factory, &files.input)?;
            if let Some(path) = import_translation {
                let translated = open(&factory, &path)?;
                subcore::translations::import(
                    &mut opened.subtitles,
                    &translated.subtitles,
                    config.time_between_subtitles(),
                );
            }

            let mut properties = opened.file_properties.clone();
            if let Some(subtitle_type) = subtitle_type {
                properties.subtitle_type = subtitle_type;
            }
            if let Some(newline) = newline {
                properties.newline_type = newline.into();
            }
            if let Some(label) = encoding {
                properties.encoding = TextEncoding::from_label(&label)?;
            }
            let text_type = if translation {
                SubtitleTextType::Translation
            } else {
                SubtitleTextType::Text
            };
            save(&opened.subtitles, properties, files.output.as_deref(), text_type, config)
        }
        Commands::Shift {
            files,
            millis,
            frames,
            from,
            to,
        } => edit(&factory, &files, config, |subtitles| {
            let count = subtitles.collection.len();
            let start = from.map(|n| n.saturating_sub(1)).unwrap_or(0);
            let end = to.map(|n| n.saturating_sub(1)).unwrap_or(count.saturating_sub(1));
            let mut operator = ShiftOperator::new(subtitles);
            match (millis, frames) {
                (Some(millis), _) => operator.shift_times_range(Duration::milliseconds(millis), start, end),
                (None, Some(frames)) => operator.shift_frames_range(frames, start, end),
                (None, None) => false,
            }
        }),
        Commands::Adjust { files, first, last } => edit(&factory, &files, config, |subtitles| {
            AdjustOperator::new(subtitles).adjust_times(Duration::milliseconds(first), Duration::milliseconds(last))
        }),
        Commands::Sync { files, points, all } => {
            let parsed = points
                .iter()
                .map(|point| parse_sync_point(point))
                .collect::<Result<Vec<_>>>()?;
            edit(&factory, &files, config, |subtitles| {
                let frame_rate = subtitles.frame_rate();
                let mut sync_points = SyncPoints::new();
                for (number, millis) in &parsed {
                    let Some(subtitle) = subtitles.collection.get(*number) else {
                        warn!("Ignoring sync point for missing subtitle {}", number + 1);
                        continue;
                    };
                    let current = Timing::from_time(subtitle.times().start(), frame_rate);
                    let correct = Timing::from_time(Duration::milliseconds(*millis), frame_rate);
                    sync_points.add(SyncPoint::new(*number, current, correct));
                }
                SynchronizeOperator::new(subtitles).sync(&sync_points, all)
            })
        }
        Commands::Framerate {
            files,
            current,
            original,
        } => edit(&factory, &files, config, |subtitles| {
            let mut operator = FrameRateOperator::new(subtitles);
            match (current, original) {
                (Some(frame_rate), _) => operator.change_current(frame_rate),
                (None, Some(frame_rate)) => operator.change_original(frame_rate),
                (None, None) => false,
            }
        }),
        Commands::Merge { files, first, last } => edit(&factory, &files, config, |subtitles| {
            let (first, last) = (first.saturating_sub(1), last.saturating_sub(1));
            MergeOperator::new(subtitles).merge(first, last)
                && subtitles.collection.remove_range(first + 1, last - first)
        }),
        Commands::Split { files, subtitle, gap } => {
            let gap = gap.map(Duration::milliseconds).unwrap_or_else(|| config.time_between_subtitles());
            edit(&factory, &files, config, |subtitles| {
                let index = subtitle.saturating_sub(1);
                let pieces = subtitles
                    .collection
                    .get(index)
                    .and_then(|original| SplitOperator::new(subtitles, gap).split(original));
                let Some(pieces) = pieces else {
                    return false;
                };
                subtitles.collection.remove(index);
                for (offset, piece) in pieces.into_iter().enumerate() {
                    subtitles.collection.insert(index + offset, piece);
                }
                true
            })
        }
        Commands::Search {
            files,
            pattern,
            replace,
            ignore_case,
        } => {
            let regex = RegexBuilder::new(&pattern)
                .case_insensitive(ignore_case)
                .build()
                .with_context(|| format!("Invalid search pattern: {}", pattern))?;
            match replace {
                Some(replacement) => edit(&factory, &files, config, |subtitles| {
                    let replaced = SearchOperator::new(subtitles).replace_all(&regex, &replacement);
                    info!("Replaced text in {} subtitles", replaced.len());
                    !replaced.is_empty()
                }),
                None => {
                    let mut opened = open(&factory, &files.input)?;
                    print_matches(&mut opened.subtitles, SubtitleSearchOptions::new(regex));
                    Ok(())
                }
            }
        }
        Commands::Formats | Commands::Completions { .. } => Ok(()),
    }
}

fn run_info(factory: &SubtitleFactory, path: &Path) -> Result<()> {
    let files = if path.is_dir() {
        FileManager::find_subtitle_files(path)?
    } else if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        return Err(AppError::File(format!("Input path does not exist: {:?}", path)).into());
    };

    for file in files {
        match factory.open(&file) {
            Ok(opened) => {
                let properties = &opened.file_properties;
                println!(
                    "{}: {} subtitles, {}, {}, {:?} timing, {:?} newlines, {} fps",
                    properties.file_name(),
                    opened.subtitles.collection.len(),
                    properties.subtitle_type,
                    properties.encoding,
                    properties.timing_mode,
                    properties.newline_type,
                    opened.subtitles.frame_rate()
                );
                for incomplete in opened.incomplete.iter() {
                    println!("    {}", incomplete);
                }
            }
            Err(e) => error!("Error reading {:?}: {}", file, e),
        }
    }
    Ok(())
}

fn open(factory: &SubtitleFactory, path: &Path) -> Result<OpenedSubtitles, AppError> {
    factory.open(path).map_err(|e| {
        error!("Failed to open subtitle file: {:?}", path);
        AppError::from(e)
    })
}

/// Opens the input, applies an operation and saves when it succeeded
fn edit<F>(factory: &SubtitleFactory, files: &OutputArgs, config: &Config, operation: F) -> Result<()>
where
    F: FnOnce(&mut Subtitles) -> bool,
{
    let mut opened = open(factory, &files.input)?;
    if !operation(&mut opened.subtitles) {
        return Err(anyhow!("The operation could not be applied to {:?}", files.input));
    }
    save(
        &opened.subtitles,
        opened.file_properties,
        files.output.as_deref(),
        SubtitleTextType::Text,
        config,
    )
}

fn save(
    subtitles: &Subtitles,
    mut properties: FileProperties,
    output: Option<&Path>,
    text_type: SubtitleTextType,
    config: &Config,
) -> Result<()> {
    if let Some(output) = output {
        properties.path = output.to_path_buf();
    }
    if properties.newline_type == NewlineType::Unknown {
        properties.newline_type = config.newline_type;
    }
    if properties.subtitle_type == SubtitleType::Unknown {
        return Err(anyhow!("No subtitle format to save {:?} with", properties.path));
    }

    let saved = SubtitleSaver::new()
        .save(subtitles, &properties, text_type)
        .with_context(|| format!("Failed to save subtitle file: {:?}", properties.path))?;
    info!("Success: {:?}", saved.path);
    Ok(())
}

// @returns: Zero-based subtitle index and time in milliseconds
fn parse_sync_point(point: &str) -> Result<(usize, i64)> {
    let (number, millis) = point
        .split_once('=')
        .ok_or_else(|| anyhow!("Invalid sync point '{}', expected SUBTITLE=MS", point))?;
    let number: usize = number
        .trim()
        .parse()
        .with_context(|| format!("Invalid subtitle number in sync point '{}'", point))?;
    let millis: i64 = millis
        .trim()
        .parse()
        .with_context(|| format!("Invalid time in sync point '{}'", point))?;
    if number == 0 {
        return Err(anyhow!("Subtitle numbers start at 1 in sync point '{}'", point));
    }
    Ok((number - 1, millis))
}

fn print_matches(subtitles: &mut Subtitles, options: SubtitleSearchOptions) {
    let operator = SearchOperator::new(subtitles);
    let mut options = options;
    let mut count = 0;

    while let Some(found) = operator.find(&options) {
        println!("{}", found);
        count += 1;
        // Empty matches still move the cursor
        let next_index = found.index + found.length.max(1);
        options = options.starting_at(found.subtitle, next_index, found.text_type);
    }
    info!("{} matches", count);
}
