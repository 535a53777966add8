use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use t9::{Dictionary, LoadOptions, Trie};

/// Look up dictionary words by the keypad keys that type them.
#[derive(Parser, Debug)]
#[command(name = "t9", version, about)]
struct Args {
    /// Word list, one word per line
    #[arg(short, long)]
    dictionary: PathBuf,

    /// Fail the build on lines with unsupported characters instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Write a GraphViz rendering of the trie to this file
    #[arg(long)]
    dot: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Raise the log level (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Key sequences to look up, e.g. 4663
    sequences: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Args {
    fn level_filter(&self) -> LevelFilter {
        let level = LevelFilter::from(self.log_level);
        match self.verbose {
            0 => level,
            1 => level.max(LevelFilter::Info),
            _ => level.max(LevelFilter::Debug),
        }
    }
}

fn configure_logging(level: LevelFilter) -> anyhow::Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} - {m}\n")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .context("Build logging config")?;

    log4rs::init_config(config).context("Initialize logging")?;
    Ok(())
}

fn run(args: &Args) -> anyhow::Result<bool> {
    let (dictionary, _report) = Dictionary::load(
        &args.dictionary,
        LoadOptions {
            strict: args.strict,
        },
    )?;
    let trie = Trie::build(&dictionary)
        .with_context(|| format!("Build trie from {}", args.dictionary.display()))?;
    drop(dictionary);

    if let Some(path) = &args.dot {
        let file =
            File::create(path).with_context(|| format!("Create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        trie.write_dot(&mut writer)
            .and_then(|_| writer.flush())
            .with_context(|| format!("Write dot graph to {}", path.display()))?;
        log::info!("Wrote dot graph to {}", path.display());
    }

    let mut all_ok = true;
    for sequence in &args.sequences {
        match trie.lookup_str(sequence) {
            Ok([]) => println!("{}: (no matches)", sequence),
            Ok(words) => println!("{}: {}", sequence, words.join(" ")),
            Err(err) => {
                eprintln!("{}: error: {}", sequence, err);
                all_ok = false;
            }
        }
    }
    Ok(all_ok)
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = configure_logging(args.level_filter()) {
        eprintln!("error: {:#}", err);
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
