//! Tabula entrypoint.
use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use core_config::Config;
use core_font::FigletDriver;
use core_render::{Color, Display, PlainRenderer, Style};
use core_terminal::{DEFAULT_COLUMNS, TerminalCapabilities};
use core_text::encoding::{decode, normalize};
use core_text::segment::segments;
use std::io::{Read, Write, stdin, stdout};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{debug, error, info};
use tracing_appender::non_blocking::WorkerGuard;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "tabula", version, about = "Width-aware terminal text layout")]
struct Args {
    /// Optional configuration file path (overrides discovery of `tabula.toml`).
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,
    /// Never emit escape sequences, whatever the config says.
    #[arg(long, global = true)]
    plain: bool,
    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file", global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

/// Style overrides layered over the `[style]` config section.
#[derive(clap::Args, Debug, Default, Clone)]
struct StyleArgs {
    #[arg(long)]
    fg: Option<Color>,
    #[arg(long)]
    bg: Option<Color>,
    #[arg(long)]
    bold: bool,
    #[arg(long)]
    underline: bool,
}

impl StyleArgs {
    fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && !self.bold && !self.underline
    }

    fn resolve(&self, default: Option<Style>) -> Option<Style> {
        if self.is_empty() {
            return default;
        }
        let base = default.unwrap_or_default();
        Some(Style {
            fg: self.fg.or(base.fg),
            bg: self.bg.or(base.bg),
            bold: base.bold || self.bold,
            underline: base.underline || self.underline,
        })
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print text as a single line. Reads stdin when TEXT is omitted.
    Text {
        text: Option<String>,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Print the display width of text.
    Width {
        text: Option<String>,
        /// List every display unit with its byte range and width.
        #[arg(long)]
        units: bool,
    },
    /// Break text into lines of the given width.
    Wrap {
        text: Option<String>,
        #[arg(long)]
        width: usize,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Center text; defaults to the terminal width.
    Center {
        text: Option<String>,
        #[arg(long)]
        width: Option<usize>,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Draw a bordered box; width 0 sizes it to the content.
    #[command(name = "box")]
    Boxed {
        text: Option<String>,
        #[arg(long, default_value_t = 0)]
        width: usize,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Align delimited rows into columns.
    Table {
        /// Input file; stdin when omitted.
        file: Option<PathBuf>,
        /// Treat the first row as a header and draw a separator below it.
        #[arg(long)]
        header: bool,
        #[arg(long, default_value_t = ',')]
        delimiter: char,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Print large font art, or a box when no art is available.
    Header {
        text: Option<String>,
        #[arg(long)]
        font: Option<String>,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Print one progress line.
    Progress {
        #[arg(long)]
        current: u64,
        #[arg(long)]
        total: u64,
        #[arg(long, default_value = "")]
        label: String,
        #[arg(long)]
        width: Option<usize>,
        #[command(flatten)]
        style: StyleArgs,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Text { .. } => "text",
            Command::Width { .. } => "width",
            Command::Wrap { .. } => "wrap",
            Command::Center { .. } => "center",
            Command::Boxed { .. } => "box",
            Command::Table { .. } => "table",
            Command::Header { .. } => "header",
            Command::Progress { .. } => "progress",
        }
    }
}

/// Values resolved once from config and terminal probing.
#[derive(Debug, Clone)]
struct RunContext {
    default_style: Option<Style>,
    columns: usize,
    font_name: String,
    progress_width: usize,
}

impl RunContext {
    fn new(config: &Config, caps: &TerminalCapabilities) -> Self {
        Self {
            default_style: config.default_style(),
            columns: caps.columns_or(DEFAULT_COLUMNS),
            font_name: config.file.font.name.clone(),
            progress_width: config.file.progress.width,
        }
    }
}

fn configure_logging(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("TABULA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let (writer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| anyhow!("log file path `{}` has no file name", path.display()))?;
            tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name))
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(log_file.is_none())
        .with_writer(writer)
        .try_init()
    {
        Ok(()) => Ok(Some(guard)),
        // Global subscriber already installed; dropping the guard shuts the writer down.
        Err(_) => Ok(None),
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn build_display<W: Write>(
    out: W,
    plain: bool,
    config: &Config,
    caps: &TerminalCapabilities,
) -> Display<W> {
    let font = &config.file.font;
    let display = Display::new(out)
        .with_width_mode(config.width_mode())
        .with_font_driver(FigletDriver::new(font.command.clone()).with_timeout(font.timeout()));
    if plain || !config.color_enabled(caps.is_tty, caps.no_color) {
        display.with_renderer(PlainRenderer)
    } else {
        display
    }
}

/// Use the argument when given, otherwise all of `input` with one trailing
/// line break removed. Both paths are normalized before measurement.
fn text_or_input(text: Option<&str>, input: &mut dyn Read) -> Result<String> {
    if let Some(text) = text {
        return Ok(normalize(text).into_owned());
    }
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes).context("reading stdin")?;
    let mut text = decode(&bytes);
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

/// Split delimited input into rows of trimmed cells, skipping blank lines.
fn parse_rows(input: &str, delimiter: char) -> Vec<Vec<String>> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split(delimiter)
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect()
}

fn read_table_input(file: Option<&Path>, input: &mut dyn Read) -> Result<String> {
    match file {
        Some(path) => {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading `{}`", path.display()))?;
            debug!(target: "io", file = %path.display(), size_bytes = bytes.len(), "table_read_ok");
            Ok(decode(&bytes))
        }
        None => text_or_input(None, input),
    }
}

fn execute<W: Write>(
    command: &Command,
    display: &mut Display<W>,
    ctx: &RunContext,
    input: &mut dyn Read,
) -> Result<()> {
    match command {
        Command::Text { text, style } => {
            let text = text_or_input(text.as_deref(), input)?;
            display.text(&text, style.resolve(ctx.default_style).as_ref())
        }
        Command::Width { text, units } => {
            let text = text_or_input(text.as_deref(), input)?;
            let measurer = display.measurer();
            if *units {
                for seg in segments(&text, &measurer) {
                    let row = format!("{}..{}\t{}\t{:?}", seg.start, seg.end, seg.width, seg.cluster);
                    display.text(&row, None)?;
                }
            }
            display.text(&measurer.width(&text).to_string(), None)
        }
        Command::Wrap { text, width, style } => {
            let text = text_or_input(text.as_deref(), input)?;
            display.wrap(&text, *width, style.resolve(ctx.default_style).as_ref())
        }
        Command::Center { text, width, style } => {
            let text = text_or_input(text.as_deref(), input)?;
            let width = width.unwrap_or(ctx.columns);
            display.center(&text, width, style.resolve(ctx.default_style).as_ref())
        }
        Command::Boxed { text, width, style } => {
            let text = text_or_input(text.as_deref(), input)?;
            display.boxed(&text, *width, style.resolve(ctx.default_style).as_ref())
        }
        Command::Table {
            file,
            header,
            delimiter,
            style,
        } => {
            let raw = read_table_input(file.as_deref(), input)?;
            let rows = parse_rows(&raw, *delimiter);
            display.table(&rows, style.resolve(ctx.default_style).as_ref(), *header)
        }
        Command::Header { text, font, style } => {
            let text = text_or_input(text.as_deref(), input)?;
            let font = font.as_deref().unwrap_or(&ctx.font_name);
            display.header(&text, font, style.resolve(ctx.default_style).as_ref())
        }
        Command::Progress {
            current,
            total,
            label,
            width,
            style,
        } => display.progress(
            *current,
            *total,
            label,
            width.unwrap_or(ctx.progress_width),
            style.resolve(ctx.default_style).as_ref(),
        ),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging(args.log_file.as_deref())?;
    install_panic_hook();
    info!(target: "runtime", command = args.command.name(), "startup");

    let config = core_config::load_from(args.config.clone())?;
    let caps = TerminalCapabilities::detect();
    let ctx = RunContext::new(&config, &caps);
    let mut display = build_display(stdout(), args.plain, &config, &caps);
    let renderer = display.renderer_name();
    let width_mode = display.measurer().mode().as_str();
    debug!(
        target: "runtime",
        renderer = renderer,
        width_mode = width_mode,
        columns = ctx.columns,
        "display_ready"
    );

    let result = execute(&args.command, &mut display, &ctx, &mut stdin().lock());
    if let Err(err) = &result {
        error!(target: "runtime", command = args.command.name(), error = %err, "command_failed");
    }
    info!(target: "runtime", "shutdown");
    result
}
