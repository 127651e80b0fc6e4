// File: crates/protherm-render/src/main.rs
// Summary: Renders a weekly temperature program from the schedule library to PNG, or lists programs.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use protherm_chart::{ChartConfig, ProgramChart, ProgramLibrary, RenderedImage, DEFAULT_LIB_DIR};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "ProTherm weekly program charts", long_about = None)]
struct Cli {
    /// Directory holding the PROG*.txt program files.
    #[arg(long, global = true, env = "PROTHERM_LIB_DIR", default_value = DEFAULT_LIB_DIR)]
    lib_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one program as a PNG chart.
    Render(RenderArgs),
    /// List the program files in the library.
    List,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Program identifier; only its file name part is used.
    program: String,

    /// Output file, or `-` for stdout. Defaults to `<program>.png` in the current directory.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// TOML file with chart settings (any subset of fields).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Use the fixed temperature range instead of fitting it to the program.
    #[arg(long)]
    no_autorange: bool,

    #[arg(long)]
    width: Option<i32>,

    #[arg(long)]
    height: Option<i32>,

    /// Color theme: classic, dark or high-contrast.
    #[arg(long)]
    theme: Option<String>,

    /// Skip all text (tick labels, title, legends).
    #[arg(long)]
    no_labels: bool,
}

impl RenderArgs {
    fn chart_config(&self) -> Result<ChartConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ChartConfig::default(),
        };
        if self.no_autorange { config.y_autorange = false; }
        if let Some(w) = self.width { config.width = w; }
        if let Some(h) = self.height { config.height = h; }
        if let Some(t) = &self.theme { config.theme = t.clone(); }
        if self.no_labels { config.draw_labels = false; }
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<ChartConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    // stdout may carry PNG bytes; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let library = ProgramLibrary::new(&cli.lib_dir);

    match &cli.command {
        Command::List => list(&library),
        Command::Render(args) => render(&library, args),
    }
}

fn list(library: &ProgramLibrary) -> Result<()> {
    let names = library.list()?;
    info!(count = names.len(), dir = %library.dir().display(), "listed programs");
    let mut out = std::io::stdout().lock();
    for name in names {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

fn render(library: &ProgramLibrary, args: &RenderArgs) -> Result<()> {
    let config = args.chart_config()?;
    let chart = ProgramChart::from_library(library, &args.program)?;

    let output = args.output.clone().unwrap_or_else(|| default_output(&chart.name));
    if output.as_os_str() == "-" {
        let image = chart
            .render(&config)
            .with_context(|| format!("rendering program {}", chart.name))?;
        let mut out = std::io::stdout().lock();
        out.write_all(&image.bytes)?;
        out.flush()?;
    } else {
        chart
            .render_to_png(&config, &output)
            .with_context(|| format!("rendering program {} to {}", chart.name, output.display()))?;
        info!(path = %output.display(), content_type = RenderedImage::CONTENT_TYPE, "wrote chart");
    }
    Ok(())
}

/// `PROG1.txt` -> `PROG1.png`
fn default_output(program_name: &str) -> PathBuf {
    let stem = Path::new(program_name).file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from(format!("{stem}.png"))
}
