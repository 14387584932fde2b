use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pitchviz::viz::{self, RenderContext, SelectionController};
use pitchviz::{Client, EventKind, EventSet, stats, storage};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "pitchviz",
    version,
    about = "Map, classify & render football match events on a pitch"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a saved payload to SVG or PNG.
    Render(RenderArgs),
    /// Fetch a player's events from the API (and optionally save, plot, and print stats).
    Fetch(FetchArgs),
    /// Print per-category statistics for a saved payload.
    Stats(StatsArgs),
    /// Export the drawable markers of a saved payload as CSV or JSON.
    Export(ExportArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Category {
    Touches,
    Shots,
    Passes,
    Defending,
}

impl From<Category> for EventKind {
    fn from(c: Category) -> Self {
        match c {
            Category::Touches => EventKind::Touch,
            Category::Shots => EventKind::Shot,
            Category::Passes => EventKind::Pass,
            Category::Defending => EventKind::DefensiveAction,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum View {
    Horizontal,
    Vertical,
    HalfVertical,
    GoalView,
}

impl From<View> for viz::Orientation {
    fn from(v: View) -> Self {
        match v {
            View::Horizontal => viz::Orientation::Horizontal,
            View::Vertical => viz::Orientation::Vertical,
            View::HalfVertical => viz::Orientation::HalfVertical,
            View::GoalView => viz::Orientation::GoalView,
        }
    }
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

/// Options shared by every command that builds a view.
#[derive(Args, Debug)]
struct ViewArgs {
    /// Event category of the input.
    #[arg(short, long, value_enum, default_value_t = Category::Shots)]
    kind: Category,
    /// Pitch orientation.
    #[arg(short, long, value_enum, default_value_t = View::Horizontal)]
    orientation: View,
    /// Click the n-th event (1-based); repeat to replay several clicks.
    #[arg(long = "click", value_name = "N")]
    clicks: Vec<usize>,
    /// Draw ordinal labels above markers.
    #[arg(long, default_value_t = false)]
    labels: bool,
    /// Gap between marker edge and trajectory start, in pitch units.
    #[arg(long, default_value_t = viz::types::DEFAULT_SELECTION_OUTLINE_DELTA)]
    outline_delta: f64,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Saved API payload or event set (JSON).
    #[arg(short, long)]
    input: PathBuf,
    #[command(flatten)]
    view: ViewArgs,
    /// Output image (.svg or .png).
    #[arg(long)]
    out: PathBuf,
    /// Width of the image in pixels (height follows the view).
    #[arg(long, default_value_t = 800)]
    width: u32,
}

#[derive(Args, Debug)]
struct FetchArgs {
    /// Match id.
    #[arg(short, long)]
    match_id: u64,
    /// Player name as listed in the match lineup.
    #[arg(short, long)]
    player: String,
    #[command(flatten)]
    view: ViewArgs,
    /// Base URL of the events API.
    #[arg(long, env = "PITCHVIZ_API_URL", default_value = pitchviz::api::DEFAULT_BASE_URL)]
    base_url: String,
    /// Save the fetched events as JSON.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Create an image at the given path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the image (default 800).
    #[arg(long, default_value_t = 800)]
    width: u32,
    /// Print statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

#[derive(Args, Debug)]
struct StatsArgs {
    #[arg(short, long)]
    input: PathBuf,
    #[arg(short, long, value_enum, default_value_t = Category::Shots)]
    kind: Category,
    /// Print JSON instead of aligned text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[arg(short, long)]
    input: PathBuf,
    #[command(flatten)]
    view: ViewArgs,
    /// Output file (format inferred by --format or extension).
    #[arg(long)]
    out: PathBuf,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Fetch(args) => cmd_fetch(args),
        Command::Stats(args) => cmd_stats(args),
        Command::Export(args) => cmd_export(args),
    }
}

/// Replay `--click` ordinals through a selection controller and build the drawable list.
fn build_markers(set: &EventSet, view: &ViewArgs) -> Result<Vec<viz::DrawableMarker>> {
    let mut selection = SelectionController::new(set.kind);
    for &n in &view.clicks {
        let Some(event) = n.checked_sub(1).and_then(|i| set.events.get(i)) else {
            bail!("--click {n} is out of range (1..={})", set.len());
        };
        selection.click(&event.key());
    }
    let ctx = RenderContext {
        orientation: view.orientation.into(),
        selection_outline_delta: view.outline_delta,
        show_labels: view.labels,
    };
    Ok(viz::render_with(&set.events, &ctx, &selection))
}

fn print_stats(set: &EventSet) {
    for (label, value) in stats::summarize(set).lines() {
        println!("{label:<16} {value}");
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let set = storage::load_events_json(&args.input, args.view.kind.into())?;
    let markers = build_markers(&set, &args.view)?;
    viz::surface::render_to_file(&markers, args.view.orientation.into(), &args.out, args.width)?;
    eprintln!(
        "Drew {} of {} events to {}",
        markers.len(),
        set.len(),
        args.out.display()
    );
    Ok(())
}

fn cmd_fetch(args: FetchArgs) -> Result<()> {
    let client = Client::new(&args.base_url)?;
    let set = client.fetch(args.view.kind.into(), args.match_id, &args.player)?;
    eprintln!(
        "Fetched {} {} for {}",
        set.len(),
        set.kind.as_str(),
        args.player
    );

    if let Some(path) = args.out.as_ref() {
        storage::save_events_json(&set, path)?;
        eprintln!("Saved {} events to {}", set.len(), path.display());
    }

    if let Some(plot_path) = args.plot.as_ref() {
        let markers = build_markers(&set, &args.view)?;
        viz::surface::render_to_file(
            &markers,
            args.view.orientation.into(),
            plot_path,
            args.width,
        )?;
        eprintln!("Wrote plot to {}", plot_path.display());
    }

    if args.stats {
        print_stats(&set);
    }
    Ok(())
}

fn cmd_stats(args: StatsArgs) -> Result<()> {
    let set = storage::load_events_json(&args.input, args.kind.into())?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats::summarize(&set))?);
    } else {
        print_stats(&set);
    }
    Ok(())
}

fn format_for(path: &Path, format: Option<OutFormat>) -> String {
    match format {
        Some(OutFormat::Csv) => "csv".to_string(),
        Some(OutFormat::Json) => "json".to_string(),
        None => path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("csv")
            .to_ascii_lowercase(),
    }
}

fn cmd_export(args: ExportArgs) -> Result<()> {
    let set = storage::load_events_json(&args.input, args.view.kind.into())?;
    let markers = build_markers(&set, &args.view)?;
    match format_for(&args.out, args.format).as_str() {
        "csv" => storage::save_markers_csv(&markers, &args.out)?,
        "json" => storage::save_markers_json(&markers, &args.out)?,
        other => bail!("unsupported format: {}", other),
    }
    eprintln!("Saved {} markers to {}", markers.len(), args.out.display());
    Ok(())
}
