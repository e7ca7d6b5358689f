use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use coachmark::{
    DecorAnimator, FnObserver, NoopObserver, PlacementTier, PreviewOpts, RenderRequest,
    ScreenRect, TourController, TourDocument, TourEvent, TourInput, Viewport,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "coachmark", version)]
struct Cli {
    /// Log controller diagnostics to stderr (repeat for more detail).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the render request of every step as JSON.
    Plan(PlanArgs),
    /// Drive a session with a sequence of inputs and print notifications.
    Simulate(SimulateArgs),
    /// Rasterize one step of a tour as a PNG.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input tour JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Viewport as WIDTHxHEIGHT; overrides the document.
    #[arg(long, value_parser = parse_viewport)]
    viewport: Option<Viewport>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input tour JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Comma-separated inputs.
    #[arg(long, value_enum, value_delimiter = ',')]
    inputs: Vec<InputArg>,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input tour JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Step index (0-based).
    #[arg(long, default_value_t = 0)]
    step: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Seconds since the session started, for the decorative strokes.
    #[arg(long, default_value_t = 1.0)]
    time: f64,

    /// Viewport as WIDTHxHEIGHT; overrides the document.
    #[arg(long, value_parser = parse_viewport)]
    viewport: Option<Viewport>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InputArg {
    Next,
    Back,
    Tap,
}

impl From<InputArg> for TourInput {
    fn from(v: InputArg) -> Self {
        match v {
            InputArg::Next => TourInput::Next,
            InputArg::Back => TourInput::Back,
            InputArg::Tap => TourInput::BackgroundTap,
        }
    }
}

#[derive(serde::Serialize)]
struct PlanEntry {
    index: usize,
    id: Option<String>,
    tier: PlacementTier,
    popup: ScreenRect,
    hole: ScreenRect,
    cutout_svg: String,
    back_visible: bool,
    action_label: String,
    dots_visible: bool,
    image_height: f64,
}

impl PlanEntry {
    fn from_request(req: &RenderRequest<'_>) -> Self {
        Self {
            index: req.index,
            id: req.content.id.clone(),
            tier: req.placement.tier,
            popup: req.placement.popup_frame.into(),
            hole: req.placement.cutout.hole.rect().into(),
            cutout_svg: req.placement.cutout.svg_path(),
            back_visible: req.buttons.back_visible,
            action_label: req.buttons.action_label.clone(),
            dots_visible: req.indicator.visible,
            image_height: req.layout.image_height,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_viewport(s: &str) -> Result<Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: f64 = w.trim().parse().map_err(|_| format!("bad width '{w}'"))?;
    let h: f64 = h.trim().parse().map_err(|_| format!("bad height '{h}'"))?;
    Viewport::new(w, h).map_err(|e| e.to_string())
}

fn read_tour_json(path: &Path) -> anyhow::Result<TourDocument> {
    let f = File::open(path).with_context(|| format!("open tour '{}'", path.display()))?;
    let doc = TourDocument::from_reader(BufReader::new(f)).with_context(|| "parse tour JSON")?;
    doc.validate()
        .with_context(|| format!("validate tour '{}'", path.display()))?;
    Ok(doc)
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let doc = read_tour_json(&args.in_path)?;
    let viewport = args.viewport.unwrap_or_else(|| doc.viewport_or_default());

    let mut controller = TourController::new();
    let handle = controller.start(doc.steps(), doc.theme.clone(), NoopObserver)?;

    let mut entries = Vec::new();
    while let Some(req) = controller.render_request(handle, viewport.bounds()) {
        entries.push(PlanEntry::from_request(&req));
        controller.advance(handle);
    }

    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let doc = read_tour_json(&args.in_path)?;

    let mut controller = TourController::new();
    let observer = FnObserver(|event: TourEvent| match event {
        TourEvent::StepShown { step } => println!(
            "step_shown {}",
            step.id.as_deref().unwrap_or(step.description.as_str())
        ),
        TourEvent::Finished => println!("finished"),
    });
    let handle = controller.start(doc.steps(), doc.theme.clone(), observer)?;

    for input in args.inputs {
        if controller.handle_input(handle, input.into()).is_none() {
            println!("ignored {input:?}");
        }
    }
    println!("state {:?}", controller.state(handle));
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let doc = read_tour_json(&args.in_path)?;
    let viewport = args.viewport.unwrap_or_else(|| doc.viewport_or_default());

    let mut controller = TourController::new();
    let handle = controller.start(doc.steps(), doc.theme.clone(), NoopObserver)?;
    let count = controller.steps(handle).map_or(0, <[_]>::len);
    if args.step >= count {
        anyhow::bail!("step {} out of range (tour has {count} steps)", args.step);
    }
    for _ in 0..args.step {
        controller.advance(handle);
    }

    let req = controller
        .render_request(handle, viewport.bounds())
        .context("no active step to preview")?;
    let theme = controller.theme(handle).context("session has no theme")?;

    let mut decor = DecorAnimator::new(theme.colors.step_indicator);
    decor.start(0.0);
    let strokes = decor.frame(req.image_slot(), args.time);

    let frame = coachmark::render_preview(&req, theme, viewport, &strokes, PreviewOpts::default())?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
