use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lyumen", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single pattern frame as a PNG.
    Frame(FrameArgs),
    /// Run the render loop headlessly with a fixed-step clock.
    Run(RunArgs),
    /// Print the generated geometry of one frame as JSON.
    Geometry(GeometryArgs),
}

#[derive(Args, Debug)]
struct PatternArgs {
    /// Shape key: spiral, waves, star, circles (or rings).
    #[arg(long, default_value = "spiral")]
    shape: lyumen::ShapeKind,

    /// Color key: purple, gold, blue, red.
    #[arg(long, default_value = "purple")]
    color: lyumen::ColorKind,

    /// Effect key: pulse, rotate, twinkle, ripple.
    #[arg(long, default_value = "pulse")]
    effect: lyumen::EffectKind,

    /// Elapsed time in seconds.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 500)]
    height: u32,
}

impl PatternArgs {
    fn selection(&self) -> lyumen::PatternSelection {
        lyumen::PatternSelection::new(self.shape, self.color, self.effect)
    }

    fn canvas(&self) -> anyhow::Result<lyumen::Canvas> {
        Ok(lyumen::Canvas::new(self.width, self.height)?)
    }
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    pattern: PatternArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Keep the backdrop transparent instead of opaque black.
    #[arg(long)]
    transparent: bool,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Number of repaints to drive.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Clock rate; overrides the config file when given.
    #[arg(long)]
    fps: Option<u32>,

    /// Installation config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write every drawn frame as `frame_NNNNN.png` into this directory.
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct GeometryArgs {
    #[command(flatten)]
    pattern: PatternArgs,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Run(args) => cmd_run(args),
        Command::Geometry(args) => cmd_geometry(args),
    }
}

fn write_png(path: &Path, frame: &lyumen::FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    use lyumen::PatternSurface as _;

    let canvas = args.pattern.canvas()?;
    let settings = if args.transparent {
        lyumen::RenderSettings { clear_rgba: None }
    } else {
        lyumen::RenderSettings::default()
    };

    let mut surface = lyumen::CpuSurface::mounted(canvas, settings);
    surface.resize_and_clear(canvas)?;
    let frame = lyumen::generate(args.pattern.selection(), canvas, args.pattern.time);
    surface.paint(&frame)?;

    write_png(&args.out, &surface.readback()?)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => lyumen::LyumenConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => lyumen::LyumenConfig::default(),
    };
    if let Some(fps) = args.fps {
        cfg.fps = fps;
    }
    cfg.validate()?;

    let selection = lyumen::SelectionHandle::new(cfg.selection);
    let surface = lyumen::CpuSurface::mounted(cfg.canvas, cfg.render_settings());
    let clock = lyumen::FixedStepClock::at_fps(0.0, cfg.fps);
    let mut sched = lyumen::ManualScheduler::new();
    let mut render_loop = lyumen::RenderLoop::new(surface, clock, selection);

    tracing::info!(
        frames = args.frames,
        fps = cfg.fps,
        width = cfg.canvas.width,
        height = cfg.canvas.height,
        shape = %cfg.selection.shape,
        color = %cfg.selection.color,
        effect = %cfg.selection.effect,
        "starting headless run"
    );

    let mut outcome = render_loop.mount(&mut sched);
    for i in 0..args.frames {
        if let (lyumen::FrameOutcome::Drawn(_), Some(dir)) = (&outcome, &args.out_dir) {
            let path = dir.join(format!("frame_{i:05}.png"));
            write_png(&path, &render_loop.surface().readback()?)?;
        }
        if i + 1 == args.frames {
            break;
        }
        let handle = sched
            .next_due()
            .context("render loop stopped requesting frames")?;
        outcome = render_loop.on_frame(handle, &mut sched);
    }
    render_loop.teardown(&mut sched);

    let stats = render_loop.stats();
    tracing::info!(
        drawn = stats.frames_drawn,
        skipped = stats.frames_skipped,
        "headless run finished"
    );
    Ok(())
}

fn cmd_geometry(args: GeometryArgs) -> anyhow::Result<()> {
    let canvas = args.pattern.canvas()?;
    let frame = lyumen::generate(args.pattern.selection(), canvas, args.pattern.time);
    let json = if args.pretty {
        serde_json::to_string_pretty(&frame)
    } else {
        serde_json::to_string(&frame)
    }
    .context("serialize pattern frame")?;
    println!("{json}");
    Ok(())
}
