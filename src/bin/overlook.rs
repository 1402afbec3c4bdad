use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use overlook::{
    AssetManifest, Canvas, ColumnSequence, DirSource, FrameRGBA, LoopEvent, NoiseFrames,
    PostEffect, RenderParams, SceneAssets, SceneConfig, SceneSession, SceneTimeline,
    calculate_progress_alpha_and_stage, door_layout, load_scene_assets, render_scene,
};

#[derive(Parser, Debug)]
#[command(name = "overlook", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one driving-scene frame as a PNG.
    Frame(FrameArgs),
    /// Run the scene loops for a while and write every drawn frame.
    Sequence(SequenceArgs),
    /// Print door-scene layouts as JSON lines.
    Door(DoorArgs),
    /// Write static-noise frames as PNGs.
    Noise(NoiseArgs),
}

#[derive(Parser, Debug)]
struct SceneInput {
    /// Directory holding the tile and sprite images. Flat placeholders are used if omitted.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Asset manifest JSON (paths relative to `--assets`).
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Scene config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EffectChoice {
    None,
    Greyscale,
    RgbSplit,
    RectRgbSplit,
}

impl From<EffectChoice> for PostEffect {
    fn from(v: EffectChoice) -> Self {
        match v {
            EffectChoice::None => PostEffect::None,
            EffectChoice::Greyscale => PostEffect::Greyscale,
            EffectChoice::RgbSplit => PostEffect::RgbSplit,
            EffectChoice::RectRgbSplit => PostEffect::RectRgbSplit,
        }
    }
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: SceneInput,

    /// Raw loop progress in pixels; stage and opacity follow from it.
    #[arg(long, default_value_t = 0.0)]
    progress: f64,

    /// Post-processing mode.
    #[arg(long, value_enum, default_value_t = EffectChoice::None)]
    effect: EffectChoice,

    /// Wall-clock time fed to the split effects.
    #[arg(long, default_value_t = 0)]
    time_ms: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    input: SceneInput,

    /// Starting loop progress in pixels.
    #[arg(long, default_value_t = 0.0)]
    start: f64,

    /// Simulated run time.
    #[arg(long, default_value_t = 1000)]
    duration_ms: u64,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct DoorArgs {
    /// Scroll percentages to evaluate, in [0, 1].
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    at: Vec<f64>,

    /// Evaluate this many evenly spaced percentages instead of `--at`.
    #[arg(long)]
    steps: Option<u32>,
}

#[derive(Parser, Debug)]
struct NoiseArgs {
    #[arg(long, default_value_t = 320)]
    width: u32,

    #[arg(long, default_value_t = 240)]
    height: u32,

    #[arg(long, default_value_t = overlook::render::noise::NOISE_FRAME_COUNT)]
    frames: usize,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output directory for `noise_NN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Door(args) => cmd_door(args),
        Command::Noise(args) => cmd_noise(args),
    }
}

fn load_config(input: &SceneInput) -> anyhow::Result<SceneConfig> {
    let Some(path) = &input.config else {
        return Ok(SceneConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    SceneConfig::from_json(&json).with_context(|| format!("parse config '{}'", path.display()))
}

fn load_assets(input: &SceneInput) -> anyhow::Result<SceneAssets> {
    let manifest = match &input.manifest {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read manifest '{}'", path.display()))?;
            AssetManifest::from_json(&json)
                .with_context(|| format!("parse manifest '{}'", path.display()))?
        }
        None => AssetManifest::default(),
    };
    match &input.assets {
        Some(root) => {
            let source = DirSource::new(root);
            load_scene_assets(&manifest, &source)
                .with_context(|| format!("load assets from '{}'", root.display()))
        }
        None => Ok(SceneAssets::placeholder()),
    }
}

fn write_png(path: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
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
    let config = load_config(&args.input)?;
    let assets = load_assets(&args.input)?;
    let columns = ColumnSequence::build(&assets.tiles)?;
    let timeline = SceneTimeline::new(
        columns.distance_to_hotel(),
        config.stop_length,
        config.fade_length,
    )?;
    let snapshot = calculate_progress_alpha_and_stage(args.progress, &timeline);

    let mut frame = FrameRGBA::new(Canvas::SCENE);
    let params = RenderParams {
        progress: snapshot.progress,
        alpha: snapshot.alpha,
        effect: args.effect.into(),
        time_ms: args.time_ms,
        glitch_probability: config.glitch_probability,
    };
    render_scene(&mut frame, &columns, &assets, &params)?;
    write_png(&args.out, &frame)?;

    eprintln!(
        "wrote {} (stage {:?}, alpha {:.2})",
        args.out.display(),
        snapshot.stage,
        snapshot.alpha
    );
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let config = load_config(&args.input)?;
    let assets = load_assets(&args.input)?;
    let step_ms = config.frame_period_ms();

    let mut session = SceneSession::new(config, 0)?;
    session.set_assets(std::sync::Arc::new(assets))?;
    session.controller_mut().set_progress(args.start);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut written = 0u64;
    let mut now = 0u64;
    while now < args.duration_ms {
        now += step_ms;
        for event in session.pump(now)? {
            match event {
                LoopEvent::Frame(_) => {
                    let path = args.out_dir.join(format!("frame_{written:05}.png"));
                    write_png(&path, session.frame())?;
                    written += 1;
                }
                LoopEvent::SceneCompleted => eprintln!("scene completed at {now} ms"),
                LoopEvent::Tick(_) => {}
            }
        }
    }

    eprintln!("wrote {written} frames to {}", args.out_dir.display());
    Ok(())
}

fn cmd_door(args: DoorArgs) -> anyhow::Result<()> {
    let points: Vec<f64> = match args.steps {
        Some(n) if n >= 2 => (0..n).map(|i| f64::from(i) / f64::from(n - 1)).collect(),
        Some(_) => vec![0.0],
        None => args.at,
    };
    for p in points {
        let layout = door_layout(p);
        let line = serde_json::json!({ "percent": p, "layout": layout });
        println!("{line}");
    }
    Ok(())
}

fn cmd_noise(args: NoiseArgs) -> anyhow::Result<()> {
    let canvas = Canvas {
        width: args.width,
        height: args.height,
    };
    let noise = NoiseFrames::generate(canvas, args.frames, args.seed)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for (i, frame) in noise.frames().iter().enumerate() {
        write_png(&args.out_dir.join(format!("noise_{i:02}.png")), frame)?;
    }
    eprintln!("wrote {} frames to {}", noise.len(), args.out_dir.display());
    Ok(())
}
