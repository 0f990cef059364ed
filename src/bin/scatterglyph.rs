use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use scatterglyph::{
    Background, CompositionRenderer, ExportOpts, ExportSession, FieldMode, FileDownload,
    ResvgExporter, SceneConfig, SceneInputs,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scatterglyph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a scene and export it as a PNG.
    Render(RenderArgs),
    /// Compose a scene and print it as JSON.
    Scene(SceneArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Primary text to scatter (required for export).
    #[arg(long, default_value = "")]
    text: String,

    /// Caption above the scattered text.
    #[arg(long, default_value = "")]
    top: String,

    /// Caption below the scattered text.
    #[arg(long, default_value = "")]
    bottom: String,

    /// Decorative background: `lines` or `emoji`.
    #[arg(long, default_value = "emoji")]
    mode: FieldMode,

    /// Seed for reproducible geometry. Fresh noise is drawn when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Scene config JSON (container metrics and theme).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Paint no background so the export keeps transparent pixels.
    #[arg(long, default_value_t = false)]
    transparent: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Directory the PNG is written into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Supersampling factor over the native container size.
    #[arg(long, default_value_t = 2.0)]
    scale: f32,

    /// Override the suggested filename.
    #[arg(long)]
    filename: Option<String>,

    /// Extra directories to load fonts from.
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,
}

#[derive(Args, Debug)]
struct SceneArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Write the JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Scene(args) => cmd_scene(args),
    }
}

fn prepare(input: &InputArgs) -> anyhow::Result<(CompositionRenderer, SceneInputs, StdRng)> {
    let mut config = match &input.config {
        Some(path) => SceneConfig::from_path(path)?,
        None => SceneConfig::default(),
    };
    if input.transparent {
        config.background = Background::Transparent;
    }
    let renderer = CompositionRenderer::new(config)?;

    let inputs = SceneInputs {
        top: input.top.clone(),
        primary: input.text.clone(),
        bottom: input.bottom.clone(),
        mode: input.mode,
    };
    let rng = match input.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok((renderer, inputs, rng))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (renderer, inputs, mut rng) = prepare(&args.input)?;

    let mut opts = ExportOpts {
        scale: args.scale,
        ..ExportOpts::default()
    };
    if let Some(name) = args.filename {
        opts.filename = name;
    }

    let mut session = ExportSession::new(renderer, &opts)?;
    session.set_inputs(inputs);
    if !session.is_export_enabled() {
        anyhow::bail!("--text must be non-empty to export");
    }
    session.recompute(&mut rng);

    let font_dirs = args.font_dirs.iter().map(PathBuf::as_path).collect::<Vec<&Path>>();
    let exporter = ResvgExporter::with_font_dirs(&opts, &font_dirs)?;
    let mut sink = FileDownload::new(&args.out_dir);

    let receipt = pollster::block_on(session.trigger_export(&exporter, &mut sink))
        .context("export failed")?;

    let path = sink
        .last_path()
        .map_or_else(|| args.out_dir.join(&receipt.filename), Path::to_path_buf);
    eprintln!(
        "wrote {} ({}x{}, {} bytes)",
        path.display(),
        receipt.width,
        receipt.height,
        receipt.byte_len
    );
    Ok(())
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let (renderer, inputs, mut rng) = prepare(&args.input)?;
    let json = renderer.compose(&inputs, &mut rng).to_json()?;

    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&path, json)
                .with_context(|| format!("write scene json '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
