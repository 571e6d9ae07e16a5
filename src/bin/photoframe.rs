use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "photoframe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export the framed photo as a binary glTF (`.glb`) file.
    Export(ExportArgs),
    /// Write the composited front-face texture as a PNG.
    Texture(TextureArgs),
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Input image (PNG, JPEG, GIF, BMP or WebP).
    #[arg(long)]
    image: PathBuf,

    /// Frame config JSON. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frame width in centimetres.
    #[arg(long)]
    width_cm: Option<f64>,

    /// Frame height in centimetres.
    #[arg(long)]
    height_cm: Option<f64>,

    /// Frame depth in centimetres.
    #[arg(long)]
    depth_cm: Option<f64>,

    /// Border thickness in centimetres; enables the border.
    #[arg(long, conflicts_with = "no_border")]
    border_cm: Option<f64>,

    /// Disable the border even if the config enables it.
    #[arg(long, default_value_t = false)]
    no_border: bool,

    /// Frame color as `#rrggbb`.
    #[arg(long)]
    color: Option<String>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[command(flatten)]
    frame: FrameArgs,

    /// Output `.glb` path. Defaults to the config's `output`.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct TextureArgs {
    #[command(flatten)]
    frame: FrameArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Export(args) => cmd_export(args),
        Command::Texture(args) => cmd_texture(args),
    }
}

fn load_config(args: &FrameArgs) -> anyhow::Result<photoframe::FrameConfig> {
    let mut cfg = match &args.config {
        Some(path) => photoframe::FrameConfig::from_path(path)?,
        None => photoframe::FrameConfig::default(),
    };
    if let Some(v) = args.width_cm {
        cfg.width_cm = v;
    }
    if let Some(v) = args.height_cm {
        cfg.height_cm = v;
    }
    if let Some(v) = args.depth_cm {
        cfg.depth_cm = v;
    }
    if let Some(v) = args.border_cm {
        cfg.border.enabled = true;
        cfg.border.cm = v;
    }
    if args.no_border {
        cfg.border.enabled = false;
    }
    if let Some(hex) = &args.color {
        cfg.frame_color = photoframe::FrameColor::from_hex(hex)?;
    }
    Ok(cfg)
}

fn open_session(
    args: &FrameArgs,
    cfg: &photoframe::FrameConfig,
) -> anyhow::Result<photoframe::FrameSession> {
    let bytes = std::fs::read(&args.image)
        .with_context(|| format!("read image '{}'", args.image.display()))?;
    let mut sess = photoframe::FrameSession::new(cfg.dimensions()?, cfg.frame_color);
    sess.load_image_bytes(&bytes)
        .with_context(|| format!("load image '{}'", args.image.display()))?;
    Ok(sess)
}

fn ensure_parent(out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.frame)?;
    let sess = open_session(&args.frame, &cfg)?;

    let out = args.out.unwrap_or_else(|| PathBuf::from(&cfg.output));
    let bytes = sess.export_with(&photoframe::GlbExporter::default())?;

    ensure_parent(&out)?;
    std::fs::write(&out, &bytes).with_context(|| format!("write glb '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_texture(args: TextureArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.frame)?;
    let sess = open_session(&args.frame, &cfg)?;
    let texture = sess
        .texture()
        .context("no texture was composited for the input image")?;

    ensure_parent(&args.out)?;
    std::fs::write(&args.out, texture.to_png_bytes()?)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
