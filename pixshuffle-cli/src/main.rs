use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "pixshuffle", version)]
struct Cli {
    /// Log debug events from the generator to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate shuffle/unshuffle offset maps for a grid.
    Generate(GenerateArgs),
    /// Remap a still image through an encoded offset map.
    Apply(ApplyArgs),
    /// Regenerate maps from a manifest and compare with the files on disk.
    Verify(VerifyArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Grid width in pixels.
    #[arg(long)]
    width: u32,

    /// Grid height in pixels.
    #[arg(long)]
    height: u32,

    /// Seed token. A random 20-character token is drawn when omitted.
    #[arg(long)]
    seed: Option<String>,

    /// Output directory (created when missing).
    #[arg(long, default_value = "offsets")]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Encoded offset map PNG.
    #[arg(long)]
    map: PathBuf,

    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Invert color channels while remapping.
    #[arg(long, default_value_t = false)]
    invert: bool,
}

#[derive(Parser, Debug)]
struct VerifyArgs {
    /// Directory containing `manifest.json` and both maps.
    #[arg(long)]
    dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Apply(args) => cmd_apply(args),
        Command::Verify(args) => cmd_verify(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let seed = match args.seed {
        Some(s) => pixshuffle::Seed::new(s)?,
        None => pixshuffle::Seed::random(),
    };

    let maps = pixshuffle::generate_offset_maps(args.width, args.height, seed.as_str())
        .context("generate offset maps")?;
    let written = pixshuffle::write_offset_maps(&maps, &args.out_dir)
        .with_context(|| format!("write offset maps to '{}'", args.out_dir.display()))?;

    println!("seed:      {}", maps.seed);
    println!("width:     {}", maps.dims.width());
    println!("height:    {}", maps.dims.height());
    for path in [&written.shuffle, &written.unshuffle] {
        println!("{}  {}", sha256_file_hex(path)?, path.display());
    }
    eprintln!("wrote {}", args.out_dir.display());
    Ok(())
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let map = pixshuffle::read_encoded_png(&args.map)
        .with_context(|| format!("load offset map '{}'", args.map.display()))?;
    let src = image::open(&args.in_path)
        .with_context(|| format!("open image '{}'", args.in_path.display()))?
        .into_rgba8();
    let frame = pixshuffle::FrameRgba8::from_rgba_image(src);

    let opts = pixshuffle::RemapOpts {
        invert_rgb: args.invert,
    };
    let out = pixshuffle::remap_frame(&frame, &map, opts)?;

    if let Some(parent) = args.out.parent() {
        pixshuffle::ensure_dir(parent)?;
    }
    image::save_buffer_with_format(
        &args.out,
        &out.data,
        out.width,
        out.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_verify(args: VerifyArgs) -> anyhow::Result<()> {
    let manifest = pixshuffle::read_manifest(&args.dir)?;
    let maps = pixshuffle::generate_offset_maps(
        manifest.width,
        manifest.height,
        manifest.seed.as_str(),
    )?;

    let mut mismatched = Vec::new();
    for kind in pixshuffle::OffsetKind::ALL {
        let path = args.dir.join(manifest.file_name(kind));
        let on_disk = pixshuffle::read_encoded_png(&path)?;
        let expected =
            pixshuffle::encode_offset_map(maps.map(kind), manifest.width, manifest.height)?;
        if on_disk != expected {
            mismatched.push(path);
        }
    }

    if !mismatched.is_empty() {
        let list = mismatched
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        anyhow::bail!("offset maps do not match seed '{}': {list}", manifest.seed);
    }

    eprintln!("ok {}", args.dir.display());
    Ok(())
}

fn sha256_file_hex(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("read '{}'", path.display()))?;
    let digest = sha2::Sha256::digest(&bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    Ok(out)
}
