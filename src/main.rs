//! Panocube CLI - equirectangular panorama <-> cubemap converter.

use clap::{Parser, Subcommand, ValueEnum};
use image::codecs::png::CompressionType;
use std::path::{Path, PathBuf};
use std::time::Instant;

use panocube::files::{load_faces_by_name, load_rgba, save_cubemap, save_equirect, PngExportOptions};
use panocube::resolution::{clamp_size, equirect_dims, size_options, SourceKind};
use panocube::slots::FaceImage;
use panocube::{recommended_size, CubeFace, FaceSlots, Mode, Session, SessionConfig};

/// Converts between equirectangular panoramas and cubemaps.
#[derive(Parser)]
#[command(name = "panocube")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split an equirectangular panorama into six cube faces.
    ToCube {
        /// Equirectangular source image.
        input: PathBuf,

        /// Output directory for the six faces.
        #[arg(short, long, default_value = "./cubemap")]
        output: PathBuf,

        /// Face size in pixels (clamped to 512-8192). Defaults to the
        /// recommended size for the input.
        #[arg(short, long)]
        size: Option<u32>,

        /// PNG compression level.
        #[arg(long, default_value = "default")]
        compression: Compression,
    },

    /// Merge six cube faces into an equirectangular panorama.
    ToEquirect {
        /// Face images, assigned to faces by file name.
        files: Vec<PathBuf>,

        /// Image for the +X face.
        #[arg(long)]
        right: Option<PathBuf>,
        /// Image for the -X face.
        #[arg(long)]
        left: Option<PathBuf>,
        /// Image for the +Y face.
        #[arg(long)]
        top: Option<PathBuf>,
        /// Image for the -Y face.
        #[arg(long)]
        bottom: Option<PathBuf>,
        /// Image for the -Z face (pz slot).
        #[arg(long)]
        front: Option<PathBuf>,
        /// Image for the +Z face (nz slot).
        #[arg(long)]
        back: Option<PathBuf>,

        /// Output file, or a directory to receive panorama_2_1.png.
        #[arg(short, long, default_value = "./panorama_2_1.png")]
        output: PathBuf,

        /// Face size in pixels (clamped to 512-8192); the panorama is
        /// twice as wide. Defaults to the recommended size for the faces.
        #[arg(short, long)]
        size: Option<u32>,

        /// PNG compression level.
        #[arg(long, default_value = "default")]
        compression: Compression,
    },

    /// Show dimensions and size recommendations for an image.
    Info {
        /// Image to inspect.
        input: PathBuf,

        /// Treat the image as a single cube face.
        #[arg(long)]
        cube_face: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Compression {
    /// Fastest encoding.
    Fast,
    /// Balanced.
    Default,
    /// Smallest files.
    Best,
}

impl Compression {
    fn export_options(self) -> PngExportOptions {
        let compression = match self {
            Compression::Fast => CompressionType::Fast,
            Compression::Default => CompressionType::Default,
            Compression::Best => CompressionType::Best,
        };
        PngExportOptions {
            compression,
            ..Default::default()
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::ToCube {
            input,
            output,
            size,
            compression,
        } => run_to_cube(&input, &output, size, compression.export_options()),
        Commands::ToEquirect {
            files,
            right,
            left,
            top,
            bottom,
            front,
            back,
            output,
            size,
            compression,
        } => {
            let overrides = [
                (CubeFace::Right, right),
                (CubeFace::Left, left),
                (CubeFace::Top, top),
                (CubeFace::Bottom, bottom),
                (CubeFace::Front, front),
                (CubeFace::Back, back),
            ];
            run_to_equirect(&files, overrides, &output, size, compression.export_options())
        }
        Commands::Info { input, cube_face } => run_info(&input, cube_face),
    }
}

fn session_config(size: Option<u32>) -> SessionConfig {
    match size {
        Some(requested) => {
            let clamped = clamp_size(requested);
            if clamped != requested {
                println!("Requested size {} clamped to {}", requested, clamped);
            }
            SessionConfig::with_size(requested)
        }
        None => SessionConfig::default(),
    }
}

fn run_to_cube(input: &Path, output: &Path, size: Option<u32>, options: PngExportOptions) {
    println!("Panocube - Equirectangular to Cubemap");
    println!("=====================================");

    let source = match load_rgba(input) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error loading {}: {}", input.display(), e);
            std::process::exit(1);
        }
    };
    println!("Input: {} ({}x{})", input.display(), source.width(), source.height());

    let mut session = Session::with_config(Mode::EquirectToCube, session_config(size));
    if let Err(e) = session.load_equirect(source) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    if let Some(face_size) = session.output_size() {
        println!("Face size: {}x{}", face_size, face_size);
    }

    let start = Instant::now();
    let cubemap = match session.export_cubemap() {
        Ok(cubemap) => cubemap,
        Err(e) => {
            eprintln!("Error during conversion: {}", e);
            std::process::exit(1);
        }
    };
    println!("Conversion completed in {:.2?}", start.elapsed());

    println!("\nExporting faces...");
    match save_cubemap(&cubemap, output, &options) {
        Ok(paths) => {
            for path in &paths {
                println!("  {}", path.display());
            }
            println!("Exported {} PNG files to {}", paths.len(), output.display());
        }
        Err(e) => {
            eprintln!("Error exporting PNG: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_to_equirect(
    files: &[PathBuf],
    overrides: [(CubeFace, Option<PathBuf>); 6],
    output: &Path,
    size: Option<u32>,
    options: PngExportOptions,
) {
    println!("Panocube - Cubemap to Equirectangular");
    println!("=====================================");

    let mut slots = FaceSlots::new();
    if !files.is_empty() {
        match load_faces_by_name(files, &mut slots) {
            Ok(report) => {
                for (face, name) in &report.assigned {
                    println!("  {} -> {}", name, face);
                }
                for name in &report.unmatched {
                    println!("  {} -> (no matching face, skipped)", name);
                }
            }
            Err(e) => {
                eprintln!("Error loading faces: {}", e);
                std::process::exit(1);
            }
        }
    }

    for (face, path) in overrides {
        let Some(path) = path else { continue };
        match load_rgba(&path) {
            Ok(image) => {
                println!("  {} -> {} (explicit)", path.display(), face);
                slots.assign(face, FaceImage::with_label(image, path.display().to_string()));
            }
            Err(e) => {
                eprintln!("Error loading {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    let session = Session::from_slots(slots, session_config(size));
    let (filled, total) = session.progress();
    println!("Faces loaded: {}/{}", filled, total);

    if let Some(face_size) = session.output_size() {
        let (width, height) = equirect_dims(face_size);
        println!("Panorama size: {}x{}", width, height);
    }

    let start = Instant::now();
    let panorama = match session.export_equirect() {
        Ok(panorama) => panorama,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    println!("Conversion completed in {:.2?}", start.elapsed());

    match save_equirect(&panorama, output, &options) {
        Ok(path) => println!("Exported {}", path.display()),
        Err(e) => {
            eprintln!("Error exporting PNG: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_info(input: &Path, cube_face: bool) {
    let image = match load_rgba(input) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error loading {}: {}", input.display(), e);
            std::process::exit(1);
        }
    };

    let (kind, reference_width) = if cube_face {
        (SourceKind::CubeFace, image.width().saturating_mul(4))
    } else {
        (SourceKind::Equirect, image.width())
    };
    let recommended = recommended_size(kind, image.width());

    println!("File: {}", input.display());
    println!("Dimensions: {}x{}", image.width(), image.height());
    if !cube_face && image.width() != image.height().saturating_mul(2) {
        println!("Warning: not a 2:1 panorama");
    }
    if cube_face && image.width() != image.height() {
        println!("Warning: cube face is not square");
    }
    println!("Recommended face size: {}", recommended);
    println!("Available sizes:");
    for option in size_options(reference_width) {
        let marker = if option.recommended { " (recommended)" } else { "" };
        println!("  {}x{}{}", option.size, option.size, marker);
    }
}
