use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use lucent::{
    render::{canvas::ImageFormat, renderer::RendererBuilder},
    scene::demo,
};

const DEFAULT_FOV: f64 = std::f64::consts::FRAC_PI_3;

/// Recursive ray tracer.
/// Renders the built-in showcase scene with configurable quality settings.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// The output path of the rendered image
    #[clap(short, long, default_value = "render.png")]
    output_path: PathBuf,

    /// The format of the output image
    #[clap(short = 'f', long, default_value = "png")]
    image_format: ImageFormat,

    /// Width (in pixels) of the output image
    #[clap(long, default_value_t = 800)]
    width: usize,

    /// Height (in pixels) of the output image
    #[clap(long, default_value_t = 800)]
    height: usize,

    /// Field of view of the camera in radians
    #[clap(long, default_value_t = DEFAULT_FOV)]
    fov: f64,

    /// Maximum number of times a ray can bounce off a reflective
    /// or refractive surface
    #[clap(short, long)]
    max_recursive_depth: Option<usize>,

    /// Controls how many rays are shot per pixel.
    /// In other words, the quality of the anti-aliasing (supersampling)
    #[clap(short, long)]
    supersampling_level: Option<usize>,

    /// Display a progress bar while rendering
    #[clap(short, long)]
    progress: bool,
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .init();

    let args = Args::parse();

    let mut scene = demo::scene().map_err(|e| format!("Failed to build scene: {}", e))?;
    if let Some(max_recursive_depth) = args.max_recursive_depth {
        scene.set_max_recursive_depth(max_recursive_depth);
    }
    let camera = demo::camera(args.width, args.height, args.fov)
        .map_err(|e| format!("Failed to build camera: {}", e))?;

    let mut builder = RendererBuilder::default();
    builder
        .scene(scene)
        .camera(camera)
        .use_progress_bar(args.progress);
    if let Some(supersampling_level) = args.supersampling_level {
        builder.supersampling_level(supersampling_level);
    }
    let renderer = builder
        .build()
        .map_err(|e| format!("Failed to configure renderer: {}", e))?;

    let canvas = renderer.render();
    canvas
        .save_to_file(&args.output_path, args.image_format)
        .map_err(|e| format!("Failed to save image: {}", e))?;
    println!("Image saved to {:?}", args.output_path);
    Ok(())
}
