//! Prism command-line renderer.
//!
//! Renders one of the built-in scenes and writes the image to disk.

mod scenes;
mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use prism_renderer::{render, save_image, NormalTracer, PathTracer, Tracer};

use scenes::SceneChoice;
use settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Shading {
    /// Full material-driven tracing
    Path,
    /// Surface normals only
    Normals,
}

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON settings file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,
    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,
    /// Samples per pixel
    #[arg(short, long)]
    samples: Option<u32>,
    /// Maximum bounce depth
    #[arg(long)]
    max_depth: Option<u32>,
    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
    /// Output gamma
    #[arg(long)]
    gamma: Option<f64>,
    /// Output image path
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Scene to render
    #[arg(long, value_enum, default_value_t = SceneChoice::Spheres)]
    scene: SceneChoice,
    /// Shading mode
    #[arg(long, value_enum, default_value_t = Shading::Path)]
    shading: Shading,
}

impl Args {
    /// Settings from the config file (or defaults) with flags applied on top.
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        let render = &mut settings.render;
        if let Some(width) = self.width {
            render.width = width;
        }
        if let Some(height) = self.height {
            render.height = height;
        }
        if let Some(samples) = self.samples {
            render.samples_per_pixel = samples;
        }
        if let Some(max_depth) = self.max_depth {
            render.max_depth = max_depth;
        }
        if let Some(seed) = self.seed {
            render.seed = seed;
        }
        if let Some(gamma) = self.gamma {
            settings.output.gamma = gamma;
        }
        if let Some(output) = &self.output {
            settings.output.path = output.clone();
        }

        Ok(settings)
    }
}

fn run(args: &Args) -> Result<()> {
    let settings = args.settings()?;
    let scene = scenes::build(args.scene, settings.render.aspect_ratio());

    let tracer: Box<dyn Tracer> = match args.shading {
        Shading::Path => Box::new(PathTracer::from_config(&settings.render)),
        Shading::Normals => Box::new(NormalTracer::new(settings.render.background)),
    };
    log::info!("Scene {:?}, shading {:?}", args.scene, args.shading);

    let image = render(&scene, tracer.as_ref(), &settings.render).context("Render failed")?;
    save_image(&image, &settings.output)
        .with_context(|| format!("Failed to write {}", settings.output.path.display()))?;
    log::info!("Wrote {}", settings.output.path.display());

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    run(&args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["prism"]).unwrap();
        assert_eq!(args.scene, SceneChoice::Spheres);
        assert_eq!(args.shading, Shading::Path);
        assert_eq!(args.settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_flags_override_settings() {
        let args = Args::try_parse_from([
            "prism",
            "--width",
            "64",
            "--height",
            "32",
            "--samples",
            "8",
            "--max-depth",
            "3",
            "--seed",
            "5",
            "--gamma",
            "2.0",
            "--output",
            "out.jpg",
            "--scene",
            "one-sphere",
            "--shading",
            "normals",
        ])
        .unwrap();

        let settings = args.settings().unwrap();
        assert_eq!(settings.render.width, 64);
        assert_eq!(settings.render.height, 32);
        assert_eq!(settings.render.samples_per_pixel, 8);
        assert_eq!(settings.render.max_depth, 3);
        assert_eq!(settings.render.seed, 5);
        assert_eq!(settings.output.gamma, 2.0);
        assert_eq!(settings.output.path, PathBuf::from("out.jpg"));
        assert_eq!(args.scene, SceneChoice::OneSphere);
        assert_eq!(args.shading, Shading::Normals);
    }

    #[test]
    fn test_rejects_unknown_scene() {
        assert!(Args::try_parse_from(["prism", "--scene", "teapot"]).is_err());
    }

    #[test]
    fn test_run_writes_image() {
        let path = std::env::temp_dir().join(format!("prism_run_{}.png", std::process::id()));
        let args = Args::try_parse_from([
            "prism",
            "--width",
            "16",
            "--height",
            "9",
            "--max-depth",
            "4",
            "--output",
            path.to_str().unwrap(),
        ])
        .unwrap();

        run(&args).unwrap();
        assert!(path.exists());
        std::fs::remove_file(path).unwrap();
    }
}
