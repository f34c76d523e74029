//! `penrose`: grow a Penrose P3 tiling around a disk and print it as PostScript.
//!
//! ```text
//! penrose                                   # 4 rounds around the unit disk, to stdout
//! penrose --rounds 6 --radius 1.5 -o out.ps
//! penrose --config tiling.json --no-marker
//! ```
//!
//! Logging goes to stderr. Override the level with `RUST_LOG`
//! (e.g. `RUST_LOG=penrose=debug`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use penrose::{classify_by_type, render_postscript, Config, Point2};

#[derive(Parser)]
#[command(name = "penrose")]
#[command(about = "Penrose P3 tilings by Robinson triangle substitution")]
struct Cmd {
    /// JSON configuration file; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of substitution rounds
    #[arg(long)]
    rounds: Option<usize>,

    /// Radius of the region to keep
    #[arg(long)]
    radius: Option<f64>,

    /// Center of the region to keep
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    center: Option<Vec<f64>>,

    /// Page units per tiling unit
    #[arg(long)]
    scale: Option<f64>,

    /// Do not mark vertex A of each triangle
    #[arg(long)]
    no_marker: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cmd {
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                Config::from_json_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => Config::default(),
        };

        if let Some(rounds) = self.rounds {
            config.tiling.rounds = rounds;
        }
        if let Some(radius) = self.radius {
            config.tiling.radius = radius;
        }
        if let Some(center) = self.center.as_deref() {
            if let [x, y] = *center {
                config.tiling.center = Point2::new(x, y);
            }
        }
        if let Some(scale) = self.scale {
            config.render.scale = scale;
        }
        if self.no_marker {
            config.render.mark_vertex_a = false;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for penrose.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("penrose=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cmd = Cmd::parse();
    let config = cmd.load_config()?;

    let triangles = config.tiling.generate()?;
    let partition = classify_by_type(triangles.iter().cloned());
    tracing::info!(
        acute = partition.acute.len(),
        obtuse = partition.obtuse.len(),
        other = partition.other.len(),
        "classified"
    );

    let document = render_postscript(&triangles, &config.render)?;
    match &cmd.output {
        Some(path) => std::fs::write(path, document)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{document}"),
    }
    Ok(())
}
