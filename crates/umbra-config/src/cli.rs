//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use umbra_lighting::RecomputePolicy;

use crate::Config;

/// Recompute policy as spelled on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RecomputeArg {
    Once,
    OnDemand,
}

impl From<RecomputeArg> for RecomputePolicy {
    fn from(arg: RecomputeArg) -> Self {
        match arg {
            RecomputeArg::Once => RecomputePolicy::Once,
            RecomputeArg::OnDemand => RecomputePolicy::OnDemand,
        }
    }
}

/// Umbra command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "umbra", about = "2D tile lighting demo")]
pub struct CliArgs {
    /// World width in tiles.
    #[arg(long)]
    pub width: Option<usize>,

    /// World height in tiles.
    #[arg(long)]
    pub height: Option<usize>,

    /// Terrain seed.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Enable or disable lighting.
    #[arg(long)]
    pub lighting: Option<bool>,

    /// When lighting recomputes.
    #[arg(long, value_enum)]
    pub recompute: Option<RecomputeArg>,

    /// Sky diffusion depth in breadth-first layers.
    #[arg(long)]
    pub layer_cap: Option<u32>,

    /// Use biome-driven wall selection.
    #[arg(long)]
    pub biomes: Option<bool>,

    /// Torch intensity.
    #[arg(long)]
    pub torch: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.world.width = w;
        }
        if let Some(h) = args.height {
            self.world.height = h;
        }
        if let Some(seed) = args.seed {
            self.world.seed = seed;
        }
        if let Some(enabled) = args.lighting {
            self.lighting.enabled = enabled;
        }
        if let Some(policy) = args.recompute {
            self.lighting.recompute = policy.into();
        }
        if let Some(cap) = args.layer_cap {
            self.lighting.layer_cap = cap;
        }
        if let Some(biomes) = args.biomes {
            self.walls.use_biomes = biomes;
        }
        if let Some(torch) = args.torch {
            self.world.torch_intensity = torch;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
