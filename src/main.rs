use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pushover::{render_summary, run_analysis, PushoverConfig, TrainingSet};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Parser)]
#[command(author, version, about = "Pushover capacity curve for a single-degree-of-freedom frame")]
struct Cli {
    /// JSON run configuration; command-line values override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Elastic stiffness [N/m]
    #[arg(long)]
    k_elastic: Option<f64>,

    /// Yield force [N]
    #[arg(long)]
    yield_force: Option<f64>,

    /// Ultimate-to-yield displacement ratio
    #[arg(long)]
    ductility: Option<f64>,

    /// Final load of the sweep [N]
    #[arg(long)]
    max_load: Option<f64>,

    /// Number of sweep samples
    #[arg(long)]
    samples: Option<usize>,

    /// Target noise as a fraction of displacement
    #[arg(long)]
    noise: Option<f64>,

    /// Random seed for the training-set noise
    #[arg(long)]
    seed: Option<u64>,

    /// Write the full analysis summary as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the noisy training set as CSV
    #[arg(long)]
    dataset: Option<PathBuf>,
}

impl Cli {
    /// Start from the configuration file, or the defaults, and apply overrides.
    fn resolve_config(&self) -> anyhow::Result<PushoverConfig> {
        let mut cfg = match &self.config {
            Some(path) => PushoverConfig::from_path(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => PushoverConfig::default(),
        };
        if let Some(v) = self.k_elastic {
            cfg.parameters.k_elastic = v;
        }
        if let Some(v) = self.yield_force {
            cfg.parameters.yield_force = v;
        }
        if let Some(v) = self.ductility {
            cfg.parameters.ductility = v;
        }
        if let Some(v) = self.max_load {
            cfg.sweep.max_load = v;
        }
        if let Some(v) = self.samples {
            cfg.sweep.samples = v;
        }
        if let Some(v) = self.noise {
            cfg.noise_fraction = v;
        }
        if let Some(v) = self.seed {
            cfg.seed = v;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Merge the configuration file, or the defaults, with the command-line overrides and
    // reject parameters for which the response law is undefined.
    let cli = Cli::parse();
    let cfg = cli.resolve_config()?;

    // Push the frame monotonically through the load sweep. The response is elastic up to
    // the yield force, hardens with reduced stiffness and then sits on the collapse plateau.
    // See: https://en.wikipedia.org/wiki/Yield_(engineering)
    let summary = run_analysis(&cfg)?;

    // Print the hand-calculation style report for the CLI user.
    print!("{}", render_summary(&summary));

    // The JSON summary carries every traced point for plotting elsewhere.
    if let Some(path) = &cli.json {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &summary)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("summary written to {}", path.display());
    }

    // Perturb the traced displacements with seeded Gaussian noise so the samples can train
    // a regressor on the capacity curve.
    // See: https://en.wikipedia.org/wiki/Pushover_analysis
    if let Some(path) = &cli.dataset {
        let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);
        let training = TrainingSet::from_curve(&summary.curve, cfg.noise_fraction, &mut rng)?;
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        training
            .write_csv(BufWriter::new(file))
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!(
            "{} training samples written to {}",
            training.len(),
            path.display()
        );
    }

    Ok(())
}
