use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    author = "Alexander Heilmeier <alexander.heilmeier@tum.de>",
    name = "RS-TD",
    about = "A time-discrete circuit race simulator with tyre wear and pit stops"
)]
pub struct SimOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug printing
    #[clap(short, long)]
    pub debug: bool,

    /// Race in real-time in the terminal and accept player commands on stdin
    #[clap(short, long)]
    pub interactive: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set number of simulation runs (only for non-interactive mode)
    #[clap(short, long, default_value = "1")]
    pub no_sim_runs: u32,

    /// Set path to the simulation parameter file
    #[clap(short, long)]
    pub parfile_path: Option<PathBuf>,

    /// Set real-time factor (only relevant in interactive mode)
    #[clap(short, long, default_value = "1.0")]
    pub realtime_factor: f64,

    /// Set seed of the random number generator (overrides the parameter file)
    #[clap(short, long)]
    pub seed: Option<u64>,
}
