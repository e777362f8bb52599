//! Plan sweeps for building reference charts.

pub mod output;
pub mod sweep;

pub use output::{print_summary, write_csv};
pub use sweep::{ChartRow, SweepConfig, parse_weights, run_sweep};
