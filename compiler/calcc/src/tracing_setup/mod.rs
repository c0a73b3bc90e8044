//! Opt-in tracing output.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

/// Environment variables consulted for a filter, in priority order.
const FILTER_VARS: [&str; 2] = ["CALC_LOG", "RUST_LOG"];

/// Install a hierarchical stderr subscriber when `CALC_LOG` (or, failing
/// that, `RUST_LOG`) is set. Does nothing otherwise.
///
/// An unparsable filter falls back to `warn`.
pub fn init_tracing() {
    let Some(directives) = FILTER_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok())
    else {
        return;
    };
    let filter = filter_from(&directives);

    let layer = HierarchicalLayer::new(2)
        .with_writer(std::io::stderr)
        .with_targets(true)
        .with_indent_lines(true);

    // A subscriber installed by an embedding host wins.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

fn filter_from(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"))
}
