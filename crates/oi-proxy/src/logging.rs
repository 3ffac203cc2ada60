//! Diagnostics go to stderr through `log`; the child's streams are never
//! touched.

use env_logger::{Builder, Target};

pub fn init(filter: &str) {
    let _ = Builder::new()
        .parse_filters(filter)
        .format_timestamp(None)
        .format_target(false)
        .target(Target::Stderr)
        .try_init();
}
