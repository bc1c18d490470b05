//! ログ設定
//!
//! 既定は warn。`RUST_LOG` があればそちらを優先し、`--verbose` は debug まで上げる。

use env_logger::Builder;
use log::LevelFilter;

pub fn init(verbose: bool) {
    builder(verbose, std::env::var("RUST_LOG").ok().as_deref()).init();
}

fn builder(verbose: bool, filters: Option<&str>) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Warn);
    if let Some(filters) = filters {
        builder.parse_filters(filters);
    }
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder
}
