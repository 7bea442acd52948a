mod chart;
mod data;
mod display;
mod report;

#[cfg(test)]
mod chart_test;
#[cfg(test)]
mod report_test;

use anyhow::{bail, Result};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let table = &*data::CONSOLIDATED;

    if report::preflight_checks(table) {
        bail!("report definitions failed the preflight checks");
    }

    let output_dir = Path::new(".");

    for group in report::GROUPS.iter() {
        let group_table = report::GroupTable::build(group, table)?;

        info!(
            group = group.name,
            engines = %group_table.engine_lineup(),
            "rendering chart"
        );

        let path = chart::render(&group_table, output_dir)?;
        info!(path = %path.display(), "chart written");

        display::show(&path);
    }

    Ok(())
}
