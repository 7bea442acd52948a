use crate::report::GroupTable;
use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};
use tracing::debug;

// Canvas geometry matches the published report figures (8x5 inches at 100 dpi).
const CHART_SIZE: (u32, u32) = (800, 500);

// Font sizes
const TITLE_FONT_SIZE: u32 = 24;
const AXIS_LABEL_FONT_SIZE: u32 = 18;
const TICK_LABEL_FONT_SIZE: u32 = 15;
const LEGEND_FONT_SIZE: u32 = 15;
const DATA_LABEL_FONT_SIZE: u32 = 14;

// width of a bar cluster, in x-axis units (one unit per metric)
const GROUP_WIDTH: f64 = 0.8;
// headroom above the tallest bar so value labels stay inside the frame
const Y_HEADROOM: f64 = 1.15;

/// Render one group to `<output_dir>/<file_name>` and return the written path.
pub fn render(table: &GroupTable<'_>, output_dir: &Path) -> Result<PathBuf> {
    let group = table.group;
    let path = output_dir.join(group.file_name);

    let root = BitMapBackend::new(&path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .with_context(|| format!("failed to prepare canvas for {}", group.file_name))?;

    let num_metrics = table.rows.len();
    let num_engines = table.engines.len();
    // floor of 1.0 keeps the layout sane for a degenerate all-zero table
    let y_max = (table.max_value() * Y_HEADROOM).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(group.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..(num_metrics as f64 - 0.5), 0.0..y_max)
        .with_context(|| format!("failed to lay out chart for {}", group.file_name))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(num_metrics)
        .x_label_formatter(&|x| {
            let idx = x.round() as usize;
            if idx < num_metrics && (x - idx as f64).abs() < 0.3 {
                table.rows[idx].metric.to_string()
            } else {
                String::new()
            }
        })
        .y_desc(group.y_desc)
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()
        .with_context(|| format!("failed to draw axes for {}", group.file_name))?;

    // dashed horizontal gridlines, drawn first so the bars sit on top
    let step = grid_step(y_max);
    let mut grid_y = step;
    while grid_y < y_max {
        chart
            .draw_series(DashedLineSeries::new(
                [(-0.5, grid_y), (num_metrics as f64 - 0.5, grid_y)],
                6,
                4,
                BLACK.mix(0.3).stroke_width(1),
            ))
            .with_context(|| format!("failed to draw gridlines for {}", group.file_name))?;
        grid_y += step;
    }

    let bar_width = GROUP_WIDTH / num_engines as f64;

    for (engine_idx, &engine) in table.engines.iter().enumerate() {
        let color = engine.color();

        for (metric_idx, row) in table.rows.iter().enumerate() {
            // absent measurements stay a gap in the cluster
            let Some(value) = row.values[engine_idx] else {
                continue;
            };

            let x_center = metric_idx as f64
                + (engine_idx as f64 - (num_engines as f64 - 1.0) / 2.0) * bar_width;
            let x_left = x_center - bar_width / 2.0 + 0.02;
            let x_right = x_center + bar_width / 2.0 - 0.02;

            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(x_left, 0.0), (x_right, value)],
                    color.filled(),
                )))
                .with_context(|| format!("failed to draw bars for {}", group.file_name))?;

            chart
                .draw_series(std::iter::once(Text::new(
                    format_value(value),
                    (x_center, value + y_max * 0.01),
                    ("sans-serif", DATA_LABEL_FONT_SIZE)
                        .into_font()
                        .color(&BLACK)
                        .pos(Pos::new(HPos::Center, VPos::Bottom)),
                )))
                .with_context(|| format!("failed to draw value labels for {}", group.file_name))?;
        }

        // invisible anchor so the legend entry picks up the engine color
        chart
            .draw_series(std::iter::once(Circle::new(
                (num_metrics as f64 - 1.0, y_max),
                0,
                color.filled(),
            )))
            .with_context(|| format!("failed to draw legend for {}", group.file_name))?
            .label(engine.name())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()
        .with_context(|| format!("failed to draw legend for {}", group.file_name))?;

    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    drop(chart);
    drop(root);
    debug!(path = %path.display(), "chart rendered");

    Ok(path)
}

/// Bar labels print the literal measurement, integers without a decimal point.
pub(crate) fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// 1/2/5 ladder for the gridline spacing, aiming for about five lines
pub(crate) fn grid_step(y_max: f64) -> f64 {
    if y_max <= 0.0 {
        return 1.0;
    }

    let raw = y_max / 5.0;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let normalized = raw / magnitude;

    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}
