use crate::data::{records, Engine, MetricTable};
use itertools::Itertools;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("group '{group}' references unknown metric '{metric}'")]
    UnknownMetric {
        group: &'static str,
        metric: &'static str,
    },
    #[error("group '{group}' has no measurement for any engine")]
    EmptyGroup { group: &'static str },
}

/// A fixed set of related metrics rendered together in one chart.
#[derive(Debug, Clone)]
pub struct MetricGroup {
    pub name: &'static str,
    pub title: &'static str,
    pub y_desc: &'static str,
    pub file_name: &'static str,
    pub metrics: &'static [&'static str],
}

/// The four charts of the report, rendered in this order.
pub static GROUPS: [MetricGroup; 4] = [
    MetricGroup {
        name: "insertion",
        title: "Velocidad de Inserción (docs/segundo)",
        y_desc: "docs/segundo",
        file_name: "insertvel.png",
        metrics: &["Velocidad Inserción"],
    },
    MetricGroup {
        name: "simple-queries",
        title: "Tiempos de Consultas Simples (ms)",
        y_desc: "ms",
        file_name: "consultas_simples.png",
        metrics: &["Búsqueda por email", "Búsqueda rango edad"],
    },
    MetricGroup {
        name: "aggregation",
        title: "Conteos y Agregaciones (ms)",
        y_desc: "ms",
        file_name: "agregacion_salario.png",
        metrics: &["Conteo por departamento", "Agregación salario promedio"],
    },
    MetricGroup {
        name: "json-complex",
        title: "JSON y Consultas Complejas (ms)",
        y_desc: "ms",
        file_name: "json.png",
        metrics: &["Búsqueda en JSON", "Consulta compleja"],
    },
];

/// one chart row: a metric and its value per present engine
#[derive(Debug, Clone)]
pub struct GroupRow {
    pub metric: &'static str,
    /// parallel to `GroupTable::engines`, `None` renders as a gap
    pub values: Vec<Option<f64>>,
}

/// Per-group reshaped table, the input of the chart renderer.
/// An engine earns a column iff it has at least one measurement in the group,
/// so an engine that skipped the whole group leaves neither bar nor gap.
#[derive(Debug)]
pub struct GroupTable<'a> {
    pub group: &'a MetricGroup,
    /// engines with at least one measurement, in bar order
    pub engines: Vec<Engine>,
    pub rows: Vec<GroupRow>,
}

impl<'a> GroupTable<'a> {
    pub fn build(group: &'a MetricGroup, table: &MetricTable) -> Result<Self, ReportError> {
        let mut columns = Vec::with_capacity(group.metrics.len());

        for &metric in group.metrics {
            match table.get(metric) {
                Some(values) => columns.push((metric, values)),
                None => {
                    return Err(ReportError::UnknownMetric {
                        group: group.name,
                        metric,
                    })
                }
            }
        }

        let engines = Engine::ALL
            .into_iter()
            .filter(|engine| columns.iter().any(|(_, values)| values.contains_key(engine)))
            .collect_vec();

        if engines.is_empty() {
            return Err(ReportError::EmptyGroup { group: group.name });
        }

        let rows = columns
            .into_iter()
            .map(|(metric, values)| GroupRow {
                metric,
                values: engines
                    .iter()
                    .map(|engine| values.get(engine).copied())
                    .collect(),
            })
            .collect();

        Ok(Self {
            group,
            engines,
            rows,
        })
    }

    /// largest measurement of the group, used to scale the y axis
    pub fn max_value(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|row| row.values.iter().flatten())
            .fold(0.0_f64, |acc, value| acc.max(*value))
    }

    pub fn engine_lineup(&self) -> String {
        self.engines.iter().map(Engine::name).join(" vs ")
    }
}

/// Validate the static report definitions before rendering anything.
/// Attempts to catch all errors instead of piece-by-piece to make debugging
/// easier; the caller aborts once if anything was wrong.
pub fn preflight_checks(table: &MetricTable) -> bool {
    let mut contains_error = false;

    for group in GROUPS.iter() {
        if group.metrics.is_empty() {
            error!("group {} defines no metrics, a chart can't be a NOP", group.name);
            contains_error = true;
        }

        let mut has_value = false;
        for &metric in group.metrics {
            match table.get(metric) {
                Some(values) => has_value |= !values.is_empty(),
                None => {
                    error!(
                        "group {} references {metric} but {metric} is not defined",
                        group.name
                    );
                    contains_error = true;
                }
            }
        }

        if !group.metrics.is_empty() && !has_value {
            error!("group {} has no measurement for any engine", group.name);
            contains_error = true;
        }
    }

    for file_name in GROUPS.iter().map(|group| group.file_name).duplicates() {
        error!("output file {file_name} is claimed by more than one group");
        contains_error = true;
    }

    for record in records(table) {
        if !record.value.is_finite() || record.value < 0.0 {
            error!(
                "{} for {} is {} which is not a usable measurement",
                record.metric,
                record.engine.name(),
                record.value
            );
            contains_error = true;
        }
    }

    contains_error
}
