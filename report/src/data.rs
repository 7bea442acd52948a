use once_cell::sync::Lazy;
use plotters::style::RGBColor;
use std::collections::BTreeMap;

/// Database engines compared by the benchmark run.
/// The order here fixes the bar order inside every chart cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Engine {
    MongoDb,
    MySql,
    PostgreSql,
    SqlServer,
}

impl Engine {
    pub const ALL: [Engine; 4] = [
        Engine::MongoDb,
        Engine::MySql,
        Engine::PostgreSql,
        Engine::SqlServer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Engine::MongoDb => "MongoDB",
            Engine::MySql => "MySQL",
            Engine::PostgreSql => "PostgreSQL",
            Engine::SqlServer => "SQL Server",
        }
    }

    /// fixed display color, the same over all charts of the report
    pub fn color(&self) -> RGBColor {
        match self {
            Engine::MongoDb => RGBColor(31, 119, 180),
            Engine::MySql => RGBColor(255, 127, 14),
            Engine::PostgreSql => RGBColor(44, 160, 44),
            Engine::SqlServer => RGBColor(214, 39, 40),
        }
    }
}

/// map of metric name -> measured value per engine
pub type MetricTable = BTreeMap<&'static str, BTreeMap<Engine, f64>>;

/// one flattened (metric, engine, value) measurement
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    pub metric: &'static str,
    pub engine: Engine,
    pub value: f64,
}

/// Consolidated numbers from the benchmark run.
/// Insertion speed is docs/second, everything else is milliseconds.
/// An engine that was not benchmarked for a metric is absent from that
/// metric's map and must never be read back as zero.
pub static CONSOLIDATED: Lazy<MetricTable> = Lazy::new(|| {
    BTreeMap::from([
        (
            "Velocidad Inserción",
            BTreeMap::from([
                (Engine::MongoDb, 14870.0),
                (Engine::MySql, 7508.0),
                (Engine::PostgreSql, 9406.0),
            ]),
        ),
        (
            "Búsqueda por email",
            BTreeMap::from([
                (Engine::MongoDb, 3.0),
                (Engine::MySql, 1.0),
                (Engine::PostgreSql, 2.0),
            ]),
        ),
        (
            "Conteo por departamento",
            BTreeMap::from([
                (Engine::MongoDb, 7.0),
                (Engine::MySql, 5.0),
                (Engine::PostgreSql, 16.0),
            ]),
        ),
        (
            "Búsqueda rango edad",
            BTreeMap::from([
                (Engine::MongoDb, 2.0),
                (Engine::MySql, 1.0),
                (Engine::PostgreSql, 2.0),
            ]),
        ),
        (
            "Agregación salario promedio",
            BTreeMap::from([
                (Engine::MongoDb, 56.0),
                (Engine::MySql, 174.0),
                (Engine::PostgreSql, 35.0),
            ]),
        ),
        (
            "Búsqueda en JSON",
            BTreeMap::from([(Engine::MySql, 178.0), (Engine::PostgreSql, 32.0)]),
        ),
        (
            "Consulta compleja",
            BTreeMap::from([(Engine::MySql, 77.0), (Engine::PostgreSql, 20.0)]),
        ),
    ])
});

/// flatten a table into records, in table order
pub fn records(table: &MetricTable) -> impl Iterator<Item = MetricRecord> + '_ {
    table.iter().flat_map(|(&metric, values)| {
        values.iter().map(move |(&engine, &value)| MetricRecord {
            metric,
            engine,
            value,
        })
    })
}
