use crate::data::{Engine, MetricTable, CONSOLIDATED};
use crate::report::{preflight_checks, GroupTable, MetricGroup, ReportError, GROUPS};
use std::collections::BTreeMap;

#[test]
pub fn insertion_chart_compares_exactly_three_engines() {
    let table = GroupTable::build(&GROUPS[0], &CONSOLIDATED).unwrap();

    assert_eq!(
        table.engines,
        vec![Engine::MongoDb, Engine::MySql, Engine::PostgreSql]
    );
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].metric, "Velocidad Inserción");
    assert_eq!(
        table.rows[0].values,
        vec![Some(14870.0), Some(7508.0), Some(9406.0)]
    );
}

#[test]
pub fn json_chart_excludes_mongodb_without_leaving_a_gap() {
    let table = GroupTable::build(&GROUPS[3], &CONSOLIDATED).unwrap();

    assert_eq!(table.engines, vec![Engine::MySql, Engine::PostgreSql]);
    // both rows are fully populated, MongoDB contributes no gap column
    for row in &table.rows {
        assert!(row.values.iter().all(Option::is_some));
    }
    assert_eq!(table.engine_lineup(), "MySQL vs PostgreSQL");
}

#[test]
pub fn partially_covered_engines_keep_gaps() {
    let group = MetricGroup {
        name: "partial",
        title: "partial",
        y_desc: "ms",
        file_name: "partial.png",
        metrics: &["a", "b"],
    };
    let data: MetricTable = BTreeMap::from([
        (
            "a",
            BTreeMap::from([(Engine::MongoDb, 1.0), (Engine::MySql, 2.0)]),
        ),
        ("b", BTreeMap::from([(Engine::MySql, 3.0)])),
    ]);

    let table = GroupTable::build(&group, &data).unwrap();

    assert_eq!(table.engines, vec![Engine::MongoDb, Engine::MySql]);
    assert_eq!(table.rows[0].values, vec![Some(1.0), Some(2.0)]);
    // MongoDB was not measured for 'b', the cluster keeps a gap
    assert_eq!(table.rows[1].values, vec![None, Some(3.0)]);
}

#[test]
pub fn unknown_metric_references_are_rejected() {
    let group = MetricGroup {
        name: "broken",
        title: "broken",
        y_desc: "ms",
        file_name: "broken.png",
        metrics: &["No existe"],
    };

    match GroupTable::build(&group, &CONSOLIDATED) {
        Err(ReportError::UnknownMetric { group, metric }) => {
            assert_eq!(group, "broken");
            assert_eq!(metric, "No existe");
        }
        other => panic!("expected an unknown metric error, got {other:?}"),
    }
}

#[test]
pub fn groups_without_any_measurement_are_rejected() {
    let group = MetricGroup {
        name: "empty",
        title: "empty",
        y_desc: "ms",
        file_name: "empty.png",
        metrics: &["a"],
    };
    let data: MetricTable = BTreeMap::from([("a", BTreeMap::new())]);

    assert!(matches!(
        GroupTable::build(&group, &data),
        Err(ReportError::EmptyGroup { group: "empty" })
    ));
}

#[test]
pub fn y_axis_scales_to_the_largest_measurement() {
    let table = GroupTable::build(&GROUPS[2], &CONSOLIDATED).unwrap();

    assert_eq!(table.max_value(), 174.0);
}

#[test]
pub fn preflight_accepts_the_builtin_report() {
    assert!(!preflight_checks(&CONSOLIDATED));
}

#[test]
pub fn preflight_rejects_a_table_with_missing_metrics() {
    let data: MetricTable = BTreeMap::new();

    assert!(preflight_checks(&data));
}

#[test]
pub fn preflight_rejects_non_finite_measurements() {
    let mut data = CONSOLIDATED.clone();
    data.insert(
        "Velocidad Inserción",
        BTreeMap::from([(Engine::MongoDb, f64::NAN)]),
    );

    assert!(preflight_checks(&data));
}
