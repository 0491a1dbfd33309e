//! End-to-end tests for the chart series builders.

use approx::assert_relative_eq;
use klimat_trend::{
    ApproximationMode, ChartData, EmissionRecord, ScopeValue, TrendConfig, TrendError, Weighting,
    sophisticated_approximated_data,
};

fn records() -> Vec<EmissionRecord> {
    let mut first = EmissionRecord::new(2018, Some(210.0));
    first.scope1 = Some(ScopeValue {
        value: 60.0,
        is_ai_generated: false,
    });
    vec![
        first,
        EmissionRecord::new(2019, Some(200.0)),
        EmissionRecord::new(2020, Some(170.0)),
        EmissionRecord::new(2021, Some(185.0)),
        EmissionRecord::new(2022, Some(180.0)),
    ]
}

fn row(rows: &[ChartData], year: i32) -> &ChartData {
    rows.iter().find(|r| r.year == year).unwrap()
}

#[test]
fn one_row_per_year_through_end_year() {
    let config = TrendConfig::new().with_end_year(2040);
    let rows = sophisticated_approximated_data(&records(), 2025, &config).unwrap();
    let years: Vec<i32> = rows.iter().map(|r| r.year).collect();
    let expected: Vec<i32> = (2018..=2040).collect();
    assert_eq!(years, expected);
}

#[test]
fn approximated_and_trend_agree_after_last_report() {
    let config = TrendConfig::new()
        .with_base_year(Some(2018))
        .with_weighting(Weighting::RecencyWeighted);
    let rows = sophisticated_approximated_data(&records(), 2025, &config).unwrap();

    let mut compared = 0;
    for r in &rows {
        if let (Some(a), Some(t)) = (r.approximated, r.trend) {
            assert_relative_eq!(a, t, epsilon = 1e-9);
            compared += 1;
        }
    }
    assert_eq!(compared, 2050 - 2022);
}

#[test]
fn no_step_at_the_last_report() {
    let config = TrendConfig::new().with_base_year(Some(2018));
    let rows = sophisticated_approximated_data(&records(), 2025, &config).unwrap();
    let boundary = row(&rows, 2022);
    assert_eq!(boundary.total, Some(180.0));
    assert_eq!(boundary.approximated, Some(180.0));
    assert!(boundary.trend.is_none());

    let slope = row(&rows, 2023).approximated.unwrap() - 180.0;
    assert_relative_eq!(
        row(&rows, 2024).approximated.unwrap(),
        180.0 + 2.0 * slope,
        epsilon = 1e-9
    );
}

#[test]
fn projection_never_goes_negative() {
    let records = [
        EmissionRecord::new(2020, Some(100.0)),
        EmissionRecord::new(2021, Some(60.0)),
    ];
    let rows = sophisticated_approximated_data(&records, 2022, &TrendConfig::new()).unwrap();
    assert_eq!(row(&rows, 2022).approximated, Some(20.0));
    assert_eq!(row(&rows, 2023).approximated, Some(0.0));
    assert!(rows.iter().filter_map(|r| r.trend).all(|v| v >= 0.0));
}

#[test]
fn repeated_calls_are_identical() {
    let config = TrendConfig::new().with_base_year(Some(2019));
    let first = sophisticated_approximated_data(&records(), 2025, &config).unwrap();
    let second = sophisticated_approximated_data(&records(), 2025, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn scope_breakdown_is_carried_through() {
    let rows = sophisticated_approximated_data(&records(), 2025, &TrendConfig::new()).unwrap();
    let first = row(&rows, 2018);
    assert_eq!(first.scope1.as_ref().map(|s| s.value), Some(60.0));
    assert!(row(&rows, 2019).scope1.is_none());
}

#[test]
fn current_year_report_anchors_carbon_law() {
    let rows = sophisticated_approximated_data(&records(), 2022, &TrendConfig::new()).unwrap();
    assert!(row(&rows, 2021).carbon_law.is_none());
    assert_relative_eq!(row(&rows, 2022).carbon_law.unwrap(), 180.0);
    assert_relative_eq!(
        row(&rows, 2032).carbon_law.unwrap(),
        180.0 * 0.8828_f64.powi(10),
        epsilon = 1e-9
    );
}

#[test]
fn exponential_mode_follows_the_curve() {
    let records = [
        EmissionRecord::new(2020, Some(100.0)),
        EmissionRecord::new(2021, Some(90.0)),
        EmissionRecord::new(2022, Some(81.0)),
    ];
    let config = TrendConfig::new()
        .with_mode(ApproximationMode::Exponential)
        .with_base_year(Some(2020))
        .with_end_year(2030);
    let rows = sophisticated_approximated_data(&records, 2024, &config).unwrap();

    assert_eq!(row(&rows, 2022).approximated, Some(81.0));
    assert!(row(&rows, 2022).trend.is_none());
    assert_relative_eq!(row(&rows, 2023).trend.unwrap(), 72.9, epsilon = 1e-9);
    assert_relative_eq!(row(&rows, 2024).approximated.unwrap(), 65.61, epsilon = 1e-9);
    assert_relative_eq!(row(&rows, 2024).carbon_law.unwrap(), 65.61, epsilon = 1e-9);
    assert!(row(&rows, 2021).approximated.is_none());
}

#[test]
fn reports_ahead_of_current_year() {
    let records = [
        EmissionRecord::new(2022, Some(100.0)),
        EmissionRecord::new(2023, Some(90.0)),
        EmissionRecord::new(2024, Some(80.0)),
    ];
    let config = TrendConfig::new().with_end_year(2030);
    let rows = sophisticated_approximated_data(&records, 2023, &config).unwrap();

    assert_eq!(rows.len(), 9);
    assert!(row(&rows, 2023).approximated.is_none());
    assert_relative_eq!(row(&rows, 2023).carbon_law.unwrap(), 90.0);
    assert_eq!(row(&rows, 2024).approximated, Some(80.0));
    assert!(row(&rows, 2024).trend.is_none());
    assert_relative_eq!(row(&rows, 2025).approximated.unwrap(), 70.0, epsilon = 1e-9);
    assert_relative_eq!(row(&rows, 2025).trend.unwrap(), 70.0, epsilon = 1e-9);
    assert_relative_eq!(
        row(&rows, 2025).carbon_law.unwrap(),
        90.0 * 0.8828_f64.powi(2),
        epsilon = 1e-9
    );
}

#[test]
fn exponential_reports_ahead_of_current_year() {
    let records = [
        EmissionRecord::new(2020, Some(100.0)),
        EmissionRecord::new(2021, Some(90.0)),
        EmissionRecord::new(2022, Some(81.0)),
    ];
    let config = TrendConfig::new()
        .with_mode(ApproximationMode::Exponential)
        .with_base_year(Some(2020))
        .with_end_year(2025);
    let rows = sophisticated_approximated_data(&records, 2021, &config).unwrap();

    assert!(row(&rows, 2020).carbon_law.is_none());
    assert_relative_eq!(row(&rows, 2021).carbon_law.unwrap(), 90.0);
    assert_eq!(row(&rows, 2022).approximated, Some(81.0));
    assert_relative_eq!(row(&rows, 2023).trend.unwrap(), 72.9, epsilon = 1e-9);
}

#[test]
fn exponential_mode_reaching_zero() {
    let records = [
        EmissionRecord::new(2020, Some(100.0)),
        EmissionRecord::new(2021, Some(50.0)),
        EmissionRecord::new(2022, Some(0.0)),
    ];
    let config = TrendConfig::new()
        .with_mode(ApproximationMode::Exponential)
        .with_base_year(Some(2020))
        .with_end_year(2030);
    let rows = sophisticated_approximated_data(&records, 2023, &config).unwrap();

    assert_eq!(row(&rows, 2022).approximated, Some(0.0));
    for year in 2023..=2030 {
        let r = row(&rows, year);
        assert_eq!(r.approximated, Some(0.0));
        assert_eq!(r.trend, Some(0.0));
        assert!(r.carbon_law.is_none());
    }
}

#[test]
fn end_year_before_last_report_fails() {
    let config = TrendConfig::new().with_end_year(2020);
    let result = sophisticated_approximated_data(&records(), 2025, &config);
    assert!(matches!(
        result,
        Err(TrendError::InvalidRange {
            context: "projection",
            ..
        })
    ));
}

#[test]
fn no_usable_reports_fails() {
    let records = [
        EmissionRecord::new(2020, None),
        EmissionRecord::new(2021, Some(f64::NAN)),
    ];
    let result = sophisticated_approximated_data(&records, 2025, &TrendConfig::new());
    assert!(matches!(result, Err(TrendError::EmptySeries)));
}

#[test]
fn rows_serialize_without_empty_fields() {
    let config = TrendConfig::new().with_end_year(2023);
    let rows = sophisticated_approximated_data(&records(), 2023, &config).unwrap();
    let json = serde_json::to_value(row(&rows, 2023)).unwrap();
    let obj = json.as_object().unwrap();
    assert!(obj.contains_key("approximated"));
    assert!(obj.contains_key("carbonLaw"));
    assert!(!obj.contains_key("total"));
    assert!(!obj.contains_key("scope3Categories"));
}
