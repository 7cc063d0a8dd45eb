use chrono::NaiveDate;
use sales_core::{
    error::ReportError,
    record::SaleRecord,
    trend::{date_ordinal, fit_line, month_start, ordinal_date, product_series, product_trend},
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn sale(product: &str, year: i32, month: u32, units: f64) -> SaleRecord {
    SaleRecord {
        branch: "Norte".into(),
        product: product.into(),
        year,
        month,
        units_sold: units,
        total_revenue: units * 10.0,
        total_cost: units * 6.0,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// (0,10),(1,20),(2,30) fits exactly: slope 10, intercept 10.
#[test]
fn exact_fit_on_collinear_points() {
    let points = [(0.0, 10.0), (1.0, 20.0), (2.0, 30.0)];
    let fit = fit_line(&points).unwrap();

    assert!((fit.slope - 10.0).abs() < 1e-12, "slope {}", fit.slope);
    assert!((fit.intercept - 10.0).abs() < 1e-12, "intercept {}", fit.intercept);
    assert!((fit.r_squared - 1.0).abs() < 1e-12);

    let predictions: Vec<f64> = points.iter().map(|(t, _)| fit.predict(*t)).collect();
    for (p, expected) in predictions.iter().zip([10.0, 20.0, 30.0]) {
        assert!((p - expected).abs() < 1e-9, "prediction {p} vs {expected}");
    }
}

/// Noisy data: the fit matches the closed-form cov/var solution.
#[test]
fn fit_matches_closed_form() {
    let points = [(1.0, 2.0), (2.0, 3.0), (4.0, 2.5), (7.0, 6.0)];
    let fit = fit_line(&points).unwrap();

    let n = points.len() as f64;
    let mt = points.iter().map(|p| p.0).sum::<f64>() / n;
    let my = points.iter().map(|p| p.1).sum::<f64>() / n;
    let cov: f64 = points.iter().map(|p| (p.0 - mt) * (p.1 - my)).sum::<f64>() / n;
    let var: f64 = points.iter().map(|p| (p.0 - mt).powi(2)).sum::<f64>() / n;
    let slope = cov / var;

    assert!((fit.slope - slope).abs() < 1e-12);
    assert!((fit.intercept - (my - slope * mt)).abs() < 1e-12);
    assert!(fit.r_squared > 0.0 && fit.r_squared < 1.0);
}

/// A single point degrades to the flat line through its value.
#[test]
fn single_point_is_flat() {
    let fit = fit_line(&[(18_000.0, 42.0)]).unwrap();
    assert_eq!(fit.slope, 0.0);
    assert_eq!(fit.intercept, 42.0);
    assert_eq!(fit.predict(99_999.0), 42.0);
}

/// Points sharing one t (zero variance) degrade to mean(y).
#[test]
fn identical_times_fit_the_mean() {
    let fit = fit_line(&[(5.0, 10.0), (5.0, 30.0)]).unwrap();
    assert_eq!(fit.slope, 0.0);
    assert_eq!(fit.intercept, 20.0);
}

/// No points at all is an insufficient-data error.
#[test]
fn empty_series_is_an_error() {
    let err = fit_line(&[]).unwrap_err();
    assert!(matches!(err, ReportError::InsufficientData { points: 0, .. }), "got {err:?}");
}

/// Dates are day counts from 1970-01-01.
#[test]
fn date_ordinal_uses_unix_epoch() {
    assert_eq!(date_ordinal(date(1970, 1, 1)), 0.0);
    assert_eq!(date_ordinal(date(1970, 2, 1)), 31.0);
    assert_eq!(date_ordinal(date(1969, 12, 31)), -1.0);
    assert_eq!(ordinal_date(date_ordinal(date(2023, 7, 1))), Some(date(2023, 7, 1)));
}

/// Months map to their first day; invalid months are rejected.
#[test]
fn month_start_is_first_of_month() {
    assert_eq!(month_start(2024, 2).unwrap(), date(2024, 2, 1));
    assert!(matches!(
        month_start(2024, 0),
        Err(ReportError::InvalidDate { year: 2024, month: 0 })
    ));
}

/// A product's series is date-ordered and excludes other products.
#[test]
fn series_is_sorted_and_filtered() {
    let records = vec![
        sale("Pepsi", 2023, 3, 30.0),
        sale("Fanta", 2023, 1, 99.0),
        sale("Pepsi", 2022, 12, 5.0),
        sale("Pepsi", 2023, 1, 10.0),
    ];
    let series = product_series(&records, "Pepsi").unwrap();
    assert_eq!(
        series,
        vec![
            (date(2022, 12, 1), 5.0),
            (date(2023, 1, 1), 10.0),
            (date(2023, 3, 1), 30.0),
        ]
    );
}

/// The trend sequence is parallel to the series and lies on the fitted line.
#[test]
fn product_trend_evaluates_fit_at_each_date() {
    let records = vec![
        sale("Pepsi", 2023, 1, 10.0),
        sale("Pepsi", 2023, 2, 14.0),
        sale("Pepsi", 2023, 3, 11.0),
        sale("Pepsi", 2023, 4, 19.0),
    ];
    let trend = product_trend(&records, "Pepsi").unwrap();

    assert_eq!(trend.product, "Pepsi");
    assert_eq!(trend.points.len(), 4);
    assert!(trend.fit.slope > 0.0, "sales grow, slope {}", trend.fit.slope);
    for p in &trend.points {
        let expected = trend.fit.predict(date_ordinal(p.date));
        assert!((p.trend - expected).abs() < 1e-9);
    }
    assert!(trend.points.windows(2).all(|w| w[0].date <= w[1].date));
}

/// Unknown product: insufficient data, with the product named.
#[test]
fn trend_for_missing_product_names_it() {
    let records = vec![sale("Pepsi", 2023, 1, 10.0)];
    match product_trend(&records, "Sprite").unwrap_err() {
        ReportError::InsufficientData { product, points } => {
            assert_eq!(product, "Sprite");
            assert_eq!(points, 0);
        }
        other => panic!("expected InsufficientData, got {other:?}"),
    }
}
