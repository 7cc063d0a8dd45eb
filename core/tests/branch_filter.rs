use sales_core::{
    config::ReportConfig,
    error::ReportError,
    filter::{branch_choices, branches, BranchFilter},
    record::SaleRecord,
    report::{build_report, ReportRequest},
    stats::compute_product_stats,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn sale(branch: &str, product: &str, month: u32, units: f64, revenue: f64) -> SaleRecord {
    SaleRecord {
        branch: branch.into(),
        product: product.into(),
        year: 2023,
        month,
        units_sold: units,
        total_revenue: revenue,
        total_cost: revenue * 0.5,
    }
}

fn sample() -> Vec<SaleRecord> {
    vec![
        sale("Norte", "Pepsi", 1, 10.0, 100.0),
        sale("Sur", "Pepsi", 1, 30.0, 360.0),
        sale("Norte", "Fanta", 2, 5.0, 40.0),
        sale("Norte Bis", "Fanta", 2, 7.0, 70.0),
        sale("Sur", "Pepsi", 2, 12.0, 130.0),
    ]
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Branches are listed in first-seen order; "Todas" leads the choices.
#[test]
fn choices_start_with_all_branches() {
    let records = sample();
    assert_eq!(branches(&records), vec!["Norte", "Sur", "Norte Bis"]);
    assert_eq!(branch_choices(&records), vec!["Todas", "Norte", "Sur", "Norte Bis"]);
}

/// "Todas" maps to All; anything else to an exact branch.
#[test]
fn choice_parsing() {
    assert_eq!(BranchFilter::from_choice("Todas"), BranchFilter::All);
    assert_eq!(
        BranchFilter::from_choice("Norte"),
        BranchFilter::Only("Norte".into())
    );
}

/// A branch filter keeps exactly the rows of that branch; no prefix matching.
#[test]
fn filter_matches_branch_exactly() {
    let filtered = BranchFilter::Only("Norte".into()).apply(&sample());
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|r| r.branch == "Norte"));
}

/// Every downstream statistic only sees the selected branch.
#[test]
fn stats_are_restricted_to_branch() {
    let records = sample();
    let report = build_report(
        &records,
        &ReportRequest::for_choice("Sur"),
        &ReportConfig::default(),
    )
    .unwrap();

    assert_eq!(report.stats.len(), 1);
    let pepsi = &report.stats[0];
    assert_eq!(pepsi.product, "Pepsi");
    assert_eq!(pepsi.total_units, 42.0);
    assert!((pepsi.average_price - 490.0 / 42.0).abs() < 1e-9);
    assert_eq!(report.panels[0].trend.points.len(), 2);
    assert_eq!(report.title, "Datos de Ventas en Sur");
}

/// "All branches" reproduces the unfiltered aggregate.
#[test]
fn all_branches_equals_unfiltered() {
    let records = sample();
    let report = build_report(&records, &ReportRequest::default(), &ReportConfig::default()).unwrap();
    let unfiltered = compute_product_stats(&records).unwrap();

    assert_eq!(report.stats, unfiltered);
    assert_eq!(report.title, "Datos de Ventas Totales");
    assert_eq!(report.branch_choices.len(), 4);
}

/// A branch that is not in the data is an error, not an empty report.
#[test]
fn unknown_branch_is_rejected() {
    let err = build_report(
        &sample(),
        &ReportRequest::for_choice("Oeste"),
        &ReportConfig::default(),
    )
    .unwrap_err();
    match err {
        ReportError::UnknownBranch { branch } => assert_eq!(branch, "Oeste"),
        other => panic!("expected UnknownBranch, got {other:?}"),
    }
}
