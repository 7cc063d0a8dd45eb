//! Monthly sales chart with its trend line, rendered to SVG.

use crate::{
    config::ChartConfig,
    error::{ReportError, ReportResult},
    trend::ProductTrend,
};
use chrono::{Days, NaiveDate};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

/// Padding in days around a series that covers a single month.
const SINGLE_MONTH_PAD_DAYS: u64 = 15;

/// Render one product's chart to an SVG document.
pub fn render_trend_svg(trend: &ProductTrend, config: &ChartConfig) -> ReportResult<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (config.width, config.height))
            .into_drawing_area();
        draw_trend(&root, trend, config).map_err(|e| ReportError::Chart(e.to_string()))?;
        root.present()
            .map_err(|e| ReportError::Chart(e.to_string()))?;
    }
    Ok(svg)
}

fn axis_ranges(trend: &ProductTrend) -> ((NaiveDate, NaiveDate), (f64, f64)) {
    let dates = trend.points.iter().map(|p| p.date);
    let first = dates.clone().min().unwrap_or_default();
    let last = dates.max().unwrap_or_default();
    let (x_min, x_max) = if first == last {
        let pad = Days::new(SINGLE_MONTH_PAD_DAYS);
        (
            first.checked_sub_days(pad).unwrap_or(first),
            last.checked_add_days(pad).unwrap_or(last),
        )
    } else {
        (first, last)
    };

    let ys = trend
        .points
        .iter()
        .flat_map(|p| [p.units_sold, p.trend]);
    let (y_lo, y_hi) = ys.fold((0.0_f64, 0.0_f64), |(lo, hi), y| (lo.min(y), hi.max(y)));
    let y_max = if y_hi > 0.0 { y_hi * 1.1 } else { 1.0 };
    let y_min = if y_lo < 0.0 { y_lo * 1.1 } else { 0.0 };

    ((x_min, x_max), (y_min, y_max))
}

fn draw_trend<DB>(
    root: &DrawingArea<DB, Shift>,
    trend: &ProductTrend,
    config: &ChartConfig,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (r, g, b) = config.sales_color;
    let sales_color = RGBColor(r, g, b);
    let (r, g, b) = config.trend_color;
    let trend_color = RGBColor(r, g, b);

    root.fill(&WHITE)?;

    let ((x_min, x_max), (y_min, y_max)) = axis_ranges(trend);
    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((x_min..x_max).monthly(), y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .x_labels(12)
        .x_label_formatter(&|d: &NaiveDate| d.format("%Y-%m").to_string())
        .y_label_formatter(&|v: &f64| format!("{v:.0}"))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            trend
                .points
                .iter()
                .map(|p| (p.date, p.units_sold)),
            sales_color.stroke_width(2),
        ))?
        .label(trend.product.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], sales_color));

    chart
        .draw_series(DashedLineSeries::new(
            trend
                .points
                .iter()
                .map(|p| (p.date, p.trend)),
            config.dash_length,
            config.dash_spacing,
            trend_color.stroke_width(2),
        ))?
        .label(config.trend_label.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], trend_color));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK.mix(0.3))
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    Ok(())
}
