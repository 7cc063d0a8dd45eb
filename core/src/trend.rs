//! Degree-1 least-squares trend over a product's monthly sales.
//!
//! Time is the record's first-of-month date expressed as days since
//! 1970-01-01. When every point shares one date the slope is undefined;
//! the fit degrades to the flat line through mean(y).

use crate::{
    error::{ReportError, ReportResult},
    record::SaleRecord,
};
use chrono::{Datelike, NaiveDate};
use log::warn;
use serde::{Deserialize, Serialize};

/// `num_days_from_ce()` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination, clamped to [0, 1].
    pub r_squared: f64,
}

impl LinearFit {
    pub fn predict(&self, t: f64) -> f64 {
        self.slope * t + self.intercept
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub units_sold: f64,
    pub trend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTrend {
    pub product: String,
    pub fit: LinearFit,
    /// Time-ordered, one entry per input row.
    pub points: Vec<TrendPoint>,
}

pub fn month_start(year: i32, month: u32) -> ReportResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(ReportError::InvalidDate { year, month })
}

pub fn date_ordinal(date: NaiveDate) -> f64 {
    (date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE) as f64
}

/// Inverse of [`date_ordinal`], truncating to whole days.
pub fn ordinal_date(t: f64) -> Option<NaiveDate> {
    let days = t.floor() as i64 + UNIX_EPOCH_DAYS_FROM_CE as i64;
    i32::try_from(days)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

/// One product's (date, units) pairs, stably sorted by date.
/// Rows sharing a month stay separate points.
pub fn product_series(records: &[SaleRecord], product: &str) -> ReportResult<Vec<(NaiveDate, f64)>> {
    let mut series = records
        .iter()
        .filter(|r| r.product == product)
        .map(|r| Ok((month_start(r.year, r.month)?, r.units_sold)))
        .collect::<ReportResult<Vec<_>>>()?;
    series.sort_by_key(|(date, _)| *date);
    Ok(series)
}

/// Ordinary least squares over `(t, y)` points.
pub fn fit_line(points: &[(f64, f64)]) -> ReportResult<LinearFit> {
    if points.is_empty() {
        return Err(ReportError::InsufficientData {
            product: String::new(),
            points: 0,
        });
    }

    let n = points.len() as f64;
    let mean_t = points.iter().map(|(t, _)| t).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (t, y) in points {
        sxx += (t - mean_t).powi(2);
        sxy += (t - mean_t) * (y - mean_y);
    }

    if sxx == 0.0 {
        return Ok(LinearFit {
            slope: 0.0,
            intercept: mean_y,
            r_squared: 0.0,
        });
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_t;

    let mut ss_tot = 0.0;
    let mut ss_res = 0.0;
    for (t, y) in points {
        ss_tot += (y - mean_y).powi(2);
        ss_res += (y - (slope * t + intercept)).powi(2);
    }
    let r_squared = if ss_tot == 0.0 {
        0.0
    } else {
        (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
    };

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}

/// Fit one product's series and evaluate the line at every input date.
pub fn product_trend(records: &[SaleRecord], product: &str) -> ReportResult<ProductTrend> {
    let series = product_series(records, product)?;
    let xy: Vec<(f64, f64)> = series
        .iter()
        .map(|(date, units)| (date_ordinal(*date), *units))
        .collect();

    let fit = fit_line(&xy).map_err(|e| match e {
        ReportError::InsufficientData { points, .. } => ReportError::InsufficientData {
            product: product.to_string(),
            points,
        },
        other => other,
    })?;

    let distinct_dates = series.windows(2).filter(|w| w[0].0 != w[1].0).count() + 1;
    if distinct_dates < 2 {
        warn!("{product}: fewer than two distinct months, trend is flat at {:.2}", fit.intercept);
    }

    let points = series
        .into_iter()
        .zip(xy)
        .map(|((date, units_sold), (t, _))| TrendPoint {
            date,
            units_sold,
            trend: fit.predict(t),
        })
        .collect();

    Ok(ProductTrend {
        product: product.to_string(),
        fit,
        points,
    })
}
