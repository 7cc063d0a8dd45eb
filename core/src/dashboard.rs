//! Static HTML dashboard: one panel per product with its metrics and chart.

use crate::report::SalesReport;
use std::fmt::Write;

const STYLE: &str = "\
body{font-family:sans-serif;margin:2rem;color:#222}\
.panel{border:1px solid #ddd;border-radius:6px;margin:1.5rem 0;padding:1rem;display:flex;gap:2rem}\
.metrics{min-width:14rem}\
.metric{margin:.8rem 0}\
.metric .label{font-size:.85rem;color:#666}\
.metric .value{font-size:1.6rem}\
.chart svg{max-width:100%;height:auto}";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Build the page. `charts` pairs a chart file name with its SVG, in panel order.
pub fn render_dashboard(report: &SalesReport, charts: &[(String, String)], stats_file: &str) -> String {
    let mut html = String::new();
    let title = escape_html(&report.title);

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Ventas por Sucursal</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>{title}</h1>\n"
    );

    let choices: Vec<String> = report
        .branch_choices
        .iter()
        .map(|c| escape_html(c))
        .collect();
    let _ = writeln!(html, "<p>Sucursales: {}</p>", choices.join(" · "));
    let _ = writeln!(
        html,
        "<p><a href=\"{}\" download>Descargar estadísticas como CSV</a></p>",
        escape_html(stats_file)
    );

    for (i, panel) in report.panels.iter().enumerate() {
        let product = escape_html(&panel.stats.product);
        let chart = charts.get(i).map(|(_, svg)| svg.as_str()).unwrap_or("");
        let _ = write!(
            html,
            "<details open class=\"container\">\n<summary>Ver Gráfico de {product}</summary>\n\
             <div class=\"panel\">\n<div class=\"metrics\">\n<h3>{product}</h3>\n"
        );
        for (label, value) in [
            ("Precio Promedio", &panel.metrics.average_price),
            ("Margen Promedio", &panel.metrics.average_margin),
            ("Unidades Vendidas", &panel.metrics.total_units),
        ] {
            let _ = writeln!(
                html,
                "<div class=\"metric\"><div class=\"label\">{label}</div>\
                 <div class=\"value\">{}</div></div>",
                escape_html(value)
            );
        }
        let _ = write!(
            html,
            "</div>\n<div class=\"chart\">\n{chart}\n</div>\n</div>\n</details>\n"
        );
    }

    html.push_str("</body>\n</html>\n");
    html
}
