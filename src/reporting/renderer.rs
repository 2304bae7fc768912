use console::style;

use crate::dataset::{ColumnCatalog, Dataset};
use crate::models::{AirlineRisk, PredictionOutcome};
use crate::risk::{CostTable, LossAnalysis};
use crate::utils::formatting::{format_count, format_currency, format_currency_whole, format_minutes};

const BOX_WIDTH: usize = 60;

/// Render the title box shown at the top of an analysis.
pub fn render_header(dataset: &str, rows: usize) -> String {
    let w = BOX_WIDTH;
    let mut out = String::new();
    out.push_str(&format!("\n  {}\n", style("╭".to_string() + &"─".repeat(w - 2) + "╮").cyan()));
    out.push_str(&format!(
        "  {} {} {}\n",
        style("│").cyan(),
        style(format!("{:<width$}", "AIRLINE FINANCIAL RISK ANALYZER", width = w - 4)).white().bold(),
        style("│").cyan(),
    ));
    out.push_str(&format!(
        "  {} {:<width$} {}\n",
        style("│").cyan(),
        format!("Dataset: {} ({} rows)", dataset, rows),
        style("│").cyan(),
        width = w - 4,
    ));
    out.push_str(&format!("  {}\n", style("╰".to_string() + &"─".repeat(w - 2) + "╯").cyan()));
    out
}

/// Render the column catalog found by validation.
pub fn render_catalog(catalog: &ColumnCatalog) -> String {
    format!(
        "\n  {} {}\n  {} {}\n",
        style("Categorical:").dim(),
        style(catalog.categorical.join(", ")).white(),
        style("Numeric:").dim(),
        style(catalog.numeric.join(", ")).white(),
    )
}

/// Render the first rows of a dataset as an aligned table.
pub fn render_preview(dataset: &Dataset, rows: usize) -> String {
    let names = dataset.column_names();
    let body = dataset.head(rows);

    let widths: Vec<usize> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            body.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&format!("\n{}\n\n", style("Dataset Preview").white().bold()));

    let header: Vec<String> = names
        .iter()
        .zip(&widths)
        .map(|(name, w)| format!("{:<w$}", name, w = *w))
        .collect();
    out.push_str(&format!("  {}\n", style(header.join("  ")).cyan().bold()));

    for row in &body {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
            .collect();
        out.push_str(&format!("  {}\n", cells.join("  ")));
    }

    if body.is_empty() {
        out.push_str(&format!("  {}\n", style("No rows.").dim()));
    }
    out
}

/// Render the metric cards for one airline plus the total-risk highlight.
pub fn render_metric_cards(risk: &AirlineRisk) -> String {
    let s = &risk.summary;
    let average = s
        .average_delay()
        .map(format_minutes)
        .unwrap_or_else(|| "n/a".to_string());

    let cards = [
        ("Total Delay", format_minutes(s.total_delay)),
        ("Average Delay", average),
        ("Passengers", format_count(s.passengers)),
        ("Compensation Loss", format_currency(s.compensation)),
        ("Operational Cost", format_currency(s.operational_cost)),
        ("Insurance Risk", format_currency(s.insurance_cost)),
    ];

    let mut out = String::new();
    out.push_str(&format!(
        "\n{}\n\n",
        style(format!("Financial Risk Analysis: {}", risk.airline)).white().bold(),
    ));
    for (label, value) in cards {
        out.push_str(&format!(
            "  {} {}\n",
            style(format!("{:<20}", label)).dim(),
            style(value).white().bold(),
        ));
    }
    out.push_str(&format!(
        "\n  {} {}\n",
        style(format!("Total Financial Risk for {}:", risk.airline)).red().bold(),
        style(format_currency(s.total_risk)).red().bold(),
    ));
    out
}

/// Render the airline-wise comparison table.
pub fn render_comparison_table(comparison: &[AirlineRisk]) -> String {
    if comparison.is_empty() {
        return format!("\n  {}\n", style("No airlines to compare.").dim());
    }

    let rows: Vec<[String; 6]> = comparison
        .iter()
        .map(|r| {
            [
                r.airline.clone(),
                format!("{:.2}", r.summary.total_delay),
                format_currency(r.summary.compensation),
                format_currency(r.summary.operational_cost),
                format_currency(r.summary.insurance_cost),
                format_currency(r.summary.total_risk),
            ]
        })
        .collect();

    let headers = super::export::COMPARISON_HEADERS;
    let widths: Vec<usize> = (0..headers.len())
        .map(|i| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(headers[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, w))| {
                if i == 0 {
                    format!("{:<w$}", cell, w = *w)
                } else {
                    format!("{:>w$}", cell, w = *w)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut out = String::new();
    out.push_str(&format!("\n{}\n\n", style("Airline-wise Risk Comparison").white().bold()));
    out.push_str(&format!("  {}\n", style(line(&header_cells)).cyan().bold()));
    let total_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&format!("  {}\n", style("─".repeat(total_width)).dim()));
    for row in &rows {
        out.push_str(&format!("  {}\n", line(row)));
    }
    out
}

/// Render total risk per airline as a horizontal bar chart.
///
/// Bars are scaled to the largest positive total; non-positive totals get no bar.
pub fn render_risk_chart(comparison: &[AirlineRisk], width: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n{}\n\n",
        style("Airline-wise Financial Risk due to Delays").white().bold(),
    ));
    if comparison.is_empty() {
        out.push_str(&format!("  {}\n", style("No data to chart.").dim()));
        return out;
    }

    let max_risk = comparison
        .iter()
        .map(|r| r.summary.total_risk)
        .fold(0.0_f64, f64::max);
    let label_width = comparison
        .iter()
        .map(|r| r.airline.chars().count())
        .max()
        .unwrap_or(0);

    for risk in comparison {
        let total = risk.summary.total_risk;
        let bar_len = if max_risk > 0.0 && total > 0.0 {
            ((total / max_risk) * width as f64).ceil() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "  {} {} {}\n",
            format!("{:<w$}", risk.airline, w = label_width),
            style("█".repeat(bar_len)).blue(),
            style(format_currency_whole(total)).dim(),
        ));
    }
    out
}

/// Render the outcome of a risk prediction.
pub fn render_prediction(outcome: &PredictionOutcome) -> String {
    match outcome {
        PredictionOutcome::Predicted(p) => format!(
            "\n{}\n\n  {} Predicted Financial Risk for {}: {}\n  {}\n",
            style("AI Risk Prediction").white().bold(),
            style("✓").green(),
            style(&p.airline).white().bold(),
            style(format_currency(p.predicted_risk)).green().bold(),
            style(format!(
                "average delay {} | {} training records | rank {}",
                format_minutes(p.average_delay),
                p.training_rows,
                p.rank
            ))
            .dim(),
        ),
        PredictionOutcome::Failed { airline, error } => format!(
            "\n{}\n\n  {}\n",
            style("AI Risk Prediction").white().bold(),
            render_error(&format!("AI Analysis Error for {}: {}", airline, error)),
        ),
    }
}

/// Render the cost-model loss ranking and worst-case estimate.
pub fn render_loss_analysis(table: &CostTable, analysis: &LossAnalysis) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n\n", style("Cost Model Losses").white().bold()));

    if analysis.airline_losses.is_empty() {
        out.push_str(&format!("  {}\n", style("No costed records.").dim()));
    }
    let label_width = analysis
        .airline_losses
        .iter()
        .map(|l| l.airline.chars().count())
        .max()
        .unwrap_or(0);
    for loss in &analysis.airline_losses {
        out.push_str(&format!(
            "  {}  {}\n",
            format!("{:<w$}", loss.airline, w = label_width),
            style(format_currency(loss.total_cost)).white().bold(),
        ));
    }

    out.push_str(&format!(
        "\n  {} {}\n  {} {}\n",
        style("Costed records:").dim(),
        table.rows.len(),
        style("Excluded records:").dim(),
        table.excluded,
    ));
    let worst = analysis
        .worst_case
        .map(format_currency)
        .unwrap_or_else(|| "n/a".to_string());
    out.push_str(&format!(
        "  {} {}\n",
        style("95% worst-case record cost:").dim(),
        style(worst).red().bold(),
    ));
    out
}

/// Render the version info.
pub fn render_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("GIT_HASH").unwrap_or("dev");
    let build_ts = option_env!("BUILD_TIMESTAMP").unwrap_or("unknown");

    format!(
        "\n  {} {}\n  {} {}\n  {} {}\n",
        style("Version:").dim(),
        style(version).white().bold(),
        style("Commit:").dim(),
        style(git_hash).white(),
        style("Built:").dim(),
        style(build_ts).white(),
    )
}

pub fn render_error(msg: &str) -> String {
    format!("{} {}", style("✗").red(), style(msg).red())
}

pub fn render_success(msg: &str) -> String {
    format!("{} {}", style("✓").green(), msg)
}
