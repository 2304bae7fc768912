use crate::cli::commands::CompareArgs;
use crate::cli::session::CommandSession;
use crate::errors::FlightRiskError;
use crate::reporting::renderer::{render_comparison_table, render_risk_chart, render_success};
use crate::reporting::{comparison_rows, write_report_file};
use std::path::PathBuf;
use tracing::info;

pub async fn handle_compare(args: CompareArgs) -> Result<(), FlightRiskError> {
    info!(dataset = %args.dataset.dataset, "Comparing airline risk");

    let session = CommandSession::prepare(&args.dataset).await?;
    let comparison = session.analysis.comparison(&session.rates);

    let report_path = args
        .report
        .clone()
        .or_else(|| session.config.output.as_ref()?.report_path.clone())
        .map(PathBuf::from);
    if let Some(path) = &report_path {
        write_report_file(path, &comparison).await?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison_rows(&comparison))?);
        return Ok(());
    }

    println!("{}", render_comparison_table(&comparison));
    if !args.no_chart {
        println!("{}", render_risk_chart(&comparison, session.config.chart_width()));
    }
    if let Some(path) = &report_path {
        println!("{}", render_success(&format!("Risk report written to {}", path.display())));
    }

    Ok(())
}
