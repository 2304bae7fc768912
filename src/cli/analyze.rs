use crate::cli::commands::AnalyzeArgs;
use crate::cli::session::CommandSession;
use crate::errors::FlightRiskError;
use crate::reporting::renderer::{
    render_comparison_table, render_header, render_metric_cards, render_prediction, render_preview,
    render_risk_chart, render_success,
};
use crate::reporting::{build_report, write_report_file};
use std::path::PathBuf;
use tracing::info;

pub async fn handle_analyze(args: AnalyzeArgs) -> Result<(), FlightRiskError> {
    info!(dataset = %args.dataset.dataset, "Starting risk analysis");

    let session = CommandSession::prepare(&args.dataset).await?;
    let analysis = &session.analysis;
    let rates = session.rates;

    let selected = analysis.selected(&rates);
    let comparison = analysis.comparison(&rates);
    let prediction = args.predict.then(|| analysis.predict(&rates));

    let report_path = args
        .report
        .clone()
        .or_else(|| session.config.output.as_ref()?.report_path.clone())
        .map(PathBuf::from);
    if let Some(path) = &report_path {
        write_report_file(path, &comparison).await?;
    }

    info!(
        airline = %selected.airline,
        total_risk = selected.summary.total_risk,
        airlines = comparison.len(),
        "Analysis completed"
    );

    if args.json {
        let report = build_report(
            &session.dataset_name,
            analysis.dataset.row_count(),
            &analysis.selection,
            &rates,
            &selected,
            &comparison,
            prediction,
        );
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", render_header(&session.dataset_name, analysis.dataset.row_count()));
    println!("{}", render_preview(&analysis.dataset, 5));
    if let Some(outcome) = &prediction {
        println!("{}", render_prediction(outcome));
    }
    println!("{}", render_metric_cards(&selected));
    println!("{}", render_comparison_table(&comparison));
    println!("{}", render_risk_chart(&comparison, session.config.chart_width()));
    if let Some(path) = &report_path {
        println!("{}", render_success(&format!("Risk report written to {}", path.display())));
    }

    Ok(())
}
