use crate::cli::commands::CostsArgs;
use crate::cli::session::CommandSession;
use crate::errors::FlightRiskError;
use crate::reporting::renderer::render_loss_analysis;
use crate::risk::{loss_analysis, record_costs, CostModel};
use serde_json::json;
use tracing::info;

pub async fn handle_costs(args: CostsArgs) -> Result<(), FlightRiskError> {
    info!(dataset = %args.dataset.dataset, "Running cost model");

    let session = CommandSession::prepare(&args.dataset).await?;
    let file = session.config.cost_model();
    let model = CostModel {
        cost_per_minute: args.cost_per_minute.unwrap_or(file.cost_per_minute),
        compensation_per_passenger: args
            .compensation_per_passenger
            .unwrap_or(file.compensation_per_passenger),
    };
    model.validate()?;

    let table = record_costs(&session.analysis.records, &model);
    let analysis = loss_analysis(&table);

    if args.json {
        let body = json!({
            "cost_model": model,
            "costed_records": table.rows.len(),
            "excluded_records": table.excluded,
            "airline_losses": analysis.airline_losses,
            "worst_case_95": analysis.worst_case,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("{}", render_loss_analysis(&table, &analysis));
    Ok(())
}
