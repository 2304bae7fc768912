use crate::cli::commands::DatasetArgs;
use crate::cli::session::CommandSession;
use crate::errors::FlightRiskError;
use crate::models::PredictionOutcome;
use crate::reporting::renderer::render_prediction;
use crate::risk::predict_risk;
use tracing::info;

pub async fn handle_predict(args: DatasetArgs) -> Result<(), FlightRiskError> {
    info!(dataset = %args.dataset, "Running risk prediction");

    let session = CommandSession::prepare(&args).await?;
    let analysis = &session.analysis;
    let prediction = predict_risk(&analysis.records, &analysis.airline, &session.rates)?;

    println!("{}", render_prediction(&PredictionOutcome::Predicted(prediction)));
    Ok(())
}
