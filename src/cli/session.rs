use std::path::{Path, PathBuf};

use tracing::debug;

use crate::analysis::{self, PreparedAnalysis};
use crate::cli::commands::DatasetArgs;
use crate::config::{self, ColumnsConfig, FlightRiskConfig};
use crate::dataset::{delimiter_byte, load_dataset};
use crate::errors::FlightRiskError;
use crate::models::RateParameters;

/// Everything an analysis command needs, resolved from flags, the config
/// file and built-in defaults, in that order of precedence.
pub struct CommandSession {
    pub config: FlightRiskConfig,
    pub dataset_name: String,
    pub analysis: PreparedAnalysis,
    pub rates: RateParameters,
}

impl CommandSession {
    pub async fn prepare(args: &DatasetArgs) -> Result<Self, FlightRiskError> {
        let config = load_config(args.config.as_deref()).await?;
        let rates = resolve_rates(args, &config)?;

        let path = PathBuf::from(&args.dataset);
        let dataset = load_dataset(&path, delimiter_byte(args.delimiter)?).await?;
        let columns = resolve_columns(args, &config);
        let analysis = analysis::prepare(dataset, &config.keywords(), &columns, args.airline.as_deref())?;

        Ok(Self {
            config,
            dataset_name: dataset_name(&path),
            analysis,
            rates,
        })
    }
}

pub async fn load_config(path: Option<&str>) -> Result<FlightRiskConfig, FlightRiskError> {
    match path {
        Some(path) => config::parse_config(Path::new(path)).await,
        None => Ok(FlightRiskConfig::default()),
    }
}

pub fn resolve_rates(args: &DatasetArgs, config: &FlightRiskConfig) -> Result<RateParameters, FlightRiskError> {
    let file = config.rates();
    let rates = RateParameters {
        compensation_rate: args.compensation_rate.unwrap_or(file.compensation_rate),
        operational_cost_rate: args.operational_cost_rate.unwrap_or(file.operational_cost_rate),
        insurance_multiplier: args.insurance_multiplier.unwrap_or(file.insurance_multiplier),
    };
    rates.validate()?;
    debug!(?rates, "Resolved rate parameters");
    Ok(rates)
}

fn resolve_columns(args: &DatasetArgs, config: &FlightRiskConfig) -> ColumnsConfig {
    let file = config.columns();
    ColumnsConfig {
        airline: args.airline_col.clone().or(file.airline),
        delay: args.delay_col.clone().or(file.delay),
        passengers: args.passenger_col.clone().or(file.passengers),
    }
}

pub fn dataset_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}
