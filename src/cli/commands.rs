use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "flightrisk", version, about = "Airline delay financial risk analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors (command output is unaffected)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a dataset and preview its columns
    Inspect(InspectArgs),
    /// Full risk analysis for one airline plus the airline comparison
    Analyze(AnalyzeArgs),
    /// Airline-wise risk comparison table and chart
    Compare(CompareArgs),
    /// Predict an airline's financial risk with the regression model
    Predict(DatasetArgs),
    /// Per-record cost model and loss analysis
    Costs(CostsArgs),
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dataset location, column selection and rate overrides shared by the
/// analysis commands.
#[derive(Args, Clone, Debug, Default)]
pub struct DatasetArgs {
    /// Dataset file (.csv, .tsv or .txt)
    pub dataset: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Field delimiter, overrides the one implied by the file extension
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Airline/flight column (defaults to the first text column)
    #[arg(long)]
    pub airline_col: Option<String>,

    /// Delay column in minutes (defaults to the first numeric column)
    #[arg(long)]
    pub delay_col: Option<String>,

    /// Passenger column, or "None" for 100 passengers per record
    #[arg(long)]
    pub passenger_col: Option<String>,

    /// Airline/flight to analyze (defaults to the first one in the dataset)
    #[arg(short, long)]
    pub airline: Option<String>,

    /// Compensation rate ($/passenger/hr)
    #[arg(long)]
    pub compensation_rate: Option<f64>,

    /// Operational cost rate ($/delay min)
    #[arg(long)]
    pub operational_cost_rate: Option<f64>,

    /// Insurance risk as a fraction of operational cost
    #[arg(long)]
    pub insurance_multiplier: Option<f64>,
}

#[derive(Args, Clone, Debug)]
pub struct InspectArgs {
    /// Dataset file (.csv, .tsv or .txt)
    pub dataset: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Field delimiter, overrides the one implied by the file extension
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Number of preview rows
    #[arg(long, default_value = "5")]
    pub rows: usize,
}

#[derive(Args, Clone, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Also fit the regression model and predict the selected airline's risk
    #[arg(long)]
    pub predict: bool,

    /// Write the comparison report CSV to this path
    #[arg(long)]
    pub report: Option<String>,

    /// Print a JSON report instead of the terminal view
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Write the comparison report CSV to this path
    #[arg(long)]
    pub report: Option<String>,

    /// Skip the bar chart
    #[arg(long)]
    pub no_chart: bool,

    /// Print the comparison as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone, Debug)]
pub struct CostsArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Operational cost per delay minute
    #[arg(long)]
    pub cost_per_minute: Option<f64>,

    /// Compensation per passenger
    #[arg(long)]
    pub compensation_per_passenger: Option<f64>,

    /// Print the loss analysis as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone, Debug)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address
    #[arg(long)]
    pub host: Option<String>,

    /// YAML configuration file with default rates and keywords
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
