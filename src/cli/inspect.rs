use crate::cli::commands::InspectArgs;
use crate::cli::session::{dataset_name, load_config};
use crate::dataset::{delimiter_byte, load_dataset, validate_dataset};
use crate::errors::FlightRiskError;
use crate::reporting::renderer::{render_catalog, render_header, render_preview, render_success};
use std::path::PathBuf;
use tracing::info;

pub async fn handle_inspect(args: InspectArgs) -> Result<(), FlightRiskError> {
    info!(dataset = %args.dataset, "Inspecting dataset");

    let config = load_config(args.config.as_deref()).await?;
    let path = PathBuf::from(&args.dataset);
    let dataset = load_dataset(&path, delimiter_byte(args.delimiter)?).await?;

    println!("{}", render_header(&dataset_name(&path), dataset.row_count()));
    println!("{}", render_preview(&dataset, args.rows));

    let catalog = validate_dataset(&dataset, &config.keywords())?;
    println!("{}", render_catalog(&catalog));
    println!("{}", render_success("Dataset is ready for analysis"));

    Ok(())
}
