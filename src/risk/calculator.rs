use super::PASSENGERS_PER_RECORD;
use crate::models::{AirlineRisk, FlightRecord, FlightRecords, RateParameters, RiskSummary};

/// Compute the risk summary of a group of records.
///
/// With `passenger_data` the passenger figure is the sum of the records'
/// passenger counts (missing cells add nothing); without it every record
/// counts as [`PASSENGERS_PER_RECORD`] passengers. An empty group yields an
/// all-zero summary.
pub fn summarize<'a, I>(records: I, passenger_data: bool, rates: &RateParameters) -> RiskSummary
where
    I: IntoIterator<Item = &'a FlightRecord>,
{
    let mut total_delay = 0.0;
    let mut passenger_sum = 0.0;
    let mut flights = 0usize;
    let mut delay_observations = 0usize;

    for record in records {
        flights += 1;
        if let Some(delay) = record.delay_minutes {
            total_delay += delay;
            delay_observations += 1;
        }
        if let Some(passengers) = record.passengers {
            passenger_sum += passengers;
        }
    }

    let passengers = if passenger_data {
        passenger_sum
    } else {
        flights as f64 * PASSENGERS_PER_RECORD
    };

    let compensation = (total_delay / 60.0) * passengers * rates.compensation_rate;
    let operational_cost = total_delay * rates.operational_cost_rate;
    let insurance_cost = operational_cost * rates.insurance_multiplier;
    let total_risk = compensation + operational_cost + insurance_cost;

    RiskSummary {
        total_delay,
        compensation,
        operational_cost,
        insurance_cost,
        total_risk,
        passengers,
        flights,
        delay_observations,
    }
}

/// Risk summary for one airline. An airline with no records gets zeros.
pub fn summarize_airline(records: &FlightRecords, airline: &str, rates: &RateParameters) -> AirlineRisk {
    AirlineRisk {
        airline: airline.to_string(),
        summary: summarize(records.for_airline(airline), records.has_passenger_data(), rates),
    }
}

/// One summary per distinct airline, in first-seen order.
pub fn summarize_by_airline(records: &FlightRecords, rates: &RateParameters) -> Vec<AirlineRisk> {
    records
        .grouped()
        .into_iter()
        .map(|(airline, group)| AirlineRisk {
            airline: airline.to_string(),
            summary: summarize(group, records.has_passenger_data(), rates),
        })
        .collect()
}
