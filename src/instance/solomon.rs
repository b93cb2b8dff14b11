use std::fs;
use std::path::Path;

use tracing::info;

use super::Instance;
use crate::domain::types::{Customer, Depot};
use crate::error::SolverError;

/// Loads a Solomon-format instance from disk.
pub fn load_instance(path: impl AsRef<Path>) -> Result<Instance, SolverError> {
    let text = fs::read_to_string(path.as_ref())?;
    let instance = parse_solomon(&text)?;
    info!(
        "Loaded instance with {} customers from {}",
        instance.customers.len(),
        path.as_ref().display()
    );
    Ok(instance)
}

/// Parses the Solomon benchmark text format.
///
/// After dropping blank lines, line index 3 carries the vehicle capacity as
/// its last token and customer rows start at index 6 with columns
/// `cust_no x y demand ready_time due_date service`. The first row is the
/// depot. Any malformed row fails the whole parse; a partial instance is
/// never returned.
pub fn parse_solomon(text: &str) -> Result<Instance, SolverError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < 7 {
        return Err(SolverError::Parse(format!(
            "expected at least 7 non-empty lines, got {}",
            lines.len()
        )));
    }

    let capacity_token = lines[3]
        .split_whitespace()
        .last()
        .ok_or_else(|| SolverError::Parse("missing vehicle capacity line".to_string()))?;
    let vehicle_capacity: f64 = capacity_token.parse().map_err(|_| {
        SolverError::Parse(format!("invalid vehicle capacity '{capacity_token}'"))
    })?;

    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(lines.len() - 6);
    for (row_idx, line) in lines[6..].iter().enumerate() {
        let fields = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| {
                    SolverError::Parse(format!(
                        "non-numeric field '{token}' in customer row {row_idx}"
                    ))
                })
            })
            .collect::<Result<Vec<f64>, SolverError>>()?;
        if fields.len() != 7 {
            return Err(SolverError::Parse(format!(
                "expected 7 columns in customer row {row_idx}, got {}",
                fields.len()
            )));
        }
        rows.push(fields);
    }

    let depot_row = &rows[0];
    let depot = Depot {
        x: depot_row[1],
        y: depot_row[2],
    };

    let customers = rows[1..]
        .iter()
        .map(|fields| Customer {
            id: fields[0] as usize,
            x: fields[1],
            y: fields[2],
            demand: fields[3],
            ready_time: fields[4],
            due_date: fields[5],
            service_duration: fields[6],
        })
        .collect();

    Ok(Instance {
        customers,
        depot,
        vehicle_capacity,
    })
}
