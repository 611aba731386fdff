//! File-backed company profile store. The engine itself never touches disk;
//! this is the external collaborator that feeds it snapshots.

use std::{fs, path::Path};

use crate::{
    company::{Company, CURRENT_SCHEMA_VERSION},
    errors::StatementError,
};

/// Writes the company snapshot to disk atomically by staging to a temporary
/// file.
pub fn save_company_to_file(company: &Company, path: &Path) -> Result<(), StatementError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(company)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a company snapshot from disk, rejecting snapshots written by a newer
/// schema.
pub fn load_company_from_file(path: &Path) -> Result<Company, StatementError> {
    let data = fs::read_to_string(path)?;
    let company: Company = serde_json::from_str(&data)?;
    ensure_schema_support(company.schema_version)?;
    Ok(company)
}

fn ensure_schema_support(schema_version: u8) -> Result<(), StatementError> {
    if schema_version > CURRENT_SCHEMA_VERSION {
        return Err(StatementError::Persistence(format!(
            "company schema v{} is newer than supported v{}",
            schema_version, CURRENT_SCHEMA_VERSION
        )));
    }
    Ok(())
}
