use thiserror::Error;

use crate::domain::{Coordination, CoordinationGroup};

/// Errors that abort a coordination-sheet parse. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum CoordinationParseError {
    #[error("line {line}: group header before any coordination id")]
    GroupBeforeId { line: usize },
    #[error("line {line}: item before any group header")]
    ItemBeforeGroup { line: usize },
}

/// Parse the block-structured coordination sheet.
///
/// `**ID**` opens a record, `--name--` opens a group inside the current
/// record, and every other non-blank line is an item of the most recent
/// group. Records come out in file order.
pub fn parse_coordinations(input: &str) -> Result<Vec<Coordination>, CoordinationParseError> {
    let mut coordinations: Vec<Coordination> = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();

        if trimmed.starts_with("**") && trimmed.ends_with("**") {
            coordinations.push(Coordination::new(trimmed.trim_matches('*')));
        } else if trimmed.starts_with("--") && trimmed.ends_with("--") {
            let current = coordinations
                .last_mut()
                .ok_or(CoordinationParseError::GroupBeforeId { line })?;
            current
                .groups
                .push(CoordinationGroup::new(trimmed.trim_matches('-')));
        } else if !trimmed.is_empty() {
            let group = coordinations
                .last_mut()
                .and_then(|c| c.groups.last_mut())
                .ok_or(CoordinationParseError::ItemBeforeGroup { line })?;
            group.items.push(trimmed.to_string());
        }
    }

    Ok(coordinations)
}
