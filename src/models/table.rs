use serde::{Deserialize, Serialize};

/// One row of the commit summary table: a single tracked repo's commit count
/// on a single day. Days with no commits produce no row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitTableRow {
    pub team: String,
    pub repo: String,
    pub date: String,
    pub commit_count: u64,
}
