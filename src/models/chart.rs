use serde::{Deserialize, Serialize};

/// Multi-series chart payload: every dataset's `data` is aligned to `labels`
/// index-for-index, with explicit zeros for dates the series has no commits on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// One line in the chart. Field names follow Chart.js conventions on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<u64>,
    pub border_color: String,
    pub tension: f64,
    pub border_width: u32,
}
