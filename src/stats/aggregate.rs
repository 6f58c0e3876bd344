//! Pure commit-count aggregation.
//!
//! Two output shapes from the same input:
//! - `chart_data`: one line per team+repo label, aligned to a global sorted
//!   date axis with explicit zeros for gap days.
//! - `commit_table`: one row per physical tracked repo per day with commits.
//!
//! The asymmetry is intentional: the chart merges rows that share a team and
//! repo name, the table keeps every tracked row separate.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::github::CommitRecord;
use crate::models::{ChartData, ChartDataset, CommitTableRow, TrackedRepo};

/// A tracked repo paired with its fetched commit batch.
#[derive(Debug, Clone)]
pub struct RepoCommits {
    pub repo: TrackedRepo,
    pub commits: Vec<CommitRecord>,
}

/// Truncate an ISO-8601 timestamp to day granularity (`YYYY-MM-DD`).
fn commit_day(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

/// Deterministic per-series stroke color: the hue walks the color wheel in
/// 45-degree steps, so the same tracked-repo ordering always renders the
/// same colors.
pub fn series_color(index: usize) -> String {
    format!("hsl({}, 90%, 60%)", (index * 45) % 360)
}

/// Build the date-aligned multi-series chart payload.
///
/// Labels are the sorted distinct days observed across every batch
/// (lexicographic order is chronological for ISO dates). Datasets appear in
/// first-encountered series order; a batch with no commits still gets a
/// dataset, all zeros.
pub fn chart_data(batches: &[RepoCommits]) -> ChartData {
    let mut dates: BTreeSet<String> = BTreeSet::new();
    let mut series_order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, HashMap<String, u64>> = HashMap::new();

    for batch in batches {
        let key = batch.repo.series_key();
        if !counts.contains_key(&key) {
            series_order.push(key.clone());
        }
        let per_date = counts.entry(key).or_default();

        for commit in &batch.commits {
            let day = commit_day(&commit.author_date);
            dates.insert(day.to_string());
            *per_date.entry(day.to_string()).or_insert(0) += 1;
        }
    }

    let labels: Vec<String> = dates.into_iter().collect();

    let datasets = series_order
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let per_date = &counts[key];
            ChartDataset {
                label: key.clone(),
                data: labels
                    .iter()
                    .map(|d| per_date.get(d).copied().unwrap_or(0))
                    .collect(),
                border_color: series_color(i),
                tension: 0.35,
                border_width: 3,
            }
        })
        .collect();

    ChartData { labels, datasets }
}

/// Flatten every batch into per-day table rows.
///
/// Each batch is counted against its own local date map, so two tracked rows
/// sharing a team and repo name stay separate here. Days without commits
/// produce no row.
pub fn commit_table(batches: &[RepoCommits]) -> Vec<CommitTableRow> {
    let mut rows = Vec::new();

    for batch in batches {
        let mut per_date: BTreeMap<&str, u64> = BTreeMap::new();
        for commit in &batch.commits {
            *per_date.entry(commit_day(&commit.author_date)).or_insert(0) += 1;
        }

        rows.extend(per_date.into_iter().map(|(date, count)| CommitTableRow {
            team: batch.repo.team_name.clone(),
            repo: batch.repo.repo_name.clone(),
            date: date.to_string(),
            commit_count: count,
        }));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn tracked(id: i64, team: &str, username: &str, repo: &str) -> TrackedRepo {
        TrackedRepo {
            id,
            team_name: team.to_string(),
            github_username: username.to_string(),
            repo_name: repo.to_string(),
            created_at: Utc::now(),
        }
    }

    fn commits(timestamps: &[&str]) -> Vec<CommitRecord> {
        timestamps
            .iter()
            .map(|t| CommitRecord {
                author_date: t.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_single_repo_chart_and_table() {
        let batches = vec![RepoCommits {
            repo: tracked(1, "acme", "alice", "widget"),
            commits: commits(&[
                "2024-01-02T10:00:00Z",
                "2024-01-02T18:30:00Z",
                "2024-01-03T09:15:00Z",
            ]),
        }];

        let chart = chart_data(&batches);
        assert_eq!(chart.labels, vec!["2024-01-02", "2024-01-03"]);
        assert_eq!(chart.datasets.len(), 1);
        assert_eq!(chart.datasets[0].label, "acme (widget)");
        assert_eq!(chart.datasets[0].data, vec![2, 1]);

        let table = commit_table(&batches);
        assert_eq!(
            table,
            vec![
                CommitTableRow {
                    team: "acme".to_string(),
                    repo: "widget".to_string(),
                    date: "2024-01-02".to_string(),
                    commit_count: 2,
                },
                CommitTableRow {
                    team: "acme".to_string(),
                    repo: "widget".to_string(),
                    date: "2024-01-03".to_string(),
                    commit_count: 1,
                },
            ]
        );
    }

    #[test]
    fn test_zero_fill_across_disjoint_dates() {
        let batches = vec![
            RepoCommits {
                repo: tracked(1, "acme", "alice", "widget"),
                commits: commits(&["2024-01-01T08:00:00Z"]),
            },
            RepoCommits {
                repo: tracked(2, "beta", "bob", "gadget"),
                commits: commits(&["2024-01-03T08:00:00Z"]),
            },
        ];

        let chart = chart_data(&batches);
        assert_eq!(chart.labels, vec!["2024-01-01", "2024-01-03"]);

        for dataset in &chart.datasets {
            assert_eq!(dataset.data.len(), chart.labels.len());
        }
        assert_eq!(chart.datasets[0].data, vec![1, 0]);
        assert_eq!(chart.datasets[1].data, vec![0, 1]);
    }

    #[test]
    fn test_labels_sorted_regardless_of_fetch_order() {
        let batches = vec![
            RepoCommits {
                repo: tracked(1, "acme", "alice", "widget"),
                commits: commits(&["2024-03-15T08:00:00Z", "2024-01-01T08:00:00Z"]),
            },
            RepoCommits {
                repo: tracked(2, "beta", "bob", "gadget"),
                commits: commits(&["2024-02-10T08:00:00Z"]),
            },
        ];

        let chart = chart_data(&batches);
        assert_eq!(chart.labels, vec!["2024-01-01", "2024-02-10", "2024-03-15"]);
    }

    #[test]
    fn test_same_team_and_repo_merge_in_chart_but_not_table() {
        // Two tracked rows differ only by username: one chart series, two
        // independent table row sets.
        let batches = vec![
            RepoCommits {
                repo: tracked(1, "acme", "alice", "widget"),
                commits: commits(&["2024-01-02T10:00:00Z"]),
            },
            RepoCommits {
                repo: tracked(2, "acme", "bob", "widget"),
                commits: commits(&["2024-01-02T11:00:00Z", "2024-01-04T11:00:00Z"]),
            },
        ];

        let chart = chart_data(&batches);
        assert_eq!(chart.datasets.len(), 1);
        assert_eq!(chart.datasets[0].label, "acme (widget)");
        assert_eq!(chart.labels, vec!["2024-01-02", "2024-01-04"]);
        assert_eq!(chart.datasets[0].data, vec![2, 1]);

        let table = commit_table(&batches);
        assert_eq!(table.len(), 3);
        assert_eq!(table[0].date, "2024-01-02");
        assert_eq!(table[0].commit_count, 1);
        assert_eq!(table[1].date, "2024-01-02");
        assert_eq!(table[1].commit_count, 1);
        assert_eq!(table[2].date, "2024-01-04");
        assert_eq!(table[2].commit_count, 1);
    }

    #[test]
    fn test_repo_with_no_commits_still_gets_a_dataset() {
        let batches = vec![
            RepoCommits {
                repo: tracked(1, "acme", "alice", "widget"),
                commits: commits(&["2024-01-02T10:00:00Z"]),
            },
            RepoCommits {
                repo: tracked(2, "beta", "bob", "empty"),
                commits: Vec::new(),
            },
        ];

        let chart = chart_data(&batches);
        assert_eq!(chart.datasets.len(), 2);
        assert_eq!(chart.datasets[1].label, "beta (empty)");
        assert_eq!(chart.datasets[1].data, vec![0]);

        // No table rows for the empty repo.
        let table = commit_table(&batches);
        assert!(table.iter().all(|row| row.commit_count > 0));
        assert!(table.iter().all(|row| row.repo != "empty"));
    }

    #[test]
    fn test_empty_input() {
        let chart = chart_data(&[]);
        assert!(chart.labels.is_empty());
        assert!(chart.datasets.is_empty());

        assert!(commit_table(&[]).is_empty());
    }

    #[test]
    fn test_series_color_steps_and_wraps() {
        assert_eq!(series_color(0), "hsl(0, 90%, 60%)");
        assert_eq!(series_color(1), "hsl(45, 90%, 60%)");
        assert_eq!(series_color(7), "hsl(315, 90%, 60%)");
        assert_eq!(series_color(8), "hsl(0, 90%, 60%)");
    }
}
