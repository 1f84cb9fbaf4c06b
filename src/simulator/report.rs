//! Simulation report generation.

use crate::runner::RunnerDifficulty;
use serde::Serialize;

/// Outcome of one simulated life.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub final_score: u64,
    pub survival_ms: f64,
    pub coins: u32,
    pub swipes: u32,
    /// Still alive when the time cap hit.
    pub capped: bool,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub difficulty: RunnerDifficulty,
    pub num_runs: u32,
    pub runs_capped: u32,

    pub avg_final_score: f64,
    pub median_final_score: u64,
    pub min_final_score: u64,
    pub max_final_score: u64,
    pub avg_survival_ms: f64,
    pub avg_coins: f64,
    pub avg_swipes: f64,

    pub runs: Vec<RunStats>,
}

fn mean<I: Iterator<Item = f64>>(values: I, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        values.sum::<f64>() / count as f64
    }
}

impl SimReport {
    pub fn from_runs(difficulty: RunnerDifficulty, runs: Vec<RunStats>) -> Self {
        let n = runs.len();
        let mut scores: Vec<u64> = runs.iter().map(|r| r.final_score).collect();
        scores.sort_unstable();

        Self {
            difficulty,
            num_runs: n as u32,
            runs_capped: runs.iter().filter(|r| r.capped).count() as u32,
            avg_final_score: mean(runs.iter().map(|r| r.final_score as f64), n),
            median_final_score: scores.get(n / 2).copied().unwrap_or(0),
            min_final_score: scores.first().copied().unwrap_or(0),
            max_final_score: scores.last().copied().unwrap_or(0),
            avg_survival_ms: mean(runs.iter().map(|r| r.survival_ms), n),
            avg_coins: mean(runs.iter().map(|r| r.coins as f64), n),
            avg_swipes: mean(runs.iter().map(|r| r.swipes as f64), n),
            runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Difficulty: {}   Runs: {} ({} reached the time cap)\n\n",
            self.difficulty.name(),
            self.num_runs,
            self.runs_capped
        ));

        report.push_str("── SCORE ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Score:     {:.1}\n", self.avg_final_score));
        report.push_str(&format!("  Median Final Score:  {}\n", self.median_final_score));
        report.push_str(&format!(
            "  Range:               {} - {}\n\n",
            self.min_final_score, self.max_final_score
        ));

        report.push_str("── RUNS ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Survival:        {:.1}s\n",
            self.avg_survival_ms / 1000.0
        ));
        report.push_str(&format!("  Avg Coins:           {:.1}\n", self.avg_coins));
        report.push_str(&format!("  Avg Swipes:          {:.1}\n", self.avg_swipes));

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u64, capped: bool) -> RunStats {
        RunStats {
            final_score: score,
            survival_ms: score as f64 * 100.0,
            coins: 1,
            swipes: 2,
            capped,
        }
    }

    #[test]
    fn test_aggregates() {
        let report = SimReport::from_runs(
            RunnerDifficulty::Novice,
            vec![run(10, false), run(30, true), run(20, false)],
        );
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.runs_capped, 1);
        assert!((report.avg_final_score - 20.0).abs() < 1e-9);
        assert_eq!(report.median_final_score, 20);
        assert_eq!(report.min_final_score, 10);
        assert_eq!(report.max_final_score, 30);
        assert!((report.avg_survival_ms - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(RunnerDifficulty::Master, Vec::new());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_final_score, 0.0);
        assert!(report.to_text().contains("Master"));
    }

    #[test]
    fn test_json_has_fields() {
        let report = SimReport::from_runs(RunnerDifficulty::Novice, vec![run(5, false)]);
        let json: serde_json::Value =
            serde_json::from_str(&report.to_json()).expect("valid json");
        assert_eq!(json["num_runs"], 1);
        assert_eq!(json["difficulty"], "Novice");
        assert_eq!(json["runs"][0]["final_score"], 5);
    }
}
