//! Best score and play count, kept between launches.

use crate::utils::persistence::{load_json_or_default, save_json};
use serde::{Deserialize, Serialize};
use std::io;

pub const RECORDS_FILE: &str = "records.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreRecords {
    pub best_score: u64,
    pub games_played: u32,
    /// Unix timestamp of the run that set `best_score`.
    pub best_set_at: Option<i64>,
}

impl ScoreRecords {
    pub fn load() -> Self {
        load_json_or_default(RECORDS_FILE)
    }

    pub fn save(&self) -> io::Result<()> {
        save_json(RECORDS_FILE, self)
    }

    /// Fold one finished run in. Returns true if it set a new best.
    pub fn record_game(&mut self, final_score: u64, finished_at: i64) -> bool {
        self.games_played += 1;
        if final_score > self.best_score {
            self.best_score = final_score;
            self.best_set_at = Some(finished_at);
            true
        } else {
            false
        }
    }
}
