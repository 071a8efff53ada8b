//! Score bookkeeping: the high-score table and lifetime gameplay statistics

use std::collections::HashMap;
use std::fmt;

use chrono::Local;

use crate::events::GameEvent;

/// Ship index recorded when no ship applies.
pub const INVALID_SHIP_INDEX: i32 = -1;

/// Default number of entries a high-score table keeps.
pub const MAX_HIGH_SCORES: usize = 15;

const VALID_SHIP_INDICES: std::ops::RangeInclusive<i32> = 0..=4;

/// One recorded high score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighScoreEntry {
    pub score: i32,
    pub date_earned: String,
    pub ship_index: i32,
}

impl fmt::Display for HighScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "High Score: {}, DateEarned: {}, ShipIndex: {}",
            self.score, self.date_earned, self.ship_index
        )
    }
}

/// Descending-sorted list of the best scores, capped at a fixed length.
///
/// Insertion is an O(n) scan for the first slot the incoming score meets or
/// beats; a new score ranks ahead of equal older scores, and the tail is
/// truncated back to capacity. A score that doesn't make the cut on a full
/// table leaves it unchanged.
///
/// # Examples
///
/// ```
/// use arcade_objectpool::HighScoreTable;
///
/// let mut table = HighScoreTable::with_capacity(3);
/// for score in [500, 300, 100] {
///     table.record(score, 0);
/// }
/// table.record(400, 1);
///
/// let scores: Vec<i32> = table.entries().iter().map(|e| e.score).collect();
/// assert_eq!(scores, [500, 400, 300]);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighScoreTable {
    entries: Vec<HighScoreEntry>,
    capacity: usize,
}

impl Default for HighScoreTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScoreTable {
    pub fn new() -> Self {
        Self::with_capacity(MAX_HIGH_SCORES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Record `score`, stamped with today's date. Returns whether the table
    /// changed.
    pub fn record(&mut self, score: i32, ship_index: i32) -> bool {
        self.record_dated(score, ship_index, today_stamp())
    }

    /// Record `score` with an explicit date stamp.
    pub fn record_dated(
        &mut self,
        score: i32,
        ship_index: i32,
        date_earned: impl Into<String>,
    ) -> bool {
        // Scores of zero are not worth keeping.
        if score <= 0 {
            return false;
        }

        // The list is maintained sorted, but re-sort in case a caller loaded
        // unsorted data into it.
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));

        let slot = self
            .entries
            .iter()
            .position(|entry| score >= entry.score)
            .unwrap_or(self.entries.len());

        if slot >= self.capacity {
            tracing::debug!(score, "high score not recorded");
            return false;
        }

        self.entries.insert(
            slot,
            HighScoreEntry {
                score,
                date_earned: date_earned.into(),
                ship_index,
            },
        );
        self.entries.truncate(self.capacity);
        true
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    /// The best recorded score, or 0 for an empty table.
    pub fn highest(&self) -> i32 {
        self.entries.first().map_or(0, |entry| entry.score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Today's date as `YYYY.MM.DD`.
fn today_stamp() -> String {
    Local::now().format("%Y.%m.%d").to_string()
}

/// Lifetime gameplay statistics, aggregated across sessions.
///
/// Subscribes naturally to the [`GameEvent`](crate::GameEvent) bus via
/// [`observe`](Self::observe); session totals land through
/// [`record_post_game`](Self::record_post_game).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStats {
    pub games_played: u32,
    pub enemies_defeated: u32,
    pub score_multipliers_collected: u32,
    pub enemies_defeated_with_boost: u32,
    pub projectiles_fired: u32,
    pub highest_score_multiplier: i32,
    pub longest_session_seconds: f32,
    pub time_on_stats_screen_seconds: f32,
    ship_selected_counts: HashMap<i32, u32>,
}

impl GameStats {
    pub fn new() -> Self {
        let mut stats = Self {
            games_played: 0,
            enemies_defeated: 0,
            score_multipliers_collected: 0,
            enemies_defeated_with_boost: 0,
            projectiles_fired: 0,
            highest_score_multiplier: 1,
            longest_session_seconds: 0.0,
            time_on_stats_screen_seconds: 0.0,
            ship_selected_counts: HashMap::new(),
        };
        stats.reset();
        stats
    }

    /// Zero every counter and re-seed the per-ship table.
    pub fn reset(&mut self) {
        self.games_played = 0;
        self.enemies_defeated = 0;
        self.score_multipliers_collected = 0;
        self.enemies_defeated_with_boost = 0;
        self.projectiles_fired = 0;
        self.highest_score_multiplier = 1;
        self.longest_session_seconds = 0.0;
        self.time_on_stats_screen_seconds = 0.0;

        self.ship_selected_counts.clear();
        for ship_index in VALID_SHIP_INDICES {
            self.ship_selected_counts.insert(ship_index, 0);
        }
    }

    pub fn is_ship_index_valid(ship_index: i32) -> bool {
        VALID_SHIP_INDICES.contains(&ship_index)
    }

    /// Count a ship selection. An index outside the known ship roster is
    /// logged and ignored.
    pub fn increment_ship_selected_count(&mut self, ship_index: i32) {
        if !Self::is_ship_index_valid(ship_index) {
            tracing::warn!(ship_index, "ignoring selection of unknown ship index");
            return;
        }
        *self.ship_selected_counts.entry(ship_index).or_insert(0) += 1;
    }

    pub fn ship_selected_count(&self, ship_index: i32) -> u32 {
        self.ship_selected_counts.get(&ship_index).copied().unwrap_or(0)
    }

    pub fn add_time_on_stats_screen(&mut self, seconds: f32) {
        self.time_on_stats_screen_seconds += seconds;
    }

    /// Fold one finished session into the lifetime totals.
    pub fn record_post_game(
        &mut self,
        enemies_defeated: u32,
        score_multipliers_collected: u32,
        enemies_defeated_with_boost: u32,
        projectiles_fired: u32,
        score_multiplier: i32,
        session_seconds: f32,
    ) {
        self.games_played += 1;
        self.enemies_defeated += enemies_defeated;
        self.score_multipliers_collected += score_multipliers_collected;
        self.enemies_defeated_with_boost += enemies_defeated_with_boost;
        self.projectiles_fired += projectiles_fired;
        self.highest_score_multiplier = self.highest_score_multiplier.max(score_multiplier);
        self.longest_session_seconds = self.longest_session_seconds.max(session_seconds);
    }

    /// Event-bus entry point: fold a single gameplay event into the totals.
    pub fn observe(&mut self, event: &GameEvent) {
        match event {
            GameEvent::EnemyDestroyed { .. } => self.enemies_defeated += 1,
            GameEvent::ScoreMultiplierCollected { .. } => {
                self.score_multipliers_collected += 1;
            }
            GameEvent::PlayerShipDestroyed | GameEvent::GameEnded { .. } => {}
        }
    }
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_of(scores: &[i32], capacity: usize) -> HighScoreTable {
        let mut table = HighScoreTable::with_capacity(capacity);
        for &score in scores {
            table.record_dated(score, 0, "2024.01.01");
        }
        table
    }

    fn scores(table: &HighScoreTable) -> Vec<i32> {
        table.entries().iter().map(|e| e.score).collect()
    }

    #[test]
    fn test_insertion_evicts_the_tail() {
        let mut table = table_of(&[500, 300, 100], 3);
        assert!(table.record_dated(400, 1, "2024.02.02"));
        assert_eq!(scores(&table), [500, 400, 300]);
        assert_eq!(table.entries()[1].ship_index, 1);
    }

    #[test]
    fn test_low_score_leaves_full_table_unchanged() {
        let mut table = table_of(&[500, 300, 100], 3);
        assert!(!table.record_dated(50, 0, "2024.02.02"));
        assert_eq!(scores(&table), [500, 300, 100]);
    }

    #[test]
    fn test_partial_table_accepts_trailing_score() {
        let mut table = table_of(&[500, 300], 3);
        assert!(table.record_dated(100, 0, "2024.02.02"));
        assert_eq!(scores(&table), [500, 300, 100]);
    }

    #[test]
    fn test_zero_and_negative_scores_are_not_recorded() {
        let mut table = HighScoreTable::new();
        assert!(!table.record_dated(0, 0, "2024.01.01"));
        assert!(!table.record_dated(-10, 0, "2024.01.01"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_new_score_ranks_ahead_of_equal_older_score() {
        let mut table = table_of(&[500, 300], 3);
        assert!(table.record_dated(300, 4, "2024.02.02"));
        assert_eq!(scores(&table), [500, 300, 300]);
        assert_eq!(table.entries()[1].ship_index, 4);
    }

    #[test]
    fn test_score_beating_only_the_last_slot_is_admitted() {
        let mut table = table_of(&[500, 400, 200], 3);
        assert!(table.record_dated(200, 2, "2024.02.02"));
        assert_eq!(scores(&table), [500, 400, 200]);
        assert_eq!(table.entries()[2].ship_index, 2);
    }

    #[test]
    fn test_highest_score() {
        assert_eq!(HighScoreTable::new().highest(), 0);
        let table = table_of(&[500, 300], 5);
        assert_eq!(table.highest(), 500);
    }

    #[test]
    fn test_unsorted_loaded_data_is_resorted_on_record() {
        let mut table = HighScoreTable::with_capacity(5);
        table.record_dated(100, 0, "2024.01.01");
        table.record_dated(900, 0, "2024.01.01");
        table.record_dated(400, 0, "2024.01.01");
        assert_eq!(scores(&table), [900, 400, 100]);
    }

    #[test]
    fn test_entry_display() {
        let entry = HighScoreEntry {
            score: 750,
            date_earned: "2024.06.15".into(),
            ship_index: 2,
        };
        assert_eq!(
            entry.to_string(),
            "High Score: 750, DateEarned: 2024.06.15, ShipIndex: 2"
        );
    }

    #[test]
    fn test_stats_reset_seeds_ship_table() {
        let stats = GameStats::new();
        for ship_index in 0..=4 {
            assert_eq!(stats.ship_selected_count(ship_index), 0);
        }
        assert_eq!(stats.highest_score_multiplier, 1);
    }

    #[test]
    fn test_invalid_ship_index_is_ignored() {
        let mut stats = GameStats::new();
        stats.increment_ship_selected_count(9);
        assert_eq!(stats.ship_selected_count(9), 0);

        stats.increment_ship_selected_count(2);
        assert_eq!(stats.ship_selected_count(2), 1);
    }

    #[test]
    fn test_post_game_totals_and_maxima() {
        let mut stats = GameStats::new();
        stats.record_post_game(10, 3, 2, 120, 8, 95.0);
        stats.record_post_game(5, 1, 0, 60, 4, 150.0);

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.enemies_defeated, 15);
        assert_eq!(stats.projectiles_fired, 180);
        assert_eq!(stats.highest_score_multiplier, 8);
        assert_eq!(stats.longest_session_seconds, 150.0);
    }

    #[test]
    fn test_observe_counts_events() {
        use crate::entities::Vec2;

        let mut stats = GameStats::new();
        stats.observe(&GameEvent::EnemyDestroyed {
            position: Vec2::new(10.0, 20.0),
        });
        stats.observe(&GameEvent::ScoreMultiplierCollected { value: 2 });
        stats.observe(&GameEvent::PlayerShipDestroyed);

        assert_eq!(stats.enemies_defeated, 1);
        assert_eq!(stats.score_multipliers_collected, 1);
    }
}
