use std::fmt;

/// Counters collected during one A* search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes moved from the frontier into the sealed set.
    pub expanded: usize,
    /// Neighbor candidates that passed the bounds, wall and sealed checks.
    pub generated: usize,
    pub inserted: usize,
    /// Frontier entries displaced by a strictly cheaper candidate.
    pub replaced: usize,
    /// Candidates dropped because the frontier already held one at least as cheap.
    pub rejected: usize,
    pub peak_frontier: usize,
    pub path_moves: Option<usize>,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "A* Search Statistics:")?;
        match self.path_moves {
            Some(moves) => writeln!(f, "Path Moves: {}", moves)?,
            None => writeln!(f, "Path Moves: none (no path)")?,
        }
        writeln!(f, "Nodes Expanded: {}", self.expanded)?;
        writeln!(f, "Candidates Generated: {}", self.generated)?;
        writeln!(f, "Frontier Inserts: {}", self.inserted)?;
        writeln!(f, "Frontier Replacements: {}", self.replaced)?;
        writeln!(f, "Candidates Rejected: {}", self.rejected)?;
        writeln!(f, "Peak Frontier Size: {}", self.peak_frontier)?;
        Ok(())
    }
}

/// Aggregate over a batch of A*/BFS comparisons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub runs: usize,
    pub solved: usize,
    pub mismatches: usize,
    pub total_expanded: usize,
    pub total_moves: usize,
    pub total_time_us: u64,
}

impl BatchSummary {
    pub fn record(&mut self, moves: Option<usize>, expanded: usize, time_us: u64, mismatch: bool) {
        self.runs += 1;
        if let Some(moves) = moves {
            self.solved += 1;
            self.total_moves += moves;
        }
        if mismatch {
            self.mismatches += 1;
        }
        self.total_expanded += expanded;
        self.total_time_us += time_us;
    }

    pub fn solve_rate(&self) -> f64 {
        if self.runs > 0 {
            self.solved as f64 / self.runs as f64
        } else {
            0.0
        }
    }

    pub fn average_expanded(&self) -> f64 {
        if self.runs > 0 {
            self.total_expanded as f64 / self.runs as f64
        } else {
            0.0
        }
    }

    pub fn average_moves(&self) -> f64 {
        if self.solved > 0 {
            self.total_moves as f64 / self.solved as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Runs: {}", self.runs)?;
        writeln!(f, "Solved: {} ({:.1}%)", self.solved, self.solve_rate() * 100.0)?;
        writeln!(f, "Average Path Moves: {:.2}", self.average_moves())?;
        writeln!(f, "Average Nodes Expanded: {:.2}", self.average_expanded())?;
        writeln!(f, "Total A* Time: {}us", self.total_time_us)?;
        if self.mismatches > 0 {
            writeln!(f, "⚠ A*/BFS mismatches: {}", self.mismatches)?;
        } else {
            writeln!(f, "✓ A* matched BFS on every run")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_averages_over_solved_runs() {
        let mut summary = BatchSummary::default();
        summary.record(Some(4), 10, 5, false);
        summary.record(None, 6, 3, false);
        summary.record(Some(8), 20, 7, false);

        assert_eq!(summary.runs, 3);
        assert_eq!(summary.solved, 2);
        assert!((summary.average_moves() - 6.0).abs() < f64::EPSILON);
        assert!((summary.average_expanded() - 12.0).abs() < f64::EPSILON);
        assert_eq!(summary.total_time_us, 15);
    }

    #[test]
    fn empty_summary_has_zero_rates() {
        let summary = BatchSummary::default();
        assert_eq!(summary.solve_rate(), 0.0);
        assert_eq!(summary.average_moves(), 0.0);
        assert!(summary.to_string().contains("matched BFS"));
    }

    #[test]
    fn stats_display_reports_missing_path() {
        let stats = SearchStats::default();
        assert!(stats.to_string().contains("none (no path)"));
    }
}
