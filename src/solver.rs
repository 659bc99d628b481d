//! Pruned depth-first search over the grid.
//!
//! A search starts at every usable cell and extends the path one adjacent,
//! unvisited cell at a time. The trie cursor advances with the path, so a
//! branch is dropped the moment its letters stop being a dictionary prefix.
//! Each cell can be used once per path, which bounds the depth by the number
//! of usable cells.

use std::collections::BTreeSet;

use rayon::prelude::*;

use crate::config::SearchConfig;
use crate::error::{Result, SquaredleError};
use crate::grid::Grid;
use crate::trie::{Trie, TrieNode};

/// Distinct words found by a solve
pub type WordSet = BTreeSet<String>;

/// Counters collected during a solve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells stepped onto, including pruned steps
    pub visits: u64,
    /// Steps abandoned because no word has that prefix
    pub pruned: u64,
    /// Words recorded, counting duplicates found along different paths
    pub found: u64,
}

impl SearchStats {
    fn merge(mut self, other: Self) -> Self {
        self.visits += other.visits;
        self.pruned += other.pruned;
        self.found += other.found;
        self
    }
}

/// Cells already on the current path, one bit per flattened index
#[derive(Debug, Clone)]
struct Visited {
    bits: Vec<u64>,
}

impl Visited {
    fn new(cells: usize) -> Self {
        Self {
            bits: vec![0; cells.div_ceil(64)],
        }
    }

    fn contains(&self, index: usize) -> bool {
        self.bits[index / 64] & (1u64 << (index % 64)) != 0
    }

    fn insert(&mut self, index: usize) {
        self.bits[index / 64] |= 1u64 << (index % 64);
    }

    fn remove(&mut self, index: usize) {
        self.bits[index / 64] &= !(1u64 << (index % 64));
    }
}

/// State owned by one DFS from one start cell.
///
/// `path` and `visited` are extended before descending and restored on the
/// way back, so sibling branches always see the state of their parent.
struct Search<'a> {
    grid: &'a Grid,
    min_length: usize,
    max_visits: Option<u64>,
    path: String,
    visited: Visited,
    words: WordSet,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn new(grid: &'a Grid, config: &SearchConfig, max_visits: Option<u64>) -> Self {
        Self {
            grid,
            min_length: config.min_length(),
            max_visits,
            path: String::new(),
            visited: Visited::new(grid.len()),
            words: WordSet::new(),
            stats: SearchStats::default(),
        }
    }

    /// Step onto `cell` from the trie node of the current path.
    ///
    /// Returns `false` once the visit budget runs out.
    fn dfs(&mut self, cell: usize, node: &TrieNode) -> bool {
        self.stats.visits += 1;
        if self.max_visits.is_some_and(|limit| self.stats.visits > limit) {
            return false;
        }

        let Some(letter) = self.grid.cell(cell) else {
            return true;
        };
        let Some(node) = node.child(letter) else {
            self.stats.pruned += 1;
            return true;
        };

        self.path.push(letter);
        self.visited.insert(cell);

        if node.is_terminal() && self.path.chars().count() >= self.min_length {
            self.stats.found += 1;
            if !self.words.contains(&self.path) {
                self.words.insert(self.path.clone());
            }
        }

        let grid = self.grid;
        let mut within_budget = true;
        if !node.is_leaf() {
            for &next in grid.neighbours(cell) {
                if self.visited.contains(next) {
                    continue;
                }
                if !self.dfs(next, node) {
                    within_budget = false;
                    break;
                }
            }
        }

        self.visited.remove(cell);
        self.path.pop();
        within_budget
    }
}

/// Word finder for one grid against one dictionary
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    trie: &'a Trie,
    grid: Grid,
    config: SearchConfig,
}

impl<'a> Solver<'a> {
    pub fn new(trie: &'a Trie, grid: Grid, config: SearchConfig) -> Self {
        Self { trie, grid, config }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find every word in the grid
    pub fn solve(&self) -> WordSet {
        self.solve_with_stats().0
    }

    /// Find every word in the grid, along with search counters
    pub fn solve_with_stats(&self) -> (WordSet, SearchStats) {
        let mut search = Search::new(&self.grid, &self.config, None);
        for start in self.grid.usable_cells() {
            search.dfs(start, self.trie.root());
        }
        log::debug!(
            "solved {}x{} grid: {} words, {} visits, {} pruned",
            self.grid.rows(),
            self.grid.cols(),
            search.words.len(),
            search.stats.visits,
            search.stats.pruned
        );
        (search.words, search.stats)
    }

    /// Find every word, searching from each start cell in parallel
    pub fn solve_parallel(&self) -> WordSet {
        let starts: Vec<usize> = self.grid.usable_cells().collect();
        let (words, stats) = starts
            .par_iter()
            .map(|&start| {
                let mut search = Search::new(&self.grid, &self.config, None);
                search.dfs(start, self.trie.root());
                (search.words, search.stats)
            })
            .reduce(
                || (WordSet::new(), SearchStats::default()),
                |(mut words, stats), (other, other_stats)| {
                    words.extend(other);
                    (words, stats.merge(other_stats))
                },
            );
        log::debug!(
            "solved {}x{} grid on {} start cells: {} words, {} visits",
            self.grid.rows(),
            self.grid.cols(),
            starts.len(),
            words.len(),
            stats.visits
        );
        words
    }

    /// Find every word, giving up after `max_visits` cell visits.
    ///
    /// Fails with [`SquaredleError::SearchBudgetExceeded`] when the budget is
    /// spent before the search completes; no partial result is returned.
    pub fn solve_within(&self, max_visits: u64) -> Result<WordSet> {
        let mut search = Search::new(&self.grid, &self.config, Some(max_visits));
        for start in self.grid.usable_cells() {
            if !search.dfs(start, self.trie.root()) {
                log::warn!(
                    "search stopped after {} visits with {} words found",
                    max_visits,
                    search.words.len()
                );
                return Err(SquaredleError::SearchBudgetExceeded { limit: max_visits });
            }
        }
        Ok(search.words)
    }
}

/// Find every word of `grid` in `trie`
pub fn solve(grid: &Grid, trie: &Trie, config: &SearchConfig) -> WordSet {
    Solver::new(trie, grid.clone(), *config).solve()
}

/// Words ordered by length, then alphabetically
pub fn sorted_by_length(words: &WordSet) -> Vec<&str> {
    let mut sorted: Vec<&str> = words.iter().map(String::as_str).collect();
    sorted.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visited_tracks_bits_across_words() {
        let mut visited = Visited::new(130);
        visited.insert(3);
        visited.insert(129);
        assert!(visited.contains(3));
        assert!(visited.contains(129));
        assert!(!visited.contains(65));
        visited.remove(129);
        assert!(!visited.contains(129));
    }

    #[test]
    fn dead_prefixes_are_pruned() {
        let trie = Trie::build(["ab"]);
        let grid = Grid::new(&["ab", "cd"]).unwrap();
        let solver = Solver::new(&trie, grid, SearchConfig::new(2).unwrap());
        let (words, stats) = solver.solve_with_stats();

        assert_eq!(words.len(), 1);
        // b, c and d are dead as first letters; c and d are dead after a
        assert_eq!(stats.pruned, 5);
    }
}
