use std::collections::HashSet;

use crate::config::TOFU;
use crate::domain::Asset;

/// Rotation state of one mascot widget.
#[derive(Debug, Clone, Default)]
pub struct RotationState {
    /// The pool currently being cycled through (at most `poolSize` long)
    pub current_pool: Vec<Asset>,
    /// Position of the next asset to show
    pub pool_index: usize,
    /// File keys shown since the last reset (anti-repeat memory)
    pub shown: HashSet<String>,
}

impl RotationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly built pool and restart the cycle.
    /// Shown-history is forgotten once it covers more than the configured share of the manifest.
    pub fn install_pool(&mut self, pool: Vec<Asset>, manifest_len: usize) {
        for asset in &pool {
            self.shown.insert(asset.file.clone());
        }
        if self.shown.len() as f64 > manifest_len as f64 * TOFU.rotation.shown_reset_ratio {
            self.shown.clear();
        }

        self.current_pool = pool;
        self.pool_index = 0;
    }

    /// The asset to show now; moves the index on, wrapping at the end of the pool.
    pub fn advance(&mut self) -> Option<&Asset> {
        let len = self.current_pool.len();
        if len == 0 {
            return None;
        }
        let index = self.pool_index % len;
        self.pool_index = (index + 1) % len;
        self.current_pool.get(index)
    }

    pub fn has_shown(&self, file: &str) -> bool {
        self.shown.contains(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(file: &str) -> Asset {
        Asset {
            file: file.to_string(),
            time: Default::default(),
            mood: Default::default(),
            events: Default::default(),
        }
    }

    #[test]
    fn advance_cycles_in_order() {
        let mut state = RotationState::new();
        state.install_pool(vec![asset("a"), asset("b"), asset("c")], 100);

        let seen: Vec<String> = (0..7)
            .map(|_| state.advance().map(|a| a.file.clone()).unwrap())
            .collect();
        assert_eq!(seen, ["a", "b", "c", "a", "b", "c", "a"]);
        assert_eq!(state.pool_index, 1);
    }

    #[test]
    fn empty_pool_is_a_no_op() {
        let mut state = RotationState::new();
        assert!(state.advance().is_none());
        assert_eq!(state.pool_index, 0);
    }

    #[test]
    fn install_resets_index() {
        let mut state = RotationState::new();
        state.install_pool(vec![asset("a"), asset("b")], 100);
        state.advance();
        assert_eq!(state.pool_index, 1);

        state.install_pool(vec![asset("c")], 100);
        assert_eq!(state.pool_index, 0);
        assert_eq!(state.advance().map(|a| a.file.as_str()), Some("c"));
    }

    #[test]
    fn shown_history_resets_past_seventy_percent() {
        let mut state = RotationState::new();

        // 7 of 10 is not *more* than 70%
        state.install_pool((0..7).map(|i| asset(&i.to_string())).collect(), 10);
        assert_eq!(state.shown.len(), 7);

        // The 8th pushes it over, so the memory is wiped
        state.install_pool(vec![asset("7")], 10);
        assert!(state.shown.is_empty());
        assert_eq!(state.current_pool.len(), 1);

        state.install_pool(vec![asset("8")], 10);
        assert!(state.has_shown("8"));
        assert!(!state.has_shown("0"));
    }
}
