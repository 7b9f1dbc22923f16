/// Total score: the sum of the per-level coin counters.
pub fn total_score(level_coin_counts: &[u32]) -> u32 {
    level_coin_counts.iter().sum()
}

/// Format a millisecond duration as `S.s` seconds for the HUD.
pub fn format_elapsed(ms: u64) -> String {
    format!("{}.{}", ms / 1000, (ms % 1000) / 100)
}
