use super::Position;

impl Position {
    /// Count the move paths of length `depth` from this position.
    ///
    /// Only moves that attempt to `Done` are followed, so the count matches
    /// the standard perft tables for positions without under-promotions.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mover = self.current_mover();
        let mut nodes = 0;
        for mv in mover.legal_moves() {
            let transition = mover.attempt(mv);
            if !transition.status().is_done() {
                continue;
            }
            nodes += if depth == 1 {
                1
            } else {
                transition.position().perft(depth - 1)
            };
        }
        nodes
    }
}
