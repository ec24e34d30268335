use anchor_lang::prelude::*;
use solana_program::keccak;

/// Mixes the clock and the current ticket list into a 32 byte seed.
///
/// This is NOT a secure randomness source. Whoever produces the block (or
/// chooses when the operator's transaction lands) can predict the slot and
/// timestamp and therefore the winner. Draws are reproducible from the same
/// inputs.
pub fn draw_entropy(slot: u64, unix_timestamp: i64, players: &[Pubkey]) -> [u8; 32] {
    let slot_bytes = slot.to_le_bytes();
    let ts_bytes = unix_timestamp.to_le_bytes();

    let mut seeds: Vec<&[u8]> = Vec::with_capacity(players.len() + 2);
    seeds.push(&slot_bytes);
    seeds.push(&ts_bytes);
    seeds.extend(players.iter().map(|p| p.as_ref()));

    keccak::hashv(&seeds).to_bytes()
}

/// Reduces a seed to an index into a list of `len` tickets.
/// Returns `None` when there is nothing to pick from.
pub fn winner_index(entropy: &[u8; 32], len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let mut head = [0u8; 8];
    head.copy_from_slice(&entropy[..8]);

    Some((u64::from_le_bytes(head) % len as u64) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_is_deterministic() {
        let players = vec![Pubkey::new_unique(), Pubkey::new_unique()];

        assert_eq!(
            draw_entropy(42, 1_700_000_000, &players),
            draw_entropy(42, 1_700_000_000, &players)
        );
    }

    #[test]
    fn test_entropy_depends_on_every_input() {
        let players = vec![Pubkey::new_unique(), Pubkey::new_unique()];
        let base = draw_entropy(42, 1_700_000_000, &players);

        assert_ne!(base, draw_entropy(43, 1_700_000_000, &players));
        assert_ne!(base, draw_entropy(42, 1_700_000_001, &players));

        let reordered = vec![players[1], players[0]];
        assert_ne!(base, draw_entropy(42, 1_700_000_000, &reordered));
    }

    #[test]
    fn test_winner_index_in_range() {
        let players: Vec<Pubkey> = (0..7).map(|_| Pubkey::new_unique()).collect();

        for slot in 0..64u64 {
            let entropy = draw_entropy(slot, 0, &players);
            let index = winner_index(&entropy, players.len()).unwrap();
            assert!(index < players.len());
        }
    }

    #[test]
    fn test_winner_index_reads_first_eight_bytes() {
        let mut entropy = [0xffu8; 32];
        entropy[..8].copy_from_slice(&10u64.to_le_bytes());

        assert_eq!(winner_index(&entropy, 3), Some(1));
        assert_eq!(winner_index(&entropy, 1), Some(0));
    }

    #[test]
    fn test_winner_index_empty() {
        assert_eq!(winner_index(&[7u8; 32], 0), None);
    }
}
