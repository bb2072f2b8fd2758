//! Card Id Generation
//!
//! Session-unique ids: 9 lowercase base-36 characters drawn from a
//! SplitMix64 stream, re-drawn on collision with ids already in use.

use std::collections::HashSet;

const ID_LEN: usize = 9;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone)]
pub struct IdGenerator {
    state: u64,
}

impl IdGenerator {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seeded from the wall clock
    pub fn from_clock() -> Self {
        Self::new(chrono::Utc::now().timestamp_millis() as u64)
    }

    fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn candidate(&mut self) -> String {
        let mut n = self.next_u64();
        (0..ID_LEN)
            .map(|_| {
                let c = ALPHABET[(n % 36) as usize] as char;
                n /= 36;
                c
            })
            .collect()
    }

    /// Next id not contained in `taken`
    pub fn fresh(&mut self, taken: &HashSet<String>) -> String {
        loop {
            let id = self.candidate();
            if !taken.contains(&id) {
                return id;
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::from_clock()
    }
}
