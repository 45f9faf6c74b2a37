pub fn single_bit_index(bit: u64) -> usize {
    bit.trailing_zeros() as usize
}

pub fn first_set_bit(bits: u64) -> u64 {
    1 << single_bit_index(bits)
}

/// The most significant set bit of a non-zero value.
pub fn last_set_bit(bits: u64) -> u64 {
    debug_assert!(bits != 0);
    1 << (63 - bits.leading_zeros())
}

/// Iterates the set bits of a value from least to most significant.
#[derive(Clone, Debug)]
pub struct SetBits(pub u64);

impl Iterator for SetBits {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.0 == 0 {
            return None;
        }

        let bit = first_set_bit(self.0);
        self.0 ^= bit;
        Some(bit)
    }
}
