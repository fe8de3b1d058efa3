pub const PARALLEL_THRESHOLD: usize = 4 * 1024; // generate keystream in parallel if input size gt 4 KiB

/// Counter block `i` places after `initial`, incremented as one 128-bit big-endian integer.
#[inline(always)]
pub(crate) fn nth_counter_block(initial: u128, i: usize) -> [u8; 16] {
    initial.wrapping_add(i as u128).to_be_bytes()
}

#[inline(always)]
pub(crate) fn xor_into(out: &mut [u8], keystream: &[u8; 16], chunk: &[u8]) {
    for ((o, k), c) in out.iter_mut().zip(keystream).zip(chunk) {
        *o = k ^ c;
    }
}
