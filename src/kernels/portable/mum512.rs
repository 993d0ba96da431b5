//! Scalar MUM512 driver: a 512-bit candidate-cryptographic hash built from
//! `MUM128`.

use super::primitive::{mum128, U128Pair};
use crate::kernels::constants::{MUM512_FINAL_CONST, MUM512_INIT, MUM512_ROUND_CONSTS};

/// Bytes per full block: four 128-bit words, one per register.
pub const BLOCK_SIZE: usize = 64;

/// Rounds run per block. Each round applies `MUM128` to every register
/// against a distinct round constant, then rotates the four registers one
/// position before the next round runs the same block data against a new
/// constant — the "apply, then rotate the accumulator group" shape used
/// elsewhere in this codebase's block compression step, generalised from
/// eight lane-groups down to four registers.
const ROUNDS: usize = 4;

fn load_u128_le(bytes: &[u8]) -> U128Pair {
    let mut lo = [0u8; 8];
    let mut hi = [0u8; 8];
    lo.copy_from_slice(&bytes[0..8]);
    hi.copy_from_slice(&bytes[8..16]);
    U128Pair::new(u64::from_le_bytes(lo), u64::from_le_bytes(hi))
}

/// Run the four-round register mixer once over a 64-byte (possibly
/// zero-padded tail) block.
fn mix_block(regs: &mut [U128Pair; 4], block: &[u8; BLOCK_SIZE]) {
    let words = [
        load_u128_le(&block[0..16]),
        load_u128_le(&block[16..32]),
        load_u128_le(&block[32..48]),
        load_u128_le(&block[48..64]),
    ];

    for round in 0..ROUNDS {
        let rc = MUM512_ROUND_CONSTS[round];
        let rc = U128Pair::new(rc.0, rc.1);
        for i in 0..4 {
            let folded = mum128(words[i], rc);
            regs[i] = regs[i].xor(folded);
        }
        regs.rotate_left(1);
    }
}

/// Scalar MUM512 one-shot hash over `key`, returning eight `u64` limbs
/// (least significant register first, low limb before high limb).
#[must_use]
pub fn hash512(key: &[u8], seed: [u64; 2]) -> [u64; 8] {
    let len = key.len() as u64;
    let mut regs = [
        U128Pair::new(MUM512_INIT[0] ^ seed[0], MUM512_INIT[1] ^ seed[1]),
        U128Pair::new(MUM512_INIT[2], MUM512_INIT[3] ^ len),
        U128Pair::new(MUM512_INIT[4], MUM512_INIT[5]),
        U128Pair::new(MUM512_INIT[6], MUM512_INIT[7]),
    ];

    let mut off = 0;
    while key.len() - off >= BLOCK_SIZE {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(&key[off..off + BLOCK_SIZE]);
        mix_block(&mut regs, &block);
        off += BLOCK_SIZE;
    }

    let rest = &key[off..];
    if !rest.is_empty() || key.is_empty() {
        let mut block = [0u8; BLOCK_SIZE];
        block[..rest.len()].copy_from_slice(rest);
        if rest.len() < BLOCK_SIZE {
            block[rest.len()] = 0x80;
        }
        mix_block(&mut regs, &block);
    }

    let final_const = U128Pair::new(MUM512_FINAL_CONST.0, MUM512_FINAL_CONST.1);
    for reg in &mut regs {
        *reg = mum128(*reg, final_const);
    }

    [
        regs[0].lo, regs[0].hi, regs[1].lo, regs[1].hi, regs[2].lo, regs[2].hi, regs[3].lo,
        regs[3].hi,
    ]
}
