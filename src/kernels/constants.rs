//! MUM family kernel constants.
//!
//! All constants (except Golden Ratio) are derived from a single rule:
//!
//! ```text
//! constant = floor(frac(ln(p)) * 2^64)
//! ```
//!
//! where p is a prime number and frac(x) = x - floor(x).
//!
//! This ensures "nothing up my sleeve" — every constant is independently
//! reproducible from the natural logarithm of a prime. The prime sequence
//! used here starts at 193 and runs upward, consecutive and disjoint from
//! any table derived the same way from smaller primes.
//!
//! Prime assignment (consecutive, partitioned by purpose):
//!   `BLOCK_CONSTS[0..8]`        : ln(193..233) — 8 primes
//!   `TAIL_CONSTS[0..8]`         : ln(239..277) — 8 primes
//!   `TAIL_PARTIAL_CONST`        : ln(281)
//!   `C_INIT`, `C_LEN`, `C_FINAL`: ln(283), ln(293), ln(307)
//!   `VECTOR_LANE_CONSTS[0..4]`  : ln(311..331) — 4 primes
//!   `MUM512_INIT[0..8]`         : ln(337..379) — 8 primes
//!   `MUM512_ROUND_CONSTS[0..4]` : ln(383..431) — 8 primes, paired into 4 128-bit constants
//!   `MUM512_FINAL_CONST`        : ln(433), ln(439) (128-bit)

// =============================================================================
// BLOCK MIXER CONSTANTS — frac(ln(p)) for p in 193..233
// =============================================================================

/// Per-word multipliers used by the 8-word block mixer.
pub const BLOCK_CONSTS: [u64; 8] = [
    0x433F_AA0A_5398_7C62, // ln(193)
    0x4880_0A21_08F0_4118, // ln(197)
    0x4B16_0665_F361_8981, // ln(199)
    0x5A13_5FE8_1C7E_B508, // ln(211)
    0x683C_68C2_468D_7997, // ln(223)
    0x6CC9_863B_846A_AD92, // ln(227)
    0x6F08_67BC_D230_A9F5, // ln(229)
    0x7377_418F_4D97_DD42, // ln(233)
];

// =============================================================================
// TAIL MIXER CONSTANTS — frac(ln(p)) for p in 239..277
// =============================================================================

/// Per-word multipliers used by the tail mixer's full-word dispatch.
pub const TAIL_CONSTS: [u64; 8] = [
    0x79F9_83ED_4826_668C, // ln(239)
    0x7C1B_A6DE_8B1F_8F86, // ln(241)
    0x8684_1575_2878_9D37, // ln(251)
    0x8C90_4013_A404_2B60, // ln(257)
    0x9278_AFC8_7A60_335D, // ln(263)
    0x983F_0145_F2ED_C31D, // ln(269)
    0x9A24_7583_FC01_7667, // ln(271)
    0x9FBF_9C7D_34C2_BD9A, // ln(277)
];

/// Multiplier applied to the final, partial (< 8-byte) trailing word.
pub const TAIL_PARTIAL_CONST: u64 = 0xA36B_362C_098E_99E2; // ln(281)

// =============================================================================
// DRIVER CONSTANTS
// =============================================================================

/// Folded into the seed before the first `MUM` call.
pub const C_INIT: u64 = 0xA53C_0204_AEAF_7A3A; // ln(283)

/// Folded into the key length before the first `MUM` call.
pub const C_LEN: u64 = 0xAE1F_CAC7_5D01_262F; // ln(293)

/// Folded into the accumulated state during finalisation.
pub const C_FINAL: u64 = 0xBA12_B1A9_0EEB_16F1; // ln(307)

// =============================================================================
// VECTOR LAYER CONSTANTS — frac(ln(p)) for p in 311..331
// =============================================================================

/// Per-lane constants that keep the four vector lanes of `VMUM` from folding
/// identically when they observe the same 32-bit word pair.
pub const VECTOR_LANE_CONSTS: [u64; 4] = [
    0xBD63_117B_9F56_4EB3, // ln(311)
    0xBF07_2C1B_8A72_D409, // ln(313)
    0xC247_62FB_ADE7_163B, // ln(317)
    0xCD57_A13D_C3E0_01D2, // ln(331)
];

// =============================================================================
// MUM512 CONSTANTS — frac(ln(p)) for p in 337..439
// =============================================================================

/// Initial values for the eight 64-bit limbs of the MUM512 state.
pub const MUM512_INIT: [u64; 8] = [
    0xD1F0_F475_DF09_8AFB, // ln(337)
    0xD96D_5949_8DDD_3927, // ln(347)
    0xDAE5_FE55_9658_0B7B, // ln(349)
    0xDDD0_D9BF_8EA3_108E, // ln(353)
    0xE221_6A82_61BB_53CF, // ln(359)
    0xE7C5_CB48_70C4_A4B4, // ln(367)
    0xEBEC_9035_11CE_2435, // ln(373)
    0xF002_5F6B_A51C_C37D, // ln(379)
];

/// Per-round 128-bit constants (low, high limb) for the MUM512 block mixer's
/// four-round register walk.
pub const MUM512_ROUND_CONSTS: [(u64, u64); 4] = [
    (0xF2B2_6BC9_FE9D_57CC, 0xF6AD_22C7_F13F_5D8E), // ln(383), ln(389)
    (0xFBE3_3F82_E63C_6811, 0xFE74_418F_C466_F554), // ln(397), ln(401)
    (0x0382_D622_A9D2_A260, 0x09B1_E89A_88F6_D60F), // ln(409), ln(419)
    (0x0AE9_FC42_66D1_9487, 0x10EC_75B4_FF22_5B60), // ln(421), ln(431)
];

/// 128-bit constant applied once per register during MUM512 finalisation.
pub const MUM512_FINAL_CONST: (u64, u64) = (0x121B_DE24_5D31_8C62, 0x15A1_C0E7_B065_F4F3); // ln(433), ln(439)
