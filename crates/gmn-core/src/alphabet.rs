//! # Alphabet Tables
//!
//! The two GS1 character sets used by the GMN check character scheme and
//! the positional weight table. Symbol order is part of the interoperable
//! contract: the index of a symbol is its value in the checksum.
//!
//! Reverse lookups are `const` tables indexed by ASCII code, so membership
//! and value lookups are O(1) and need no runtime initialization. Every
//! symbol in both sets is ASCII; any non-ASCII character is absent.

/// GS1 AI encodable character set 82, in value order.
pub const CSET82: &[u8; 82] =
    b"!\"%&'()*+,-./0123456789:;<=>?ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Subset of CSET82 used for the check character pair, in value order.
///
/// Omits symbols that are easily confused when transcribed (`0`, `1`, `I`,
/// `O`) and all lowercase letters.
pub const CSET32: &[u8; 32] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Descending primes multiplied against the data characters.
///
/// Right-aligned against the data: the last data character always takes
/// weight 2. The table length caps the data length of a GMN.
pub const WEIGHTS: [u32; 23] = [
    83, 79, 73, 71, 67, 61, 59, 53, 47, 43, 41, 37, 31, 29, 23, 19, 17, 13, 11, 7, 5, 3, 2,
];

/// Prime modulus of the weighted sum. Residues fit in 10 bits.
pub const MODULUS: u32 = 1021;

const ABSENT: u8 = u8::MAX;

const CSET82_VALUES: [u8; 128] = reverse_table(CSET82);
const CSET32_VALUES: [u8; 128] = reverse_table(CSET32);

const fn reverse_table(set: &[u8]) -> [u8; 128] {
    let mut table = [ABSENT; 128];
    let mut i = 0;
    while i < set.len() {
        table[set[i] as usize] = i as u8;
        i += 1;
    }
    table
}

fn lookup(table: &[u8; 128], c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match table[c as usize] {
        ABSENT => None,
        value => Some(value),
    }
}

/// Value of `c` in CSET82, or `None` if `c` is not a member.
pub fn cset82_value(c: char) -> Option<u8> {
    lookup(&CSET82_VALUES, c)
}

/// Value of `c` in CSET32, or `None` if `c` is not a member.
pub fn cset32_value(c: char) -> Option<u8> {
    lookup(&CSET32_VALUES, c)
}

/// The CSET32 symbol for a 5-bit value. Only the low five bits are used.
pub fn cset32_symbol(value: u32) -> char {
    CSET32[(value & 31) as usize] as char
}

/// Whether `c` may appear in the leading GS1 Company Prefix span.
pub fn is_prefix_digit(c: char) -> bool {
    c.is_ascii_digit()
}
