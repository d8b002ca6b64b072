//! Calldata run-length compression compatible with Solady's `LibZip.cdCompress`.
//!
//! Runs of `0x00` (up to 128) and `0xff` (up to 32) become a two byte marker `0x00, n`, where
//! the high bit of `n` selects `0xff` and the low seven bits hold the run length minus one.
//! The first four output bytes are bitwise negated so compressed calldata never matches a
//! function selector and lands in the receiving contract's decompressing fallback.

use crate::error::UlyssesError;
use alloy::primitives::Bytes;

/// Longest run of `0x00` a single marker encodes.
const MAX_ZERO_RUN: usize = 0x80;
/// Longest run of `0xff` a single marker encodes.
const MAX_ONES_RUN: usize = 0x20;
/// Number of leading bytes that are negated.
const NEGATED_PREFIX: usize = 4;

/// Compresses calldata.
pub fn cd_compress(data: &[u8]) -> Bytes {
    let mut writer = Writer(Vec::with_capacity(data.len()));
    let (mut zeros, mut ones) = (0, 0);

    for &byte in data {
        match byte {
            0x00 => {
                writer.flush_run(0xff, &mut ones);
                zeros += 1;
                if zeros == MAX_ZERO_RUN {
                    writer.flush_run(0x00, &mut zeros);
                }
            }
            0xff => {
                writer.flush_run(0x00, &mut zeros);
                ones += 1;
                if ones == MAX_ONES_RUN {
                    writer.flush_run(0xff, &mut ones);
                }
            }
            _ => {
                writer.flush_run(0xff, &mut ones);
                writer.flush_run(0x00, &mut zeros);
                writer.push(byte);
            }
        }
    }
    writer.flush_run(0xff, &mut ones);
    writer.flush_run(0x00, &mut zeros);

    writer.0.into()
}

/// Inverse of [`cd_compress`].
pub fn cd_decompress(data: &[u8]) -> Result<Bytes, UlyssesError> {
    let byte_at = |i: usize| if i < NEGATED_PREFIX { data[i] ^ 0xff } else { data[i] };
    let mut out = Vec::with_capacity(data.len() * 2);
    let mut i = 0;

    while i < data.len() {
        let byte = byte_at(i);
        i += 1;
        if byte != 0 {
            out.push(byte);
            continue;
        }

        if i == data.len() {
            return Err(UlyssesError::UnsupportedShape("truncated run-length marker"));
        }
        let marker = byte_at(i);
        i += 1;

        let run = (marker & 0x7f) as usize + 1;
        let ones = marker & 0x80 != 0;
        out.extend((0..run).map(|j| if ones && j < MAX_ONES_RUN { 0xff } else { 0x00 }));
    }

    Ok(out.into())
}

struct Writer(Vec<u8>);

impl Writer {
    fn push(&mut self, byte: u8) {
        let byte = if self.0.len() < NEGATED_PREFIX { !byte } else { byte };
        self.0.push(byte);
    }

    fn flush_run(&mut self, fill: u8, run: &mut usize) {
        if *run == 0 {
            return;
        }
        self.push(0x00);
        self.push((*run - 1) as u8 | (fill & 0x80));
        *run = 0;
    }
}
