//! Binary similarity matrix codec
//!
//! Layout, little-endian: magic `CFSM`, `u32` version, `u64` build id,
//! `u32` N, then N*N `f32` values row-major.

use coursefinder_core::{Error, Result, SimilarityMatrix};
use std::path::Path;

const MAGIC: &[u8; 4] = b"CFSM";
const VERSION: u32 = 1;
const HEADER_LEN: usize = 4 + 4 + 8 + 4;

pub(crate) fn encode(build_id: u64, matrix: &SimilarityMatrix) -> Vec<u8> {
    let values = matrix.as_slice();
    let mut out = Vec::with_capacity(HEADER_LEN + values.len() * 4);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&VERSION.to_le_bytes());
    out.extend_from_slice(&build_id.to_le_bytes());
    out.extend_from_slice(&(matrix.len() as u32).to_le_bytes());
    for v in values {
        out.extend_from_slice(&v.to_le_bytes());
    }
    out
}

/// Header fields only, without decoding the payload
pub(crate) fn read_header(path: &Path, bytes: &[u8]) -> Result<(u64, usize)> {
    if bytes.len() < HEADER_LEN {
        return Err(Error::corrupt(path, "truncated header"));
    }
    if &bytes[0..4] != MAGIC {
        return Err(Error::corrupt(path, "bad magic"));
    }
    let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    if version != VERSION {
        return Err(Error::corrupt(
            path,
            format!("unsupported format version {version}"),
        ));
    }
    let mut id = [0u8; 8];
    id.copy_from_slice(&bytes[8..16]);
    let n = u32::from_le_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]) as usize;
    Ok((u64::from_le_bytes(id), n))
}

pub(crate) fn decode(path: &Path, bytes: &[u8]) -> Result<(u64, SimilarityMatrix)> {
    let (build_id, n) = read_header(path, bytes)?;
    let payload = &bytes[HEADER_LEN..];
    let expected = n
        .checked_mul(n)
        .and_then(|cells| cells.checked_mul(4))
        .ok_or_else(|| Error::corrupt(path, "row count overflows"))?;
    if payload.len() != expected {
        return Err(Error::corrupt(
            path,
            format!("expected {expected} payload bytes for {n} rows, found {}", payload.len()),
        ));
    }

    let values = payload
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    let matrix = SimilarityMatrix::from_raw(n, values)
        .ok_or_else(|| Error::corrupt(path, "payload is not square"))?;
    Ok((build_id, matrix))
}
