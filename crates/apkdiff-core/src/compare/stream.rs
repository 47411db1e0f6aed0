//! Chunked byte-equality check over two readable streams.

use std::io::Read;

use crate::LengthCheck;
use crate::Result;

/// Bytes read from each stream per comparison step.
pub(crate) const CHUNK_SIZE: usize = 1024;

/// Compares two streams chunk by chunk in lock-step.
///
/// Returns `Ok(false)` at the first differing chunk. When either stream is
/// exhausted the outcome depends on `length_check`: under
/// [`LengthCheck::Legacy`] the streams compare equal even if the other one
/// still holds data (the historical prefix quirk, see [`LengthCheck`]);
/// under [`LengthCheck::Strict`] both streams must end together.
///
/// # Errors
///
/// Propagates any I/O error from either stream.
pub fn streams_equal<A: Read, B: Read>(
    mut source: A,
    mut destination: B,
    length_check: LengthCheck,
) -> Result<bool> {
    let mut source_chunk = [0u8; CHUNK_SIZE];
    let mut destination_chunk = [0u8; CHUNK_SIZE];

    loop {
        let source_read = fill_chunk(&mut source, &mut source_chunk)?;
        let destination_read = fill_chunk(&mut destination, &mut destination_chunk)?;

        if source_read == 0 || destination_read == 0 {
            return Ok(match length_check {
                LengthCheck::Legacy => true,
                LengthCheck::Strict => source_read == 0 && destination_read == 0,
            });
        }

        if source_chunk[..source_read] != destination_chunk[..destination_read] {
            return Ok(false);
        }
    }
}

/// Reads until `chunk` is full or the stream ends, returning the byte count.
///
/// Short reads are refilled so chunk boundaries line up between the two
/// streams no matter how the decompressor hands out bytes.
fn fill_chunk<R: Read>(reader: &mut R, chunk: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < chunk.len() {
        match reader.read(&mut chunk[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
