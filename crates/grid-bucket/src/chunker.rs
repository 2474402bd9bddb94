//! Chunk codec: carves a byte stream into fixed-size chunks and
//! reassembles chunks into a byte stream. No shared state.

use bytes::{Buf, BytesMut};

use grid_types::ChunkRecord;

/// Concatenate an owner's chunks (already ordered by `seq`) back into the
/// original byte stream.
pub fn assemble(chunks: &[ChunkRecord]) -> Vec<u8> {
    let total: usize = chunks.iter().map(ChunkRecord::len).sum();
    let mut out = Vec::with_capacity(total);
    for chunk in chunks {
        out.extend_from_slice(&chunk.data);
    }
    out
}

/// Incremental chunk carver for the write stream.
///
/// Appended bytes accumulate until a full chunk's worth is available;
/// `push` carves and returns every full chunk, keeping the partial tail
/// buffered. `finish` yields the final partial chunk, if any. A partial
/// chunk is never released by `push`, which is what keeps non-final
/// short chunks out of the store.
#[derive(Debug)]
pub struct ChunkBuffer {
    chunk_size: usize,
    buf: BytesMut,
}

impl ChunkBuffer {
    /// Create a carver for the given chunk size. `chunk_size` must be
    /// non-zero (enforced by [`BucketConfig`](crate::BucketConfig)).
    pub fn new(chunk_size: u32) -> Self {
        debug_assert!(chunk_size > 0, "chunk size must be non-zero");
        Self {
            chunk_size: chunk_size as usize,
            buf: BytesMut::new(),
        }
    }

    /// Append bytes and carve off every full chunk now available.
    pub fn push(&mut self, data: &[u8]) -> Vec<Vec<u8>> {
        self.buf.extend_from_slice(data);
        let mut full = Vec::new();
        while self.buf.len() >= self.chunk_size {
            let chunk = self.buf.copy_to_bytes(self.chunk_size);
            full.push(chunk.to_vec());
        }
        full
    }

    /// Take the final partial chunk. `None` when nothing is buffered.
    pub fn finish(&mut self) -> Option<Vec<u8>> {
        if self.buf.is_empty() {
            return None;
        }
        Some(self.buf.split().to_vec())
    }

    /// Bytes currently buffered (always less than the chunk size after a
    /// `push` returns).
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_types::FileId;
    use proptest::prelude::*;

    /// All-at-once reference split the incremental carver must agree with.
    fn split(data: &[u8], chunk_size: u32) -> Vec<Vec<u8>> {
        data.chunks(chunk_size as usize)
            .map(<[u8]>::to_vec)
            .collect()
    }

    #[test]
    fn assemble_restores_payload() {
        let owner = FileId::new();
        let chunks: Vec<ChunkRecord> = split(b"hello gridstream world!", 4)
            .into_iter()
            .enumerate()
            .map(|(i, data)| ChunkRecord::new(owner, i as u32, data))
            .collect();
        assert_eq!(assemble(&chunks), b"hello gridstream world!");
    }

    #[test]
    fn buffer_holds_partial_chunks() {
        let mut buffer = ChunkBuffer::new(4);
        assert!(buffer.push(b"ab").is_empty());
        assert_eq!(buffer.buffered(), 2);
        // Crossing a boundary releases exactly one full chunk.
        let full = buffer.push(b"cde");
        assert_eq!(full, vec![b"abcd".to_vec()]);
        assert_eq!(buffer.buffered(), 1);
    }

    #[test]
    fn buffer_carves_multiple_chunks_at_once() {
        let mut buffer = ChunkBuffer::new(2);
        let full = buffer.push(b"abcdef");
        assert_eq!(full.len(), 3);
        assert_eq!(buffer.finish(), None);
    }

    #[test]
    fn finish_takes_the_tail() {
        let mut buffer = ChunkBuffer::new(4);
        buffer.push(b"abcde");
        assert_eq!(buffer.finish(), Some(b"e".to_vec()));
        assert_eq!(buffer.finish(), None);
    }

    #[test]
    fn finish_on_empty_buffer() {
        let mut buffer = ChunkBuffer::new(4);
        assert_eq!(buffer.finish(), None);
    }

    proptest! {
        #[test]
        fn split_then_assemble_roundtrips(
            data in proptest::collection::vec(any::<u8>(), 0..4096),
            chunk_size in 1u32..512,
        ) {
            let owner = FileId::new();
            let chunks: Vec<ChunkRecord> = split(&data, chunk_size)
                .into_iter()
                .enumerate()
                .map(|(i, d)| ChunkRecord::new(owner, i as u32, d))
                .collect();

            prop_assert_eq!(
                chunks.len() as u64,
                (data.len() as u64).div_ceil(chunk_size as u64)
            );
            for chunk in chunks.iter().rev().skip(1) {
                prop_assert_eq!(chunk.len(), chunk_size as usize);
            }
            prop_assert_eq!(assemble(&chunks), data);
        }

        #[test]
        fn incremental_carving_matches_split(
            data in proptest::collection::vec(any::<u8>(), 0..2048),
            chunk_size in 1u32..128,
            cut in 0usize..2048,
        ) {
            let cut = cut.min(data.len());
            let mut buffer = ChunkBuffer::new(chunk_size);
            let mut carved = buffer.push(&data[..cut]);
            carved.extend(buffer.push(&data[cut..]));
            if let Some(tail) = buffer.finish() {
                carved.push(tail);
            }
            prop_assert_eq!(carved, split(&data, chunk_size));
        }
    }
}
