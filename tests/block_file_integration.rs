//! Integration tests for block references persisted in a block-structured file.
//!
//! The file handling here stands in for a storage manager: block N lives at
//! `BlockNumber::byte_offset()`, and each block stores a `BlockId` pointing
//! at another block.

use blockref::{BlockId, BlockNumber, Result, BLOCK_SIZE};
use parking_lot::RwLock;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::sync::Arc;
use std::thread;
use tempfile::tempdir;

/// Offset of the "next block" reference inside each block.
const NEXT_OFFSET: usize = 24;

fn write_block(file: &mut File, block: BlockNumber, data: &[u8]) -> Result<()> {
    file.seek(SeekFrom::Start(block.byte_offset()))?;
    file.write_all(data)?;
    Ok(())
}

fn read_block(file: &mut File, block: BlockNumber) -> Result<Vec<u8>> {
    let mut data = vec![0u8; BLOCK_SIZE];
    file.seek(SeekFrom::Start(block.byte_offset()))?;
    file.read_exact(&mut data)?;
    Ok(data)
}

/// Build a chain 0 -> 1 -> ... -> n-1 -> INVALID on disk and walk it back.
#[test]
fn test_block_chain_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chain.dat");
    let count = BlockNumber::new(6);

    {
        let mut file = File::create(&path).unwrap();
        for block in BlockNumber::range(BlockNumber::new(0), count) {
            let next = match block.checked_next() {
                Some(next) if next < count => next,
                _ => BlockNumber::INVALID,
            };

            let mut data = vec![0u8; BLOCK_SIZE];
            data[0] = block.0 as u8;
            BlockId::new(next)
                .write_to(&mut data[NEXT_OFFSET..])
                .unwrap();
            write_block(&mut file, block, &data).unwrap();
        }
        file.sync_all().unwrap();
    }

    let len = std::fs::metadata(&path).unwrap().len();
    assert_eq!(len, count.byte_offset());

    let mut file = OpenOptions::new().read(true).open(&path).unwrap();
    let mut visited = vec![];
    let mut current = BlockNumber::new(0);
    while current.is_valid() {
        let data = read_block(&mut file, current).unwrap();
        assert_eq!(data[0], current.0 as u8);
        visited.push(current);
        current = BlockId::from_bytes(&data[NEXT_OFFSET..])
            .unwrap()
            .block_number();
    }

    let expected: Vec<_> = BlockNumber::range(BlockNumber::new(0), count).collect();
    assert_eq!(visited, expected);
}

/// Identifiers for large block numbers keep both halves on disk.
#[test]
fn test_high_block_references_roundtrip_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("refs.dat");
    let targets = [
        BlockNumber::new(0),
        BlockNumber::new(0x0001_FFFF),
        BlockNumber::new(0x8000_0000),
        BlockNumber::MAX,
    ];

    let mut data = vec![0u8; BLOCK_SIZE];
    for (i, &target) in targets.iter().enumerate() {
        BlockId::new(target)
            .write_to(&mut data[i * BlockId::SIZE..])
            .unwrap();
    }

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .open(&path)
        .unwrap();
    write_block(&mut file, BlockNumber::new(1), &data).unwrap();

    let reread = read_block(&mut file, BlockNumber::new(1)).unwrap();
    for (i, &target) in targets.iter().enumerate() {
        let id = BlockId::from_bytes(&reread[i * BlockId::SIZE..]).unwrap();
        assert!(id.equals(&BlockId::new(target)));
        assert_eq!(id.block_number(), target);
    }

    // Block 0 was never written and reads back as a hole
    let hole = read_block(&mut file, BlockNumber::new(0)).unwrap();
    assert!(hole.iter().all(|&b| b == 0));
}

/// Reading past the end of the file surfaces as an I/O error.
#[test]
fn test_read_missing_block_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.dat");
    let mut file = File::create(&path).unwrap();
    write_block(&mut file, BlockNumber::new(0), &[0u8; BLOCK_SIZE]).unwrap();

    let mut file = File::open(&path).unwrap();
    match read_block(&mut file, BlockNumber::new(1)) {
        Err(blockref::Error::Io(e)) => {
            assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof)
        }
        other => panic!("Expected Io error, got {:?}", other.map(|d| d.len())),
    }
}

/// A shared embedded identifier is only touched under the caller's lock.
#[test]
fn test_shared_block_id_under_caller_lock() {
    let slot = Arc::new(RwLock::new(BlockId::default()));
    let mut handles = vec![];

    for t in 0..4u32 {
        let slot = Arc::clone(&slot);
        handles.push(thread::spawn(move || {
            for i in 0..1000u32 {
                let block = BlockNumber::new((t << 16) | i);
                slot.write().set(block);

                // Every observed value is a whole encoding, never a torn mix
                let seen = slot.read().block_number();
                assert!(seen.is_valid());
                assert!(seen.0 >> 16 < 4);
                assert!(seen.0 & 0xFFFF < 1000);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(slot.read().block_number().is_valid());
}

/// Distinct identifiers need no synchronization at all.
#[test]
fn test_concurrent_encode_of_distinct_values() {
    let handles: Vec<_> = (0..4u32)
        .map(|t| {
            thread::spawn(move || {
                let base = t * 0x4000_0000;
                for n in (base..=base + 0x3FFF_FFFF).step_by(0x0001_0001) {
                    let id = BlockId::new(BlockNumber::new(n));
                    assert_eq!(id.block_number().0, n);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
