use tracing::debug;

use crate::store::{KvStore, StoreError};

const COUNT_WIDTH: usize = std::mem::size_of::<u64>();

pub fn encode_count(count: u64) -> Vec<u8> {
    count.to_be_bytes().to_vec()
}

/// Decodes a big-endian counter of 1 to 8 bytes, so values written with the
/// old single-byte layout still read correctly.
pub fn decode_count(key: &str, bytes: &[u8]) -> Result<u64, StoreError> {
    if bytes.is_empty() || bytes.len() > COUNT_WIDTH {
        return Err(StoreError::Corrupt { key: key.to_string(), len: bytes.len() });
    }

    let mut buf = [0u8; COUNT_WIDTH];
    buf[COUNT_WIDTH - bytes.len()..].copy_from_slice(bytes);
    Ok(u64::from_be_bytes(buf))
}

/// One counter per option label.
#[derive(Debug, Clone)]
pub struct VoteCounterStore {
    kv: KvStore,
}

impl VoteCounterStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Creates a zero counter for each option that has none. Existing counts
    /// are left alone.
    pub async fn initialize<'a>(&self, options: impl IntoIterator<Item = &'a str>) -> Result<(), StoreError> {
        for option in options {
            if self.kv.insert_if_absent(option, &encode_count(0)).await? {
                debug!("Initialized counter for {:?}", option);
            }
        }
        Ok(())
    }

    /// Absent keys read as zero.
    pub async fn get(&self, option: &str) -> Result<u64, StoreError> {
        match self.kv.get(option).await? {
            Some(bytes) => decode_count(option, &bytes),
            None => Ok(0),
        }
    }

    pub async fn increment(&self, option: &str) -> Result<u64, StoreError> {
        let bytes = self.kv.update(option, |current| {
            let count = match current {
                Some(bytes) => decode_count(option, bytes)?,
                None => 0,
            };
            let next = count
                .checked_add(1)
                .ok_or_else(|| StoreError::Overflow(option.to_string()))?;
            Ok(encode_count(next))
        })
        .await?;

        decode_count(option, &bytes)
    }

    pub fn kv(&self) -> &KvStore {
        &self.kv
    }
}
