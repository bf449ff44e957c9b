//! Uniform streaming interface over the supported fingerprint algorithms.
//!
//! Every algorithm follows the same three-phase lifecycle: reset, absorb
//! (any number of byte spans), finalize. Absorbing after finalize without
//! a reset is a contract violation and fails with [`Error::Misuse`].

use crate::error::Error;
use highway::{HighwayHash, Key};
use md5::Md5;
use sha2::{Digest as _, Sha256};

/// Widest digest produced by any supported algorithm (SHA-256).
pub const MAX_DIGEST_LEN: usize = 32;

/// A finalized digest or checksum value.
///
/// Checksums occupy 4 bytes, 64-bit fingerprints 8, MD5 16 and SHA-256 32.
/// Integer-valued algorithms are stored big-endian so the hex rendering
/// matches their conventional notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digest {
    len: usize,
    bytes: [u8; MAX_DIGEST_LEN],
}

impl Digest {
    fn from_u32(value: u32) -> Self {
        let mut bytes = [0u8; MAX_DIGEST_LEN];
        bytes[..4].copy_from_slice(&value.to_be_bytes());
        Self { len: 4, bytes }
    }

    fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; MAX_DIGEST_LEN];
        bytes[..8].copy_from_slice(&value.to_be_bytes());
        Self { len: 8, bytes }
    }

    fn from_slice(slice: &[u8]) -> Self {
        let mut bytes = [0u8; MAX_DIGEST_LEN];
        bytes[..slice.len()].copy_from_slice(slice);
        Self {
            len: slice.len(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

pub trait Hasher {
    /// Returns the hasher to its freshly constructed state.
    fn reset(&mut self);

    /// Ingests a read-only byte span, which may be empty.
    fn absorb(&mut self, data: &[u8]) -> Result<(), Error>;

    /// Produces the digest and marks the instance finalized.
    fn finalize(&mut self) -> Digest;
}

/// Rabin-style polynomial fingerprint.
///
/// The state is the input interpreted as coefficients of a polynomial
/// evaluated at a fixed prime in wrapping 64-bit arithmetic. Bytes are
/// offset by one so leading zeros contribute to the fingerprint.
pub struct RabinHasher {
    state: u64,
    finalized: bool,
}

impl RabinHasher {
    /// Prime point at which the input polynomial is evaluated.
    const BASE: u64 = 1_000_000_007;

    pub fn new() -> Self {
        Self {
            state: 0,
            finalized: false,
        }
    }
}

impl Hasher for RabinHasher {
    fn reset(&mut self) {
        self.state = 0;
        self.finalized = false;
    }

    fn absorb(&mut self, data: &[u8]) -> Result<(), Error> {
        if self.finalized {
            return Err(Error::Misuse);
        }
        for &byte in data {
            self.state = self
                .state
                .wrapping_mul(Self::BASE)
                .wrapping_add(u64::from(byte) + 1);
        }
        Ok(())
    }

    fn finalize(&mut self) -> Digest {
        self.finalized = true;
        Digest::from_u64(self.state)
    }
}

/// Adler-32 streaming checksum.
pub struct Adler32Hasher {
    inner: adler32::RollingAdler32,
    finalized: bool,
}

impl Adler32Hasher {
    pub fn new() -> Self {
        Self {
            inner: adler32::RollingAdler32::new(),
            finalized: false,
        }
    }
}

impl Hasher for Adler32Hasher {
    fn reset(&mut self) {
        self.inner = adler32::RollingAdler32::new();
        self.finalized = false;
    }

    fn absorb(&mut self, data: &[u8]) -> Result<(), Error> {
        if self.finalized {
            return Err(Error::Misuse);
        }
        self.inner.update_buffer(data);
        Ok(())
    }

    fn finalize(&mut self) -> Digest {
        self.finalized = true;
        Digest::from_u32(self.inner.hash())
    }
}

/// CRC-32 (IEEE) cyclic redundancy check.
pub struct CrcHasher {
    inner: crc32fast::Hasher,
    finalized: bool,
}

impl CrcHasher {
    pub fn new() -> Self {
        Self {
            inner: crc32fast::Hasher::new(),
            finalized: false,
        }
    }
}

impl Hasher for CrcHasher {
    fn reset(&mut self) {
        self.inner.reset();
        self.finalized = false;
    }

    fn absorb(&mut self, data: &[u8]) -> Result<(), Error> {
        if self.finalized {
            return Err(Error::Misuse);
        }
        self.inner.update(data);
        Ok(())
    }

    fn finalize(&mut self) -> Digest {
        self.finalized = true;
        Digest::from_u32(self.inner.clone().finalize())
    }
}

/// MD5 cryptographic digest.
pub struct Md5Hasher {
    inner: Md5,
    finalized: bool,
}

impl Md5Hasher {
    pub fn new() -> Self {
        Self {
            inner: Md5::new(),
            finalized: false,
        }
    }
}

impl Hasher for Md5Hasher {
    fn reset(&mut self) {
        self.inner = Md5::new();
        self.finalized = false;
    }

    fn absorb(&mut self, data: &[u8]) -> Result<(), Error> {
        if self.finalized {
            return Err(Error::Misuse);
        }
        self.inner.update(data);
        Ok(())
    }

    fn finalize(&mut self) -> Digest {
        self.finalized = true;
        Digest::from_slice(self.inner.clone().finalize().as_slice())
    }
}

/// SHA-256 cryptographic digest.
pub struct Sha256Hasher {
    inner: Sha256,
    finalized: bool,
}

impl Sha256Hasher {
    pub fn new() -> Self {
        Self {
            inner: Sha256::new(),
            finalized: false,
        }
    }
}

impl Hasher for Sha256Hasher {
    fn reset(&mut self) {
        self.inner = Sha256::new();
        self.finalized = false;
    }

    fn absorb(&mut self, data: &[u8]) -> Result<(), Error> {
        if self.finalized {
            return Err(Error::Misuse);
        }
        self.inner.update(data);
        Ok(())
    }

    fn finalize(&mut self) -> Digest {
        self.finalized = true;
        Digest::from_slice(self.inner.clone().finalize().as_slice())
    }
}

/// HighwayHash 64-bit keyed hash.
///
/// The key is fixed so digests are reproducible across runs and processes.
pub struct HighwayHasher {
    inner: highway::HighwayHasher,
    finalized: bool,
}

impl HighwayHasher {
    const KEY: Key = Key([
        0x0706_0504_0302_0100,
        0x0F0E_0D0C_0B0A_0908,
        0x1716_1514_1312_1110,
        0x1F1E_1D1C_1B1A_1918,
    ]);

    pub fn new() -> Self {
        Self {
            inner: highway::HighwayHasher::new(Self::KEY),
            finalized: false,
        }
    }
}

impl Hasher for HighwayHasher {
    fn reset(&mut self) {
        self.inner = highway::HighwayHasher::new(Self::KEY);
        self.finalized = false;
    }

    fn absorb(&mut self, data: &[u8]) -> Result<(), Error> {
        if self.finalized {
            return Err(Error::Misuse);
        }
        self.inner.append(data);
        Ok(())
    }

    fn finalize(&mut self) -> Digest {
        self.finalized = true;
        Digest::from_u64(self.inner.clone().finalize64())
    }
}
