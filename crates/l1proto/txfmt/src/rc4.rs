//! RC4 stream cipher.
//!
//! Legacy `OP_RETURN` messages are obfuscated with RC4 keyed by the txid of
//! the transaction's first input.  Encryption and decryption are the same
//! operation.

use thiserror::Error;

const STATE_LEN: usize = 256;

/// Errors from keying the cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rc4Error {
    /// The key schedule needs at least one key byte.
    #[error("empty key")]
    EmptyKey,
}

/// Keyed RC4 keystream generator.
#[derive(Clone)]
pub struct Rc4 {
    state: [u8; STATE_LEN],
    i: u8,
    j: u8,
}

impl Rc4 {
    /// Runs the key schedule for `key`.
    pub fn new(key: &[u8]) -> Result<Self, Rc4Error> {
        if key.is_empty() {
            return Err(Rc4Error::EmptyKey);
        }

        let mut state = [0u8; STATE_LEN];
        for (i, slot) in state.iter_mut().enumerate() {
            *slot = i as u8;
        }

        let mut j = 0u8;
        for i in 0..STATE_LEN {
            j = j
                .wrapping_add(state[i])
                .wrapping_add(key[i % key.len()]);
            state.swap(i, j as usize);
        }

        Ok(Self { state, i: 0, j: 0 })
    }

    /// XORs the next `buf.len()` keystream bytes into `buf`.
    pub fn apply_keystream(&mut self, buf: &mut [u8]) {
        for byte in buf {
            *byte ^= self.next_byte();
        }
    }

    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        self.j = self.j.wrapping_add(self.state[self.i as usize]);
        self.state.swap(self.i as usize, self.j as usize);
        let idx = self.state[self.i as usize].wrapping_add(self.state[self.j as usize]);
        self.state[idx as usize]
    }
}

impl std::fmt::Debug for Rc4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Keystream state is key material.
        f.debug_struct("Rc4").finish_non_exhaustive()
    }
}

/// XORs `data` with the keystream of `key`, returning a new buffer of the
/// same length.
pub fn keystream_xor(key: &[u8], data: &[u8]) -> Result<Vec<u8>, Rc4Error> {
    let mut buf = data.to_vec();
    Rc4::new(key)?.apply_keystream(&mut buf);
    Ok(buf)
}
