//! The key codec (§6): a fixed byte layout shared verbatim between this
//! module's typed [`Key`] and the wire format, plus the structured value
//! itself. The raw-offset byte buffers are re-architected here into an
//! explicit encode/decode pair (§9, "Raw byte layout vs typed structure") so
//! a caller mistake (wrong length, a stray offset) is a decode-time
//! [`Error`] instead of a silently misread field.

use crate::error::Error;

/// Which of the two parties a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    /// Party 0. Its root control bit is always `0` and its final share is
    /// never negated.
    Zero,
    /// Party 1. Its root control bit is always `1` and its final share is
    /// negated relative to party 0's.
    One,
}

impl Party {
    pub(crate) fn tag(self) -> u8 {
        match self {
            Party::Zero => 0,
            Party::One => 1,
        }
    }

    pub(crate) fn from_tag(tag: u8) -> Result<Self, Error> {
        match tag {
            0 => Ok(Party::Zero),
            1 => Ok(Party::One),
            other => Err(Error::InvalidPartyTag(other)),
        }
    }

    pub(crate) fn root_control_bit(self) -> bool {
        matches!(self, Party::One)
    }
}

/// The per-level correction word triple `(sCW_i, tCW^L_i, tCW^R_i)` of §3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectionWord {
    pub s_cw: [u8; 16],
    pub t_cw_l: bool,
    pub t_cw_r: bool,
}

/// One party's DPF key: the root seed and control bit only that party holds,
/// plus the per-level and final correction words both parties' keys share
/// byte-for-byte (§3, §6).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    pub party: Party,
    pub root_seed: [u8; 16],
    pub root_t: bool,
    pub cws: Vec<CorrectionWord>,
    /// Only the low 31 bits are meaningful; stored as a reduced field element.
    pub cw_final: u32,
}

impl Key {
    /// Domain width this key was generated for, derived from the number of
    /// per-level correction words.
    #[must_use]
    pub fn n(&self) -> u32 {
        self.cws.len() as u32
    }

    /// Serialized length in bytes: `18 * n + 34` (§6).
    #[must_use]
    pub fn encoded_len(n: u32) -> usize {
        18 * n as usize + 34
    }

    /// Encode this key into the fixed byte layout of §6.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::encoded_len(self.n()));
        buf.push(self.party.tag());
        buf.extend_from_slice(&self.root_seed);
        buf.push(self.root_t as u8);
        for cw in &self.cws {
            buf.extend_from_slice(&cw.s_cw);
            buf.push(cw.t_cw_l as u8);
            buf.push(cw.t_cw_r as u8);
        }
        let mut cw_final = [0u8; 16];
        cw_final[..4].copy_from_slice(&self.cw_final.to_le_bytes());
        buf.extend_from_slice(&cw_final);
        buf
    }

    /// Decode a key for the given domain width, validating both the buffer
    /// length and the party tag byte.
    pub fn decode(n: u32, buf: &[u8]) -> Result<Self, Error> {
        crate::error::check_domain_width(n)?;
        let expected = Self::encoded_len(n);
        if buf.len() != expected {
            return Err(Error::InvalidKeyLength {
                expected,
                actual: buf.len(),
                n,
            });
        }

        let party = Party::from_tag(buf[0])?;
        let mut root_seed = [0u8; 16];
        root_seed.copy_from_slice(&buf[1..17]);
        let root_t = buf[17] != 0;

        let mut cws = Vec::with_capacity(n as usize);
        for i in 0..n as usize {
            let off = 18 + 18 * i;
            let mut s_cw = [0u8; 16];
            s_cw.copy_from_slice(&buf[off..off + 16]);
            cws.push(CorrectionWord {
                s_cw,
                t_cw_l: buf[off + 16] != 0,
                t_cw_r: buf[off + 17] != 0,
            });
        }

        let final_off = 18 * n as usize + 18;
        let cw_final = u32::from_le_bytes(buf[final_off..final_off + 4].try_into().unwrap());

        Ok(Key {
            party,
            root_seed,
            root_t,
            cws,
            cw_final,
        })
    }
}
