//! 128-bit structured identifiers (GUIDs)
//!
//! Wire format is 16 bytes: data1 (u32) + data2 (u16) + data3 (u16) +
//! data4 (8 raw bytes), in that order, integers little-endian.

use std::fmt;
use std::str::FromStr;

use crate::error::{raise, Result, RopError};
use crate::{RopDecode, RopEncode, RopPull, RopPush};

/// DCE-style GUID with the Microsoft four-field layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    /// Nil GUID
    pub const NIL: Self = Self {
        data1: 0,
        data2: 0,
        data3: 0,
        data4: [0; 8],
    };
}

fn hex_u32(s: &str, width: usize) -> Option<u32> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(s, 16).ok()
}

impl FromStr for Guid {
    type Err = RopError;

    /// Parse the two canonical textual forms:
    /// `XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX` (36 characters) and the same
    /// wrapped in braces (38 characters). Any other length is a generic
    /// failure; a malformed pattern at an accepted length is an invalid
    /// value.
    fn from_str(s: &str) -> Result<Self> {
        let body = match s.len() {
            36 => s,
            38 => {
                if !s.starts_with('{') || !s.ends_with('}') {
                    return Err(raise(
                        RopError::InvalidValue(format!("malformed braced guid: {s}")),
                        "guid_from_string",
                    ));
                }
                &s[1..37]
            }
            _ => return Err(raise(RopError::Generic, "guid_from_string")),
        };

        let bad = || {
            raise(
                RopError::InvalidValue(format!("malformed guid: {body}")),
                "guid_from_string",
            )
        };

        // Five groups; counting them out guards against a shifted pattern
        // that still happens to be all hex.
        let mut groups = body.split('-');
        let g1 = groups.next().ok_or_else(|| bad())?;
        let g2 = groups.next().ok_or_else(|| bad())?;
        let g3 = groups.next().ok_or_else(|| bad())?;
        let g4 = groups.next().ok_or_else(|| bad())?;
        let g5 = groups.next().ok_or_else(|| bad())?;
        if groups.next().is_some() {
            return Err(bad());
        }

        let data1 = hex_u32(g1, 8).ok_or_else(|| bad())?;
        let data2 = hex_u32(g2, 4).ok_or_else(|| bad())? as u16;
        let data3 = hex_u32(g3, 4).ok_or_else(|| bad())? as u16;

        if g4.len() != 4 || !g4.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(bad());
        }
        if g5.len() != 12 || !g5.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let mut data4 = [0u8; 8];
        for (i, byte) in data4.iter_mut().take(2).enumerate() {
            *byte = hex_u32(&g4[i * 2..i * 2 + 2], 2).ok_or_else(|| bad())? as u8;
        }
        for (i, byte) in data4.iter_mut().skip(2).enumerate() {
            *byte = hex_u32(&g5[i * 2..i * 2 + 2], 2).ok_or_else(|| bad())? as u8;
        }

        Ok(Self {
            data1,
            data2,
            data3,
            data4,
        })
    }
}

impl fmt::Display for Guid {
    /// Always the unbraced 36-character lowercase form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.data1,
            self.data2,
            self.data3,
            self.data4[0],
            self.data4[1],
            self.data4[2],
            self.data4[3],
            self.data4[4],
            self.data4[5],
            self.data4[6],
            self.data4[7],
        )
    }
}

impl RopEncode for Guid {
    fn rop_encode(&self, push: &mut RopPush) -> Result<()> {
        push.push_u32(self.data1)?;
        push.push_u16(self.data2)?;
        push.push_u16(self.data3)?;
        push.push_bytes(&self.data4)?;
        Ok(())
    }
}

impl RopDecode for Guid {
    fn rop_decode(pull: &mut RopPull) -> Result<Self> {
        let data1 = pull.pull_u32()?;
        let data2 = pull.pull_u16()?;
        let data3 = pull.pull_u16()?;
        let raw = pull.pull_bytes(8)?;
        let mut data4 = [0u8; 8];
        data4.copy_from_slice(&raw);
        Ok(Self {
            data1,
            data2,
            data3,
            data4,
        })
    }
}
