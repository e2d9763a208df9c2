//! String wire forms
//!
//! Two representations travel on the wire:
//!
//! - **narrow**: one byte per character, host UTF-8 transcoded down with
//!   non-representable characters dropped; optionally terminated by `0x00`
//! - **wide**: UTF-16LE code units; optionally terminated by `0x0000`
//!
//! String length is out-of-band in both forms: the surrounding structure
//! supplies an element count, or a preceding wire field does. The flags
//! below control the framing expected of a single string field.

use crate::error::{raise, Result, RopError};
use crate::pull::RopPull;
use crate::push::RopPush;

/// No prefixing size was retrieved from the wire; the caller supplies the
/// element count. Cannot be combined with [`STR_NO_TERM`]: without either a
/// count or a terminator there is no way to find the end of the string, and
/// scanning is not implemented.
pub const STR_NO_SIZE: u8 = 1 << 0;

/// The string carries no termination character.
pub const STR_NO_TERM: u8 = 1 << 1;

/// Transcode host UTF-8 to the narrow wire form, dropping characters the
/// narrow set cannot represent.
fn utf8_to_narrow(s: &str) -> Vec<u8> {
    s.chars()
        .filter(char::is_ascii)
        .map(|c| c as u8)
        .collect()
}

impl RopPush {
    /// Push a narrow string.
    ///
    /// An empty string writes nothing at all, not even a terminator,
    /// whatever the flags say. Callers must expect this asymmetry with the
    /// non-empty case; receivers on the wire do.
    pub fn push_ascii_string(&mut self, flags: u8, s: &str) -> Result<()> {
        if s.is_empty() {
            return Ok(());
        }

        let mut narrow = utf8_to_narrow(s);
        if flags & STR_NO_TERM == 0 {
            narrow.push(0);
        }

        self.push_bytes(&narrow)
    }

    /// Push a wide string as UTF-16LE code units.
    ///
    /// Unlike the narrow path, an empty string with default flags still
    /// writes the two-byte terminator.
    pub fn push_utf16_string(&mut self, flags: u8, s: &str) -> Result<()> {
        let mut wide = Vec::with_capacity(s.len() * 2 + 2);
        for unit in s.encode_utf16() {
            wide.extend_from_slice(&unit.to_le_bytes());
        }
        if flags & STR_NO_TERM == 0 {
            wide.extend_from_slice(&[0, 0]);
        }

        self.push_bytes(&wide)
    }
}

impl RopPull {
    /// Pull a narrow string of `slen` characters.
    ///
    /// `slen` comes from the caller or from a preceding wire field; a
    /// terminator byte is consumed on top of it unless [`STR_NO_TERM`] is
    /// set. Returns `None` when the computed source length is zero (an
    /// absent string). Narrow bytes are a subset of UTF-8, so no
    /// transcoding happens on this side; the result is truncated at the
    /// first NUL.
    pub fn pull_ascii_string(&mut self, flags: u8, slen: usize) -> Result<Option<String>> {
        let mut flags = flags;
        let mut src_len = slen;

        // No prefixing size available: scanning for the terminator would be
        // the only way to find the end, and that path is not implemented.
        if flags & STR_NO_SIZE != 0 {
            if flags & STR_NO_TERM != 0 {
                return Err(raise(RopError::InvalidFlags(flags), "pull_ascii_string"));
            }
            flags &= !STR_NO_SIZE;
        }

        if flags & STR_NO_TERM != 0 {
            flags &= !STR_NO_TERM;
        } else {
            src_len = src_len.checked_add(1).ok_or_else(|| {
                raise(
                    RopError::BufferSize {
                        requested: slen,
                        available: self.remaining(),
                    },
                    "pull_ascii_string",
                )
            })?;
        }

        if flags != 0 {
            return Err(raise(RopError::InvalidFlags(flags), "pull_ascii_string"));
        }

        // Empty string, nothing to pull.
        if src_len == 0 {
            return Ok(None);
        }

        // The string must leave at least one byte of buffer behind it; an
        // exact fit is rejected here, matching the wire producers.
        if src_len >= self.remaining() {
            return Err(raise(
                RopError::BufferSize {
                    requested: src_len,
                    available: self.remaining(),
                },
                "pull_ascii_string",
            ));
        }

        let raw = self.pull_bytes(src_len)?;
        let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        let s = std::str::from_utf8(&raw[..end])
            .map_err(|_| raise(RopError::Transcode, "pull_ascii_string"))?;

        Ok(Some(s.to_owned()))
    }

    /// Pull a wide string of `slen` bytes of UTF-16LE data.
    ///
    /// A two-byte terminator is consumed on top of `slen` unless
    /// [`STR_NO_TERM`] is set. The code units are transcoded into an owned
    /// host string, truncated at the first NUL code unit.
    pub fn pull_utf16_string(&mut self, flags: u8, slen: usize) -> Result<String> {
        let mut flags = flags;

        if flags & STR_NO_SIZE != 0 {
            if flags & STR_NO_TERM != 0 {
                return Err(raise(RopError::InvalidFlags(flags), "pull_utf16_string"));
            }
            flags &= !STR_NO_SIZE;
        }

        let utf16_len = if flags & STR_NO_TERM != 0 {
            slen
        } else {
            slen.checked_add(2).ok_or_else(|| {
                raise(
                    RopError::BufferSize {
                        requested: slen,
                        available: self.remaining(),
                    },
                    "pull_utf16_string",
                )
            })?
        };

        if utf16_len >= self.remaining() {
            return Err(raise(
                RopError::BufferSize {
                    requested: utf16_len,
                    available: self.remaining(),
                },
                "pull_utf16_string",
            ));
        }

        let raw = self.pull_bytes(utf16_len)?;
        if raw.len() % 2 != 0 {
            return Err(raise(RopError::Transcode, "pull_utf16_string"));
        }

        let mut units: Vec<u16> = raw
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        if let Some(end) = units.iter().position(|&u| u == 0) {
            units.truncate(end);
        }

        char::decode_utf16(units)
            .collect::<std::result::Result<String, _>>()
            .map_err(|_| raise(RopError::Transcode, "pull_utf16_string"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    // A string field never sits at the very end of a real ROP buffer, and
    // the pull paths rely on that: they reject an exact fit. Tests follow
    // the wire shape and park a sentinel dword behind the string.
    fn with_sentinel(mut push: RopPush) -> RopPull {
        push.push_u32(0xDEAD_BEEF).unwrap();
        RopPull::new(push.into_bytes())
    }

    #[test]
    fn test_ascii_roundtrip_terminated() {
        let mut push = RopPush::new();
        push.push_ascii_string(0, ALPHABET).unwrap();
        assert_eq!(push.offset(), ALPHABET.len() + 1);
        assert_eq!(push.as_bytes()[ALPHABET.len()], 0x00);

        let mut pull = with_sentinel(push);
        let out = pull.pull_ascii_string(0, ALPHABET.len()).unwrap();
        assert_eq!(out.as_deref(), Some(ALPHABET));
        assert_eq!(pull.pull_u32().unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn test_ascii_roundtrip_noterm() {
        let mut push = RopPush::new();
        push.push_ascii_string(STR_NO_TERM, ALPHABET).unwrap();
        assert_eq!(push.offset(), ALPHABET.len());

        let mut pull = with_sentinel(push);
        let out = pull
            .pull_ascii_string(STR_NO_TERM, ALPHABET.len())
            .unwrap();
        assert_eq!(out.as_deref(), Some(ALPHABET));
        assert_eq!(pull.pull_u32().unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn test_ascii_empty_push_writes_nothing() {
        // Preserved wire oddity: no terminator even with default flags.
        let mut push = RopPush::new();
        push.push_ascii_string(0, "").unwrap();
        assert_eq!(push.offset(), 0);
        push.push_ascii_string(STR_NO_TERM, "").unwrap();
        assert_eq!(push.offset(), 0);
    }

    #[test]
    fn test_ascii_push_drops_non_narrow_chars() {
        let mut push = RopPush::new();
        push.push_ascii_string(STR_NO_TERM, "na\u{ef}ve").unwrap();
        assert_eq!(push.as_bytes(), b"nave");
    }

    #[test]
    fn test_ascii_pull_zero_len_noterm_is_absent() {
        let mut pull = RopPull::new(Bytes::from_static(&[1, 2, 3, 4]));
        let out = pull.pull_ascii_string(STR_NO_TERM, 0).unwrap();
        assert_eq!(out, None);
        assert_eq!(pull.offset(), 0);
    }

    #[test]
    fn test_ascii_pull_rejects_exact_fit() {
        // The terminated form of "HI" is exactly three bytes; a pull from a
        // three-byte blob is refused even though the data is all there.
        let mut pull = RopPull::new(Bytes::from_static(b"HI\0"));
        let err = pull.pull_ascii_string(0, 2).unwrap_err();
        assert!(matches!(err, RopError::BufferSize { .. }));
        assert_eq!(pull.offset(), 0);
    }

    #[test]
    fn test_invalid_flag_combination_rejected_before_read() {
        let mut pull = RopPull::new(Bytes::new());
        let err = pull
            .pull_ascii_string(STR_NO_SIZE | STR_NO_TERM, 4)
            .unwrap_err();
        assert_eq!(err, RopError::InvalidFlags(STR_NO_SIZE | STR_NO_TERM));

        let err = pull
            .pull_utf16_string(STR_NO_SIZE | STR_NO_TERM, 4)
            .unwrap_err();
        assert_eq!(err, RopError::InvalidFlags(STR_NO_SIZE | STR_NO_TERM));
    }

    #[test]
    fn test_unknown_flag_bits_rejected_on_ascii_pull() {
        let mut pull = RopPull::new(Bytes::from_static(&[0u8; 8]));
        let err = pull.pull_ascii_string(1 << 6, 2).unwrap_err();
        assert!(matches!(err, RopError::InvalidFlags(_)));
    }

    #[test]
    fn test_utf16_framing_terminated() {
        let mut push = RopPush::new();
        push.push_utf16_string(0, "ABCDE").unwrap();
        assert_eq!(push.offset(), 5 * 2 + 2);
        assert_eq!(
            push.as_bytes(),
            &[b'A', 0, b'B', 0, b'C', 0, b'D', 0, b'E', 0, 0, 0]
        );

        let mut pull = with_sentinel(push);
        let out = pull.pull_utf16_string(0, 5 * 2).unwrap();
        assert_eq!(out, "ABCDE");
        assert_eq!(pull.pull_u32().unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn test_utf16_framing_noterm() {
        let mut push = RopPush::new();
        push.push_utf16_string(STR_NO_TERM, "ABCDE").unwrap();
        assert_eq!(push.offset(), 10);

        let mut pull = with_sentinel(push);
        let out = pull.pull_utf16_string(STR_NO_TERM, 10).unwrap();
        assert_eq!(out, "ABCDE");
    }

    #[test]
    fn test_utf16_roundtrip_non_ascii() {
        let text = "caf\u{e9} \u{2603}";
        let mut push = RopPush::new();
        push.push_utf16_string(0, text).unwrap();

        let mut pull = with_sentinel(push);
        let out = pull
            .pull_utf16_string(0, text.encode_utf16().count() * 2)
            .unwrap();
        assert_eq!(out, text);
    }

    #[test]
    fn test_utf16_pull_unpaired_surrogate_is_transcode_error() {
        // 0xD800 with no low surrogate following it
        let mut push = RopPush::new();
        push.push_bytes(&[0x00, 0xD8, b'x', 0x00, 0x00, 0x00]).unwrap();
        let mut pull = with_sentinel(push);
        let err = pull.pull_utf16_string(0, 4).unwrap_err();
        assert_eq!(err, RopError::Transcode);
    }
}
