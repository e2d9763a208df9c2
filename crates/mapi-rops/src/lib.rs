//! Wire-format marshaling runtime for MAPI remote operations (ROPs)
//!
//! This crate packs language-level values into the byte buffers a ROP
//! request or response travels in, and unpacks received buffers back into
//! typed values. It is the substrate the per-operation request/response
//! layers are built on.
//!
//! # Wire format
//!
//! - All multi-byte integers are little-endian
//! - Doubles are the raw IEEE-754 bit pattern, least significant byte first
//! - Narrow strings are one byte per character, optionally `0x00`-terminated;
//!   their length is out-of-band (a preceding wire field or the caller)
//! - Wide strings are UTF-16LE code units, optionally `0x0000`-terminated
//! - GUIDs are 16 bytes: u32 + u16 + u16 + 8 raw bytes
//! - Status codes are a 4-byte value from the flat [`MapiStatus`] table
//!
//! # Example
//!
//! ```
//! use mapi_rops::{MapiStatus, RopDecode, RopEncode, RopId, RopPull, RopPush};
//!
//! // Pack one operation's worth of fields.
//! let mut push = RopPush::new();
//! RopId::Logon.rop_encode(&mut push).unwrap();
//! MapiStatus::Success.rop_encode(&mut push).unwrap();
//! push.push_utf16_string(0, "Inbox").unwrap();
//! push.push_u32(0x0000_0001).unwrap();
//!
//! // Unpack it on the other side.
//! let mut pull = RopPull::new(push.into_bytes());
//! assert_eq!(RopId::rop_decode(&mut pull).unwrap(), RopId::Logon);
//! assert_eq!(MapiStatus::rop_decode(&mut pull).unwrap(), MapiStatus::Success);
//! assert_eq!(pull.pull_utf16_string(0, 10).unwrap(), "Inbox");
//! assert_eq!(pull.pull_u32().unwrap(), 1);
//! ```
//!
//! A [`RopPush`] or [`RopPull`] lives for a single marshaling operation.
//! Every call either succeeds and advances the cursor by exactly the bytes
//! it handled, or fails with one [`RopError`] code; the first failure is
//! terminal for the whole operation, and the caller starts over on a fresh
//! instance if it wants to retry.

mod decode;
mod encode;
mod error;
mod guid;
mod primitives;
mod print;
mod pull;
mod push;
mod rop;
mod status;
mod strings;

pub use decode::RopDecode;
pub use encode::RopEncode;
pub use error::{Result, RopError};
pub use guid::Guid;
pub use print::hexdump;
pub use pull::RopPull;
pub use push::RopPush;
pub use rop::RopId;
pub use status::MapiStatus;
pub use strings::{STR_NO_SIZE, STR_NO_TERM};

/// Re-export bytes for convenience
pub use bytes::Bytes;
