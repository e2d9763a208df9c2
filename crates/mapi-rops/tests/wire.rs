//! Cross-module round trips over whole operation buffers

use mapi_rops::{
    hexdump, Guid, MapiStatus, RopDecode, RopEncode, RopError, RopId, RopPull, RopPush,
    STR_NO_TERM,
};
use pretty_assertions::assert_eq;

const REPLID_GUID: &str = "00020328-0000-0000-c000-000000000046";

/// Pack a plausible logon response, then unpack it field by field and check
/// every cursor position along the way.
#[test]
fn test_operation_buffer_roundtrip() {
    let guid: Guid = REPLID_GUID.parse().unwrap();

    let mut push = RopPush::new();
    RopId::Logon.rop_encode(&mut push).unwrap();
    MapiStatus::Success.rop_encode(&mut push).unwrap();
    guid.rop_encode(&mut push).unwrap();
    push.push_u64(0x0102_0304_0506_0708).unwrap();
    push.push_utf16_string(0, "Top of Information Store").unwrap();
    push.push_ascii_string(STR_NO_TERM, "MBX01").unwrap();
    push.push_u8(0x2C).unwrap();
    let total = push.offset();
    assert_eq!(total, 1 + 4 + 16 + 8 + (24 * 2 + 2) + 5 + 1);

    let mut pull = RopPull::new(push.into_bytes());
    assert_eq!(RopId::rop_decode(&mut pull).unwrap(), RopId::Logon);
    assert_eq!(
        MapiStatus::rop_decode(&mut pull).unwrap(),
        MapiStatus::Success
    );
    assert_eq!(Guid::rop_decode(&mut pull).unwrap(), guid);
    assert_eq!(pull.pull_u64().unwrap(), 0x0102_0304_0506_0708);
    assert_eq!(
        pull.pull_utf16_string(0, 24 * 2).unwrap(),
        "Top of Information Store"
    );
    assert_eq!(
        pull.pull_ascii_string(STR_NO_TERM, 5).unwrap().as_deref(),
        Some("MBX01")
    );
    assert_eq!(pull.pull_u8().unwrap(), 0x2C);
    assert_eq!(pull.offset(), total);
    assert_eq!(pull.remaining(), 0);
}

/// A failure in the middle of an operation surfaces the sub-operation's
/// exact code and leaves the cursor where the failure was detected.
#[test]
fn test_short_buffer_short_circuits_with_exact_code() {
    let mut push = RopPush::new();
    RopId::OpenFolder.rop_encode(&mut push).unwrap();
    push.push_u16(0x0001).unwrap();

    let mut pull = RopPull::new(push.into_bytes());
    assert_eq!(RopId::rop_decode(&mut pull).unwrap(), RopId::OpenFolder);
    let err = Guid::rop_decode(&mut pull).unwrap_err();
    assert_eq!(
        err,
        RopError::BufferSize {
            requested: 4,
            available: 2,
        }
    );
}

/// Many small writes crossing several growth-chunk boundaries must neither
/// lose nor corrupt earlier bytes.
#[test]
fn test_growth_preserves_all_writes() {
    let mut push = RopPush::new();
    let mut expected = Vec::new();
    for i in 0u32..1500 {
        push.push_u32(i).unwrap();
        expected.extend_from_slice(&i.to_le_bytes());
    }
    assert_eq!(push.offset(), 6000);
    assert_eq!(push.as_bytes(), &expected[..]);

    let mut pull = RopPull::new(push.into_bytes());
    for i in 0u32..1500 {
        assert_eq!(pull.pull_u32().unwrap(), i);
    }
    assert_eq!(pull.remaining(), 0);
}

#[test]
fn test_hexdump_of_packed_buffer() {
    let mut push = RopPush::new();
    push.push_ascii_string(STR_NO_TERM, "ABCDEFGHIJKLMNOP").unwrap();
    let dump = hexdump(push.as_bytes());
    assert_eq!(
        dump,
        "[0000] 41 42 43 44 45 46 47 48   49 4A 4B 4C 4D 4E 4F 50   ABCDEFGH IJKLMNOP\n"
    );
}
