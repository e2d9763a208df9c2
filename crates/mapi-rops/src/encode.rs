//! Wire encoding trait

use crate::{Result, RopPush};

/// Trait for types with a ROP wire form
///
/// An implementation appends the value's exact wire bytes at the packer's
/// cursor. Composite types encode field by field and short-circuit on the
/// first failing field, leaving the error code unchanged.
pub trait RopEncode {
    fn rop_encode(&self, push: &mut RopPush) -> Result<()>;
}
