//! Wire decoding trait

use crate::{Result, RopPull};

/// Trait for types that can be rebuilt from their ROP wire form
///
/// An implementation consumes exactly the value's wire bytes at the
/// unpacker's cursor. Composite types decode field by field and
/// short-circuit on the first failing field.
pub trait RopDecode: Sized {
    fn rop_decode(pull: &mut RopPull) -> Result<Self>;
}
