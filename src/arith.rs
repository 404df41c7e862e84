use std::ops::{Add, Mul};

use crate::error::{Error, VarIntError};
use crate::varint::decode;
use crate::VarInt;

/// Anything a `VarInt` can be combined with: another varint, a plain integer
/// or the encoded bytes of a varint.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operand<'a> {
    VarInt(VarInt),
    Int(i64),
    Bytes(&'a [u8]),
}

impl Operand<'_> {
    pub fn to_int(self) -> Result<i64, Error> {
        match self {
            Operand::VarInt(varint) => Ok(varint.to_int()),
            Operand::Int(integer) => Ok(integer),
            Operand::Bytes(bytes) => decode(bytes),
        }
    }
}

impl From<VarInt> for Operand<'_> {
    fn from(varint: VarInt) -> Self {
        Operand::VarInt(varint)
    }
}

impl From<i64> for Operand<'_> {
    fn from(integer: i64) -> Self {
        Operand::Int(integer)
    }
}

impl<'a> From<&'a [u8]> for Operand<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Operand::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Operand<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Operand::Bytes(bytes)
    }
}

impl VarInt {
    pub fn checked_add<'a, O: Into<Operand<'a>>>(self, rhs: O) -> Result<VarInt, Error> {
        let rhs = rhs.into().to_int()?;
        self.to_int().checked_add(rhs).map(VarInt::from_int).ok_or(VarIntError::Overflow.into())
    }

    pub fn checked_mul<'a, O: Into<Operand<'a>>>(self, rhs: O) -> Result<VarInt, Error> {
        let rhs = rhs.into().to_int()?;
        self.to_int().checked_mul(rhs).map(VarInt::from_int).ok_or(VarIntError::Overflow.into())
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        /// Overflows like `i64`, see
        #[doc = concat!("[`VarInt::", stringify!($checked), "`].")]
        impl $trait for VarInt {
            type Output = VarInt;

            fn $method(self, rhs: VarInt) -> VarInt {
                VarInt::from_int(self.to_int().$method(rhs.to_int()))
            }
        }

        /// Overflows like `i64`, see
        #[doc = concat!("[`VarInt::", stringify!($checked), "`].")]
        impl $trait<i64> for VarInt {
            type Output = VarInt;

            fn $method(self, rhs: i64) -> VarInt {
                VarInt::from_int(self.to_int().$method(rhs))
            }
        }

        // The bytes have to be decoded first, which can fail.
        impl<'a> $trait<&'a [u8]> for VarInt {
            type Output = Result<VarInt, Error>;

            fn $method(self, rhs: &'a [u8]) -> Result<VarInt, Error> {
                decode(rhs).map(|rhs| VarInt::from_int(self.to_int().$method(rhs)))
            }
        }

        impl<'a> $trait<&'a Vec<u8>> for VarInt {
            type Output = Result<VarInt, Error>;

            fn $method(self, rhs: &'a Vec<u8>) -> Result<VarInt, Error> {
                self.$method(rhs.as_slice())
            }
        }
    };
}

// Like `i64`, these panic on overflow in debug builds and wrap in release
// builds, `checked_add` and `checked_mul` report it as an error instead.
impl_binop!(Add, add, checked_add);
impl_binop!(Mul, mul, checked_mul);
