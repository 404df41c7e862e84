//! The variable-length integer encoding of the Mumble protocol.
//!
//! The first byte of an encoded value tells how long it is:
//!
//! | prefix      | bytes      | value                               |
//! |-------------|------------|-------------------------------------|
//! | `0xxxxxxx`  | 1          | 7 bits, `0..=127`                   |
//! | `10xxxxxx`  | 2          | 14 bits                             |
//! | `110xxxxx`  | 3          | 21 bits                             |
//! | `1110xxxx`  | 4          | 28 bits                             |
//! | `111100__`  | 5          | big endian `u32`                    |
//! | `111101__`  | 9          | big endian `u64`                    |
//! | `111110__`  | 1 + varint | negation of the varint that follows |
//! | `111111xx`  | 1          | `!xx`, `-1..=-4`                    |

#[cfg(test)]
#[macro_use] extern crate quickcheck;

/// The longest encoding, `i64::MIN`: a negative tag and a 9 bytes magnitude.
pub const MAX_ENCODED_LEN: usize = 10;

pub use self::arith::Operand;
pub use self::error::{Error, Result, VarIntError};
pub use self::io::{ReadVarIntExt, WriteVarIntExt};
pub use self::options::{DecoderOptions, MalformedPolicy};
pub use self::varint::{VarInt, decode, decode_with, encode, encode_into, encoded_len};

mod arith;
mod error;
mod io;
mod options;
mod varint;

#[cfg(test)]
mod testing;
