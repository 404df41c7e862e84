use std::convert::TryFrom;
use std::fmt;

use byteorder::{BigEndian, ByteOrder};
use log::{trace, warn};

use crate::error::{Error, VarIntError};
use crate::options::{DecoderOptions, MalformedPolicy};
use crate::MAX_ENCODED_LEN;

const TWO_BYTES_TAG: u16 = 0b1000_0000_0000_0000;
const THREE_BYTES_TAG: u8 = 0b1100_0000;
const FOUR_BYTES_TAG: u32 = 0b1110_0000_0000_0000_0000_0000_0000_0000;
const U32_TAG: u8 = 0b1111_0000;
const U64_TAG: u8 = 0b1111_0100;
const NEGATIVE_TAG: u8 = 0b1111_1000;
const SMALL_NEGATIVE_TAG: u8 = 0b1111_1100;

/// What the first byte of an encoded value announces.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Prefix {
    /// `111110xx`, the value is the negation of the varint that follows.
    Negative,
    /// Any other form, spanning this many bytes including the first one.
    Form(usize),
}

impl Prefix {
    pub(crate) fn classify(byte: u8) -> Prefix {
        match byte {
            0x00..=0x7F => Prefix::Form(1),
            0x80..=0xBF => Prefix::Form(2),
            0xC0..=0xDF => Prefix::Form(3),
            0xE0..=0xEF => Prefix::Form(4),
            0xF0..=0xF3 => Prefix::Form(5),
            0xF4..=0xF7 => Prefix::Form(9),
            0xF8..=0xFB => Prefix::Negative,
            0xFC..=0xFF => Prefix::Form(1),
        }
    }
}

/// A signed 64-bit integer in the Mumble variable-length encoding.
///
/// Small magnitudes take fewer bytes: `0..=127` fits in one byte, as do
/// `-1..=-4`, and any `i64` fits in at most ten bytes.
///
/// ```
/// use wspr_varint::VarInt;
///
/// let bytes = VarInt::from_int(-5).to_bytes();
/// assert_eq!(bytes, [0xF8, 0x05]);
/// assert_eq!(VarInt::from_bytes(&bytes).unwrap().to_int(), -5);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarInt(i64);

impl VarInt {
    pub const fn from_int(integer: i64) -> VarInt {
        VarInt(integer)
    }

    pub const fn to_int(self) -> i64 {
        self.0
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<VarInt, Error> {
        VarInt::from_bytes_with(bytes, None)
    }

    pub fn from_bytes_with(bytes: &[u8], options: Option<DecoderOptions>) -> Result<VarInt, Error> {
        decode_with(bytes, options).map(VarInt)
    }

    /// Decodes the varint at the start of `bytes`, which may hold more data
    /// after it, and returns it with the number of bytes it spans.
    pub fn decode_prefix(bytes: &[u8]) -> Result<(VarInt, usize), Error> {
        if bytes.is_empty() {
            return Err(VarIntError::Empty.into());
        }

        let tags = count_negative_tags(bytes);
        let payload = &bytes[tags..];
        let first = *payload.first().ok_or(VarIntError::Truncated)?;
        let len = match Prefix::classify(first) {
            Prefix::Form(len) => len,
            Prefix::Negative => unreachable!("negative tags were skipped"),
        };

        if payload.len() < len {
            return Err(VarIntError::Truncated.into());
        }

        // the length comes from the prefix, they always agree
        let raw = decode_form(&payload[..len]).ok_or(VarIntError::Truncated)?;
        let value = apply_negations(tags, raw)?;
        Ok((VarInt(value), tags + len))
    }

    pub fn to_bytes(self) -> Vec<u8> {
        encode(self.0)
    }

    pub fn encoded_len(self) -> usize {
        encoded_len(self.0)
    }
}

impl From<i64> for VarInt {
    fn from(integer: i64) -> VarInt {
        VarInt(integer)
    }
}

impl From<VarInt> for i64 {
    fn from(varint: VarInt) -> i64 {
        varint.0
    }
}

impl fmt::Display for VarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

pub fn encode(value: i64) -> Vec<u8> {
    let mut buf = [0; MAX_ENCODED_LEN];
    encode_into(&mut buf, value).to_vec()
}

/// Encodes `value` into `buf` and returns the part of it that was written.
pub fn encode_into(buf: &mut [u8; MAX_ENCODED_LEN], value: i64) -> &[u8] {
    if value < 0 {
        if value >= -4 {
            buf[0] = SMALL_NEGATIVE_TAG | !value as u8;
            return &buf[..1];
        }
        buf[0] = NEGATIVE_TAG;
        let len = encode_magnitude(&mut buf[1..], value.unsigned_abs());
        return &buf[..1 + len];
    }

    let len = encode_magnitude(&mut buf[..], value as u64);
    &buf[..len]
}

fn encode_magnitude(buf: &mut [u8], value: u64) -> usize {
    if value < 0x80 {
        buf[0] = value as u8;
        1
    } else if value < 0x4000 {
        BigEndian::write_u16(buf, TWO_BYTES_TAG | value as u16);
        2
    } else if value < 0x20_0000 {
        buf[0] = THREE_BYTES_TAG | (value >> 16) as u8;
        BigEndian::write_u16(&mut buf[1..], value as u16);
        3
    } else if value < 0x1000_0000 {
        BigEndian::write_u32(buf, FOUR_BYTES_TAG | value as u32);
        4
    } else if value < 0x1_0000_0000 {
        buf[0] = U32_TAG;
        BigEndian::write_u32(&mut buf[1..], value as u32);
        5
    } else {
        buf[0] = U64_TAG;
        BigEndian::write_u64(&mut buf[1..], value);
        9
    }
}

pub fn encoded_len(value: i64) -> usize {
    match value {
        -4..=-1 => 1,
        v if v < 0 => 1 + magnitude_len(v.unsigned_abs()),
        v => magnitude_len(v as u64),
    }
}

fn magnitude_len(value: u64) -> usize {
    match value {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x1F_FFFF => 3,
        0x20_0000..=0x0FFF_FFFF => 4,
        0x1000_0000..=0xFFFF_FFFF => 5,
        _ => 9,
    }
}

pub fn decode(bytes: &[u8]) -> Result<i64, Error> {
    decode_with(bytes, None)
}

/// Decodes a buffer that holds exactly one varint.
pub fn decode_with(bytes: &[u8], options: Option<DecoderOptions>) -> Result<i64, Error> {
    let opt = options.unwrap_or_default();

    if bytes.is_empty() {
        return Err(VarIntError::Empty.into());
    }

    let tags = count_negative_tags(bytes);
    let payload = &bytes[tags..];
    if payload.is_empty() {
        return Err(VarIntError::Truncated.into());
    }

    match decode_form(payload) {
        Some(raw) => apply_negations(tags, raw),
        None => match opt.malformed_policy() {
            MalformedPolicy::Reject => {
                Err(VarIntError::Malformed { prefix: payload[0], len: payload.len() }.into())
            },
            MalformedPolicy::Zero => {
                warn!("malformed varint (prefix {:#04x}, {} bytes) decoded as zero", payload[0], payload.len());
                Ok(0)
            },
        },
    }
}

fn count_negative_tags(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|&&b| Prefix::classify(b) == Prefix::Negative).count()
}

/// Negates `raw` once per leading negative tag and brings it back to an `i64`.
pub(crate) fn apply_negations(tags: usize, raw: i128) -> Result<i64, Error> {
    let value = if tags % 2 == 1 { -raw } else { raw };
    i64::try_from(value).map_err(|_| VarIntError::Overflow.into())
}

/// Decodes a single non-negative-tagged form, its length must match its prefix.
pub(crate) fn decode_form(bytes: &[u8]) -> Option<i128> {
    let b0 = *bytes.first()?;
    let value = match bytes.len() {
        1 if b0 & 0x80 == 0 => b0 as i128,
        1 if b0 & 0xFC == SMALL_NEGATIVE_TAG => !((b0 & 0b11) as i128),
        2 if b0 & 0xC0 == 0x80 => (BigEndian::read_u16(bytes) & 0x3FFF) as i128,
        3 if b0 & 0xE0 == THREE_BYTES_TAG => {
            (((b0 & 0x1F) as i128) << 16) | BigEndian::read_u16(&bytes[1..]) as i128
        },
        4 if b0 & 0xF0 == 0xE0 => (BigEndian::read_u32(bytes) & 0x0FFF_FFFF) as i128,
        5 if b0 & 0xFC == U32_TAG => BigEndian::read_u32(&bytes[1..]) as i128,
        9 if b0 & 0xFC == U64_TAG => BigEndian::read_u64(&bytes[1..]) as i128,
        _ => return None,
    };

    trace!("decoded a {} byte(s) varint form: {}", bytes.len(), value);
    Some(value)
}
