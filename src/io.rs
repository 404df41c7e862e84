//! Varints on top of the standard IO traits.
//!
//! Values are written back to back without any framing, the first byte of
//! each one is enough to know how many bytes follow.

use std::io;

use crate::error::{Error, VarIntError};
use crate::varint::{apply_negations, decode_form, encode_into, Prefix};
use crate::{VarInt, MAX_ENCODED_LEN};

pub trait ReadVarIntExt: io::Read {
    /// Reads exactly one varint, consuming no byte past its end.
    fn read_varint(&mut self) -> Result<VarInt, Error> {
        let mut buf = [0; MAX_ENCODED_LEN];
        let mut tags = 0;

        loop {
            self.read_exact(&mut buf[..1])?;
            match Prefix::classify(buf[0]) {
                Prefix::Negative => tags += 1,
                Prefix::Form(len) => {
                    self.read_exact(&mut buf[1..len])?;
                    let raw = decode_form(&buf[..len])
                        .ok_or(VarIntError::Malformed { prefix: buf[0], len })?;
                    return apply_negations(tags, raw).map(VarInt::from_int);
                },
            }
        }
    }
}

impl<R: io::Read + ?Sized> ReadVarIntExt for R {}

pub trait WriteVarIntExt: io::Write {
    /// Writes `value` and returns the number of bytes it took.
    fn write_varint(&mut self, value: i64) -> io::Result<usize> {
        let mut buf = [0; MAX_ENCODED_LEN];
        let bytes = encode_into(&mut buf, value);
        self.write_all(bytes)?;
        Ok(bytes.len())
    }
}

impl<W: io::Write + ?Sized> WriteVarIntExt for W {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::AnyI64;

    #[test]
    fn back_to_back() {
        let values = [0, -1, -5, 127, 128, 16384, -2097152, 4294967295, i64::MIN, i64::MAX];

        let mut out = Vec::new();
        let mut written = 0;
        for &v in &values {
            written += out.write_varint(v).unwrap();
        }
        assert_eq!(written, out.len());

        let mut rdr = out.as_slice();
        for &v in &values {
            assert_eq!(rdr.read_varint().unwrap().to_int(), v);
        }
        assert!(rdr.is_empty());
    }

    #[test]
    fn unexpected_eof() {
        let mut rdr: &[u8] = &[0xF8, 0xC0, 0x01];
        match rdr.read_varint() {
            Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("unexpected {:?}", other),
        }

        let mut empty: &[u8] = &[];
        assert!(matches!(empty.read_varint(), Err(Error::Io(_))));
    }

    #[test]
    fn negative_overflow() {
        let mut rdr: &[u8] = &[0xF4, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
        assert!(matches!(rdr.read_varint(), Err(Error::VarInt(VarIntError::Overflow))));
    }

    #[test]
    fn every_length_class() {
        let values = [
            5, -5, 200, -200, 20_000, -20_000, 3_000_000, -3_000_000,
            300_000_000, -300_000_000, 5_000_000_000, -5_000_000_000,
        ];

        let mut out = Vec::new();
        let lens: Vec<_> = values.iter().map(|&v| out.write_varint(v).unwrap()).collect();
        assert_eq!(lens, [1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 9, 10]);

        // a double negation and a small negative under a tag
        out.extend_from_slice(&[0xF8, 0xF9, 0xC0, 0x40, 0x00]);
        out.extend_from_slice(&[0xF8, 0xFE]);

        let mut rdr = out.as_slice();
        for &v in &values {
            assert_eq!(rdr.read_varint().unwrap().to_int(), v);
        }
        assert_eq!(rdr.read_varint().unwrap().to_int(), 16384);
        assert_eq!(rdr.read_varint().unwrap().to_int(), 3);
        assert!(rdr.is_empty());
    }

    quickcheck! {
        fn qc_stream_roundtrip(values: Vec<AnyI64>) -> bool {
            let mut out = Vec::new();
            for &AnyI64(v) in &values {
                out.write_varint(v).unwrap();
            }

            let mut rdr = io::Cursor::new(out);
            values.iter().all(|&AnyI64(v)| rdr.read_varint().unwrap().to_int() == v)
        }
    }
}
