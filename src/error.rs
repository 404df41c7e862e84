use std::{fmt, io, error, result};

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    VarInt(VarIntError),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::VarInt(varint) => write!(f, "{}", varint),
            Error::Io(io) => write!(f, "{}", io),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::VarInt(varint) => Some(varint),
            Error::Io(io) => Some(io),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<VarIntError> for Error {
    fn from(err: VarIntError) -> Error {
        Error::VarInt(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarIntError {
    /// No bytes at all were given to the decoder.
    Empty,
    /// A negative tag was not followed by the encoded magnitude.
    Truncated,
    /// The first byte and the total length do not describe any known form.
    Malformed { prefix: u8, len: usize },
    /// The value does not fit in an `i64`.
    Overflow,
}

impl fmt::Display for VarIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VarIntError::Empty => f.write_str("empty varint"),
            VarIntError::Truncated => f.write_str("truncated varint"),
            VarIntError::Malformed { prefix, len } => {
                write!(f, "malformed varint (prefix {:#010b}, {} bytes)", prefix, len)
            },
            VarIntError::Overflow => f.write_str("varint overflows a signed 64-bit integer"),
        }
    }
}

impl error::Error for VarIntError { }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = Error::from(VarIntError::Malformed { prefix: 0x80, len: 3 });
        assert_eq!(err.to_string(), "malformed varint (prefix 0b10000000, 3 bytes)");
        assert_eq!(Error::from(VarIntError::Empty).to_string(), "empty varint");
    }

    #[test]
    fn io_source() {
        let err = Error::from(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert!(error::Error::source(&err).is_some());
        assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }
}
