use std::{env, str};

use wspr_varint::{DecoderOptions, MalformedPolicy, VarInt};

fn main() {
    let mut options = DecoderOptions::default();
    let mut args: Vec<_> = env::args().skip(1).collect();
    if args.first().map_or(false, |a| a == "--lenient") {
        options.set_malformed_policy(MalformedPolicy::Zero);
        args.remove(0);
    }

    for arg in args {
        let bytes = match parse_hex(&arg) {
            Some(bytes) => bytes,
            None => {
                eprintln!("{} is not an even-length hex string", arg);
                continue;
            },
        };

        match VarInt::from_bytes_with(&bytes, Some(options)) {
            Ok(varint) => println!("{} {}", arg, varint),
            Err(e) => eprintln!("{} {}", arg, e),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return None;
    }

    hex.as_bytes()
        .chunks(2)
        .map(|pair| str::from_utf8(pair).ok().and_then(|s| u8::from_str_radix(s, 16).ok()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_arguments() {
        assert_eq!(parse_hex("f805"), Some(vec![0xF8, 0x05]));
        assert_eq!(parse_hex("C04000"), Some(vec![0xC0, 0x40, 0x00]));
        assert_eq!(parse_hex("f80"), None);
        assert_eq!(parse_hex("zz"), None);
        assert_eq!(parse_hex("é0"), None);
    }
}
