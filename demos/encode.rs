use std::env;

use wspr_varint::VarInt;

fn main() {
    for arg in env::args().skip(1) {
        let value: i64 = arg.parse().unwrap();
        let bytes = VarInt::from_int(value).to_bytes();
        let hex: Vec<_> = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        println!("{} {}", value, hex.join(""));
    }
}
