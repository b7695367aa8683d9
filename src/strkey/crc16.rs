//! CRC-16/XMODEM checksum used by StrKey.

use crc::{CRC_16_XMODEM, Crc};

const XMODEM: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// Compute the CRC-16/XMODEM checksum of `data`.
///
/// Polynomial `0x1021`, initial value `0x0000`, no reflection and no final
/// XOR. StrKey appends the result little-endian; see [`to_le_bytes`].
#[must_use]
pub fn checksum(data: &[u8]) -> u16 {
    XMODEM.checksum(data)
}

/// Checksum bytes in the order StrKey stores them (low byte first).
#[must_use]
pub fn to_le_bytes(data: &[u8]) -> [u8; 2] {
    checksum(data).to_le_bytes()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn check_value() {
        assert_eq!(checksum(b"123456789"), 0x31c3);
    }

    #[test]
    fn empty() {
        assert_eq!(checksum(&[]), 0);
    }

    #[test]
    fn little_endian() {
        assert_eq!(to_le_bytes(b"123456789"), [0xc3, 0x31]);
    }
}
