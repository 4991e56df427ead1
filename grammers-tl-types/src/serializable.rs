// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// This trait allows for concrete instances to be serialized into
/// binary data as specified by the [Binary Data Serialization].
///
/// [Binary Data Serialization]: https://core.telegram.org/mtproto/serialize
pub trait Serializable {
    /// Serializes the instance into the given buffer.
    fn serialize(&self, buf: &mut impl Extend<u8>);

    /// Convenience function to serialize the object into a new buffer
    /// and return its bytes. It is more efficient to reuse a existing
    /// buffer with [`Serializable::serialize`].
    fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::new();
        self.serialize(&mut buffer);
        buffer
    }
}

impl Serializable for bool {
    /// Serializes the boolean according to the following definitions:
    ///
    /// * `false` is serialized as `boolFalse#bc799737 = Bool;`.
    /// * `true` is serialized as `boolTrue#997275b5 = Bool;`.
    #[allow(clippy::unreadable_literal)]
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        if *self { 0x997275b5u32 } else { 0xbc799737u32 }.serialize(buf)
    }
}

impl Serializable for i32 {
    /// Serializes the 32-bit signed integer according to `int ? = Int;`.
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        buf.extend(self.to_le_bytes().iter().copied())
    }
}

impl Serializable for u32 {
    /// Serializes the 32-bit unsigned integer according to `int ? = Int;`.
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        buf.extend(self.to_le_bytes().iter().copied())
    }
}

impl Serializable for i64 {
    /// Serializes the 64-bit signed integer according to `long ? = Long;`.
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        buf.extend(self.to_le_bytes().iter().copied())
    }
}

impl Serializable for [u8; 16] {
    /// Serializes the 128-bit integer according to `int128 4*[ int ] = Int128;`.
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        buf.extend(self.iter().copied())
    }
}

impl Serializable for [u8; 32] {
    /// Serializes the 256-bit integer according to `int256 8*[ int ] = Int256;`.
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        buf.extend(self.iter().copied())
    }
}

impl Serializable for f64 {
    /// Serializes the 64-bit floating point according to `double ? = Double;`.
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        buf.extend(self.to_le_bytes().iter().copied())
    }
}

impl<T: Serializable> Serializable for Vec<T> {
    /// Serializes a boxed vector of serializable items according to
    /// `vector#1cb5c415 {t:Type} # [ t ] = Vector t;`.
    #[allow(clippy::unreadable_literal)]
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        0x1cb5c415u32.serialize(buf);
        (self.len() as i32).serialize(buf);
        self.iter().for_each(|x| x.serialize(buf));
    }
}

impl<T: Serializable> Serializable for crate::RawVec<T> {
    /// Serializes a bare vector of serializable items, omitting the
    /// `vector#1cb5c415` constructor prefix.
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        (self.0.len() as i32).serialize(buf);
        self.0.iter().for_each(|x| x.serialize(buf));
    }
}

impl Serializable for String {
    /// Serializes a UTF-8 string according to `string ? = String;`.
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.as_bytes().serialize(buf)
    }
}

impl Serializable for Vec<u8> {
    /// Serializes a vector of bytes as a byte-string according to
    /// `string ? = String;`.
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        (&self[..]).serialize(buf)
    }
}

impl Serializable for &[u8] {
    /// Serializes a byte-string, using the short length-prefix form for
    /// buffers up to 253 bytes and the extended `254`-marker form for
    /// longer ones, then pads the result to a 4-byte boundary.
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let len = if self.len() <= 253 {
            buf.extend([self.len() as u8]);
            self.len() + 1
        } else {
            buf.extend([
                254,
                (self.len() & 0xff) as u8,
                ((self.len() >> 8) & 0xff) as u8,
                ((self.len() >> 16) & 0xff) as u8,
            ]);
            self.len()
        };
        let padding = (4 - (len % 4)) % 4;

        buf.extend(self.iter().copied());
        buf.extend((0..padding).map(|_| 0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_bool() {
        assert_eq!(true.to_bytes(), [0xb5, 0x75, 0x72, 0x99]);
        assert_eq!(false.to_bytes(), [0x37, 0x97, 0x79, 0xbc]);
    }

    #[test]
    fn serialize_ints() {
        assert_eq!(0i32.to_bytes(), [0x00, 0x00, 0x00, 0x00]);
        assert_eq!((-1i32).to_bytes(), [0xff, 0xff, 0xff, 0xff]);
        assert_eq!(1i64.to_bytes(), [0x1, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0]);
    }

    #[test]
    fn serialize_short_string() {
        assert_eq!("Hi!".to_owned().to_bytes(), [0x03, b'H', b'i', b'!']);
        assert_eq!(
            "Hi".to_owned().to_bytes(),
            [0x02, b'H', b'i', 0x0]
        );
    }

    #[test]
    fn serialize_long_string() {
        let long = "x".repeat(300);
        let bytes = long.clone().to_bytes();
        assert_eq!(bytes[0], 254);
        assert_eq!(bytes.len() % 4, 0);
        assert_eq!(&bytes[4..304], long.as_bytes());
    }

    #[test]
    fn serialize_boxed_vector() {
        assert_eq!(
            Vec::<i32>::new().to_bytes(),
            [0x15, 0xc4, 0xb5, 0x1c, 0x0, 0x0, 0x0, 0x0]
        );
    }

    #[test]
    fn serialize_raw_vector() {
        assert_eq!(
            crate::RawVec(vec![0x7f_i32]).to_bytes(),
            [0x1, 0x0, 0x0, 0x0, 0x7f, 0x0, 0x0, 0x0]
        );
    }
}
