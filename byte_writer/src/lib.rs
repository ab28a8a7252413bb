//! Growable output buffer used by every format writer.
//!
//! Endianness is picked once when the writer is created and applies to every multi-byte append.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

pub struct ByteWriter {
    pub data: Vec<u8>,
    endian: Endian,
    offset: usize,
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new(Endian::Little)
    }
}

macro_rules! append_num {
    ($name:ident, $ty:ty) => {
        pub fn $name(&mut self, i: $ty) {
            match self.endian {
                Endian::Big => self.data.extend(i.to_be_bytes()),
                Endian::Little => self.data.extend(i.to_le_bytes()),
            }
            self.offset(std::mem::size_of::<$ty>());
        }
    };
}

impl ByteWriter {
    pub fn new(endian: Endian) -> Self {
        Self {
            data: Vec::new(),
            endian,
            offset: 0,
        }
    }

    fn offset(&mut self, offset: usize) {
        self.offset += offset;
    }

    pub fn get_offset(&self) -> usize {
        self.offset
    }

    append_num!(append_u16, u16);
    append_num!(append_i16, i16);
    append_num!(append_u32, u32);
    append_num!(append_i32, i32);
    append_num!(append_f32, f32);

    pub fn append_u8(&mut self, i: u8) {
        self.data.push(i);
        self.offset(1);
    }

    pub fn append_bool(&mut self, i: bool) {
        self.append_u8(i as u8);
    }

    pub fn append_u8_slice(&mut self, i: &[u8]) {
        self.data.extend_from_slice(i);
        self.offset(i.len());
    }

    pub fn append_zeros(&mut self, count: usize) {
        self.data.resize(self.data.len() + count, 0);
        self.offset(count);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn big_endian_numbers() {
        let mut writer = ByteWriter::new(Endian::Big);
        writer.append_u32(0x0132B4D8);
        writer.append_i16(-2);

        assert_eq!(writer.data, [0x01, 0x32, 0xB4, 0xD8, 0xFF, 0xFE]);
        assert_eq!(writer.get_offset(), 6);
    }

    #[test]
    fn little_endian_numbers() {
        let mut writer = ByteWriter::new(Endian::Little);
        writer.append_u16(0x1234);
        writer.append_f32(1.0);

        assert_eq!(writer.data, [0x34, 0x12, 0x00, 0x00, 0x80, 0x3F]);
    }

    #[test]
    fn zeros_and_slices_move_offset() {
        let mut writer = ByteWriter::default();
        writer.append_u8_slice(b"ab");
        writer.append_zeros(3);
        writer.append_bool(true);

        assert_eq!(writer.data, [b'a', b'b', 0, 0, 0, 1]);
        assert_eq!(writer.get_offset(), 6);
    }
}
