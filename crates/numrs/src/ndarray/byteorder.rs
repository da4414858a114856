use crate::core::{Endian, Integer};

use super::NdArray;

impl<T: Integer> NdArray<T> {
    /// Swaps the bytes of every element in place and flips the byte order
    /// metadata (`Native` flips to the opposite of the host order).
    pub fn byteswap(&mut self) -> &mut Self {
        for value in self.iter_mut() {
            *value = value.swap_bytes();
        }
        self.endianness = match self.endianness.resolve() {
            Endian::Big => Endian::Little,
            _ => Endian::Big,
        };
        self
    }

    /// Copy of the array re-encoded for `target`. Bytes are swapped exactly
    /// when the effective byte order changes; the copy carries `target` as
    /// its byte order.
    pub fn newbyteorder(&self, target: Endian) -> NdArray<T> {
        let mut out = self.clone();
        if self.endianness.resolve() != target.resolve() {
            for value in out.iter_mut() {
                *value = value.swap_bytes();
            }
        }
        out.endianness = target;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newbyteorder_swaps_only_on_change() {
        let array = NdArray::from_vec(vec![0x0102u16, 0x0304]);
        let same = array.newbyteorder(Endian::host());
        assert_eq!(same.as_slice(), &[0x0102, 0x0304]);
        assert_eq!(same.endianness(), Endian::host());

        let other = match Endian::host() {
            Endian::Little => Endian::Big,
            _ => Endian::Little,
        };
        let swapped = array.newbyteorder(other);
        assert_eq!(swapped.as_slice(), &[0x0201, 0x0403]);
        assert_eq!(swapped.endianness(), other);

        let back = swapped.newbyteorder(Endian::Native);
        assert_eq!(back.as_slice(), array.as_slice());
    }

    #[test]
    fn byteswap_is_an_involution() {
        let mut array = NdArray::from_vec(vec![1i32, -2, 300]);
        array.byteswap();
        assert_eq!(array[0], 1i32.swap_bytes());
        array.byteswap();
        assert_eq!(array.as_slice(), &[1, -2, 300]);
        assert_eq!(array.endianness(), Endian::host());
    }
}
