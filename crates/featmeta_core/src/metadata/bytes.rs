/// Bounded little-endian cursor over an immutable byte slice.
///
/// Reads past the end return `None` and leave the cursor where it was.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

macro_rules! read_le {
	($($name:ident => $ty:ty),* $(,)?) => {
		$(
			/// Read one little-endian value and advance.
			pub fn $name(&mut self) -> Option<$ty> {
				let raw = self.read_exact(size_of::<$ty>())?;
				Some(<$ty>::from_le_bytes(raw.try_into().ok()?))
			}
		)*
	};
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Create a cursor positioned at byte offset `pos`.
	pub fn at(bytes: &'a [u8], pos: usize) -> Self {
		Self { bytes, pos }
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Option<&'a [u8]> {
		if n > self.remaining() {
			return None;
		}

		let start = self.pos;
		self.pos += n;
		Some(&self.bytes[start..self.pos])
	}

	read_le! {
		read_i8 => i8,
		read_u8 => u8,
		read_i16 => i16,
		read_u16 => u16,
		read_i32 => i32,
		read_u32 => u32,
		read_i64 => i64,
		read_u64 => u64,
		read_f32 => f32,
		read_f64 => f64,
	}
}
