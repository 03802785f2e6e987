use crate::error::*;

fn is_frame_sync(pair: &[u8]) -> bool {
	pair[0] == 0xFF && pair[1] & 0xE0 == 0xE0
}

/// Read position over an in-memory buffer.
pub struct Context<'b> {
	bytes: &'b [u8],
	offset: usize,
}

impl<'b> Context<'b> {
	pub fn new(bytes: &'b [u8]) -> Self {
		Context { bytes, offset: 0 }
	}

	pub fn seek(&mut self, offset: usize) {
		self.offset = offset.min(self.bytes.len());
	}

	/// Moves to the first frame sync at or after the current offset.
	///
	/// Every position up to `len - 2` is tested. On failure the context is left at the end of the buffer.
	pub fn find_sync(&mut self) -> Result<usize, DecodeError> {
		let remaining = self.bytes.get(self.offset..).unwrap_or(&[]);
		match remaining.windows(2).position(is_frame_sync) {
			Some(position) => {
				self.offset += position;
				log::debug!("Found frame sync at offset {}", self.offset);
				Ok(self.offset)
			}
			None => {
				self.offset = self.bytes.len();
				Err(self.error(ErrorKind::SyncNotFound))
			}
		}
	}

	/// Returns the 4 header bytes at the current offset without advancing.
	pub fn header_bytes(&self) -> Result<[u8; 4], DecodeError> {
		match self.bytes.get(self.offset..self.offset + 4) {
			Some(window) => Ok([window[0], window[1], window[2], window[3]]),
			None => Err(self.error(ErrorKind::InsufficientData {
				available: self.bytes.len().saturating_sub(self.offset),
			})),
		}
	}

	pub fn error(&self, kind: ErrorKind) -> DecodeError {
		DecodeError {
			kind,
			offset: self.offset,
		}
	}
}
