use core::fmt;
use failure::Fail;
use std::io;

#[derive(Debug)]
pub struct DecodeError {
	pub kind: ErrorKind,
	pub offset: usize,
}

impl fmt::Display for DecodeError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} at offset {} (0x{1:X})", self.kind, self.offset)
	}
}

impl Fail for DecodeError {
	// Delegate `cause` to ErrorKind
	fn cause(&self) -> Option<&dyn Fail> {
		self.kind.cause()
	}
}

#[derive(Debug, Fail)]
pub enum ErrorKind {
	#[fail(display = "Frame sync not found")]
	SyncNotFound,
	#[fail(display = "Frame header truncated, {} of 4 bytes available", available)]
	InsufficientData { available: usize },
	#[fail(display = "Reserved MPEG audio version")]
	ReservedVersion,
	#[fail(display = "Reserved MPEG layer")]
	ReservedLayer,
	#[fail(display = "Unexpected IO Error: {}", _0)]
	IOError(#[fail(cause)] io::Error),
}

impl From<io::Error> for ErrorKind {
	fn from(e: io::Error) -> Self {
		ErrorKind::IOError(e)
	}
}
