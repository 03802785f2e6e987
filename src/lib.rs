extern crate failure;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

mod constants;
mod context;
mod error;
mod header;

use crate::constants::*;
use crate::context::Context;

pub use crate::constants::{ChannelMode, MpegAudioVersion, MpegLayer};
pub use crate::error::{DecodeError, ErrorKind};
pub use crate::header::FrameHeader;

/// Number of bytes in a frame header.
pub const HEADER_SIZE: usize = 4;

/// Looks up the bitrate in kbps for a version, layer and 4-bit bitrate index.
///
/// Returns `-1` for the free and forbidden slots of the table, for indices above 15 and
/// for reserved versions or layers.
pub fn resolve_bitrate(version: MpegAudioVersion, layer: MpegLayer, bitrate_index: u8) -> i32 {
    match bit_rate_row(version, layer) {
        Some(row) if bitrate_index < 16 => BIT_RATES[row][bitrate_index as usize],
        _ => -1,
    }
}

/// Looks up the sampling frequency in Hz for a version and 2-bit sampling index.
///
/// Returns `-1` for the reserved slot, for indices above 3 and for a reserved version.
pub fn resolve_sampling_frequency(version: MpegAudioVersion, sampling_index: u8) -> i32 {
    match version_row(version) {
        Some(row) if sampling_index < 4 => SAMPLING_RATES[row][sampling_index as usize],
        _ => -1,
    }
}

fn read_header(context: &mut Context) -> Result<(usize, FrameHeader), DecodeError> {
    let offset = context.find_sync()?;
    let bytes = context.header_bytes()?;
    log::trace!(
        "Header bytes: {:02X} {:02X} {:02X} {:02X}",
        bytes[0],
        bytes[1],
        bytes[2],
        bytes[3]
    );

    let version = MpegAudioVersion::from_bits((bytes[1] & 0x18) >> 3);
    if version == MpegAudioVersion::Reserved {
        log::debug!("Frame header uses a reserved version");
        return Err(context.error(ErrorKind::ReservedVersion));
    }

    let layer = MpegLayer::from_bits((bytes[1] & 0x06) >> 1);
    if layer == MpegLayer::Reserved {
        log::debug!("Frame header uses a reserved layer");
        return Err(context.error(ErrorKind::ReservedLayer));
    }

    let has_crc = bytes[1] & 0x01 == 1;
    let bitrate_index = (bytes[2] & 0xF0) >> 4;
    let sampling_index = (bytes[2] & 0x0C) >> 2;
    let has_padding = (bytes[2] & 0x02) >> 1 != 0;
    let channel_mode = ChannelMode::from_bits((bytes[3] & 0xC0) >> 6);

    let header = FrameHeader {
        version,
        layer,
        bitrate: resolve_bitrate(version, layer, bitrate_index),
        sampling_frequency: resolve_sampling_frequency(version, sampling_index),
        channel_mode,
        has_crc,
        has_padding,
    };
    Ok((offset, header))
}

/// Finds the first frame header in `buffer` and decodes it.
///
/// On success, returns the offset of the frame sync along with the header.
///
/// # Examples
///
/// ```
/// let bytes = [0x00, 0x00, 0xFF, 0xFB, 0x90, 0x00];
/// let (offset, header) = mpeg_frame_header::find_header(&bytes).unwrap();
/// assert_eq!(2, offset);
/// assert_eq!(128, header.bitrate());
/// ```
pub fn find_header(buffer: &[u8]) -> Result<(usize, FrameHeader), DecodeError> {
    let mut context = Context::new(buffer);
    read_header(&mut context)
}

/// Decodes the first frame header in `buffer`.
///
/// The second element of the result is the number of bytes consumed, counted from the frame sync,
/// which is always [`HEADER_SIZE`]. Use [`find_header`] to learn where the sync was found.
///
/// # Examples
///
/// ```
/// use mpeg_frame_header::{MpegAudioVersion, MpegLayer};
///
/// let (header, consumed) = mpeg_frame_header::decode(&[0xFF, 0xFB, 0x90, 0x00]).unwrap();
/// assert_eq!(4, consumed);
/// assert_eq!(MpegAudioVersion::Version1, header.version());
/// assert_eq!(MpegLayer::Layer3, header.layer());
/// assert_eq!(44100, header.sampling_frequency());
/// ```
pub fn decode(buffer: &[u8]) -> Result<(FrameHeader, usize), DecodeError> {
    find_header(buffer).map(|(_, header)| (header, HEADER_SIZE))
}

/// Renders a multi-line description of a header.
pub fn describe(header: &FrameHeader) -> String {
    header.describe()
}

/// Iterator over every frame header in a buffer, see [`frames`].
pub struct Frames<'b> {
    context: Context<'b>,
    finished: bool,
}

impl<'b> Iterator for Frames<'b> {
    type Item = (usize, FrameHeader);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match read_header(&mut self.context) {
                Ok((offset, header)) => {
                    let step = header.frame_length().filter(|&n| n > 0).unwrap_or(1);
                    self.context.seek(offset + step);
                    return Some((offset, header));
                }
                Err(DecodeError {
                    kind: ErrorKind::ReservedVersion,
                    offset,
                })
                | Err(DecodeError {
                    kind: ErrorKind::ReservedLayer,
                    offset,
                }) => {
                    log::debug!("Resyncing after invalid header at offset {}", offset);
                    self.context.seek(offset + 1);
                }
                Err(_) => {
                    self.finished = true;
                    return None;
                }
            }
        }
    }
}

/// Walks `buffer` frame by frame, yielding the offset and header of each frame.
///
/// After a header the walk jumps over the frame's length, or a single byte when the length is
/// unknown. Headers with a reserved version or layer are skipped. The walk ends once no further
/// complete header can be found.
///
/// # Examples
///
/// ```
/// let mut bytes = vec![0u8; 417 * 2];
/// bytes[..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
/// bytes[417..421].copy_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
///
/// let offsets: Vec<usize> = mpeg_frame_header::frames(&bytes).map(|(offset, _)| offset).collect();
/// assert_eq!(vec![0, 417], offsets);
/// ```
pub fn frames(buffer: &[u8]) -> Frames<'_> {
    Frames {
        context: Context::new(buffer),
        finished: false,
    }
}

/// Reads everything from `reader` and decodes the first frame header found.
///
/// Returns the offset of the frame sync along with the header, like [`find_header`].
pub fn from_read<T>(reader: &mut T) -> Result<(usize, FrameHeader), DecodeError>
where
    T: Read,
{
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|e| DecodeError {
            kind: e.into(),
            offset: buffer.len(),
        })?;
    find_header(&buffer)
}

/// Decodes the first frame header of a file.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use mpeg_frame_header;
///
/// let path = Path::new("test/CBR128.mp3");
/// let (offset, header) = mpeg_frame_header::from_path(&path).unwrap();
/// println!("Header at offset {}: {}", offset, header);
/// ```
pub fn from_path<P>(path: P) -> Result<(usize, FrameHeader), DecodeError>
where
    P: AsRef<Path>,
{
    File::open(path)
        .map_err(|e| DecodeError {
            kind: e.into(),
            offset: 0,
        })
        .and_then(|mut file| from_read(&mut file))
}
