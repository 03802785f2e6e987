use std::fmt;

use crate::constants::*;

/// A decoded MPEG audio frame header.
///
/// Only obtainable from [`decode`](crate::decode) and friends, so the version and layer are never
/// `Reserved`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHeader {
    pub(crate) version: MpegAudioVersion,
    pub(crate) layer: MpegLayer,
    pub(crate) bitrate: i32,
    pub(crate) sampling_frequency: i32,
    pub(crate) channel_mode: ChannelMode,
    pub(crate) has_crc: bool,
    pub(crate) has_padding: bool,
}

impl FrameHeader {
    pub fn version(&self) -> MpegAudioVersion {
        self.version
    }

    pub fn layer(&self) -> MpegLayer {
        self.layer
    }

    /// Bitrate in kbps, `-1` for the free and forbidden indices.
    pub fn bitrate(&self) -> i32 {
        self.bitrate
    }

    /// Sampling frequency in Hz, `-1` for the reserved index.
    pub fn sampling_frequency(&self) -> i32 {
        self.sampling_frequency
    }

    pub fn channel_mode(&self) -> ChannelMode {
        self.channel_mode
    }

    /// Set when the protection bit is 1.
    pub fn has_crc(&self) -> bool {
        self.has_crc
    }

    pub fn has_padding(&self) -> bool {
        self.has_padding
    }

    /// Number of PCM samples per channel carried by the frame.
    pub fn samples_per_frame(&self) -> u32 {
        version_row(self.version).map_or(0, |row| SAMPLES_PER_FRAME[row][self.layer as usize])
    }

    /// Length of the whole frame in bytes, header included.
    ///
    /// Returns `None` when the bitrate or sampling frequency is a sentinel, since the
    /// length can't be derived from the header alone.
    pub fn frame_length(&self) -> Option<usize> {
        if self.bitrate <= 0 || self.sampling_frequency <= 0 {
            return None;
        }

        let bitrate = self.bitrate as u32 * 1000;
        let sampling_frequency = self.sampling_frequency as u32;
        let padding = if self.has_padding { 1 } else { 0 };

        let length = match self.layer {
            // Layer I counts in 4-byte slots
            MpegLayer::Layer1 => (12 * bitrate / sampling_frequency + padding) * 4,
            _ => self.samples_per_frame() / 8 * bitrate / sampling_frequency + padding,
        };
        Some(length as usize)
    }

    /// Appends a multi-line description of every field to `out`.
    pub fn describe_into<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str("{\n")?;
        writeln!(out, "\tMPEG Version: {},", self.version)?;
        writeln!(out, "\tMPEG Layer: {},", self.layer)?;
        writeln!(out, "\tBitrate: {},", self.bitrate)?;
        writeln!(out, "\tSampling Frequency: {},", self.sampling_frequency)?;
        writeln!(out, "\tChannel Mode: {},", self.channel_mode)?;
        writeln!(out, "\tHas CRC: {},", yes_no(self.has_crc))?;
        writeln!(out, "\tHas Padding: {},", yes_no(self.has_padding))?;
        out.write_str("}\n")
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "YES"
    } else {
        "NO"
    }
}

impl fmt::Display for FrameHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.describe_into(f)
    }
}
