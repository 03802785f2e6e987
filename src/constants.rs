use std::fmt;

/// MPEG audio version, in the order of its 2-bit encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MpegAudioVersion {
    Version2_5,
    Reserved,
    Version2,
    Version1,
}

/// MPEG layer, in the order of its 2-bit encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MpegLayer {
    Reserved,
    Layer3,
    Layer2,
    Layer1,
}

/// Channel mode, in the order of its 2-bit encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelMode {
    Stereo,
    JointStereo,
    DualMono,
    Mono,
}

impl MpegAudioVersion {
    /// Maps the low two bits of `bits` to a version.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => MpegAudioVersion::Version2_5,
            1 => MpegAudioVersion::Reserved,
            2 => MpegAudioVersion::Version2,
            _ => MpegAudioVersion::Version1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MpegAudioVersion::Version2_5 => "Version2_5",
            MpegAudioVersion::Reserved => "Reserved",
            MpegAudioVersion::Version2 => "Version2",
            MpegAudioVersion::Version1 => "Version1",
        }
    }
}

impl MpegLayer {
    /// Maps the low two bits of `bits` to a layer.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => MpegLayer::Reserved,
            1 => MpegLayer::Layer3,
            2 => MpegLayer::Layer2,
            _ => MpegLayer::Layer1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MpegLayer::Reserved => "Reserved",
            MpegLayer::Layer3 => "Layer3",
            MpegLayer::Layer2 => "Layer2",
            MpegLayer::Layer1 => "Layer1",
        }
    }
}

impl ChannelMode {
    /// Maps the low two bits of `bits` to a channel mode. Every value is valid.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => ChannelMode::Stereo,
            1 => ChannelMode::JointStereo,
            2 => ChannelMode::DualMono,
            _ => ChannelMode::Mono,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChannelMode::Stereo => "Stereo",
            ChannelMode::JointStereo => "JointStereo",
            ChannelMode::DualMono => "DualMono",
            ChannelMode::Mono => "Mono",
        }
    }
}

impl fmt::Display for MpegAudioVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for MpegLayer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

// kbps, -1 marks the free and forbidden slots
pub static BIT_RATES: [[i32; 16]; 5] = [
    [
        // Version1 Layer1
        -1, 32, 64, 96, 28, 60, 92, 24, 56, 88, 20, 52, 84, 16, 48, -1,
    ],
    [
        // Version1 Layer2
        -1, 32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384, -1,
    ],
    [
        // Version1 Layer3
        -1, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, -1,
    ],
    [
        // Version2/Version2_5 Layer1
        -1, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256, -1,
    ],
    [
        // Version2/Version2_5 Layer2 and Layer3
        -1, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, -1,
    ],
];

// Hz, -1 marks the reserved slot
pub static SAMPLING_RATES: [[i32; 4]; 3] = [
    [44100, 48000, 32000, -1], // Version1
    [22050, 24000, 16000, -1], // Version2
    [11025, 12000, 8000, -1],  // Version2_5
];

// Indexed by the raw layer value, like MpegLayer
pub static SAMPLES_PER_FRAME: [[u32; 4]; 3] = [
    [0, 1152, 1152, 384], // Version1
    [0, 576, 1152, 384],  // Version2
    [0, 576, 1152, 384],  // Version2_5
];

/// Row of `BIT_RATES` for a version/layer pair, `None` if either is reserved.
pub fn bit_rate_row(version: MpegAudioVersion, layer: MpegLayer) -> Option<usize> {
    match (version, layer) {
        (MpegAudioVersion::Version1, MpegLayer::Layer1) => Some(0),
        (MpegAudioVersion::Version1, MpegLayer::Layer2) => Some(1),
        (MpegAudioVersion::Version1, MpegLayer::Layer3) => Some(2),
        (MpegAudioVersion::Version2, MpegLayer::Layer1)
        | (MpegAudioVersion::Version2_5, MpegLayer::Layer1) => Some(3),
        (MpegAudioVersion::Version2, MpegLayer::Layer2)
        | (MpegAudioVersion::Version2, MpegLayer::Layer3)
        | (MpegAudioVersion::Version2_5, MpegLayer::Layer2)
        | (MpegAudioVersion::Version2_5, MpegLayer::Layer3) => Some(4),
        _ => None,
    }
}

/// Row of `SAMPLING_RATES` and `SAMPLES_PER_FRAME` for a version.
pub fn version_row(version: MpegAudioVersion) -> Option<usize> {
    match version {
        MpegAudioVersion::Version1 => Some(0),
        MpegAudioVersion::Version2 => Some(1),
        MpegAudioVersion::Version2_5 => Some(2),
        MpegAudioVersion::Reserved => None,
    }
}
