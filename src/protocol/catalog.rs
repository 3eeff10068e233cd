//! Frame Catalog
//!
//! The single declarative registry of every frame kind: its 3-character wire
//! tag, the frame markers, and the size arithmetic derived from the sensor
//! layout. Adding a new frame kind means adding one entry to [`TAGS`] (and the
//! matching variant/codec); nothing else in the crate enumerates tags.

// =============================================================================
// Wire Markers
// =============================================================================

/// Start-of-frame marker
pub const START: u8 = b'$';

/// End-of-frame marker
pub const END: u8 = b'\n';

/// Field separator
pub const SEP: u8 = b',';

/// Ask marker: `$XXX?\n` requests the receiver to produce and send data
pub const ASK: u8 = b'?';

/// Length of a frame tag in bytes
pub const TAG_SIZE: usize = 3;

/// Start marker + tag
pub const HEADER_SIZE: usize = 1 + TAG_SIZE;

// =============================================================================
// Field Sizes
// =============================================================================

/// Wire size of a timestamp or delta (32-bit big-endian)
pub const TIME_SIZE: usize = 4;

/// Wire size of one sensor reading (16-bit big-endian)
pub const READING_SIZE: usize = 2;

/// Number of FSR channels sampled per wave (compile-time constant)
pub const FSR_COUNT: usize = 8;

/// Number of FSC channels sampled per wave (compile-time constant)
pub const FSC_COUNT: usize = 2;

/// Battery percentage: three ASCII digits, 000..=100
pub const BAT_DIGITS: usize = 3;

/// Sensor count fields: two ASCII digits, 00..=99
pub const COUNT_DIGITS: usize = 2;

// =============================================================================
// Frame Sizes
// =============================================================================

/// `$ACK\n`
pub const ACK_SIZE: usize = HEADER_SIZE + 1;

/// `$YOP,RR,CC\n`
pub const YOP_SIZE: usize = HEADER_SIZE + 1 + COUNT_DIGITS + 1 + COUNT_DIGITS + 1;

/// `$SYN,<TIME>\n`
pub const SYN_SIZE: usize = HEADER_SIZE + 1 + TIME_SIZE + 1;

/// `$ERR,<CODE>\n` (16-bit code)
pub const ERR_SIZE: usize = HEADER_SIZE + 1 + 2 + 1;

/// `$MOD,<MODE>\n` (8-bit mode)
pub const MOD_SIZE: usize = HEADER_SIZE + 1 + 1 + 1;

/// `$STA,<TIME>,BBB,RR,CC\n`
pub const STA_SIZE: usize =
    HEADER_SIZE + 1 + TIME_SIZE + 1 + BAT_DIGITS + 1 + COUNT_DIGITS + 1 + COUNT_DIGITS + 1;

/// `$DR1,<TIME>,<R0>..<R7>\n`
pub const DR1_SIZE: usize = HEADER_SIZE + 1 + TIME_SIZE + 1 + READING_SIZE * FSR_COUNT + 1;

/// `$DC1,<TIME>,<C0><C1>\n`
pub const DC1_SIZE: usize = HEADER_SIZE + 1 + TIME_SIZE + 1 + READING_SIZE * FSC_COUNT + 1;

/// `$DA1,<TIME>,<R0>..<R7>,<C0><C1>\n`
pub const DA1_SIZE: usize =
    HEADER_SIZE + 1 + TIME_SIZE + 1 + READING_SIZE * FSR_COUNT + 1 + READING_SIZE * FSC_COUNT + 1;

/// Hard upper bound on any frame, streaming kinds included
pub const MAX_FRAME_SIZE: usize = 1024;

/// Size added by each extra DCN wave: separator + FSC array
pub const DCN_WAVE_SIZE: usize = 1 + READING_SIZE * FSC_COUNT;

/// Smallest valid DCN frame: head, time, delta and a single wave
pub const DCN_MIN_SIZE: usize =
    HEADER_SIZE + 1 + TIME_SIZE + 1 + TIME_SIZE + DCN_WAVE_SIZE + 1;

/// Maximum DCN waves so the total size never reaches [`MAX_FRAME_SIZE`]
pub const DCN_MAX_SAMPLES: usize = (MAX_FRAME_SIZE - DCN_MIN_SIZE) / DCN_WAVE_SIZE + 1;

/// Size added by each extra DAN wave: separator + FSR array + separator + FSC array
pub const DAN_WAVE_SIZE: usize = 1 + READING_SIZE * FSR_COUNT + 1 + READING_SIZE * FSC_COUNT;

/// Smallest valid DAN frame: head, time, delta and a single wave pair
pub const DAN_MIN_SIZE: usize =
    HEADER_SIZE + 1 + TIME_SIZE + 1 + TIME_SIZE + DAN_WAVE_SIZE + 1;

/// Maximum DAN waves so the total size never reaches [`MAX_FRAME_SIZE`]
pub const DAN_MAX_SAMPLES: usize = (MAX_FRAME_SIZE - DAN_MIN_SIZE) / DAN_WAVE_SIZE + 1;

// =============================================================================
// Frame Kinds
// =============================================================================

/// Closed enumeration of every frame kind on the wire
///
/// `Bat` has a tag reserved on the wire but carries no payload codec: battery
/// level is reported inside STA instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FrameKind {
    Ack = 0,
    Yop,
    Syn,
    Err,
    Bat,
    Mod,
    Sta,
    Dr1,
    Dc1,
    Dcn,
    Da1,
    Dan,
    /// Tag matched no catalog entry
    Unknown,
}

/// Number of known frame kinds (excludes `Unknown`)
pub const KIND_COUNT: usize = 12;

/// Tag table, one entry per known kind, in discriminant order
pub const TAGS: [(FrameKind, &[u8; TAG_SIZE]); KIND_COUNT] = [
    (FrameKind::Ack, b"ACK"),
    (FrameKind::Yop, b"YOP"),
    (FrameKind::Syn, b"SYN"),
    (FrameKind::Err, b"ERR"),
    (FrameKind::Bat, b"BAT"),
    (FrameKind::Mod, b"MOD"),
    (FrameKind::Sta, b"STA"),
    (FrameKind::Dr1, b"DR1"),
    (FrameKind::Dc1, b"DC1"),
    (FrameKind::Dcn, b"DCN"),
    (FrameKind::Da1, b"DA1"),
    (FrameKind::Dan, b"DAN"),
];

impl FrameKind {
    /// Resolve a 3-byte wire tag to its frame kind
    ///
    /// Linear scan over the catalog, exact 3-byte match. Returns
    /// [`FrameKind::Unknown`] when no entry matches.
    pub fn identify(tag: &[u8; TAG_SIZE]) -> FrameKind {
        for (kind, id) in TAGS.iter() {
            if *id == tag {
                return *kind;
            }
        }
        FrameKind::Unknown
    }

    /// The 3-character wire tag for this kind
    ///
    /// # Panics
    /// Panics for [`FrameKind::Unknown`], which has no wire representation.
    pub fn tag(self) -> &'static [u8; TAG_SIZE] {
        assert!(self != FrameKind::Unknown, "Unknown has no wire tag");
        TAGS[self as usize].1
    }

    /// Registry slot index for this kind
    ///
    /// # Panics
    /// Panics for [`FrameKind::Unknown`], which has no registry slot.
    pub(crate) fn slot(self) -> usize {
        assert!(self != FrameKind::Unknown, "Unknown has no registry slot");
        self as usize
    }
}
