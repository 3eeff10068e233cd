//! DCN frame codec
//!
//! `$DCN,<TIME>,<DELTA>,<C0><C1>[,<C0><C1>]...\n`: a timestamp, an
//! inter-wave delta and a separator-delimited run of FSC sampling waves,
//! capped at [`DCN_MAX_SAMPLES`] so the whole frame stays under the overall
//! frame size limit.
//!
//! Besides the one-shot [`create`], the frame can be assembled incrementally
//! through [`DcnStream`]: `init` writes the frame head, each `extend` appends
//! one wave, `end` writes the terminator. The concatenation of those chunks is
//! byte-for-byte what `create` emits for the same content, which lets the
//! sensor flush waves to the transport as they are acquired instead of
//! buffering a multi-kilobyte frame.

use crate::error::{BedlinkError, Result};
use crate::protocol::catalog::{
    FrameKind, DCN_MAX_SAMPLES, DCN_MIN_SIZE, DCN_WAVE_SIZE, FSC_COUNT, HEADER_SIZE,
    MAX_FRAME_SIZE, READING_SIZE,
};
use crate::protocol::cursor::Cursor;
use crate::protocol::writer::FrameWriter;

/// Decoded DCN payload: a run of FSC sampling waves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DcnData {
    /// Milliseconds since node boot at the first wave's acquisition
    pub time: u32,

    /// Milliseconds between consecutive waves
    pub delta: u32,

    /// FSC readings, one array per wave, in acquisition order
    pub waves: Vec<[u16; FSC_COUNT]>,
}

/// Parse a DCN body (cursor positioned just past the tag)
///
/// The wave loop reads one array, then peeks: a separator starts the next
/// wave, the end marker stops the frame, anything else is a failure. More
/// than [`DCN_MAX_SAMPLES`] waves is a failure as well.
pub fn parse(cur: &mut Cursor) -> Result<DcnData> {
    cur.require(DCN_MIN_SIZE - HEADER_SIZE)?;

    cur.expect_separator()?;
    let time = cur.read_u32();

    cur.expect_separator()?;
    let delta = cur.read_u32();

    cur.expect_separator()?;
    let mut waves = Vec::new();
    loop {
        // Wave readings plus the marker that follows them.
        cur.require(READING_SIZE * FSC_COUNT + 1)?;

        if waves.len() == DCN_MAX_SAMPLES {
            return Err(BedlinkError::TooManySamples {
                count: waves.len() + 1,
                max: DCN_MAX_SAMPLES,
            });
        }

        let mut wave = [0u16; FSC_COUNT];
        cur.read_readings(&mut wave);
        waves.push(wave);

        if cur.at_separator() {
            cur.advance(1);
            continue;
        }
        cur.expect_end()?;
        break;
    }

    Ok(DcnData { time, delta, waves })
}

/// Serialize a complete DCN frame, returning its length
///
/// Fails with [`BedlinkError::TooManySamples`] above the wave cap; within the
/// cap the output is always smaller than [`MAX_FRAME_SIZE`].
pub fn create(data: &DcnData, out: &mut [u8]) -> Result<usize> {
    if data.waves.len() > DCN_MAX_SAMPLES {
        return Err(BedlinkError::TooManySamples {
            count: data.waves.len(),
            max: DCN_MAX_SAMPLES,
        });
    }

    let mut w = FrameWriter::new(out);
    write_head(&mut w, data.time, data.delta)?;
    for wave in &data.waves {
        write_wave(&mut w, wave)?;
    }
    w.put_end()?;

    let len = w.finish();
    debug_assert!(len < MAX_FRAME_SIZE);
    Ok(len)
}

fn write_head(w: &mut FrameWriter, time: u32, delta: u32) -> Result<()> {
    w.put_head(FrameKind::Dcn)?;
    w.put_sep()?;
    w.put_u32(time)?;
    w.put_sep()?;
    w.put_u32(delta)
}

fn write_wave(w: &mut FrameWriter, wave: &[u16; FSC_COUNT]) -> Result<()> {
    w.put_sep()?;
    w.put_readings(wave)
}

// =============================================================================
// Incremental Construction
// =============================================================================

/// Incremental DCN frame builder
///
/// Constructing the stream opens the frame; dropping or [`DcnStream::end`]ing
/// it closes it. `extend` after `end` is unrepresentable because `end`
/// consumes the stream.
#[derive(Debug)]
pub struct DcnStream {
    samples: usize,
}

impl DcnStream {
    /// Open a frame: write head, time and delta into `out`
    ///
    /// Returns the stream and the number of bytes written. The frame is left
    /// open; no wave has been appended yet.
    pub fn init(time: u32, delta: u32, out: &mut [u8]) -> Result<(Self, usize)> {
        let mut w = FrameWriter::new(out);
        write_head(&mut w, time, delta)?;
        Ok((Self { samples: 0 }, w.finish()))
    }

    /// Append exactly one wave (separator + FSC array) into `out`
    ///
    /// Fails without writing once the wave cap is reached.
    pub fn extend(&mut self, wave: &[u16; FSC_COUNT], out: &mut [u8]) -> Result<usize> {
        if self.samples == DCN_MAX_SAMPLES {
            return Err(BedlinkError::TooManySamples {
                count: self.samples + 1,
                max: DCN_MAX_SAMPLES,
            });
        }

        let mut w = FrameWriter::new(out);
        write_wave(&mut w, wave)?;
        self.samples += 1;

        let len = w.finish();
        debug_assert_eq!(len, DCN_WAVE_SIZE);
        Ok(len)
    }

    /// Close the frame: write the end marker into `out`
    pub fn end(self, out: &mut [u8]) -> Result<usize> {
        let mut w = FrameWriter::new(out);
        w.put_end()?;
        Ok(w.finish())
    }

    /// Waves appended so far
    pub fn samples(&self) -> usize {
        self.samples
    }
}
