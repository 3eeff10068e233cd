//! DAN frame codec
//!
//! `$DAN,<TIME>,<DELTA>,<R0>...<R7>,<C0><C1>[,<R0>...<R7>,<C0><C1>]...\n`:
//! the two-array generalization of DCN: each wave carries a full FSR array and
//! a full FSC array, capped at [`DAN_MAX_SAMPLES`].
//!
//! [`DanStream`] mirrors [`DcnStream`](super::dcn::DcnStream): init/extend/end
//! chunks concatenate to exactly what [`create`] emits.

use crate::error::{BedlinkError, Result};
use crate::protocol::catalog::{
    FrameKind, DAN_MAX_SAMPLES, DAN_MIN_SIZE, DAN_WAVE_SIZE, FSC_COUNT, FSR_COUNT, HEADER_SIZE,
    MAX_FRAME_SIZE, READING_SIZE,
};
use crate::protocol::cursor::Cursor;
use crate::protocol::writer::FrameWriter;

/// One DAN sampling wave: both sensor arrays acquired together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanWave {
    /// One reading per FSR channel
    pub fsr_values: [u16; FSR_COUNT],

    /// One reading per FSC channel
    pub fsc_values: [u16; FSC_COUNT],
}

/// Decoded DAN payload: a run of combined sampling waves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanData {
    /// Milliseconds since node boot at the first wave's acquisition
    pub time: u32,

    /// Milliseconds between consecutive waves
    pub delta: u32,

    /// Waves in acquisition order
    pub waves: Vec<DanWave>,
}

/// Parse a DAN body (cursor positioned just past the tag)
pub fn parse(cur: &mut Cursor) -> Result<DanData> {
    cur.require(DAN_MIN_SIZE - HEADER_SIZE)?;

    cur.expect_separator()?;
    let time = cur.read_u32();

    cur.expect_separator()?;
    let delta = cur.read_u32();

    cur.expect_separator()?;
    let mut waves = Vec::new();
    loop {
        // FSR array, separator, FSC array, plus the marker that follows.
        cur.require(READING_SIZE * FSR_COUNT + 1 + READING_SIZE * FSC_COUNT + 1)?;

        if waves.len() == DAN_MAX_SAMPLES {
            return Err(BedlinkError::TooManySamples {
                count: waves.len() + 1,
                max: DAN_MAX_SAMPLES,
            });
        }

        let mut fsr_values = [0u16; FSR_COUNT];
        cur.read_readings(&mut fsr_values);

        cur.expect_separator()?;
        let mut fsc_values = [0u16; FSC_COUNT];
        cur.read_readings(&mut fsc_values);

        waves.push(DanWave {
            fsr_values,
            fsc_values,
        });

        if cur.at_separator() {
            cur.advance(1);
            continue;
        }
        cur.expect_end()?;
        break;
    }

    Ok(DanData { time, delta, waves })
}

/// Serialize a complete DAN frame, returning its length
pub fn create(data: &DanData, out: &mut [u8]) -> Result<usize> {
    if data.waves.len() > DAN_MAX_SAMPLES {
        return Err(BedlinkError::TooManySamples {
            count: data.waves.len(),
            max: DAN_MAX_SAMPLES,
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
    w.put_head(FrameKind::Dan)?;
    w.put_sep()?;
    w.put_u32(time)?;
    w.put_sep()?;
    w.put_u32(delta)
}

fn write_wave(w: &mut FrameWriter, wave: &DanWave) -> Result<()> {
    w.put_sep()?;
    w.put_readings(&wave.fsr_values)?;
    w.put_sep()?;
    w.put_readings(&wave.fsc_values)
}

// =============================================================================
// Incremental Construction
// =============================================================================

/// Incremental DAN frame builder; see [`DcnStream`](super::dcn::DcnStream)
#[derive(Debug)]
pub struct DanStream {
    samples: usize,
}

impl DanStream {
    /// Open a frame: write head, time and delta into `out`
    pub fn init(time: u32, delta: u32, out: &mut [u8]) -> Result<(Self, usize)> {
        let mut w = FrameWriter::new(out);
        write_head(&mut w, time, delta)?;
        Ok((Self { samples: 0 }, w.finish()))
    }

    /// Append exactly one wave pair into `out`
    ///
    /// Fails without writing once the wave cap is reached.
    pub fn extend(&mut self, wave: &DanWave, out: &mut [u8]) -> Result<usize> {
        if self.samples == DAN_MAX_SAMPLES {
            return Err(BedlinkError::TooManySamples {
                count: self.samples + 1,
                max: DAN_MAX_SAMPLES,
            });
        }

        let mut w = FrameWriter::new(out);
        write_wave(&mut w, wave)?;
        self.samples += 1;

        let len = w.finish();
        debug_assert_eq!(len, DAN_WAVE_SIZE);
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
