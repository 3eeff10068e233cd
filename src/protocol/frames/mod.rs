//! Frame Codecs
//!
//! One submodule per frame kind, each exposing `parse` (entered just past the
//! 3-byte tag) and `create` (serializing into a caller-supplied buffer). The
//! streaming kinds DCN and DAN additionally expose an init/extend/end builder.
//!
//! [`Frame`] is the tagged-variant union of every decoded payload; the
//! dispatcher hands it to registered callbacks. [`parse_body`] is the codec
//! lookup: one match over the closed kind enumeration, replacing per-frame
//! function-pointer tables.

pub mod ack;
pub mod da1;
pub mod dan;
pub mod dc1;
pub mod dcn;
pub mod dr1;
pub mod err;
pub mod mode;
pub mod sta;
pub mod syn;
pub mod yop;

pub use da1::Da1Data;
pub use dan::{DanData, DanStream, DanWave};
pub use dc1::Dc1Data;
pub use dcn::{DcnData, DcnStream};
pub use dr1::Dr1Data;
pub use err::ErrorCode;
pub use mode::Mode;
pub use sta::StaData;
pub use yop::YopData;

use crate::error::{BedlinkError, Result};
use crate::protocol::catalog::FrameKind;
use crate::protocol::cursor::Cursor;

/// A decoded frame payload
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// Body-less acknowledgement
    Ack,

    /// Node identification: sensor channel counts
    Yop(YopData),

    /// Clock synchronization timestamp
    Syn(u32),

    /// Reported error condition
    Err(ErrorCode),

    /// Sampling mode change
    Mod(Mode),

    /// Node status report
    Sta(StaData),

    /// Single FSR sampling wave
    Dr1(Dr1Data),

    /// Single FSC sampling wave
    Dc1(Dc1Data),

    /// Single combined sampling wave
    Da1(Da1Data),

    /// Multi-wave FSC run
    Dcn(DcnData),

    /// Multi-wave combined run
    Dan(DanData),
}

impl Frame {
    /// The kind this payload belongs to
    pub fn kind(&self) -> FrameKind {
        match self {
            Frame::Ack => FrameKind::Ack,
            Frame::Yop(_) => FrameKind::Yop,
            Frame::Syn(_) => FrameKind::Syn,
            Frame::Err(_) => FrameKind::Err,
            Frame::Mod(_) => FrameKind::Mod,
            Frame::Sta(_) => FrameKind::Sta,
            Frame::Dr1(_) => FrameKind::Dr1,
            Frame::Dc1(_) => FrameKind::Dc1,
            Frame::Da1(_) => FrameKind::Da1,
            Frame::Dcn(_) => FrameKind::Dcn,
            Frame::Dan(_) => FrameKind::Dan,
        }
    }
}

/// Parse the body of an identified frame
///
/// The cursor must sit just past the tag. BAT has a reserved tag but no
/// payload codec (battery level travels inside STA), so it fails with
/// [`BedlinkError::UnsupportedFrame`], as does `Unknown`.
pub fn parse_body(kind: FrameKind, cur: &mut Cursor) -> Result<Frame> {
    match kind {
        FrameKind::Ack => ack::parse(cur).map(|()| Frame::Ack),
        FrameKind::Yop => yop::parse(cur).map(Frame::Yop),
        FrameKind::Syn => syn::parse(cur).map(Frame::Syn),
        FrameKind::Err => err::parse(cur).map(Frame::Err),
        FrameKind::Mod => mode::parse(cur).map(Frame::Mod),
        FrameKind::Sta => sta::parse(cur).map(Frame::Sta),
        FrameKind::Dr1 => dr1::parse(cur).map(Frame::Dr1),
        FrameKind::Dc1 => dc1::parse(cur).map(Frame::Dc1),
        FrameKind::Da1 => da1::parse(cur).map(Frame::Da1),
        FrameKind::Dcn => dcn::parse(cur).map(Frame::Dcn),
        FrameKind::Dan => dan::parse(cur).map(Frame::Dan),
        FrameKind::Bat | FrameKind::Unknown => Err(BedlinkError::UnsupportedFrame(kind)),
    }
}
