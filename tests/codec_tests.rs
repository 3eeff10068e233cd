//! Frame Codec Tests
//!
//! Round-trip, wire-format and malformed-input tests for every single-sample
//! frame kind. Codec parsers are entered just past the 3-byte tag, so tests
//! slice the header off before building the cursor.

use bedlink::protocol::catalog::{
    ACK_SIZE, DA1_SIZE, DC1_SIZE, DR1_SIZE, ERR_SIZE, HEADER_SIZE, MOD_SIZE, STA_SIZE, SYN_SIZE,
    YOP_SIZE,
};
use bedlink::protocol::cursor::Cursor;
use bedlink::protocol::frames::{ack, da1, dc1, dr1, err, mode, sta, syn, yop};
use bedlink::protocol::frames::{Da1Data, Dc1Data, Dr1Data, ErrorCode, Mode, StaData, YopData};
use bedlink::BedlinkError;

fn body(frame: &[u8]) -> Cursor {
    Cursor::new(&frame[HEADER_SIZE..])
}

// =============================================================================
// ACK Tests
// =============================================================================

#[test]
fn test_ack_round_trip() {
    let mut buf = [0u8; ACK_SIZE];
    let len = ack::create(&mut buf).unwrap();

    assert_eq!(len, ACK_SIZE);
    assert_eq!(&buf, b"$ACK\n");
    assert!(ack::parse(&mut body(&buf)).is_ok());
}

#[test]
fn test_ack_rejects_body() {
    // Anything between the tag and the end marker is a failure.
    let frame = b"$ACK,\n";
    assert!(ack::parse(&mut body(frame)).is_err());
}

// =============================================================================
// YOP Tests
// =============================================================================

#[test]
fn test_yop_round_trip() {
    let data = YopData {
        fsr_count: 8,
        fsc_count: 2,
    };
    let mut buf = [0u8; YOP_SIZE];
    let len = yop::create(&data, &mut buf).unwrap();

    assert_eq!(len, YOP_SIZE);
    assert_eq!(&buf, b"$YOP,08,02\n");
    assert_eq!(yop::parse(&mut body(&buf)).unwrap(), data);
}

#[test]
fn test_yop_rejects_zero_count() {
    let frame = b"$YOP,00,02\n";
    assert!(matches!(
        yop::parse(&mut body(frame)),
        Err(BedlinkError::ZeroSensorCount)
    ));

    let data = YopData {
        fsr_count: 0,
        fsc_count: 2,
    };
    let mut buf = [0u8; YOP_SIZE];
    assert!(yop::create(&data, &mut buf).is_err());
}

#[test]
fn test_yop_rejects_non_digit_count() {
    let frame = b"$YOP,ab,02\n";
    assert!(matches!(
        yop::parse(&mut body(frame)),
        Err(BedlinkError::BadDigit(b'a'))
    ));
}

// =============================================================================
// SYN Tests
// =============================================================================

#[test]
fn test_syn_round_trip_boundaries() {
    for time in [0u32, 1, 0x1234_5678, u32::MAX] {
        let mut buf = [0u8; SYN_SIZE];
        let len = syn::create(time, &mut buf).unwrap();

        assert_eq!(len, SYN_SIZE);
        assert_eq!(syn::parse(&mut body(&buf)).unwrap(), time);
    }
}

#[test]
fn test_syn_wire_format_is_big_endian() {
    let mut buf = [0u8; SYN_SIZE];
    syn::create(0x0102_0304, &mut buf).unwrap();

    assert_eq!(&buf[..5], b"$SYN,");
    assert_eq!(&buf[5..9], &[0x01, 0x02, 0x03, 0x04]);
    assert_eq!(buf[9], b'\n');
}

#[test]
fn test_syn_missing_terminator() {
    let frame = b"$SYN,\x01\x02\x03\x04,";
    assert!(matches!(
        syn::parse(&mut body(frame)),
        Err(BedlinkError::ExpectedTerminator)
    ));
}

// =============================================================================
// ERR Tests
// =============================================================================

#[test]
fn test_err_round_trip() {
    for code in [ErrorCode::BadFrame, ErrorCode::BadMode, ErrorCode::LowBattery] {
        let mut buf = [0u8; ERR_SIZE];
        let len = err::create(code, &mut buf).unwrap();

        assert_eq!(len, ERR_SIZE);
        assert_eq!(err::parse(&mut body(&buf)).unwrap(), code);
    }
}

#[test]
fn test_err_rejects_unknown_code() {
    let frame = b"$ERR,\x00\xFF\n";
    assert!(matches!(
        err::parse(&mut body(frame)),
        Err(BedlinkError::InvalidErrorCode(0x00FF))
    ));
}

// =============================================================================
// MOD Tests
// =============================================================================

#[test]
fn test_mod_round_trip_accurate() {
    let mut buf = [0u8; MOD_SIZE];
    let len = mode::create(Mode::Accurate, &mut buf).unwrap();

    assert_eq!(len, MOD_SIZE);
    assert_eq!(&buf, &[b'$', b'M', b'O', b'D', b',', 2, b'\n']);
    assert_eq!(mode::parse(&mut body(&buf)).unwrap(), Mode::Accurate);
}

#[test]
fn test_mod_rejects_out_of_range() {
    let frame = b"$MOD,\x03\n";
    assert!(matches!(
        mode::parse(&mut body(frame)),
        Err(BedlinkError::InvalidMode(3))
    ));

    // Out-of-range modes are unconstructible on the create side.
    assert!(Mode::try_from(5).is_err());
    assert_eq!(Mode::try_from(0).unwrap(), Mode::Sleep);
}

// =============================================================================
// STA Tests
// =============================================================================

#[test]
fn test_sta_round_trip() {
    let data = StaData {
        sync_time: 1000,
        battery: 87,
        fsr_count: 8,
        fsc_count: 2,
    };
    let mut buf = [0u8; STA_SIZE];
    let len = sta::create(&data, &mut buf).unwrap();

    assert_eq!(len, STA_SIZE);
    assert_eq!(sta::parse(&mut body(&buf)).unwrap(), data);
}

#[test]
fn test_sta_wire_format_mixes_binary_and_ascii() {
    let data = StaData {
        sync_time: 1000,
        battery: 100,
        fsr_count: 8,
        fsc_count: 2,
    };
    let mut buf = [0u8; STA_SIZE];
    sta::create(&data, &mut buf).unwrap();

    assert_eq!(&buf[..5], b"$STA,");
    assert_eq!(&buf[5..9], &[0x00, 0x00, 0x03, 0xE8]); // binary time
    assert_eq!(&buf[9..], b",100,08,02\n"); // ASCII decimals
}

#[test]
fn test_sta_battery_cap() {
    // 101% is rejected on parse...
    let frame = b"$STA,\x00\x00\x03\xE8,101,08,02\n";
    assert!(matches!(
        sta::parse(&mut body(frame)),
        Err(BedlinkError::BatteryOutOfRange(101))
    ));

    // ...and on create.
    let data = StaData {
        sync_time: 0,
        battery: 101,
        fsr_count: 8,
        fsc_count: 2,
    };
    let mut buf = [0u8; STA_SIZE];
    assert!(sta::create(&data, &mut buf).is_err());
}

// =============================================================================
// DR1 / DC1 / DA1 Tests
// =============================================================================

#[test]
fn test_dr1_round_trip_boundaries() {
    for fill in [0x0000u16, 0xFFFF] {
        let data = Dr1Data {
            time: u32::MAX,
            fsr_values: [fill; 8],
        };
        let mut buf = [0u8; DR1_SIZE];
        let len = dr1::create(&data, &mut buf).unwrap();

        assert_eq!(len, DR1_SIZE);
        assert_eq!(dr1::parse(&mut body(&buf)).unwrap(), data);
    }
}

#[test]
fn test_dc1_round_trip() {
    let data = Dc1Data {
        time: 42,
        fsc_values: [0x0102, 0xFFFE],
    };
    let mut buf = [0u8; DC1_SIZE];
    let len = dc1::create(&data, &mut buf).unwrap();

    assert_eq!(len, DC1_SIZE);
    assert_eq!(dc1::parse(&mut body(&buf)).unwrap(), data);
}

#[test]
fn test_da1_round_trip() {
    let data = Da1Data {
        time: 7,
        fsr_values: [0, 1, 2, 3, 4, 5, 6, 7],
        fsc_values: [0xAAAA, 0x5555],
    };
    let mut buf = [0u8; DA1_SIZE];
    let len = da1::create(&data, &mut buf).unwrap();

    assert_eq!(len, DA1_SIZE);
    assert_eq!(da1::parse(&mut body(&buf)).unwrap(), data);
}

#[test]
fn test_dr1_truncated_body() {
    // Valid head, body cut short: parse fails before touching any field.
    let frame = b"$DR1,\x00\x00\x03\xE8,\x00\x01";
    assert!(matches!(
        dr1::parse(&mut body(frame)),
        Err(BedlinkError::Truncated { .. })
    ));
}

#[test]
fn test_da1_missing_second_separator() {
    let mut buf = [0u8; DA1_SIZE];
    let data = Da1Data {
        time: 7,
        fsr_values: [0; 8],
        fsc_values: [0; 2],
    };
    da1::create(&data, &mut buf).unwrap();

    // Corrupt the separator between the FSR and FSC arrays.
    buf[HEADER_SIZE + 1 + 4 + 1 + 16] = b'x';
    assert!(matches!(
        da1::parse(&mut body(&buf)),
        Err(BedlinkError::ExpectedSeparator)
    ));
}

#[test]
fn test_create_into_undersized_buffer_fails() {
    let data = Dr1Data {
        time: 0,
        fsr_values: [0; 8],
    };
    let mut buf = [0u8; DR1_SIZE - 1];
    assert!(matches!(
        dr1::create(&data, &mut buf),
        Err(BedlinkError::BufferTooSmall { .. })
    ));
}
