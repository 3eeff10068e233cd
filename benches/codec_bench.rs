//! Codec benchmarks
//!
//! Measures frame construction and full dispatch (identify + parse +
//! callback) for the small single-wave kinds and the largest streaming frame.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bedlink::protocol::catalog::{DA1_SIZE, DCN_MAX_SAMPLES, MAX_FRAME_SIZE, STA_SIZE};
use bedlink::protocol::frames::{da1, dcn, sta, Da1Data, DcnData, StaData};
use bedlink::{Dispatcher, FrameKind};

fn bench_create_small(c: &mut Criterion) {
    let status = StaData {
        sync_time: 86_400,
        battery: 93,
        fsr_count: 8,
        fsc_count: 2,
    };
    let wave = Da1Data {
        time: 86_400,
        fsr_values: [512; 8],
        fsc_values: [512; 2],
    };

    c.bench_function("create_sta", |b| {
        let mut buf = [0u8; STA_SIZE];
        b.iter(|| sta::create(black_box(&status), &mut buf).unwrap());
    });
    c.bench_function("create_da1", |b| {
        let mut buf = [0u8; DA1_SIZE];
        b.iter(|| da1::create(black_box(&wave), &mut buf).unwrap());
    });
}

fn bench_create_dcn_max(c: &mut Criterion) {
    let run = DcnData {
        time: 86_400,
        delta: 25,
        waves: vec![[512, 512]; DCN_MAX_SAMPLES],
    };

    c.bench_function("create_dcn_max", |b| {
        let mut buf = [0u8; MAX_FRAME_SIZE];
        b.iter(|| dcn::create(black_box(&run), &mut buf).unwrap());
    });
}

fn bench_dispatch(c: &mut Criterion) {
    let run = DcnData {
        time: 86_400,
        delta: 25,
        waves: vec![[512, 512]; DCN_MAX_SAMPLES],
    };
    let mut buf = [0u8; MAX_FRAME_SIZE];
    let len = dcn::create(&run, &mut buf).unwrap();

    let mut dispatcher = Dispatcher::new();
    dispatcher.registry_mut().set_callback(FrameKind::Dcn, |_| {});

    c.bench_function("dispatch_dcn_max", |b| {
        b.iter(|| dispatcher.dispatch(black_box(&buf[..len])));
    });
}

criterion_group!(
    benches,
    bench_create_small,
    bench_create_dcn_max,
    bench_dispatch
);
criterion_main!(benches);
