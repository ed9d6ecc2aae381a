// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_pinch_zoom::{
    ActiveInputs, ContainerMetrics, Dimensions, HeadlessHost, PinchZoom, PinchZoomConfig,
    TouchEvent, TouchEventKind, TouchId, TouchPoint, ZoomTransform,
};

fn attach() -> PinchZoom<HeadlessHost> {
    let host = HeadlessHost::new(ContainerMetrics::new((390.0, 844.0)), (4032.0, 3024.0))
        .with_device_pixel_ratio(3.0);
    PinchZoom::new(host, PinchZoomConfig::default()).expect("valid target")
}

/// A two-finger spread around the container center, one event per frame.
fn spread(frames: usize) -> Vec<TouchEvent> {
    (0..frames)
        .map(|i| {
            let half = 40.0 + 2.0 * i as f64;
            let time = 16.0 * (i + 1) as f64;
            TouchEvent::moved(
                time,
                &[
                    TouchPoint::new(1, (195.0 - half, 422.0 + 0.5 * i as f64)),
                    TouchPoint::new(2, (195.0 + half, 422.0 - 0.5 * i as f64)),
                ],
            )
        })
        .collect()
}

/// A one-finger drag to the lower right.
fn drag(frames: usize) -> Vec<TouchEvent> {
    (0..frames)
        .map(|i| {
            let step = 3.0 * i as f64;
            TouchEvent::moved(
                16.0 * (i + 1) as f64,
                &[TouchPoint::new(1, (100.0 + step, 200.0 + step))],
            )
        })
        .collect()
}

fn bench_pinch_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_pinch_zoom");

    for &frames in &[16_usize, 256] {
        let moves = spread(frames);
        let down = TouchEvent::start(
            0.0,
            &[],
            &[
                TouchPoint::new(1, (155.0, 422.0)),
                TouchPoint::new(2, (235.0, 422.0)),
            ],
        );
        group.bench_function(format!("pinch_gesture(frames={frames})"), |b| {
            b.iter_batched(
                attach,
                |mut zoom| {
                    zoom.handle(TouchEventKind::Start, &down).unwrap();
                    for event in &moves {
                        black_box(zoom.handle(TouchEventKind::Move, event).unwrap());
                    }
                    zoom.cancel().unwrap();
                    black_box(zoom);
                },
                BatchSize::SmallInput,
            );
        });

        let moves = drag(frames);
        let down = TouchEvent::start(0.0, &[], &[TouchPoint::new(1, (100.0, 200.0))]);
        group.bench_function(format!("pan_gesture(frames={frames})"), |b| {
            b.iter_batched(
                attach,
                |mut zoom| {
                    zoom.handle(TouchEventKind::Start, &down).unwrap();
                    for event in &moves {
                        black_box(zoom.handle(TouchEventKind::Move, event).unwrap());
                    }
                    black_box(zoom);
                },
                BatchSize::SmallInput,
            );
        });
    }

    let dimensions = Dimensions::new(ContainerMetrics::new((390.0, 844.0)), (4032.0, 3024.0));
    let mut inputs = ActiveInputs::new();
    inputs.register(TouchId(1), Point::new(150.0, 400.0), 0.0);
    inputs.register(TouchId(2), Point::new(240.0, 440.0), 0.0);
    inputs.update(TouchId(1), Point::new(90.0, 380.0), 16.0);
    inputs.update(TouchId(2), Point::new(310.0, 470.0), 16.0);

    group.bench_function("track_pair", |b| {
        let mut transform = ZoomTransform::fit(dimensions);
        b.iter(|| {
            let outcome = transform.track(black_box(&inputs), Some(5.0));
            black_box((outcome, transform.element_transform(3.0)));
        });
    });

    group.bench_function("snap", |b| {
        b.iter_batched(
            || {
                let mut transform = ZoomTransform::fit(dimensions);
                transform.track(&inputs, None);
                transform
            },
            |mut transform| {
                black_box(transform.snap());
                black_box(transform);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_pinch_zoom);
criterion_main!(benches);
