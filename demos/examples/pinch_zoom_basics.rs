// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch/zoom basics.
//!
//! Drive `understory_pinch_zoom` headlessly through a drag, a pinch, and a
//! release, printing the CSS transform after each step.
//!
//! Run:
//! - `cargo run -p understory_examples --example pinch_zoom_basics`
//! - `RUST_LOG=understory_pinch_zoom=trace cargo run -p understory_examples --example pinch_zoom_basics`

use kurbo::Insets;
use tracing_subscriber::EnvFilter;
use understory_pinch_zoom::{
    ContainerMetrics, HeadlessHost, PinchZoom, PinchZoomConfig, TouchEvent, TouchEventKind,
    TouchPoint,
};

fn report(label: &str, zoom: &PinchZoom<HeadlessHost>) {
    let info = zoom.debug_info().expect("engine is attached");
    println!(
        "{label:<14} {:<44} scale={:.3} offset=({:.1}, {:.1}) phase={:?}",
        info.element_transform.to_string(),
        info.scale,
        info.offset.current.x,
        info.offset.current.y,
        info.phase,
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    // Configuration normally arrives as JSON from the embedding page.
    let config: PinchZoomConfig =
        serde_json::from_str(r#"{ "maxScale": 3, "hardScaleLimit": false }"#)
            .expect("valid config");

    // A 1200x800 photo in a 320x480 box with 10px padding and a 1px border.
    let container = ContainerMetrics::new((342.0, 502.0))
        .with_padding(Insets::uniform(10.0))
        .with_border(Insets::uniform(1.0));
    let host = HeadlessHost::new(container, (1200.0, 800.0)).with_device_pixel_ratio(2.0);
    let mut zoom = PinchZoom::new(host, config).expect("valid target");
    report("attached", &zoom);

    // One finger drags down and to the right.
    let finger = |x: f64, y: f64| TouchPoint::new(1, (x, y));
    zoom.handle(
        TouchEventKind::Start,
        &TouchEvent::start(0.0, &[], &[finger(100.0, 200.0)]),
    )
    .unwrap();
    zoom.handle(
        TouchEventKind::Move,
        &TouchEvent::moved(16.0, &[finger(130.0, 260.0)]),
    )
    .unwrap();
    report("drag", &zoom);

    // A second finger joins and the two spread apart, past the soft limit.
    let thumb = |x: f64, y: f64| TouchPoint::new(2, (x, y));
    zoom.handle(
        TouchEventKind::Start,
        &TouchEvent::start(32.0, &[finger(130.0, 260.0)], &[thumb(190.0, 260.0)]),
    )
    .unwrap();
    for step in 1..=4 {
        let spread = 30.0 + 40.0 * f64::from(step);
        let time = 32.0 + 16.0 * f64::from(step);
        zoom.handle(
            TouchEventKind::Move,
            &TouchEvent::moved(time, &[finger(160.0 - spread, 260.0), thumb(160.0 + spread, 260.0)]),
        )
        .unwrap();
        report(&format!("pinch {step}"), &zoom);
    }

    // Both fingers lift; the overshoot is kept and the image snaps into
    // bounds.
    zoom.handle(
        TouchEventKind::End,
        &TouchEvent::end(
            128.0,
            &[finger(0.0, 260.0), thumb(320.0, 260.0)],
            &[],
        ),
    )
    .unwrap();
    report("released", &zoom);

    zoom.destroy().unwrap();
    println!("after destroy: {:?}", zoom.debug_info().unwrap_err());
}
