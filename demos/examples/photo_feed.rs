// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascade layout driven by a simulated host container.
//!
//! This example shows how a host:
//! - implements `CascadeSource` over its own data (`PhotoFeed`),
//! - asks for the frames visible in its viewport while scrolling,
//! - reacts to bounds changes, re-laying out only when the width changes.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_cascade_demos --example photo_feed`

use kurbo::Rect;
use understory_cascade::{CascadeConfig, CascadeLayout, ItemId};
use understory_cascade_demos::PhotoFeed;

fn print_viewport(layout: &mut CascadeLayout<PhotoFeed>, viewport: Rect) {
    println!("viewport {viewport:?}:");
    for placement in layout.attributes_intersecting(viewport) {
        let ItemId { section, item } = placement.id;
        println!("  [{section}:{item:>2}] {:?}", placement.frame);
    }
}

fn main() {
    env_logger::init();

    let feed = PhotoFeed::sample(400.0, 600.0);
    let mut layout = CascadeLayout::new(feed, CascadeConfig::new(8.0, 8.0));

    let content = layout.content_size();
    println!("content size: {content:?}");
    for (section, album) in layout.sections().iter().zip(&layout.source().albums) {
        println!(
            "album {:?}: {} columns, bottom edge {}",
            album.title,
            section.columns().len(),
            section.bottom_edge()
        );
    }

    // Scroll through the content one screen at a time.
    let mut top = 0.0;
    while top < content.height {
        print_viewport(&mut layout, Rect::new(0.0, top, content.width, top + 600.0));
        top += 600.0;
    }

    // Rotation-like resize: only the width change triggers a new pass.
    let taller = Rect::new(0.0, 0.0, 400.0, 900.0);
    println!(
        "height-only change invalidates: {}",
        layout.invalidate_for_bounds(taller)
    );

    let wider = Rect::new(0.0, 0.0, 700.0, 400.0);
    if layout.invalidate_for_bounds(wider) {
        layout.source_mut().bounds = wider;
        println!("width changed, new content size: {:?}", layout.content_size());
    }

    let first = layout.attributes_for(ItemId::new(1, 0));
    println!("first holiday photo now at {:?}", first.frame);

    // Strict validation catches a container too narrow for its columns.
    layout.source_mut().bounds = Rect::new(0.0, 0.0, 20.0, 400.0);
    if let Err(err) = layout.try_prepare() {
        log::error!("layout rejected: {err}");
    }
}
