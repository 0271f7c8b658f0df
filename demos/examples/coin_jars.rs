// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coin jars.
//!
//! A headless rendition of the classic drag-and-drop demo: five coins, three
//! jars, each jar tallying the cents dropped into it. This binary plays the
//! layout and gesture collaborators, feeding the engine resting rectangles
//! and scripted drag deltas, then reads statuses and totals back out.
//!
//! Run:
//! - `cargo run -p windfall_demos --example coin_jars`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Rect, Vec2};
use windfall_demos::offset_rect;
use windfall_dragdrop::{
    DragContext, DragOptions, DragTargetId, DropOptions, DropTargetId, SnapAnchor,
};

const COINS: [(&str, f64, f64); 5] = [
    ("penny", 1.0, 30.0),
    ("nickel", 5.0, 40.0),
    ("dime", 10.0, 25.0),
    ("quarter", 25.0, 50.0),
    ("half dollar", 50.0, 60.0),
];

struct Jar {
    id: DropTargetId,
    rect: Rect,
    total: Rc<Cell<f64>>,
}

struct Coin {
    id: DragTargetId,
    name: &'static str,
    rest: Rect,
}

fn main() {
    let mut context = DragContext::new();

    // Three jars side by side, each holding at most one coin (the default
    // capacity) and tallying what lands in it.
    let jars: Vec<Jar> = (0..3)
        .map(|i| {
            let total = Rc::new(Cell::new(0.0_f64));
            let added = Rc::clone(&total);
            let removed = Rc::clone(&total);
            let id = context
                .register_drop_target(
                    DropOptions::default(),
                    move |cents: &f64| added.set(added.get() + *cents),
                    move |cents: &f64| removed.set(removed.get() - *cents),
                )
                .expect("default capacity is valid");
            let x = 40.0 + 120.0 * f64::from(i);
            let rect = Rect::new(x, 200.0, x + 80.0, 300.0);
            context.set_drop_bounds(id, rect);
            Jar { id, rect, total }
        })
        .collect();

    // Five coins in a row above the jars, centering themselves in whatever
    // jar they land in.
    let options = DragOptions::default().with_snap(SnapAnchor::Center);
    let coins: Vec<Coin> = COINS
        .iter()
        .enumerate()
        .map(|(i, &(name, cents, size))| {
            let id = context.register_drag_target(cents, options);
            let x = 30.0 + 70.0 * i as f64;
            let rest = Rect::new(x, 40.0, x + size, 40.0 + size);
            context.set_drag_bounds(id, rest);
            Coin { id, name, rest }
        })
        .collect();

    println!("Dropping the {} into jar 1", coins[0].name);
    drop_coin(&mut context, &coins[0], jars[0].rect);
    report(&context, &jars);

    println!("Trying the {} in jar 1, which is already holding a coin", coins[3].name);
    drop_coin(&mut context, &coins[3], jars[0].rect);
    report(&context, &jars);

    println!("Dropping the {} into jar 2 instead", coins[3].name);
    drop_coin(&mut context, &coins[3], jars[1].rect);
    report(&context, &jars);

    println!("Moving the {} over to jar 3", coins[0].name);
    drop_coin(&mut context, &coins[0], jars[2].rect);
    report(&context, &jars);

    println!("Resetting the board");
    context.reset_all();
    report(&context, &jars);
    for coin in &coins {
        let offset = context.drag_offset(coin.id).unwrap_or(Vec2::ZERO);
        println!("  {} back at rest: {}", coin.name, offset == Vec2::ZERO);
    }
}

/// Scripts one full gesture: grab `coin` wherever it currently sits, move its
/// center onto `into`'s center, release, and let layout settle once so the
/// snap resolver can align it.
fn drop_coin(context: &mut DragContext<f64>, coin: &Coin, into: Rect) {
    context.drag_start(coin.id);
    let current = offset_rect(coin.rest, context.drag_offset(coin.id).unwrap_or(Vec2::ZERO));
    let delta = into.center() - current.center();
    context.drag_move(coin.id, delta);
    let moved = offset_rect(coin.rest, context.drag_offset(coin.id).unwrap_or(Vec2::ZERO));
    context.set_drag_bounds(coin.id, moved);
    context.drag_end(coin.id);

    let settled = context.drag_offset(coin.id).unwrap_or(Vec2::ZERO);
    context.set_drag_bounds(coin.id, offset_rect(coin.rest, settled));
}

fn report(context: &DragContext<f64>, jars: &[Jar]) {
    for (i, jar) in jars.iter().enumerate() {
        println!(
            "  jar {}: {:?}, {} cents",
            i + 1,
            context.drop_status(jar.id).unwrap_or_default(),
            jar.total.get()
        );
    }
}
