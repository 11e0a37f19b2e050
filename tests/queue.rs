//! Coalescing queue feeding the update loop

mod common;

use std::sync::mpsc;
use std::time::Duration;

use common::*;
use dockbar::messages::Msg;
use dockbar::queue::EventQueue;
use dockbar::update::update_all;

fn run_queued(model: &mut dockbar::PanelModel, msgs: &[Msg]) {
    let mut queue = EventQueue::new();
    for &msg in msgs {
        queue.push(msg);
    }
    let batch: Vec<Msg> = queue.drain().collect();
    update_all(model, batch).unwrap();
}

#[test]
fn test_coalesced_drag_lands_where_uncoalesced_does() {
    let mut direct = test_model(400, 300);
    let mut queued = test_model(400, 300);
    let p = grab_point(&direct);

    let mut msgs = vec![Msg::down(p.x, p.y)];
    for i in 1..=40 {
        msgs.push(Msg::move_to(p.x + i as f64 * 2.5, p.y - i as f64 * 1.25));
    }
    msgs.push(Msg::up(p.x + 100.0, p.y - 50.0));

    update_all(&mut direct, msgs.clone()).unwrap();
    run_queued(&mut queued, &msgs);
    assert_eq!(direct.geometry, queued.geometry);
    assert!(!queued.pointer.is_dragging());
}

#[test]
fn test_summed_ticks_reach_same_radii() {
    let mut direct = test_model(500, 300);
    let mut queued = test_model(500, 300);
    drag_by(&mut direct, -500.0, 0.0);
    drag_by(&mut queued, -500.0, 0.0);

    let ticks: Vec<Msg> = (0..10).map(|_| Msg::tick_ms(16)).collect();
    update_all(&mut direct, ticks.clone()).unwrap();
    run_queued(&mut queued, &ticks);
    assert!((direct.radii.top_left - queued.radii.top_left).abs() < 1e-9);
}

#[test]
fn test_channel_producer_feeds_queue() {
    let (tx, rx) = mpsc::channel();
    let mut model = test_model(400, 300);
    let p = grab_point(&model);

    let producer = std::thread::spawn(move || {
        tx.send(Msg::down(p.x, p.y)).unwrap();
        for i in 1..=100 {
            tx.send(Msg::move_to(p.x + i as f64, p.y)).unwrap();
        }
        tx.send(Msg::up(p.x + 100.0, p.y)).unwrap();
        tx.send(Msg::Tick(Duration::from_millis(8))).unwrap();
        tx.send(Msg::Tick(Duration::from_millis(8))).unwrap();
    });
    producer.join().unwrap();

    let mut queue = EventQueue::new();
    assert_eq!(queue.drain_channel(&rx), 104);
    // down, one merged move, up, one merged tick
    assert_eq!(queue.len(), 4);

    let batch: Vec<Msg> = queue.drain().collect();
    let cmds = update_all(&mut model, batch).unwrap();
    assert!(cmds.iter().any(|cmd| cmd.window_geometry().is_some()));
    assert_eq!(model.geometry.position.x, 500);
}
