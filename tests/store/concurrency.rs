//! Concurrency Tests
//!
//! Racing instantiations must converge on one entity; racing writers must
//! converge on the highest version regardless of arrival order.

use crate::common::*;
use rand::seq::SliceRandom;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn racing_instantiate_yields_one_entity() {
    let store = shared_store();
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store.instantiate_entity(&Identifier::new("Shared"))
            })
        })
        .collect();

    let entities: Vec<Entity> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(entities.iter().all(|e| *e == entities[0]));
    assert_eq!(store.len(), 1);
}

#[test]
fn racing_field_creation_yields_one_field() {
    let store = shared_store();
    let entity = store.instantiate_entity(&Identifier::new("Model"));
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let entity = entity.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                entity.get("name")
            })
        })
        .collect();

    let fields: Vec<Field> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(fields.iter().all(|f| *f == fields[0]));
    assert_eq!(entity.field_count(), 1);
}

#[test]
fn highest_version_wins_under_contention() {
    let store = shared_store();
    let field = field_of(&store, "Model", "counter");

    let mut versions: Vec<u64> = (1..=400).collect();
    versions.shuffle(&mut rand::thread_rng());

    let threads = 4;
    let chunk = versions.len() / threads;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = versions
        .chunks(chunk)
        .map(|batch| {
            let batch = batch.to_vec();
            let field = field.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let mut applied = 0usize;
                for n in batch {
                    match field.set_value(n as i64, v(n)) {
                        Ok(outcome) => {
                            assert!(outcome.is_applied());
                            applied += 1;
                        }
                        Err(e) => assert!(e.is_stale_write()),
                    }
                }
                applied
            })
        })
        .collect();

    let applied: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert!(applied >= 1);

    let current = field.get_versioned().unwrap();
    assert_eq!(current.version, v(400));
    assert_eq!(current.value, Value::Number(400));
}

#[test]
fn readers_never_see_torn_pairs() {
    let store = shared_store();
    let field = field_of(&store, "Model", "pair");
    field.set_value(0, v(0)).unwrap();

    let writer = {
        let field = field.clone();
        thread::spawn(move || {
            for n in 1..=2_000u64 {
                field.set_value(n as i64, v(n)).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..3)
        .map(|_| {
            let field = field.clone();
            thread::spawn(move || {
                for _ in 0..2_000 {
                    let current = field.get_versioned().unwrap();
                    // Each write stores value == version
                    assert_eq!(current.value, Value::Number(current.version.as_u64() as i64));
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
    assert_eq!(field.version(), v(2_000));
}

#[test]
fn unrelated_entities_written_in_parallel() {
    let store = shared_store();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let entity = store.instantiate_entity(&Identifier::new(format!("e{}", i)));
                for n in 1..=100u64 {
                    entity.get("n").set_value(n as i64, v(n)).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(store.len(), 8);
    for id in store.identifiers() {
        let entity = store.get(&id).unwrap();
        assert_eq!(entity.get("n").get_value().unwrap(), Value::Number(100));
    }
}
