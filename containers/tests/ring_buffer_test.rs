// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_containers::{ContainerError, ContainerHandle, ContainerKind, Element,
                      Operation, RingBuffer, assert_eq2};
use test_case::test_case;

fn contents(ring_buffer: &RingBuffer) -> Vec<Element> { ring_buffer.iter().collect() }

/// Exactly one of empty, full, or partially occupied holds, and the counts add up.
fn assert_consistent(ring_buffer: &RingBuffer) {
    assert!(!(ring_buffer.is_empty() && ring_buffer.is_full()));
    assert_eq2!(
        ring_buffer.data_count() + ring_buffer.free_count(),
        ring_buffer.capacity()
    );
    assert_eq2!(ring_buffer.is_empty(), ring_buffer.data_count() == 0);
    assert_eq2!(
        ring_buffer.is_full(),
        ring_buffer.data_count() == ring_buffer.capacity()
    );
    assert_eq2!(ring_buffer.iter().len(), ring_buffer.data_count());
}

#[test]
fn test_capacity_eight_scenario() {
    let mut ring_buffer = RingBuffer::create(8).unwrap();

    for value in 0..8 {
        ring_buffer.write(value);
        assert_consistent(&ring_buffer);
    }
    assert_eq2!(ring_buffer.data_count(), 8);
    assert!(ring_buffer.is_full());

    // Overwrite the oldest four.
    for value in -4..0 {
        ring_buffer.write(value);
        assert_consistent(&ring_buffer);
    }
    assert_eq2!(contents(&ring_buffer), vec![4, 5, 6, 7, -4, -3, -2, -1]);
    assert_eq2!(ring_buffer.data_count(), 8);

    assert_eq2!(ring_buffer.read(), Ok(4));
    assert_eq2!(ring_buffer.read(), Ok(5));
    assert_eq2!(ring_buffer.read(), Ok(6));
    assert_eq2!(contents(&ring_buffer), vec![7, -4, -3, -2, -1]);
    assert_eq2!(ring_buffer.data_count(), 5);
    assert_eq2!(ring_buffer.free_count(), 3);
    assert!(!ring_buffer.is_full());
    assert_consistent(&ring_buffer);

    // Drain.
    for expected in [7, -4, -3, -2, -1] {
        assert_eq2!(ring_buffer.read(), Ok(expected));
        assert_consistent(&ring_buffer);
    }
    assert!(ring_buffer.is_empty());
    assert_eq2!(
        ring_buffer.read(),
        Err(ContainerError::empty(ContainerKind::RingBuffer, Operation::Read))
    );

    // Usable again after draining, then cleared.
    ring_buffer.write(4);
    assert_eq2!(ring_buffer.data_count(), 1);
    ring_buffer.clear();
    assert!(ring_buffer.is_empty());
    assert_consistent(&ring_buffer);
}

#[test_case(1 ; "capacity 1")]
#[test_case(2 ; "capacity 2")]
#[test_case(5 ; "capacity 5")]
#[test_case(8 ; "capacity 8")]
fn test_fill_then_drain_round_trip(capacity: usize) {
    let mut ring_buffer = RingBuffer::create(capacity).unwrap();
    let values: Vec<Element> = (0..i32::try_from(capacity).unwrap()).collect();

    for value in &values {
        ring_buffer.write(*value);
    }
    assert!(ring_buffer.is_full());

    let drained: Vec<Element> = std::iter::from_fn(|| ring_buffer.read().ok()).collect();
    assert_eq2!(drained, values);
    assert!(ring_buffer.is_empty());
    assert_consistent(&ring_buffer);
}

/// Interleave writes and reads from every starting offset, and compare against a
/// simple model that keeps the most recent `capacity` values.
#[test_case(1)]
#[test_case(3)]
#[test_case(4)]
#[test_case(7)]
fn test_matches_bounded_queue_model(capacity: usize) {
    let mut ring_buffer = RingBuffer::create(capacity).unwrap();
    let mut model: std::collections::VecDeque<Element> = std::collections::VecDeque::new();

    for step in 0..200_i32 {
        // Every third step is a read, the rest are writes.
        if step % 3 == 2 {
            let expected = model.pop_front();
            assert_eq2!(ring_buffer.read().ok(), expected);
        } else {
            if model.len() == capacity {
                let _unused = model.pop_front();
            }
            model.push_back(step);
            ring_buffer.write(step);
        }

        assert_eq2!(contents(&ring_buffer), model.iter().copied().collect::<Vec<_>>());
        assert_consistent(&ring_buffer);
    }
}

#[test]
fn test_clear_twice_is_same_as_once() {
    let mut ring_buffer = RingBuffer::create(4).unwrap();
    for value in 0..6 {
        ring_buffer.write(value);
    }

    ring_buffer.clear();
    let once = ring_buffer.clone();
    ring_buffer.clear();
    assert_eq2!(ring_buffer, once);
    assert_eq2!(ring_buffer.data_count(), 0);
}

#[test]
fn test_create_errors() {
    assert!(matches!(
        RingBuffer::create(0),
        Err(ContainerError::InvalidArgument { .. })
    ));
    assert!(matches!(
        RingBuffer::create(usize::MAX),
        Err(ContainerError::AllocationFailure { .. })
    ));
}

#[test]
fn test_destroyed_handle() {
    let mut handle = Some(RingBuffer::create(8).unwrap());
    handle.handle_mut().unwrap().write(1);
    handle.destroy();
    handle.destroy();

    let invalid = Err(ContainerError::InvalidHandle {
        container: ContainerKind::RingBuffer,
    });
    assert_eq2!(handle.handle().map(RingBuffer::data_count), invalid);
}

#[test]
fn test_equal_contents_at_different_offsets_compare_equal() {
    let mut wrapped = RingBuffer::create(2).unwrap();
    wrapped.write(1);
    let _unused = wrapped.read().unwrap();
    wrapped.write(2);

    let mut fresh = RingBuffer::create(2).unwrap();
    fresh.write(2);

    assert_eq2!(contents(&wrapped), contents(&fresh));
    assert_eq2!(wrapped, fresh);
}
