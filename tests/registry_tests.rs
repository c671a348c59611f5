use drape::{
    NoOpStepObserver, OpenAir, PhysicsError, RopeConfig, RopeHandle, RopeRegistry, RopeSettings, StepObserver, Vec2,
    MAX_ROPE_COUNT,
};

fn short_rope() -> RopeConfig<f32> {
    RopeConfig::new(2).with_distance_per_segment(1.0)
}

fn request(registry: &mut RopeRegistry<f32>) -> Result<RopeHandle, PhysicsError> {
    registry.request_new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), &short_rope(), RopeSettings::anchored())
}

#[test]
fn pool_holds_exactly_max_ropes() {
    let mut registry = RopeRegistry::<f32>::new();
    let handles: Vec<RopeHandle> = (0..MAX_ROPE_COUNT).map(|_| request(&mut registry).unwrap()).collect();
    assert_eq!(registry.active_count(), MAX_ROPE_COUNT);

    assert_eq!(request(&mut registry), Err(PhysicsError::PoolExhausted { capacity: MAX_ROPE_COUNT }));

    let freed = handles[700];
    registry.dispose(freed).unwrap();
    let reused = request(&mut registry).unwrap();
    assert_eq!(reused.index(), 700);
    assert_ne!(reused.generation(), freed.generation());
    assert!(request(&mut registry).is_err());
}

#[test]
fn slots_fill_in_order() {
    let mut registry = RopeRegistry::<f32>::with_capacity(130);
    for expected in 0..130 {
        assert_eq!(request(&mut registry).unwrap().index(), expected);
    }
}

#[test]
fn lowest_free_slot_is_reused_first() {
    let mut registry = RopeRegistry::<f32>::with_capacity(8);
    let handles: Vec<RopeHandle> = (0..6).map(|_| request(&mut registry).unwrap()).collect();
    registry.dispose(handles[4]).unwrap();
    registry.dispose(handles[1]).unwrap();
    assert_eq!(request(&mut registry).unwrap().index(), 1);
    assert_eq!(request(&mut registry).unwrap().index(), 4);
    assert_eq!(request(&mut registry).unwrap().index(), 6);
}

#[test]
fn failed_request_leaves_pool_untouched() {
    let mut registry = RopeRegistry::<f32>::with_capacity(4);
    let bad = registry.request_new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), &RopeConfig::new(1), RopeSettings::new());
    assert_eq!(bad, Err(PhysicsError::InsufficientSegments(1)));
    assert_eq!(registry.active_count(), 0);
    assert_eq!(request(&mut registry).unwrap().index(), 0);
}

#[test]
fn clear_world_stops_ticking_but_keeps_data() {
    let mut registry = RopeRegistry::<f32>::with_capacity(16);
    let handles: Vec<RopeHandle> = (0..3).map(|_| request(&mut registry).unwrap()).collect();
    let air = OpenAir::new();
    assert_eq!(registry.post_update_world(&air, &mut NoOpStepObserver), 3);

    registry.clear_world();

    assert_eq!(registry.post_update_world(&air, &mut NoOpStepObserver), 0);
    assert_eq!(registry.active_count(), 0);
    assert!(registry.slot(2).is_some());
    assert!(!registry.is_occupied(2));
    for h in handles {
        assert!(!registry.is_alive(h));
        assert!(matches!(h.positions(&registry), Err(PhysicsError::StaleHandle { .. })));
    }
}

#[test]
fn disposed_handle_goes_stale() {
    let mut registry = RopeRegistry::<f32>::with_capacity(4);
    let handle = request(&mut registry).unwrap();
    assert_eq!(handle.segment_count(&registry), Ok(2));

    handle.dispose(&mut registry).unwrap();

    assert_eq!(
        handle.start(&registry),
        Err(PhysicsError::StaleHandle { index: 0, generation: handle.generation() })
    );
    assert!(registry.dispose(handle).is_err());

    // The slot is reissued under a new generation; the old handle stays dead.
    let fresh = request(&mut registry).unwrap();
    assert_eq!(fresh.index(), handle.index());
    assert!(registry.is_alive(fresh));
    assert!(!registry.is_alive(handle));
}

#[test]
fn foreign_handle_out_of_bounds() {
    let mut big = RopeRegistry::<f32>::with_capacity(8);
    let handles: Vec<RopeHandle> = (0..6).map(|_| request(&mut big).unwrap()).collect();
    let small = RopeRegistry::<f32>::with_capacity(2);
    assert_eq!(
        small.get(handles[5]).err(),
        Some(PhysicsError::HandleOutOfBounds { index: 5, capacity: 2 })
    );
}

#[test]
fn handle_reanchors_rope() {
    let mut registry = RopeRegistry::<f32>::with_capacity(4);
    let config = RopeConfig::new(4).with_distance_per_segment(5.0);
    let handle = registry
        .request_new(Vec2::new(0.0, 0.0), Vec2::new(15.0, 0.0), &config, RopeSettings::anchored())
        .unwrap();

    *handle.start_mut(&mut registry).unwrap() = Vec2::new(0.0, -5.0);
    *handle.end_mut(&mut registry).unwrap() = Vec2::new(15.0, -5.0);
    handle.settle(&mut registry, &OpenAir::new()).unwrap();

    assert_eq!(handle.start(&registry), Ok(Vec2::new(0.0, -5.0)));
    assert_eq!(handle.end(&registry), Ok(Vec2::new(15.0, -5.0)));
    let positions = handle.positions(&registry).unwrap();
    assert!(positions[1].y < -4.0, "middle stayed behind at {}", positions[1].y);
}

#[derive(Default)]
struct TickLog {
    slots: Vec<usize>,
    completed: usize,
}

impl StepObserver for TickLog {
    fn on_step_complete(&mut self) {
        self.completed += 1;
    }
    fn on_rope_ticked(&mut self, slot: usize) {
        self.slots.push(slot);
    }
}

#[test]
fn live_ropes_tick_in_slot_order() {
    let mut registry = RopeRegistry::<f32>::with_capacity(200);
    let handles: Vec<RopeHandle> = (0..150).map(|_| request(&mut registry).unwrap()).collect();
    for h in handles.iter().filter(|h| h.index() % 3 != 0) {
        registry.dispose(*h).unwrap();
    }

    let mut log = TickLog::default();
    let ticked = registry.post_update_world(&OpenAir::new(), &mut log);

    let expected: Vec<usize> = (0..150).filter(|i| i % 3 == 0).collect();
    assert_eq!(ticked, expected.len());
    assert_eq!(log.slots, expected);
    assert_eq!(log.completed, expected.len());
    assert_eq!(registry.handles().map(|h| h.index()).collect::<Vec<_>>(), expected);
}
