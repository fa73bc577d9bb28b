use anyhow::Result;
use rune_tween::{
    AnimationTarget, Callback, Easing, InlineStyleAdapter, ManualClock, MemoryElement, PropertyMap,
    PropertyTarget, TweenError, TweenParams, TweenState, Tweener,
};
use std::cell::RefCell;
use std::rc::Rc;

fn ready_tweener(clock: &ManualClock) -> Result<Tweener<InlineStyleAdapter>> {
    let mut tweener = Tweener::new(clock.clone()).with_style_adapter(InlineStyleAdapter);
    tweener.init()?;
    Ok(tweener)
}

fn object() -> (Rc<RefCell<PropertyMap>>, AnimationTarget<MemoryElement>) {
    let map = Rc::new(RefCell::new(PropertyMap::new()));
    let target = AnimationTarget::object(Rc::clone(&map));
    (map, target)
}

#[test]
fn find_tween_by_target_id_and_name() -> Result<()> {
    let clock = ManualClock::new();
    let mut tweener = ready_tweener(&clock)?;
    let (_, target) = object();

    let id = tweener.add_tween(target.clone(), TweenParams::new().property("x", 10), false)?;

    assert_eq!(tweener.find_tween(&target), Some(id));
    assert_eq!(tweener.find_tween(id), Some(id));
    assert_eq!(tweener.find_tween(id.to_string().as_str()), Some(id));
    let tween = tweener.tween(id).expect("tween registered");
    assert_eq!(tweener.find_tween(tween), Some(id));

    let (_, stranger) = object();
    assert_eq!(tweener.find_tween(&stranger), None);
    assert!(!tweener.is_tweening(&stranger));
    assert!(tweener.get_tweens(&stranger).is_empty());
    Ok(())
}

#[test]
fn remove_all_tweens_empties_the_registry() -> Result<()> {
    let clock = ManualClock::new();
    let mut tweener = ready_tweener(&clock)?;
    let (a_map, a) = object();
    let (_, b) = object();

    tweener.add_tween(a.clone(), TweenParams::new().property("x", 10), false)?;
    tweener.add_tween(b.clone(), TweenParams::new().property("y", 10).delay(1.0), false)?;
    let (_, c) = object();
    tweener.add_tween(c.clone(), TweenParams::new().property("z", 10), true)?;
    tweener.run_due();

    assert!(tweener.remove_all_tweens());
    assert!(tweener.is_empty());
    assert!(tweener.is_idle());
    for target in [&a, &b, &c] {
        assert_eq!(tweener.find_tween(target), None);
    }
    assert_eq!(a_map.borrow().tween_tag(), None);
    assert!(!tweener.remove_all_tweens());

    // Nothing ticks after removal.
    let x = a_map.borrow().number("x");
    clock.set(2000.0);
    assert_eq!(tweener.run_due(), 0);
    assert_eq!(a_map.borrow().number("x"), x);
    Ok(())
}

#[test]
fn pause_and_resume_all() -> Result<()> {
    let clock = ManualClock::new();
    let mut tweener = ready_tweener(&clock)?;
    let (_, a) = object();
    let (_, b) = object();

    let first = tweener.add_tween(a, TweenParams::new().property("x", 10), false)?;
    let second = tweener.add_tween(b, TweenParams::new().property("x", 10), false)?;
    tweener.run_due();

    clock.set(100.0);
    assert!(tweener.pause_all_tweens());
    assert!(!tweener.pause_all_tweens());
    assert!(tweener.is_idle());
    for id in [first, second] {
        assert_eq!(tweener.tween(id).map(|t| t.state()), Some(TweenState::Stopped));
    }

    clock.set(500.0);
    assert!(tweener.resume_all_tweens());
    assert!(!tweener.is_idle());
    tweener.run_due();
    for id in [first, second] {
        let tween = tweener.tween(id).expect("tween registered");
        assert!(tween.is_running());
        assert_eq!(tween.end_time(), 500.0 + 1000.0 - 100.0);
    }
    assert!(!tweener.resume_all_tweens());
    Ok(())
}

#[test]
fn single_target_operations() -> Result<()> {
    let clock = ManualClock::new();
    let mut tweener = ready_tweener(&clock)?;
    let (map, target) = object();
    let (_, other) = object();

    let id = tweener.add_tween(target.clone(), TweenParams::new().property("x", 10), false)?;
    let other_id = tweener.add_tween(other.clone(), TweenParams::new().property("x", 10), false)?;
    tweener.run_due();
    clock.set(50.0);

    assert!(tweener.pause_tweens(&target));
    assert!(!tweener.pause_tweens(&target));
    assert!(tweener.tween(other_id).is_some_and(|t| t.is_running()));

    assert!(tweener.resume_tweens(&target));
    tweener.run_due();
    assert!(!tweener.resume_tweens(&target));

    assert!(tweener.remove_tweens(&target));
    assert!(!tweener.remove_tweens(&target));
    assert!(tweener.tween(id).is_none());
    assert_eq!(map.borrow().tween_tag(), None);
    assert!(tweener.is_tweening(&other));
    Ok(())
}

#[test]
fn remove_tweens_reports_paused_tweens_too() -> Result<()> {
    let clock = ManualClock::new();
    let mut tweener = ready_tweener(&clock)?;
    let (_, target) = object();

    tweener.add_tween(target.clone(), TweenParams::new().property("x", 10), true)?;
    assert!(!tweener.pause_tweens(&target));
    assert!(tweener.remove_tweens(&target));
    Ok(())
}

#[test]
fn completion_callback_chains_a_tween() -> Result<()> {
    let clock = ManualClock::new();
    let mut tweener = ready_tweener(&clock)?;
    let (map, target) = object();
    let commands = tweener.commands();

    let params = TweenParams::new()
        .time(0.5)
        .transition(Easing::Linear)
        .property("x", 10)
        .on_complete(Callback::new(move |target: &AnimationTarget<MemoryElement>, _| {
            let back = TweenParams::new()
                .time(0.5)
                .transition(Easing::Linear)
                .property("x", 0);
            commands.add_tween(target.clone(), back, false);
        }));
    let first = tweener.add_tween(target.clone(), params, false)?;
    tweener.run_due();

    clock.set(500.0);
    tweener.run_due();
    assert_eq!(map.borrow().number("x"), Some(10.0));
    assert!(tweener.tween(first).is_none());
    let second = tweener.find_tween(&target).expect("chained tween registered");
    assert_ne!(second, first);
    assert!(!tweener.is_idle());

    tweener.run_due();
    assert!(tweener.tween(second).is_some_and(|t| t.is_running()));

    clock.set(1000.0);
    tweener.run_due();
    assert_eq!(map.borrow().number("x"), Some(0.0));
    assert!(tweener.is_empty());
    assert!(tweener.is_idle());
    Ok(())
}

#[test]
fn update_callback_can_pause_everything() -> Result<()> {
    let clock = ManualClock::new();
    let mut tweener = ready_tweener(&clock)?;
    let (_, a) = object();
    let (_, b) = object();
    let commands = tweener.commands();

    let params = TweenParams::new()
        .property("x", 10)
        .on_update(Callback::new(move |_, _| commands.pause_all_tweens()));
    let first = tweener.add_tween(a, params, false)?;
    let second = tweener.add_tween(b, TweenParams::new().property("x", 10), false)?;

    clock.set(100.0);
    tweener.run_due();
    for id in [first, second] {
        assert_eq!(tweener.tween(id).map(|t| t.state()), Some(TweenState::Stopped));
    }
    assert!(tweener.is_idle());
    Ok(())
}

#[test]
fn rejected_queued_tween_is_dropped() -> Result<()> {
    let clock = ManualClock::new();
    let mut tweener = ready_tweener(&clock)?;
    let (_, target) = object();

    tweener
        .commands()
        .add_tween(target.clone(), TweenParams::new().transition("wobble").property("x", 1), false);
    assert!(!tweener.is_idle());
    assert_eq!(tweener.apply_commands(), 1);
    assert!(tweener.is_empty());
    assert!(tweener.is_idle());
    Ok(())
}

#[test]
fn operations_require_init() {
    let clock = ManualClock::new();
    let mut tweener: Tweener<InlineStyleAdapter> = Tweener::new(clock.clone());
    let (_, target) = object();

    let err = tweener
        .add_tween(target.clone(), TweenParams::new().property("x", 1), false)
        .unwrap_err();
    assert!(matches!(err, TweenError::Configuration(_)));
    assert!(matches!(tweener.init(), Err(TweenError::Configuration(_))));

    tweener.set_style_adapter(InlineStyleAdapter);
    assert!(tweener.init().is_ok());
    assert!(tweener.add_tween(target, TweenParams::new().property("x", 1), false).is_ok());

    tweener.shutdown();
    let (_, again) = object();
    assert!(tweener.add_tween(again, TweenParams::new().property("x", 1), false).is_err());
}
