use anyhow::Result;
use rune_tween::{
    AnimationTarget, Easing, InlineStyleAdapter, ManualClock, MemoryElement, TweenError,
    TweenParams, Tweener,
};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

fn ready_tweener(clock: &ManualClock) -> Result<Tweener<InlineStyleAdapter>> {
    let mut tweener = Tweener::new(clock.clone()).with_style_adapter(InlineStyleAdapter);
    tweener.init()?;
    Ok(tweener)
}

fn element(el: MemoryElement) -> (Rc<RefCell<MemoryElement>>, AnimationTarget<MemoryElement>) {
    let el = Rc::new(RefCell::new(el));
    let target = AnimationTarget::element(Rc::clone(&el));
    (el, target)
}

#[test]
fn styles_are_written_in_one_bulk_call_per_frame() -> Result<()> {
    let clock = ManualClock::new();
    let mut tweener = ready_tweener(&clock)?;
    let (el, target) = element(
        MemoryElement::new()
            .with_style("width", "0px")
            .with_style("height", "10px")
            .with_style("background-color", "#000000")
            .with_property("scrollTop", 0),
    );

    let params = TweenParams::new()
        .time(1.0)
        .transition(Easing::Linear)
        .property("width", 100)
        .property("height", "30px")
        .property("background-color", "#ffffff")
        .property("scrollTop", 200);
    tweener.add_tween(target.clone(), params, false)?;

    tweener.run_due();
    assert_eq!(el.borrow().bulk_writes(), 1);

    clock.set(500.0);
    tweener.run_due();
    {
        let el = el.borrow();
        assert_eq!(el.bulk_writes(), 2);
        assert_eq!(el.style("width"), Some("50px"));
        assert_eq!(el.style("height"), Some("20px"));
        assert_eq!(el.style("background-color"), Some("#808080"));
        assert_eq!(el.properties().number("scrollTop"), Some(100.0));
    }
    assert_eq!(
        tweener.get_tweens(&target),
        vec!["scrollTop", "width", "height", "background-color"]
    );

    clock.set(1000.0);
    tweener.run_due();
    let el = el.borrow();
    // Finishing values are written individually, not in bulk.
    assert_eq!(el.bulk_writes(), 2);
    assert_eq!(el.style("width"), Some("100px"));
    assert_eq!(el.style("height"), Some("30px"));
    assert_eq!(el.style("background-color"), Some("#ffffff"));
    assert_eq!(el.properties().number("scrollTop"), Some(200.0));
    Ok(())
}

#[test]
fn colors_accept_short_hex_and_rgb() -> Result<()> {
    let clock = ManualClock::new();
    let mut tweener = ready_tweener(&clock)?;
    let (el, target) = element(MemoryElement::new().with_style("color", "rgb(0, 0, 0)"));

    let params = TweenParams::new()
        .time(1.0)
        .transition(Easing::Linear)
        .property("color", "#f80");
    tweener.add_tween(target, params, false)?;
    tweener.run_due();
    assert_eq!(el.borrow().style("color"), Some("#000000"));

    clock.set(500.0);
    tweener.run_due();
    assert_eq!(el.borrow().style("color"), Some("#804400"));

    clock.set(1000.0);
    tweener.run_due();
    assert_eq!(el.borrow().style("color"), Some("#f80"));
    Ok(())
}

#[test]
fn transparent_reads_as_white() -> Result<()> {
    let clock = ManualClock::new();
    let mut tweener = ready_tweener(&clock)?;
    let (el, target) = element(MemoryElement::new());

    let params = TweenParams::new()
        .transition(Easing::Linear)
        .property("border-top-color", "#000000");
    tweener.add_tween(target, params, false)?;
    tweener.run_due();
    assert_eq!(el.borrow().style("border-top-color"), Some("#ffffff"));
    Ok(())
}

#[test]
fn bad_color_aborts_construction() -> Result<()> {
    let clock = ManualClock::new();
    let mut tweener = ready_tweener(&clock)?;
    let (el, target) = element(MemoryElement::new().with_style("color", "#000"));

    let err = tweener
        .add_tween(target.clone(), TweenParams::new().property("color", "bogus"), false)
        .unwrap_err();
    assert!(matches!(err, TweenError::ColorParse(_)));
    assert!(tweener.is_empty());
    assert!(!tweener.is_tweening(&target));
    assert_eq!(el.borrow().style("color"), Some("#000"));
    Ok(())
}

#[test]
fn non_style_names_on_elements_are_plain_properties() -> Result<()> {
    let clock = ManualClock::new();
    let mut tweener = ready_tweener(&clock)?;
    let (el, target) = element(MemoryElement::new());

    let params = TweenParams::new()
        .transition(Easing::Linear)
        .property("display", 3);
    tweener.add_tween(target, params, false)?;
    tweener.run_due();
    clock.set(1000.0);
    tweener.run_due();

    let el = el.borrow();
    assert_eq!(el.bulk_writes(), 0);
    assert_eq!(el.style("display"), None);
    assert_eq!(el.properties().number("display"), Some(3.0));
    Ok(())
}

#[test]
fn json_params_drive_an_element() -> Result<()> {
    let clock = ManualClock::new();
    let mut tweener = ready_tweener(&clock)?;
    let (el, target) = element(MemoryElement::new().with_style("opacity", "1"));

    let params = TweenParams::from_json(json!({
        "time": 0.5,
        "transition": "linear",
        "delay": 0,
        "opacity": 0,
        "left": "40px",
    }))?;
    tweener.add_tween(target.clone(), params, false)?;
    assert_eq!(tweener.get_tweens(&target), vec!["opacity", "left"]);

    tweener.run_due();
    clock.set(250.0);
    tweener.run_due();
    {
        let el = el.borrow();
        assert_eq!(el.style("opacity"), Some("0.5"));
        assert_eq!(el.style("left"), Some("20px"));
    }

    clock.set(500.0);
    tweener.run_due();
    let el = el.borrow();
    assert_eq!(el.style("opacity"), Some("0"));
    assert_eq!(el.style("left"), Some("40px"));
    Ok(())
}

#[test]
fn invalid_transition_is_rejected() -> Result<()> {
    let clock = ManualClock::new();
    let mut tweener = ready_tweener(&clock)?;
    let (_, target) = element(MemoryElement::new());

    let params = TweenParams::from_json(json!({"transition": "wobble", "width": 10}))?;
    let err = tweener.add_tween(target, params, false).unwrap_err();
    assert!(matches!(err, TweenError::InvalidParameter(_)));

    let err = TweenParams::<MemoryElement>::from_json(json!({"transition": 7})).unwrap_err();
    assert!(matches!(err, TweenError::InvalidParameter(_)));
    Ok(())
}
