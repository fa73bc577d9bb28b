use anyhow::{Context, Result};
use rune_config::RuneConfig;
use rune_tween::{
    AnimationTarget, Callback, InlineStyleAdapter, MemoryElement, PropertyMap, PropertyTarget,
    SystemClock, TweenParams, Tweener, TweenerSettings,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    // Load configuration from rune.toml, then env overrides
    let config = RuneConfig::load();
    let settings = TweenerSettings::from_config(&config.tween)
        .context("invalid [tween] configuration")?;
    log::info!(
        "tweener: fps={} frame={}ms default={}s {}",
        settings.fps,
        settings.frame_interval(),
        settings.time,
        settings.transition
    );

    let clock = SystemClock::new();
    let mut tweener = Tweener::new(clock)
        .with_settings(settings)
        .with_style_adapter(InlineStyleAdapter);
    tweener.init()?;

    // A plain object and a styled element, animated side by side.
    let point = Rc::new(RefCell::new(PropertyMap::new().with("x", 0).with("y", 0)));
    let panel = Rc::new(RefCell::new(
        MemoryElement::new()
            .with_style("width", "40px")
            .with_style("background-color", "#202020"),
    ));

    let point_target: AnimationTarget<MemoryElement> = AnimationTarget::object(point.clone());
    let params = TweenParams::new()
        .property("x", 320)
        .property("y", 180)
        .on_update(Callback::new(|target: &AnimationTarget<MemoryElement>, _| {
            if let AnimationTarget::Object(obj) = target {
                let obj = obj.borrow();
                let x = obj.property("x").map(|v| v.to_number()).unwrap_or_default();
                let y = obj.property("y").map(|v| v.to_number()).unwrap_or_default();
                println!("point  x={x:>7.2} y={y:>7.2}");
            }
        }))
        .on_complete(Callback::new(|_, _| println!("point  done")));
    tweener.add_tween(point_target, params, false)?;

    let params = TweenParams::from_json(serde_json::json!({
        "time": 0.6,
        "delay": 0.2,
        "transition": "easeOutBounce",
        "width": "240px",
        "background-color": "#3fa7ff",
    }))?;
    let panel_id = tweener.add_tween(AnimationTarget::element(panel.clone()), params, false)?;
    log::info!("panel tween {panel_id} created");

    while !tweener.is_idle() {
        if let Some(deadline) = tweener.next_deadline() {
            let wait = (deadline - tweener.now()).max(0.0);
            std::thread::sleep(Duration::from_secs_f64(wait / 1000.0));
        }
        tweener.run_due();
        let panel = panel.borrow();
        log::debug!(
            "panel  width={} background={}",
            panel.style("width").unwrap_or_default(),
            panel.style("background-color").unwrap_or_default()
        );
    }

    let panel = panel.borrow();
    println!(
        "final  point=({}, {}) panel width={} background={}",
        point.borrow().number("x").unwrap_or_default(),
        point.borrow().number("y").unwrap_or_default(),
        panel.style("width").unwrap_or_default(),
        panel.style("background-color").unwrap_or_default()
    );

    tweener.shutdown();
    Ok(())
}
