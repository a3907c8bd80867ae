// Example: a simulated drag on a tab strip, released between two tabs, then
// tick-driven snap-back onto the centered one.
use centerstrip::{CenterStripOptions, ChildSize, LayoutMode};
use centerstrip_adapter::{DragEvent, Easing, SelectionController};

fn main() {
    let mut c = SelectionController::new(
        CenterStripOptions::new(LayoutMode::strip()).with_initial_viewport_width(360),
        0,
    )
    .with_on_select(Some(|index| {
        println!("host: selection changed -> {index}");
    }))
    .with_snap_animation(240, Easing::SmoothStep);

    // Host measurement pass.
    c.strip_mut()
        .set_children((0..6).map(|_| ChildSize::new(120, 48)));

    // The user grabs the strip and drags it a few frames.
    let mut now_ms = 0u64;
    c.on_drag(DragEvent::Start, now_ms);
    for _ in 0..8 {
        now_ms += 16;
        let dragged = c.strip().scroll_offset() + 23;
        c.on_scroll(dragged);
    }
    println!(
        "released at offset {} (centered index {})",
        c.strip().scroll_offset(),
        c.strip().centered_index()
    );
    c.on_drag(DragEvent::Stop, now_ms);

    // The selection callback fired above; the host confirms it, which starts
    // the animated scroll onto the new tab.
    c.set_selected(c.strip().centered_index(), now_ms);

    // Tick like a 60fps frame clock until the snap settles.
    while c.is_animating() {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            println!("t={now_ms}ms off={off}");
        }
    }

    println!(
        "done: off={} selected={}",
        c.strip().scroll_offset(),
        c.selected_index()
    );
}
