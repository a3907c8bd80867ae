use centerstrip::{CenterStrip, CenterStripOptions, ChildSize, LayoutMode};

fn main() {
    // Simulate a host measurement pass feeding a tab strip.
    let mut strip = CenterStrip::new(
        CenterStripOptions::new(LayoutMode::strip())
            .with_initial_viewport_width(360)
            .with_on_center_change(Some(|index| {
                println!("centered index -> {index}");
            })),
    );

    strip.set_children([
        ChildSize::new(120, 48),
        ChildSize::new(80, 48),
        ChildSize::new(140, 48),
        ChildSize::new(96, 48),
    ]);

    let g = strip.geometry();
    println!(
        "total={} viewport={} start_pad={} end_pad={}",
        g.total_width, g.viewport_width, g.start_padding, g.end_padding
    );
    for item in &g.items {
        println!("  item {}: left={} width={}", item.index, item.left, item.width);
    }

    // Sweep the scroll range; the on_center_change callback reports each
    // newly centered item exactly once.
    let max = strip.max_scroll_offset();
    for offset in 0..=max {
        strip.set_scroll_offset(offset);
    }

    // And jump straight back to centering a specific tab.
    let applied = strip.scroll_to_center(1);
    println!("scroll_to_center(1) -> {applied:?}");
}
