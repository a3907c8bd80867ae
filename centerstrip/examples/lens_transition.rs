use centerstrip::{
    CenterStrip, CenterStripOptions, ChildSize, LayoutMode, LensItem, RatioRange,
};

fn main() {
    // A camera lens picker: 0.5x / 1x / 3x, valid zoom range 0.5..=5.0.
    let ratio_range = RatioRange::new(0.5, 5.0);
    let mut strip = CenterStrip::new(
        CenterStripOptions::new(LayoutMode::Lens {
            expand_width: 900,
            ratio_range,
        })
        .with_initial_viewport_width(360),
    );

    strip.batch_update(|s| {
        s.set_children([
            ChildSize::new(56, 56),
            ChildSize::new(56, 56),
            ChildSize::new(56, 56),
        ]);
        s.set_lens_items([
            LensItem::Single { ratio: 0.5 },
            LensItem::Single { ratio: 1.0 },
            LensItem::Single { ratio: 3.0 },
        ]);
    });

    // Drive the collapse -> expand transition the way a host animation clock
    // would, sampling the interpolated layout at each step.
    for step in 0..=4 {
        let t = step as f32 / 4.0;
        strip.set_progress(t);
        let g = strip.geometry();
        let lefts: Vec<i64> = g.items.iter().map(|it| it.left).collect();
        println!("t={t:.2} total={} lefts={lefts:?}", g.total_width);
    }

    // Fully expanded: report the stretches of the zoom axis no lens covers.
    for span in strip.insufficient_ranges() {
        println!("uncovered: {:.3}..{:.3}", span.start, span.end);
    }
}
