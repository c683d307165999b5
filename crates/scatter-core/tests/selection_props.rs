// File: crates/scatter-core/tests/selection_props.rs
// Purpose: Property checks over arbitrary click sequences.

use std::time::{Duration, Instant};

use proptest::prelude::*;
use scatter_core::{Axis, ChartConfig, ClickOutcome, Dataset, Field, Record, ScatterController, Viewport};

fn dataset() -> Dataset {
    Dataset::new(vec![
        Record::new("AL", [42830.0, 21.1, 13.9, 19.3, 33.5, 38.6]),
        Record::new("AK", [71583.0, 19.9, 15.0, 11.2, 29.7, 33.3]),
        Record::new("AZ", [50068.0, 16.5, 14.4, 18.2, 28.9, 36.9]),
        Record::new("XX", [f64::NAN, 18.0, 12.0, 15.0, 30.0, 40.0]),
    ])
}

fn click() -> impl Strategy<Value = (bool, usize, u64)> {
    (any::<bool>(), 0usize..6, 0u64..1000)
}

proptest! {
    #[test]
    fn exactly_one_active_label_per_axis(clicks in proptest::collection::vec(click(), 0..40)) {
        let mut ctl = ScatterController::new(dataset(), ChartConfig::default());
        ctl.initial_render(Viewport::new(1200.0, 900.0));
        let mut now = Instant::now();

        for (on_x, field_idx, gap_ms) in clicks {
            now += Duration::from_millis(gap_ms);
            let axis = if on_x { Axis::X } else { Axis::Y };
            let field = Field::ALL[field_idx];
            let before = ctl.selection();

            match ctl.on_label_click(axis, field, now) {
                Ok(ClickOutcome::Unchanged) => prop_assert_eq!(ctl.selection(), before),
                Ok(ClickOutcome::Switched { to, .. }) => prop_assert_eq!(ctl.selection().get(axis), to),
                Err(_) => {
                    prop_assert_ne!(field.axis(), axis);
                    prop_assert_eq!(ctl.selection(), before);
                }
            }
            ctl.advance(now);

            let scene = ctl.scene().expect("rendered");
            for a in [Axis::X, Axis::Y] {
                let active: Vec<_> = scene.labels.iter().filter(|l| l.axis == a && l.active).collect();
                prop_assert_eq!(active.len(), 1);
                prop_assert_eq!(active[0].field, ctl.selection().get(a));
                prop_assert_eq!(scene.axis(a).field, ctl.selection().get(a));
            }
        }
    }

    #[test]
    fn untouched_axis_is_pixel_exact(field_idx in 0usize..3, ms in 0u64..2000) {
        let mut ctl = ScatterController::new(dataset(), ChartConfig::default());
        ctl.initial_render(Viewport::new(1200.0, 900.0));
        let ys: Vec<u64> = ctl.scene().expect("rendered").coords(Axis::Y).iter().map(|v| v.to_bits()).collect();

        let t0 = Instant::now();
        let _ = ctl.on_label_click(Axis::X, Field::X_OPTIONS[field_idx], t0);
        ctl.advance(t0 + Duration::from_millis(ms));

        let after: Vec<u64> = ctl.scene().expect("rendered").coords(Axis::Y).iter().map(|v| v.to_bits()).collect();
        prop_assert_eq!(ys, after);
    }
}
