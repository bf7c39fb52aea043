//! Property tests for numeric fidelity and handle allocation

mod common;

use common::*;
use dxfwriter::entities::{Circle, Point};
use dxfwriter::{Document, DxfRecord, HandleAllocator, Tag, Vector3};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |v| v.is_finite())
}

proptest! {
    #[test]
    fn real_values_read_back_exactly(value in finite()) {
        let text = Tag::new(40, value).to_string();
        let rendered = text.split('\n').nth(1).unwrap();
        prop_assert!(!rendered.contains('e') && !rendered.contains('E'));
        prop_assert_eq!(rendered.parse::<f64>().unwrap(), value);
    }

    #[test]
    fn point_coordinates_read_back_exactly(x in finite(), y in finite(), z in finite()) {
        let mut handles = HandleAllocator::new();
        let point = Point::new(&mut handles, Vector3::new(x, y, z));
        let pairs = parse_pairs(&point.to_dxf_string());
        let coordinate = |code: i32| {
            pairs.iter().find(|p| p.0 == code).unwrap().1.parse::<f64>().unwrap()
        };
        prop_assert_eq!(coordinate(10), x);
        prop_assert_eq!(coordinate(20), y);
        prop_assert_eq!(coordinate(30), z);
    }

    #[test]
    fn integer_values_have_no_decimal_point(value in any::<i32>()) {
        let text = Tag::new(70, value).to_string();
        prop_assert_eq!(text, format!("70\n{}", value));
    }

    #[test]
    fn handles_stay_unique(count in 1usize..60) {
        let mut doc = Document::new();
        for i in 0..count {
            let circle = Circle::new(doc.handles(), Vector3::new(i as f64, 0.0, 0.0), 1.0);
            doc.add_entity(circle);
        }
        let pairs = parse_pairs(&doc.to_dxf_string());
        assert_balanced(&pairs);
        let handles = unique_handles(&handle_records(&pairs));
        let seed = handle_seed(&pairs);
        prop_assert!(handles.iter().all(|h| *h < seed));
        prop_assert_eq!(records(section(&pairs, "ENTITIES")).len(), count);
    }
}
