use proptest::prelude::*;
use vinewood_domain::site::Severity;
use vinewood_kernel::projection::{
    Categorized, Prominence, category_counts, filter_by_category, partition_by, resolve,
};
use vinewood_kernel::session::{DetailSession, wrap_next, wrap_previous};

#[derive(Debug, Clone)]
struct Item {
    id: usize,
    category: String,
    severity: Severity,
    featured: bool,
}

impl Categorized for Item {
    fn category_id(&self) -> &str {
        &self.category
    }
}

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![Just(Severity::High), Just(Severity::Medium), Just(Severity::Low)]
}

fn items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((prop::sample::select(vec!["cars", "city", "crew"]), severity(), any::<bool>()), 0..40)
        .prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(id, (category, severity, featured))| Item {
                    id,
                    category: category.to_owned(),
                    severity,
                    featured,
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn all_is_identity(items in items()) {
        let ids: Vec<usize> = filter_by_category(&items, "all").iter().map(|i| i.id).collect();
        let expected: Vec<usize> = items.iter().map(|i| i.id).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn filter_is_an_ordered_subsequence(items in items(), pick in prop::sample::select(vec!["cars", "city", "crew", "boats"])) {
        let kept = filter_by_category(&items, pick);
        prop_assert!(kept.iter().all(|i| i.category == pick));
        prop_assert!(kept.windows(2).all(|w| w[0].id < w[1].id));
        prop_assert_eq!(kept.len(), items.iter().filter(|i| i.category == pick).count());
    }

    #[test]
    fn counts_match_filter(items in items()) {
        let counts = category_counts(&items, [("all", "All"), ("cars", "Cars"), ("boats", "Boats")]);
        for entry in counts {
            prop_assert_eq!(entry.count, filter_by_category(&items, &entry.id).len());
        }
    }

    #[test]
    fn partition_is_exhaustive_and_disjoint(items in items()) {
        let parts = partition_by(&items, |i| i.severity);
        prop_assert_eq!(parts.total(), items.len());

        let mut seen: Vec<usize> = parts.flatten().iter().map(|i| i.id).collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..items.len()).collect::<Vec<_>>());

        for (band, bucket) in parts.iter() {
            prop_assert!(bucket.iter().all(|i| i.severity == band));
        }
    }

    #[test]
    fn prominence_split_preserves_order(items in items()) {
        let parts = partition_by(&items, |i| Prominence::from_flag(i.featured));
        for (_, bucket) in parts.iter() {
            prop_assert!(bucket.windows(2).all(|w| w[0].id < w[1].id));
        }
    }

    #[test]
    fn resolve_never_returns_blank(value in prop::option::of("[ a-z]{0,8}")) {
        let resolved = resolve(value.as_deref(), "Default");
        prop_assert!(!resolved.trim().is_empty());
    }

    #[test]
    fn wrap_stays_in_bounds(len in 1usize..50, pos in 0usize..50) {
        let pos = pos % len;
        prop_assert!(wrap_next(pos, len) < len);
        prop_assert!(wrap_previous(pos, len) < len);
        prop_assert_eq!(wrap_previous(wrap_next(pos, len), len), pos);
    }

    #[test]
    fn full_cycle_returns_to_start(len in 1usize..20, start in 0usize..20) {
        let visible: Vec<usize> = (0..len).collect();
        let start = start % len;
        let mut session = DetailSession::restore("all", Some(start), &visible);
        for _ in 0..len {
            session.next(&visible);
        }
        prop_assert_eq!(session.selected(), Some(&start));
    }
}
