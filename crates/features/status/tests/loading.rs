use futures::StreamExt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use vinewood_status::loading::{LoadingEvent, LoadingSequence, Stage, loading_stream_with};

#[tokio::test]
async fn stream_ends_after_single_ready() {
    let sequence = LoadingSequence::with_rng(StdRng::seed_from_u64(42));
    let tips = vec!["Press F1 for help".to_owned(), "Join the Discord".to_owned()];

    let events: Vec<LoadingEvent> =
        loading_stream_with(sequence, tips, Duration::from_millis(1), Duration::from_millis(5))
            .collect()
            .await;

    assert_eq!(events.first(), Some(&LoadingEvent::Tip { index: 0, text: "Press F1 for help".into() }));
    assert_eq!(events.last(), Some(&LoadingEvent::Ready));
    assert_eq!(events.iter().filter(|e| **e == LoadingEvent::Ready).count(), 1);

    let stages: Vec<Stage> = events
        .iter()
        .filter_map(|e| match e {
            LoadingEvent::Progress { stage, .. } => Some(*stage),
            _ => None,
        })
        .collect();
    assert!(stages.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(stages.last(), Some(&Stage::ReadyToLaunch));
}

#[tokio::test]
async fn stream_without_tips_only_reports_progress() {
    let sequence = LoadingSequence::with_rng(StdRng::seed_from_u64(1));
    let events: Vec<LoadingEvent> =
        loading_stream_with(sequence, Vec::new(), Duration::from_millis(1), Duration::from_millis(1))
            .collect()
            .await;

    assert!(events.iter().all(|e| !matches!(e, LoadingEvent::Tip { .. })));
    assert_eq!(events.last(), Some(&LoadingEvent::Ready));
}
