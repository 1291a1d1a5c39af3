//! Integration tests for the aggregator lifecycle.

use segbar_core::{
    AudioDevice, AudioOutput, BarView, CpuOutput, ProviderKind, ProviderSnapshot, ViewOptions,
};
use segbar_store::{Aggregator, BarConfig, StoreError};

fn audio(volume: f64) -> ProviderSnapshot {
    ProviderSnapshot::Audio(AudioOutput {
        default_playback_device: Some(AudioDevice {
            volume: Some(volume),
            ..Default::default()
        }),
    })
}

fn cpu(usage: f64) -> ProviderSnapshot {
    ProviderSnapshot::Cpu(CpuOutput { usage: Some(usage) })
}

#[tokio::test]
async fn test_interleaved_providers_merge() {
    let mut aggregator = Aggregator::new(BarConfig::default());
    let audio_feed = aggregator.register(ProviderKind::Audio).await.unwrap();
    let cpu_feed = aggregator.register(ProviderKind::Cpu).await.unwrap();
    let mut sub = aggregator.subscribe();
    aggregator.init().unwrap();

    audio_feed.emit(audio(70.0)).await.unwrap();
    cpu_feed.emit(cpu(10.0)).await.unwrap();
    audio_feed.emit(audio(20.0)).await.unwrap();

    let mut revision = sub.changed().await.unwrap();
    while revision.version < 3 {
        revision = sub.changed().await.unwrap();
    }

    let state = revision.state;
    assert_eq!(state.len(), 2);
    assert_eq!(state.audio().and_then(AudioOutput::volume), Some(20.0));
    assert_eq!(state.cpu().and_then(|c| c.usage), Some(10.0));

    let view = BarView::build(&state, &ViewOptions::default());
    assert_eq!(view.right.audio.as_ref().unwrap().text, "[20%]");
    assert_eq!(view.right.cpu.as_ref().unwrap().text, "[10%]");

    aggregator.teardown().await;
}

#[tokio::test]
async fn test_subscription_closes_after_teardown() {
    let mut aggregator = Aggregator::new(BarConfig::default());
    let feed = aggregator.register(ProviderKind::Cpu).await.unwrap();
    let mut sub = aggregator.subscribe();
    aggregator.init().unwrap();

    feed.emit(cpu(42.0)).await.unwrap();
    let revision = sub.changed().await.unwrap();
    assert_eq!(revision.version, 1);

    assert_eq!(aggregator.teardown().await, 1);
    assert!(matches!(feed.emit(cpu(1.0)).await, Err(StoreError::Closed)));
    assert_eq!(aggregator.version(), 1);

    drop(aggregator);
    assert!(matches!(sub.changed().await, Err(StoreError::Closed)));
    assert_eq!(sub.current().cpu().and_then(|c| c.usage), Some(42.0));
}

#[tokio::test]
async fn test_register_after_teardown_fails() {
    let mut aggregator = Aggregator::new(BarConfig::default());
    aggregator.init().unwrap();
    aggregator.teardown().await;

    assert!(matches!(
        aggregator.register(ProviderKind::Date).await,
        Err(StoreError::Closed)
    ));
}

#[tokio::test]
async fn test_feed_reports_configured_interval() {
    let aggregator = Aggregator::new(BarConfig::default());
    let memory = aggregator.register(ProviderKind::Memory).await.unwrap();
    let media = aggregator.register(ProviderKind::Media).await.unwrap();

    assert_eq!(memory.refresh_interval().map(|d| d.as_millis()), Some(4000));
    assert_eq!(media.refresh_interval(), None);
}
