//! Headless `App` wrapping [`AnalyticsPlugin`] for integration tests.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::config::DashboardConfig;
use crate::fetch::{FetchOutcome, KpiFetchBuffer, KpiFetchDispatch};
use crate::AnalyticsPlugin;

/// Dispatches seen so far, in order.
#[derive(Resource, Default)]
pub struct CapturedDispatches(pub Vec<KpiFetchDispatch>);

fn capture_dispatches(
    mut dispatches: EventReader<KpiFetchDispatch>,
    mut captured: ResMut<CapturedDispatches>,
) {
    captured.0.extend(dispatches.read().cloned());
}

pub struct TestDashboard {
    app: App,
}

impl TestDashboard {
    /// Dashboard on sample data, no API configured.
    pub fn new() -> Self {
        Self::build(DashboardConfig::default())
    }

    pub fn with_api(base_url: &str) -> Self {
        Self::build(DashboardConfig::with_api_base_url(Some(base_url)))
    }

    fn build(config: DashboardConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        // Inserted before the plugin so init_resource keeps it.
        app.insert_resource(config);
        app.add_plugins(AnalyticsPlugin);
        app.init_resource::<CapturedDispatches>();
        app.add_systems(Update, capture_dispatches.after(crate::AnalyticsSet::Fetch));
        app.update();
        Self { app }
    }

    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    /// Every later frame advances the clock by exactly `step`.
    pub fn set_frame_step(&mut self, step: Duration) {
        self.app.insert_resource(TimeUpdateStrategy::ManualDuration(step));
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<R: Resource>(&self) -> &R {
        self.app.world().resource::<R>()
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    pub fn dispatches(&self) -> &[KpiFetchDispatch] {
        &self.resource::<CapturedDispatches>().0
    }

    /// Posts an outcome the way a transport would.
    pub fn deliver(&mut self, outcome: FetchOutcome) {
        self.resource::<KpiFetchBuffer>().deliver(outcome);
    }
}
