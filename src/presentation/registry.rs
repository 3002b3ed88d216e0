use std::collections::{BTreeMap, HashMap};

use mockall::automock;

use super::charts::ChartConfig;

/// Named place on the page a chart is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartSlot {
    /// Language chart of the profile view.
    Language,
    /// Stars chart of the profile view.
    Stars,
    /// Language chart of side A.
    LanguageA,
    /// Stars chart of side A.
    StarsA,
    /// Language chart of side B.
    LanguageB,
    /// Stars chart of side B.
    StarsB,
}

impl ChartSlot {
    /// Id of the canvas element the chart renders into.
    pub fn canvas_id(self) -> &'static str {
        match self {
            ChartSlot::Language => "languageChart",
            ChartSlot::Stars => "starsChart",
            ChartSlot::LanguageA => "languageChartA",
            ChartSlot::StarsA => "starsChartA",
            ChartSlot::LanguageB => "languageChartB",
            ChartSlot::StarsB => "starsChartB",
        }
    }
}

/// Opaque identifier of a live chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChartHandle(pub u64);

/// Something that can draw charts and tear them down again.
#[automock]
pub trait ChartSurface: Send {
    /// Draws `config` into `slot` and returns a handle to the new chart.
    fn create(&mut self, slot: ChartSlot, config: &ChartConfig) -> ChartHandle;
    /// Tears down a chart created by [`ChartSurface::create`].
    fn destroy(&mut self, handle: ChartHandle);
}

/// The charts mounted for one query.
///
/// At most one chart is live per slot: mounting into an occupied slot destroys
/// the previous chart before the new one is created.
pub struct Session<S: ChartSurface> {
    surface: S,
    active: HashMap<ChartSlot, ChartHandle>,
}

impl<S: ChartSurface> Session<S> {
    /// An empty session drawing onto `surface`.
    pub fn new(surface: S) -> Self {
        Self { surface, active: HashMap::new() }
    }

    /// Draws `config` into `slot`, disposing whatever was there.
    pub fn mount(&mut self, slot: ChartSlot, config: &ChartConfig) -> ChartHandle {
        if let Some(previous) = self.active.remove(&slot) {
            tracing::debug!("Disposing chart {previous:?} in slot {slot:?}");
            self.surface.destroy(previous);
        }
        let handle = self.surface.create(slot, config);
        self.active.insert(slot, handle);
        handle
    }

    /// Destroys the chart in `slot`, if any.
    pub fn unmount(&mut self, slot: ChartSlot) -> bool {
        match self.active.remove(&slot) {
            Some(handle) => {
                self.surface.destroy(handle);
                true
            }
            None => false,
        }
    }

    /// Destroys every live chart.
    pub fn clear(&mut self) {
        for (_, handle) in self.active.drain() {
            self.surface.destroy(handle);
        }
    }

    /// The live chart in `slot`.
    pub fn active(&self, slot: ChartSlot) -> Option<ChartHandle> {
        self.active.get(&slot).copied()
    }

    /// Number of live charts.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no chart is live.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// The surface charts are drawn onto.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Ends the session and hands back the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

/// Keeps chart configurations in memory so a page can embed them.
#[derive(Debug, Default)]
pub struct HtmlChartSurface {
    next_id: u64,
    charts: BTreeMap<ChartHandle, (ChartSlot, ChartConfig)>,
}

impl HtmlChartSurface {
    /// Live charts in creation order.
    pub fn charts(&self) -> impl Iterator<Item = (ChartSlot, &ChartConfig)> {
        self.charts.values().map(|(slot, config)| (*slot, config))
    }
}

impl ChartSurface for HtmlChartSurface {
    fn create(&mut self, slot: ChartSlot, config: &ChartConfig) -> ChartHandle {
        self.next_id += 1;
        let handle = ChartHandle(self.next_id);
        self.charts.insert(handle, (slot, config.clone()));
        handle
    }

    fn destroy(&mut self, handle: ChartHandle) {
        self.charts.remove(&handle);
    }
}
