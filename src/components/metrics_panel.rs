//! Resource history overview: one range selector driving every metric graph.
//!
//! DESIGN
//! ======
//! The panel holds the only writable [`TimeWindow`]. The range selector gets a
//! callback through [`use_range_selection`]; graphs get a read-only
//! `Signal<GraphProps>` through [`use_graph_props`]. Nothing flows back from
//! graphs to the window.

use leptos::prelude::*;

use crate::state::time_window::{GraphProps, TimeRangePreset, TimeWindow};

pub const RANGE_SELECT_LABEL: &str = "Select Time Range";

/// What the range-selection collaborator needs.
#[derive(Clone, Copy)]
pub struct RangeSelection {
    /// Label of the option selected on mount.
    pub default_value: &'static str,
    pub label: &'static str,
    /// Report a new `(start, end)` pair in unix seconds.
    pub on_change: Callback<(i64, i64)>,
}

pub fn use_range_selection() -> RangeSelection {
    expect_context::<RangeSelection>()
}

pub fn use_graph_props() -> Signal<GraphProps> {
    expect_context::<Signal<GraphProps>>()
}

#[component]
pub fn MetricsPanel(
    #[prop(into)] client_key: String,
    #[prop(into)] timezone: String,
    #[prop(optional)] default_range: TimeRangePreset,
    /// Renders the range selector; it reads [`use_range_selection`].
    range_select: ViewFn,
    /// One entry per graph; each reads [`use_graph_props`].
    graphs: Vec<ViewFn>,
) -> impl IntoView {
    let window = RwSignal::new(TimeWindow::default());

    let graph_props = Signal::derive(move || GraphProps::new(client_key.clone(), timezone.clone(), window.get()));

    let on_change = Callback::new(move |(start, end): (i64, i64)| {
        let next = TimeWindow::new(start, end);
        tracing::debug!(start, end, recent = next.is_recent(), "metrics time window changed");
        window.set(next);
    });

    provide_context(RangeSelection { default_value: default_range.label(), label: RANGE_SELECT_LABEL, on_change });
    provide_context(graph_props);

    view! {
        <section class="metrics-panel">
            <header class="metrics-panel__header">
                <h2 class="metrics-panel__title">"Resource Allocation History"</h2>
                <div class="metrics-panel__range">{range_select.run()}</div>
            </header>
            <div class="metrics-panel__graphs">
                {graphs
                    .into_iter()
                    .map(|graph| view! { <div class="metrics-panel__graph">{graph.run()}</div> })
                    .collect_view()}
            </div>
        </section>
    }
}
