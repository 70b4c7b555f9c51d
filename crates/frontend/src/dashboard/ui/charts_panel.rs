use leptos::prelude::*;

use crate::dashboard::charts::registry::ChartRegistry;
use crate::dashboard::charts::CHART_SLOTS;
use crate::dashboard::controller::use_dashboard;

/// Canvases for every chart slot. Chart.js redraws them after every
/// applied fetch.
#[component]
pub fn ChartsPanel() -> impl IntoView {
    let vm = use_dashboard().view_model();
    let registry = StoredValue::new_local(ChartRegistry::default());

    let version = Memo::new(move |_| vm.with(|vm| vm.data_version));

    Effect::new(move |_| {
        if version.get() == 0 {
            return;
        }
        let charts = vm.with_untracked(|vm| vm.charts.clone());
        registry.update_value(|r| r.render_all(&charts));
    });
    on_cleanup(move || registry.update_value(|r| r.destroy_all()));

    view! {
        <div class="charts-grid">
            {CHART_SLOTS
                .iter()
                .map(|slot| view! {
                    <div class="chart-card">
                        <canvas id=slot.canvas_id></canvas>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
