use contracts::dashboard::row::{value_text, RESUME_KEY};
use contracts::dashboard::Row;
use leptos::prelude::*;

use super::table::resume_link;
use crate::dashboard::controller::use_dashboard;
use crate::dashboard::messages::DashboardMsg;
use crate::shared::modal::Modal;

/// Every field of one candidate row.
#[component]
pub fn DetailsModal(row: Row) -> impl IntoView {
    let ctrl = use_dashboard();

    let items = row
        .entries()
        .map(|(key, value)| {
            let text = value_text(value);
            let value_view = if text.is_empty() {
                "N/A".into_any()
            } else if key == RESUME_KEY {
                resume_link(&text)
            } else {
                text.into_any()
            };
            view! {
                <div class="details-grid__label">{key.clone()}</div>
                <div class="details-grid__value">{value_view}</div>
            }
        })
        .collect_view();

    view! {
        <Modal
            title="Candidate Details"
            on_close=Callback::new(move |_| ctrl.dispatch(DashboardMsg::CloseModal))
        >
            <div class="details-grid">{items}</div>
        </Modal>
    }
}
