use contracts::dashboard::{CandidateStatus, UpdateStatusRequest};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboard::api::update_status;
use crate::dashboard::controller::use_dashboard;
use crate::dashboard::messages::DashboardMsg;
use crate::dashboard::status::{StatusEntry, StatusFeedback, FEEDBACK_RESET_MS};
use crate::shared::components::ui::SelectField;
use crate::shared::modal::Modal;

#[component]
pub fn StatusModal() -> impl IntoView {
    let ctrl = use_dashboard();
    let entries = ctrl.view_model().with_untracked(|vm| vm.status_entries());

    view! {
        <Modal
            title="Manage Candidate Status"
            class="modal--wide"
            on_close=Callback::new(move |_| ctrl.dispatch(DashboardMsg::CloseModal))
        >
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false min_width=160.0>"Name"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=200.0>"Email"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=220.0>"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {entries
                        .into_iter()
                        .map(|entry| view! { <StatusRow entry=entry /> })
                        .collect_view()}
                </TableBody>
            </Table>
        </Modal>
    }
}

/// One candidate with its own save feedback; rows never affect each other.
#[component]
fn StatusRow(entry: StatusEntry) -> impl IntoView {
    let current = RwSignal::new(entry.status.clone().unwrap_or_default());
    let feedback = RwSignal::new(StatusFeedback::Idle);
    let disabled = RwSignal::new(false);
    let options: Vec<(String, String)> = CandidateStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect();

    let email = entry.email.clone();
    let name = entry.name.clone().unwrap_or_default();
    let on_change = Callback::new(move |value: String| {
        let Some(status) = CandidateStatus::parse(&value) else {
            log::warn!("Ignoring unknown status {:?}", value);
            return;
        };
        current.set(value);
        disabled.set(true);
        feedback.set(StatusFeedback::Saving);

        let request = UpdateStatusRequest {
            email: email.clone(),
            name: name.clone(),
            status,
        };
        spawn_local(async move {
            match update_status(&request).await {
                Ok(()) => {
                    log::info!("Status of {} set to {}", request.email, request.status);
                    feedback.set(StatusFeedback::Saved);
                }
                Err(e) => {
                    log::error!("Failed to update status of {}: {}", request.email, e);
                    feedback.set(StatusFeedback::Error);
                }
            }
            TimeoutFuture::new(FEEDBACK_RESET_MS).await;
            disabled.set(false);
            feedback.update(|f| *f = f.after_reset());
        });
    });

    let display_name = entry.display_name();
    let email = entry.email.clone();

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout truncate=true>{display_name}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{email}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <div class="status-cell">
                        <SelectField
                            value=current
                            options=options
                            disabled=disabled
                            on_change=on_change
                        />
                        <span class=move || feedback.get().class()>{move || feedback.get().text()}</span>
                    </div>
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}
