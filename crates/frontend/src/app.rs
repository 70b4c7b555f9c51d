use crate::dashboard::controller::DashboardController;
use crate::dashboard::messages::DashboardMsg;
use crate::dashboard::ui::DashboardPage;
use crate::shared::modal::ModalStack;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One controller owns all dashboard state for the page's lifetime.
    let controller = DashboardController::new();
    provide_context(controller);
    provide_context(ModalStack::new());
    controller.dispatch(DashboardMsg::Load);

    view! {
        <DashboardPage />
    }
}
