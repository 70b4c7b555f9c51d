use leptos::prelude::*;
use thaw::*;

use crate::form_config::controller::use_form_config;
use crate::form_config::messages::FormConfigMsg;
use crate::form_config::model::section_counts;

#[component]
pub fn SectionsTab() -> impl IntoView {
    let ctrl = use_form_config();
    let state = ctrl.state();
    let sections = Memo::new(move |_| state.with(|s| section_counts(&s.sections, &s.fields)));

    view! {
        <div class="sections-list">
            {move || {
                let sections = sections.get();
                if sections.is_empty() {
                    return view! { <p class="text-muted">"No sections defined yet."</p> }.into_any();
                }
                sections
                    .into_iter()
                    .map(|(section, count)| {
                        let name = section.clone();
                        view! {
                            <div class="section-item">
                                <span class="section-item__name">{section}</span>
                                <Badge>{count.to_string()}</Badge>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| ctrl.dispatch(FormConfigMsg::RenameSection(name.clone()))
                                >
                                    "Rename"
                                </Button>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
