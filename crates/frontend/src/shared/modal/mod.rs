use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Open modals in mount order. Nested dialogs mount after their parent.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ModalOrder {
    ids: Vec<u64>,
    next_id: u64,
}

impl ModalOrder {
    pub fn push(&mut self) -> u64 {
        self.next_id += 1;
        self.ids.push(self.next_id);
        self.next_id
    }

    pub fn remove(&mut self, id: u64) {
        self.ids.retain(|open| *open != id);
    }

    pub fn is_top(&self, id: u64) -> bool {
        self.ids.last() == Some(&id)
    }
}

/// Shared stack of open modals; Escape closes only the topmost one.
#[derive(Clone, Copy)]
pub struct ModalStack {
    order: StoredValue<ModalOrder>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self {
            order: StoredValue::new(ModalOrder::default()),
        }
    }

    fn push(&self) -> u64 {
        let mut id = 0;
        self.order.update_value(|order| id = order.push());
        id
    }

    fn remove(&self, id: u64) {
        self.order.update_value(|order| order.remove(id));
    }

    fn is_top(&self, id: u64) -> bool {
        self.order.with_value(|order| order.is_top(id))
    }
}

impl Default for ModalStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Overlay dialog closed by the header button, the Escape key or a click on
/// the backdrop.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Extra class on the dialog box, e.g. `modal--wide`
    #[prop(optional)]
    class: &'static str,
    /// Optional footer (Close / Save buttons)
    #[prop(optional)]
    footer: Option<ChildrenFn>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let stack = use_context::<ModalStack>();
    let modal_id = stack.map(|stack| stack.push());

    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() != "Escape" || event.default_prevented() {
            return;
        }
        let on_top = match (stack, modal_id) {
            (Some(stack), Some(id)) => stack.is_top(id),
            _ => true,
        };
        if on_top {
            event.prevent_default();
            on_close.run(());
        }
    });
    on_cleanup(move || {
        keydown.remove();
        if let (Some(stack), Some(id)) = (stack, modal_id) {
            stack.remove(id);
        }
    });

    let dialog_class = if class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {}", class)
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class=dialog_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|footer| view! { <div class="modal-footer">{footer()}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_modal_is_on_top_until_removed() {
        let mut order = ModalOrder::default();
        let form_config = order.push();
        let edit_field = order.push();

        assert!(order.is_top(edit_field));
        assert!(!order.is_top(form_config));

        order.remove(edit_field);
        assert!(order.is_top(form_config));

        order.remove(form_config);
        assert!(!order.is_top(form_config));
    }
}
