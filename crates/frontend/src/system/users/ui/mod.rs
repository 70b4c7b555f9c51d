use contracts::system::users::{CreateViewerDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::dialogs::{alert, confirm};
use crate::shared::modal::Modal;
use crate::system::users::api;

#[derive(Debug, Clone, PartialEq)]
enum AddFeedback {
    None,
    Adding,
    Added(String),
    Failed(String),
}

impl AddFeedback {
    fn text(&self) -> String {
        match self {
            AddFeedback::None => String::new(),
            AddFeedback::Adding => "Adding...".to_string(),
            AddFeedback::Added(message) => message.clone(),
            AddFeedback::Failed(error) => format!("Error: {}", error),
        }
    }

    fn class(&self) -> &'static str {
        match self {
            AddFeedback::Added(_) => "form-feedback form-feedback--ok",
            AddFeedback::Failed(_) => "form-feedback form-feedback--error",
            _ => "form-feedback",
        }
    }
}

/// Account list with an "add viewer" form. Opening it loads `/api/users`;
/// a failed first load alerts and closes the modal.
#[component]
pub fn UserManagementModal(on_close: Callback<()>) -> impl IntoView {
    let users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let feedback = RwSignal::new(AddFeedback::None);

    let load = move |initial: bool| {
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(list) => {
                    log::debug!("Loaded {} users", list.len());
                    users.set(list);
                }
                Err(e) => {
                    log::error!("Failed to load users: {}", e);
                    alert(&format!("Could not load user data: {}", e));
                    if initial {
                        on_close.run(());
                    }
                }
            }
        });
    };
    load(true);

    let add_viewer = move || {
        let dto = CreateViewerDto {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        feedback.set(AddFeedback::Adding);
        spawn_local(async move {
            match api::create_viewer(&dto).await {
                Ok(message) => {
                    log::info!("Added viewer {}", dto.email);
                    feedback.set(AddFeedback::Added(message));
                    email.set(String::new());
                    password.set(String::new());
                    load(false);
                }
                Err(e) => {
                    log::error!("Failed to add viewer {}: {}", dto.email, e);
                    feedback.set(AddFeedback::Failed(e.to_string()));
                }
            }
        });
    };

    let delete = move |id: i64| {
        if !confirm("Are you sure you want to delete this user?") {
            return;
        }
        spawn_local(async move {
            match api::delete_user(id).await {
                Ok(()) => {
                    log::info!("Deleted user {}", id);
                    load(false);
                }
                Err(e) => {
                    log::error!("Failed to delete user {}: {}", id, e);
                    alert(&format!("Could not delete user: {}", e));
                }
            }
        });
    };

    view! {
        <Modal title="Manage Users" on_close=on_close>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false min_width=200.0>"Email"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=100.0>"Role"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=120.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || users.get()
                        key=|user| user.id
                        children=move |user| {
                            let id = user.id;
                            let email = user.email.clone();
                            let role = user.role.clone();
                            let can_delete = user.can_delete();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{email}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{role}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {if can_delete {
                                                view! {
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| delete(id)
                                                    >
                                                        "Delete"
                                                    </Button>
                                                }
                                                .into_any()
                                            } else {
                                                view! { <span class="text-muted">"Cannot Delete"</span> }.into_any()
                                            }}
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>

            <h3 class="modal-section-title">"Add Viewer"</h3>
            <Flex gap=FlexGap::Small style="flex-wrap: wrap;">
                <Input value=email placeholder="Email" />
                <Input value=password input_type=InputType::Password placeholder="Password" />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| add_viewer()>
                    "Add Viewer"
                </Button>
            </Flex>
            <p class=move || feedback.get().class()>{move || feedback.get().text()}</p>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_feedback_texts() {
        assert_eq!(AddFeedback::Adding.text(), "Adding...");
        assert_eq!(AddFeedback::Added("User added".into()).text(), "User added");
        assert_eq!(
            AddFeedback::Failed("User already exists".into()).text(),
            "Error: User already exists"
        );
    }
}
