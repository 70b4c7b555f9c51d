use contracts::dashboard::row::{NAME_KEY, RESUME_KEY};
use contracts::dashboard::Row;
use leptos::prelude::*;
use thaw::*;

use crate::dashboard::controller::{use_dashboard, DashboardController};
use crate::dashboard::messages::DashboardMsg;
use crate::shared::api_utils::api_url;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};

/// Server path of an uploaded resume. Windows separators become `/`, then
/// each path segment is percent-encoded.
pub fn resume_path(path: &str) -> String {
    let encoded: Vec<String> = path
        .split(['/', '\\'])
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    format!("/uploads/{}", encoded.join("/"))
}

pub fn resume_link(path: &str) -> AnyView {
    view! {
        <a href=api_url(&resume_path(path)) target="_blank" rel="noopener">"View Resume"</a>
    }
    .into_any()
}

#[component]
pub fn CandidateTable() -> impl IntoView {
    let ctrl = use_dashboard();
    let vm = ctrl.view_model();
    let visible = Memo::new(move |_| vm.with(|vm| vm.columns.visible_columns()));
    let rows = Memo::new(move |_| vm.with(|vm| vm.sorted_rows()));

    view! {
        <div class="table-wrapper">
            <Table attr:id="candidate-table" attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <For
                            each=move || visible.get()
                            key=|column| column.clone()
                            children=move |column| header_cell(ctrl, column)
                        />
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let columns = visible.get();
                        let rows = rows.get();
                        if rows.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>"No candidates match the current filters."</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|row| {
                                let columns = columns.clone();
                                view! {
                                    <TableRow>
                                        {columns
                                            .iter()
                                            .map(|column| {
                                                let cell = cell_view(ctrl, column, &row);
                                                view! {
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {cell}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                }
                                            })
                                            .collect_view()}
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

fn header_cell(ctrl: DashboardController, column: String) -> impl IntoView {
    let vm = ctrl.view_model();
    let for_click = column.clone();
    let for_class = column.clone();
    let for_indicator = column.clone();

    view! {
        <TableHeaderCell resizable=false min_width=100.0>
            <div
                class="table__sortable-header"
                style="cursor:pointer;"
                on:click=move |_| ctrl.dispatch(DashboardMsg::SortBy(for_click.clone()))
            >
                {column}
                <span class=move || vm.with(|vm| get_sort_class(vm.sort_field.as_deref(), &for_class))>
                    {move || vm.with(|vm| get_sort_indicator(vm.sort_field.as_deref(), &for_indicator, vm.sort_ascending))}
                </span>
            </div>
        </TableHeaderCell>
    }
}

fn cell_view(ctrl: DashboardController, column: &str, row: &Row) -> AnyView {
    if column == RESUME_KEY {
        return match row.resume_path() {
            Some(path) => resume_link(&path),
            None => ().into_any(),
        };
    }

    let text = row.text(column);
    if column.eq_ignore_ascii_case(NAME_KEY) {
        let row = row.clone();
        return view! {
            <span
                class="table__link"
                on:click=move |_| ctrl.dispatch(DashboardMsg::ShowDetails(row.clone()))
            >
                {text}
            </span>
        }
        .into_any();
    }
    text.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resume_path_encodes_segments() {
        assert_eq!(resume_path("cv/Asha K.pdf"), "/uploads/cv/Asha%20K.pdf");
        assert_eq!(resume_path("plain.pdf"), "/uploads/plain.pdf");
    }

    #[test]
    fn resume_path_normalizes_backslashes() {
        assert_eq!(
            resume_path("campus/uploads\\Ravi CV.pdf"),
            "/uploads/campus/uploads/Ravi%20CV.pdf"
        );
    }
}
