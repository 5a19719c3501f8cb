// ============================================================================
// DATA VIEW - Editable tables, CSV archive export/import
// ============================================================================
// Each row renders in display or editing mode from TablesState. Inputs write
// into the drafts without re-rendering, so focus survives typing.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};
use crate::dom::{append_child, click_element_by_id, input_value, on_change, on_click, on_input, select_value, ElementBuilder};
use crate::models::{ResourceKind, PART_COLUMN};
use crate::state::{DisplayRow, NewRowDraft, RowDraft};
use crate::utils::download_bytes;
use crate::viewmodels::{RowAction, TableRow, EXPORT_FILENAME, EXPORT_MIME};
use crate::views::ViewContext;

const IMPORT_INPUT_ID: &str = "import-file";

fn button(label: &str, class: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?.class(class).text(label).build())
}

fn text_input(value: &str) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?.attr("type", "text")?.build();
    if let Some(input) = input.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    }
    Ok(input)
}

// ----------------------------------------------------------------------------
// toolbar
// ----------------------------------------------------------------------------

fn render_tabs(ctx: &ViewContext) -> Result<Element, JsValue> {
    let current = ctx.state.current_data_tab();
    let tabs = ElementBuilder::new("div")?.class("data-tabs").build();
    for kind in ResourceKind::ALL {
        let class = if kind == current { "tab-btn active" } else { "tab-btn" };
        let tab = button(&ctx.t(kind.label_key()), class)?;
        let state = ctx.state.clone();
        on_click(&tab, move |_| state.set_data_tab(kind))?;
        tabs.append_child(&tab)?;
    }
    Ok(tabs)
}

fn render_transfer(ctx: &ViewContext) -> Result<Element, JsValue> {
    let export = button(&ctx.t("export_button"), "btn-secondary")?;
    {
        let vm = ctx.transfer();
        on_click(&export, move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                let _ = vm
                    .export(|bytes| {
                        download_bytes(bytes, EXPORT_FILENAME, EXPORT_MIME)
                            .map_err(|e| format!("{:?}", e))
                    })
                    .await;
            });
        })?;
    }

    let file_input = ElementBuilder::new("input")?
        .id(IMPORT_INPUT_ID)?
        .attr("type", "file")?
        .attr("accept", ".zip")?
        .attr("style", "display: none")?
        .build();
    {
        let vm = ctx.transfer();
        on_change(&file_input, move |e| {
            let Some(input) = e
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let vm = vm.clone();
            spawn_local(async move {
                let _ = vm.import(&file).await;
                // Same file can be picked again
                input.set_value("");
            });
        })?;
    }

    let import = button(&ctx.t("import_button"), "btn-secondary")?;
    on_click(&import, move |_| click_element_by_id(IMPORT_INPUT_ID))?;

    Ok(ElementBuilder::new("div")?
        .class("data-transfer")
        .child(export)?
        .child(import)?
        .child(file_input)?
        .build())
}

// ----------------------------------------------------------------------------
// rows
// ----------------------------------------------------------------------------

fn render_actions(ctx: &ViewContext, kind: ResourceKind, row: &TableRow) -> Result<Element, JsValue> {
    let cell = ElementBuilder::new("td")?.class("row-actions").build();
    let key = match row {
        TableRow::New(_) => String::new(),
        TableRow::Display(display) | TableRow::Editing(display, _) => display.primary_key.clone(),
    };

    for action in row.actions() {
        let vm = ctx.tables();
        let key = key.clone();
        let control = match action {
            RowAction::Edit => {
                let edit = button(&ctx.t("edit"), "btn-small")?;
                on_click(&edit, move |_| vm.begin_edit(kind, &key))?;
                edit
            }
            RowAction::Save => {
                let save = button(&ctx.t("save"), "btn-small btn-primary")?;
                on_click(&save, move |_| {
                    let vm = vm.clone();
                    let key = key.clone();
                    spawn_local(async move {
                        let _ = vm.save(kind, &key).await;
                    });
                })?;
                save
            }
            RowAction::Delete => {
                let delete = button(&ctx.t("delete"), "btn-small btn-danger")?;
                on_click(&delete, move |_| {
                    let vm = vm.clone();
                    let key = key.clone();
                    spawn_local(async move {
                        let _ = vm.delete(kind, &key).await;
                    });
                })?;
                delete
            }
            RowAction::SaveNew => {
                let save = button(&ctx.t("save"), "btn-small btn-primary")?;
                on_click(&save, move |_| {
                    let vm = vm.clone();
                    spawn_local(async move {
                        let _ = vm.save_new(kind).await;
                    });
                })?;
                save
            }
            RowAction::Cancel => {
                let cancel = button(&ctx.t("cancel"), "btn-small")?;
                on_click(&cancel, move |_| vm.cancel_add(kind))?;
                cancel
            }
        };
        cell.append_child(&control)?;
    }
    Ok(cell)
}

fn render_display_row(row: &DisplayRow) -> Result<Element, JsValue> {
    let tr = ElementBuilder::new("tr")?.build();
    for (_, value) in &row.cells {
        tr.append_child(&ElementBuilder::new("td")?.text(value).build())?;
    }
    Ok(tr)
}

fn render_editing_row(
    ctx: &ViewContext,
    kind: ResourceKind,
    row: &DisplayRow,
    draft: &RowDraft,
) -> Result<Element, JsValue> {
    let tr = ElementBuilder::new("tr")?.class("editing").build();
    for (column, value) in &row.cells {
        let td = ElementBuilder::new("td")?.build();
        if kind.is_read_only(column) {
            td.set_text_content(Some(value));
        } else {
            let input = text_input(draft.get(column).unwrap_or(value))?;
            let vm = ctx.tables();
            let key = row.primary_key.clone();
            let column = column.clone();
            on_input(&input, move |e| {
                if let Some(value) = input_value(&e) {
                    vm.set_draft_value(kind, &key, &column, value);
                }
            })?;
            td.append_child(&input)?;
        }
        tr.append_child(&td)?;
    }
    Ok(tr)
}

fn render_section_picker(ctx: &ViewContext, kind: ResourceKind, current: &str) -> Result<Element, JsValue> {
    let select = ElementBuilder::new("select")?.class("new-row-section").build();
    select.append_child(
        &ElementBuilder::new("option")?
            .attr("value", "")?
            .flag("selected", current.is_empty())?
            .text(&ctx.t("choose_section"))
            .build(),
    )?;
    for section in ctx.state.store.sections() {
        select.append_child(
            &ElementBuilder::new("option")?
                .attr("value", &section.section_id)?
                .flag("selected", section.section_id == current)?
                .text(&section.section_name)
                .build(),
        )?;
    }

    let vm = ctx.tables();
    on_change(&select, move |e| {
        if let Some(value) = select_value(&e) {
            vm.set_new_section(kind, value);
        }
    })?;
    Ok(select)
}

fn render_new_row(ctx: &ViewContext, kind: ResourceKind, draft: &NewRowDraft) -> Result<Element, JsValue> {
    let tr = ElementBuilder::new("tr")?.class("new-row").build();

    for column in kind.columns() {
        let td = ElementBuilder::new("td")?.build();
        if *column == kind.primary_key() {
            let placeholder = ElementBuilder::new("input")?
                .attr("type", "text")?
                .attr("placeholder", &ctx.t("auto_generated"))?
                .flag("disabled", true)?
                .build();
            td.append_child(&placeholder)?;
        } else if *column == PART_COLUMN {
            append_child(&td, &render_section_picker(ctx, kind, &draft.section_id)?)?;
        } else {
            let input = text_input(draft.values.get(*column).map(String::as_str).unwrap_or(""))?;
            let vm = ctx.tables();
            let column = column.to_string();
            on_input(&input, move |e| {
                if let Some(value) = input_value(&e) {
                    vm.set_new_value(kind, &column, value);
                }
            })?;
            td.append_child(&input)?;
        }
        tr.append_child(&td)?;
    }

    Ok(tr)
}

// ----------------------------------------------------------------------------
// table
// ----------------------------------------------------------------------------

fn render_table(ctx: &ViewContext, kind: ResourceKind) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("tr")?.build();
    for column in kind.columns() {
        header.append_child(&ElementBuilder::new("th")?.text(column).build())?;
    }
    header.append_child(&ElementBuilder::new("th")?.text(&ctx.t("actions")).build())?;

    let tbody = ElementBuilder::new("tbody")?.build();
    for row in ctx.tables().rows(kind) {
        let tr = match &row {
            TableRow::New(draft) => render_new_row(ctx, kind, draft)?,
            TableRow::Display(display) => render_display_row(display)?,
            TableRow::Editing(display, draft) => render_editing_row(ctx, kind, display, draft)?,
        };
        append_child(&tr, &render_actions(ctx, kind, &row)?)?;
        tbody.append_child(&tr)?;
    }

    Ok(ElementBuilder::new("table")?
        .id(&format!("{}-table", kind.key()))?
        .class("data-table")
        .child(ElementBuilder::new("thead")?.child(header)?.build())?
        .child(tbody)?
        .build())
}

pub fn render_data(ctx: &ViewContext) -> Result<Element, JsValue> {
    let kind = ctx.state.current_data_tab();

    let add = button(&ctx.t("add"), "btn-primary")?;
    {
        let vm = ctx.tables();
        on_click(&add, move |_| {
            vm.begin_add(kind);
        })?;
    }

    Ok(ElementBuilder::new("section")?
        .id("data-screen")?
        .class("screen")
        .child(render_tabs(ctx)?)?
        .child(render_transfer(ctx)?)?
        .child(add)?
        .child(render_table(ctx, kind)?)?
        .build())
}
