// ============================================================================
// ATTENDANCE VIEW - Rehearsal/section pickers, roster, batch save
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, on_change, on_click, select_value, ElementBuilder};
use crate::models::AttendanceStatus;
use crate::state::{Roster, SectionFilter, ALL_SECTIONS};
use crate::viewmodels::roster_title;
use crate::views::ViewContext;

fn option(value: &str, label: &str, selected: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("option")?
        .attr("value", value)?
        .flag("selected", selected)?
        .text(label)
        .build())
}

fn render_pickers(ctx: &ViewContext) -> Result<Element, JsValue> {
    let vm = ctx.attendance();
    let current_rehearsal = vm.effective_rehearsal().unwrap_or_default();

    let rehearsal_select = ElementBuilder::new("select")?.id("rehearsal-select")?.build();
    for rehearsal in ctx.state.store.rehearsals() {
        let selected = rehearsal.rehearsal_id == current_rehearsal;
        append_child(&rehearsal_select, &option(&rehearsal.rehearsal_id, &rehearsal.date, selected)?)?;
    }
    {
        let vm = vm.clone();
        on_change(&rehearsal_select, move |e| {
            if let Some(value) = select_value(&e) {
                vm.select_rehearsal(value);
            }
        })?;
    }

    let filter = ctx.state.attendance.get_section_filter();
    let section_select = ElementBuilder::new("select")?.id("section-select")?.build();
    append_child(&section_select, &option(ALL_SECTIONS, &ctx.t("all"), filter == SectionFilter::All)?)?;
    for section in ctx.state.store.sections() {
        let selected = filter == SectionFilter::Section(section.section_id.clone());
        append_child(&section_select, &option(&section.section_id, &section.section_name, selected)?)?;
    }
    {
        let vm = vm.clone();
        on_change(&section_select, move |e| {
            if let Some(value) = select_value(&e) {
                vm.select_section(&value);
            }
        })?;
    }

    let load = ElementBuilder::new("button")?
        .id("load-roster-btn")?
        .class("btn-primary")
        .text(&ctx.t("load_roster"))
        .build();
    on_click(&load, move |_| vm.load_roster())?;

    Ok(ElementBuilder::new("div")?
        .class("attendance-controls")
        .child(ElementBuilder::new("label")?.text(&ctx.t("rehearsal")).build())?
        .child(rehearsal_select)?
        .child(ElementBuilder::new("label")?.text(&ctx.t("section")).build())?
        .child(section_select)?
        .child(load)?
        .build())
}

fn render_status_radios(ctx: &ViewContext, student_id: &str, current: AttendanceStatus) -> Result<Element, JsValue> {
    let cell = ElementBuilder::new("td")?.class("status-choices").build();
    let group = format!("status-{}", student_id);

    for status in AttendanceStatus::ROSTER_CHOICES {
        let radio = ElementBuilder::new("input")?
            .attr("type", "radio")?
            .attr("name", &group)?
            .attr("value", status.as_str())?
            .flag("checked", status == current)?
            .build();
        {
            let vm = ctx.attendance();
            let student_id = student_id.to_string();
            on_change(&radio, move |_| vm.set_status(&student_id, status))?;
        }
        let label = ElementBuilder::new("label")?
            .child(radio)?
            .child(ElementBuilder::new("span")?.text(&ctx.t(status.label_key())).build())?
            .build();
        cell.append_child(&label)?;
    }

    Ok(cell)
}

fn render_roster(ctx: &ViewContext, roster: &Roster) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("tr")?
        .child(ElementBuilder::new("th")?.text(&ctx.t("col_name")).build())?
        .child(ElementBuilder::new("th")?.text(&ctx.t("col_part")).build())?
        .child(ElementBuilder::new("th")?.text(&ctx.t("col_status")).build())?
        .build();

    let tbody = ElementBuilder::new("tbody")?.build();
    for entry in &roster.entries {
        let row = ElementBuilder::new("tr")?
            .child(ElementBuilder::new("td")?.text(&entry.name).build())?
            .child(ElementBuilder::new("td")?.text(&entry.parts).build())?
            .child(render_status_radios(ctx, &entry.student_id, entry.status)?)?
            .build();
        tbody.append_child(&row)?;
    }

    let save = ElementBuilder::new("button")?
        .id("save-attendance-btn")?
        .class("btn-primary")
        .text(&ctx.t("save_attendance"))
        .build();
    {
        let vm = ctx.attendance();
        on_click(&save, move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                let _ = vm.submit().await;
            });
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .id("attendance-roster")?
        .child(ElementBuilder::new("h3")?.text(&roster_title(roster, &ctx.state.lang())).build())?
        .child(
            ElementBuilder::new("table")?
                .class("roster-table")
                .child(ElementBuilder::new("thead")?.child(header)?.build())?
                .child(tbody)?
                .build(),
        )?
        .child(save)?
        .build())
}

pub fn render_attendance(ctx: &ViewContext) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("section")?
        .id("attendance-screen")?
        .class("screen")
        .child(render_pickers(ctx)?)?
        .build();

    if let Some(roster) = ctx.state.attendance.get_roster() {
        append_child(&container, &render_roster(ctx, &roster)?)?;
    } else if ctx.state.attendance.is_roster_empty() {
        container.append_child(
            &ElementBuilder::new("p")?
                .class("empty-roster")
                .text(&ctx.t("no_members"))
                .build(),
        )?;
    }

    if let Some(status) = ctx.state.attendance.get_save_status() {
        container.append_child(
            &ElementBuilder::new("p")?
                .id("save-status")?
                .class(status.tone.css_class())
                .text(&status.message)
                .build(),
        )?;
    }

    Ok(container)
}
