// ============================================================================
// REPORTS VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_change, on_click, select_value, ElementBuilder};
use crate::models::{AttendanceReport, AttendanceStatus, ReportKind};
use crate::viewmodels::report_title;
use crate::views::ViewContext;

fn render_controls(ctx: &ViewContext) -> Result<Element, JsValue> {
    let vm = ctx.reports();
    let kind = ctx.state.report.get_kind();

    let kind_select = ElementBuilder::new("select")?.id("report-kind")?.build();
    for (option_kind, label_key) in [
        (ReportKind::Student, "report_kind_student"),
        (ReportKind::Section, "report_kind_section"),
    ] {
        kind_select.append_child(
            &ElementBuilder::new("option")?
                .attr("value", option_kind.value())?
                .flag("selected", option_kind == kind)?
                .text(&ctx.t(label_key))
                .build(),
        )?;
    }
    {
        let vm = vm.clone();
        on_change(&kind_select, move |e| {
            if let Some(value) = select_value(&e) {
                vm.set_kind(ReportKind::from_value(&value));
            }
        })?;
    }

    let current_target = vm.effective_target().unwrap_or_default();
    let target_select = ElementBuilder::new("select")?.id("report-target")?.build();
    for (value, label) in vm.target_options() {
        target_select.append_child(
            &ElementBuilder::new("option")?
                .attr("value", &value)?
                .flag("selected", value == current_target)?
                .text(&label)
                .build(),
        )?;
    }
    {
        let vm = vm.clone();
        on_change(&target_select, move |e| {
            if let Some(value) = select_value(&e) {
                vm.set_target(value);
            }
        })?;
    }

    let generate = ElementBuilder::new("button")?
        .id("generate-report-btn")?
        .class("btn-primary")
        .text(&ctx.t("generate_report"))
        .build();
    on_click(&generate, move |_| vm.generate())?;

    Ok(ElementBuilder::new("div")?
        .class("report-controls")
        .child(ElementBuilder::new("label")?.text(&ctx.t("report_kind")).build())?
        .child(kind_select)?
        .child(ElementBuilder::new("label")?.text(&ctx.t("report_target")).build())?
        .child(target_select)?
        .child(generate)?
        .build())
}

fn stat_line(label: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("li")?
        .child(ElementBuilder::new("strong")?.text(label).build())?
        .child(ElementBuilder::new("span")?.text(&format!(" {}", value)).build())?
        .build())
}

fn render_report(ctx: &ViewContext, report: &AttendanceReport) -> Result<Element, JsValue> {
    let stats = &report.stats;
    let container = ElementBuilder::new("div")?
        .id("report-result")?
        .child(ElementBuilder::new("h3")?.text(&report_title(report, &ctx.state.lang())).build())?
        .build();

    if stats.total == 0 {
        container.append_child(&ElementBuilder::new("p")?.text(&ctx.t("report_no_records")).build())?;
        return Ok(container);
    }

    let times = |count: usize| ctx.tf("times", &[&count.to_string()]);
    let list = ElementBuilder::new("ul")?
        .class("report-stats")
        .child(stat_line(&ctx.t("report_total"), &times(stats.total))?)?
        .child(stat_line(&ctx.t("report_rate"), &format!("{}%", stats.rate_label()))?)?
        .child(stat_line(&ctx.t(AttendanceStatus::Present.label_key()), &times(stats.present))?)?
        .child(stat_line(&ctx.t(AttendanceStatus::Late.label_key()), &times(stats.late))?)?
        .child(stat_line(&ctx.t(AttendanceStatus::Absent.label_key()), &times(stats.absent))?)?
        .child(stat_line(
            &ctx.t(AttendanceStatus::ExcusedAbsent.label_key()),
            &times(stats.excused_absent),
        )?)?
        .build();
    if stats.unknown > 0 {
        append_child(&list, &stat_line(&ctx.t("report_unknown"), &times(stats.unknown))?)?;
    }
    container.append_child(&list)?;

    Ok(container)
}

pub fn render_reports(ctx: &ViewContext) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("section")?
        .id("reports-screen")?
        .class("screen")
        .child(render_controls(ctx)?)?
        .build();

    match ctx.state.report.get_result() {
        Some(Ok(report)) => {
            append_child(&container, &render_report(ctx, &report)?)?;
        }
        Some(Err(e)) => {
            container.append_child(
                &ElementBuilder::new("p")?
                    .id("report-result")?
                    .class("status-error")
                    .text(&ctx.t(e.message_key()))
                    .build(),
            )?;
        }
        None => {}
    }

    Ok(container)
}
