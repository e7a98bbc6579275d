//! Rendering tests for Markdown deadline reports.

use crate::{
    ata::domain::{AgendaItem, Assignment, AssignmentId, AtaId, MeetingRecord},
    config::TrackingConfig,
    deadline::{Task, project_all},
    report::{ReportError, render_markdown, render_with_template},
};
use chrono::NaiveDate;
use rstest::{fixture, rstest};

fn assignment(id: &str, responsible: &str) -> Assignment {
    Assignment::new(AssignmentId::new(id).expect("valid id"), responsible)
}

#[fixture]
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 15).expect("valid date")
}

#[fixture]
fn tasks(today: NaiveDate) -> Vec<Task> {
    let record = MeetingRecord::new("Reunião de obra", "10/07/2024")
        .with_id(AtaId::new("ata-1").expect("valid id"))
        .with_agenda_item(
            AgendaItem::new("1", "Compra de materiais")
                .with_assignment(assignment("d1", "Dora").with_deadline("20/07/2024")),
        )
        .with_agenda_item(
            AgendaItem::new("2", "Revisão de cronograma")
                .with_assignment(assignment("c1", "Carlos").with_deadline("01/07/2024"))
                .with_assignment(
                    assignment("c2", "Carlos")
                        .with_deadline("05/07/2024")
                        .completed_on("10/07/2024"),
                )
                .with_assignment(assignment("x1", " ")),
        );
    project_all(&[record], today)
}

#[rstest]
fn header_carries_reference_date_and_counts(tasks: Vec<Task>, today: NaiveDate) {
    let report = render_markdown(&tasks, today, &TrackingConfig::default()).expect("render");

    assert!(report.starts_with("# Deadline report 15/07/2024\n"));
    assert!(report.contains(
        "Total: 4 | Overdue: 1 | Due today: 0 | Upcoming: 1 | Completed: 1 | No deadline: 1"
    ));
}

#[rstest]
fn groups_follow_default_task_order(tasks: Vec<Task>, today: NaiveDate) {
    let report = render_markdown(&tasks, today, &TrackingConfig::default()).expect("render");

    let headings: Vec<&str> = report
        .lines()
        .filter(|line| line.starts_with("## "))
        .collect();
    assert_eq!(headings, vec!["## Carlos", "## Dora", "## unassigned"]);

    assert!(report.contains(
        "- [ ] Revisão de cronograma (overdue, due 01/07/2024) - Reunião de obra\n\
         - [x] Revisão de cronograma (completed, due 05/07/2024) - Reunião de obra\n"
    ));
    assert!(report.contains("- [ ] Revisão de cronograma (no-deadline, due n/a)"));
}

#[rstest]
fn placeholder_labels_come_from_configuration(tasks: Vec<Task>, today: NaiveDate) {
    let report = render_markdown(&tasks, today, &TrackingConfig::portuguese()).expect("render");

    assert!(report.contains("## Não atribuído"));
}

#[rstest]
fn empty_task_lists_render_only_the_header(today: NaiveDate) {
    let report = render_markdown(&[], today, &TrackingConfig::default()).expect("render");

    assert!(report.contains("Total: 0"));
    assert!(!report.contains("## "));
}

#[rstest]
fn custom_templates_receive_the_same_context(tasks: Vec<Task>, today: NaiveDate) {
    let report = render_with_template(
        "{{ reference_date }}:{% for group in groups %} {{ group.key }}={{ group.tasks | length }}{% endfor %}",
        &tasks,
        today,
        &TrackingConfig::default(),
    )
    .expect("render");

    assert_eq!(report, "15/07/2024: Carlos=2 Dora=1 unassigned=1");
}

#[rstest]
fn invalid_templates_surface_render_errors(tasks: Vec<Task>, today: NaiveDate) {
    let result = render_with_template("{% for %}", &tasks, today, &TrackingConfig::default());

    assert!(matches!(result, Err(ReportError::Render { .. })));
}
