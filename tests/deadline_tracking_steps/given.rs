//! Given steps for deadline tracking BDD scenarios.

use super::world::{DeadlineWorld, run_async};
use atas::{
    ata::{
        domain::{AgendaItem, Assignment, AssignmentId, MeetingRecord},
        ports::AtaRepository,
    },
    deadline::date::parse_display_date,
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"today is "{date}""#)]
fn today_is(world: &mut DeadlineWorld, date: String) -> Result<(), eyre::Report> {
    let today = parse_display_date(&date)
        .ok_or_else(|| eyre::eyre!("invalid reference date in scenario: {date}"))?;
    world.today = Some(today);
    Ok(())
}

#[given(r#"a meeting record "{title}" dated "{date}""#)]
fn meeting_record(world: &mut DeadlineWorld, title: String, date: String) {
    world.record = Some(MeetingRecord::new(title, date));
}

#[given(r#"an agenda item "{description}" assigned to "{responsible}" due "{deadline}""#)]
fn agenda_item_with_deadline(
    world: &mut DeadlineWorld,
    description: String,
    responsible: String,
    deadline: String,
) -> Result<(), eyre::Report> {
    add_agenda_item(world, &description, &responsible, Some(deadline))
}

#[given(r#"an agenda item "{description}" assigned to "{responsible}" without a deadline"#)]
fn agenda_item_without_deadline(
    world: &mut DeadlineWorld,
    description: String,
    responsible: String,
) -> Result<(), eyre::Report> {
    add_agenda_item(world, &description, &responsible, None)
}

fn add_agenda_item(
    world: &mut DeadlineWorld,
    description: &str,
    responsible: &str,
    deadline: Option<String>,
) -> Result<(), eyre::Report> {
    let record = world
        .record
        .take()
        .ok_or_else(|| eyre::eyre!("missing meeting record in scenario world"))?;
    let position = record.agenda.len().saturating_add(1);
    let mut assignment = Assignment::new(
        AssignmentId::new(format!("r{position}")).wrap_err("assignment id")?,
        responsible,
    );
    if let Some(value) = deadline {
        assignment = assignment.with_deadline(value);
    }
    let updated = record.with_agenda_item(
        AgendaItem::new(position.to_string(), description).with_assignment(assignment),
    );

    let id = run_async(world.repository.save(&updated)).wrap_err("save meeting record")?;
    world.record = Some(updated.with_id(id));
    Ok(())
}
