//! Integration tests running the tracking services over the JSON directory
//! store.

use std::sync::Arc;

use atas::{
    ata::{
        adapters::json_file::JsonFileAtaRepository,
        domain::{AgendaItem, Assignment, AssignmentId, MeetingRecord},
        ports::AtaRepository,
        services::{DeadlineBoard, DeadlineTrackingService},
    },
    clock::FixedClock,
    config::{CompletionDateFormat, TrackingConfig},
    deadline::{TaskStatus, TaskSummary},
    report::render_markdown,
};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use rstest::{fixture, rstest};

/// Temporary store directory removed when dropped.
struct StoreDir(Utf8PathBuf);

impl StoreDir {
    fn path(&self) -> &Utf8Path {
        &self.0
    }
}

impl Drop for StoreDir {
    fn drop(&mut self) {
        drop(std::fs::remove_dir_all(&self.0));
    }
}

#[fixture]
fn store_dir() -> StoreDir {
    let base = Utf8PathBuf::try_from(std::env::temp_dir()).expect("utf-8 temp dir");
    StoreDir(base.join(format!("atas-it-{}", uuid::Uuid::new_v4().simple())))
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 15).expect("valid date")
}

fn assignment(id: &str, responsible: &str, deadline: &str) -> Assignment {
    Assignment::new(AssignmentId::new(id).expect("valid id"), responsible).with_deadline(deadline)
}

async fn seed(repository: &JsonFileAtaRepository) {
    let obra = MeetingRecord::new("Reunião de obra", "10/07/2024")
        .with_empreendimento("Residencial Aurora")
        .with_agenda_item(
            AgendaItem::new("1", "Revisão de cronograma")
                .with_assignment(assignment("c1", "Carlos", "01/07/2024")),
        );
    let projeto = MeetingRecord::new("Reunião de projeto", "12/07/2024")
        .with_empreendimento("Edifício Horizonte")
        .with_agenda_item(
            AgendaItem::new("1", "Compatibilização")
                .with_assignment(assignment("d1", "Dora", "18/07/2024"))
                .with_assignment(assignment("c2", "Carlos", "15/07/2024")),
        );
    for record in [obra, projeto] {
        repository.save(&record).await.expect("save record");
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reopened_store_yields_same_projection(store_dir: StoreDir) {
    seed(&JsonFileAtaRepository::open(store_dir.path()).expect("open store")).await;

    let first = DeadlineTrackingService::new(
        Arc::new(JsonFileAtaRepository::open(store_dir.path()).expect("reopen store")),
        Arc::new(FixedClock::at_date(today())),
    );
    let second = DeadlineTrackingService::new(
        Arc::new(JsonFileAtaRepository::open(store_dir.path()).expect("reopen store")),
        Arc::new(FixedClock::at_date(today())),
    );

    let tasks = first.tasks().await.expect("tasks");
    assert_eq!(tasks, second.tasks().await.expect("tasks"));
    assert_eq!(
        first.summary().await.expect("summary"),
        TaskSummary {
            total: 3,
            overdue: 1,
            due_today: 1,
            upcoming: 1,
            completed: 0,
            no_deadline: 0,
        }
    );
    assert_eq!(
        tasks.iter().map(|task| task.status()).collect::<Vec<_>>(),
        vec![TaskStatus::Overdue, TaskStatus::DueToday, TaskStatus::Upcoming]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_toggle_persists_to_disk(store_dir: StoreDir) {
    let repository = Arc::new(JsonFileAtaRepository::open(store_dir.path()).expect("open store"));
    seed(&repository).await;
    let config = TrackingConfig {
        completion_date_format: CompletionDateFormat::Iso,
        ..TrackingConfig::default()
    };
    let mut board = DeadlineBoard::load(
        Arc::clone(&repository),
        Arc::new(FixedClock::at_date(today())),
        config,
    )
    .await
    .expect("load board");
    let carlos_overdue = board
        .tasks()
        .into_iter()
        .find(|task| task.status() == TaskStatus::Overdue)
        .expect("overdue task");

    board
        .toggle(carlos_overdue.id(), true)
        .await
        .expect("toggle");

    let stored = JsonFileAtaRepository::open(store_dir.path())
        .expect("reopen store")
        .load_all()
        .await
        .expect("load all");
    let completed: Vec<&Assignment> = stored
        .iter()
        .flat_map(|record| &record.agenda)
        .flat_map(|item| &item.assignments)
        .filter(|entry| entry.completed)
        .collect();
    assert_eq!(completed.len(), 1);
    assert_eq!(
        completed.first().and_then(|entry| entry.completion_date.as_deref()),
        Some("2024-07-15")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn report_groups_stored_tasks_by_responsible(store_dir: StoreDir) {
    let repository = JsonFileAtaRepository::open(store_dir.path()).expect("open store");
    seed(&repository).await;
    let service = DeadlineTrackingService::new(
        Arc::new(repository),
        Arc::new(FixedClock::at_date(today())),
    );

    let tasks = service.tasks().await.expect("tasks");
    let report = render_markdown(&tasks, service.today(), service.config()).expect("render");

    let headings: Vec<&str> = report
        .lines()
        .filter(|line| line.starts_with("## "))
        .collect();
    assert_eq!(headings, vec!["## Carlos", "## Dora"]);
    assert!(report.contains("(due-today, due 15/07/2024) - Reunião de projeto"));
}
