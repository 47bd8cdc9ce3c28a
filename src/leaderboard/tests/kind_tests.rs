//! Leaderboard kind parsing and row decoding.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use crate::focus::domain::TaskId;
use crate::leaderboard::domain::{
    Leaderboard, LeaderboardEntry, LeaderboardKind, LeaderboardKindError,
};
use crate::session::domain::InviteCode;
use crate::test_support::utc;
use rstest::rstest;
use serde_json::json;
use uuid::Uuid;

const TASK: TaskId = TaskId::from_uuid(Uuid::from_u128(0x5f0c_6a1e));

#[rstest]
#[case("overall", None, LeaderboardKind::Overall)]
#[case("Daily", None, LeaderboardKind::Daily)]
#[case(" FOCUS ", None, LeaderboardKind::Focus)]
#[case("task", Some(TASK), LeaderboardKind::Task(TASK))]
fn parses_known_kinds(
    #[case] name: &str,
    #[case] task_id: Option<TaskId>,
    #[case] expected: LeaderboardKind,
) {
    assert_eq!(LeaderboardKind::parse(name, task_id), Ok(expected));
}

#[rstest]
fn task_kind_requires_task_id() {
    assert_eq!(
        LeaderboardKind::parse("task", None),
        Err(LeaderboardKindError::MissingTaskId)
    );
}

#[rstest]
#[case("overall", "overall")]
#[case(" Daily", "daily")]
#[case("focus", "focus")]
fn task_id_is_refused_for_other_kinds(#[case] name: &str, #[case] kind: &'static str) {
    let result = LeaderboardKind::parse(name, Some(TASK));

    assert_eq!(result, Err(LeaderboardKindError::UnexpectedTaskId(kind)));
    assert_eq!(
        result.err().map(|err| err.to_string()),
        Some(format!("a task id only applies to task leaderboards, not '{kind}'"))
    );
}

#[rstest]
fn unknown_kind_is_rejected() {
    assert_eq!(
        LeaderboardKind::parse("weekly", None),
        Err(LeaderboardKindError::Unknown("weekly".to_owned()))
    );
}

#[rstest]
fn task_kind_adds_task_id_parameter() {
    assert_eq!(
        LeaderboardKind::Task(TASK).query_params(),
        vec![
            ("type", "task".to_owned()),
            ("task_id", TASK.to_string()),
        ]
    );
    assert_eq!(
        LeaderboardKind::Daily.query_params(),
        vec![("type", "daily".to_owned())]
    );
}

#[rstest]
fn daily_rows_default_missing_focus_flag() {
    let entry: LeaderboardEntry = serde_json::from_value(json!({
        "nickname": "Lumi",
        "points": 120,
        "completed_tasks": 4,
        "rank": 1
    }))
    .expect("valid row");

    assert_eq!(entry.rank, 1);
    assert_eq!(entry.points, 120);
    assert!(!entry.has_focus_task_completed);
}

#[rstest]
fn position_of_finds_fan_by_nickname() {
    let rows = vec![
        LeaderboardEntry {
            rank: 1,
            nickname: "Lumi".to_owned(),
            points: 120,
            completed_tasks: 4,
            has_focus_task_completed: true,
        },
        LeaderboardEntry {
            rank: 2,
            nickname: "Nova".to_owned(),
            points: 80,
            completed_tasks: 2,
            has_focus_task_completed: false,
        },
    ];
    let board = Leaderboard::new(
        LeaderboardKind::Overall,
        InviteCode::new("STAR7").expect("valid invite code"),
        rows,
        utc(2025, 3, 1, 8, 0, 0),
    );

    assert_eq!(board.position_of("Nova").map(|entry| entry.rank), Some(2));
    assert!(board.position_of("Orbit").is_none());
    assert!(!board.is_empty());
}
