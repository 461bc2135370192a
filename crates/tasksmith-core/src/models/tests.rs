use jiff::Timestamp;

use super::*;

fn sample_task(status: TaskStatus) -> Task {
    Task {
        id: 1,
        plan_id: 1,
        title: "Sample task".to_string(),
        description: None,
        priority: Priority::Medium,
        status,
        estimated_hours: 4,
        due_date: Timestamp::UNIX_EPOCH,
        depends_on: Vec::new(),
        position: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

#[test]
fn test_priority_parsing() {
    assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
    assert_eq!("Medium".parse::<Priority>().unwrap(), Priority::Medium);
    assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
    assert_eq!("urgent".parse::<Priority>().unwrap(), Priority::Urgent);
    assert!("critical".parse::<Priority>().is_err());
}

#[test]
fn test_priority_ordering() {
    assert!(Priority::Low < Priority::Medium);
    assert!(Priority::Medium < Priority::High);
    assert!(Priority::High < Priority::Urgent);
}

#[test]
fn test_status_parsing() {
    assert_eq!("pending".parse::<TaskStatus>().unwrap(), TaskStatus::Pending);
    assert_eq!(
        "in_progress".parse::<TaskStatus>().unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(
        "inprogress".parse::<TaskStatus>().unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(
        "completed".parse::<TaskStatus>().unwrap(),
        TaskStatus::Completed
    );
    assert_eq!(
        "cancelled".parse::<TaskStatus>().unwrap(),
        TaskStatus::Cancelled
    );
    assert!("done".parse::<TaskStatus>().is_err());
}

#[test]
fn test_status_round_trip() {
    for status in [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Cancelled,
    ] {
        assert_eq!(status.as_str().parse::<TaskStatus>().unwrap(), status);
    }
}

#[test]
fn test_plan_summary_counts() {
    let plan = Plan {
        id: 7,
        goal_id: 3,
        title: "Launch plan".to_string(),
        description: Some("Structured rollout".to_string()),
        estimated_days: 40,
        rationale: String::new(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        tasks: vec![
            sample_task(TaskStatus::Completed),
            sample_task(TaskStatus::Completed),
            sample_task(TaskStatus::InProgress),
            sample_task(TaskStatus::Pending),
            sample_task(TaskStatus::Cancelled),
        ],
    };

    let summary = PlanSummary::from(&plan);
    assert_eq!(summary.id, 7);
    assert_eq!(summary.goal_id, 3);
    assert_eq!(summary.total_tasks, 5);
    assert_eq!(summary.completed_tasks, 2);
    assert_eq!(summary.pending_tasks, 2);
}

#[test]
fn test_update_task_request_is_empty() {
    let request = UpdateTaskRequest::default();
    assert!(request.is_empty());

    let request = UpdateTaskRequest {
        status: Some(TaskStatus::Completed),
        ..Default::default()
    };
    assert!(!request.is_empty());
}
