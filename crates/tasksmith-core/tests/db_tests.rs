use jiff::Timestamp;
use tasksmith_core::{
    generator::{GeneratedPlan, GeneratedTask},
    models::TaskFilter,
    Category, Database, PlannerError, Priority, TaskStatus, UpdateTaskRequest,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

/// Helper to build a small generated plan with a chain of dependencies
fn sample_generated_plan() -> GeneratedPlan {
    let start = Timestamp::now();
    let task = |title: &str, offset_days: i64, depends_on: Vec<usize>| GeneratedTask {
        title: title.to_string(),
        description: format!("Complete the {} phase.", title.to_lowercase()),
        priority: Priority::Medium,
        estimated_hours: 8,
        due_date: start
            .checked_add(jiff::Span::new().try_hours(offset_days * 24).unwrap())
            .unwrap(),
        depends_on,
    };

    GeneratedPlan {
        category: Category::General,
        rationale: "Three phases with a linear dependency chain.".to_string(),
        estimated_days: 3,
        tasks: vec![
            task("Research", 2, vec![]),
            task("Build", 5, vec![0]),
            task("Review", 7, vec![0, 1]),
        ],
    }
}

#[test]
fn test_database_initialization() {
    let (_temp_file, _db) = create_test_db();

    // Database should be initialized and ready to use
    // This test passes if no panic occurs during creation
    assert!(_temp_file.path().exists());
}

#[test]
fn test_create_and_get_goal() {
    let (_temp_file, mut db) = create_test_db();

    let goal = db
        .create_goal("Test Goal", Some("Test Description"), "test goal input")
        .expect("Failed to create goal");

    assert_eq!(goal.title, "Test Goal");
    assert_eq!(goal.description, Some("Test Description".to_string()));
    assert_eq!(goal.user_input, "test goal input");
    assert!(goal.id > 0);

    let retrieved = db
        .get_goal(goal.id)
        .expect("Failed to get goal")
        .expect("Goal should exist");
    assert_eq!(retrieved.id, goal.id);
    // Plans are eagerly loaded (empty, but not uninitialized)
    assert!(retrieved.plans.is_empty());
}

#[test]
fn test_list_goals_newest_first() {
    let (_temp_file, mut db) = create_test_db();

    let first = db
        .create_goal("First", None, "first")
        .expect("Failed to create goal");
    let second = db
        .create_goal("Second", None, "second")
        .expect("Failed to create goal");

    let goals = db.list_goals().expect("Failed to list goals");
    assert_eq!(goals.len(), 2);
    assert!(
        goals[0].id == second.id || goals[0].created_at >= goals[1].created_at,
        "Goals should be ordered newest first"
    );
    assert!(goals.iter().any(|g| g.id == first.id));
}

#[test]
fn test_update_goal_partial() {
    let (_temp_file, mut db) = create_test_db();

    let goal = db
        .create_goal("Original", Some("Keep me"), "original")
        .expect("Failed to create goal");

    db.update_goal(goal.id, Some("Renamed"), None)
        .expect("Failed to update goal");

    let updated = db
        .get_goal(goal.id)
        .expect("Failed to get goal")
        .expect("Goal should exist");
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.description, Some("Keep me".to_string()));

    let result = db.update_goal(999, Some("Nope"), None);
    assert!(matches!(
        result,
        Err(PlannerError::GoalNotFound { id: 999 })
    ));
}

#[test]
fn test_create_plan_with_tasks_maps_dependencies() {
    let (_temp_file, mut db) = create_test_db();

    let goal = db
        .create_goal("Ship it", None, "ship it")
        .expect("Failed to create goal");

    let plan = db
        .create_plan_with_tasks(goal.id, "Shipping plan", Some("Plan body"), &sample_generated_plan())
        .expect("Failed to create plan");

    assert_eq!(plan.goal_id, goal.id);
    assert_eq!(plan.estimated_days, 3);
    assert_eq!(plan.rationale, "Three phases with a linear dependency chain.");
    assert_eq!(plan.tasks.len(), 3);

    // Template indices were mapped onto the inserted row IDs
    let ids: Vec<u64> = plan.tasks.iter().map(|t| t.id).collect();
    assert!(plan.tasks[0].depends_on.is_empty());
    assert_eq!(plan.tasks[1].depends_on, vec![ids[0]]);
    assert_eq!(plan.tasks[2].depends_on, vec![ids[0], ids[1]]);

    for (position, task) in plan.tasks.iter().enumerate() {
        assert_eq!(task.position as usize, position);
        assert_eq!(task.status, TaskStatus::Pending);
    }
}

#[test]
fn test_create_plan_with_tasks_rejects_forward_dependency() {
    let (_temp_file, mut db) = create_test_db();

    let goal = db
        .create_goal("Ship it", None, "ship it")
        .expect("Failed to create goal");

    let mut generated = sample_generated_plan();
    // First task referencing a later index is invalid
    generated.tasks[0].depends_on = vec![2];

    let result = db.create_plan_with_tasks(goal.id, "Broken", None, &generated);
    assert!(matches!(result, Err(PlannerError::InvalidInput { .. })));
}

#[test]
fn test_create_plan_requires_existing_goal() {
    let (_temp_file, mut db) = create_test_db();

    let result = db.create_plan_with_tasks(999, "Orphan", None, &sample_generated_plan());
    assert!(matches!(
        result,
        Err(PlannerError::GoalNotFound { id: 999 })
    ));
}

#[test]
fn test_add_task_positions_and_default_due_date() {
    let (_temp_file, mut db) = create_test_db();

    let goal = db
        .create_goal("Goal", None, "goal")
        .expect("Failed to create goal");
    let plan = db
        .create_plan_with_tasks(goal.id, "Plan", None, &sample_generated_plan())
        .expect("Failed to create plan");

    let task = db
        .add_task(plan.id, "Extra work", None, Priority::High, 16, None, Vec::new())
        .expect("Failed to add task");

    assert_eq!(task.plan_id, plan.id);
    assert_eq!(task.position, 3);
    assert_eq!(task.status, TaskStatus::Pending);
    // 16h at 8h/day puts the derived due date about two days out
    assert!(task.due_date > task.created_at);
}

#[test]
fn test_add_task_dependency_must_exist_in_plan() {
    let (_temp_file, mut db) = create_test_db();

    let goal = db
        .create_goal("Goal", None, "goal")
        .expect("Failed to create goal");
    let plan = db
        .create_plan_with_tasks(goal.id, "Plan", None, &sample_generated_plan())
        .expect("Failed to create plan");

    let result = db.add_task(
        plan.id,
        "Bad deps",
        None,
        Priority::Medium,
        1,
        None,
        vec![99_999],
    );
    assert!(matches!(result, Err(PlannerError::InvalidInput { .. })));

    // A task from another plan does not count either
    let other_goal = db
        .create_goal("Other", None, "other")
        .expect("Failed to create goal");
    let other_plan = db
        .create_plan_with_tasks(other_goal.id, "Other plan", None, &sample_generated_plan())
        .expect("Failed to create plan");
    let foreign_task = other_plan.tasks[0].id;

    let result = db.add_task(
        plan.id,
        "Cross-plan deps",
        None,
        Priority::Medium,
        1,
        None,
        vec![foreign_task],
    );
    assert!(matches!(result, Err(PlannerError::InvalidInput { .. })));
}

#[test]
fn test_update_task_fields() {
    let (_temp_file, mut db) = create_test_db();

    let goal = db
        .create_goal("Goal", None, "goal")
        .expect("Failed to create goal");
    let plan = db
        .create_plan_with_tasks(goal.id, "Plan", None, &sample_generated_plan())
        .expect("Failed to create plan");
    let task_id = plan.tasks[1].id;

    db.update_task(
        task_id,
        UpdateTaskRequest {
            status: Some(TaskStatus::InProgress),
            priority: Some(Priority::Urgent),
            estimated_hours: Some(20),
            ..Default::default()
        },
    )
    .expect("Failed to update task");

    let task = db
        .get_task(task_id)
        .expect("Failed to get task")
        .expect("Task should exist");
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.priority, Priority::Urgent);
    assert_eq!(task.estimated_hours, 20);
    // Untouched fields keep their values
    assert_eq!(task.title, "Build");
    assert_eq!(task.depends_on, vec![plan.tasks[0].id]);

    // An empty request is a no-op, not an error
    db.update_task(task_id, UpdateTaskRequest::default())
        .expect("Empty update should succeed");

    let result = db.update_task(
        999,
        UpdateTaskRequest {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        },
    );
    assert!(matches!(
        result,
        Err(PlannerError::TaskNotFound { id: 999 })
    ));
}

#[test]
fn test_update_task_dependencies_must_be_earlier() {
    let (_temp_file, mut db) = create_test_db();

    let goal = db
        .create_goal("Goal", None, "goal")
        .expect("Failed to create goal");
    let plan = db
        .create_plan_with_tasks(goal.id, "Plan", None, &sample_generated_plan())
        .expect("Failed to create plan");

    // Reassigning the first task to depend on the last is a forward reference
    let result = db.update_task(
        plan.tasks[0].id,
        UpdateTaskRequest {
            depends_on: Some(vec![plan.tasks[2].id]),
            ..Default::default()
        },
    );
    assert!(matches!(result, Err(PlannerError::InvalidInput { .. })));

    // Replacing with an earlier task works
    db.update_task(
        plan.tasks[2].id,
        UpdateTaskRequest {
            depends_on: Some(vec![plan.tasks[1].id]),
            ..Default::default()
        },
    )
    .expect("Failed to update dependencies");

    let task = db
        .get_task(plan.tasks[2].id)
        .expect("Failed to get task")
        .expect("Task should exist");
    assert_eq!(task.depends_on, vec![plan.tasks[1].id]);
}

#[test]
fn test_list_tasks_filters() {
    let (_temp_file, mut db) = create_test_db();

    let goal = db
        .create_goal("Goal", None, "goal")
        .expect("Failed to create goal");
    let plan = db
        .create_plan_with_tasks(goal.id, "Plan", None, &sample_generated_plan())
        .expect("Failed to create plan");

    db.update_task(
        plan.tasks[0].id,
        UpdateTaskRequest {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        },
    )
    .expect("Failed to update task");

    let all = db
        .list_tasks(&TaskFilter::for_plan(plan.id))
        .expect("Failed to list tasks");
    assert_eq!(all.len(), 3);

    let completed = db
        .list_tasks(&TaskFilter {
            plan_id: Some(plan.id),
            status: Some(TaskStatus::Completed),
            priority: None,
        })
        .expect("Failed to list tasks");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, plan.tasks[0].id);

    let urgent = db
        .list_tasks(&TaskFilter {
            plan_id: None,
            status: None,
            priority: Some(Priority::Urgent),
        })
        .expect("Failed to list tasks");
    assert!(urgent.is_empty());
}

#[test]
fn test_plan_summaries_counts() {
    let (_temp_file, mut db) = create_test_db();

    let goal = db
        .create_goal("Goal", None, "goal")
        .expect("Failed to create goal");
    let plan = db
        .create_plan_with_tasks(goal.id, "Plan", None, &sample_generated_plan())
        .expect("Failed to create plan");

    db.update_task(
        plan.tasks[0].id,
        UpdateTaskRequest {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        },
    )
    .expect("Failed to update task");

    let summaries = db
        .list_plan_summaries(Some(goal.id))
        .expect("Failed to list summaries");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].total_tasks, 3);
    assert_eq!(summaries[0].completed_tasks, 1);
    assert_eq!(summaries[0].pending_tasks, 2);
}

#[test]
fn test_delete_goal_cascades() {
    let (_temp_file, mut db) = create_test_db();

    let goal = db
        .create_goal("Goal", None, "goal")
        .expect("Failed to create goal");
    let plan = db
        .create_plan_with_tasks(goal.id, "Plan", None, &sample_generated_plan())
        .expect("Failed to create plan");
    let task_id = plan.tasks[0].id;

    db.delete_goal(goal.id).expect("Failed to delete goal");

    assert!(db.get_goal(goal.id).expect("Query should succeed").is_none());
    assert!(db.get_plan(plan.id).expect("Query should succeed").is_none());
    assert!(db.get_task(task_id).expect("Query should succeed").is_none());
}

#[test]
fn test_delete_plan_keeps_goal() {
    let (_temp_file, mut db) = create_test_db();

    let goal = db
        .create_goal("Goal", None, "goal")
        .expect("Failed to create goal");
    let plan = db
        .create_plan_with_tasks(goal.id, "Plan", None, &sample_generated_plan())
        .expect("Failed to create plan");

    db.delete_plan(plan.id).expect("Failed to delete plan");

    assert!(db.get_plan(plan.id).expect("Query should succeed").is_none());
    let goal = db
        .get_goal(goal.id)
        .expect("Failed to get goal")
        .expect("Goal should survive");
    assert!(goal.plans.is_empty());
}
