use std::path::PathBuf;
use std::sync::Arc;

use tasksmith_core::{
    generator::{GenerateRequest, GeneratedPlan, PlanProvider},
    params, PlannerBuilder, PlannerError, Priority, TaskStatus,
};
use tempfile::TempDir;

/// Helper function to create a temporary directory and database path
fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test_tasks.db");
    (temp_dir, db_path)
}

#[tokio::test]
async fn test_generate_plan_workflow() {
    let (_temp_dir, db_path) = create_test_environment();

    let planner = PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create planner");

    let plan = planner
        .generate_plan(&params::GeneratePlan {
            goal: "Launch a mobile app".to_string(),
            timeline_weeks: 8,
            context: None,
            title: None,
        })
        .await
        .expect("Failed to generate plan");

    assert_eq!(plan.title, "Plan for Launch a mobile app");
    assert_eq!(plan.tasks.len(), 12);
    assert!(plan.estimated_days > 0);
    assert!(plan.rationale.contains("mobile app"));

    // Tasks come back in template order
    for (position, task) in plan.tasks.iter().enumerate() {
        assert_eq!(task.position as usize, position);
        assert!(task.estimated_hours >= 1);
    }
    assert!(plan.tasks[0].depends_on.is_empty());

    // The goal was created alongside the plan and lists it
    let goal = planner
        .get_goal(&params::Id { id: plan.goal_id })
        .await
        .expect("Failed to get goal")
        .expect("Goal should exist");
    assert_eq!(goal.title, "Launch a mobile app");
    assert_eq!(goal.plans.len(), 1);
    assert_eq!(goal.plans[0].id, plan.id);

    // Generated dependencies reference earlier task row IDs
    for task in &plan.tasks {
        for dep in &task.depends_on {
            assert!(
                plan.tasks.iter().any(|t| t.id == *dep && t.id < task.id),
                "dependency {dep} should be an earlier task in the plan"
            );
        }
    }
}

#[tokio::test]
async fn test_generate_plan_invalid_timeline_writes_nothing() {
    let (_temp_dir, db_path) = create_test_environment();

    let planner = PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create planner");

    let result = planner
        .generate_plan(&params::GeneratePlan {
            goal: "Launch a product".to_string(),
            timeline_weeks: 0,
            context: None,
            title: None,
        })
        .await;

    match result.unwrap_err() {
        PlannerError::InvalidInput { field, .. } => assert_eq!(field, "timeline_weeks"),
        other => panic!("Expected InvalidInput error, got {other:?}"),
    }

    // Validation failed before any database write
    let goals = planner.list_goals().await.expect("Failed to list goals");
    assert!(goals.is_empty());
}

#[tokio::test]
async fn test_goal_crud() {
    let (_temp_dir, db_path) = create_test_environment();

    let planner = PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create planner");

    let goal = planner
        .create_goal(&params::CreateGoal {
            title: "Get fit".to_string(),
            description: Some("Run a 10k by spring".to_string()),
            user_input: None,
        })
        .await
        .expect("Failed to create goal");
    assert_eq!(goal.user_input, "Get fit");

    let updated = planner
        .update_goal(&params::UpdateGoal {
            id: goal.id,
            title: Some("Get fit this year".to_string()),
            description: None,
        })
        .await
        .expect("Failed to update goal");
    assert_eq!(updated.title, "Get fit this year");
    // Unset fields keep their current value
    assert_eq!(updated.description, Some("Run a 10k by spring".to_string()));

    let goals = planner.list_goals().await.expect("Failed to list goals");
    assert_eq!(goals.len(), 1);

    let deleted = planner
        .delete_goal(&params::DeleteGoal {
            id: goal.id,
            confirmed: true,
        })
        .await
        .expect("Failed to delete goal")
        .expect("Goal should exist");
    assert_eq!(deleted.id, goal.id);

    let goals = planner.list_goals().await.expect("Failed to list goals");
    assert!(goals.is_empty());
}

#[tokio::test]
async fn test_deletion_requires_confirmation() {
    let (_temp_dir, db_path) = create_test_environment();

    let planner = PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create planner");

    let plan = planner
        .generate_plan(&params::GeneratePlan {
            goal: "Plan a conference".to_string(),
            timeline_weeks: 6,
            context: None,
            title: None,
        })
        .await
        .expect("Failed to generate plan");

    let result = planner
        .delete_goal(&params::DeleteGoal {
            id: plan.goal_id,
            confirmed: false,
        })
        .await;
    assert!(matches!(
        result,
        Err(PlannerError::InvalidInput { ref field, .. }) if field == "confirmed"
    ));

    let result = planner
        .delete_plan(&params::DeletePlan {
            id: plan.id,
            confirmed: false,
        })
        .await;
    assert!(matches!(
        result,
        Err(PlannerError::InvalidInput { ref field, .. }) if field == "confirmed"
    ));

    // Nothing was deleted
    assert!(planner
        .get_plan(&params::Id { id: plan.id })
        .await
        .expect("Failed to get plan")
        .is_some());
}

#[tokio::test]
async fn test_delete_goal_cascades_to_plans_and_tasks() {
    let (_temp_dir, db_path) = create_test_environment();

    let planner = PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create planner");

    let plan = planner
        .generate_plan(&params::GeneratePlan {
            goal: "Learn Spanish".to_string(),
            timeline_weeks: 12,
            context: None,
            title: None,
        })
        .await
        .expect("Failed to generate plan");
    let task_id = plan.tasks[0].id;

    planner
        .delete_goal(&params::DeleteGoal {
            id: plan.goal_id,
            confirmed: true,
        })
        .await
        .expect("Failed to delete goal")
        .expect("Goal should exist");

    assert!(planner
        .get_plan(&params::Id { id: plan.id })
        .await
        .expect("Failed to query plan")
        .is_none());
    assert!(planner
        .get_task(&params::Id { id: task_id })
        .await
        .expect("Failed to query task")
        .is_none());
}

#[tokio::test]
async fn test_delete_plan_keeps_goal() {
    let (_temp_dir, db_path) = create_test_environment();

    let planner = PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create planner");

    let plan = planner
        .generate_plan(&params::GeneratePlan {
            goal: "Start a business".to_string(),
            timeline_weeks: 12,
            context: None,
            title: None,
        })
        .await
        .expect("Failed to generate plan");

    let deleted = planner
        .delete_plan(&params::DeletePlan {
            id: plan.id,
            confirmed: true,
        })
        .await
        .expect("Failed to delete plan")
        .expect("Plan should exist");
    assert_eq!(deleted.id, plan.id);

    let goal = planner
        .get_goal(&params::Id { id: plan.goal_id })
        .await
        .expect("Failed to get goal")
        .expect("Goal should survive plan deletion");
    assert!(goal.plans.is_empty());
}

#[tokio::test]
async fn test_task_lifecycle() {
    let (_temp_dir, db_path) = create_test_environment();

    let planner = PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create planner");

    let plan = planner
        .generate_plan(&params::GeneratePlan {
            goal: "Learn Rust".to_string(),
            timeline_weeks: 10,
            context: None,
            title: None,
        })
        .await
        .expect("Failed to generate plan");
    let last_task_id = plan.tasks.last().expect("Plan should have tasks").id;

    // Append a manual task depending on the last generated one
    let task = planner
        .add_task(&params::AddTask {
            plan_id: plan.id,
            title: "Write a blog post about it".to_string(),
            description: None,
            priority: Some("low".to_string()),
            estimated_hours: Some(4),
            due_date: None,
            depends_on: vec![last_task_id],
        })
        .await
        .expect("Failed to add task");
    assert_eq!(task.position as usize, plan.tasks.len());
    assert_eq!(task.priority, Priority::Low);
    assert_eq!(task.depends_on, vec![last_task_id]);

    // Dependencies must reference existing tasks in the same plan
    let result = planner
        .add_task(&params::AddTask {
            plan_id: plan.id,
            title: "Bad dependency".to_string(),
            description: None,
            priority: None,
            estimated_hours: None,
            due_date: None,
            depends_on: vec![99_999],
        })
        .await;
    assert!(result.is_err());

    // Mark the new task completed
    let updated = planner
        .update_task(&params::UpdateTask {
            id: task.id,
            status: Some("completed".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to update task");
    assert_eq!(updated.status, TaskStatus::Completed);

    // Status filter sees exactly the completed task
    let completed = planner
        .list_tasks(&params::ListTasks {
            plan_id: Some(plan.id),
            status: Some("completed".to_string()),
            priority: None,
        })
        .await
        .expect("Failed to list tasks");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, task.id);

    let summaries = planner
        .list_plan_summaries(&params::ListPlans { goal_id: None })
        .await
        .expect("Failed to list plan summaries");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].completed_tasks, 1);
    assert_eq!(summaries[0].total_tasks as usize, plan.tasks.len() + 1);
}

#[tokio::test]
async fn test_database_persistence_across_connections() {
    let (_temp_dir, db_path) = create_test_environment();

    let plan_id = {
        let planner = PlannerBuilder::new()
            .with_database_path(Some(db_path.clone()))
            .build()
            .await
            .expect("Failed to create first planner");

        planner
            .generate_plan(&params::GeneratePlan {
                goal: "Release a product".to_string(),
                timeline_weeks: 8,
                context: None,
                title: Some("Release plan".to_string()),
            })
            .await
            .expect("Failed to generate plan")
            .id
    };

    // Create new planner instance (simulating app restart)
    let planner = PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create second planner");

    let plan = planner
        .get_plan(&params::Id { id: plan_id })
        .await
        .expect("Failed to retrieve plan")
        .expect("Plan should exist");
    assert_eq!(plan.title, "Release plan");
    assert_eq!(plan.tasks.len(), 12);
}

struct FailingProvider;

impl PlanProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    fn generate(&self, _request: &GenerateRequest) -> tasksmith_core::Result<GeneratedPlan> {
        Err(PlannerError::Configuration {
            message: "provider unavailable".to_string(),
        })
    }
}

#[tokio::test]
async fn test_provider_failure_falls_back_to_rule_based() {
    let (_temp_dir, db_path) = create_test_environment();

    let planner = PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .with_plan_provider(Arc::new(FailingProvider))
        .build()
        .await
        .expect("Failed to create planner");

    // The provider error is swallowed; the local generator serves the plan
    let plan = planner
        .generate_plan(&params::GeneratePlan {
            goal: "Organize a company party".to_string(),
            timeline_weeks: 3,
            context: None,
            title: None,
        })
        .await
        .expect("Plan generation should fall back to the local generator");
    assert_eq!(plan.tasks.len(), 12);
    assert!(plan.rationale.contains("event planning"));
}
