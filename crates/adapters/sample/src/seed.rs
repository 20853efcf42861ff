//! Sample records the dashboard is demonstrated with.

use chrono::Duration;
use robodesk_domain::auth::{Role, UserAccount, UserInfo};
use robodesk_domain::error::RoboDeskError;
use robodesk_domain::id::UserId;
use robodesk_domain::inspection::{QualityInspection, Verdict};
use robodesk_domain::robot::{Robot, RobotStatus};
use robodesk_domain::task::{Frequency, Task};
use robodesk_domain::template::{ActionOption, CategoryTemplates, ConditionOption, TemplateCatalog};
use robodesk_domain::time;

pub const CUSTOMER_SERVICE: &str = "customer_service";
pub const CONTENT_OPS: &str = "content_ops";
pub const DATA_ANALYSIS: &str = "data_analysis";

fn condition(id: &str, name: &str, description: &str) -> ConditionOption {
    ConditionOption {
        id: id.into(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn action(id: &str, name: &str, description: &str) -> ActionOption {
    ActionOption {
        id: id.into(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// Condition and action templates for every sample category.
#[must_use]
pub fn catalog() -> TemplateCatalog {
    TemplateCatalog::new()
        .with_category(
            CUSTOMER_SERVICE,
            CategoryTemplates {
                conditions: vec![
                    condition("new_message", "New message", "A customer opens or continues a conversation"),
                    condition("keyword_hit", "Keyword detected", "A message contains a watched keyword"),
                    condition("negative_sentiment", "Negative sentiment", "The customer's tone turns negative"),
                    condition("idle_conversation", "Idle conversation", "No reply for more than ten minutes"),
                ],
                actions: vec![
                    action("auto_reply", "Auto reply", "Answer from the FAQ knowledge base"),
                    action("escalate", "Escalate to agent", "Hand the conversation to a human agent"),
                    action("tag_customer", "Tag customer", "Attach a follow-up tag to the customer"),
                ],
            },
        )
        .with_category(
            CONTENT_OPS,
            CategoryTemplates {
                conditions: vec![
                    condition("schedule_due", "Schedule due", "A planned publishing slot is reached"),
                    condition("trending_topic", "Trending topic", "A tracked topic enters the trending list"),
                    condition("comment_received", "New comment", "Someone comments on a published post"),
                ],
                actions: vec![
                    action("publish_post", "Publish post", "Publish the next post in the queue"),
                    action("draft_summary", "Draft summary", "Write a short summary of the topic"),
                    action("reply_comment", "Reply to comment", "Answer the comment politely"),
                ],
            },
        )
        .with_category(
            DATA_ANALYSIS,
            CategoryTemplates {
                conditions: vec![
                    condition("metric_threshold", "Metric threshold", "A KPI crosses its configured bound"),
                    condition("report_period", "Report period", "The reporting period closes"),
                ],
                actions: vec![
                    action("send_report", "Send report", "Mail the period report to subscribers"),
                    action("raise_alert", "Raise alert", "Notify the on-duty operator"),
                    action("export_sheet", "Export sheet", "Export the raw figures as a spreadsheet"),
                ],
            },
        )
}

/// Operator accounts.
#[must_use]
pub fn accounts() -> Vec<UserAccount> {
    vec![
        UserAccount::new(
            UserInfo {
                id: UserId::new(),
                username: "admin".to_string(),
                display_name: "Administrator".to_string(),
                role: Role::Admin,
            },
            "admin123",
        ),
        UserAccount::new(
            UserInfo {
                id: UserId::new(),
                username: "operator".to_string(),
                display_name: "Shift Operator".to_string(),
                role: Role::Operator,
            },
            "operator123",
        ),
    ]
}

/// Sample robots with their tasks and inspections.
///
/// # Errors
///
/// Returns a validation error if a sample record breaks a domain invariant.
pub fn workforce() -> Result<(Vec<Robot>, Vec<Task>, Vec<QualityInspection>), RoboDeskError> {
    let now = time::now();

    let aria = Robot::builder()
        .name("Aria")
        .category(CUSTOMER_SERVICE)
        .status(RobotStatus::Running)
        .description("Answers storefront chats around the clock")
        .bound_account("wecom", "support@northwind")
        .created_at(now - Duration::days(40))
        .build()?;
    let quill = Robot::builder()
        .name("Quill")
        .category(CONTENT_OPS)
        .status(RobotStatus::Idle)
        .description("Keeps the brand channels publishing")
        .bound_account("weibo", "@northwind_official")
        .created_at(now - Duration::days(21))
        .build()?;
    let ledger = Robot::builder()
        .name("Ledger")
        .category(DATA_ANALYSIS)
        .status(RobotStatus::Running)
        .description("Watches sales KPIs and compiles reports")
        .created_at(now - Duration::days(12))
        .build()?;
    let echo = Robot::builder()
        .name("Echo")
        .category(CUSTOMER_SERVICE)
        .status(RobotStatus::Offline)
        .description("After-sales follow-up")
        .bound_account("taobao", "northwind_aftersales")
        .created_at(now - Duration::days(3))
        .build()?;

    let tasks = vec![
        Task::builder()
            .robot_id(aria.id)
            .name("First response")
            .description("Greet and answer common questions")
            .frequency(Frequency::Realtime)
            .condition("new_message")
            .action("auto_reply")
            .created_at(now - Duration::days(39))
            .build()?,
        Task::builder()
            .robot_id(aria.id)
            .name("Complaint handoff")
            .frequency(Frequency::Realtime)
            .condition("negative_sentiment")
            .condition("keyword_hit")
            .action("escalate")
            .action("tag_customer")
            .created_at(now - Duration::days(30))
            .build()?,
        Task::builder()
            .robot_id(quill.id)
            .name("Morning post")
            .frequency(Frequency::Daily)
            .time("08:30")
            .condition("schedule_due")
            .action("publish_post")
            .enabled(false)
            .created_at(now - Duration::days(20))
            .build()?,
        Task::builder()
            .robot_id(ledger.id)
            .name("Weekly sales report")
            .frequency(Frequency::Weekly)
            .time("18:00")
            .condition("report_period")
            .action("send_report")
            .action("export_sheet")
            .created_at(now - Duration::days(11))
            .build()?,
    ];

    let mut inspections = Vec::new();
    for (hours_ago, robot, task, score, verdict, remarks) in [
        (2, &aria, "First response", 96, Verdict::Passed, "Accurate and polite"),
        (5, &aria, "First response", 88, Verdict::Passed, ""),
        (9, &aria, "Complaint handoff", 54, Verdict::Failed, "Escalated too late"),
        (26, &aria, "Complaint handoff", 71, Verdict::NeedsReview, "Tag missing on one case"),
        (30, &quill, "Morning post", 92, Verdict::Passed, "On schedule"),
        (50, &ledger, "Weekly sales report", 79, Verdict::NeedsReview, "Chart axis unlabeled"),
    ] {
        let mut inspection = QualityInspection::new(robot.id, task, score, verdict, remarks)?;
        inspection.inspected_at = now - Duration::hours(hours_ago);
        inspections.push(inspection);
    }

    Ok((vec![aria, quill, ledger, echo], tasks, inspections))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_sample_workforce() {
        let (robots, tasks, inspections) = workforce().unwrap();
        assert_eq!(robots.len(), 4);
        assert_eq!(tasks.len(), 4);
        assert_eq!(inspections.len(), 6);
    }

    #[test]
    fn should_only_reference_templates_of_the_robot_category() {
        let catalog = catalog();
        let (robots, tasks, _) = workforce().unwrap();
        for task in tasks {
            let robot = robots.iter().find(|r| r.id == task.robot_id).unwrap();
            assert!(task
                .conditions
                .iter()
                .all(|id| catalog.contains_condition(&robot.category, id)));
            assert!(task
                .actions
                .iter()
                .all(|id| catalog.contains_action(&robot.category, id)));
        }
    }

    #[test]
    fn should_cover_every_robot_category_in_catalog() {
        let catalog = catalog();
        let (robots, _, _) = workforce().unwrap();
        for robot in robots {
            assert!(catalog.get(&robot.category).is_some());
        }
    }
}
