//! Summary card for one digital employee.

use leptos::prelude::*;
use leptos_router::components::A;
use robodesk_domain::robot::{Robot, RobotStatus};

pub(crate) fn status_badge(status: RobotStatus) -> (&'static str, &'static str) {
    match status {
        RobotStatus::Running => ("badge badge-running", "Running"),
        RobotStatus::Idle => ("badge badge-idle", "Idle"),
        RobotStatus::Offline => ("badge badge-offline", "Offline"),
    }
}

/// Human label for a category key such as `customer_service`.
pub(crate) fn category_label(category: &str) -> String {
    category
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn RobotCard(robot: Robot) -> impl IntoView {
    let (badge_class, badge_text) = status_badge(robot.status);
    let account = robot.bound_account.as_ref().map_or_else(
        || "No account bound".to_string(),
        |account| format!("{} \u{00B7} {}", account.platform, account.account_name),
    );

    view! {
        <A href=format!("/robots/{}", robot.id) attr:class="robot-card">
            <div class="robot-card-header">
                <h3>{robot.name}</h3>
                <span class=badge_class>{badge_text}</span>
            </div>
            <p class="category">{category_label(&robot.category)}</p>
            <p class="description">{robot.description}</p>
            <p class="account">{account}</p>
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_title_case_category_key() {
        assert_eq!(category_label("customer_service"), "Customer Service");
        assert_eq!(category_label("data_analysis"), "Data Analysis");
    }

    #[test]
    fn should_tolerate_stray_underscores() {
        assert_eq!(category_label("_ops_"), "Ops");
        assert_eq!(category_label(""), "");
    }
}
