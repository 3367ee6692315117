use indexmap::IndexMap;
use tracing::{info, warn};

use crate::database::activity_directory::{ActivityDirectory, DirectoryError};
use crate::models::Activity;

pub async fn list_activities(directory: &ActivityDirectory) -> IndexMap<String, Activity> {
    directory.list().await
}

/// Adds `email` to the activity and returns the confirmation message.
pub async fn signup(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    match directory.enroll(activity_name, email).await {
        Ok(enrollment) => {
            info!(activity = %enrollment.activity, email = %enrollment.email, "signup accepted");
            Ok(format!(
                "Signed up {} for {}",
                enrollment.email, enrollment.activity
            ))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, kind = e.kind(), "signup rejected");
            Err(e)
        }
    }
}

pub async fn unregister(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    match directory.withdraw(activity_name, email).await {
        Ok(enrollment) => {
            info!(activity = %enrollment.activity, email = %enrollment.email, "unregister accepted");
            Ok(format!(
                "Removed {} from {}",
                enrollment.email, enrollment.activity
            ))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, kind = e.kind(), "unregister rejected");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::activity_directory::CapacityPolicy;
    use crate::database::seed_catalog;

    fn directory() -> ActivityDirectory {
        let catalog =
            seed_catalog::build_catalog(seed_catalog::builtin_seed().unwrap()).unwrap();
        ActivityDirectory::new(catalog, CapacityPolicy::Advisory)
    }

    #[tokio::test]
    async fn messages_name_email_and_activity() {
        let dir = directory();
        let msg = signup(&dir, "Art Club", "student1@mergington.edu")
            .await
            .unwrap();
        assert_eq!(msg, "Signed up student1@mergington.edu for Art Club");

        let msg = unregister(&dir, "Art Club", "student1@mergington.edu")
            .await
            .unwrap();
        assert_eq!(msg, "Removed student1@mergington.edu from Art Club");
    }

    #[tokio::test]
    async fn errors_pass_through() {
        let dir = directory();
        let err = signup(&dir, "Chess Club", "daniel@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "daniel@mergington.edu is already signed up for this activity"
        );
        assert_eq!(list_activities(&dir).await["Chess Club"].participant_count(), 2);
    }
}
