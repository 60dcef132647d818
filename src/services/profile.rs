use serde::Deserialize;
use validator::Validate;

use crate::{
    data::find_interest,
    error::AppResult,
    models::{SocialMediaActivity, UserProfile},
};

/// Partial profile edit. Fields that are present replace the stored value
/// wholesale; absent fields are left alone.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[validate(length(min = 2, message = "First name must be at least 2 characters."))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, message = "Last name must be at least 1 character."))]
    pub last_name: Option<String>,

    #[validate(email(message = "Please enter a valid email address."))]
    pub email: Option<String>,

    pub phone_number: Option<String>,

    #[validate(length(max = 160, message = "Bio must not be longer than 160 characters."))]
    pub bio: Option<String>,

    #[validate(range(min = 18, max = 120, message = "Age must be between 18 and 120."))]
    pub age: Option<u32>,

    pub gender: Option<String>,

    #[validate(length(min = 1, message = "Please enter your occupation."))]
    pub occupation: Option<String>,

    #[validate(length(min = 1, message = "Please enter your location."))]
    pub location: Option<String>,

    /// Interest ids; unknown ids are dropped
    pub interests: Option<Vec<String>>,

    pub social_media_activity: Option<SocialMediaActivity>,
}

impl ProfileUpdate {
    /// Validates the edit and returns the profile with it applied.
    ///
    /// `profile` is never modified; on a validation failure nothing changes.
    pub fn apply_to(self, profile: &UserProfile) -> AppResult<UserProfile> {
        self.validate()?;

        let mut updated = profile.clone();
        if let Some(first_name) = self.first_name {
            updated.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            updated.last_name = last_name;
        }
        if let Some(email) = self.email {
            updated.email = email;
        }
        if let Some(phone_number) = self.phone_number {
            updated.phone_number = phone_number;
        }
        if let Some(bio) = self.bio {
            updated.bio = bio;
        }
        if let Some(age) = self.age {
            updated.age = age;
        }
        if let Some(gender) = self.gender {
            updated.gender = gender;
        }
        if let Some(occupation) = self.occupation {
            updated.occupation = occupation;
        }
        if let Some(location) = self.location {
            updated.location = location;
        }
        if let Some(activity) = self.social_media_activity {
            updated.social_media_activity = activity;
        }
        if let Some(ids) = self.interests {
            let resolved: Vec<_> = ids.iter().filter_map(|id| find_interest(id)).collect();
            if resolved.len() < ids.len() {
                tracing::warn!(
                    requested = ids.len(),
                    resolved = resolved.len(),
                    "Dropped unknown interest ids"
                );
            }
            updated.set_interests(resolved);
        }

        Ok(updated)
    }
}
