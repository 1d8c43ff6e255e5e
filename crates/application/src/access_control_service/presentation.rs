use licitasis_core::PermissionLevel;

use super::*;

/// Data shown on the access-denied page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDeniedView {
    /// Name of the signed-in user.
    pub user_name: String,
    /// Raw permission level label.
    pub permission_level: String,
    /// Friendly permission level name.
    pub permission_display_name: String,
    /// What the level is allowed to do.
    pub description: String,
}

impl AccessControlService {
    /// Maps a permission level label to its friendly name.
    ///
    /// Unknown labels pass through unchanged.
    #[must_use]
    pub fn display_name(permission_level: &str) -> String {
        PermissionLevel::from_storage(permission_level)
            .display_name()
            .to_owned()
    }

    /// Builds the access-denied view for the identity.
    #[must_use]
    pub fn access_denied_view(identity: &UserIdentity) -> AccessDeniedView {
        let permission_level = identity.permission_level();

        AccessDeniedView {
            user_name: identity.display_name().to_owned(),
            permission_level: permission_level.as_str().to_owned(),
            permission_display_name: permission_level.display_name().to_owned(),
            description: permission_level.access_description().to_owned(),
        }
    }

    /// Returns the CSS class for an action button, marking it disabled when
    /// the action is not allowed.
    #[must_use]
    pub fn button_class(base_class: &str, allowed: bool) -> String {
        if allowed {
            base_class.to_owned()
        } else {
            format!("{base_class} disabled")
        }
    }
}
