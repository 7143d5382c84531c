use super::catalog::{Profile, ProfileCatalog};

impl ProfileCatalog {
    /// Case-insensitive exact match against credentials profile names.
    pub fn find_in_credentials(&self, name: &str) -> Option<&Profile> {
        find_by_name(self.credentials_profiles(), name)
    }

    /// Case-insensitive exact match against assumable profile names.
    pub fn find_in_config(&self, name: &str) -> Option<&Profile> {
        find_by_name(self.config_assumed_profiles(), name)
    }
}

fn find_by_name<'a>(profiles: &'a [Profile], name: &str) -> Option<&'a Profile> {
    profiles
        .iter()
        .find(|profile| profile.profile_name.eq_ignore_ascii_case(name))
}
