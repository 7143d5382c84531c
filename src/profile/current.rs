use crate::store::ConfigFile;

use super::catalog::ProfileCatalog;
use super::is_default_section;
use super::keys::{AWS_ACCESS_KEY_ID, DEFAULT_SECTION, ROLE_ARN, SOURCE_PROFILE};

/// Display name of the assumable profile whose role matches the config `default` section.
pub fn find_assumed_default(config: &ConfigFile) -> Option<String> {
    let default = config.section(DEFAULT_SECTION)?;
    let role_arn = default.get(ROLE_ARN)?;
    let source_profile = default.get(SOURCE_PROFILE)?;

    ProfileCatalog::build(&ConfigFile::empty(), config)
        .config_assumed_profiles()
        .iter()
        .find(|profile| {
            profile.assumed_role().is_some_and(|role| {
                role.role_arn == role_arn && role.source_profile == source_profile
            })
        })
        .map(|profile| profile.display_profile_name.clone())
}

/// Name of the credentials section sharing the access key id of `default`.
pub fn find_credentials_default(credentials: &ConfigFile) -> Option<String> {
    let access_key_id = credentials
        .section(DEFAULT_SECTION)?
        .get(AWS_ACCESS_KEY_ID)?;

    credentials
        .sections()
        .iter()
        .filter(|section| !is_default_section(section.name()))
        .find(|section| section.get(AWS_ACCESS_KEY_ID) == Some(access_key_id))
        .map(|section| section.name().to_string())
}
