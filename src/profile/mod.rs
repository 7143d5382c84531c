pub mod catalog;
pub mod current;
pub mod keys;
pub mod mutator;
pub mod resolver;

pub use catalog::{AssumedRole, Profile, ProfileCatalog, ProfileSource};
pub use mutator::{
    set_selected_assumed_profile_as_default, set_selected_profile_as_default,
    set_selected_region_as_default,
};

use crate::store::{ConfigFile, Section};

/// Strips the `profile ` prefix the config file uses for named profiles.
pub fn strip_profile_prefix(section_name: &str) -> &str {
    section_name
        .strip_prefix(keys::PROFILE_PREFIX)
        .unwrap_or(section_name)
}

pub fn is_default_section(section_name: &str) -> bool {
    section_name.eq_ignore_ascii_case(keys::DEFAULT_SECTION)
}

/// Finds the config section for `profile_name`, with or without the `profile ` prefix.
pub fn find_config_section<'a>(
    config: &'a ConfigFile,
    profile_name: &str,
) -> Option<&'a Section> {
    config
        .sections()
        .iter()
        .find(|section| strip_profile_prefix(section.name()).eq_ignore_ascii_case(profile_name))
}

/// A config section can be assumed when it names both a role and a source profile.
pub fn is_assumable_section(section: &Section) -> bool {
    section.contains_key(keys::ROLE_ARN) && section.contains_key(keys::SOURCE_PROFILE)
}

/// Finds the assumable section the catalog lists as `profile_name`.
///
/// Sections sharing the name but lacking a role (e.g. a bare `[dev]` next to
/// `[profile dev]`) are skipped.
pub fn find_assumable_section<'a>(
    config: &'a ConfigFile,
    profile_name: &str,
) -> Option<&'a Section> {
    config.sections().iter().find(|section| {
        let name = strip_profile_prefix(section.name());
        !is_default_section(name)
            && name.eq_ignore_ascii_case(profile_name)
            && is_assumable_section(section)
    })
}
