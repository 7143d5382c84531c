//! Rewrites the `default` sections so they mirror a selected profile.
//!
//! Optional fields follow one rule everywhere: copy when the selected profile has the
//! key, otherwise remove it from `default` so no stale value survives.

use crate::store::{ConfigFile, Section};

use super::{find_assumable_section, find_config_section};
use super::keys::{
    AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_SESSION_TOKEN, DEFAULT_SECTION, MFA_SERIAL,
    REGION, ROLE_ARN, SOURCE_PROFILE,
};

const CONFIG_OPTIONAL_KEYS: [&str; 2] = [REGION, MFA_SERIAL];

/// Makes the credentials profile `profile_name` the default in both files.
pub fn set_selected_profile_as_default(
    profile_name: &str,
    credentials: &mut ConfigFile,
    config: &mut ConfigFile,
) {
    let selected = credentials.section(profile_name);
    let access_key_id = value_or_empty(selected, AWS_ACCESS_KEY_ID);
    let secret_access_key = value_or_empty(selected, AWS_SECRET_ACCESS_KEY);
    let session_token = optional_value(selected, AWS_SESSION_TOKEN);

    let default = credentials.section_or_insert(DEFAULT_SECTION);
    default.set(AWS_ACCESS_KEY_ID, access_key_id);
    default.set(AWS_SECRET_ACCESS_KEY, secret_access_key);
    default.set_or_remove(AWS_SESSION_TOKEN, session_token);

    let optional = config_optional_values(find_config_section(config, profile_name));

    let default = config.section_or_insert(DEFAULT_SECTION);
    default.remove(ROLE_ARN);
    default.remove(SOURCE_PROFILE);
    apply_optional_values(default, optional);
}

/// Makes the default profile assume the role described by `profile_name`.
///
/// The credentials file is left untouched.
pub fn set_selected_assumed_profile_as_default(profile_name: &str, config: &mut ConfigFile) {
    let selected = find_assumable_section(config, profile_name);
    let role_arn = value_or_empty(selected, ROLE_ARN);
    let source_profile = value_or_empty(selected, SOURCE_PROFILE);
    let optional = config_optional_values(selected);

    let default = config.section_or_insert(DEFAULT_SECTION);
    default.set(ROLE_ARN, role_arn);
    default.set(SOURCE_PROFILE, source_profile);
    apply_optional_values(default, optional);
}

pub fn set_selected_region_as_default(region: &str, config: &mut ConfigFile) {
    config.section_or_insert(DEFAULT_SECTION).set(REGION, region);
}

fn value_or_empty(section: Option<&Section>, key: &str) -> String {
    optional_value(section, key).unwrap_or_default()
}

fn optional_value(section: Option<&Section>, key: &str) -> Option<String> {
    section.and_then(|section| section.get(key)).map(str::to_string)
}

fn config_optional_values(section: Option<&Section>) -> [(&'static str, Option<String>); 2] {
    CONFIG_OPTIONAL_KEYS.map(|key| (key, optional_value(section, key)))
}

fn apply_optional_values(default: &mut Section, values: [(&'static str, Option<String>); 2]) {
    for (key, value) in values {
        default.set_or_remove(key, value);
    }
}
