pub const DEFAULT_SECTION: &str = "default";
pub const PROFILE_PREFIX: &str = "profile ";

pub const AWS_ACCESS_KEY_ID: &str = "aws_access_key_id";
pub const AWS_SECRET_ACCESS_KEY: &str = "aws_secret_access_key";
pub const AWS_SESSION_TOKEN: &str = "aws_session_token";

pub const ROLE_ARN: &str = "role_arn";
pub const SOURCE_PROFILE: &str = "source_profile";
pub const MFA_SERIAL: &str = "mfa_serial";
pub const REGION: &str = "region";
