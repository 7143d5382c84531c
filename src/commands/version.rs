use super::Outcome;

pub fn run(version: &str) -> Outcome {
    Outcome::success(format!("aws-profile ({version})"))
}
