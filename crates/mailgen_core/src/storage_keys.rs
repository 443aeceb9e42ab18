pub const EMAIL_KEY_PREFIX: &str = "emails";
pub const REPORT_DIR: &str = "evaluation_reports";
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub fn email_object_key(base_prefix: &str, email_id: &str) -> String {
    let trimmed = base_prefix.trim_matches('/');
    if trimmed.is_empty() {
        format!("{email_id}.json")
    } else {
        format!("{trimmed}/{email_id}.json")
    }
}

pub fn report_file_name(timestamp: &str) -> String {
    format!("evaluation_report_{timestamp}.json")
}

pub fn summary_file_name(timestamp: &str) -> String {
    format!("evaluation_summary_{timestamp}.csv")
}
